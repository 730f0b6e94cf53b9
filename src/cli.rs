use std::path::Path;

use crate::config::CatalogPaths;
use crate::data::convert::{convert, ConversionSummary};
use crate::data::validate::{validate_document, CatalogStats, ValidationReport, ValidationSeverity};
use crate::logging::init_logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Convert,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("convert") => Some(Command::Convert),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Convert) => run_convert(Path::new(".")),
        Some(Command::Validate) => run_validate(Path::new(".")),
        None => {
            eprintln!("usage: hwcatalog <convert|validate>");
            2
        }
    }
}

/// Extractor entry point. Exit 1 only on fatal conditions; skipped or unreadable sheets still exit 0.
pub fn run_convert(root: &Path) -> i32 {
    init_logging();
    let paths = CatalogPaths::under(root);
    println!("Starting hardware data conversion...");

    match convert(&paths) {
        Ok(summary) => {
            print_conversion_summary(&summary);
            0
        }
        Err(err) => {
            eprintln!("conversion failed: {err}");
            1
        }
    }
}

fn print_conversion_summary(summary: &ConversionSummary) {
    println!("Conversion completed.");
    println!("Generated files:");
    for path in &summary.tables_written {
        println!("  - {}", path.display());
    }
    println!("  - {}", summary.catalog_path.display());
    if !summary.sheets_skipped.is_empty() {
        println!("Skipped sheets: {}", summary.sheets_skipped.join(", "));
    }
    if !summary.sheets_failed.is_empty() {
        println!("Unreadable sheets: {}", summary.sheets_failed.join(", "));
    }
    println!("\nData summary:");
    println!("  - Vendors: {} ({} chassis)", summary.vendors, summary.chassis);
    println!("  - Storage drives: {}", summary.storage_drives);
    println!("  - CPUs: {}", summary.cpus);
    println!("  - Memory options: {}", summary.memory);
    println!("  - Boot drives: {}", summary.boot_drives);
}

/// Validator entry point. Exit 0 iff no errors; warnings never fail.
pub fn run_validate(root: &Path) -> i32 {
    init_logging();
    let paths = CatalogPaths::under(root);
    let path = paths.catalog_for_validation();
    println!("Starting hardware data validation...");

    let (doc, report) = match validate_document(path) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("validation aborted: {err}");
            eprintln!("Run convert_hardware_data first.");
            return 1;
        }
    };
    println!("Loaded data from {}", path.display());
    print_validation_report(&CatalogStats::from_document(&doc), &report);

    if report.passed() {
        0
    } else {
        1
    }
}

fn print_validation_report(stats: &CatalogStats, report: &ValidationReport) {
    for diag in report.with_severity(ValidationSeverity::Info) {
        println!("  ok {diag}");
    }

    println!("\nValidation summary:");
    println!("  - Total vendors: {}", stats.vendors);
    println!("  - Total storage drives: {}", stats.storage_drives);
    println!("  - Total CPUs: {}", stats.cpus);
    println!("  - Total memory options: {}", stats.memory);
    println!("  - Erasure coding schemes: {}", stats.schemes);

    let errors: Vec<_> = report.errors().collect();
    let warnings: Vec<_> = report.warnings().collect();
    if !errors.is_empty() {
        println!("\nErrors found ({}):", errors.len());
        for diag in &errors {
            println!("  - {diag}");
        }
    }
    if !warnings.is_empty() {
        println!("\nWarnings ({}):", warnings.len());
        for diag in &warnings {
            println!("  - {diag}");
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        println!("\nAll validations passed!");
    } else if errors.is_empty() {
        println!("\nValidation completed with {} warnings", warnings.len());
    } else {
        println!(
            "\nValidation failed with {} errors and {} warnings",
            errors.len(),
            warnings.len()
        );
    }
}
