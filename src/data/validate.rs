use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::config::{
    MAX_CATALOG_SIZE_MB, MAX_PLAUSIBLE_CAPACITY_TB, MAX_PLAUSIBLE_CORES, MAX_PLAUSIBLE_SEQ_READ_MBPS,
    MIN_CATALOG_SIZE_MB, MIN_PREFERRED_CPUS, MIN_PREFERRED_DRIVES, PREFERRED_RANK_CUTOFF,
};
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn error(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationSeverity::Error, context, message);
    }

    pub fn warning(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationSeverity::Warning, context, message);
    }

    pub fn info(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationSeverity::Info, context, message);
    }

    pub fn with_severity(
        &self,
        severity: ValidationSeverity,
    ) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diag| diag.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.with_severity(ValidationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.with_severity(ValidationSeverity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Append another report's findings after this one's.
    pub fn merge(&mut self, other: ValidationReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Warnings never fail a run.
    pub fn passed(&self) -> bool {
        !self.has_errors()
    }
}

/// Counts printed in the report summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub vendors: usize,
    pub storage_drives: usize,
    pub cpus: usize,
    pub memory: usize,
    pub schemes: usize,
}

impl CatalogStats {
    pub fn from_document(doc: &Value) -> Self {
        let object_len = |v: Option<&Value>| v.and_then(Value::as_object).map_or(0, Map::len);
        let array_len = |v: Option<&Value>| v.and_then(Value::as_array).map_or(0, Vec::len);
        Self {
            vendors: object_len(doc.get("vendors")),
            storage_drives: array_len(doc.get("storage_drives")),
            cpus: array_len(doc.get("cpus")),
            memory: array_len(doc.get("memory")),
            schemes: object_len(doc.pointer("/erasure_coding/schemes")),
        }
    }
}

const REQUIRED_KEYS: &[&str] = &[
    "metadata",
    "vendors",
    "storage_drives",
    "cpus",
    "memory",
    "erasure_coding",
];
const METADATA_KEYS: &[&str] = &["version", "generated", "description"];
const DRIVE_REQUIRED_FIELDS: &[&str] = &[
    "vendor",
    "model",
    "capacity_tb",
    "seq_read_mbps",
    "power_active_w",
];
const CPU_REQUIRED_FIELDS: &[&str] = &["vendor", "model", "cores"];
const RECOMMENDED_SCHEMES: &[&str] = &["EC 8:3", "EC 8:2", "EC 8:4"];
const EFFICIENCY_TOLERANCE: f64 = 0.001;

/// Read and parse the consolidated document. Either failure is fatal for the run.
pub fn load_document(path: &Path) -> Result<Value, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::DocumentNotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|err| CatalogError::io(path, err))?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::DocumentParse {
        path: path.to_path_buf(),
        source,
    })
}

fn is_missing(object: &Value, field: &str) -> bool {
    object.get(field).map_or(true, Value::is_null)
}

/// Numeric ranks and numeric strings ("1") are honored; anything else is unset.
fn rank(record: &Value) -> f64 {
    match record.get("preferred") {
        Some(Value::String(raw)) => raw.trim().parse::<f64>().unwrap_or(0.0),
        Some(value) => value.as_f64().unwrap_or(0.0),
        None => 0.0,
    }
}

fn is_preferred(record: &Value) -> bool {
    rank(record) <= PREFERRED_RANK_CUTOFF as f64
}

fn model_label(record: &Value) -> &str {
    record
        .get("model")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
}

fn records<'a>(doc: &'a Value, key: &str) -> &'a [Value] {
    doc.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn validate_structure(doc: &Value, report: &mut ValidationReport) {
    if !doc.is_object() {
        report.error("catalog", "document is not a JSON object");
        return;
    }
    for key in REQUIRED_KEYS {
        if doc.get(*key).is_none() {
            report.error("catalog", format!("missing required key: {key}"));
        }
    }
    if let Some(metadata) = doc.get("metadata") {
        for key in METADATA_KEYS {
            if metadata.get(*key).is_none() {
                report.warning("metadata", format!("missing metadata key: {key}"));
            }
        }
    }
}

pub fn validate_vendors(doc: &Value, report: &mut ValidationReport) {
    let vendors = match doc.get("vendors").and_then(Value::as_object) {
        Some(vendors) if !vendors.is_empty() => vendors,
        _ => {
            report.error("vendors", "no vendor data found");
            return;
        }
    };

    for (vendor_name, vendor) in vendors {
        let context = format!("vendors['{vendor_name}']");
        if let Some(name) = vendor.get("name").and_then(Value::as_str) {
            if name != vendor_name {
                report.error(
                    context.clone(),
                    format!("name '{name}' does not match vendor key"),
                );
            }
        }

        let Some(chassis) = vendor.get("chassis") else {
            report.error(context, format!("vendor {vendor_name} missing chassis data"));
            continue;
        };

        if vendor.get("supported_sizes").is_none() {
            report.warning(
                context.clone(),
                format!("vendor {vendor_name} missing supported_sizes"),
            );
        }

        let chassis_count = match chassis {
            Value::Object(models) => {
                for (model, record) in models {
                    match record.get("vendor").and_then(Value::as_str) {
                        Some(owner) if owner != vendor_name => report.error(
                            format!("{context}.chassis['{model}']"),
                            format!("chassis vendor '{owner}' does not match vendor key"),
                        ),
                        _ => {}
                    }
                }
                models.len()
            }
            Value::Array(models) => models.len(),
            _ => {
                report.error(format!("{context}.chassis"), "expected object");
                continue;
            }
        };

        if chassis_count == 0 {
            report.warning(context, format!("vendor {vendor_name} has no chassis models"));
        } else {
            report.info(
                context,
                format!("vendor {vendor_name}: {chassis_count} chassis models"),
            );
        }
    }
}

pub fn validate_storage_drives(doc: &Value, report: &mut ValidationReport) {
    let drives = records(doc, "storage_drives");
    if drives.is_empty() {
        report.error("storage_drives", "no storage drive data found");
        return;
    }

    let mut preferred = 0usize;
    for (index, drive) in drives.iter().enumerate() {
        let context = format!("storage_drives[{index}]");
        for field in DRIVE_REQUIRED_FIELDS {
            if is_missing(drive, field) {
                report.error(
                    context.clone(),
                    format!("missing required field '{field}'"),
                );
            }
        }
        if is_preferred(drive) {
            preferred += 1;
        }

        let model = model_label(drive);
        if let Some(capacity) = drive.get("capacity_tb").and_then(Value::as_f64) {
            if capacity > MAX_PLAUSIBLE_CAPACITY_TB {
                report.warning(
                    context.clone(),
                    format!("drive {model}: unusually high capacity ({capacity}TB)"),
                );
            }
        }
        if let Some(read) = drive.get("seq_read_mbps").and_then(Value::as_f64) {
            if read > MAX_PLAUSIBLE_SEQ_READ_MBPS {
                report.warning(
                    context,
                    format!("drive {model}: unusually high read speed ({read} MB/s)"),
                );
            }
        }
    }

    report.info(
        "storage_drives",
        format!("{} total, {preferred} preferred", drives.len()),
    );
}

pub fn validate_cpus(doc: &Value, report: &mut ValidationReport) {
    let cpus = records(doc, "cpus");
    if cpus.is_empty() {
        report.error("cpus", "no CPU data found");
        return;
    }

    let mut preferred = 0usize;
    for (index, cpu) in cpus.iter().enumerate() {
        let context = format!("cpus[{index}]");
        for field in CPU_REQUIRED_FIELDS {
            if is_missing(cpu, field) {
                report.error(
                    context.clone(),
                    format!("missing required field '{field}'"),
                );
            }
        }
        if is_preferred(cpu) {
            preferred += 1;
        }
        if let Some(cores) = cpu.get("cores").and_then(Value::as_f64) {
            if cores > MAX_PLAUSIBLE_CORES as f64 {
                report.warning(
                    context,
                    format!(
                        "CPU {}: unusually high core count ({cores})",
                        model_label(cpu)
                    ),
                );
            }
        }
    }

    report.info("cpus", format!("{} total, {preferred} preferred", cpus.len()));
}

pub fn validate_erasure_coding(doc: &Value, report: &mut ValidationReport) {
    let Some(schemes) = doc
        .pointer("/erasure_coding/schemes")
        .and_then(Value::as_object)
    else {
        report.error("erasure_coding", "no erasure coding schemes found");
        return;
    };

    for name in RECOMMENDED_SCHEMES {
        if !schemes.contains_key(*name) {
            report.warning(
                "erasure_coding",
                format!("missing recommended scheme: {name}"),
            );
        }
    }

    for (name, scheme) in schemes {
        let context = format!("erasure_coding.schemes['{name}']");
        let data = scheme.get("data_blocks").and_then(Value::as_f64);
        let parity = scheme.get("parity_blocks").and_then(Value::as_f64);
        let (Some(data), Some(parity)) = (data, parity) else {
            report.error(context, "missing data_blocks or parity_blocks");
            continue;
        };
        if data + parity <= 0.0 {
            report.error(context, "scheme has no blocks");
            continue;
        }
        let expected = data / (data + parity);
        let actual = scheme
            .get("efficiency")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        if (expected - actual).abs() > EFFICIENCY_TOLERANCE {
            report.error(
                context,
                format!("efficiency mismatch (expected {expected:.3}, got {actual:.3})"),
            );
        }
    }

    report.info(
        "erasure_coding",
        format!("{} schemes defined", schemes.len()),
    );
}

pub fn validate_consistency(doc: &Value, report: &mut ValidationReport) {
    let vendor_names: BTreeSet<&str> = doc
        .get("vendors")
        .and_then(Value::as_object)
        .map(|vendors| vendors.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let drives = records(doc, "storage_drives");
    let missing: Vec<&str> = drives
        .iter()
        .filter_map(|drive| drive.get("vendor").and_then(Value::as_str))
        .filter(|vendor| !vendor_names.contains(vendor))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !missing.is_empty() {
        report.warning(
            "consistency",
            format!(
                "drive vendors not in chassis vendors: {}",
                missing.join(", ")
            ),
        );
    }

    let preferred_drives = drives.iter().filter(|d| is_preferred(d)).count();
    if preferred_drives < MIN_PREFERRED_DRIVES {
        report.warning(
            "consistency",
            format!(
                "only {preferred_drives} preferred drives available (recommend at least {MIN_PREFERRED_DRIVES})"
            ),
        );
    }

    let preferred_cpus = records(doc, "cpus")
        .iter()
        .filter(|c| is_preferred(c))
        .count();
    if preferred_cpus < MIN_PREFERRED_CPUS {
        report.warning(
            "consistency",
            format!(
                "only {preferred_cpus} preferred CPUs available (recommend at least {MIN_PREFERRED_CPUS})"
            ),
        );
    }
}

/// Size plausibility of the artifact on disk; independent of its content.
pub fn check_artifact_size(path: &Path, report: &mut ValidationReport) {
    let Ok(meta) = fs::metadata(path) else {
        report.warning(
            "artifact",
            format!("catalog file not found at {}", path.display()),
        );
        return;
    };
    let size_mb = meta.len() as f64 / (1024.0 * 1024.0);
    if size_mb > MAX_CATALOG_SIZE_MB {
        report.warning(
            "artifact",
            format!("catalog file is large ({size_mb:.1}MB) - may impact loading performance"),
        );
    } else if size_mb < MIN_CATALOG_SIZE_MB {
        report.warning(
            "artifact",
            format!("catalog file is small ({size_mb:.1}MB) - may have incomplete data"),
        );
    } else {
        report.info("artifact", format!("catalog file size: {size_mb:.1}MB"));
    }
}

/// Run every content check. Findings accumulate; no check stops another.
pub fn validate_catalog(doc: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_structure(doc, &mut report);
    validate_vendors(doc, &mut report);
    validate_storage_drives(doc, &mut report);
    validate_cpus(doc, &mut report);
    validate_erasure_coding(doc, &mut report);
    validate_consistency(doc, &mut report);
    report
}

/// Load, run content checks, then the artifact size check.
pub fn validate_document(path: &Path) -> Result<(Value, ValidationReport), CatalogError> {
    let doc = load_document(path)?;
    let mut report = validate_catalog(&doc);
    let mut artifact = ValidationReport::default();
    check_artifact_size(path, &mut artifact);
    report.merge(artifact);
    Ok((doc, report))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn drive(vendor: &str, model: &str, preferred: u32) -> Value {
        json!({
            "vendor": vendor,
            "model": model,
            "capacity_tb": 15.36,
            "seq_read_mbps": 7000,
            "power_active_w": 20.0,
            "preferred": preferred
        })
    }

    fn cpu(model: &str, cores: u32, preferred: u32) -> Value {
        json!({"vendor": "AMD", "model": model, "cores": cores, "preferred": preferred})
    }

    fn scheme(data: u32, parity: u32) -> Value {
        json!({
            "data_blocks": data,
            "parity_blocks": parity,
            "efficiency": data as f64 / (data + parity) as f64
        })
    }

    fn valid_document() -> Value {
        json!({
            "metadata": {"version": "1.0", "generated": "2026-01-01T00:00:00Z", "description": "test"},
            "vendors": {
                "Supermicro": {
                    "name": "Supermicro",
                    "chassis": {"ASG-1115S": {"vendor": "Supermicro", "model": "ASG-1115S"}},
                    "supported_sizes": ["small"]
                }
            },
            "storage_drives": [
                drive("Supermicro", "a", 1),
                drive("Supermicro", "b", 1),
                drive("Supermicro", "c", 2)
            ],
            "cpus": [cpu("9554", 64, 1), cpu("9354", 32, 2)],
            "memory": [],
            "erasure_coding": {
                "default_scheme": "EC 8:3",
                "schemes": {"EC 8:3": scheme(8, 3), "EC 8:2": scheme(8, 2), "EC 8:4": scheme(8, 4)}
            }
        })
    }

    fn messages(report: &ValidationReport, severity: ValidationSeverity) -> Vec<String> {
        report
            .with_severity(severity)
            .map(|d| d.message.clone())
            .collect()
    }

    #[test]
    fn valid_document_has_no_errors_or_warnings() {
        let report = validate_catalog(&valid_document());
        assert!(report.passed());
        assert_eq!(report.warnings().count(), 0, "{:?}", report.diagnostics);
    }

    #[test]
    fn missing_top_level_key_is_an_error() {
        let mut doc = valid_document();
        doc.as_object_mut().unwrap().remove("memory");
        doc["metadata"].as_object_mut().unwrap().remove("generated");
        let mut report = ValidationReport::default();
        validate_structure(&doc, &mut report);
        assert_eq!(
            messages(&report, ValidationSeverity::Error),
            vec!["missing required key: memory"]
        );
        assert_eq!(
            messages(&report, ValidationSeverity::Warning),
            vec!["missing metadata key: generated"]
        );
    }

    #[test]
    fn vendor_without_chassis_is_error_and_empty_chassis_is_warning() {
        let doc = json!({
            "vendors": {
                "Dell": {"name": "Dell", "supported_sizes": []},
                "HPE": {"name": "HPE", "chassis": {}}
            }
        });
        let mut report = ValidationReport::default();
        validate_vendors(&doc, &mut report);
        assert_eq!(
            messages(&report, ValidationSeverity::Error),
            vec!["vendor Dell missing chassis data"]
        );
        assert_eq!(
            messages(&report, ValidationSeverity::Warning),
            vec![
                "vendor HPE missing supported_sizes",
                "vendor HPE has no chassis models"
            ]
        );
    }

    #[test]
    fn chassis_vendor_must_match_vendor_key() {
        let doc = json!({
            "vendors": {
                "Dell": {
                    "name": "Dell",
                    "chassis": {"R660": {"vendor": "HPE"}},
                    "supported_sizes": ["medium"]
                }
            }
        });
        let mut report = ValidationReport::default();
        validate_vendors(&doc, &mut report);
        assert!(report.has_errors());
    }

    #[test]
    fn each_missing_drive_field_is_reported() {
        let doc = json!({
            "storage_drives": [{"vendor": "Kioxia", "model": null, "capacity_tb": 1.0}]
        });
        let mut report = ValidationReport::default();
        validate_storage_drives(&doc, &mut report);
        assert_eq!(
            messages(&report, ValidationSeverity::Error),
            vec![
                "missing required field 'model'",
                "missing required field 'seq_read_mbps'",
                "missing required field 'power_active_w'"
            ]
        );
    }

    #[test]
    fn implausible_drive_and_cpu_values_are_warnings() {
        let mut big = drive("Kioxia", "LC9", 1);
        big["capacity_tb"] = json!(245.76);
        big["seq_read_mbps"] = json!(14000);
        let doc = json!({"storage_drives": [big], "cpus": [cpu("Sierra", 288, 1)]});

        let mut report = ValidationReport::default();
        validate_storage_drives(&doc, &mut report);
        validate_cpus(&doc, &mut report);
        assert!(report.passed());
        assert_eq!(report.warnings().count(), 3);
    }

    #[test]
    fn empty_categories_are_errors() {
        let doc = json!({"vendors": {}, "storage_drives": [], "cpus": []});
        let report = validate_catalog(&doc);
        let errors = messages(&report, ValidationSeverity::Error);
        assert!(errors.contains(&"no vendor data found".to_string()));
        assert!(errors.contains(&"no storage drive data found".to_string()));
        assert!(errors.contains(&"no CPU data found".to_string()));
        assert!(errors.contains(&"no erasure coding schemes found".to_string()));
    }

    #[test]
    fn efficiency_mismatch_is_error_and_missing_scheme_is_warning() {
        let mut bad = scheme(8, 3);
        bad["efficiency"] = json!(0.8);
        let doc = json!({
            "erasure_coding": {"schemes": {"EC 8:3": bad, "EC 8:2": scheme(8, 2), "EC 4:2": scheme(4, 2)}}
        });
        let mut report = ValidationReport::default();
        validate_erasure_coding(&doc, &mut report);
        assert_eq!(
            messages(&report, ValidationSeverity::Error),
            vec!["efficiency mismatch (expected 0.727, got 0.800)"]
        );
        assert_eq!(
            messages(&report, ValidationSeverity::Warning),
            vec!["missing recommended scheme: EC 8:4"]
        );
    }

    #[test]
    fn consistency_flags_unknown_drive_vendors_and_few_preferred() {
        let doc = json!({
            "vendors": {"Dell": {}},
            "storage_drives": [drive("Kioxia", "a", 5), drive("Dell", "b", 1), drive("Micron", "c", 3)],
            "cpus": [cpu("x", 8, 4)]
        });
        let mut report = ValidationReport::default();
        validate_consistency(&doc, &mut report);
        assert!(report.passed());
        assert_eq!(
            messages(&report, ValidationSeverity::Warning),
            vec![
                "drive vendors not in chassis vendors: Kioxia, Micron",
                "only 1 preferred drives available (recommend at least 3)",
                "only 0 preferred CPUs available (recommend at least 2)"
            ]
        );
    }

    #[test]
    fn unset_rank_counts_as_preferred() {
        assert!(is_preferred(&json!({"preferred": 0})));
        assert!(is_preferred(&json!({})));
        assert!(!is_preferred(&json!({"preferred": 3})));
    }

    #[test]
    fn string_ranks_are_read_as_numbers() {
        assert!(is_preferred(&json!({"preferred": "1"})));
        assert!(!is_preferred(&json!({"preferred": " 3 "})));
        assert!(is_preferred(&json!({"preferred": "high"})));
    }

    #[test]
    fn merge_appends_diagnostics_in_order() {
        let mut report = ValidationReport::default();
        report.info("cpus", "2 total, 2 preferred");
        let mut other = ValidationReport::default();
        other.warning("artifact", "catalog file is small");
        other.error("vendors", "no vendor data found");

        report.merge(other);
        let contexts: Vec<&str> = report.diagnostics.iter().map(|d| d.context.as_str()).collect();
        assert_eq!(contexts, vec!["cpus", "artifact", "vendors"]);
        assert!(report.has_errors());
    }

    #[test]
    fn document_report_includes_artifact_findings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hardware_specs.json");
        fs::write(&path, valid_document().to_string()).unwrap();

        let (_, report) = validate_document(&path).unwrap();
        assert!(report.passed());
        let last = report.diagnostics.last().unwrap();
        assert_eq!(last.context, "artifact");
        assert!(last.message.contains("small"));
    }

    #[test]
    fn artifact_size_warns_when_missing_or_small() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hardware_specs.json");

        let mut report = ValidationReport::default();
        check_artifact_size(&path, &mut report);
        assert_eq!(report.warnings().count(), 1);

        fs::write(&path, "{}").unwrap();
        let mut report = ValidationReport::default();
        check_artifact_size(&path, &mut report);
        assert!(messages(&report, ValidationSeverity::Warning)[0].contains("small"));

        fs::write(&path, vec![b' '; 200 * 1024]).unwrap();
        let mut report = ValidationReport::default();
        check_artifact_size(&path, &mut report);
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn unreadable_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hardware_specs.json");
        assert!(matches!(
            load_document(&path),
            Err(CatalogError::DocumentNotFound(_))
        ));
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            load_document(&path),
            Err(CatalogError::DocumentParse { .. })
        ));
    }

    #[test]
    fn stats_count_each_category() {
        let stats = CatalogStats::from_document(&valid_document());
        assert_eq!(
            stats,
            CatalogStats {
                vendors: 1,
                storage_drives: 3,
                cpus: 2,
                memory: 0,
                schemes: 3
            }
        );
    }
}
