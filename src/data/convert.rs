//! Conversion pipeline: workbook → data/*.csv → data/hardware_specs.json.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::{CatalogPaths, Category};
use crate::data::catalog::{size_categories, ErasureCoding, HardwareCatalog, Metadata};
use crate::data::normalize::{normalize_chassis, normalize_cpus, normalize_memory, normalize_storage_drives};
use crate::data::table::{Row, Table};
use crate::data::workbook::{export_tables, read_workbook_tables, SheetOutcome};
use crate::error::CatalogError;

/// Reloaded rows per category. A category whose table is absent has no entry.
#[derive(Debug, Clone, Default)]
pub struct CategoryRows {
    rows: BTreeMap<Category, Vec<Row>>,
}

impl CategoryRows {
    pub fn insert(&mut self, category: Category, rows: Vec<Row>) {
        self.rows.insert(category, rows);
    }

    pub fn get(&self, category: Category) -> &[Row] {
        self.rows.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Stage B: reload each table from data/. Missing or unreadable tables become empty sets.
pub fn load_tables(paths: &CatalogPaths) -> CategoryRows {
    let mut loaded = CategoryRows::default();
    for category in Category::ALL {
        let path = paths.table(category);
        if !path.exists() {
            warn!(path = %path.display(), "table not found");
            loaded.insert(category, Vec::new());
            continue;
        }
        let rows = match Table::read_csv(&path) {
            Ok(table) => table.into_records(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unable to load table");
                Vec::new()
            }
        };
        info!(path = %path.display(), records = rows.len(), "loaded table");
        loaded.insert(category, rows);
    }
    loaded
}

/// Stage C + D: normalize every category and attach the static catalogs.
pub fn build_catalog(rows: &CategoryRows) -> HardwareCatalog {
    HardwareCatalog {
        metadata: Metadata::now(),
        vendors: normalize_chassis(rows.get(Category::Chassis)),
        storage_drives: normalize_storage_drives(rows.get(Category::StorageDrives)),
        cpus: normalize_cpus(rows.get(Category::Cpus)),
        memory: normalize_memory(rows.get(Category::Memory)),
        boot_drives: rows.get(Category::BootDrives).to_vec(),
        erasure_coding: ErasureCoding::default(),
        size_categories: size_categories(),
    }
}

pub fn write_catalog(catalog: &HardwareCatalog, paths: &CatalogPaths) -> Result<(), CatalogError> {
    if let Some(parent) = paths.catalog.parent() {
        fs::create_dir_all(parent).map_err(|err| CatalogError::io(parent, err))?;
    }
    let payload = serde_json::to_string_pretty(catalog)?;
    fs::write(&paths.catalog, payload).map_err(|err| CatalogError::io(&paths.catalog, err))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub catalog_path: PathBuf,
    pub tables_written: Vec<PathBuf>,
    pub sheets_skipped: Vec<&'static str>,
    pub sheets_failed: Vec<&'static str>,
    pub vendors: usize,
    pub chassis: usize,
    pub storage_drives: usize,
    pub cpus: usize,
    pub memory: usize,
    pub boot_drives: usize,
}

impl ConversionSummary {
    fn new(catalog: &HardwareCatalog, paths: &CatalogPaths, outcomes: &[(Category, SheetOutcome)]) -> Self {
        let mut tables_written = Vec::new();
        let mut sheets_skipped = Vec::new();
        let mut sheets_failed = Vec::new();
        for (category, outcome) in outcomes {
            match outcome {
                SheetOutcome::Written { path, .. } => tables_written.push(path.clone()),
                SheetOutcome::Empty | SheetOutcome::Missing => sheets_skipped.push(category.sheet_name()),
                SheetOutcome::Failed(_) => sheets_failed.push(category.sheet_name()),
            }
        }
        Self {
            catalog_path: paths.catalog.clone(),
            tables_written,
            sheets_skipped,
            sheets_failed,
            vendors: catalog.vendors.len(),
            chassis: catalog.vendors.values().map(|v| v.chassis.len()).sum(),
            storage_drives: catalog.storage_drives.len(),
            cpus: catalog.cpus.len(),
            memory: catalog.memory.len(),
            boot_drives: catalog.boot_drives.len(),
        }
    }
}

/// Stage B–D from whatever tables already sit in data/.
pub fn convert_tables(paths: &CatalogPaths) -> Result<HardwareCatalog, CatalogError> {
    let rows = load_tables(paths);
    let catalog = build_catalog(&rows);
    write_catalog(&catalog, paths)?;
    info!(path = %paths.catalog.display(), "wrote catalog");
    Ok(catalog)
}

/// Full run. A missing workbook aborts before anything is written; an unreadable
/// workbook or sheet is skipped and the catalog is rebuilt from the tables on disk.
pub fn convert(paths: &CatalogPaths) -> Result<ConversionSummary, CatalogError> {
    if !paths.workbook.exists() {
        return Err(CatalogError::WorkbookNotFound(paths.workbook.clone()));
    }
    info!(path = %paths.workbook.display(), "converting workbook to tables");
    let tables = read_workbook_tables(&paths.workbook)?;
    let outcomes = export_tables(tables, paths)?;

    let catalog = convert_tables(paths)?;
    Ok(ConversionSummary::new(&catalog, paths, &outcomes))
}
