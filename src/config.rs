//! Fixed artifact locations and tuning constants.
//! Every path is relative to a root: the working directory for the binaries, a scratch dir in tests.

use std::path::{Path, PathBuf};

pub const DEFAULT_WORKBOOK_PATH: &str = "hardware_platforms.xlsx";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CATALOG_PATH: &str = "data/hardware_specs.json";
pub const PUBLISHED_CATALOG_PATH: &str = "public/data/hardware_specs.json";

pub const CATALOG_VERSION: &str = "1.0";
pub const CATALOG_DESCRIPTION: &str = "Hardware Calculator - Hardware Specifications";
pub const DEFAULT_EC_SCHEME: &str = "EC 8:3";

/// Columns missing in more than this share of rows are dropped during extraction.
pub const MAX_MISSING_RATIO: f64 = 0.9;

/// Sort key used in place of an unset (zero) preference rank.
pub const UNSET_RANK_SORT_KEY: u32 = 99;
pub const PREFERRED_RANK_CUTOFF: i64 = 2;
pub const MIN_PREFERRED_DRIVES: usize = 3;
pub const MIN_PREFERRED_CPUS: usize = 2;

pub const MAX_PLAUSIBLE_CAPACITY_TB: f64 = 100.0;
pub const MAX_PLAUSIBLE_SEQ_READ_MBPS: f64 = 10_000.0;
pub const MAX_PLAUSIBLE_CORES: i64 = 128;

pub const MIN_CATALOG_SIZE_MB: f64 = 0.1;
pub const MAX_CATALOG_SIZE_MB: f64 = 5.0;

/// Category keys used in the consolidated document and for reloading tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Chassis,
    Cpus,
    Memory,
    StorageDrives,
    BootDrives,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Chassis,
        Category::Cpus,
        Category::Memory,
        Category::StorageDrives,
        Category::BootDrives,
    ];

    /// Worksheet name in the vendor workbook.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Self::Chassis => "Chassis",
            Self::Cpus => "CPUs",
            Self::Memory => "Memory",
            Self::StorageDrives => "StorageDrive",
            Self::BootDrives => "BootDrive",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Chassis => "chassis",
            Self::Cpus => "cpus",
            Self::Memory => "memory",
            Self::StorageDrives => "storage_drives",
            Self::BootDrives => "boot_drives",
        }
    }

    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.key())
    }
}

#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub workbook: PathBuf,
    pub data_dir: PathBuf,
    pub catalog: PathBuf,
    pub published_catalog: PathBuf,
}

impl CatalogPaths {
    pub fn under(root: &Path) -> Self {
        Self {
            workbook: root.join(DEFAULT_WORKBOOK_PATH),
            data_dir: root.join(DEFAULT_DATA_DIR),
            catalog: root.join(DEFAULT_CATALOG_PATH),
            published_catalog: root.join(PUBLISHED_CATALOG_PATH),
        }
    }

    pub fn table(&self, category: Category) -> PathBuf {
        self.data_dir.join(category.csv_file_name())
    }

    /// Document the validator should read: the published copy when present.
    pub fn catalog_for_validation(&self) -> &Path {
        if self.published_catalog.exists() {
            &self.published_catalog
        } else {
            &self.catalog
        }
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self::under(Path::new("."))
    }
}
