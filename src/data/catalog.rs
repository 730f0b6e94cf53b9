//! Consolidated hardware catalog: the JSON document handed to the sizing calculator.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::config::{CATALOG_DESCRIPTION, CATALOG_VERSION, DEFAULT_EC_SCHEME};
use crate::data::table::{Cell, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [SizeCategory::Small, SizeCategory::Medium, SizeCategory::Large];

    /// 1U with at most 8 bays is small; any 2U, or 24+ bays, is large; everything else medium.
    pub fn classify(form_factor: Option<&str>, drive_bays: Option<u32>) -> SizeCategory {
        if form_factor == Some("1U") && drive_bays.is_some_and(|bays| bays > 0 && bays <= 8) {
            SizeCategory::Small
        } else if form_factor == Some("2U") || drive_bays.is_some_and(|bays| bays >= 24) {
            SizeCategory::Large
        } else {
            SizeCategory::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn descriptor(&self) -> SizeCategoryInfo {
        match self {
            Self::Small => SizeCategoryInfo {
                description: "1U servers with 8-16 drive bays",
                typical_form_factor: "1U",
                drive_bay_range: [8, 16],
            },
            Self::Medium => SizeCategoryInfo {
                description: "1U servers with 16-24 drive bays",
                typical_form_factor: "1U",
                drive_bay_range: [16, 24],
            },
            Self::Large => SizeCategoryInfo {
                description: "2U servers with 24-32+ drive bays",
                typical_form_factor: "2U",
                drive_bay_range: [24, 64],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeCategoryInfo {
    pub description: &'static str,
    pub typical_form_factor: &'static str,
    pub drive_bay_range: [u32; 2],
}

pub fn size_categories() -> BTreeMap<&'static str, SizeCategoryInfo> {
    SizeCategory::ALL
        .iter()
        .map(|category| (category.as_str(), category.descriptor()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErasureCodingScheme {
    pub data_blocks: u32,
    pub parity_blocks: u32,
    pub total_blocks: u32,
    pub efficiency: f64,
    pub min_drives: u32,
    pub fault_tolerance: u32,
}

impl ErasureCodingScheme {
    pub fn new(data_blocks: u32, parity_blocks: u32) -> Self {
        let total_blocks = data_blocks + parity_blocks;
        Self {
            data_blocks,
            parity_blocks,
            total_blocks,
            efficiency: data_blocks as f64 / total_blocks as f64,
            min_drives: total_blocks,
            fault_tolerance: parity_blocks,
        }
    }

    pub fn name(&self) -> String {
        format!("EC {}:{}", self.data_blocks, self.parity_blocks)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErasureCoding {
    pub default_scheme: String,
    pub schemes: BTreeMap<String, ErasureCodingScheme>,
}

impl Default for ErasureCoding {
    fn default() -> Self {
        let schemes = [(8, 3), (8, 2), (8, 4)]
            .into_iter()
            .map(|(data, parity)| {
                let scheme = ErasureCodingScheme::new(data, parity);
                (scheme.name(), scheme)
            })
            .collect();
        Self {
            default_scheme: DEFAULT_EC_SCHEME.to_string(),
            schemes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub version: String,
    pub generated: String,
    pub description: String,
}

impl Metadata {
    pub fn now() -> Self {
        Self {
            version: CATALOG_VERSION.to_string(),
            generated: chrono::Utc::now().to_rfc3339(),
            description: CATALOG_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chassis {
    pub vendor: String,
    pub model: String,
    pub form_factor: Option<String>,
    pub drive_bays: Option<u32>,
    pub drive_types: Cell,
    pub cpu_sockets: Cell,
    pub memory_slots: Cell,
    pub memory_max: Cell,
    pub size_category: SizeCategory,
    pub psu: Cell,
    pub depth: Cell,
    pub vendor_link: Cell,
    pub notes: Cell,
    pub preferred: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vendor {
    pub name: String,
    pub chassis: BTreeMap<String, Chassis>,
    pub supported_sizes: Vec<SizeCategory>,
}

impl Vendor {
    pub fn new(name: String, chassis: BTreeMap<String, Chassis>) -> Self {
        let supported_sizes = chassis
            .values()
            .map(|c| c.size_category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self {
            name,
            chassis,
            supported_sizes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageDrive {
    pub vendor: String,
    pub model: String,
    pub part_number: Cell,
    pub nvme_gen: Cell,
    pub form_factor: Cell,
    pub interface: Cell,
    pub technology: Cell,
    pub capacity_tb: f64,
    pub capacity_raw: Option<String>,
    pub seq_read_mbps: Cell,
    pub seq_write_mbps: Cell,
    pub random_read_iops: Cell,
    pub random_write_iops: Cell,
    pub power_active_w: f64,
    pub power_idle_w: f64,
    pub power_raw: Option<String>,
    pub tech_spec_url: Cell,
    pub preferred: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cpu {
    pub vendor: String,
    pub model: String,
    pub line: Cell,
    pub cores: Cell,
    pub threads: Cell,
    pub boost_clock: Cell,
    pub base_clock: Cell,
    pub l3_cache: Cell,
    pub tdp: Cell,
    pub memory_type: Cell,
    pub memory_channels: Cell,
    pub max_memory_freq: Cell,
    pub memory_bandwidth: Cell,
    pub pcie_lanes: Cell,
    pub socket_support: Cell,
    pub generation: Cell,
    pub year: Cell,
    pub codename: Cell,
    pub architecture: Cell,
    pub socket: Cell,
    pub preferred: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryModule {
    pub vendor: String,
    pub model: String,
    pub description: Cell,
    pub size_gb: u32,
    pub size_raw: Option<String>,
    pub speed: Cell,
    pub profile: Cell,
    pub preferred: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HardwareCatalog {
    pub metadata: Metadata,
    pub vendors: BTreeMap<String, Vendor>,
    pub storage_drives: Vec<StorageDrive>,
    pub cpus: Vec<Cpu>,
    pub memory: Vec<MemoryModule>,
    pub boot_drives: Vec<Row>,
    pub erasure_coding: ErasureCoding,
    pub size_categories: BTreeMap<&'static str, SizeCategoryInfo>,
}
