//! Stage C: reshape reloaded rows into typed catalog records.
//! Rows without vendor or model are dropped; everything else defaults rather than failing.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::config::UNSET_RANK_SORT_KEY;
use crate::data::catalog::{Chassis, Cpu, MemoryModule, SizeCategory, StorageDrive, Vendor};
use crate::data::parse::{parse_capacity, parse_memory_size, parse_power, parse_rank};
use crate::data::table::Row;

/// Candidate column names per chassis attribute: the header name, then the
/// positional name left behind when a sheet lost its header row.
mod chassis_columns {
    pub const PREFERRED: &[&str] = &["Preferred", "Column_0"];
    pub const VENDOR: &[&str] = &["Vendor", "Column_1"];
    pub const MODEL: &[&str] = &["Model", "Column_2"];
    pub const CPU_SOCKETS: &[&str] = &["CPU Sockets", "Column_4"];
    pub const FORM_FACTOR: &[&str] = &["Form Factor", "Column_5"];
    pub const DRIVE_BAYS: &[&str] = &["Drive Bay", "Column_6"];
    pub const DRIVE_TYPES: &[&str] = &["Drive Type", "Column_7"];
    pub const MEMORY_SLOTS: &[&str] = &["Memory Slots", "Column_9"];
    pub const MEMORY_MAX: &[&str] = &["Memory Max", "Column_10"];
    pub const PSU: &[&str] = &["PSU", "Column_12"];
    pub const DEPTH: &[&str] = &["Depth", "Column_13"];
    pub const VENDOR_LINK: &[&str] = &["Vendor Link", "Column_14"];
    pub const NOTES: &[&str] = &["Notes", "Column_15"];
}

const VENDOR: &[&str] = &["Vendor"];
const MODEL: &[&str] = &["Model"];
const PREFERRED: &[&str] = &["Preferred"];

/// Rank used for ordering: unset (0) sorts after every explicit rank.
pub fn rank_sort_key(preferred: u32) -> u32 {
    if preferred == 0 {
        UNSET_RANK_SORT_KEY
    } else {
        preferred
    }
}

fn vendor_and_model(row: &Row, vendor: &[&str], model: &[&str]) -> Option<(String, String)> {
    let vendor = row.text(vendor)?.trim().to_string();
    let model = row.text(model)?.trim().to_string();
    if vendor.is_empty() || model.is_empty() {
        return None;
    }
    Some((vendor, model))
}

impl Chassis {
    pub fn from_row(row: &Row) -> Option<Self> {
        use self::chassis_columns as col;

        let (vendor, model) = vendor_and_model(row, col::VENDOR, col::MODEL)?;
        let form_factor = row.text(col::FORM_FACTOR);
        let drive_bays = row.u32(col::DRIVE_BAYS);
        Some(Self {
            size_category: SizeCategory::classify(form_factor.as_deref(), drive_bays),
            vendor,
            model,
            form_factor,
            drive_bays,
            drive_types: row.cell(col::DRIVE_TYPES),
            cpu_sockets: row.cell(col::CPU_SOCKETS),
            memory_slots: row.cell(col::MEMORY_SLOTS),
            memory_max: row.cell(col::MEMORY_MAX),
            psu: row.cell(col::PSU),
            depth: row.cell(col::DEPTH),
            vendor_link: row.cell(col::VENDOR_LINK),
            notes: row.cell(col::NOTES),
            preferred: parse_rank(row.first_present(col::PREFERRED)),
        })
    }
}

impl StorageDrive {
    pub fn from_row(row: &Row) -> Option<Self> {
        let (vendor, model) = vendor_and_model(row, VENDOR, MODEL)?;
        let capacity_raw = row.text(&["Capacity"]);
        let power_raw = row.text(&["Power Active / Idle (W)"]);
        let power = parse_power(power_raw.as_deref());
        Some(Self {
            vendor,
            model,
            part_number: row.cell(&["Mfg Part #"]),
            nvme_gen: row.cell(&["NVMe Gen"]),
            form_factor: row.cell(&["Form Factor"]),
            interface: row.cell(&["Interface"]),
            technology: row.cell(&["Technology"]),
            capacity_tb: parse_capacity(capacity_raw.as_deref()),
            capacity_raw,
            seq_read_mbps: row.cell(&["Seq Read 128K (MB/s)"]),
            seq_write_mbps: row.cell(&["Seq Write 128K (MB/s)"]),
            random_read_iops: row.cell(&["Random Read 4K (IOPS)"]),
            random_write_iops: row.cell(&["Random Write 4K (IOPS)"]),
            power_active_w: power.active,
            power_idle_w: power.idle,
            power_raw,
            tech_spec_url: row.cell(&["Tech Spec Sheet"]),
            preferred: parse_rank(row.first_present(PREFERRED)),
        })
    }
}

impl Cpu {
    pub fn from_row(row: &Row) -> Option<Self> {
        let (vendor, model) = vendor_and_model(row, VENDOR, MODEL)?;
        Some(Self {
            vendor,
            model,
            line: row.cell(&["Line"]),
            cores: row.cell(&["Cores"]),
            threads: row.cell(&["Threads"]),
            boost_clock: row.cell(&["Boost Clock"]),
            base_clock: row.cell(&["Base Clock"]),
            l3_cache: row.cell(&["L3 Cache"]),
            tdp: row.cell(&["TDP"]),
            memory_type: row.cell(&["Memory"]),
            memory_channels: row.cell(&["DDR Channels"]),
            max_memory_freq: row.cell(&["Max DDR Freq. (1DPC)"]),
            memory_bandwidth: row.cell(&["Per-Socket Theoretical Memory Bandwidth"]),
            pcie_lanes: row.cell(&["PCIe® Gen 5 Lanes"]),
            socket_support: row.cell(&["2P/1P"]),
            generation: row.cell(&["Gen"]),
            year: row.cell(&["Year"]),
            codename: row.cell(&["Codename"]),
            architecture: row.cell(&["Architecture"]),
            socket: row.cell(&["Socket"]),
            preferred: parse_rank(row.first_present(PREFERRED)),
        })
    }
}

impl MemoryModule {
    pub fn from_row(row: &Row) -> Option<Self> {
        let (vendor, model) = vendor_and_model(row, VENDOR, MODEL)?;
        let size_raw = row.text(&["Size"]);
        Some(Self {
            vendor,
            model,
            description: row.cell(&["Description"]),
            size_gb: parse_memory_size(size_raw.as_deref()),
            size_raw,
            speed: row.cell(&["Speed"]),
            profile: row.cell(&["Profile"]),
            preferred: parse_rank(row.first_present(PREFERRED)),
        })
    }
}

fn collect_records<T>(category: &str, rows: &[Row], from_row: impl Fn(&Row) -> Option<T>) -> Vec<T> {
    let records: Vec<T> = rows.iter().filter_map(from_row).collect();
    let dropped = rows.len() - records.len();
    if dropped > 0 {
        warn!(category, dropped, "dropped records missing vendor or model");
    }
    info!(category, kept = records.len(), "normalized records");
    records
}

/// Group chassis by vendor. A repeated vendor/model pair keeps the last row.
pub fn normalize_chassis(rows: &[Row]) -> BTreeMap<String, Vendor> {
    let mut by_vendor: BTreeMap<String, BTreeMap<String, Chassis>> = BTreeMap::new();
    for chassis in collect_records("chassis", rows, Chassis::from_row) {
        by_vendor
            .entry(chassis.vendor.clone())
            .or_default()
            .insert(chassis.model.clone(), chassis);
    }
    by_vendor
        .into_iter()
        .map(|(name, models)| (name.clone(), Vendor::new(name, models)))
        .collect()
}

/// Most preferred first, then smallest capacity.
pub fn normalize_storage_drives(rows: &[Row]) -> Vec<StorageDrive> {
    let mut drives = collect_records("storage_drives", rows, StorageDrive::from_row);
    drives.sort_by(|a, b| {
        rank_sort_key(a.preferred)
            .cmp(&rank_sort_key(b.preferred))
            .then(a.capacity_tb.total_cmp(&b.capacity_tb))
    });
    drives
}

/// Core count for ordering; a non-numeric cell counts as zero.
fn core_count(cpu: &Cpu) -> f64 {
    cpu.cores.as_f64().unwrap_or(0.0)
}

/// Most preferred first, then highest core count.
pub fn normalize_cpus(rows: &[Row]) -> Vec<Cpu> {
    let mut cpus = collect_records("cpus", rows, Cpu::from_row);
    cpus.sort_by(|a, b| {
        rank_sort_key(a.preferred)
            .cmp(&rank_sort_key(b.preferred))
            .then(core_count(b).total_cmp(&core_count(a)))
    });
    cpus
}

/// Most preferred first, then smallest module.
pub fn normalize_memory(rows: &[Row]) -> Vec<MemoryModule> {
    let mut modules = collect_records("memory", rows, MemoryModule::from_row);
    modules.sort_by_key(|module| (rank_sort_key(module.preferred), module.size_gb));
    modules
}
