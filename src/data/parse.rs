//! Field parsers for vendor-formatted strings. Unparsable input yields zero, never an error.

use serde::Serialize;

use crate::data::table::Cell;

/// Capacity string to terabytes: "15.36TB", "960GB", "2PB". Anything else is 0.
pub fn parse_capacity(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let upper = raw.to_uppercase();
    let (number, to_tb): (String, fn(f64) -> f64) = if upper.contains("TB") {
        (upper.replace("TB", ""), |v| v)
    } else if upper.contains("GB") {
        (upper.replace("GB", ""), |v| v / 1000.0)
    } else if upper.contains("PB") {
        (upper.replace("PB", ""), |v| v * 1000.0)
    } else {
        return 0.0;
    };
    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(to_tb)
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PowerDraw {
    pub active: f64,
    pub idle: f64,
}

/// "<active>/<idle>" watts, e.g. "15/5".
pub fn parse_power(raw: Option<&str>) -> PowerDraw {
    let Some(raw) = raw else {
        return PowerDraw::default();
    };
    let parts: Vec<&str> = raw.split('/').collect();
    let [active, idle] = parts.as_slice() else {
        return PowerDraw::default();
    };
    let watts = |part: &str| part.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    match (watts(*active), watts(*idle)) {
        (Some(active), Some(idle)) => PowerDraw { active, idle },
        _ => PowerDraw::default(),
    }
}

/// "<integer>GB" to gigabytes, e.g. "64GB". Anything else is 0.
pub fn parse_memory_size(raw: Option<&str>) -> u32 {
    match raw {
        Some(s) if s.contains("GB") => s.replace("GB", "").trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Preference rank from a cell; absent, negative, fractional or non-numeric means unset (0).
pub fn parse_rank(cell: Option<&Cell>) -> u32 {
    cell.and_then(Cell::as_f64)
        .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
        .unwrap_or(0)
}
