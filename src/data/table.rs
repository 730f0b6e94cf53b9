//! Tabular intermediate: one cleaned table per worksheet, persisted as CSV under data/.
//! Missing cells are `Cell::Empty` and serialize as JSON null.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::MAX_MISSING_RATIO;
use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    /// Infer a typed cell from raw text: integers first, then finite floats, then booleans.
    pub fn from_text(raw: &str) -> Cell {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Cell::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Cell::Float(f);
            }
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Cell::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Cell::Bool(false);
        }
        Cell::Text(raw.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) => Some(f.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
            Cell::Text(s) => Some(s.clone()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            Cell::Empty | Cell::Bool(_) => None,
        }
    }

    fn to_csv_field(&self) -> String {
        self.as_text().unwrap_or_default()
    }
}

/// One reloaded record: column header → cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Cell)>) -> Self {
        Self {
            cells: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// First non-empty cell among `candidates`, in order. Supports header-less sheets
    /// where only positional `Column_N` names survive.
    pub fn first_present(&self, candidates: &[&str]) -> Option<&Cell> {
        candidates
            .iter()
            .filter_map(|name| self.cells.get(*name))
            .find(|cell| !cell.is_empty())
    }

    pub fn cell(&self, candidates: &[&str]) -> Cell {
        self.first_present(candidates).cloned().unwrap_or(Cell::Empty)
    }

    pub fn text(&self, candidates: &[&str]) -> Option<String> {
        self.first_present(candidates).and_then(Cell::as_text)
    }

    pub fn f64(&self, candidates: &[&str]) -> Option<f64> {
        self.first_present(candidates).and_then(Cell::as_f64)
    }

    /// Whole, non-negative numbers only; `12.7` is rejected rather than truncated.
    pub fn u32(&self, candidates: &[&str]) -> Option<u32> {
        self.f64(candidates)
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| v as u32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from a raw grid whose first row is the header.
    /// Blank headers become `Column_N`; repeated headers get `.1`, `.2`, ...
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Table {
        let mut grid = grid.into_iter();
        let header_row = grid.next().unwrap_or_default();
        let body: Vec<Vec<Cell>> = grid.collect();
        let width = body
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header_row.len()))
            .max()
            .unwrap_or(0);

        let raw_headers: Vec<String> = (0..width)
            .map(|idx| {
                header_row
                    .get(idx)
                    .and_then(Cell::as_text)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| format!("Column_{idx}"))
            })
            .collect();

        let mut seen: BTreeMap<String, usize> = BTreeMap::new();
        let headers = raw_headers
            .into_iter()
            .map(|name| {
                let count = seen.entry(name.clone()).or_insert(0);
                let unique = if *count == 0 {
                    name.clone()
                } else {
                    format!("{name}.{count}")
                };
                *count += 1;
                unique
            })
            .collect();

        let rows = body
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        Table { headers, rows }
    }

    /// Drop columns missing in more than `MAX_MISSING_RATIO` of rows, then drop all-empty rows.
    /// Returns None when nothing is left.
    pub fn clean(self) -> Option<Table> {
        let total = self.rows.len();
        if total == 0 {
            return None;
        }
        let keep: Vec<usize> = (0..self.headers.len())
            .filter(|&col| {
                let missing = self
                    .rows
                    .iter()
                    .filter(|row| row.get(col).map_or(true, Cell::is_empty))
                    .count();
                (missing as f64 / total as f64) <= MAX_MISSING_RATIO
            })
            .collect();
        if keep.is_empty() {
            return None;
        }

        let headers = keep.iter().map(|&col| self.headers[col].clone()).collect();
        let rows: Vec<Vec<Cell>> = self
            .rows
            .into_iter()
            .map(|row| {
                keep.iter()
                    .map(|&col| row.get(col).cloned().unwrap_or(Cell::Empty))
                    .collect::<Vec<_>>()
            })
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .collect();

        if rows.is_empty() {
            None
        } else {
            Some(Table { headers, rows })
        }
    }

    pub fn into_records(self) -> Vec<Row> {
        let headers = self.headers;
        self.rows
            .into_iter()
            .map(|row| Row::from_pairs(headers.iter().cloned().zip(row)))
            .collect()
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), CatalogError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::to_csv_field))?;
        }
        writer.flush().map_err(|err| CatalogError::io(path, err))?;
        Ok(())
    }

    pub fn read_csv(path: &Path) -> Result<Table, CatalogError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<Cell> = record.iter().map(Cell::from_text).collect();
            row.resize(headers.len(), Cell::Empty);
            rows.push(row);
        }
        Ok(Table { headers, rows })
    }
}
