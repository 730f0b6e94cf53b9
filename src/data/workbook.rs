//! Stage A: read the vendor workbook with calamine and export one cleaned CSV per known sheet.

use std::fs;
use std::path::{Path, PathBuf};

use calamine::Reader;
use tracing::{error, info, warn};

use crate::config::{CatalogPaths, Category};
use crate::data::table::{Cell, Table};
use crate::error::CatalogError;

fn cell_from_data(d: &calamine::Data) -> Cell {
    match d {
        calamine::Data::Empty => Cell::Empty,
        calamine::Data::String(s) if s.trim().is_empty() => Cell::Empty,
        calamine::Data::String(s) => Cell::Text(s.clone()),
        calamine::Data::Float(f) => Cell::Float(*f),
        calamine::Data::Int(i) => Cell::Int(*i),
        calamine::Data::Bool(b) => Cell::Bool(*b),
        calamine::Data::Error(_) => Cell::Empty,
        other => Cell::Text(format!("{}", other)),
    }
}

/// Outcome of extracting a single sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetOutcome {
    Written { rows: usize, path: PathBuf },
    Empty,
    Missing,
    Failed(String),
}

/// Raw contents of one recognized sheet, before cleaning.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetRead {
    Table(Table),
    Missing,
    Failed(String),
}

/// Grid of a sheet anchored at A1. calamine ranges start at the first used cell,
/// so leading blank columns are restored to keep positional names stable.
fn sheet_grid(range: &calamine::Range<calamine::Data>) -> Vec<Vec<Cell>> {
    let offset = range.start().map_or(0, |(_, col)| col as usize);
    range
        .rows()
        .map(|row| {
            std::iter::repeat(Cell::Empty)
                .take(offset)
                .chain(row.iter().map(cell_from_data))
                .collect()
        })
        .collect()
}

/// Tables for every recognized sheet. Only a missing workbook is an error;
/// an unreadable workbook or sheet is reported per category and skipped.
pub fn read_workbook_tables(path: &Path) -> Result<Vec<(Category, SheetRead)>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::WorkbookNotFound(path.to_path_buf()));
    }
    let mut wb = match calamine::open_workbook_auto(path) {
        Ok(wb) => wb,
        Err(err) => {
            let err = CatalogError::from(err);
            error!(path = %path.display(), error = %err, "unable to open workbook");
            return Ok(Category::ALL
                .into_iter()
                .map(|category| (category, SheetRead::Failed(err.to_string())))
                .collect());
        }
    };
    let names = wb.sheet_names();

    let mut tables = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let sheet = category.sheet_name();
        if !names.iter().any(|name| name == sheet) {
            tables.push((category, SheetRead::Missing));
            continue;
        }
        let read = match wb.worksheet_range(sheet) {
            Ok(range) => {
                let grid = sheet_grid(&range);
                if grid.is_empty() {
                    SheetRead::Table(Table {
                        headers: Vec::new(),
                        rows: Vec::new(),
                    })
                } else {
                    SheetRead::Table(Table::from_grid(grid))
                }
            }
            Err(err) => SheetRead::Failed(CatalogError::from(err).to_string()),
        };
        tables.push((category, read));
    }
    Ok(tables)
}

/// Clean each sheet's table and write it under the data directory.
/// A sheet that cannot be read or written is logged and skipped.
pub fn export_tables(
    tables: Vec<(Category, SheetRead)>,
    paths: &CatalogPaths,
) -> Result<Vec<(Category, SheetOutcome)>, CatalogError> {
    fs::create_dir_all(&paths.data_dir).map_err(|err| CatalogError::io(&paths.data_dir, err))?;

    let mut outcomes = Vec::with_capacity(tables.len());
    for (category, read) in tables {
        let sheet = category.sheet_name();
        let outcome = match read {
            SheetRead::Missing => {
                warn!(sheet, "sheet not found in workbook");
                SheetOutcome::Missing
            }
            SheetRead::Failed(reason) => {
                warn!(sheet, error = %reason, "unable to read sheet");
                SheetOutcome::Failed(reason)
            }
            SheetRead::Table(table) => match table.clean() {
                None => {
                    warn!(sheet, "sheet is empty or has no valid data");
                    SheetOutcome::Empty
                }
                Some(cleaned) => {
                    let path = paths.table(category);
                    match cleaned.write_csv(&path) {
                        Ok(()) => {
                            info!(
                                sheet,
                                rows = cleaned.rows.len(),
                                columns = cleaned.headers.len(),
                                "converted {} to {}",
                                sheet,
                                category.csv_file_name()
                            );
                            SheetOutcome::Written {
                                rows: cleaned.rows.len(),
                                path,
                            }
                        }
                        Err(err) => {
                            warn!(sheet, path = %path.display(), error = %err, "unable to write table");
                            SheetOutcome::Failed(err.to_string())
                        }
                    }
                }
            },
        };
        outcomes.push((category, outcome));
    }
    Ok(outcomes)
}
