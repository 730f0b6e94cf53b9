use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions. Anything recoverable is logged and defaulted instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("workbook not found: {}", .0.display())]
    WorkbookNotFound(PathBuf),

    #[error("unable to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("consolidated document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("unable to parse json '{}': {source}", .path.display())]
    DocumentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
