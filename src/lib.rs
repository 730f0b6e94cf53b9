//! Hardware catalog tooling: spreadsheet → normalized JSON catalog → validation report.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
