//! File logging. The terminal belongs to the TUI, so events go to
//! `authform.log` in the data directory.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

use crate::storage::StorageError;

pub const LOG_FILE_NAME: &str = "authform.log";

/// Installs a global subscriber writing to `LOG_FILE_NAME` inside `dir`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn setup_logger(level: LevelFilter, dir: &Path) -> Result<(), StorageError> {
    let file = File::create(dir.join(LOG_FILE_NAME))?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    tracing_subscriber::registry()
        .with(file_log.with_filter(level))
        .init();

    Ok(())
}

/// Parses a level from the `LOG_LEVEL` value, defaulting to `info` when unset.
pub fn parse_log_level(value: Option<&str>) -> Result<LevelFilter, <LevelFilter as FromStr>::Err> {
    match value {
        Some(l) => LevelFilter::from_str(l),
        None => Ok(LevelFilter::INFO),
    }
}
