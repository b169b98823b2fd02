//! Catalog and live-report snapshot files.
//!
//! The engine assumes validated input, so coordinate ranges are checked
//! here at the loading boundary.

use std::path::Path;

use streetbite_core::{LiveLocationReport, Vendor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("out-of-range coordinates for {subject} in {path}")]
    InvalidCoordinate { subject: String, path: String },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SnapshotError::Json {
        path: display,
        source,
    })
}

/// Load a catalog snapshot: a JSON array of vendors.
///
/// # Errors
///
/// Returns [`SnapshotError`] if the file cannot be read or parsed, or if
/// any vendor carries out-of-range coordinates.
pub fn load_catalog(path: &Path) -> Result<Vec<Vendor>, SnapshotError> {
    let catalog: Vec<Vendor> = read_json(path)?;
    for vendor in &catalog {
        if !vendor.coordinates.in_valid_range() {
            return Err(SnapshotError::InvalidCoordinate {
                subject: format!("vendor {}", vendor.id),
                path: path.display().to_string(),
            });
        }
    }
    tracing::debug!(path = %path.display(), vendors = catalog.len(), "catalog snapshot loaded");
    Ok(catalog)
}

/// Load a live-location report snapshot: a JSON array of reports.
///
/// # Errors
///
/// Returns [`SnapshotError`] if the file cannot be read or parsed, or if
/// any report carries out-of-range coordinates.
pub fn load_reports(path: &Path) -> Result<Vec<LiveLocationReport>, SnapshotError> {
    let reports: Vec<LiveLocationReport> = read_json(path)?;
    for report in &reports {
        if !report.coordinates.in_valid_range() {
            return Err(SnapshotError::InvalidCoordinate {
                subject: format!("report for {}", report.vendor_id),
                path: path.display().to_string(),
            });
        }
    }
    tracing::debug!(path = %path.display(), reports = reports.len(), "report snapshot loaded");
    Ok(reports)
}
