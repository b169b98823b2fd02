//! Live-location overlay onto catalog snapshots.

use std::collections::{HashMap, HashSet};

use streetbite_core::{Coordinate, LiveLocationReport, Vendor};

/// Overlay live-location reports onto a catalog snapshot.
///
/// Returns a new vendor sequence in catalog order, same length as the
/// input. A vendor whose id appears in `reports` gets that report's
/// coordinates; with multiple reports for one id the last in report order
/// wins (the polling collaborator emits them time-ordered). Reports whose
/// vendor id is not in the catalog are dropped, not errors — the overlay
/// is a presentation-layer view, never a write to the stored record.
#[must_use]
pub fn overlay_live_locations(catalog: &[Vendor], reports: &[LiveLocationReport]) -> Vec<Vendor> {
    // Later inserts overwrite earlier ones, which gives last-write-wins.
    let latest: HashMap<&str, Coordinate> = reports
        .iter()
        .map(|r| (r.vendor_id.as_str(), r.coordinates))
        .collect();

    let merged: Vec<Vendor> = catalog
        .iter()
        .map(|vendor| {
            latest.get(vendor.id.as_str()).map_or_else(
                || vendor.clone(),
                |coords| Vendor {
                    coordinates: *coords,
                    ..vendor.clone()
                },
            )
        })
        .collect();

    let catalog_ids: HashSet<&str> = catalog.iter().map(|v| v.id.as_str()).collect();
    let unknown = latest
        .keys()
        .filter(|id| !catalog_ids.contains(*id))
        .count();
    if unknown > 0 {
        tracing::debug!(
            reports = reports.len(),
            unknown,
            "dropped live reports referencing unknown vendor ids"
        );
    }

    merged
}
