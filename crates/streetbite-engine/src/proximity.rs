//! Proximity-ordered catalog search.
//!
//! A full filter + sort pass per call. The catalog in this domain is small
//! and seconds-scale freshness dominates, so no persistent spatial index is
//! kept; if catalog sizes grow substantially, a grid or k-d tree can be
//! introduced behind the same contract without changing observable behavior.

use serde::Serialize;
use streetbite_core::{Coordinate, Vendor};

use crate::geo::distance_km;

/// Filter and ordering parameters for one search call.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Caller position. Without it, no distances are computed and catalog
    /// order is preserved.
    pub origin: Option<Coordinate>,
    /// Case-insensitive substring matched against vendor name or food type.
    pub term: Option<String>,
    /// Exact food-type filter.
    pub food_type: Option<String>,
    /// Keep only vendors currently marked available.
    pub only_available: bool,
    /// Drop vendors farther than this from the origin. Ignored without an
    /// origin.
    pub radius_km: Option<f64>,
}

/// One search result: a vendor with its distance from the query origin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub vendor: Vendor,
    pub distance_km: Option<f64>,
}

fn matches(vendor: &Vendor, query: &SearchQuery) -> bool {
    if query.only_available && !vendor.availability {
        return false;
    }
    if let Some(food_type) = &query.food_type {
        if vendor.food_type != *food_type {
            return false;
        }
    }
    if let Some(term) = &query.term {
        let needle = term.to_lowercase();
        if !vendor.name.to_lowercase().contains(&needle)
            && !vendor.food_type.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    true
}

/// Search the catalog, annotating and ordering by distance from the origin.
///
/// Filters first, then distance-annotates survivors when `query.origin` is
/// set, drops hits beyond `query.radius_km` if given, and sorts ascending
/// by distance with ties broken by vendor id ascending so identical inputs
/// always produce identical orderings. Without an origin all distances are
/// `None` and catalog order is preserved. An empty catalog or no matches
/// yields an empty vec, never an error.
#[must_use]
pub fn search(catalog: &[Vendor], query: &SearchQuery) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = catalog
        .iter()
        .filter(|v| matches(v, query))
        .map(|vendor| SearchHit {
            distance_km: query.origin.map(|origin| distance_km(origin, vendor.coordinates)),
            vendor: vendor.clone(),
        })
        .collect();

    if query.origin.is_some() {
        if let Some(radius) = query.radius_km {
            hits.retain(|hit| hit.distance_km.is_some_and(|d| d <= radius));
        }
        hits.sort_by(|a, b| {
            let da = a.distance_km.unwrap_or(f64::INFINITY);
            let db = b.distance_km.unwrap_or(f64::INFINITY);
            da.total_cmp(&db).then_with(|| a.vendor.id.cmp(&b.vendor.id))
        });
    }

    tracing::debug!(
        catalog = catalog.len(),
        hits = hits.len(),
        has_origin = query.origin.is_some(),
        "proximity search complete"
    );

    hits
}
