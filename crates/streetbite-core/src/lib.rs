//! Shared data model for the StreetBite vendor engine.
//!
//! Vendors and live-location reports are supplied by external collaborators
//! (catalog store, location poller); this crate defines their in-memory
//! shapes plus the tunable scoring configuration. Nothing here performs I/O.

use serde::{Deserialize, Serialize};

pub mod config;

pub use config::{load_engine_config, ConfigError, EngineConfig, ScoringWeights};

/// A WGS84 point. Latitude in degrees [-90, 90], longitude in [-180, 180].
///
/// Range validation is the producing collaborator's job; see
/// [`Coordinate::in_valid_range`] for a load-time check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components fall inside the valid WGS84 degree ranges.
    #[must_use]
    pub fn in_valid_range(self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One dish on a vendor's menu. Owned by its [`Vendor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub price: f64,
    pub currency: String,
}

/// A registered street-food vendor as stored in the catalog.
///
/// `id` is assigned once by the external store and never reused. A vendor's
/// `coordinates` may be transiently superseded by a live-location report
/// without the stored record changing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub food_type: String,
    pub coordinates: Coordinate,
    pub address: String,
    pub menu: Vec<MenuEntry>,
    pub availability: bool,
    pub is_verified: bool,
}

/// An ephemeral coordinate update for one vendor.
///
/// Produced by the location-polling collaborator; at most the last report
/// per vendor id is meaningful within one merge cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveLocationReport {
    pub vendor_id: String,
    pub coordinates: Coordinate,
}
