//! Catalog-wide statistics for the operator dashboard.

use serde::Serialize;
use streetbite_core::Vendor;

/// Aggregate counters over the full catalog. Recomputed on demand; one O(n)
/// pass, no caching.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub verified: usize,
    pub available: usize,
    /// Vendor count per food type, keys in first-seen catalog order.
    pub food_type_histogram: Vec<(String, usize)>,
}

impl CatalogStats {
    /// Vendors not yet verified by an operator.
    #[must_use]
    pub const fn unverified(&self) -> usize {
        self.total - self.verified
    }

    /// Vendors currently marked closed.
    #[must_use]
    pub const fn closed(&self) -> usize {
        self.total - self.available
    }

    /// Verified share of the catalog as a percentage. `0.0` when empty.
    #[must_use]
    pub fn verified_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.verified as f64 / self.total as f64 * 100.0
        }
    }
}

/// Compute catalog statistics in a single pass.
///
/// Safe on an empty catalog: all counts zero, empty histogram.
#[must_use]
pub fn aggregate(catalog: &[Vendor]) -> CatalogStats {
    let mut stats = CatalogStats {
        total: catalog.len(),
        ..CatalogStats::default()
    };

    for vendor in catalog {
        if vendor.is_verified {
            stats.verified += 1;
        }
        if vendor.availability {
            stats.available += 1;
        }
        match stats
            .food_type_histogram
            .iter_mut()
            .find(|(food_type, _)| *food_type == vendor.food_type)
        {
            Some((_, count)) => *count += 1,
            None => stats.food_type_histogram.push((vendor.food_type.clone(), 1)),
        }
    }

    stats
}
