//! Scored, explainable vendor recommendations.
//!
//! Each available vendor earns a base score from its proximity tier plus
//! additive bonuses for verification, menu breadth, and membership in the
//! caller-supplied trending set. Every factor carries a human-readable
//! reason so the presentation layer can explain each pick.

use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;
use streetbite_core::{Coordinate, ScoringWeights, Vendor};

use crate::geo::distance_km;

/// A ranked recommendation with its score breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub vendor: Vendor,
    pub distance_km: Option<f64>,
    pub score: f64,
    /// One entry per contributing factor, in scoring order.
    pub reasons: Vec<String>,
}

/// Vendors and food types currently considered trending.
///
/// Supplied by the caller so ranking stays a pure function: the same
/// catalog, origin, and trending set always produce the same order. An
/// empty set disables the trending bonus entirely.
#[derive(Debug, Clone, Default)]
pub struct TrendingSet {
    vendor_ids: HashSet<String>,
    food_types: HashSet<String>,
}

impl TrendingSet {
    #[must_use]
    pub fn from_vendor_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self {
            vendor_ids: ids.into_iter().collect(),
            food_types: HashSet::new(),
        }
    }

    #[must_use]
    pub fn from_food_types<I: IntoIterator<Item = String>>(types: I) -> Self {
        Self {
            vendor_ids: HashSet::new(),
            food_types: types.into_iter().collect(),
        }
    }

    /// Sample a trending set by flagging each catalog vendor independently
    /// with the given probability.
    ///
    /// Reproduces the variety effect of a per-request random boost while
    /// keeping [`rank`] itself deterministic: pass a seeded
    /// [`rand::rngs::StdRng`] and identical seeds yield identical sets.
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(catalog: &[Vendor], probability: f64, rng: &mut R) -> Self {
        let vendor_ids = catalog
            .iter()
            .filter(|_| rng.random::<f64>() < probability)
            .map(|v| v.id.clone())
            .collect();
        Self {
            vendor_ids,
            food_types: HashSet::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, vendor: &Vendor) -> bool {
        self.vendor_ids.contains(&vendor.id) || self.food_types.contains(&vendor.food_type)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendor_ids.is_empty() && self.food_types.is_empty()
    }
}

fn score_vendor(
    vendor: &Vendor,
    origin: Option<Coordinate>,
    weights: &ScoringWeights,
    trending: &TrendingSet,
) -> ScoredCandidate {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let distance = origin.map(|o| distance_km(o, vendor.coordinates));
    match distance {
        Some(d) if d < weights.very_close_km => {
            score += weights.very_close;
            reasons.push("Very close to you".to_string());
        }
        Some(d) if d < weights.nearby_km => {
            score += weights.nearby;
            reasons.push("Nearby location".to_string());
        }
        Some(_) => {
            score += weights.within_area;
            reasons.push("Within your area".to_string());
        }
        None => {
            score += weights.no_origin;
            reasons.push("Popular choice".to_string());
        }
    }

    if vendor.is_verified {
        score += weights.verified;
        reasons.push("Verified vendor".to_string());
    }

    if vendor.menu.len() > weights.wide_menu_min {
        score += weights.wide_menu;
        reasons.push("Wide menu selection".to_string());
    }

    if trending.contains(vendor) {
        score += weights.trending;
        reasons.push("Trending now".to_string());
    }

    ScoredCandidate {
        vendor: vendor.clone(),
        distance_km: distance,
        score,
        reasons,
    }
}

/// Rank available vendors by multi-factor score, best first.
///
/// Unavailable vendors are excluded before scoring. Output is sorted
/// descending by total score with ties broken by vendor id ascending, then
/// truncated to `top_n`. An empty catalog or a catalog with no available
/// vendors yields an empty vec.
///
/// Because every factor is additive and non-negative, two vendors whose
/// deterministic components (tier + verification + menu) differ by more
/// than `weights.trending` keep their relative order under any trending
/// assignment.
#[must_use]
pub fn rank(
    catalog: &[Vendor],
    origin: Option<Coordinate>,
    top_n: usize,
    weights: &ScoringWeights,
    trending: &TrendingSet,
) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> = catalog
        .iter()
        .filter(|v| v.availability)
        .map(|v| score_vendor(v, origin, weights, trending))
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.vendor.id.cmp(&b.vendor.id))
    });
    candidates.truncate(top_n);

    tracing::debug!(
        catalog = catalog.len(),
        returned = candidates.len(),
        top_n,
        trending_empty = trending.is_empty(),
        "ranking complete"
    );

    candidates
}

/// Distinct food types in first-seen catalog order, truncated to `limit`.
///
/// A cheap categorical signal for the trending panel, not a statistically
/// weighted measure.
#[must_use]
pub fn trending_food_types(catalog: &[Vendor], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|v| seen.insert(v.food_type.as_str()))
        .map(|v| v.food_type.clone())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use streetbite_core::MenuEntry;

    fn menu(n: usize) -> Vec<MenuEntry> {
        (0..n)
            .map(|i| MenuEntry {
                name: format!("Dish {i}"),
                price: 50.0,
                currency: "INR".to_string(),
            })
            .collect()
    }

    fn vendor(id: &str, food_type: &str, lat: f64, lon: f64) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: format!("Vendor {id}"),
            food_type: food_type.to_string(),
            coordinates: Coordinate::new(lat, lon),
            address: String::new(),
            menu: vec![],
            availability: true,
            is_verified: false,
        }
    }

    #[test]
    fn bangalore_scenario_scores_eighty() {
        let mut v1 = vendor("v1", "South Indian", 12.97, 77.59);
        v1.is_verified = true;
        v1.menu = menu(4);

        let origin = Coordinate::new(12.97, 77.60);
        let ranked = rank(
            &[v1],
            Some(origin),
            3,
            &ScoringWeights::default(),
            &TrendingSet::default(),
        );

        assert_eq!(ranked.len(), 1);
        // ~1.05 km → nearby tier (30) + verified (30) + wide menu (20).
        assert!((ranked[0].score - 80.0).abs() < f64::EPSILON, "got {}", ranked[0].score);
        assert_eq!(
            ranked[0].reasons,
            ["Nearby location", "Verified vendor", "Wide menu selection"]
        );
    }

    #[test]
    fn unavailable_vendors_are_never_returned() {
        let mut closed = vendor("v1", "Chaat", 0.0, 0.0);
        closed.availability = false;
        let open = vendor("v2", "Chaat", 0.0, 0.0);

        let ranked = rank(
            &[closed, open],
            None,
            10,
            &ScoringWeights::default(),
            &TrendingSet::default(),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].vendor.id, "v2");
    }

    #[test]
    fn output_truncated_to_top_n() {
        let catalog: Vec<Vendor> = (0..10)
            .map(|i| vendor(&format!("v{i}"), "Chaat", 0.0, 0.0))
            .collect();
        let ranked = rank(
            &catalog,
            None,
            3,
            &ScoringWeights::default(),
            &TrendingSet::default(),
        );
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn no_origin_applies_flat_popular_choice() {
        let ranked = rank(
            &[vendor("v1", "Chaat", 0.0, 0.0)],
            None,
            1,
            &ScoringWeights::default(),
            &TrendingSet::default(),
        );
        assert!((ranked[0].score - 20.0).abs() < f64::EPSILON);
        assert_eq!(ranked[0].reasons, ["Popular choice"]);
        assert!(ranked[0].distance_km.is_none());
    }

    #[test]
    fn very_close_tier_outranks_distant_tier() {
        let origin = Coordinate::new(12.97, 77.60);
        let close = vendor("far-id", "Chaat", 12.97, 77.601); // <1 km, id sorts later
        let far = vendor("aaa-id", "Chaat", 13.20, 77.90); // >3 km, id sorts first

        let ranked = rank(
            &[far, close],
            Some(origin),
            2,
            &ScoringWeights::default(),
            &TrendingSet::default(),
        );
        assert_eq!(ranked[0].vendor.id, "far-id");
        assert!((ranked[0].score - 50.0).abs() < f64::EPSILON);
        assert!((ranked[1].score - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_ties_break_by_vendor_id_ascending() {
        let ranked = rank(
            &[vendor("vb", "Chaat", 0.0, 0.0), vendor("va", "Chaat", 0.0, 0.0)],
            None,
            2,
            &ScoringWeights::default(),
            &TrendingSet::default(),
        );
        let ids: Vec<&str> = ranked.iter().map(|c| c.vendor.id.as_str()).collect();
        assert_eq!(ids, ["va", "vb"]);
    }

    #[test]
    fn trending_set_adds_bonus_with_reason() {
        let trending = TrendingSet::from_vendor_ids(["v1".to_string()]);
        let ranked = rank(
            &[vendor("v1", "Chaat", 0.0, 0.0)],
            None,
            1,
            &ScoringWeights::default(),
            &trending,
        );
        assert!((ranked[0].score - 45.0).abs() < f64::EPSILON);
        assert_eq!(ranked[0].reasons, ["Popular choice", "Trending now"]);
    }

    #[test]
    fn trending_by_food_type_matches() {
        let trending = TrendingSet::from_food_types(["Chaat".to_string()]);
        assert!(trending.contains(&vendor("v9", "Chaat", 0.0, 0.0)));
        assert!(!trending.contains(&vendor("v9", "Tibetan", 0.0, 0.0)));
    }

    #[test]
    fn sampled_trending_is_reproducible_per_seed() {
        let catalog: Vec<Vendor> = (0..50)
            .map(|i| vendor(&format!("v{i:02}"), "Chaat", 0.0, 0.0))
            .collect();
        let a = TrendingSet::sample(&catalog, 0.3, &mut StdRng::seed_from_u64(7));
        let b = TrendingSet::sample(&catalog, 0.3, &mut StdRng::seed_from_u64(7));
        let picked_a: Vec<bool> = catalog.iter().map(|v| a.contains(v)).collect();
        let picked_b: Vec<bool> = catalog.iter().map(|v| b.contains(v)).collect();
        assert_eq!(picked_a, picked_b);
    }

    #[test]
    fn trending_cannot_flip_gaps_wider_than_its_weight() {
        // Deterministic components: strong = 50 + 30 + 20 = 100, weak = 10.
        // The 25-point trending bonus can never close a 90-point gap.
        let origin = Coordinate::new(12.97, 77.60);
        let mut strong = vendor("v-strong", "Chaat", 12.97, 77.601);
        strong.is_verified = true;
        strong.menu = menu(5);
        let weak = vendor("v-weak", "Chaat", 13.20, 77.90);

        let catalog = vec![strong, weak];
        let weights = ScoringWeights::default();

        // Worst case for the strong vendor: only the weak one trends.
        let trending = TrendingSet::from_vendor_ids(["v-weak".to_string()]);
        let ranked = rank(&catalog, Some(origin), 2, &weights, &trending);
        assert_eq!(ranked[0].vendor.id, "v-strong");
    }

    #[test]
    fn empty_catalog_yields_empty_ranking() {
        let ranked = rank(
            &[],
            None,
            5,
            &ScoringWeights::default(),
            &TrendingSet::default(),
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn trending_food_types_first_seen_order_truncated() {
        let catalog = vec![
            vendor("v1", "Chaat", 0.0, 0.0),
            vendor("v2", "Tibetan", 0.0, 0.0),
            vendor("v3", "Chaat", 0.0, 0.0),
            vendor("v4", "South Indian", 0.0, 0.0),
        ];
        assert_eq!(trending_food_types(&catalog, 2), ["Chaat", "Tibetan"]);
        assert_eq!(
            trending_food_types(&catalog, 10),
            ["Chaat", "Tibetan", "South Indian"]
        );
        assert!(trending_food_types(&[], 5).is_empty());
    }
}
