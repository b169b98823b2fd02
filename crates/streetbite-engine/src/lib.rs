//! Vendor proximity and recommendation engine for StreetBite.
//!
//! Overlays live-location reports onto catalog snapshots, computes
//! great-circle distances, produces proximity-ordered search results,
//! scores ranked recommendations with explainable reasons, and aggregates
//! catalog statistics for the operator dashboard.
//!
//! Every operation is a pure, total function over an immutable snapshot:
//! no shared state, no locking, no I/O. Concurrent callers may run
//! `search`/`rank`/`aggregate` on different snapshots without coordination;
//! snapshot freshness and fetch cancellation belong to the collaborators
//! that supply the data.

pub mod geo;
pub mod merge;
pub mod proximity;
pub mod ranking;
pub mod stats;

pub use geo::distance_km;
pub use merge::overlay_live_locations;
pub use proximity::{search, SearchHit, SearchQuery};
pub use ranking::{rank, trending_food_types, ScoredCandidate, TrendingSet};
pub use stats::{aggregate, CatalogStats};
