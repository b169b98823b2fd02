//! Operator CLI over the StreetBite vendor engine.
//!
//! Loads catalog and live-report snapshots from JSON files, runs the pure
//! engine functions, and prints JSON results. All I/O lives here so the
//! engine crates stay side-effect free.

mod snapshot;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use streetbite_core::{load_engine_config, Coordinate};
use streetbite_engine::{
    aggregate, overlay_live_locations, rank, search, trending_food_types, SearchQuery, TrendingSet,
};
use tracing_subscriber::EnvFilter;

use snapshot::{load_catalog, load_reports};

#[derive(Debug, Parser)]
#[command(name = "streetbite")]
#[command(about = "StreetBite vendor proximity and recommendation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct SnapshotArgs {
    /// Catalog snapshot: JSON array of vendors.
    #[arg(long)]
    catalog: PathBuf,

    /// Live-location snapshot: JSON array of reports, overlaid onto the
    /// catalog before any computation.
    #[arg(long)]
    reports: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct OriginArgs {
    /// Caller latitude in degrees.
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Caller longitude in degrees.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,
}

impl OriginArgs {
    fn coordinate(&self) -> anyhow::Result<Option<Coordinate>> {
        match (self.lat, self.lng) {
            (Some(latitude), Some(longitude)) => {
                let origin = Coordinate::new(latitude, longitude);
                anyhow::ensure!(
                    origin.in_valid_range(),
                    "origin ({latitude}, {longitude}) is outside valid WGS84 ranges"
                );
                Ok(Some(origin))
            }
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the catalog, ordered by distance when an origin is given.
    Search {
        #[command(flatten)]
        snapshots: SnapshotArgs,

        #[command(flatten)]
        origin: OriginArgs,

        /// Substring matched against vendor name or food type.
        #[arg(long)]
        term: Option<String>,

        /// Exact food-type filter.
        #[arg(long)]
        food_type: Option<String>,

        /// Keep only vendors currently open.
        #[arg(long)]
        available_only: bool,

        /// Drop vendors farther than this many kilometers from the origin.
        #[arg(long)]
        radius_km: Option<f64>,
    },

    /// Rank available vendors by multi-factor score.
    Rank {
        #[command(flatten)]
        snapshots: SnapshotArgs,

        #[command(flatten)]
        origin: OriginArgs,

        /// Maximum number of recommendations.
        #[arg(long, default_value_t = 3)]
        top: usize,

        /// RNG seed for trending-set sampling. Omit for a fresh sample per
        /// run; fix it for reproducible rankings.
        #[arg(long)]
        seed: Option<u64>,

        /// Per-vendor probability of a trending flag.
        #[arg(long, default_value_t = 0.3)]
        trending_probability: f64,

        /// Number of trending food types to report alongside the ranking.
        #[arg(long, default_value_t = 5)]
        trending_limit: usize,
    },

    /// Print catalog-wide statistics. Runs over the stored catalog only;
    /// live-location overlays are irrelevant to the counters.
    Stats {
        /// Catalog snapshot: JSON array of vendors.
        #[arg(long)]
        catalog: PathBuf,
    },
}

fn load_merged(snapshots: &SnapshotArgs) -> anyhow::Result<Vec<streetbite_core::Vendor>> {
    let catalog = load_catalog(&snapshots.catalog)?;
    match &snapshots.reports {
        Some(path) => {
            let reports = load_reports(path)?;
            Ok(overlay_live_locations(&catalog, &reports))
        }
        None => Ok(catalog),
    }
}

fn main() -> anyhow::Result<()> {
    let config = load_engine_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            snapshots,
            origin,
            term,
            food_type,
            available_only,
            radius_km,
        } => {
            let catalog = load_merged(&snapshots)?;
            let query = SearchQuery {
                origin: origin.coordinate()?,
                term,
                food_type,
                only_available: available_only,
                radius_km,
            };
            let hits = search(&catalog, &query);
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Commands::Rank {
            snapshots,
            origin,
            top,
            seed,
            trending_probability,
            trending_limit,
        } => {
            let catalog = load_merged(&snapshots)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let trending = TrendingSet::sample(&catalog, trending_probability, &mut rng);
            let candidates = rank(&catalog, origin.coordinate()?, top, &config.weights, &trending);
            let output = serde_json::json!({
                "recommendations": candidates,
                "trendingFoodTypes": trending_food_types(&catalog, trending_limit),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Stats { catalog } => {
            let catalog = load_catalog(&catalog)?;
            let stats = aggregate(&catalog);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn origin_requires_both_components() {
        let result = Cli::try_parse_from(["streetbite", "search", "--catalog", "c.json", "--lat", "12.9"]);
        assert!(result.is_err(), "lat without lng should be rejected");
    }

    #[test]
    fn rank_defaults() {
        let cli = Cli::try_parse_from(["streetbite", "rank", "--catalog", "c.json"])
            .expect("minimal rank invocation should parse");
        match cli.command {
            Commands::Rank {
                top,
                seed,
                trending_probability,
                ..
            } => {
                assert_eq!(top, 3);
                assert!(seed.is_none());
                assert!((trending_probability - 0.3).abs() < f64::EPSILON);
            }
            other => panic!("expected rank command, got {other:?}"),
        }
    }

    #[test]
    fn stats_rejects_reports_flag() {
        let result = Cli::try_parse_from([
            "streetbite",
            "stats",
            "--catalog",
            "c.json",
            "--reports",
            "r.json",
        ]);
        assert!(result.is_err(), "stats takes no --reports snapshot");
    }

    #[test]
    fn out_of_range_origin_rejected() {
        let args = OriginArgs {
            lat: Some(123.0),
            lng: Some(0.0),
        };
        assert!(args.coordinate().is_err());
    }

    #[test]
    fn absent_origin_is_none() {
        let args = OriginArgs { lat: None, lng: None };
        assert!(args.coordinate().expect("no origin is valid").is_none());
    }
}
