//! Engine configuration loaded from environment variables.
//!
//! The scoring weights started life as hard-coded tuning constants with no
//! documented rationale; they are kept recalibratable here without touching
//! the ranking algorithm itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Tunable recommendation scoring weights.
///
/// Every factor only ever adds to a candidate's score; no weight may be
/// negative for the ranking's monotonicity guarantee to hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Base score for vendors closer than [`Self::very_close_km`].
    pub very_close: f64,
    /// Base score for vendors closer than [`Self::nearby_km`].
    pub nearby: f64,
    /// Base score for any other vendor when an origin is known.
    pub within_area: f64,
    /// Flat base score when no origin is available.
    pub no_origin: f64,
    /// Bonus for verified vendors.
    pub verified: f64,
    /// Bonus for menus longer than [`Self::wide_menu_min`] entries.
    pub wide_menu: f64,
    /// Bonus for vendors in the caller-supplied trending set.
    pub trending: f64,
    /// Upper bound of the closest proximity tier, in kilometers.
    pub very_close_km: f64,
    /// Upper bound of the middle proximity tier, in kilometers.
    pub nearby_km: f64,
    /// Menu length a vendor must exceed to earn the wide-menu bonus.
    pub wide_menu_min: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            very_close: 50.0,
            nearby: 30.0,
            within_area: 10.0,
            no_origin: 20.0,
            verified: 30.0,
            wide_menu: 20.0,
            trending: 25.0,
            very_close_km: 1.0,
            nearby_km: 3.0,
            wide_menu_min: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub log_level: String,
    pub weights: ScoringWeights,
}

/// Load engine configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars. Unset variables fall back to defaults.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparseable value.
pub fn load_engine_config() -> Result<EngineConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_engine_config(|key| std::env::var(key))
}

/// Build engine configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_engine_config<F>(lookup: F) -> Result<EngineConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f64 = |var: &str, default: f64| -> Result<f64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let defaults = ScoringWeights::default();
    let weights = ScoringWeights {
        very_close: parse_f64("STREETBITE_WEIGHT_VERY_CLOSE", defaults.very_close)?,
        nearby: parse_f64("STREETBITE_WEIGHT_NEARBY", defaults.nearby)?,
        within_area: parse_f64("STREETBITE_WEIGHT_WITHIN_AREA", defaults.within_area)?,
        no_origin: parse_f64("STREETBITE_WEIGHT_NO_ORIGIN", defaults.no_origin)?,
        verified: parse_f64("STREETBITE_WEIGHT_VERIFIED", defaults.verified)?,
        wide_menu: parse_f64("STREETBITE_WEIGHT_WIDE_MENU", defaults.wide_menu)?,
        trending: parse_f64("STREETBITE_WEIGHT_TRENDING", defaults.trending)?,
        very_close_km: parse_f64("STREETBITE_TIER_VERY_CLOSE_KM", defaults.very_close_km)?,
        nearby_km: parse_f64("STREETBITE_TIER_NEARBY_KM", defaults.nearby_km)?,
        wide_menu_min: parse_usize("STREETBITE_WIDE_MENU_MIN", defaults.wide_menu_min)?,
    };

    Ok(EngineConfig {
        log_level: or_default("STREETBITE_LOG_LEVEL", "info"),
        weights,
    })
}
