//! Station registry loader - parses stations.toml.
//!
//! Separates station metadata from code, making it easy to add stations or
//! adjust the requested datum and date span without recompiling.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// One tide station to download monthly means for.
#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    /// Human-readable name; also the output filename prefix.
    pub name: String,
    /// Numeric CO-OPS station code, e.g. "8454000".
    pub station_id: String,
    /// Vertical reference to request, e.g. "msl".
    pub datum: String,
    /// Start of the requested span, YYYYMMDD.
    pub begin_date: String,
    /// End of the requested span, YYYYMMDD (inclusive).
    pub end_date: String,
}

/// Root configuration structure for TOML parsing
#[derive(Debug, Deserialize)]
struct StationRegistry {
    station: Vec<StationConfig>,
}

/// Loads the station registry from the stations.toml configuration file.
///
/// # Panics
/// Panics if the configuration file is missing, malformed, or contains
/// invalid data. This is intentional — a download run cannot do anything
/// useful without valid station metadata.
///
/// # File Location
/// Expects `stations.toml` in the current working directory (project root
/// when running via `cargo run`).
pub fn load_config() -> Vec<StationConfig> {
    let config_path = "stations.toml";

    let contents = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path, e));

    let registry: StationRegistry = toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e));

    registry.station
}

/// Loads the station registry and builds a lookup map keyed by station code.
pub fn load_config_map() -> HashMap<String, StationConfig> {
    load_config()
        .into_iter()
        .map(|s| (s.station_id.clone(), s))
        .collect()
}
