//! coops_fetch: NOAA CO-OPS tide-station CSV downloader.
//!
//! # Module structure
//!
//! ```text
//! coops_fetch
//! ├── model       — shared data types (HourlyPrediction, SkipReason)
//! ├── config      — station registry loader (stations.toml)
//! ├── ingest
//! │   ├── coops       — CO-OPS datagetter API: query construction + blocking fetch
//! │   └── predictions — hourly-prediction response filter
//! └── sink        — append-only CSV file sink
//! ```
//!
//! Two binaries drive the library: the default binary downloads hourly tide
//! predictions one year at a time, and `monthly_means` downloads the monthly
//! mean sea-level record for every station in `stations.toml`.

pub mod config;
pub mod ingest;
pub mod model;
pub mod sink;
