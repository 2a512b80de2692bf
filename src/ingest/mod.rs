//! Data-source clients and response parsing.

pub mod coops;
pub mod predictions;
