//! Monthly mean sea-level downloader.
//!
//! Downloads the CO-OPS `monthly_mean` record for every station in
//! stations.toml, one request per station covering its full requested span.
//! Unlike the hourly pipeline, response lines are written through unchanged:
//! the monthly endpoint returns one aggregate row per month and has not been
//! observed to echo headers or substitute error rows. If that assumption
//! breaks, the output file carries the noise verbatim.
//!
//! Usage:
//!   cargo run --release --bin monthly_means

use std::path::Path;
use std::process;

use coops_fetch::config::load_config;
use coops_fetch::ingest::coops::{self, CoopsQuery};
use coops_fetch::sink;

const OUTPUT_SUFFIX: &str = "_SLR_Monthly.csv";
const HEADER: &str = "DateTime, Prediction";

fn main() {
    if let Err(e) = run() {
        eprintln!("Download failed: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stations = load_config();
    println!("🌊 CO-OPS monthly means, {} station(s)", stations.len());

    let client = reqwest::blocking::Client::new();

    for station in stations {
        println!("Station: {}", station.name);

        let query = CoopsQuery::monthly_mean(&station.station_id, &station.datum)
            .with_range(&station.begin_date, &station.end_date);
        let body = coops::fetch_csv(&client, &query)?;

        let filename = format!("{}{}", station.name, OUTPUT_SUFFIX);
        let out_path = Path::new(&filename);

        sink::initialize(out_path, HEADER)?;
        let lines: Vec<String> = body.lines().map(str::to_string).collect();
        sink::append_lines(out_path, &lines)?;

        println!("✓ Wrote {} lines to {}", lines.len(), filename);
    }

    Ok(())
}
