//! Hourly tide-prediction downloader.
//!
//! Downloads CO-OPS hourly tide predictions for Providence, RI into a single
//! CSV file. Hourly predictions are only served one calendar year at a time,
//! so the run issues one request per year over the station's period of
//! record, filters each response, and appends the surviving rows.
//!
//! Usage:
//!   cargo run --release

use std::path::Path;
use std::process;

use coops_fetch::ingest::coops::{self, CoopsQuery};
use coops_fetch::ingest::predictions;
use coops_fetch::sink;

/// Providence, RI.
const STATION: &str = "8454000";
const FIRST_YEAR: i32 = 1938;
const LAST_YEAR: i32 = 2020;

const OUTPUT_FILE: &str = "providence_tides_hourly_predicts.csv";
const HEADER: &str = "DateTime, Date, Time, Prediction";

fn main() {
    if let Err(e) = run() {
        eprintln!("Download failed: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🌊 CO-OPS hourly predictions, station {} ({}-{})", STATION, FIRST_YEAR, LAST_YEAR);

    let client = reqwest::blocking::Client::new();
    let template = CoopsQuery::hourly_predictions(STATION);
    let out_path = Path::new(OUTPUT_FILE);

    // Header goes in exactly once; everything after this is an append.
    sink::initialize(out_path, HEADER)?;

    let mut total_rows = 0usize;

    for year in FIRST_YEAR..=LAST_YEAR {
        println!("Year: {}", year);

        let query = template.for_year(year);
        let body = coops::fetch_csv(&client, &query)?;
        let report = predictions::filter_response(&body);

        if report.skipped.total() > 0 {
            println!(
                "   {} rows, {} skipped ({} header, {} error, {} no-data, {} malformed)",
                report.rows.len(),
                report.skipped.total(),
                report.skipped.header_echoes,
                report.skipped.error_lines,
                report.skipped.sentinels,
                report.skipped.malformed,
            );
        }

        let lines: Vec<String> = report.rows.iter().map(|r| r.to_csv_line()).collect();
        sink::append_lines(out_path, &lines)?;
        total_rows += lines.len();
    }

    println!("✓ Wrote {} rows to {}", total_rows, OUTPUT_FILE);
    Ok(())
}
