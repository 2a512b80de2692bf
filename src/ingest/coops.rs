//! NOAA CO-OPS datagetter API client.
//!
//! Handles query construction and CSV retrieval for the CO-OPS data
//! endpoint:
//!   https://tidesandcurrents.noaa.gov/api/datagetter
//!
//! API Documentation: https://api.tidesandcurrents.noaa.gov/api/prod/
//!
//! Products used here are `predictions` (harmonic tide forecasts) and
//! `monthly_mean` (averaged water level per calendar month). Stations also
//! serve `water_level`, `hourly_height`, `air_temperature`,
//! `water_temperature` and `air_pressure` through the same endpoint.

use chrono::NaiveDate;

const COOPS_BASE_URL: &str = "https://tidesandcurrents.noaa.gov/api/datagetter";

/// Free-text client identifier sent with every request. NOAA asks for this
/// as a courtesy; it has no functional effect on the response.
const APPLICATION: &str = "CascoBayEstuaryPartnership";

// ---------------------------------------------------------------------------
// Query construction
// ---------------------------------------------------------------------------

/// One fully-specified datagetter query.
///
/// A query is an immutable value: the per-product constructors build a base
/// template, and [`CoopsQuery::for_year`] / [`CoopsQuery::with_range`] return
/// a fresh copy with only the date range replaced. Nothing is shared or
/// mutated across loop iterations.
///
/// Dates are `YYYYMMDD` strings and are not validated locally; a malformed
/// value goes to the server as-is and surfaces as an HTTP or error-body
/// failure downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoopsQuery {
    pub station: String,
    pub product: String,
    pub begin_date: String,
    pub end_date: String,
    /// Vertical reference level, e.g. "MLLW", "msl", "NAVD".
    pub datum: String,
    /// "metric" or "english".
    pub units: String,
    /// "lst" (local standard time, no DST), "lst_ldt" or "gmt".
    pub time_zone: String,
    /// Sampling granularity. "h" for hourly; `None` lets the API default to
    /// its 6-minute resolution.
    pub interval: Option<String>,
}

impl CoopsQuery {
    /// Base template for hourly tide predictions at a station.
    ///
    /// Uses MLLW so the series lines up with the station's published tide
    /// tables, and local standard time for a consistent clock across the
    /// whole period of record. The date range is a placeholder; callers go
    /// through [`CoopsQuery::for_year`] before fetching.
    pub fn hourly_predictions(station: &str) -> CoopsQuery {
        CoopsQuery {
            station: station.to_string(),
            product: "predictions".to_string(),
            begin_date: String::new(),
            end_date: String::new(),
            datum: "MLLW".to_string(),
            units: "metric".to_string(),
            time_zone: "lst".to_string(),
            interval: Some("h".to_string()),
        }
    }

    /// Base template for monthly mean water levels at a station.
    ///
    /// Monthly means are a single aggregate per calendar month, so no
    /// interval is sent and timestamps are requested in GMT.
    pub fn monthly_mean(station: &str, datum: &str) -> CoopsQuery {
        CoopsQuery {
            station: station.to_string(),
            product: "monthly_mean".to_string(),
            begin_date: String::new(),
            end_date: String::new(),
            datum: datum.to_string(),
            units: "metric".to_string(),
            time_zone: "gmt".to_string(),
            interval: None,
        }
    }

    /// Returns a copy of this query covering one full calendar year.
    pub fn for_year(&self, year: i32) -> CoopsQuery {
        let begin = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        self.with_range(
            &begin.format("%Y%m%d").to_string(),
            &end.format("%Y%m%d").to_string(),
        )
    }

    /// Returns a copy of this query with an explicit `YYYYMMDD` date pair.
    pub fn with_range(&self, begin_date: &str, end_date: &str) -> CoopsQuery {
        CoopsQuery {
            begin_date: begin_date.to_string(),
            end_date: end_date.to_string(),
            ..self.clone()
        }
    }

    /// Assembles the full request URL.
    ///
    /// Every value is percent-encoded. `format=csv` is fixed: the rest of
    /// the crate only understands the CSV rendering of the response.
    pub fn to_url(&self) -> String {
        let mut url = format!(
            "{}?station={}&product={}&application={}&begin_date={}&end_date={}&datum={}&units={}&time_zone={}&format=csv",
            COOPS_BASE_URL,
            urlencoding::encode(&self.station),
            urlencoding::encode(&self.product),
            urlencoding::encode(APPLICATION),
            urlencoding::encode(&self.begin_date),
            urlencoding::encode(&self.end_date),
            urlencoding::encode(&self.datum),
            urlencoding::encode(&self.units),
            urlencoding::encode(&self.time_zone),
        );

        if let Some(interval) = &self.interval {
            url.push_str("&interval=");
            url.push_str(&urlencoding::encode(interval));
        }

        url
    }
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Performs one blocking GET for the query and returns the raw response body.
///
/// No retry, no timeout tuning, no pacing between calls — a network failure
/// or non-2xx status is returned to the caller, which is expected to abort
/// the run. The body is CSV-shaped text but not guaranteed well-formed; see
/// the `predictions` module for what actually comes back.
pub fn fetch_csv(
    client: &reqwest::blocking::Client,
    query: &CoopsQuery,
) -> Result<String, Box<dyn std::error::Error>> {
    let url = query.to_url();

    let response = client.get(&url).send()?;

    if !response.status().is_success() {
        return Err(format!("CO-OPS API error: {}", response.status()).into());
    }

    Ok(response.text()?)
}
