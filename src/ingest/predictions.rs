//! Hourly tide-prediction response filter.
//!
//! The datagetter CSV body for `product=predictions` is not guaranteed to be
//! clean data. Observed noise across the 1938-2020 period of record:
//! - the "Date Time, Prediction" column header is echoed inside each yearly
//!   response body;
//! - "Error: ..." message lines arrive in place of data when a year has no
//!   coverage;
//! - rows with no usable value carry a literal "1,1,1" marker in their
//!   trailing fields.
//!
//! This module classifies every line of a response and reshapes the
//! survivors into [`HourlyPrediction`] rows. A bad line can never abort the
//! run: classification is per-row fallible, and the caller gets a tally of
//! what was dropped and why instead of silent loss.

use crate::model::{HourlyPrediction, SkipReason};

/// Marker found on rows the API filled with placeholder values.
///
/// Matched anywhere in the row, so a legitimate prediction or timestamp
/// containing the digit sequence (e.g. "21,1,12") would also trip it. Kept
/// bug-compatible with the long-running download this replaces; no such
/// collision has been observed in the Providence record.
const NO_DATA_MARKER: &str = "1,1,1";

// ---------------------------------------------------------------------------
// Per-line classification
// ---------------------------------------------------------------------------

/// Classifies one response line, reshaping it on success.
///
/// A data line looks like:
///   `2015-01-01 00:00,0.123,,0,0,0,,0`
/// with the timestamp in field 0 and the prediction in field 1; any trailing
/// fields are flag columns and are discarded. The timestamp must split on
/// whitespace into exactly a date part and a time part.
pub fn classify_line(line: &str) -> Result<HourlyPrediction, SkipReason> {
    if line.starts_with("Date") {
        return Err(SkipReason::HeaderEcho);
    }
    if line.starts_with("Error") {
        return Err(SkipReason::ErrorLine);
    }
    if line.contains(NO_DATA_MARKER) {
        return Err(SkipReason::NoDataSentinel);
    }

    let mut fields = line.split(',');
    let date_time = fields.next().unwrap_or_default();
    let prediction = match fields.next() {
        Some(p) => p,
        None => return Err(SkipReason::Malformed),
    };

    let parts: Vec<&str> = date_time.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(SkipReason::Malformed);
    }

    Ok(HourlyPrediction {
        date_time: date_time.to_string(),
        date: parts[0].to_string(),
        time: parts[1].to_string(),
        prediction: prediction.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Whole-response filtering
// ---------------------------------------------------------------------------

/// Tally of dropped lines, reported once per fetched year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub header_echoes: u32,
    pub error_lines: u32,
    pub sentinels: u32,
    pub malformed: u32,
}

impl SkipCounts {
    pub fn total(&self) -> u32 {
        self.header_echoes + self.error_lines + self.sentinels + self.malformed
    }

    fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::HeaderEcho => self.header_echoes += 1,
            SkipReason::ErrorLine => self.error_lines += 1,
            SkipReason::NoDataSentinel => self.sentinels += 1,
            SkipReason::Malformed => self.malformed += 1,
        }
    }
}

/// Result of filtering one response body: the surviving rows in input order
/// plus the drop tally.
#[derive(Debug, Clone, Default)]
pub struct FilterReport {
    pub rows: Vec<HourlyPrediction>,
    pub skipped: SkipCounts,
}

/// Runs [`classify_line`] over every line of a response body.
pub fn filter_response(text: &str) -> FilterReport {
    let mut report = FilterReport::default();

    for line in text.lines() {
        match classify_line(line) {
            Ok(row) => report.rows.push(row),
            Err(reason) => report.skipped.record(reason),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_row_is_reshaped() {
        let row = classify_line("2015-01-01 00:00,0.123,,0,0,0,,0").unwrap();

        assert_eq!(row.date_time, "2015-01-01 00:00");
        assert_eq!(row.date, "2015-01-01");
        assert_eq!(row.time, "00:00");
        assert_eq!(row.prediction, "0.123");
        assert_eq!(row.to_csv_line(), "2015-01-01 00:00,2015-01-01,00:00,0.123");
    }

    #[test]
    fn test_two_field_row_is_accepted() {
        // Bare "timestamp,value" rows with no trailing flag columns.
        let row = classify_line("2015-06-15 13:00,1.842").unwrap();
        assert_eq!(row.to_csv_line(), "2015-06-15 13:00,2015-06-15,13:00,1.842");
    }

    #[test]
    fn test_header_echo_is_dropped() {
        assert_eq!(
            classify_line("Date,Prediction"),
            Err(SkipReason::HeaderEcho)
        );
        assert_eq!(
            classify_line("Date Time, Prediction"),
            Err(SkipReason::HeaderEcho)
        );
    }

    #[test]
    fn test_error_line_is_dropped() {
        assert_eq!(
            classify_line("Error: No data was found"),
            Err(SkipReason::ErrorLine)
        );
    }

    #[test]
    fn test_sentinel_row_is_dropped() {
        assert_eq!(
            classify_line("2015-01-01 00:00,1,1,1,0,0,,0"),
            Err(SkipReason::NoDataSentinel)
        );
    }

    #[test]
    fn test_sentinel_matches_anywhere() {
        // The marker check runs on the whole row, before any field parsing.
        assert_eq!(
            classify_line("2015-01-01 00:00,21,1,10"),
            Err(SkipReason::NoDataSentinel)
        );
    }

    #[test]
    fn test_unsplittable_timestamp_is_dropped() {
        // No whitespace in the first field.
        assert_eq!(
            classify_line("2015-01-01,0.123"),
            Err(SkipReason::Malformed)
        );
        // Too many whitespace-separated parts.
        assert_eq!(
            classify_line("2015-01-01 00:00 extra,0.123"),
            Err(SkipReason::Malformed)
        );
    }

    #[test]
    fn test_missing_prediction_field_is_dropped() {
        assert_eq!(
            classify_line("2015-01-01 00:00"),
            Err(SkipReason::Malformed)
        );
    }

    #[test]
    fn test_empty_line_is_dropped() {
        assert_eq!(classify_line(""), Err(SkipReason::Malformed));
    }

    #[test]
    fn test_filter_response_counts_skips() {
        let body = "Date Time, Prediction\n\
                    2015-01-01 00:00,0.123,,0,0,0,,0\n\
                    Error: No data was found\n\
                    2015-01-01 01:00,1,1,1,0,0,,0\n\
                    not-a-data-row\n\
                    2015-01-01 02:00,0.456,,0,0,0,,0\n";

        let report = filter_response(body);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].prediction, "0.123");
        assert_eq!(report.rows[1].prediction, "0.456");

        assert_eq!(report.skipped.header_echoes, 1);
        assert_eq!(report.skipped.error_lines, 1);
        assert_eq!(report.skipped.sentinels, 1);
        assert_eq!(report.skipped.malformed, 1);
        assert_eq!(report.skipped.total(), 4);
    }

    #[test]
    fn test_filter_response_empty_body() {
        let report = filter_response("");
        assert!(report.rows.is_empty());
        assert_eq!(report.skipped.total(), 0);
    }
}
