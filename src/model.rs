//! Shared data types for the download pipelines.

/// One hourly tide prediction, reshaped for CSV output.
///
/// All fields are kept as the strings the API returned them in; no numeric
/// or date parsing happens on this path, so values round-trip byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyPrediction {
    /// Combined timestamp as returned by the API, e.g. "2015-01-01 00:00".
    pub date_time: String,
    /// Date half of the timestamp, e.g. "2015-01-01".
    pub date: String,
    /// Time half of the timestamp, e.g. "00:00".
    pub time: String,
    /// Predicted tide height relative to the requested datum.
    pub prediction: String,
}

impl HourlyPrediction {
    /// Renders the row as a CSV data line: `DateTime,Date,Time,Prediction`.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.date_time, self.date, self.time, self.prediction
        )
    }
}

/// Why the hourly filter dropped a response line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The API repeats its column-header line inside each response body.
    HeaderEcho,
    /// An "Error: ..." message substituted for data.
    ErrorLine,
    /// Row carries the "1,1,1" no-data marker.
    NoDataSentinel,
    /// First field did not split into a date part and a time part, or the
    /// prediction field was missing entirely. Empty lines land here too.
    Malformed,
}
