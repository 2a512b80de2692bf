//! Append-only CSV file sink.
//!
//! One output file per run: [`initialize`] truncates the file and writes the
//! header row exactly once, then each fetched batch is appended in order.
//! There is no fsync and no atomicity across appends, so a run killed midway
//! leaves a valid header followed by a prefix of the expected rows — which
//! is fine for a bulk download that can simply be re-run.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Creates or truncates the file at `path` and writes the header line.
///
/// Calling this twice on the same path leaves a file containing only the
/// header; any previous contents are gone.
pub fn initialize(path: &Path, header: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", header)?;
    Ok(())
}

/// Appends each line to the file at `path`, newline-terminated.
///
/// Opens in append mode on every call; the file is created if a caller
/// skipped [`initialize`], though the two binaries never do.
pub fn append_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_output(name: &str) -> PathBuf {
        env::temp_dir().join(format!("coops_fetch_{}_{}.csv", name, std::process::id()))
    }

    #[test]
    fn test_initialize_writes_header() {
        let path = temp_output("init");

        initialize(&path, "DateTime, Date, Time, Prediction").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "DateTime, Date, Time, Prediction\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_initialize_twice_truncates() {
        let path = temp_output("reinit");

        initialize(&path, "DateTime, Prediction").unwrap();
        append_lines(&path, &["2015-01 ,1.234".to_string()]).unwrap();
        initialize(&path, "DateTime, Prediction").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "DateTime, Prediction\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_appends_accumulate_after_header() {
        let path = temp_output("append");

        initialize(&path, "DateTime, Date, Time, Prediction").unwrap();
        append_lines(&path, &["2015-01-01 00:00,2015-01-01,00:00,0.123".to_string()]).unwrap();
        append_lines(&path, &["2016-01-01 00:00,2016-01-01,00:00,0.456".to_string()]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "DateTime, Date, Time, Prediction");
        assert_eq!(lines[1], "2015-01-01 00:00,2015-01-01,00:00,0.123");
        assert_eq!(lines[2], "2016-01-01 00:00,2016-01-01,00:00,0.456");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_empty_batch_is_noop() {
        let path = temp_output("empty");

        initialize(&path, "DateTime, Prediction").unwrap();
        append_lines(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "DateTime, Prediction\n");

        fs::remove_file(&path).unwrap();
    }
}
