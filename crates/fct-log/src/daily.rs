//! Daily tab-separated log writer.

use chrono::{Local, NaiveDate};
use fct_core::Result;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Writer for one day's log file.
///
/// Opening the writer creates `<base> <YYYY-MM-DD>.csv` in the target
/// directory with a tab-separated header (newline after the last column, no
/// trailing tab), or picks up the existing file when the station already
/// logged today. Rows are appended one at a time; a row whose length does
/// not match the header is reported and skipped, never written and never an
/// error.
#[derive(Debug)]
pub struct DailyCsv {
    path: PathBuf,
    columns: usize,
}

impl DailyCsv {
    /// Open (or create) today's log file.
    ///
    /// # Errors
    /// Propagates I/O errors from creating the file or writing the header.
    pub fn open<S: AsRef<str>>(dir: impl AsRef<Path>, base: &str, header: &[S]) -> Result<Self> {
        Self::open_for_date(dir, base, header, Local::now().date_naive())
    }

    /// Open (or create) the log file for an explicit date. Split out from
    /// [`DailyCsv::open`] so tests and reprocessing tools can pin the day.
    pub fn open_for_date<S: AsRef<str>>(
        dir: impl AsRef<Path>,
        base: &str,
        header: &[S],
        date: NaiveDate,
    ) -> Result<Self> {
        let name = format!("{base} {}.csv", date.format("%Y-%m-%d"));
        let path = dir.as_ref().join(name);

        if path.exists() {
            info!(target: "fct::log", path = %path.display(), "reusing today's log file");
        } else {
            info!(target: "fct::log", path = %path.display(), "starting a new log file");
            let mut file = File::create(&path)?;
            file.write_all(tab_line(header).as_bytes())?;
        }

        Ok(Self {
            path,
            columns: header.len(),
        })
    }

    /// The file this writer appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of columns fixed by the header.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Append one row.
    ///
    /// Returns `Ok(true)` when the row was written, `Ok(false)` when it was
    /// skipped for not matching the header's column count (a diagnostic is
    /// emitted and the file is untouched).
    ///
    /// # Errors
    /// Propagates I/O errors from opening or writing the file.
    pub fn append<S: AsRef<str>>(&self, row: &[S]) -> Result<bool> {
        if row.len() != self.columns {
            warn!(
                target: "fct::log",
                expected = self.columns,
                actual = row.len(),
                "log row does not match the header, skipping"
            );
            return Ok(false);
        }

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(tab_line(row).as_bytes())?;
        Ok(true)
    }
}

/// Join fields with tabs and terminate with a newline.
fn tab_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\t");
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADER: [&str; 3] = ["serial", "voltage", "verdict"];

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    #[test]
    fn test_file_name_carries_the_date() {
        let dir = tempfile::tempdir().unwrap();
        let log = DailyCsv::open_for_date(dir.path(), "station7", &HEADER, day()).unwrap();

        assert_eq!(
            log.path().file_name().unwrap().to_str().unwrap(),
            "station7 2026-08-27.csv"
        );
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = DailyCsv::open_for_date(dir.path(), "station7", &HEADER, day()).unwrap();
        drop(log);

        // Reopening the same day must not duplicate the header.
        let log = DailyCsv::open_for_date(dir.path(), "station7", &HEADER, day()).unwrap();
        let contents = std::fs::read_to_string(log.path()).unwrap();

        assert_eq!(contents, "serial\tvoltage\tverdict\n");
    }

    #[test]
    fn test_append_writes_one_tab_separated_line() {
        let dir = tempfile::tempdir().unwrap();
        let log = DailyCsv::open_for_date(dir.path(), "station7", &HEADER, day()).unwrap();

        let written = log.append(&["V1125", "13.49", "OK"]).unwrap();
        assert!(written);

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "serial\tvoltage\tverdict\nV1125\t13.49\tOK\n");
    }

    #[test]
    fn test_mismatched_row_is_a_file_noop() {
        let dir = tempfile::tempdir().unwrap();
        let log = DailyCsv::open_for_date(dir.path(), "station7", &HEADER, day()).unwrap();

        assert!(!log.append(&["V1125", "13.49"]).unwrap());
        assert!(!log.append(&["V1125", "13.49", "OK", "extra"]).unwrap());

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "serial\tvoltage\tverdict\n");
    }

    #[test]
    fn test_rows_accumulate_across_writers() {
        let dir = tempfile::tempdir().unwrap();
        {
            let log = DailyCsv::open_for_date(dir.path(), "station7", &HEADER, day()).unwrap();
            log.append(&["A", "1.0", "OK"]).unwrap();
        }
        let log = DailyCsv::open_for_date(dir.path(), "station7", &HEADER, day()).unwrap();
        log.append(&["B", "2.0", "NG"]).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            contents,
            "serial\tvoltage\tverdict\nA\t1.0\tOK\nB\t2.0\tNG\n"
        );
    }
}
