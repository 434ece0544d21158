//! Output file writer for a completed run.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use blinkit_core::delimited::format_line;
use blinkit_core::records::DATE_FORMAT;
use blinkit_core::ProductRecord;
use chrono::NaiveDate;

/// `output_<YYYY-MM-DD>.csv` for the given run date.
pub(crate) fn output_file_name(date: NaiveDate) -> String {
    format!("output_{}.csv", date.format(DATE_FORMAT))
}

/// Writes `records` to `dir/output_<date>.csv`, replacing any existing file.
///
/// The first line is the header built from [`ProductRecord::FIELDS`]; each
/// record follows on its own line in slice order. `dir` is created if missing.
///
/// # Errors
///
/// Returns any I/O error from creating the directory or writing the file.
pub(crate) fn write_records(
    dir: &Path,
    date: NaiveDate,
    records: &[ProductRecord],
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(output_file_name(date));

    let mut out = BufWriter::new(File::create(&path)?);
    writeln!(out, "{}", format_line(&ProductRecord::FIELDS))?;
    for record in records {
        writeln!(out, "{}", format_line(&record.to_row()))?;
    }
    out.flush()?;

    Ok(path)
}
