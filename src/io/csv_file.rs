//! Generic CSV reading and writing
//!
//! The shop's data files are plain comma-separated text with a header row.
//! Quoting is disabled in both directions: fields are split on every comma
//! and written verbatim, so a comma inside a title corrupts the row.
//!
//! # Reading
//!
//! [`read_csv`] skips the header and blank lines, then hands every remaining
//! row to a caller-supplied conversion. Rows the conversion rejects are
//! logged with their line number and skipped; the rest are returned in file
//! order.
//!
//! # Writing
//!
//! [`save_csv`] truncates the target and writes the header followed by one
//! line per record. There is no append mode; every save is a full rewrite.

use crate::types::ShopError;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::warn;

/// Read every convertible row of the CSV file at `path`
///
/// # Errors
///
/// Returns `ShopError::FileUnavailable` if the file cannot be opened and
/// `ShopError::CsvError` if reading fails part way through.
pub fn read_csv<T, F>(path: &Path, convert: F) -> Result<Vec<T>, ShopError>
where
    F: FnMut(&StringRecord) -> Result<T, String>,
{
    let file = File::open(path).map_err(|e| ShopError::file_unavailable(path, &e))?;
    read_csv_from(file, convert)
}

/// Read every convertible row from any reader
///
/// The first physical line is treated as the header and never converted,
/// whatever it contains. Rows that are not valid UTF-8 are skipped like
/// rejected rows.
pub fn read_csv_from<R, T, F>(input: R, mut convert: F) -> Result<Vec<T>, ShopError>
where
    R: Read,
    F: FnMut(&StringRecord) -> Result<T, String>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let raw = result?;
        let line = raw.position().map(|pos| pos.line()).unwrap_or_default();
        if line == 1 {
            continue;
        }

        let row = match StringRecord::from_byte_record(raw) {
            Ok(row) => row,
            Err(e) => {
                warn!(line, "Skipping row that is not valid UTF-8: {}", e);
                continue;
            }
        };

        // Whitespace-only lines come through as a single empty field
        if row.iter().all(str::is_empty) {
            continue;
        }

        match convert(&row) {
            Ok(record) => records.push(record),
            Err(e) => warn!(line, "Skipping malformed row: {}", e),
        }
    }

    Ok(records)
}

/// Write `header` and one row per record to `output`
///
/// An empty header slice writes no header line.
pub fn write_csv<'a, T, R, F>(
    output: &mut dyn Write,
    header: &[&str],
    records: impl IntoIterator<Item = &'a T>,
    to_row: F,
) -> Result<(), ShopError>
where
    T: 'a,
    R: Serialize,
    F: Fn(&'a T) -> R,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .flexible(true)
        .from_writer(output);

    if !header.is_empty() {
        writer.write_record(header)?;
    }

    for record in records {
        writer.serialize(to_row(record))?;
    }

    writer.flush()?;

    Ok(())
}

/// Overwrite the file at `path` with `header` and the given records
///
/// Missing parent directories are created first.
pub fn save_csv<'a, T, R, F>(
    path: &Path,
    header: &[&str],
    records: impl IntoIterator<Item = &'a T>,
    to_row: F,
) -> Result<(), ShopError>
where
    T: 'a,
    R: Serialize,
    F: Fn(&'a T) -> R,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ShopError::file_unavailable(parent, &e))?;
    }

    let mut file = File::create(path).map_err(|e| ShopError::file_unavailable(path, &e))?;
    write_csv(&mut file, header, records, to_row)
}
