//! Bill-of-materials extraction: mine part numbers out of a CSV export.
//!
//! BOM exports in the wild disagree on field delimiters and column layout,
//! so the reader sniffs the delimiter, locates the configured columns by
//! header name, and keeps only rows whose description carries the vendor
//! marker.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::domain::{self, Config, DecodeError, Decoded};

/// One vendor row extracted from a BOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The part number extracted from the description field.
    pub part_number: String,
    /// Row quantity; blank or unparseable quantities default to 1.
    pub quantity: u32,
    /// The full description field the part number came from.
    pub description: String,
}

/// Errors from reading a BOM file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read BOM file '{path}'", path = .path.display())]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed as CSV.
    #[error("failed to parse BOM file '{path}'", path = .path.display())]
    Csv {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying CSV failure.
        #[source]
        source: csv::Error,
    },

    /// The header row lacks the configured description column.
    #[error("BOM file '{path}' has no '{column}' column", path = .path.display())]
    MissingColumn {
        /// The file whose header was searched.
        path: PathBuf,
        /// The column name that was not found.
        column: String,
    },

    /// The configured vendor marker could not be compiled into a search
    /// pattern.
    #[error("invalid vendor marker '{marker}'")]
    Marker {
        /// The configured marker.
        marker: String,
        /// The underlying regex failure.
        #[source]
        source: regex::Error,
    },
}

/// Extract vendor rows from the BOM at `path`.
///
/// The field delimiter is sniffed from the first kilobyte: `;` wins when
/// present, `,` otherwise, matching the spreadsheet exports this tool
/// targets. A row is kept when its description field contains the
/// configured vendor marker followed by a part number; the quantity column
/// is optional and defaults to 1.
///
/// # Errors
///
/// Fails when the file cannot be read, a row is not valid CSV, or the
/// header lacks the configured description column. Rows that merely do not
/// mention the vendor are skipped, not errors.
pub fn extract(path: &Path, config: &Config) -> Result<Vec<Entry>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let delimiter = sniff_delimiter(&contents);
    debug!(delimiter = %char::from(delimiter), "sniffed BOM delimiter");

    let pattern = part_number_pattern(&config.marker)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        // Headers are handled manually so column lookup stays
        // case-insensitive.
        .has_headers(false)
        // Accept rows with varying column counts.
        .flexible(true)
        .from_reader(contents.as_bytes());

    let mut records = reader.records();
    let Some(header) = records.next() else {
        return Ok(Vec::new());
    };
    let header = header.map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let description_index =
        find_column(&header, &config.description_column).ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: config.description_column.clone(),
        })?;
    let quantity_index = find_column(&header, &config.quantity_column);

    let mut entries = Vec::new();
    for record in records {
        let record = record.map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let description = record.get(description_index).unwrap_or("").trim();
        let Some(captures) = pattern.captures(description) else {
            continue;
        };

        let quantity = quantity_index
            .and_then(|index| record.get(index))
            .map(str::trim)
            .filter(|quantity| !quantity.is_empty())
            .and_then(|quantity| quantity.parse().ok())
            .unwrap_or(1);

        entries.push(Entry {
            part_number: captures[1].to_string(),
            quantity,
            description: description.to_string(),
        });
    }

    debug!(count = entries.len(), "extracted BOM entries");
    Ok(entries)
}

/// Decode every extracted entry, preserving input order.
///
/// Entries decode independently, so the batch runs in parallel; one
/// malformed part number yields an `Err` in its slot without affecting the
/// rest.
#[must_use]
pub fn decode_entries(entries: &[Entry], strict: bool) -> Vec<Result<Decoded, DecodeError>> {
    entries
        .par_iter()
        .map(|entry| {
            if strict {
                domain::decode_strict(&entry.part_number)
            } else {
                domain::decode(&entry.part_number)
            }
        })
        .collect()
}

fn sniff_delimiter(contents: &str) -> u8 {
    let sample = &contents.as_bytes()[..contents.len().min(1024)];
    if sample.contains(&b';') { b';' } else { b',' }
}

fn part_number_pattern(marker: &str) -> Result<Regex, Error> {
    Regex::new(&format!(
        r"(?i){}\s+([A-Z0-9][A-Z0-9\-]+)",
        regex::escape(marker)
    ))
    .map_err(|source| Error::Marker {
        marker: marker.to_string(),
        source,
    })
}

fn find_column(header: &csv::StringRecord, name: &str) -> Option<usize> {
    header
        .iter()
        .position(|field| field.trim().eq_ignore_ascii_case(name))
}
