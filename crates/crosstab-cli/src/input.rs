//! Loading items from CSV or JSON.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use crosstab::Entry;

use crate::cli::InputFormat;

/// Reads entries from `path`, or from stdin when `path` is `None`.
pub fn load_entries(path: Option<&Path>, format: InputFormat) -> Result<Vec<Entry>> {
    let entries = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            parse_entries(BufReader::new(file), format)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => parse_entries(io::stdin().lock(), format).context("failed to parse stdin")?,
    };
    tracing::debug!(count = entries.len(), ?format, "loaded entries");
    Ok(entries)
}

/// Parses entries in the given format.
///
/// CSV needs a header row naming `column`, `row` and `cell`; other columns
/// are ignored. JSON is an array of objects with the same fields.
pub fn parse_entries<R: Read>(reader: R, format: InputFormat) -> Result<Vec<Entry>> {
    match format {
        InputFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
            csv_reader
                .deserialize()
                .collect::<Result<Vec<Entry>, csv::Error>>()
                .context("invalid CSV record")
        }
        InputFormat::Json => serde_json::from_reader(reader).context("invalid JSON input"),
    }
}
