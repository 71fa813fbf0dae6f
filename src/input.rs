//! Loading the list of items to sort: one item per line, surrounding
//! whitespace trimmed, blank lines skipped.

use crate::errors::{SortError, SortResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the items to sort from a file.
/// An unreadable or empty file is an error; order is preserved.
pub fn read_items(path: &Path) -> SortResult<Vec<String>> {
    let file = File::open(path).map_err(|source| SortError::ReadInput {
        path: path.to_owned(),
        source,
    })?;
    let items = parse_items(BufReader::new(file)).map_err(|source| SortError::ReadInput {
        path: path.to_owned(),
        source,
    })?;
    if items.is_empty() {
        return Err(SortError::EmptyInput(path.to_owned()));
    }
    Ok(items)
}

fn parse_items<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let item = line.trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }
    Ok(items)
}
