//! Line-oriented descriptor reading shared by every input format

use crate::{Error, Result};
use std::path::Path;

/// Read `path` and return its non-blank lines, trimmed, in file order.
///
/// Each returned tuple carries the 1-based line number for diagnostics.
pub(crate) fn read_entries(path: &Path) -> Result<Vec<(usize, String)>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            (!line.is_empty()).then(|| (index + 1, line.to_string()))
        })
        .collect())
}
