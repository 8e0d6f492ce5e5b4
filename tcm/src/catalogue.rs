//! Catalogue of work ids resolved against ordered group files
//!
//! Group files are added in precedence order. The first group to list a work
//! id owns it; later groups listing the same id lose that claim and each loss
//! is reported.

use crate::ordered_map::OrderedMap;
use crate::text::read_entries;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Group file name → label, in output order
pub type Mapping = OrderedMap<String, String>;

/// De-duplicated work id → owning group file name assignment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    data: OrderedMap<String, String>,
}

impl Catalogue {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the work ids listed in the group file at `path`.
    ///
    /// The group is identified by the file name of `path`. Ids already owned
    /// by another group stay with that group; for each of them a line
    /// `"<id> removed from <group>"` naming the group being added is returned.
    /// Ids repeated within the same group are ignored silently.
    pub fn add_group_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let group = group_name(path);
        let mut report = Vec::new();

        for (_, work) in read_entries(path)? {
            match self.data.get(&work) {
                // Same group: repeated line or re-added file, neither is a
                // conflict between groups and neither is reported
                Some(owner) if *owner == group => {}
                Some(_) => report.push(format!("{} removed from {}", work, group)),
                None => {
                    self.data.insert(work, group.clone());
                }
            }
        }

        debug!(
            "Added group {} ({} duplicates removed, {} works in catalogue)",
            group,
            report.len(),
            self.data.len()
        );
        Ok(report)
    }

    /// Write `"<work> <label>"` lines to `path`.
    ///
    /// Lines are grouped by `mapping` order, then catalogue order within each
    /// group. Groups missing from `mapping` are not written. The parent
    /// directory of `path` must already exist.
    pub fn save(&self, path: &Path, mapping: &Mapping) -> Result<()> {
        let write_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);

        for (group, label) in mapping.iter() {
            for work in self.works_in(group) {
                writeln!(writer, "{} {}", work, label).map_err(write_error)?;
            }
        }
        writer.flush().map_err(write_error)?;

        debug!("Saved catalogue to {}", path.display());
        Ok(())
    }

    /// Group owning `work`, if any
    pub fn group_of(&self, work: &str) -> Option<&str> {
        self.data.get(work).map(String::as_str)
    }

    /// Iterate `(work, group)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.data
            .iter()
            .map(|(work, group)| (work.as_str(), group.as_str()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn works_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |(_, owner)| *owner == group)
            .map(|(work, _)| work)
    }
}

impl<W, G> FromIterator<(W, G)> for Catalogue
where
    W: Into<String>,
    G: Into<String>,
{
    /// Build a catalogue directly from `(work, group)` pairs; the first pair
    /// for a work wins.
    fn from_iter<I: IntoIterator<Item = (W, G)>>(iter: I) -> Self {
        let mut data = OrderedMap::new();
        for (work, group) in iter {
            let work = work.into();
            if !data.contains_key(&work) {
                data.insert(work, group.into());
            }
        }
        Self { data }
    }
}

fn group_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
