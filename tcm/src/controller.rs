//! Catalogue generation driven by a control file
//!
//! A control file names the groups file on its first line, followed by one
//! `<mapping file> <catalogue file>` pair per line. All paths are relative to
//! the directory holding the control file.

use crate::catalogue::{Catalogue, Mapping};
use crate::text::read_entries;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds one catalogue from the groups file and saves it per declared mapping
#[derive(Debug, Clone, Default)]
pub struct Controller {
    base_path: Option<PathBuf>,
    groups_path: String,
    mappings: Vec<(String, String)>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute directory of the loaded control file
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// Groups file as declared in the control file, relative to `base_path`
    pub fn groups_path(&self) -> &str {
        &self.groups_path
    }

    /// `(mapping file, catalogue file)` pairs in declared order
    pub fn mappings(&self) -> &[(String, String)] {
        &self.mappings
    }

    /// Load the control file at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::Read`] if the file cannot be read
    /// - [`Error::EmptyControlFile`] if it has no non-blank line
    /// - [`Error::MalformedControlEntry`] if a pair line does not hold exactly
    ///   two tokens
    pub fn load_control(&mut self, path: &Path) -> Result<()> {
        let mut entries = read_entries(path)?.into_iter();

        let (_, groups_path) = entries
            .next()
            .ok_or_else(|| Error::EmptyControlFile(path.to_path_buf()))?;

        let mappings = entries
            .map(|(line, entry)| {
                let tokens: Vec<&str> = entry.split_whitespace().collect();
                match tokens.as_slice() {
                    [mapping, catalogue] => Ok((mapping.to_string(), catalogue.to_string())),
                    _ => Err(Error::MalformedControlEntry {
                        path: path.to_path_buf(),
                        line,
                        entry: entry.clone(),
                    }),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let base_path = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let base_path = std::path::absolute(base_path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            "Loaded control file {} ({} mappings, groups file {})",
            path.display(),
            mappings.len(),
            groups_path
        );

        self.base_path = Some(base_path);
        self.groups_path = groups_path;
        self.mappings = mappings;
        Ok(())
    }

    /// Read the group file names listed in the groups file at `path`
    pub fn load_groups(&self, path: &Path) -> Result<Vec<String>> {
        Ok(read_entries(path)?
            .into_iter()
            .map(|(_, group)| group)
            .collect())
    }

    /// Read a mapping file of `<group file> [label]` lines.
    ///
    /// A missing label maps to the empty string. When a group is listed more
    /// than once the last label wins and the group keeps its first position.
    pub fn load_mapping(&self, path: &Path) -> Result<Mapping> {
        Ok(read_entries(path)?
            .into_iter()
            .map(|(_, entry)| match entry.split_once(char::is_whitespace) {
                Some((group, label)) => (group.to_string(), label.trim().to_string()),
                None => (entry, String::new()),
            })
            .collect())
    }

    /// Build the catalogue from the groups file and save it once per
    /// declared mapping.
    ///
    /// `output_dir` is created if missing. The groups list is the same for
    /// every mapping, so the catalogue is built once and its duplicate report
    /// is returned once. The first failure aborts the run.
    pub fn generate_catalogues(&self, output_dir: &Path) -> Result<Vec<String>> {
        let base_path = self.base_path.as_deref().ok_or_else(|| {
            Error::InvalidState("generate_catalogues called before load_control".to_string())
        })?;

        std::fs::create_dir_all(output_dir).map_err(|source| Error::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let groups = self.load_groups(&base_path.join(&self.groups_path))?;
        let mut catalogue = Catalogue::new();
        let mut report = Vec::new();
        for group in &groups {
            report.extend(catalogue.add_group_file(&base_path.join(group))?);
        }

        for (mapping_file, catalogue_file) in &self.mappings {
            let mapping = self.load_mapping(&base_path.join(mapping_file))?;
            catalogue.save(&output_dir.join(catalogue_file), &mapping)?;
            debug!(
                "Generated {} from {} ({} works)",
                catalogue_file,
                mapping_file,
                catalogue.len()
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_controller_has_no_control() {
        let controller = Controller::new();
        assert!(controller.base_path().is_none());
        assert!(controller.mappings().is_empty());
        assert_eq!(controller.groups_path(), "");
    }

    #[test]
    fn test_generate_before_load_control() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("output");

        let err = Controller::new().generate_catalogues(&output_dir).unwrap_err();

        assert!(matches!(err, Error::InvalidState(_)));
        assert!(!output_dir.exists(), "no output directory before control is loaded");
    }

    #[test]
    fn test_load_mapping_label_with_inner_spaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.txt");
        std::fs::write(&path, "group1.txt  Early  texts\ngroup2.txt\tlate\n").unwrap();

        let mapping = Controller::new().load_mapping(&path).unwrap();

        let entries: Vec<_> = mapping.iter().map(|(g, l)| (g.as_str(), l.as_str())).collect();
        assert_eq!(entries, vec![("group1.txt", "Early  texts"), ("group2.txt", "late")]);
    }

    #[test]
    fn test_load_mapping_duplicate_group_last_label_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.txt");
        std::fs::write(&path, "g1.txt first\ng2.txt other\ng1.txt second\n").unwrap();

        let mapping = Controller::new().load_mapping(&path).unwrap();

        let entries: Vec<_> = mapping.iter().map(|(g, l)| (g.as_str(), l.as_str())).collect();
        assert_eq!(entries, vec![("g1.txt", "second"), ("g2.txt", "other")]);
    }

    #[test]
    fn test_load_control_without_mappings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("control.txt");
        std::fs::write(&path, "groups.txt\n").unwrap();

        let mut controller = Controller::new();
        controller.load_control(&path).unwrap();

        assert_eq!(controller.base_path(), Some(dir.path()));
        assert!(controller.mappings().is_empty());
    }
}
