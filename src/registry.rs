//! Template lookup under a templates root directory.
//!
//! The registry is stateless: every query goes back to the filesystem.

use crate::error::Result;
use crate::metadata::{read_metadata, Metadata};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Templates available under one root directory, one subdirectory each.
pub struct Registry {
    root: PathBuf,
}

impl Registry {
    /// Creates a registry over `root`.
    ///
    /// # Arguments
    /// * `root` - Templates root; it does not have to exist
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the templates root itself is present.
    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Location a template of this name would have.
    pub fn template_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Returns true iff `name` is a single path segment naming a directory
    /// under the templates root.
    pub fn exists(&self, name: &str) -> bool {
        if !is_template_name(name) {
            debug!("Rejecting template name '{}'", name);
            return false;
        }
        self.template_dir(name).is_dir()
    }

    /// Lists every non-hidden entry under the root in directory-read order.
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Entry names, unsorted; empty when the root is missing
    ///
    /// # Errors
    /// * `Error::IoError` if the existing root cannot be read
    pub fn list_names(&self) -> Result<Vec<String>> {
        if !self.root_exists() {
            debug!("Templates root {} does not exist", self.root.display());
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        debug!("Found {} template(s) in {}", names.len(), self.root.display());
        Ok(names)
    }

    /// Loads the descriptor of a template, tolerating its absence.
    pub fn metadata(&self, name: &str) -> Metadata {
        read_metadata(self.template_dir(name))
    }

    /// Every listed template paired with its descriptor.
    pub fn entries(&self) -> Result<Vec<(String, Metadata)>> {
        Ok(self
            .list_names()?
            .into_iter()
            .map(|name| {
                let metadata = self.metadata(&name);
                (name, metadata)
            })
            .collect())
    }
}

fn is_template_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.chars().any(|c| c == '/' || c == '\\' || std::path::is_separator(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_template_name() {
        assert!(is_template_name("api-clean"));
        assert!(is_template_name("react.vite"));
        assert!(!is_template_name(""));
        assert!(!is_template_name("."));
        assert!(!is_template_name(".."));
        assert!(!is_template_name("a/b"));
        assert!(!is_template_name("../escape"));
        assert!(!is_template_name("a\\b"));
    }
}
