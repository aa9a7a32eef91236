//! Result of one Cartfile conversion

use super::CartfileEntry;
use std::path::PathBuf;

/// Everything produced by a conversion run
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Cartfile that was read
    pub cartfile: PathBuf,
    /// Directory the package is generated in
    pub package_path: PathBuf,
    /// Name used for the package, product and target
    pub package_name: String,
    /// Parsed entries in file order
    pub entries: Vec<CartfileEntry>,
    /// Target names that are not valid Swift identifiers
    pub unsafe_names: Vec<String>,
    /// Generated Package.swift content
    pub manifest: String,
    /// Whether files were written (false in dry-run mode)
    pub written: bool,
}

impl ConversionReport {
    /// Number of git/github dependencies translated to SwiftPM packages
    pub fn package_count(&self) -> usize {
        self.entries
            .iter()
            .filter_map(CartfileEntry::as_dependency)
            .filter(|dep| !dep.is_binary())
            .count()
    }

    /// Number of binary dependencies left as comments
    pub fn binary_count(&self) -> usize {
        self.entries
            .iter()
            .filter_map(CartfileEntry::as_dependency)
            .filter(|dep| dep.is_binary())
            .count()
    }

    /// Number of comment lines carried over
    pub fn comment_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_comment()).count()
    }

    /// Returns true if some target names need manual fixing
    pub fn has_warnings(&self) -> bool {
        !self.unsafe_names.is_empty()
    }
}
