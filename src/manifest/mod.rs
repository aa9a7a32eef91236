//! Cartfile reading and Package.swift assembly
//!
//! This module provides:
//! - Parsing a whole Cartfile into ordered entries, aborting on the first bad line
//! - Rendering both line lists and the identifier warning block
//! - Splicing everything into the Package.swift template
//! - Writing the generated package to disk

mod template;
mod writer;

pub use template::{
    render_package_swift, warning_block, EMPTY_SOURCE_FILENAME, SWIFT_TOOLS_VERSION,
};
pub use writer::{package_name_from_path, PackageWriter, MANIFEST_FILENAME};

use crate::domain::{CartfileEntry, Dependency};
use crate::error::ManifestError;
use crate::parser::parse_line;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// LF, CRLF and bare CR all end a line
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

/// A parsed Cartfile, entries kept in file order
#[derive(Debug, Clone)]
pub struct Cartfile {
    path: PathBuf,
    entries: Vec<CartfileEntry>,
}

impl Cartfile {
    /// Parses Cartfile content; `path` is only used for error reporting
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let mut entries = Vec::new();

        for (index, line) in LINE_BREAK_RE.split(content).enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry = parse_line(line)
                .map_err(|reason| ManifestError::unparsable_line(&path, index, line, reason))?;
            tracing::debug!(line = index, ?entry, "parsed Cartfile line");
            entries.push(entry);
        }

        Ok(Self { path, entries })
    }

    /// Reads and parses a Cartfile from disk
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::not_found(path)
            } else {
                ManifestError::read_error(path, e)
            }
        })?;

        Self::parse(&content, path)
    }

    /// Path the Cartfile was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in file order
    pub fn entries(&self) -> &[CartfileEntry] {
        &self.entries
    }

    /// Consumes the Cartfile, returning its entries
    pub fn into_entries(self) -> Vec<CartfileEntry> {
        self.entries
    }

    /// Dependency declarations, skipping comments
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.entries.iter().filter_map(CartfileEntry::as_dependency)
    }

    /// Target dependency lines, one per entry
    pub fn target_lines(&self) -> Vec<String> {
        self.entries.iter().map(CartfileEntry::target_line).collect()
    }

    /// Package dependency lines, one per entry
    pub fn dependency_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(CartfileEntry::dependency_line)
            .collect()
    }

    /// Target names of source dependencies containing `.` or `-`
    pub fn unsafe_target_names(&self) -> Vec<&str> {
        self.dependencies()
            .filter(|dep| !dep.is_binary() && dep.has_unsafe_name())
            .map(Dependency::target_name)
            .collect()
    }

    /// Renders the full Package.swift content
    pub fn to_package_swift(&self, package_name: &str) -> String {
        let warning = warning_block(&self.unsafe_target_names());
        render_package_swift(
            package_name,
            &warning,
            &self.dependency_lines(),
            &self.target_lines(),
        )
    }
}

/// Converts raw Cartfile text into Package.swift content
pub fn assemble(
    content: &str,
    source_path: impl Into<PathBuf>,
    package_name: &str,
) -> Result<String, ManifestError> {
    let cartfile = Cartfile::parse(content, source_path)?;
    Ok(cartfile.to_package_swift(package_name))
}
