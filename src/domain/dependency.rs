//! Parsed dependency declaration

use super::{DependencyKind, VersionVerb};
use std::fmt;

/// Characters that make a target name unusable as a bare Swift identifier
const UNSAFE_NAME_CHARS: &[char] = &['.', '-'];

/// One `git`/`github`/`binary` line of a Cartfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Origin keyword
    pub kind: DependencyKind,
    /// URL, path or `owner/repo` shorthand, as written between quotes
    pub locator: String,
    /// How `value` is interpreted
    pub verb: VersionVerb,
    /// Version, branch name or commit hash
    pub value: String,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(
        kind: DependencyKind,
        locator: impl Into<String>,
        verb: VersionVerb,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            locator: locator.into(),
            verb,
            value: value.into(),
        }
    }

    /// Last `/`-separated segment of the locator
    pub fn target_name(&self) -> &str {
        self.locator.rsplit('/').next().unwrap_or(&self.locator)
    }

    /// Full URL of the dependency
    pub fn url(&self) -> String {
        if self.locator.starts_with("http") {
            return self.locator.clone();
        }
        format!("{}{}", self.kind.url_prefix(), self.locator)
    }

    /// Returns true for prebuilt binaries, which SwiftPM cannot consume here
    pub fn is_binary(&self) -> bool {
        self.kind == DependencyKind::Binary
    }

    /// Returns true if the target name contains `.` or `-`
    pub fn has_unsafe_name(&self) -> bool {
        self.target_name().contains(UNSAFE_NAME_CHARS)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" {} {}",
            self.kind, self.locator, self.verb, self.value
        )
    }
}
