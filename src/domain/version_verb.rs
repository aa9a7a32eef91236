//! Version requirement verbs
//!
//! Maps Carthage operators onto SwiftPM package requirements:
//! - `~>` / `upToNextMajor` -> `.upToNextMajor(from: "x")`
//! - `upToNextMinor` -> `.upToNextMinor(from: "x")`
//! - `>=` / `from` -> `.from: "x"`
//! - `==` / `revision` / `commit` -> `.revision("x")`
//! - `exact` -> `.exact("x")`
//! - `branch` (default when no operator is given) -> `.branch("x")`

use serde::Serialize;
use std::fmt;

/// How a version, branch or commit value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VersionVerb {
    /// Minimum version (`>=`)
    From,
    /// Compatible up to the next major version (`~>`)
    UpToNextMajor,
    /// Compatible up to the next minor version
    UpToNextMinor,
    /// Track a branch
    Branch,
    /// Pin a commit (`==`, or any 40-character hex value)
    Revision,
    /// Exact version
    Exact,
}

impl VersionVerb {
    /// Parses an operator or verb word as written in a Cartfile
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "upToNextMajor" | "~>" => Some(VersionVerb::UpToNextMajor),
            "upToNextMinor" => Some(VersionVerb::UpToNextMinor),
            "branch" => Some(VersionVerb::Branch),
            "revision" | "commit" | "==" => Some(VersionVerb::Revision),
            "exact" => Some(VersionVerb::Exact),
            "from" | ">=" => Some(VersionVerb::From),
            _ => None,
        }
    }

    /// SwiftPM requirement keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            VersionVerb::From => "from",
            VersionVerb::UpToNextMajor => "upToNextMajor",
            VersionVerb::UpToNextMinor => "upToNextMinor",
            VersionVerb::Branch => "branch",
            VersionVerb::Revision => "revision",
            VersionVerb::Exact => "exact",
        }
    }

    /// Renders the SwiftPM requirement expression for `value`
    pub fn requirement(&self, value: &str) -> String {
        match self {
            VersionVerb::UpToNextMajor | VersionVerb::UpToNextMinor => {
                format!(".{}(from: \"{}\")", self.keyword(), value)
            }
            VersionVerb::From => format!(".{}: \"{}\"", self.keyword(), value),
            VersionVerb::Exact | VersionVerb::Revision | VersionVerb::Branch => {
                format!(".{}(\"{}\")", self.keyword(), value)
            }
        }
    }
}

impl fmt::Display for VersionVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
