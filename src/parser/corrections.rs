//! Post-match corrections for dependency declarations
//!
//! Applied in order after the grammar matched:
//! 1. Missing verb defaults to `branch`
//! 2. Missing value defaults to `master`
//! 3. A 40-character hexadecimal value is a commit, so the verb becomes `revision`
//! 4. A `major.minor` value gets a `.0` patch component

use crate::domain::{Dependency, DependencyKind, VersionVerb};

/// Branch used when a declaration has no value
pub const DEFAULT_BRANCH: &str = "master";

/// Length of a full git commit SHA-1
const COMMIT_HASH_LEN: usize = 40;

/// A declaration as matched, before defaults and corrections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration {
    pub kind: DependencyKind,
    pub locator: String,
    pub verb: Option<VersionVerb>,
    pub value: Option<String>,
}

/// Applies defaults and heuristic corrections, producing the final dependency
pub fn apply_corrections(raw: RawDeclaration) -> Dependency {
    let mut verb = raw.verb.unwrap_or(VersionVerb::Branch);
    let mut value = raw.value.unwrap_or_else(|| DEFAULT_BRANCH.to_string());

    if is_commit_hash(&value) {
        verb = VersionVerb::Revision;
    }

    if is_major_minor(&value) {
        value.push_str(".0");
    }

    Dependency::new(raw.kind, raw.locator, verb, value)
}

/// Returns true for exactly 40 hexadecimal characters (any case)
fn is_commit_hash(value: &str) -> bool {
    value.len() == COMMIT_HASH_LEN && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns true when the value is only digits and a single `.`
fn is_major_minor(value: &str) -> bool {
    value.chars().filter(|c| !c.is_ascii_digit()).eq(['.'])
}
