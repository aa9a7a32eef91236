//! Cartfile entries, in file order

use super::Dependency;

/// A non-blank Cartfile line after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartfileEntry {
    /// Line starting with `#`, kept verbatim
    Comment { line: String },
    /// Dependency declaration
    Dependency(Dependency),
}

impl CartfileEntry {
    /// Creates a comment entry from the raw line
    pub fn comment(line: impl Into<String>) -> Self {
        CartfileEntry::Comment { line: line.into() }
    }

    /// Returns the dependency if this entry is one
    pub fn as_dependency(&self) -> Option<&Dependency> {
        match self {
            CartfileEntry::Dependency(dep) => Some(dep),
            CartfileEntry::Comment { .. } => None,
        }
    }

    /// Returns true for comment lines
    pub fn is_comment(&self) -> bool {
        matches!(self, CartfileEntry::Comment { .. })
    }
}

impl From<Dependency> for CartfileEntry {
    fn from(dep: Dependency) -> Self {
        CartfileEntry::Dependency(dep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyKind, VersionVerb};

    #[test]
    fn test_comment_has_no_dependency() {
        let entry = CartfileEntry::comment("# Require version 1.x");
        assert!(entry.is_comment());
        assert!(entry.as_dependency().is_none());
    }

    #[test]
    fn test_from_dependency() {
        let dep = Dependency::new(DependencyKind::Git, "a/b", VersionVerb::Branch, "master");
        let entry: CartfileEntry = dep.clone().into();
        assert!(!entry.is_comment());
        assert_eq!(entry.as_dependency(), Some(&dep));
    }
}
