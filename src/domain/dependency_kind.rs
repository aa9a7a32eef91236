//! Dependency origin declared by the leading Cartfile keyword

use serde::Serialize;
use std::fmt;

/// Hosting prefix used to expand `owner/repo` shorthands
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Kind of a Cartfile dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Any git repository, locator is a URL or path (`git "..."`)
    Git,
    /// GitHub repository, locator is `owner/repo` or a full URL (`github "..."`)
    Github,
    /// Prebuilt binary framework described by a JSON spec (`binary "..."`)
    Binary,
}

impl DependencyKind {
    /// Parses the leading keyword of a declaration
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "git" => Some(DependencyKind::Git),
            "github" => Some(DependencyKind::Github),
            "binary" => Some(DependencyKind::Binary),
            _ => None,
        }
    }

    /// Returns the Cartfile keyword for this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            DependencyKind::Git => "git",
            DependencyKind::Github => "github",
            DependencyKind::Binary => "binary",
        }
    }

    /// Prefix prepended to locators that are not already URLs
    pub fn url_prefix(&self) -> &'static str {
        match self {
            DependencyKind::Github => GITHUB_URL_PREFIX,
            DependencyKind::Git | DependencyKind::Binary => "",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
