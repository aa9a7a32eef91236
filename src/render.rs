//! Package.swift line rendering for Cartfile entries
//!
//! Every entry renders to two lines:
//! - a package dependency line (`.package(url: ..., <requirement>),`)
//! - a target dependency line (`"<Name>",`)
//!
//! Comments and binaries render as Swift comments in both places.

use crate::domain::{CartfileEntry, Dependency};

/// Marker prepended to passthrough lines
const SWIFT_COMMENT: &str = "// ";

impl CartfileEntry {
    /// Line for the `targets: [.target(dependencies: [...])]` list
    pub fn target_line(&self) -> String {
        match self {
            CartfileEntry::Comment { line } => format!("{}{}", SWIFT_COMMENT, line),
            CartfileEntry::Dependency(dep) if dep.is_binary() => binary_placeholder(dep),
            CartfileEntry::Dependency(dep) => format!("\"{}\",", dep.target_name()),
        }
    }

    /// Line for the package-level `dependencies: [...]` list
    pub fn dependency_line(&self) -> String {
        match self {
            CartfileEntry::Comment { line } => format!("{}{}", SWIFT_COMMENT, line),
            CartfileEntry::Dependency(dep) if dep.is_binary() => binary_placeholder(dep),
            CartfileEntry::Dependency(dep) => format!(
                ".package(url: \"{}\", {}),",
                dep.url(),
                dep.verb.requirement(&dep.value)
            ),
        }
    }
}

fn binary_placeholder(dep: &Dependency) -> String {
    format!("{}binary not managed yet for : {}", SWIFT_COMMENT, dep.url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyKind, VersionVerb};
    use crate::parser::parse_line;

    fn entry(line: &str) -> CartfileEntry {
        parse_line(line).unwrap()
    }

    #[test]
    fn test_github_lines() {
        let e = entry(r#"github "Alamofire/Alamofire" ~> 4.8"#);
        assert_eq!(e.target_line(), "\"Alamofire\",");
        assert_eq!(
            e.dependency_line(),
            r#".package(url: "https://github.com/Alamofire/Alamofire", .upToNextMajor(from: "4.8.0")),"#
        );
    }

    #[test]
    fn test_from_requirement_line() {
        let e = entry(r#"github "ReactiveCocoa/ReactiveCocoa" >= 2.3.1"#);
        assert_eq!(
            e.dependency_line(),
            r#".package(url: "https://github.com/ReactiveCocoa/ReactiveCocoa", .from: "2.3.1"),"#
        );
    }

    #[test]
    fn test_branch_requirement_line() {
        let e = entry(r#"git "https://enterprise.local/desktop/git-error-translations2.git" "development""#);
        assert_eq!(e.target_line(), "\"git-error-translations2.git\",");
        assert_eq!(
            e.dependency_line(),
            r#".package(url: "https://enterprise.local/desktop/git-error-translations2.git", .branch("development")),"#
        );
    }

    #[test]
    fn test_binary_lines_are_comments() {
        let e = entry(r#"binary "https://dl.google.com/dl/firebase/ios/carthage/FirebaseAnalyticsBinary.json""#);
        let expected = "// binary not managed yet for : https://dl.google.com/dl/firebase/ios/carthage/FirebaseAnalyticsBinary.json";
        assert_eq!(e.dependency_line(), expected);
        assert_eq!(e.target_line(), expected);
    }

    #[test]
    fn test_relative_binary_keeps_locator() {
        let dep = Dependency::new(
            DependencyKind::Binary,
            "relative/path/MyFramework.json",
            VersionVerb::UpToNextMajor,
            "2.3.0",
        );
        let e = CartfileEntry::from(dep);
        assert_eq!(
            e.target_line(),
            "// binary not managed yet for : relative/path/MyFramework.json"
        );
    }

    #[test]
    fn test_comment_lines() {
        let e = CartfileEntry::comment("# Use the latest version");
        assert_eq!(e.target_line(), "// # Use the latest version");
        assert_eq!(e.dependency_line(), "// # Use the latest version");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let line = r#"github "airbnb/lottie-ios" ~> 2.5"#;
        assert_eq!(entry(line).dependency_line(), entry(line).dependency_line());
        assert_eq!(entry(line).target_line(), entry(line).target_line());
    }
}
