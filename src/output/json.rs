//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the conversion report
//! - Both rendered Package.swift lines for every entry

use crate::domain::{CartfileEntry, ConversionReport, DependencyKind, VersionVerb};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Whether to embed the generated Package.swift
    show_manifest: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(show_manifest: bool) -> Self {
        Self { show_manifest }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether files were left untouched
    dry_run: bool,
    cartfile: String,
    package_path: String,
    package_name: &'a str,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-line results in file order
    entries: Vec<JsonEntry<'a>>,
    /// Target names that need manual fixing
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
    /// Generated Package.swift (dry-run or --print only)
    #[serde(skip_serializing_if = "Option::is_none")]
    manifest: Option<&'a str>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    packages: usize,
    binaries: usize,
    comments: usize,
}

/// JSON representation of a Cartfile entry
#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<DependencyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locator: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verb: Option<VersionVerb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    /// Line in the package `dependencies` list
    dependency_line: String,
    /// Line in the target `dependencies` list
    target_line: String,
}

impl JsonFormatter {
    /// Convert an entry to its JSON representation
    fn entry_to_json(entry: &CartfileEntry) -> JsonEntry<'_> {
        let mut json = JsonEntry {
            kind: None,
            locator: None,
            url: None,
            verb: None,
            value: None,
            comment: None,
            dependency_line: entry.dependency_line(),
            target_line: entry.target_line(),
        };

        match entry {
            CartfileEntry::Comment { line } => json.comment = Some(line.as_str()),
            CartfileEntry::Dependency(dep) => {
                json.kind = Some(dep.kind);
                json.locator = Some(dep.locator.as_str());
                json.url = Some(dep.url());
                json.verb = Some(dep.verb);
                json.value = Some(dep.value.as_str());
            }
        }

        json
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ConversionReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dry_run: !report.written,
            cartfile: report.cartfile.display().to_string(),
            package_path: report.package_path.display().to_string(),
            package_name: &report.package_name,
            summary: JsonSummary {
                packages: report.package_count(),
                binaries: report.binary_count(),
                comments: report.comment_count(),
            },
            entries: report.entries.iter().map(Self::entry_to_json).collect(),
            warnings: report.unsafe_names.clone(),
            manifest: self.show_manifest.then_some(report.manifest.as_str()),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Cartfile;
    use std::path::PathBuf;

    fn create_test_report() -> ConversionReport {
        let content = "# deps\ngithub \"Alamofire/Alamofire\" ~> 4.8\nbinary \"https://x.io/F.json\"\n";
        let cartfile = Cartfile::parse(content, "/tmp/Cartfile").unwrap();
        ConversionReport {
            cartfile: PathBuf::from("/tmp/Cartfile"),
            package_path: PathBuf::from("/tmp/Deps"),
            package_name: "Deps".to_string(),
            unsafe_names: Vec::new(),
            manifest: cartfile.to_package_swift("Deps"),
            entries: cartfile.into_entries(),
            written: true,
        }
    }

    fn render(formatter: &JsonFormatter) -> serde_json::Value {
        let mut output = Vec::new();
        formatter.format(&create_test_report(), &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_schema() {
        let json = render(&JsonFormatter::new(false));

        assert_eq!(json["dry_run"], false);
        assert_eq!(json["package_name"], "Deps");
        assert_eq!(json["summary"]["packages"], 1);
        assert_eq!(json["summary"]["binaries"], 1);
        assert_eq!(json["summary"]["comments"], 1);
        assert!(json.get("warnings").is_none());
        assert!(json.get("manifest").is_none());
    }

    #[test]
    fn test_json_entries() {
        let json = render(&JsonFormatter::new(false));
        let entries = json["entries"].as_array().unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["comment"], "# deps");
        assert_eq!(entries[0]["target_line"], "// # deps");
        assert_eq!(entries[1]["kind"], "github");
        assert_eq!(entries[1]["verb"], "upToNextMajor");
        assert_eq!(entries[1]["value"], "4.8.0");
        assert_eq!(entries[1]["url"], "https://github.com/Alamofire/Alamofire");
        assert_eq!(entries[1]["target_line"], "\"Alamofire\",");
        assert_eq!(
            entries[2]["dependency_line"],
            "// binary not managed yet for : https://x.io/F.json"
        );
    }

    #[test]
    fn test_json_includes_manifest_on_request() {
        let json = render(&JsonFormatter::new(true));
        assert!(json["manifest"]
            .as_str()
            .unwrap()
            .contains("import PackageDescription"));
    }
}
