//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A one-paragraph conversion summary with colors
//! - Per-dependency listing in verbose mode
//! - Identifier warnings and next steps

use crate::domain::{CartfileEntry, ConversionReport};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// SwiftPM documentation pointed to after generation
const SWIFTPM_DOCS_URL: &str =
    "https://github.com/apple/swift-package-manager/tree/main/Documentation";

/// Text formatter for human-readable output
pub struct TextFormatter {
    verbosity: Verbosity,
    show_manifest: bool,
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, show_manifest: bool, color: bool) -> Self {
        Self {
            verbosity,
            show_manifest,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self, report: &ConversionReport) -> String {
        if report.written {
            String::new()
        } else if self.color {
            format!("{} ", "(dry-run)".cyan())
        } else {
            "(dry-run) ".to_string()
        }
    }

    fn paint(&self, text: &str, style: fn(&str) -> colored::ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// One line per dependency (verbose mode)
    fn format_entries(
        &self,
        report: &ConversionReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let width = report
            .entries
            .iter()
            .filter_map(CartfileEntry::as_dependency)
            .map(|dep| dep.target_name().len())
            .max()
            .unwrap_or(0);

        for dep in report.entries.iter().filter_map(CartfileEntry::as_dependency) {
            if dep.is_binary() {
                writeln!(
                    writer,
                    "  {} {:<width$}  binary not managed: {}",
                    self.paint("✗", |s| s.yellow()),
                    dep.target_name(),
                    dep.url(),
                    width = width
                )?;
            } else {
                writeln!(
                    writer,
                    "  {} {:<width$}  {} {} ({})",
                    self.paint("✓", |s| s.green()),
                    dep.target_name(),
                    dep.verb,
                    dep.value,
                    dep.url(),
                    width = width
                )?;
            }
        }
        writeln!(writer)
    }

    fn format_warnings(
        &self,
        report: &ConversionReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} some package names are not valid Swift identifiers, fix them in both package and target:",
            self.paint("Warning:", |s| s.yellow().bold())
        )?;
        for name in &report.unsafe_names {
            writeln!(writer, "  - {}", name)?;
        }
        writeln!(writer)
    }

    fn format_next_steps(
        &self,
        report: &ConversionReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", self.paint("Next steps:", |s| s.bold()))?;
        writeln!(
            writer,
            "  drag & drop the package in your project/workspace, or run:"
        )?;
        writeln!(
            writer,
            "    cd {} && swift build",
            report.package_path.display()
        )?;
        writeln!(
            writer,
            "  {} might be incorrect, see {}",
            MANIFEST_FILENAME, SWIFTPM_DOCS_URL
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ConversionReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.show_manifest {
            writeln!(writer, "{}", report.manifest)?;
        }

        let prefix = self.dry_run_prefix(report);

        if self.verbosity == Verbosity::Quiet {
            return writeln!(
                writer,
                "{}{}: {} package(s), {} binary",
                prefix,
                report.package_name,
                report.package_count(),
                report.binary_count()
            );
        }

        writeln!(
            writer,
            "{}Generated {} from {}",
            prefix,
            self.paint(&report.package_name, |s| s.bold()),
            report.cartfile.display()
        )?;
        writeln!(
            writer,
            "  {} package(s), {} binary framework(s) left as comments, {} comment line(s)",
            self.paint(&report.package_count().to_string(), |s| s.green()),
            report.binary_count(),
            report.comment_count()
        )?;
        writeln!(writer)?;

        if self.verbosity == Verbosity::Verbose {
            self.format_entries(report, writer)?;
        }

        if report.has_warnings() {
            self.format_warnings(report, writer)?;
        }

        if report.written {
            self.format_next_steps(report, writer)?;
        }

        Ok(())
    }
}
