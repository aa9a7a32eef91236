//! CLI argument parsing module for cartfile-to-package

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Convert a Carthage Cartfile into a Swift Package Manager package
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cartfile-to-package",
    version,
    about = "Convert a Cartfile into a Package.swift dependencies package"
)]
pub struct CliArgs {
    /// Cartfile to convert (e.g. /tmp/some/path/to/Cartfile)
    pub cartfile: PathBuf,

    /// Directory of the generated package, replaced if it exists
    pub package_path: PathBuf,

    /// Dry run mode - print the generated Package.swift without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Also print the generated Package.swift
    #[arg(long)]
    pub print: bool,
}

impl CliArgs {
    /// Check option combinations clap cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }

        if self.cartfile == self.package_path {
            return Err(ConfigError::InvalidPath {
                path: self.package_path.clone(),
                message: "package path must differ from the Cartfile path".to_string(),
            });
        }

        Ok(())
    }

    /// Default tracing filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "cartfile_to_package=debug,info"
        } else {
            "warn"
        }
    }
}
