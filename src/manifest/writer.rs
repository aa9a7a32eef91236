//! Generated package writing
//!
//! This module provides:
//! - PackageWriter for turning a Cartfile into a package directory
//! - Dry-run mode support (no filesystem changes)
//! - Full assembly before any write, so a bad Cartfile never leaves partial output

use crate::domain::ConversionReport;
use crate::error::{AppError, ConfigError, IoError};
use crate::manifest::Cartfile;
use crate::manifest::template::EMPTY_SOURCE_FILENAME;
use std::fs;
use std::path::Path;

/// Name of the generated manifest
pub const MANIFEST_FILENAME: &str = "Package.swift";

/// Fallback when the package path has no final component
const UNKNOWN_PACKAGE_NAME: &str = "Unknown";

/// Derives the package name from the last component of the package directory
pub fn package_name_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_PACKAGE_NAME)
        .to_string()
}

/// Writer that generates a SwiftPM package from a Cartfile
pub struct PackageWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

impl PackageWriter {
    /// Create a new PackageWriter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Converts `cartfile_path` into a package at `package_path`
    ///
    /// An existing directory at `package_path` is replaced.
    pub fn generate(
        &self,
        cartfile_path: &Path,
        package_path: &Path,
    ) -> Result<ConversionReport, AppError> {
        let cartfile = Cartfile::read(cartfile_path)?;
        let package_name = package_name_from_path(package_path);
        let manifest = cartfile.to_package_swift(&package_name);
        let unsafe_names = cartfile
            .unsafe_target_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        tracing::info!(
            cartfile = %cartfile_path.display(),
            entries = cartfile.entries().len(),
            package = %package_name,
            "assembled {}",
            MANIFEST_FILENAME
        );

        let mut report = ConversionReport {
            cartfile: cartfile_path.to_path_buf(),
            package_path: package_path.to_path_buf(),
            package_name,
            entries: cartfile.into_entries(),
            unsafe_names,
            manifest,
            written: false,
        };

        if self.dry_run {
            tracing::info!("dry-run: skipping writes to {}", package_path.display());
            return Ok(report);
        }

        ensure_not_inside(cartfile_path, package_path)?;
        write_package(package_path, &report.manifest)?;
        report.written = true;

        Ok(report)
    }
}

/// Refuses to replace a directory that contains the Cartfile being converted
fn ensure_not_inside(cartfile_path: &Path, package_path: &Path) -> Result<(), ConfigError> {
    let (Ok(cartfile), Ok(package)) = (cartfile_path.canonicalize(), package_path.canonicalize())
    else {
        return Ok(());
    };

    if cartfile.starts_with(&package) {
        return Err(ConfigError::InvalidPath {
            path: package_path.to_path_buf(),
            message: "package directory contains the Cartfile and would be deleted".to_string(),
        });
    }

    Ok(())
}

fn write_package(package_path: &Path, manifest: &str) -> Result<(), IoError> {
    if package_path.exists() {
        tracing::info!("removing previous package at {}", package_path.display());
        fs::remove_dir_all(package_path).map_err(|e| IoError::remove_failed(package_path, e))?;
    }

    fs::create_dir_all(package_path).map_err(|e| IoError::create_dir_failed(package_path, e))?;

    let empty_source = package_path.join(EMPTY_SOURCE_FILENAME);
    fs::write(&empty_source, "").map_err(|e| IoError::write_failed(&empty_source, e))?;

    let manifest_path = package_path.join(MANIFEST_FILENAME);
    fs::write(&manifest_path, manifest).map_err(|e| IoError::write_failed(&manifest_path, e))?;

    tracing::info!("wrote {}", manifest_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManifestError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CARTFILE: &str = r#"# Networking
github "Alamofire/Alamofire" ~> 4.8
github "airbnb/lottie-ios" ~> 2.5
binary "https://www.mapbox.com/ios-sdk/Mapbox-iOS-SDK.json" ~> 5.8
"#;

    fn setup(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let cartfile = temp_dir.path().join("Cartfile");
        fs::write(&cartfile, content).unwrap();
        (temp_dir, cartfile)
    }

    #[test]
    fn test_package_name_from_path() {
        assert_eq!(
            package_name_from_path(Path::new("/tmp/path/to/AppDependenciesPackage")),
            "AppDependenciesPackage"
        );
        assert_eq!(
            package_name_from_path(Path::new("/tmp/path/to/AppDependenciesPackage/")),
            "AppDependenciesPackage"
        );
        assert_eq!(package_name_from_path(Path::new("/")), "Unknown");
    }

    #[test]
    fn test_generate_writes_files() {
        let (temp_dir, cartfile) = setup(CARTFILE);
        let package = temp_dir.path().join("Deps");

        let report = PackageWriter::new(false).generate(&cartfile, &package).unwrap();

        assert!(report.written);
        assert_eq!(report.package_name, "Deps");
        assert_eq!(report.unsafe_names, vec!["lottie-ios"]);
        assert_eq!(fs::read_to_string(package.join("Empty.swift")).unwrap(), "");
        let manifest = fs::read_to_string(package.join("Package.swift")).unwrap();
        assert_eq!(manifest, report.manifest);
        assert!(manifest.contains(&format!("sources: [\"{}\"]", EMPTY_SOURCE_FILENAME)));
        assert!(manifest.contains("name: \"Deps\""));
    }

    #[test]
    fn test_generate_replaces_existing_package() {
        let (temp_dir, cartfile) = setup(CARTFILE);
        let package = temp_dir.path().join("Deps");
        fs::create_dir_all(&package).unwrap();
        fs::write(package.join("stale.txt"), "old").unwrap();

        PackageWriter::new(false).generate(&cartfile, &package).unwrap();

        assert!(!package.join("stale.txt").exists());
        assert!(package.join("Package.swift").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (temp_dir, cartfile) = setup(CARTFILE);
        let package = temp_dir.path().join("Deps");

        let report = PackageWriter::new(true).generate(&cartfile, &package).unwrap();

        assert!(!report.written);
        assert!(report.manifest.contains("Alamofire"));
        assert!(!package.exists());
    }

    #[test]
    fn test_parse_failure_leaves_existing_package() {
        let (temp_dir, cartfile) = setup("github \"a/b\"\ngithub broken\n");
        let package = temp_dir.path().join("Deps");
        fs::create_dir_all(&package).unwrap();
        fs::write(package.join("keep.txt"), "keep").unwrap();

        let err = PackageWriter::new(false)
            .generate(&cartfile, &package)
            .unwrap_err();

        match err {
            AppError::Manifest(ManifestError::UnparsableLine { line_index, .. }) => {
                assert_eq!(line_index, 1)
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(package.join("keep.txt").exists());
        assert!(!package.join("Package.swift").exists());
    }

    #[test]
    fn test_missing_cartfile() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = PackageWriter::new(false)
            .generate(&temp_dir.path().join("Cartfile"), &temp_dir.path().join("Deps"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Manifest(ManifestError::NotFound { .. })
        ));
    }

    #[test]
    fn test_refuses_to_delete_cartfile_directory() {
        let (temp_dir, cartfile) = setup(CARTFILE);

        let err = PackageWriter::new(false)
            .generate(&cartfile, temp_dir.path())
            .unwrap_err();

        assert!(matches!(err, AppError::Config(ConfigError::InvalidPath { .. })));
        assert!(cartfile.exists());
    }
}
