//! Core domain models for cartfile-to-package
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency kinds (`git`, `github`, `binary`)
//! - Version verbs mapping Carthage operators to SwiftPM requirements
//! - Parsed dependency declarations
//! - Cartfile entries (comment or dependency) in file order
//! - Conversion reports

mod dependency;
mod dependency_kind;
mod entry;
mod report;
mod version_verb;

pub use dependency::Dependency;
pub use dependency_kind::DependencyKind;
pub use entry::CartfileEntry;
pub use report::ConversionReport;
pub use version_verb::VersionVerb;
