//! cartfile-to-package - Carthage to Swift Package Manager migration library
//!
//! This library converts a Cartfile into a Package.swift:
//! - Parses `git`, `github` and `binary` declarations and comments
//! - Renders SwiftPM package and target dependency lines
//! - Assembles the manifest and writes the package directory

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod render;

pub use manifest::{assemble, Cartfile};
