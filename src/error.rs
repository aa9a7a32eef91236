//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LineError: Why a single Cartfile line could not be parsed
//! - ManifestError: Issues reading the Cartfile or assembling the manifest
//! - ConfigError: Issues with CLI configuration
//! - IoError: File system operation failures while writing the package

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Cartfile / manifest related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Reason a single line failed to parse, without location information
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line does not start with `<keyword> "<locator>"`
    #[error("expected `git|github|binary \"<locator>\"`")]
    Malformed,

    /// A verb token was present but is not recognized
    #[error("unknown version operator '{0}'")]
    UnknownVerb(String),

    /// The version/branch/commit token contains unsupported characters
    #[error("invalid version, branch or commit '{0}'")]
    InvalidValue(String),

    /// Tokens left over after the version requirement
    #[error("unexpected trailing text '{0}'")]
    TrailingTokens(String),
}

/// Errors related to the Cartfile and the generated manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Cartfile not found
    #[error("Cartfile not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the Cartfile
    #[error("failed to read Cartfile {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank, non-comment line did not match the dependency grammar
    #[error("can't parse dependency line '{line}' in {path}:{line_index}: {reason}")]
    UnparsableLine {
        path: PathBuf,
        /// 0-based position of the line in the file
        line_index: usize,
        line: String,
        #[source]
        reason: LineError,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to remove a previously generated package
    #[error("failed to remove {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the package directory
    #[error("failed to create directory {path}: {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a generated file
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new UnparsableLine error
    pub fn unparsable_line(
        path: impl Into<PathBuf>,
        line_index: usize,
        line: impl Into<String>,
        reason: LineError,
    ) -> Self {
        ManifestError::UnparsableLine {
            path: path.into(),
            line_index,
            line: line.into(),
            reason,
        }
    }

    /// Returns the 0-based line index for parse failures
    pub fn line_index(&self) -> Option<usize> {
        match self {
            ManifestError::UnparsableLine { line_index, .. } => Some(*line_index),
            _ => None,
        }
    }
}

impl IoError {
    /// Creates a new RemoveFailed error
    pub fn remove_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::RemoveFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a new CreateDirFailed error
    pub fn create_dir_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::CreateDirFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteFailed error
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}
