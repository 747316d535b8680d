//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading, patching or writing the manifest
//! - AnalysisLoadError: Issues loading the analysis snapshot
//! - PromptError: Operator cancellation or terminal failures
//! - Output: Failures writing the report itself

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Analysis snapshot related errors
    #[error(transparent)]
    Analysis(#[from] AnalysisLoadError),

    /// Interactive prompt related errors
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Failed to write the report
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Returns true if the operator cancelled the prompt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Prompt(PromptError::Cancelled))
    }
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Manifest content does not have the expected shape
    #[error("invalid manifest structure in {path}: {message}")]
    InvalidStructure { path: PathBuf, message: String },

    /// A selected upgrade addresses a field the manifest does not contain
    #[error("'{package}' is not declared in '{category}'")]
    MissingEntry { category: String, package: String },
}

/// Errors related to loading the analysis snapshot
#[derive(Error, Debug)]
pub enum AnalysisLoadError {
    /// Failed to read analysis file
    #[error("failed to read analysis file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Analysis file is not a valid snapshot
    #[error("failed to parse analysis in {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to the interactive prompt
#[derive(Error, Debug)]
pub enum PromptError {
    /// The operator aborted the prompt
    #[error("selection cancelled")]
    Cancelled,

    /// Terminal could not be driven
    #[error("terminal error: {source}")]
    Terminal {
        #[from]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidStructure error
    pub fn invalid_structure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::InvalidStructure {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingEntry error
    pub fn missing_entry(category: impl Into<String>, package: impl Into<String>) -> Self {
        ManifestError::MissingEntry {
            category: category.into(),
            package: package.into(),
        }
    }
}

impl AnalysisLoadError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalysisLoadError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AnalysisLoadError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}
