/*!
 * Error types for the txt2srt application.
 *
 * This module contains custom error types for the conversion core and the
 * application shell around it, using the thiserror crate for ergonomic error
 * definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning text into subtitles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The duration was not `M:S` with two non-negative integers
    #[error("Invalid duration format: '{0}' (expected M:S, e.g. 5:30)")]
    InvalidDurationFormat(String),

    /// No non-empty lines were found in the input
    #[error("Input contains no non-empty lines")]
    EmptyInput,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading an input file failed
    #[error("Failed to read {path:?}: {message}")]
    FileRead {
        /// File that could not be read
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// Writing the subtitle file failed
    #[error("Failed to write {path:?}: {message}")]
    FileWrite {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// Error from a generic file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the conversion core
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
