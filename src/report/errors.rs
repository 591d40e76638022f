/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for report writing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
