/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the coordination module

use std::io;
use thiserror::Error;

/// Reasons a neighbor window cannot be classified
///
/// These are recoverable: the analysis reports the atom as indeterminate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationError {
    #[error("only {found} neighbors available, at least {required} required")]
    InsufficientNeighbors { found: usize, required: usize },

    #[error("neighbor {index} coincides with the central atom")]
    DegenerateDisplacement { index: usize },
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for classification
pub type Result<T> = std::result::Result<T, ClassificationError>;
