/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for structure file parsing

use crate::atoms::AtomError;
use std::io;
use thiserror::Error;

/// Errors that can occur while reading a crystallographic structure file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid symmetry operation '{operation}': {reason}")]
    InvalidSymmetry { operation: String, reason: String },

    #[error("Invalid atomic structure: {0}")]
    InvalidStructure(#[from] AtomError),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
