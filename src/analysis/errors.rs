/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the analysis pipeline

use crate::atoms::AtomError;
use crate::coordination::ConfigError;
use crate::input::InputError;
use crate::report::ReportError;
use thiserror::Error;

/// Errors that abort a coordination analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Structure error: {0}")]
    Structure(#[from] AtomError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
