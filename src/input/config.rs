/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration for the CIF parser

use std::path::PathBuf;

/// CIF parser configuration
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Path to the input file
    pub input_path: PathBuf,
    /// Whether to apply the symmetry operations listed in the file
    pub expand_symmetry: bool,
    /// Fractional distance below which two generated sites are merged
    pub symmetry_tolerance: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("structure.cif"),
            expand_symmetry: true,
            symmetry_tolerance: 1e-3,
        }
    }
}
