/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Structure file input
//!
//! Reads crystallographic information files (CIF) into a
//! [`CrystalStructure`](crate::atoms::CrystalStructure): cell parameters,
//! atom sites and the symmetry operations needed to fill the unit cell.

pub mod block;
pub mod config;
pub mod errors;
pub mod parser;
pub mod symmetry;

pub use config::ParserConfig;
pub use errors::{InputError, Result};
pub use parser::CifParser;
pub use symmetry::SymmetryOperation;

use crate::atoms::CrystalStructure;
use std::path::Path;

/// Parse a CIF file with the default parser configuration
pub fn parse_cif<P: AsRef<Path>>(path: P) -> Result<CrystalStructure> {
    let config = ParserConfig {
        input_path: path.as_ref().to_path_buf(),
        ..Default::default()
    };

    let parser = CifParser::new(config);
    parser.parse::<&Path>(None)
}

/// Parse CIF text held in memory
pub fn parse_cif_str(content: &str) -> Result<CrystalStructure> {
    CifParser::default().parse_str(content, "")
}
