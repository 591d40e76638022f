/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("Invalid lattice: {0}")]
    InvalidLattice(String),

    #[error("Invalid supercell size: {0}x{1}x{2}")]
    InvalidSupercell(usize, usize, usize),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
