/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # coordination-rs
//!
//! Determines the local coordination geometry (tetrahedral, octahedral or
//! none) of selected atoms in a crystal structure.
//!
//! The structure is read from a CIF file and replicated into a supercell so
//! that neighbor searches see periodic images across cell boundaries. For
//! every atom of the element of interest inside the central cell, the closest
//! neighbors are collected, the angles between their bonds are measured and
//! distance/angle tolerances decide which polyhedron, if any, they form.

pub mod analysis;
pub mod atoms;
pub mod cli;
pub mod coordination;
pub mod input;
pub mod report;
pub mod utils;

pub use analysis::{AnalysisConfig, AnalysisSummary, CoordinationAnalysis};
pub use coordination::{ClassifierConfig, CoordinationClassifier, CoordinationLabel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
