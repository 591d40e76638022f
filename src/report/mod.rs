/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Report output: supercell listing, per-atom neighbor and angle tables and
//! the coordination summary.

pub mod errors;
pub mod writer;

pub use errors::{ReportError, Result};
pub use writer::{angle_matrix, neighbor_table, summary_table, supercell_table, ReportWriter};
