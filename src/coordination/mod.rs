/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Coordination geometry analysis
//!
//! This module finds the nearest neighbors of an atom, measures the angles
//! between its bonds and decides whether they form a tetrahedron or an
//! octahedron.

pub mod angles;
pub mod classifier;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod neighbors;

pub use angles::AngleTable;
pub use classifier::{CoordinationClassifier, CoordinationLabel};
pub use config::ClassifierConfig;
pub use errors::{ClassificationError, ConfigError};
pub use geometry::{angle, distance, in_range};
pub use neighbors::{find_neighbors, nearest_neighbors, NeighborRecord};
