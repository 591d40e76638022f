/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Geometric constants used by the coordination classifier

/// Ideal angle between two bonds of a regular tetrahedron, rounded (degrees)
pub const TETRAHEDRAL_ANGLE: f64 = 109.5;

/// Angle between cis neighbors of a regular octahedron (degrees)
pub const OCTAHEDRAL_CIS_ANGLE: f64 = 90.0;

/// Angle between trans neighbors of a regular octahedron (degrees)
pub const OCTAHEDRAL_TRANS_ANGLE: f64 = 180.0;

/// Default allowed ratio of any tetrahedral bond to the shortest bond
pub const TETRAHEDRAL_DISTANCE_TOLERANCE: f64 = 1.2;

/// Default allowed ratio of any octahedral bond to the shortest bond
pub const OCTAHEDRAL_DISTANCE_TOLERANCE: f64 = 1.2;

/// Default half-width of the tetrahedral angle window (degrees)
pub const TETRAHEDRAL_ANGLE_TOLERANCE: f64 = 20.0;

/// Default half-width of the octahedral cis angle window (degrees)
pub const OCTAHEDRAL_CIS_ANGLE_TOLERANCE: f64 = 20.0;

/// Default half-width of the octahedral trans angle window (degrees)
pub const OCTAHEDRAL_TRANS_ANGLE_TOLERANCE: f64 = 25.0;

/// Neighbors forming a tetrahedron
pub const TETRAHEDRAL_NEIGHBORS: usize = 4;

/// Neighbors forming an octahedron
pub const OCTAHEDRAL_NEIGHBORS: usize = 6;

/// Trans pairs of an octahedron (opposite vertices)
pub const OCTAHEDRAL_TRANS_PAIRS: usize = 3;

/// Displacements shorter than this (Å) are treated as coincident atoms
pub const DEGENERATE_LENGTH: f64 = 1e-10;
