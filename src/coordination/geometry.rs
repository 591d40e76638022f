/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Geometry primitives: distances, bond angles and tolerance windows

use crate::atoms::Vector3D;

/// Euclidean distance between two Cartesian positions
///
/// Returns exactly `0.0` for identical positions, which the neighbor search
/// relies on to exclude the central atom.
pub fn distance(a: &Vector3D, b: &Vector3D) -> f64 {
    a.distance(b)
}

/// Angle in degrees between two vectors
///
/// Both vectors must have non-zero length. The cosine is clamped into
/// `[-1, 1]` so rounding never pushes the result outside `[0, 180]`.
pub fn angle(v1: &Vector3D, v2: &Vector3D) -> f64 {
    let norms = (v1.length_squared() * v2.length_squared()).sqrt();
    debug_assert!(norms > 0.0, "angle between zero-length vectors {} and {}", v1, v2);

    (v1.dot(v2) / norms).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Open-interval membership: `midpoint - width < value < midpoint + width`
pub fn in_range(value: f64, midpoint: f64, width: f64) -> bool {
    midpoint - width < value && value < midpoint + width
}
