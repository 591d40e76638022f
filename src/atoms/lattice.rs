/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Unit cell lattice and fractional/Cartesian conversion

use super::errors::{AtomError, Result};
use super::vector::Vector3D;

/// Lattice vectors of a unit cell, stored as rows `[a, b, c]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    vectors: [Vector3D; 3],
}

impl Lattice {
    /// Build a lattice directly from its three vectors
    pub fn from_vectors(a: Vector3D, b: Vector3D, c: Vector3D) -> Result<Self> {
        let volume = a.dot(&b.cross(&c));
        if !volume.is_finite() || volume.abs() < 1e-10 {
            return Err(AtomError::InvalidLattice(format!(
                "lattice vectors span a degenerate cell (volume {})",
                volume
            )));
        }
        Ok(Self { vectors: [a, b, c] })
    }

    /// Build a lattice from cell lengths (Å) and angles (degrees)
    ///
    /// Uses the standard setting: `a` along x, `b` in the xy-plane.
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        for (name, length) in [("a", a), ("b", b), ("c", c)] {
            if !length.is_finite() || length <= 0.0 {
                return Err(AtomError::InvalidLattice(format!(
                    "cell length {} must be positive, got {}",
                    name, length
                )));
            }
        }
        for (name, angle) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !angle.is_finite() || angle <= 0.0 || angle >= 180.0 {
                return Err(AtomError::InvalidLattice(format!(
                    "cell angle {} must lie in (0, 180), got {}",
                    name, angle
                )));
            }
        }

        let (cos_a, cos_b, cos_g) = (
            alpha.to_radians().cos(),
            beta.to_radians().cos(),
            gamma.to_radians().cos(),
        );
        let sin_g = gamma.to_radians().sin();

        let v2 = 1.0 - cos_a * cos_a - cos_b * cos_b - cos_g * cos_g + 2.0 * cos_a * cos_b * cos_g;
        if v2 <= 0.0 {
            return Err(AtomError::InvalidLattice(format!(
                "cell angles {}, {}, {} do not form a cell",
                alpha, beta, gamma
            )));
        }

        let vec_a = Vector3D::new(a, 0.0, 0.0);
        let vec_b = Vector3D::new(b * cos_g, b * sin_g, 0.0);
        let vec_c = Vector3D::new(
            c * cos_b,
            c * (cos_a - cos_b * cos_g) / sin_g,
            c * v2.sqrt() / sin_g,
        );

        Self::from_vectors(vec_a, vec_b, vec_c)
    }

    /// Cubic lattice with edge length `a`
    pub fn cubic(a: f64) -> Result<Self> {
        Self::from_vectors(
            Vector3D::new(a, 0.0, 0.0),
            Vector3D::new(0.0, a, 0.0),
            Vector3D::new(0.0, 0.0, a),
        )
    }

    /// Lattice vectors `[a, b, c]`
    pub fn vectors(&self) -> &[Vector3D; 3] {
        &self.vectors
    }

    /// Convert a fractional position into Cartesian coordinates
    pub fn to_cartesian(&self, fractional: &Vector3D) -> Vector3D {
        let [a, b, c] = self.vectors;
        a * fractional.x + b * fractional.y + c * fractional.z
    }

    /// Cell volume (Å³)
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.vectors;
        a.dot(&b.cross(&c)).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_orthorhombic_parameters() {
        let lattice = Lattice::from_parameters(3.0, 4.0, 5.0, 90.0, 90.0, 90.0).unwrap();
        let cart = lattice.to_cartesian(&Vector3D::new(0.5, 0.5, 0.5));

        assert_relative_eq!(cart.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(cart.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(cart.z, 2.5, epsilon = 1e-12);
        assert_relative_eq!(lattice.volume(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hexagonal_parameters() {
        let lattice = Lattice::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 120.0).unwrap();
        let [a, b, c] = *lattice.vectors();

        assert_relative_eq!(a.length(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(b.length(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.length(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(a.dot(&b) / 9.0, -0.5, epsilon = 1e-12);
        assert_relative_eq!(lattice.volume(), 9.0 * 3f64.sqrt() / 2.0 * 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Lattice::from_parameters(0.0, 1.0, 1.0, 90.0, 90.0, 90.0).is_err());
        assert!(Lattice::from_parameters(1.0, 1.0, 1.0, 180.0, 90.0, 90.0).is_err());
        assert!(Lattice::from_parameters(1.0, 1.0, 1.0, 10.0, 10.0, 170.0).is_err());
        assert!(Lattice::cubic(0.0).is_err());
    }
}
