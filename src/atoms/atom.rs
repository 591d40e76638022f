/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atom representation for coordination analysis

use super::database;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use std::fmt;

/// An atomic site: element symbol plus fractional and Cartesian position
///
/// Atoms are immutable once built; the fractional position is expressed in
/// units of the original unit cell, also for atoms of a supercell.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atomic symbol (element symbol)
    symbol: String,
    /// Position in fractional coordinates of the unit cell
    fractional: Vector3D,
    /// Position in Cartesian coordinates (Å)
    position: Vector3D,
}

impl Atom {
    /// Create a new atom, validating the element symbol
    pub fn new(symbol: &str, fractional: Vector3D, position: Vector3D) -> Result<Self> {
        let symbol = database::canonical_symbol(symbol)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))?;

        Ok(Self {
            symbol: symbol.to_string(),
            fractional,
            position,
        })
    }

    /// Create an atom from a Cartesian position only
    ///
    /// The fractional position is left at the origin; useful for clusters
    /// that are not tied to a lattice.
    pub fn at(symbol: &str, position: Vector3D) -> Result<Self> {
        Self::new(symbol, Vector3D::origin(), position)
    }

    /// Get the atomic symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the atom's Cartesian position
    pub fn position(&self) -> &Vector3D {
        &self.position
    }

    /// Get the atom's fractional position
    pub fn fractional(&self) -> &Vector3D {
        &self.fractional
    }

    /// Copy of this atom moved by whole lattice translations
    pub(crate) fn translated(&self, fractional_shift: Vector3D, cartesian_shift: Vector3D) -> Self {
        Self {
            symbol: self.symbol.clone(),
            fractional: self.fractional + fractional_shift,
            position: self.position + cartesian_shift,
        }
    }

    /// Calculate the distance to another atom
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.position.distance(&other.position)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} (fractional {})",
            self.symbol, self.position, self.fractional
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_creation() {
        let frac = Vector3D::new(0.5, 0.0, 0.0);
        let pos = Vector3D::new(2.0, 0.0, 0.0);
        let atom = Atom::new("AL", frac, pos).unwrap();

        assert_eq!(atom.symbol(), "Al");
        assert_eq!(atom.fractional(), &frac);
        assert_eq!(atom.position(), &pos);
    }

    #[test]
    fn test_invalid_atom() {
        assert!(Atom::at("Zz", Vector3D::origin()).is_err());
        assert!(Atom::at("", Vector3D::origin()).is_err());
    }

    #[test]
    fn test_atom_distance() {
        let atom1 = Atom::at("Al", Vector3D::new(0.0, 0.0, 0.0)).unwrap();
        let atom2 = Atom::at("O", Vector3D::new(3.0, 4.0, 0.0)).unwrap();

        assert_eq!(atom1.distance_to(&atom2), 5.0);
        assert_eq!(atom1.distance_to(&atom1), 0.0);
    }

    #[test]
    fn test_translated() {
        let atom = Atom::new("O", Vector3D::new(0.5, 0.0, 0.0), Vector3D::new(2.0, 0.0, 0.0))
            .unwrap();
        let moved = atom.translated(Vector3D::new(1.0, 0.0, 0.0), Vector3D::new(4.0, 0.0, 0.0));

        assert_eq!(moved.symbol(), "O");
        assert_eq!(moved.fractional(), &Vector3D::new(1.5, 0.0, 0.0));
        assert_eq!(moved.position(), &Vector3D::new(6.0, 0.0, 0.0));
    }
}
