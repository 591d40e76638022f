/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic crystal structure and supercell replication

use super::atom::Atom;
use super::errors::{AtomError, Result};
use super::lattice::Lattice;
use super::vector::Vector3D;

/// A periodic crystal structure: a unit cell lattice plus atomic sites
///
/// A structure produced by [`CrystalStructure::supercell`] keeps the lattice
/// of the original unit cell and records how often it was replicated, so
/// fractional coordinates of its atoms range over `[0, n)` along each axis.
#[derive(Debug, Clone)]
pub struct CrystalStructure {
    /// Lattice of the (original) unit cell
    lattice: Lattice,
    /// List of atoms in the structure
    atoms: Vec<Atom>,
    /// Number of unit cell images along a, b and c
    replication: [usize; 3],
    /// Title or description of the structure
    title: String,
}

impl CrystalStructure {
    /// Create a new empty structure for the given unit cell
    pub fn new(lattice: Lattice) -> Self {
        Self {
            lattice,
            atoms: Vec::new(),
            replication: [1, 1, 1],
            title: String::new(),
        }
    }

    /// Create a new structure with a title
    pub fn with_title(lattice: Lattice, title: &str) -> Self {
        let mut structure = Self::new(lattice);
        structure.title = title.to_string();
        structure
    }

    /// Get the title of the structure
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title of the structure
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Add an atom at a fractional position; returns its index
    pub fn add_atom(&mut self, symbol: &str, fractional: Vector3D) -> Result<usize> {
        let position = self.lattice.to_cartesian(&fractional);
        let atom = Atom::new(symbol, fractional, position)?;
        self.atoms.push(atom);
        Ok(self.atoms.len() - 1)
    }

    /// Unit cell lattice
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Replication factors along a, b and c
    pub fn replication(&self) -> [usize; 3] {
        self.replication
    }

    /// Get the number of atoms
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Get a slice of all atoms
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Iterate over all atoms with their symbol, fractional and Cartesian position
    pub fn enumerate_atoms(&self) -> impl Iterator<Item = (&str, &Vector3D, &Vector3D)> + '_ {
        self.atoms
            .iter()
            .map(|atom| (atom.symbol(), atom.fractional(), atom.position()))
    }

    /// Replicate the structure `nx` × `ny` × `nz` times
    ///
    /// Images are placed at non-negative integer offsets, and the resulting
    /// atom list is sorted by fractional coordinate (x, then y, then z).
    pub fn supercell(&self, nx: usize, ny: usize, nz: usize) -> Result<Self> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(AtomError::InvalidSupercell(nx, ny, nz));
        }

        let [vec_a, vec_b, vec_c] = *self.lattice.vectors();
        let mut atoms = Vec::with_capacity(self.atoms.len() * nx * ny * nz);

        for x in 0..nx {
            for y in 0..ny {
                for z in 0..nz {
                    let shift = Vector3D::new(x as f64, y as f64, z as f64);
                    let translation = vec_a * shift.x + vec_b * shift.y + vec_c * shift.z;

                    for atom in &self.atoms {
                        atoms.push(atom.translated(shift, translation));
                    }
                }
            }
        }

        atoms.sort_by(|a, b| a.fractional().total_cmp(b.fractional()));

        let [rx, ry, rz] = self.replication;
        Ok(Self {
            lattice: self.lattice,
            atoms,
            replication: [rx * nx, ry * ny, rz * nz],
            title: self.title.clone(),
        })
    }

    /// Closed fractional interval `[c, c + 1]` of the central cell per axis
    pub fn central_region(&self) -> [(f64, f64); 3] {
        self.replication.map(|n| {
            let lower = (n / 2) as f64;
            (lower, lower + 1.0)
        })
    }

    /// Whether an atom lies inside the central cell (boundaries included)
    pub fn is_in_central_cell(&self, atom: &Atom) -> bool {
        let region = self.central_region();
        let frac = atom.fractional();
        (0..3).all(|axis| region[axis].0 <= frac[axis] && frac[axis] <= region[axis].1)
    }

    /// Atoms of the given element located in the central cell
    pub fn atoms_of_interest(&self, symbol: &str) -> Vec<&Atom> {
        self.atoms
            .iter()
            .filter(|atom| atom.symbol().eq_ignore_ascii_case(symbol))
            .filter(|atom| self.is_in_central_cell(atom))
            .collect()
    }
}
