/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic structure module
//!
//! Atoms, unit cell lattices and periodic structures, including supercell
//! replication used for neighbor searches across cell boundaries.

pub mod atom;
pub mod database;
pub mod errors;
pub mod lattice;
pub mod structure;
pub mod vector;

pub use atom::Atom;
pub use errors::{AtomError, Result};
pub use lattice::Lattice;
pub use structure::CrystalStructure;
pub use vector::Vector3D;
