/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! CSV and tab-delimited report tables
//!
//! Table builders return the file content as a string; [`ReportWriter`]
//! places them under the output directory.

use super::errors::{ReportError, Result};
use crate::atoms::CrystalStructure;
use crate::coordination::{AngleTable, CoordinationLabel, NeighborRecord};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `element,x,y,z` for every atom of a structure
pub fn supercell_table(structure: &CrystalStructure) -> String {
    let mut out = String::from("element,x,y,z\n");
    for atom in structure.atoms() {
        let p = atom.position();
        let _ = writeln!(out, "{},{:?},{:?},{:?}", atom.symbol(), p.x, p.y, p.z);
    }
    out
}

/// `index,element,distance,dx,dy,dz` for a neighbor list
pub fn neighbor_table(neighbors: &[NeighborRecord<'_>]) -> String {
    let mut out = String::from("index,element,distance,dx,dy,dz\n");
    for (i, n) in neighbors.iter().enumerate() {
        let d = n.displacement;
        let _ = writeln!(
            out,
            "{},{},{:?},{:?},{:?},{:?}",
            i, n.symbol, n.distance, d.x, d.y, d.z
        );
    }
    out
}

/// Upper-triangular, tab-delimited angle matrix with two decimals
pub fn angle_matrix(table: &AngleTable) -> String {
    let size = table.size();
    let mut out = String::from(" \t");

    let header: Vec<String> = (0..size).map(|i| i.to_string()).collect();
    out.push_str(&header.join("\t"));
    out.push('\n');

    for i in 0..size {
        let _ = write!(out, "{}\t{}x\t", i, " \t".repeat(i));
        let row: Vec<String> = ((i + 1)..size)
            .filter_map(|j| table.get(i, j))
            .map(|a| format!("{:.2}", a))
            .collect();
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

/// `index,coordination` with one row per atom of interest
pub fn summary_table(labels: &[CoordinationLabel]) -> String {
    let mut out = String::from("index,coordination\n");
    for (i, label) in labels.iter().enumerate() {
        let _ = writeln!(out, "{},{}", i, label.coordination_number());
    }
    out
}

/// Writes the report files of one structure
///
/// Per-structure tables go to `root/prefix/`, the summary to
/// `root/prefix_coordination.csv`.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    root: PathBuf,
    prefix: String,
    element: String,
    window: usize,
}

impl ReportWriter {
    /// Create a writer for structure `prefix` below `root`
    pub fn new<P: AsRef<Path>>(root: P, prefix: &str, element: &str, window: usize) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
            element: element.to_string(),
            window,
        }
    }

    /// Directory holding the per-structure tables
    pub fn detail_dir(&self) -> PathBuf {
        self.root.join(&self.prefix)
    }

    /// Create the output directories
    pub fn create_dirs(&self) -> Result<()> {
        let dir = self.detail_dir();
        fs::create_dir_all(&dir).map_err(|source| ReportError::CreateDir { path: dir, source })
    }

    /// Name of the n-th atom of interest, e.g. `Al03`
    pub fn atom_name(&self, index: usize) -> String {
        format!("{}{:02}", self.element, index)
    }

    /// Path of the supercell table
    pub fn supercell_path(&self) -> PathBuf {
        self.detail_dir()
            .join(format!("{}_all_atoms_supercell.csv", self.prefix))
    }

    /// Path of the neighbor table of an atom of interest
    pub fn neighbors_path(&self, index: usize) -> PathBuf {
        self.detail_dir().join(format!(
            "{}_{}_closest{}.csv",
            self.prefix,
            self.atom_name(index),
            self.window
        ))
    }

    /// Path of the angle matrix of an atom of interest
    pub fn angles_path(&self, index: usize) -> PathBuf {
        self.detail_dir()
            .join(format!("{}_{}_angles.csv", self.prefix, self.atom_name(index)))
    }

    /// Path of the summary table
    pub fn summary_path(&self) -> PathBuf {
        self.root.join(format!("{}_coordination.csv", self.prefix))
    }

    /// Write all atoms of the supercell
    pub fn write_supercell(&self, structure: &CrystalStructure) -> Result<PathBuf> {
        let path = self.supercell_path();
        write_file(&path, &supercell_table(structure))?;
        Ok(path)
    }

    /// Write the neighbor table of an atom of interest
    pub fn write_neighbors(&self, index: usize, neighbors: &[NeighborRecord<'_>]) -> Result<PathBuf> {
        let path = self.neighbors_path(index);
        write_file(&path, &neighbor_table(neighbors))?;
        Ok(path)
    }

    /// Write the angle matrix of an atom of interest
    pub fn write_angles(&self, index: usize, table: &AngleTable) -> Result<PathBuf> {
        let path = self.angles_path(index);
        write_file(&path, &angle_matrix(table))?;
        Ok(path)
    }

    /// Write the coordination summary
    pub fn write_summary(&self, labels: &[CoordinationLabel]) -> Result<PathBuf> {
        let path = self.summary_path();
        write_file(&path, &summary_table(labels))?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(content.as_bytes())?;
        writer.flush()
    };
    write().map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Vector3D;

    #[test]
    fn test_paths() {
        let writer = ReportWriter::new("/tmp/out", "corundum", "Al", 8);

        assert_eq!(writer.atom_name(3), "Al03");
        assert_eq!(writer.atom_name(123), "Al123");
        assert_eq!(
            writer.neighbors_path(3),
            PathBuf::from("/tmp/out/corundum/corundum_Al03_closest8.csv")
        );
        assert_eq!(
            writer.angles_path(0),
            PathBuf::from("/tmp/out/corundum/corundum_Al00_angles.csv")
        );
        assert_eq!(
            writer.supercell_path(),
            PathBuf::from("/tmp/out/corundum/corundum_all_atoms_supercell.csv")
        );
        assert_eq!(writer.summary_path(), PathBuf::from("/tmp/out/corundum_coordination.csv"));
    }

    #[test]
    fn test_neighbor_table() {
        let neighbors = vec![NeighborRecord {
            symbol: "O",
            distance: 2.0,
            displacement: Vector3D::new(0.0, -2.0, 0.0),
        }];
        assert_eq!(
            neighbor_table(&neighbors),
            "index,element,distance,dx,dy,dz\n0,O,2.0,0.0,-2.0,0.0\n"
        );
    }

    #[test]
    fn test_summary_table() {
        let labels = [
            CoordinationLabel::Octahedral,
            CoordinationLabel::None,
            CoordinationLabel::Indeterminate,
        ];
        assert_eq!(summary_table(&labels), "index,coordination\n0,6\n1,0\n2,-1\n");
    }
}
