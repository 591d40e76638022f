/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Coordination analysis pipeline
//!
//! Reads a structure, replicates it into a supercell, classifies every atom
//! of the element of interest found in the central cell and writes the
//! reports. Classification of different atoms is independent and runs on
//! the rayon thread pool when enabled.

pub mod config;
pub mod errors;

pub use config::AnalysisConfig;
pub use errors::{AnalysisError, Result};

use crate::atoms::{Atom, CrystalStructure};
use crate::coordination::{
    nearest_neighbors, AngleTable, CoordinationClassifier, CoordinationLabel, NeighborRecord,
};
use crate::input::parse_cif;
use crate::report::ReportWriter;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Classification of a single atom of interest
#[derive(Debug, Clone)]
pub struct AtomClassification<'a> {
    /// Position of the atom among the atoms of interest
    pub index: usize,
    /// The classified atom
    pub atom: &'a Atom,
    /// Closest neighbors, at most `window` of them
    pub neighbors: Vec<NeighborRecord<'a>>,
    /// Angles among the neighbors; `None` if a neighbor is degenerate
    pub angles: Option<AngleTable>,
    /// Resulting coordination
    pub label: CoordinationLabel,
}

/// Outcome of a full analysis run
#[derive(Debug, Clone)]
pub struct AnalysisSummary {
    /// Structure name used as file prefix
    pub prefix: String,
    /// Element that was analysed
    pub element: String,
    /// One label per atom of interest
    pub labels: Vec<CoordinationLabel>,
    /// Number of atoms in the supercell
    pub supercell_atoms: usize,
    /// Path of the summary table
    pub summary_path: PathBuf,
}

impl AnalysisSummary {
    /// Name of the n-th atom of interest, e.g. `Al03`
    pub fn atom_name(&self, index: usize) -> String {
        format!("{}{:02}", self.element, index)
    }

    /// Number of atoms carrying a given label
    pub fn count(&self, label: CoordinationLabel) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}

/// Runs the coordination analysis with a fixed configuration
#[derive(Debug, Clone)]
pub struct CoordinationAnalysis {
    config: AnalysisConfig,
    classifier: CoordinationClassifier,
}

impl CoordinationAnalysis {
    /// Validate the configuration and build the analysis
    pub fn new(mut config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let classifier = CoordinationClassifier::new(config.classifier.clone());
        Ok(Self { config, classifier })
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Replicate the unit cell `n × n × n` times
    pub fn build_supercell(&self, structure: &CrystalStructure) -> Result<CrystalStructure> {
        let n = self.config.supercell;
        let supercell = structure.supercell(n, n, n)?;
        info!(
            "Built {}x{}x{} supercell with {} atoms",
            n,
            n,
            n,
            supercell.atom_count()
        );
        Ok(supercell)
    }

    /// Classify one atom against all atoms of the supercell
    pub fn classify_atom<'a>(
        &self,
        index: usize,
        atom: &'a Atom,
        candidates: &'a [Atom],
    ) -> AtomClassification<'a> {
        let neighbors = nearest_neighbors(atom, candidates, self.config.window);
        debug!(
            "{}{:02}: neighbor distances {:?}",
            self.config.element,
            index,
            neighbors.iter().map(|n| n.distance).collect::<Vec<_>>()
        );

        let label = match self.classifier.classify(&neighbors) {
            Ok(label) => label,
            Err(e) => {
                warn!("{}{:02}: {}", self.config.element, index, e);
                CoordinationLabel::Indeterminate
            }
        };
        let angles = AngleTable::new(&neighbors, self.config.window).ok();

        AtomClassification {
            index,
            atom,
            neighbors,
            angles,
            label,
        }
    }

    /// Classify every atom of interest of a supercell, in order
    pub fn classify_supercell<'a>(&self, supercell: &'a CrystalStructure) -> Vec<AtomClassification<'a>> {
        let atoms = supercell.atoms_of_interest(&self.config.element);
        if atoms.is_empty() {
            warn!(
                "No {} atoms found in the central cell of the supercell",
                self.config.element
            );
        } else {
            info!("Classifying {} {} atoms", atoms.len(), self.config.element);
        }

        let candidates = supercell.atoms();
        if self.config.parallel {
            atoms
                .par_iter()
                .enumerate()
                .map(|(i, &atom)| self.classify_atom(i, atom, candidates))
                .collect()
        } else {
            atoms
                .iter()
                .enumerate()
                .map(|(i, &atom)| self.classify_atom(i, atom, candidates))
                .collect()
        }
    }

    /// Analyse a parsed structure; `prefix` names the report files
    pub fn analyze_structure(&self, structure: &CrystalStructure, prefix: &str) -> Result<AnalysisSummary> {
        let supercell = self.build_supercell(structure)?;
        let results = self.classify_supercell(&supercell);

        let writer = ReportWriter::new(
            &self.config.output_dir,
            prefix,
            &self.config.element,
            self.config.window,
        );
        writer.create_dirs()?;

        if self.config.write_details {
            writer.write_supercell(&supercell)?;
            for result in &results {
                writer.write_neighbors(result.index, &result.neighbors)?;
                if let Some(angles) = &result.angles {
                    writer.write_angles(result.index, angles)?;
                }
            }
            info!("Wrote per-atom tables to {}", writer.detail_dir().display());
        }

        let labels: Vec<CoordinationLabel> = results.iter().map(|r| r.label).collect();
        let summary_path = writer.write_summary(&labels)?;
        info!("Wrote coordination summary to {}", summary_path.display());

        Ok(AnalysisSummary {
            prefix: prefix.to_string(),
            element: self.config.element.clone(),
            labels,
            supercell_atoms: supercell.atom_count(),
            summary_path,
        })
    }

    /// Parse a CIF file and analyse it; the file stem names the reports
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<AnalysisSummary> {
        let input = input.as_ref();
        let structure = parse_cif(input)?;
        let prefix = structure_prefix(input);
        self.analyze_structure(&structure, &prefix)
    }
}

/// File stem of a structure path (`data/corundum.cif` -> `corundum`)
pub fn structure_prefix(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_string))
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "structure".to_string())
}
