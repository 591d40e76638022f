/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Tetrahedral / octahedral coordination classifier
//!
//! The classifier looks at the closest neighbors of an atom, sorted by
//! distance. The octahedral test runs first on the six closest neighbors:
//! all six bonds must be within a distance tolerance of the shortest bond,
//! the 12 smallest of the 15 pairwise angles must be close to 90° (cis
//! pairs) and the 3 largest close to 180° (trans pairs). Failing that, the
//! tetrahedral test checks the four closest neighbors: four bonds of similar
//! length and all 6 pairwise angles close to 109.5°.

use super::angles::AngleTable;
use super::config::ClassifierConfig;
use super::errors::{ClassificationError, Result};
use super::geometry::in_range;
use super::neighbors::NeighborRecord;
use crate::utils::constants::{OCTAHEDRAL_NEIGHBORS, OCTAHEDRAL_TRANS_PAIRS, TETRAHEDRAL_NEIGHBORS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local coordination recognised around an atom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinationLabel {
    /// Neither polyhedron matched
    None,
    /// Four neighbors at the vertices of a tetrahedron
    Tetrahedral,
    /// Six neighbors at the vertices of an octahedron
    Octahedral,
    /// The neighbor window could not be classified
    Indeterminate,
}

impl CoordinationLabel {
    /// Coordination number written to reports (`-1` for indeterminate)
    pub fn coordination_number(self) -> i32 {
        match self {
            CoordinationLabel::None => 0,
            CoordinationLabel::Tetrahedral => 4,
            CoordinationLabel::Octahedral => 6,
            CoordinationLabel::Indeterminate => -1,
        }
    }

    /// Human readable description
    pub fn description(self) -> &'static str {
        match self {
            CoordinationLabel::None => "no coordination found",
            CoordinationLabel::Tetrahedral => "tetrahedral coordination",
            CoordinationLabel::Octahedral => "octahedral coordination",
            CoordinationLabel::Indeterminate => "indeterminate coordination",
        }
    }
}

impl fmt::Display for CoordinationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Classifies neighbor windows against the configured tolerances
#[derive(Debug, Clone, Default)]
pub struct CoordinationClassifier {
    config: ClassifierConfig,
}

impl CoordinationClassifier {
    /// Create a classifier with the given tolerances
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Tolerances in use
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify the coordination described by a distance-sorted neighbor list
    ///
    /// At least four neighbors are required. With four or five neighbors
    /// only the tetrahedral test can succeed. Neighbors beyond the sixth are
    /// ignored.
    pub fn classify(&self, neighbors: &[NeighborRecord<'_>]) -> Result<CoordinationLabel> {
        if neighbors.len() < TETRAHEDRAL_NEIGHBORS {
            return Err(ClassificationError::InsufficientNeighbors {
                found: neighbors.len(),
                required: TETRAHEDRAL_NEIGHBORS,
            });
        }

        let table = AngleTable::new(neighbors, OCTAHEDRAL_NEIGHBORS)?;

        if self.octahedral_test(neighbors, &table) {
            return Ok(CoordinationLabel::Octahedral);
        }
        if self.tetrahedral_test(neighbors, &table) {
            return Ok(CoordinationLabel::Tetrahedral);
        }
        Ok(CoordinationLabel::None)
    }

    /// Whether the six closest neighbors form an octahedron
    pub fn is_octahedral(&self, neighbors: &[NeighborRecord<'_>]) -> Result<bool> {
        let table = AngleTable::new(neighbors, OCTAHEDRAL_NEIGHBORS)?;
        Ok(self.octahedral_test(neighbors, &table))
    }

    /// Whether the four closest neighbors form a tetrahedron
    pub fn is_tetrahedral(&self, neighbors: &[NeighborRecord<'_>]) -> Result<bool> {
        let table = AngleTable::new(neighbors, TETRAHEDRAL_NEIGHBORS)?;
        Ok(self.tetrahedral_test(neighbors, &table))
    }

    fn octahedral_test(&self, neighbors: &[NeighborRecord<'_>], table: &AngleTable) -> bool {
        let c = &self.config;
        if neighbors.len() < OCTAHEDRAL_NEIGHBORS {
            return false;
        }

        if !bonds_within(neighbors, OCTAHEDRAL_NEIGHBORS, c.octahedral_distance_tolerance) {
            return false;
        }

        let angles = table.sorted_within(OCTAHEDRAL_NEIGHBORS);
        let (cis, trans) = angles.split_at(angles.len() - OCTAHEDRAL_TRANS_PAIRS);

        cis.iter()
            .all(|&a| in_range(a, c.octahedral_cis_angle, c.octahedral_cis_angle_tolerance))
            && trans
                .iter()
                .all(|&a| in_range(a, c.octahedral_trans_angle, c.octahedral_trans_angle_tolerance))
    }

    fn tetrahedral_test(&self, neighbors: &[NeighborRecord<'_>], table: &AngleTable) -> bool {
        let c = &self.config;
        if neighbors.len() < TETRAHEDRAL_NEIGHBORS {
            return false;
        }

        bonds_within(neighbors, TETRAHEDRAL_NEIGHBORS, c.tetrahedral_distance_tolerance)
            && table
                .sorted_within(TETRAHEDRAL_NEIGHBORS)
                .iter()
                .all(|&a| in_range(a, c.tetrahedral_angle, c.tetrahedral_angle_tolerance))
    }
}

/// The first `k` bonds are all shorter than `tolerance` times the shortest
fn bonds_within(neighbors: &[NeighborRecord<'_>], k: usize, tolerance: f64) -> bool {
    let limit = neighbors[0].distance * tolerance;
    neighbors[..k].iter().all(|n| n.distance < limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Vector3D;

    fn records(vectors: &[[f64; 3]]) -> Vec<NeighborRecord<'static>> {
        let mut records: Vec<_> = vectors
            .iter()
            .map(|&v| {
                let displacement = Vector3D::from_array(v);
                NeighborRecord {
                    symbol: "O",
                    distance: displacement.length(),
                    displacement,
                }
            })
            .collect();
        records.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        records
    }

    const OCTAHEDRON: [[f64; 3]; 6] = [
        [2.0, 0.0, 0.0],
        [-2.0, 0.0, 0.0],
        [0.0, 2.0, 0.0],
        [0.0, -2.0, 0.0],
        [0.0, 0.0, 2.0],
        [0.0, 0.0, -2.0],
    ];

    #[test]
    fn test_labels() {
        assert_eq!(CoordinationLabel::Octahedral.coordination_number(), 6);
        assert_eq!(CoordinationLabel::Tetrahedral.coordination_number(), 4);
        assert_eq!(CoordinationLabel::None.coordination_number(), 0);
        assert_eq!(CoordinationLabel::Indeterminate.coordination_number(), -1);
        assert_eq!(CoordinationLabel::Octahedral.to_string(), "octahedral coordination");
    }

    #[test]
    fn test_ideal_octahedron() {
        let classifier = CoordinationClassifier::default();
        let neighbors = records(&OCTAHEDRON);
        assert_eq!(classifier.classify(&neighbors), Ok(CoordinationLabel::Octahedral));
    }

    #[test]
    fn test_four_neighbors_skip_octahedral_test() {
        let classifier = CoordinationClassifier::default();
        let neighbors = records(&[[1.0, 1.0, 1.0], [1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, 1.0]]);
        assert_eq!(classifier.is_octahedral(&neighbors), Ok(false));
        assert_eq!(classifier.classify(&neighbors), Ok(CoordinationLabel::Tetrahedral));
    }

    #[test]
    fn test_too_few_neighbors() {
        let classifier = CoordinationClassifier::default();
        let neighbors = records(&OCTAHEDRON[..3]);
        assert_eq!(
            classifier.classify(&neighbors),
            Err(ClassificationError::InsufficientNeighbors { found: 3, required: 4 })
        );
    }

    #[test]
    fn test_coincident_neighbor() {
        let classifier = CoordinationClassifier::default();
        let mut neighbors = records(&OCTAHEDRON);
        neighbors[3].displacement = Vector3D::origin();
        assert_eq!(
            classifier.classify(&neighbors),
            Err(ClassificationError::DegenerateDisplacement { index: 3 })
        );
    }
}
