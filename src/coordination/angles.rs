/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Pairwise bond angles among the closest neighbors of an atom

use super::errors::{ClassificationError, Result};
use super::geometry::angle;
use super::neighbors::NeighborRecord;
use crate::utils::constants::DEGENERATE_LENGTH;

/// Angles (degrees) between the displacement vectors of neighbor pairs
///
/// Holds one entry per unordered pair `(i, j)`, `i < j`, over the first
/// `size` neighbors, stored row by row in upper-triangular order.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTable {
    size: usize,
    angles: Vec<f64>,
}

impl AngleTable {
    /// Compute all pairwise angles among the first `window` neighbors
    ///
    /// Fails if any of those neighbors sits on top of the central atom.
    pub fn new(neighbors: &[NeighborRecord<'_>], window: usize) -> Result<Self> {
        let size = window.min(neighbors.len());
        let vectors: Vec<_> = neighbors[..size].iter().map(|n| n.displacement).collect();

        if let Some(index) = vectors
            .iter()
            .position(|v| v.length() < DEGENERATE_LENGTH)
        {
            return Err(ClassificationError::DegenerateDisplacement { index });
        }

        let mut angles = Vec::with_capacity(size * size.saturating_sub(1) / 2);
        for i in 0..size {
            for j in (i + 1)..size {
                angles.push(angle(&vectors[i], &vectors[j]));
            }
        }

        Ok(Self { size, angles })
    }

    /// Number of neighbors covered by the table
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Whether the table holds no pairs
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        i * (2 * self.size - i - 1) / 2 + (j - i - 1)
    }

    /// Angle between neighbors `i` and `j` in either order
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        if i == j || j >= self.size {
            return None;
        }
        self.angles.get(self.offset(i, j)).copied()
    }

    /// All `((i, j), angle)` entries with `i < j`
    pub fn pairs(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        (0..self.size)
            .flat_map(move |i| ((i + 1)..self.size).map(move |j| (i, j)))
            .zip(self.angles.iter().copied())
    }

    /// Angles of all pairs drawn from the first `k` neighbors, ascending
    pub fn sorted_within(&self, k: usize) -> Vec<f64> {
        let mut angles: Vec<f64> = self
            .pairs()
            .filter(|&((_, j), _)| j < k)
            .map(|(_, a)| a)
            .collect();
        angles.sort_by(f64::total_cmp);
        angles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Vector3D;
    use approx::assert_relative_eq;

    fn records(vectors: &[[f64; 3]]) -> Vec<NeighborRecord<'static>> {
        vectors
            .iter()
            .map(|&v| {
                let displacement = Vector3D::from_array(v);
                NeighborRecord {
                    symbol: "O",
                    distance: displacement.length(),
                    displacement,
                }
            })
            .collect()
    }

    #[test]
    fn test_octahedron_table() {
        let neighbors = records(&[
            [2.0, 0.0, 0.0],
            [-2.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, -2.0, 0.0],
            [0.0, 0.0, 2.0],
            [0.0, 0.0, -2.0],
        ]);
        let table = AngleTable::new(&neighbors, 8).unwrap();

        assert_eq!(table.size(), 6);
        assert_eq!(table.len(), 15);
        assert_relative_eq!(table.get(0, 1).unwrap(), 180.0, epsilon = 1e-10);
        assert_relative_eq!(table.get(4, 0).unwrap(), 90.0, epsilon = 1e-10);
        assert_eq!(table.get(2, 2), None);
        assert_eq!(table.get(0, 6), None);

        let sorted = table.sorted_within(6);
        assert_eq!(sorted.len(), 15);
        assert!(sorted[..12].iter().all(|a| (a - 90.0).abs() < 1e-10));
        assert!(sorted[12..].iter().all(|a| (a - 180.0).abs() < 1e-10));

        assert_eq!(table.sorted_within(4).len(), 6);
    }

    #[test]
    fn test_pairs_follow_upper_triangle() {
        let neighbors = records(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0, 0.0]]);
        let table = AngleTable::new(&neighbors, 4).unwrap();

        let indices: Vec<_> = table.pairs().map(|(pair, _)| pair).collect();
        assert_eq!(indices, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        for ((i, j), a) in table.pairs() {
            assert_eq!(table.get(i, j), Some(a));
            assert_eq!(table.get(j, i), Some(a));
        }
        assert_relative_eq!(table.get(0, 3).unwrap(), 45.0, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_displacement() {
        let neighbors = records(&[[1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        assert_eq!(
            AngleTable::new(&neighbors, 8),
            Err(ClassificationError::DegenerateDisplacement { index: 1 })
        );
        // Outside the window the degenerate vector is ignored
        assert!(AngleTable::new(&neighbors, 1).unwrap().is_empty());
    }
}
