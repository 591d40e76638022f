/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Nearest-neighbor search around a central atom

use super::geometry::distance;
use crate::atoms::{Atom, Vector3D};

/// A neighbor of a central atom, produced fresh for every query
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborRecord<'a> {
    /// Element symbol of the neighbor
    pub symbol: &'a str,
    /// Distance from the central atom (Å)
    pub distance: f64,
    /// Neighbor position minus central atom position
    pub displacement: Vector3D,
}

/// All candidates at non-zero distance from `center`, closest first
///
/// The distance to each candidate is computed once. Candidates at exactly
/// zero distance (the central atom itself) are skipped. Equal distances keep
/// the candidate order.
pub fn find_neighbors<'a>(center: &Atom, candidates: &'a [Atom]) -> Vec<NeighborRecord<'a>> {
    let origin = center.position();

    let mut neighbors: Vec<NeighborRecord<'a>> = candidates
        .iter()
        .filter_map(|candidate| {
            let d = distance(origin, candidate.position());
            (d != 0.0).then(|| NeighborRecord {
                symbol: candidate.symbol(),
                distance: d,
                displacement: *candidate.position() - *origin,
            })
        })
        .collect();

    // Stable sort: ties stay in candidate order
    neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    neighbors
}

/// The `window` closest neighbors of `center`
///
/// Returns fewer records when the candidate set is too small.
pub fn nearest_neighbors<'a>(
    center: &Atom,
    candidates: &'a [Atom],
    window: usize,
) -> Vec<NeighborRecord<'a>> {
    let mut neighbors = find_neighbors(center, candidates);
    neighbors.truncate(window);
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(symbol: &str, x: f64, y: f64, z: f64) -> Atom {
        Atom::at(symbol, Vector3D::new(x, y, z)).unwrap()
    }

    #[test]
    fn test_excludes_center_and_sorts() {
        let center = atom("Al", 0.0, 0.0, 0.0);
        let candidates = vec![
            atom("O", 3.0, 0.0, 0.0),
            center.clone(),
            atom("N", 0.0, 1.0, 0.0),
            atom("O", 0.0, 0.0, -2.0),
        ];

        let neighbors = find_neighbors(&center, &candidates);

        assert_eq!(neighbors.len(), 3);
        assert_eq!(neighbors[0].symbol, "N");
        assert_eq!(neighbors[0].distance, 1.0);
        assert_eq!(neighbors[1].displacement, Vector3D::new(0.0, 0.0, -2.0));
        assert_eq!(neighbors[2].distance, 3.0);
    }

    #[test]
    fn test_displacement_points_from_center_to_neighbor() {
        let center = atom("Al", 1.0, 1.0, 1.0);
        let candidates = vec![atom("O", 1.0, 1.0, 3.0)];

        let neighbors = find_neighbors(&center, &candidates);
        assert_eq!(neighbors[0].displacement, Vector3D::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let center = atom("Al", 0.0, 0.0, 0.0);
        let candidates = vec![
            atom("O", 2.0, 0.0, 0.0),
            atom("N", 0.0, 2.0, 0.0),
            atom("F", 0.0, 0.0, 2.0),
        ];

        let symbols: Vec<_> = find_neighbors(&center, &candidates)
            .iter()
            .map(|n| n.symbol)
            .collect();
        assert_eq!(symbols, vec!["O", "N", "F"]);
    }

    #[test]
    fn test_short_candidate_set() {
        let center = atom("Al", 0.0, 0.0, 0.0);
        let candidates = vec![center.clone(), atom("O", 2.0, 0.0, 0.0)];

        assert_eq!(nearest_neighbors(&center, &candidates, 8).len(), 1);
        assert!(nearest_neighbors(&center, &[], 8).is_empty());
    }
}
