//! Square search cells for the best-first quadtree refinement.
//!
//! A `Cell` is a value type: its oracle distance and upper bound are derived
//! once at construction and never mutated, which keeps the search loop free
//! of aliasing hazards. Heap ordering is keyed on the upper bound so a
//! `std::collections::BinaryHeap<Cell>` pops a maximal-bound cell each step.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::ring::signed_distance;

/// Circumscribed-radius factor of a square cell relative to its half-width.
/// One constant for the seed grid and every subdivision level, so parent and
/// child bounds are comparable.
const HALF_DIAGONAL: f64 = std::f64::consts::SQRT_2;

/// Square region centered at `center` with half-width `half`.
///
/// Invariants:
/// - `dist` is the signed distance from `center` to the ring boundary
///   (positive inside, negative outside).
/// - `max = dist + half * sqrt(2)` bounds the signed distance achievable by
///   any point within the cell.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub center: Vector2<f64>,
    pub half: f64,
    pub dist: f64,
    pub max: f64,
}

impl Cell {
    /// Construct a cell, evaluating the distance oracle at its center.
    pub fn new(center: Vector2<f64>, half: f64, ring: &[Vector2<f64>]) -> Self {
        let dist = signed_distance(ring, center);
        Self {
            center,
            half,
            dist,
            max: dist + half * HALF_DIAGONAL,
        }
    }

    /// The four children of half-width `half / 2`, one per quadrant.
    pub fn split(&self, ring: &[Vector2<f64>]) -> [Cell; 4] {
        let h = self.half / 2.0;
        let c = self.center;
        [
            Cell::new(Vector2::new(c.x - h, c.y - h), h, ring),
            Cell::new(Vector2::new(c.x + h, c.y - h), h, ring),
            Cell::new(Vector2::new(c.x - h, c.y + h), h, ring),
            Cell::new(Vector2::new(c.x + h, c.y + h), h, ring),
        ]
    }
}

// Heap ordering on the upper bound. Ties between equal bounds are resolved
// arbitrarily; the search only requires that some maximal-bound cell is
// dequeued each step.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.max == other.max
    }
}

impl Eq for Cell {}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.max.partial_cmp(&other.max)
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::collections::BinaryHeap;

    fn square10() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ]
    }

    #[test]
    fn bound_is_dist_plus_half_diagonal() {
        let ring = square10();
        let c = Cell::new(vector![5.0, 5.0], 2.0, &ring);
        assert!((c.dist - 5.0).abs() < 1e-12);
        assert!((c.max - (5.0 + 2.0 * std::f64::consts::SQRT_2)).abs() < 1e-12);
    }

    #[test]
    fn split_quarters_the_half_width() {
        let ring = square10();
        let parent = Cell::new(vector![5.0, 5.0], 4.0, &ring);
        let kids = parent.split(&ring);
        for k in &kids {
            assert!((k.half - 2.0).abs() < 1e-15);
            assert!(((k.center.x - 5.0).abs() - 2.0).abs() < 1e-15);
            assert!(((k.center.y - 5.0).abs() - 2.0).abs() < 1e-15);
            // Children never out-bound the parent.
            assert!(k.max <= parent.max + 1e-12);
        }
    }

    #[test]
    fn heap_pops_largest_bound_first() {
        let ring = square10();
        let mut heap = BinaryHeap::new();
        heap.push(Cell::new(vector![1.0, 1.0], 0.5, &ring));
        heap.push(Cell::new(vector![5.0, 5.0], 0.5, &ring));
        heap.push(Cell::new(vector![9.0, 2.0], 0.5, &ring));
        let top = heap.pop().unwrap();
        assert!((top.center - vector![5.0, 5.0]).norm() < 1e-12);
        let mut prev = top.max;
        while let Some(c) = heap.pop() {
            assert!(c.max <= prev);
            prev = c.max;
        }
    }
}
