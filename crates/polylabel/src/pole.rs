//! Best-first quadtree refinement for the pole of inaccessibility.
//!
//! Purpose
//! - Find the interior point of a simple ring that maximizes distance to the
//!   nearest boundary edge, to within `precision`.
//!
//! Algorithm
//! - Tile the ring's bounding box with square cells of side
//!   `min(width, height)` and push them onto a max-heap keyed by each cell's
//!   upper bound (`cell::Cell::max`).
//! - Seed the incumbent with the area centroid (a zero-half cell), then
//!   repeatedly pop the most promising cell: adopt it if its center beats the
//!   incumbent, discard it if even its bound cannot beat the incumbent by
//!   more than `precision`, otherwise subdivide into four children.
//! - The frontier's maximum bound shrinks geometrically under subdivision, so
//!   the loop terminates for any positive-area ring and `precision > 0`.
//!
//! Code cross-refs: `cell::Cell`, `ring::{Bbox, area_centroid}`

use std::collections::BinaryHeap;

use nalgebra::Vector2;

use crate::cell::Cell;
use crate::ring::{area_centroid, Bbox};

/// Pole of inaccessibility of a simple ring.
///
/// `precision` is the convergence tolerance in ring coordinate units: the
/// returned point's distance to the boundary is within `precision` of the
/// true maximum (the ecosystem's conventional choice is `1.0`). Preconditions
/// as documented on the crate root; degenerate rings short-circuit to the
/// bounding-box minimum corner.
pub fn polylabel(ring: &[Vector2<f64>], precision: f64) -> Vector2<f64> {
    polylabel_with_distance(ring, precision).0
}

/// Same search as [`polylabel`], also returning the achieved signed distance
/// from the result to the ring boundary.
pub fn polylabel_with_distance(ring: &[Vector2<f64>], precision: f64) -> (Vector2<f64>, f64) {
    let bbox = Bbox::of(ring);
    let cellsize = bbox.width().min(bbox.height());
    if cellsize == 0.0 {
        // Ring collapsed onto a line or point: every candidate lies on the
        // boundary, so skip the search entirely.
        return (bbox.min, 0.0);
    }
    let half = cellsize / 2.0;

    let mut frontier = BinaryHeap::new();
    let mut x = bbox.min.x;
    while x < bbox.max.x {
        let mut y = bbox.min.y;
        while y < bbox.max.y {
            frontier.push(Cell::new(Vector2::new(x + half, y + half), half, ring));
            y += cellsize;
        }
        x += cellsize;
    }

    // The area centroid seeds the incumbent; for most rings it is already a
    // decent interior guess, which tightens pruning from the first pop.
    let mut best = Cell::new(area_centroid(ring), 0.0, ring);

    while let Some(cell) = frontier.pop() {
        if cell.dist > best.dist {
            best = cell;
        }
        // No descendant of this cell can beat the incumbent by more than the
        // tolerance: its bound already fails to.
        if cell.max - best.dist <= precision {
            continue;
        }
        for child in cell.split(ring) {
            frontier.push(child);
        }
    }

    (best.center, best.dist)
}
