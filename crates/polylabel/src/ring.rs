//! Polygon-ring primitives: bounding box, signed boundary distance, centroid.
//!
//! Purpose
//! - Provide the per-query building blocks the refinement search in `pole`
//!   evaluates many thousands of times: an axis-aligned bounding box, a
//!   signed distance to the ring boundary, and an area-weighted centroid.
//!
//! Conventions
//! - A ring is an ordered `&[Vector2<f64>]`, implicitly closed (the last
//!   vertex connects back to the first). Edges are traversed by direct
//!   indexed access `(i, (i + 1) % n)`; no per-call allocation.
//! - Degeneracy handling is intentionally light: zero-length edges and
//!   zero-area rings are handled without dividing by zero, everything else
//!   (self-intersections, fewer than 3 vertices) is the caller's problem.
//!
//! Code cross-refs: `cell::Cell`, `pole::polylabel`

use nalgebra::Vector2;

/// Axis-aligned bounding box of a ring.
#[derive(Clone, Copy, Debug)]
pub struct Bbox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bbox {
    /// Componentwise min/max over all vertices.
    pub fn of(ring: &[Vector2<f64>]) -> Self {
        let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in ring {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Signed distance from `p` to the ring boundary.
///
/// Positive when `p` is inside the ring, negative outside; the magnitude is
/// the Euclidean distance to the nearest edge either way. Containment uses
/// the crossing-number test: a horizontal ray from `p` toward +x toggles the
/// flag once per edge whose endpoints straddle `p.y` and whose x-intersection
/// lies right of `p.x`; an odd number of toggles means inside.
pub fn signed_distance(ring: &[Vector2<f64>], p: Vector2<f64>) -> f64 {
    let n = ring.len();
    let mut inside = false;
    let mut min_sq = f64::INFINITY;
    for i in 0..n {
        let pa = ring[i];
        let pb = ring[(i + 1) % n];
        if (pa.y > p.y) != (pb.y > p.y)
            && p.x < (pb.x - pa.x) * (p.y - pa.y) / (pb.y - pa.y) + pa.x
        {
            inside = !inside;
        }
        min_sq = min_sq.min(segment_dist_sq(p, pa, pb));
    }
    let d = min_sq.sqrt();
    if inside {
        d
    } else {
        -d
    }
}

/// Squared distance from `p` to the segment `[a, b]`.
///
/// Projects `p` onto the segment's line and clamps the parameter to [0, 1];
/// a zero-length segment skips the projection and measures to `a` directly.
fn segment_dist_sq(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let mut q = a;
    let d = b - a;
    if d.x != 0.0 || d.y != 0.0 {
        let t = (p - a).dot(&d) / d.dot(&d);
        if t > 1.0 {
            q = b;
        } else if t > 0.0 {
            q += d * t;
        }
    }
    (p - q).norm_squared()
}

/// Area-weighted centroid via the shoelace accumulation.
///
/// A zero-area ring (collinear or repeated vertices) falls back to the first
/// vertex rather than dividing by zero. Works for any simple ring regardless
/// of winding order (the sign cancels in the quotient).
pub fn area_centroid(ring: &[Vector2<f64>]) -> Vector2<f64> {
    let n = ring.len();
    let mut area = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    for i in 0..n {
        let pa = ring[i];
        let pb = ring[(i + 1) % n];
        let f = pa.x * pb.y - pb.x * pa.y;
        x += (pa.x + pb.x) * f;
        y += (pa.y + pb.y) * f;
        area += f * 3.0;
    }
    if area == 0.0 {
        ring[0]
    } else {
        Vector2::new(x / area, y / area)
    }
}
