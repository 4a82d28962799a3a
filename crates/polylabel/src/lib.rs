//! Pole of inaccessibility for simple 2D polygon rings.
//!
//! Given a closed ring of vertices, [`pole::polylabel`] returns the interior
//! point that maximizes distance to the nearest boundary edge, to within a
//! caller-specified precision. The search is a best-first quadtree refinement
//! over square cells, ordered by an upper bound on the distance achievable
//! inside each cell.
//!
//! Preconditions (documented, not validated)
//! - Rings are ordered vertex sequences, implicitly closed, with at least 3
//!   points for meaningful results.
//! - Self-intersecting rings yield undefined numeric results; callers must
//!   validate simplicity upstream.

pub mod cell;
pub mod pole;
pub mod rand;
pub mod ring;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cell::Cell;
    pub use crate::pole::{polylabel, polylabel_with_distance};
    pub use crate::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::ring::{area_centroid, signed_distance, Bbox};
    pub use nalgebra::Vector2 as Vec2;
}
