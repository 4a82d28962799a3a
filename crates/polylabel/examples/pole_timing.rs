//! Pole-search timing probe for a single reproducible ring.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does the
//!   refinement take on a ~64-vertex concave ring at various tolerances?"
//!
//! Why this shape
//! - One fixed replay token, a sweep over precisions: the cost of the search
//!   is driven by the tolerance, not by the draw, so a single ring keeps the
//!   numbers comparable across rows.

use std::time::Instant;

use polylabel::pole::polylabel_with_distance;
use polylabel::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};

fn main() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(64),
        angle_jitter_frac: 0.3,
        radial_jitter: 0.25,
        base_radius: 100.0,
        random_phase: true,
    };
    let ring = draw_ring_radial(cfg, ReplayToken { seed: 42, index: 0 });
    println!("ring vertices={}", ring.len());

    for &precision in &[10.0, 1.0, 0.1, 0.01, 0.001] {
        let start = Instant::now();
        let (pole, dist) = polylabel_with_distance(&ring, precision);
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "precision={precision} pole=({:.6}, {:.6}) dist={dist:.6} time_ms={elapsed:.3}",
            pole.x, pole.y
        );
    }
}
