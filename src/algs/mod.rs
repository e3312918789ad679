//! Neighbor queries and mesh generators.

pub mod array;
#[cfg(feature = "rayon")]
pub mod batch;
pub mod meshgen;
pub mod neighbors;
pub mod one_ring;

pub use neighbors::connected_points;
pub use one_ring::{OneRing, OneRingOpts, one_ring, one_ring_fans, one_ring_with};
