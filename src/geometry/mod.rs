//! Geometric derivations on top of the neighbor queries.
//!
//! This module provides triangle and one-ring areas, face-averaged and
//! attribute-backed point normals, and a spherical coordinate helper.

pub mod metrics;
pub mod normals;

pub use metrics::{local_one_ring_area, spherical_to_cartesian, triangle_area};
pub use normals::{NormalOpts, average_normal, point_normal};
