#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-onering
//!
//! mesh-onering answers local neighborhood questions about polygon meshes:
//! which points surround a given point, in what order, and what area and
//! normal that neighborhood has. It is a building block for smoothing,
//! curvature estimation, remeshing and attribute propagation.
//!
//! ## Features
//! - Ordered one-ring walk that tells interior (closed) from boundary (open)
//!   points, with opt-in handling of non-manifold points
//! - Unordered, deduplicated neighbor query
//! - One-ring area and face-averaged or attribute-backed point normals
//! - Works against any mesh through the read-only [`IncidenceQuery`] trait;
//!   [`InMemoryMesh`] is included as a reference implementation
//! - Optional parallel batch queries (`rayon` feature)
//!
//! ## Errors
//!
//! Queries never fail. A point that is missing from a face it is listed as
//! incident to is skipped, and degenerate geometry produces zero or NaN
//! values. Only building an [`InMemoryMesh`] can return a
//! [`MeshError`](mesh_error::MeshError).
//!
//! ## Logging
//!
//! Walk decisions are reported through the [`log`] facade at `trace` and
//! `debug` level. Install any `log` backend to see them.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mesh-onering = "0.1"
//! # features = ["rayon"]
//! ```
//!
//! ```rust
//! use mesh_onering::prelude::*;
//! use mesh_onering::algs::meshgen;
//!
//! let mesh = meshgen::octahedron()?;
//! let ring = one_ring(&mesh, PointId::new(4));
//! assert!(ring.is_closed());
//! assert_eq!(connected_points(&mesh, PointId::new(4)).len(), 4);
//! # Ok::<(), MeshError>(())
//! ```

pub mod algs;
pub mod geometry;
pub mod mesh_error;
pub mod topology;

pub use topology::{InMemoryMesh, IncidenceQuery};

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    #[cfg(feature = "rayon")]
    pub use crate::algs::batch::{par_connected_points, par_one_rings};
    pub use crate::algs::neighbors::connected_points;
    pub use crate::algs::one_ring::{OneRing, OneRingOpts, one_ring, one_ring_fans, one_ring_with};
    pub use crate::geometry::metrics::{local_one_ring_area, spherical_to_cartesian, triangle_area};
    pub use crate::geometry::normals::{
        NormalOpts, average_normal, average_normal_with, point_normal, point_normal_with,
    };
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::in_memory::InMemoryMesh;
    pub use crate::topology::incidence::IncidenceQuery;
    pub use crate::topology::point::{FaceId, PointId};
}
