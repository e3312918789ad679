//! Top-level module for mesh handles and incidence.
//!
//! This module provides:
//! - `PointId` / `FaceId` handles
//! - The `IncidenceQuery` trait through which all algorithms read the mesh
//! - `InMemoryMesh`, a reference implementation of that trait
//!
//! Most users implement `IncidenceQuery` on their own mesh type and call the
//! algorithms in [`crate::algs`] and [`crate::geometry`] against it.

pub mod in_memory;
pub mod incidence;
pub mod point;

pub use in_memory::InMemoryMesh;
pub use incidence::IncidenceQuery;
pub use point::{FaceId, PointId};
