//! MeshError: error type for building reference meshes.
//!
//! The neighbor queries and geometric derivations never fail; degenerate input
//! shows up as an empty ring or a zero/NaN value instead. Only the in-memory
//! mesh builder and the generators in [`crate::algs::meshgen`] report errors.

use crate::topology::point::{FaceId, PointId};
use thiserror::Error;

/// Errors raised while assembling an [`InMemoryMesh`](crate::topology::in_memory::InMemoryMesh).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A face loop needs at least two vertices.
    #[error("face `{face}` has {len} vertices; a face loop needs at least 2")]
    FaceTooShort { face: FaceId, len: usize },
    /// A face references a point that has no position.
    #[error("face `{face}` references unknown point `{point}`")]
    UnknownPoint { face: FaceId, point: PointId },
    /// The face id is already in use.
    #[error("face `{0}` already exists")]
    DuplicateFace(FaceId),
    /// A point attribute was assigned to a point that does not exist.
    #[error("attribute `{name}` set on unknown point `{point}`")]
    UnknownAttributePoint { name: String, point: PointId },
    /// Generator parameters or coordinates are unusable.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl MeshError {
    pub(crate) fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry(message.into())
    }
}
