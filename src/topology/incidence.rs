//! Read-only incidence queries against an externally owned mesh.
//!
//! This module defines the [`IncidenceQuery`] trait: the only view of the mesh
//! that the neighbor queries in [`crate::algs`] and the derivations in
//! [`crate::geometry`] need. The mesh owner keeps storage, attributes and
//! validity rules; implementors only answer the six queries below.

use crate::topology::point::{FaceId, PointId};

/// Core point↔face incidence API.
///
/// The relation is bidirectional, in the same spirit as a sieve's
/// cone/support pair: [`face_loop`](Self::face_loop) goes down from a face to
/// its vertices (ordered, fixed winding) and
/// [`incident_faces`](Self::incident_faces) goes up from a point to the faces
/// that reference it (unordered, but stable between calls).
///
/// Implementations must be side-effect free. If the implementor is also
/// `Sync`, the queries may be issued from several threads at once.
pub trait IncidenceQuery {
    /// Faces that reference `p`. Empty for unknown points.
    fn incident_faces(&self, p: PointId) -> &[FaceId];

    /// Vertex loop of `f` in winding order. Empty for unknown faces.
    fn face_loop(&self, f: FaceId) -> &[PointId];

    /// Position of `p`.
    fn point_position(&self, p: PointId) -> [f64; 3];

    /// Whether a per-point vector attribute called `name` exists.
    fn has_point_attribute(&self, name: &str) -> bool;

    /// Value of the per-point vector attribute `name` at `p`.
    fn point_attribute(&self, name: &str, p: PointId) -> [f64; 3];

    /// Geometric normal of `f` sampled at parametric coordinates `(u, v)`.
    fn face_normal(&self, f: FaceId, u: f64, v: f64) -> [f64; 3];
}

impl<M: IncidenceQuery + ?Sized> IncidenceQuery for &M {
    #[inline]
    fn incident_faces(&self, p: PointId) -> &[FaceId] {
        (**self).incident_faces(p)
    }
    #[inline]
    fn face_loop(&self, f: FaceId) -> &[PointId] {
        (**self).face_loop(f)
    }
    #[inline]
    fn point_position(&self, p: PointId) -> [f64; 3] {
        (**self).point_position(p)
    }
    #[inline]
    fn has_point_attribute(&self, name: &str) -> bool {
        (**self).has_point_attribute(name)
    }
    #[inline]
    fn point_attribute(&self, name: &str, p: PointId) -> [f64; 3] {
        (**self).point_attribute(name, p)
    }
    #[inline]
    fn face_normal(&self, f: FaceId, u: f64, v: f64) -> [f64; 3] {
        (**self).face_normal(f, u, v)
    }
}
