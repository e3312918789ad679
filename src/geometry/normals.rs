//! Face-averaged and attribute-backed point normals.

use serde::{Deserialize, Serialize};

use crate::geometry::metrics::{add, scale};
use crate::topology::incidence::IncidenceQuery;
use crate::topology::point::{FaceId, PointId};

/// Where point normals come from and where face normals are sampled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalOpts {
    /// Per-point vector attribute that, when present, is returned verbatim.
    pub attribute: String,
    /// Parametric `(u, v)` at which each face normal is sampled.
    pub sample_uv: (f64, f64),
}

impl Default for NormalOpts {
    fn default() -> Self {
        Self {
            attribute: "N".to_owned(),
            sample_uv: (0.5, 0.5),
        }
    }
}

/// Unweighted mean of the normals of `faces`, sampled at their midpoint.
///
/// Returns the zero vector for zero faces **and for exactly one face**. The
/// single-face case is a known oddity kept for compatibility with existing
/// results; callers that want the lone face's normal should ask the mesh
/// directly via [`IncidenceQuery::face_normal`].
pub fn average_normal<M>(mesh: &M, faces: &[FaceId]) -> [f64; 3]
where
    M: IncidenceQuery + ?Sized,
{
    average_normal_with(mesh, faces, &NormalOpts::default())
}

/// [`average_normal`] with a configurable sample position.
pub fn average_normal_with<M>(mesh: &M, faces: &[FaceId], opts: &NormalOpts) -> [f64; 3]
where
    M: IncidenceQuery + ?Sized,
{
    if faces.len() <= 1 {
        return [0.0; 3];
    }
    let (u, v) = opts.sample_uv;
    let sum = faces
        .iter()
        .fold([0.0; 3], |acc, &f| add(acc, mesh.face_normal(f, u, v)));
    scale(sum, 1.0 / faces.len() as f64)
}

/// Normal at `point`.
///
/// If the mesh carries an `N` point attribute its value is returned as is.
/// Otherwise the normal is the [`average_normal`] of `faces`, or of the faces
/// incident to `point` when `faces` is `None`. Pass `faces` only when the
/// list is already at hand; it is ignored when the attribute exists.
pub fn point_normal<M>(mesh: &M, point: PointId, faces: Option<&[FaceId]>) -> [f64; 3]
where
    M: IncidenceQuery + ?Sized,
{
    point_normal_with(mesh, point, faces, &NormalOpts::default())
}

/// [`point_normal`] with a configurable attribute name and sample position.
pub fn point_normal_with<M>(
    mesh: &M,
    point: PointId,
    faces: Option<&[FaceId]>,
    opts: &NormalOpts,
) -> [f64; 3]
where
    M: IncidenceQuery + ?Sized,
{
    if mesh.has_point_attribute(&opts.attribute) {
        return mesh.point_attribute(&opts.attribute, point);
    }
    let faces = faces.unwrap_or_else(|| mesh.incident_faces(point));
    average_normal_with(mesh, faces, opts)
}
