//! In-memory implementation of the [`IncidenceQuery`] trait.
//!
//! This module provides [`InMemoryMesh`], a simple polygon soup with
//! hash-map storage. It exists so the neighbor queries can be exercised
//! without an external mesh library; production callers usually implement
//! [`IncidenceQuery`] directly on their own mesh type.

use hashbrown::HashMap;

use crate::geometry::metrics::polygon_normal;
use crate::mesh_error::MeshError;
use crate::topology::incidence::IncidenceQuery;
use crate::topology::point::{FaceId, PointId};

/// Polygon mesh with per-point incidence lists and named vector attributes.
///
/// Incidence lists keep the order in which faces were added, which is also
/// the tie-break order of [`one_ring`](crate::algs::one_ring::one_ring).
#[derive(Clone, Debug, Default)]
pub struct InMemoryMesh {
    /// Point positions.
    positions: HashMap<PointId, [f64; 3]>,
    /// Face vertex loops in winding order.
    faces: HashMap<FaceId, Vec<PointId>>,
    /// Faces referencing each point, in insertion order.
    incidence: HashMap<PointId, Vec<FaceId>>,
    /// Per-point vector attributes by name.
    attributes: HashMap<String, HashMap<PointId, [f64; 3]>>,
}

impl InMemoryMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh with dense ids: point `i` at `positions[i]`, face `j`
    /// with loop `loops[j]`.
    ///
    /// # Example
    /// ```rust
    /// use mesh_onering::topology::in_memory::InMemoryMesh;
    /// use mesh_onering::topology::incidence::IncidenceQuery;
    /// use mesh_onering::topology::point::{FaceId, PointId};
    /// let mesh = InMemoryMesh::from_polygons(
    ///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    ///     &[vec![0, 1, 2]],
    /// )?;
    /// assert_eq!(mesh.incident_faces(PointId::new(1)), &[FaceId::new(0)]);
    /// # Ok::<(), mesh_onering::mesh_error::MeshError>(())
    /// ```
    pub fn from_polygons(positions: &[[f64; 3]], loops: &[Vec<usize>]) -> Result<Self, MeshError> {
        let mut mesh = Self::new();
        for (i, &pos) in positions.iter().enumerate() {
            mesh.add_point(PointId::from(i), pos);
        }
        for (j, lp) in loops.iter().enumerate() {
            mesh.add_face(FaceId::from(j), lp.iter().map(|&i| PointId::from(i)))?;
        }
        Ok(mesh)
    }

    /// Inserts or moves point `p`.
    pub fn add_point(&mut self, p: PointId, position: [f64; 3]) {
        self.positions.insert(p, position);
    }

    /// Adds face `f` with the given vertex loop.
    ///
    /// Every vertex must already have a position and the loop needs at least
    /// two entries. On error the mesh is left unchanged.
    pub fn add_face(
        &mut self,
        f: FaceId,
        vertices: impl IntoIterator<Item = PointId>,
    ) -> Result<(), MeshError> {
        if self.faces.contains_key(&f) {
            return Err(MeshError::DuplicateFace(f));
        }
        let vertices: Vec<PointId> = vertices.into_iter().collect();
        if vertices.len() < 2 {
            return Err(MeshError::FaceTooShort {
                face: f,
                len: vertices.len(),
            });
        }
        if let Some(&point) = vertices.iter().find(|p| !self.positions.contains_key(*p)) {
            return Err(MeshError::UnknownPoint { face: f, point });
        }
        for &p in &vertices {
            let faces = self.incidence.entry(p).or_default();
            // a vertex repeated in one loop is still one incidence
            if faces.last() != Some(&f) {
                faces.push(f);
            }
        }
        self.faces.insert(f, vertices);
        Ok(())
    }

    /// Assigns the vector attribute `name` at point `p`, creating the
    /// attribute on first use. Points never assigned read as zero.
    pub fn set_point_attribute(
        &mut self,
        name: &str,
        p: PointId,
        value: [f64; 3],
    ) -> Result<(), MeshError> {
        if !self.positions.contains_key(&p) {
            return Err(MeshError::UnknownAttributePoint {
                name: name.to_owned(),
                point: p,
            });
        }
        self.attributes
            .entry(name.to_owned())
            .or_default()
            .insert(p, value);
        Ok(())
    }

    /// Drops the attribute `name`; returns whether it existed.
    pub fn remove_point_attribute(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    /// Sort incidence lists by face id so walks no longer depend on the
    /// order in which faces were added.
    pub fn sort_incidence(&mut self) {
        for faces in self.incidence.values_mut() {
            faces.sort_unstable();
        }
    }

    /// Reorders the incidence list of `p` in place with `f`.
    pub fn reorder_incidence(&mut self, p: PointId, f: impl FnOnce(&mut [FaceId])) {
        if let Some(faces) = self.incidence.get_mut(&p) {
            f(faces);
        }
    }

    /// Point ids in ascending order.
    pub fn points_sorted(&self) -> Vec<PointId> {
        let mut pts: Vec<_> = self.positions.keys().copied().collect();
        pts.sort_unstable();
        pts
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}

impl IncidenceQuery for InMemoryMesh {
    fn incident_faces(&self, p: PointId) -> &[FaceId] {
        self.incidence.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }

    fn face_loop(&self, f: FaceId) -> &[PointId] {
        self.faces.get(&f).map(Vec::as_slice).unwrap_or(&[])
    }

    fn point_position(&self, p: PointId) -> [f64; 3] {
        self.positions.get(&p).copied().unwrap_or_default()
    }

    fn has_point_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    fn point_attribute(&self, name: &str, p: PointId) -> [f64; 3] {
        self.attributes
            .get(name)
            .and_then(|values| values.get(&p))
            .copied()
            .unwrap_or_default()
    }

    fn face_normal(&self, f: FaceId, u: f64, v: f64) -> [f64; 3] {
        let corners: Vec<[f64; 3]> = self
            .face_loop(f)
            .iter()
            .map(|&p| self.point_position(p))
            .collect();
        polygon_normal(&corners, u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(raw: u64) -> PointId {
        PointId::new(raw)
    }

    fn fid(raw: u64) -> FaceId {
        FaceId::new(raw)
    }

    fn two_triangles() -> InMemoryMesh {
        InMemoryMesh::from_polygons(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            &[vec![0, 1, 2], vec![0, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn incidence_keeps_insertion_order() {
        let mesh = two_triangles();
        assert_eq!(mesh.incident_faces(pid(0)), &[fid(0), fid(1)]);
        assert_eq!(mesh.incident_faces(pid(1)), &[fid(0)]);
        assert_eq!(mesh.incident_faces(pid(3)), &[fid(1)]);
        assert_eq!(mesh.face_loop(fid(1)), &[pid(0), pid(2), pid(3)]);
        assert_eq!(mesh.num_points(), 4);
        assert_eq!(mesh.num_faces(), 2);
    }

    #[test]
    fn unknown_ids_are_empty() {
        let mesh = two_triangles();
        assert!(mesh.incident_faces(pid(42)).is_empty());
        assert!(mesh.face_loop(fid(42)).is_empty());
        assert_eq!(mesh.point_position(pid(42)), [0.0; 3]);
        assert_eq!(mesh.face_normal(fid(42), 0.5, 0.5), [0.0; 3]);
    }

    #[test]
    fn sort_incidence_orders_by_face_id() {
        let mut mesh = InMemoryMesh::new();
        for i in 0..3 {
            mesh.add_point(pid(i), [i as f64, (i * i) as f64, 0.0]);
        }
        mesh.add_face(fid(9), [pid(0), pid(1), pid(2)]).unwrap();
        mesh.add_face(fid(4), [pid(2), pid(1), pid(0)]).unwrap();
        assert_eq!(mesh.incident_faces(pid(0)), &[fid(9), fid(4)]);
        mesh.sort_incidence();
        assert_eq!(mesh.incident_faces(pid(0)), &[fid(4), fid(9)]);
        mesh.reorder_incidence(pid(0), |faces| faces.reverse());
        assert_eq!(mesh.incident_faces(pid(0)), &[fid(9), fid(4)]);
    }

    #[test]
    fn add_face_rejects_bad_input() {
        let mut mesh = two_triangles();
        assert_eq!(
            mesh.add_face(fid(0), [pid(1), pid(2)]),
            Err(MeshError::DuplicateFace(fid(0)))
        );
        assert_eq!(
            mesh.add_face(fid(5), [pid(1)]),
            Err(MeshError::FaceTooShort { face: fid(5), len: 1 })
        );
        assert_eq!(
            mesh.add_face(fid(6), [pid(1), pid(7), pid(2)]),
            Err(MeshError::UnknownPoint {
                face: fid(6),
                point: pid(7)
            })
        );
        // failed inserts leave no trace
        assert_eq!(mesh.incident_faces(pid(1)), &[fid(0)]);
        assert!(mesh.face_loop(fid(6)).is_empty());
    }

    #[test]
    fn two_point_face_is_accepted() {
        let mut mesh = two_triangles();
        mesh.add_face(fid(2), [pid(1), pid(3)]).unwrap();
        assert_eq!(mesh.incident_faces(pid(3)), &[fid(1), fid(2)]);
        assert_eq!(mesh.face_normal(fid(2), 0.5, 0.5), [0.0; 3]);
    }

    #[test]
    fn attributes() {
        let mut mesh = two_triangles();
        assert!(!mesh.has_point_attribute("N"));
        mesh.set_point_attribute("N", pid(2), [0.0, 0.0, 2.0]).unwrap();
        assert!(mesh.has_point_attribute("N"));
        assert_eq!(mesh.point_attribute("N", pid(2)), [0.0, 0.0, 2.0]);
        assert_eq!(mesh.point_attribute("N", pid(1)), [0.0; 3]);
        assert!(matches!(
            mesh.set_point_attribute("N", pid(11), [1.0; 3]),
            Err(MeshError::UnknownAttributePoint { .. })
        ));
        assert!(mesh.remove_point_attribute("N"));
        assert!(!mesh.remove_point_attribute("N"));
        assert!(!mesh.has_point_attribute("N"));
    }

    #[test]
    fn face_normal_is_unit_and_follows_winding() {
        let mesh = two_triangles();
        assert_eq!(mesh.face_normal(fid(0), 0.5, 0.5), [0.0, 0.0, 1.0]);
        assert_eq!(mesh.face_normal(fid(1), 0.5, 0.5), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn mesh_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryMesh>();
    }
}
