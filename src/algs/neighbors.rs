//! Unordered immediate-neighbor query.

use crate::algs::array::{append_unique, index_of};
use crate::topology::incidence::IncidenceQuery;
use crate::topology::point::PointId;

/// Points that share a face edge with `point`, deduplicated, in no particular
/// order.
///
/// For each incident face the loop-previous vertex of `point` is a neighbor;
/// the loop-next vertex is one too when the loop has at least three entries
/// (on a two-vertex face both would be the same point). A face that is listed
/// as incident but does not contain `point` is skipped.
///
/// # Example
/// ```
/// use mesh_onering::algs::meshgen;
/// use mesh_onering::algs::neighbors::connected_points;
/// use mesh_onering::topology::point::PointId;
/// let mesh = meshgen::single_triangle()?;
/// let mut n = connected_points(&mesh, PointId::new(0));
/// n.sort();
/// assert_eq!(n, vec![PointId::new(1), PointId::new(2)]);
/// # Ok::<(), mesh_onering::mesh_error::MeshError>(())
/// ```
pub fn connected_points<M>(mesh: &M, point: PointId) -> Vec<PointId>
where
    M: IncidenceQuery + ?Sized,
{
    let mut result = Vec::new();
    for &face in mesh.incident_faces(point) {
        let pts = mesh.face_loop(face);
        let Some(index) = index_of(pts, &point) else {
            log::trace!("connected_points: face {face} does not contain point {point}");
            continue;
        };
        let n = pts.len();
        if n >= 2 {
            append_unique(&mut result, pts[(index + n - 1) % n]);
        }
        if n >= 3 {
            append_unique(&mut result, pts[(index + 1) % n]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::meshgen;
    use crate::topology::in_memory::InMemoryMesh;
    use crate::topology::point::FaceId;

    fn pid(raw: u64) -> PointId {
        PointId::new(raw)
    }

    fn sorted(mut v: Vec<PointId>) -> Vec<PointId> {
        v.sort_unstable();
        v
    }

    #[test]
    fn octahedron_vertex_has_four_neighbors() {
        let mesh = meshgen::octahedron().unwrap();
        // +z touches everything except -z
        assert_eq!(
            sorted(connected_points(&mesh, pid(4))),
            vec![pid(0), pid(1), pid(2), pid(3)]
        );
    }

    #[test]
    fn quad_neighbors_skip_diagonal() {
        let mesh = meshgen::quad_grid(1, 1).unwrap();
        // loop [0, 1, 3, 2]: 3 is across the diagonal from 0
        assert_eq!(sorted(connected_points(&mesh, pid(0))), vec![pid(1), pid(2)]);
    }

    #[test]
    fn two_point_face_contributes_once() {
        let mut mesh = InMemoryMesh::new();
        mesh.add_point(pid(0), [0.0; 3]);
        mesh.add_point(pid(1), [1.0, 0.0, 0.0]);
        mesh.add_face(FaceId::new(0), [pid(0), pid(1)]).unwrap();
        assert_eq!(connected_points(&mesh, pid(0)), vec![pid(1)]);
        assert_eq!(connected_points(&mesh, pid(1)), vec![pid(0)]);
    }

    #[test]
    fn isolated_or_unknown_point_has_no_neighbors() {
        let mut mesh = meshgen::single_triangle().unwrap();
        mesh.add_point(pid(8), [5.0, 5.0, 5.0]);
        assert!(connected_points(&mesh, pid(8)).is_empty());
        assert!(connected_points(&mesh, pid(99)).is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let mesh = meshgen::torus(5, 4, 2.0, 0.5).unwrap();
        for p in mesh.points_sorted() {
            assert_eq!(connected_points(&mesh, p), connected_points(&mesh, p));
        }
    }
}
