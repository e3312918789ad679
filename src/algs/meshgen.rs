//! Small canonical meshes for tests, benches and examples.
//!
//! All generators use dense ids (`0..n` for points and faces) and
//! counter-clockwise winding seen from outside the surface (or from `+z` for
//! the planar ones).

use std::f64::consts::TAU;

use crate::mesh_error::MeshError;
use crate::topology::in_memory::InMemoryMesh;

type MeshGenResult = Result<InMemoryMesh, MeshError>;

/// One triangle `{0, 1, 2}` in the `z = 0` plane.
pub fn single_triangle() -> MeshGenResult {
    InMemoryMesh::from_polygons(
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        &[vec![0, 1, 2]],
    )
}

/// Open planar grid of `nx * ny` unit quads.
///
/// Point `(i, j)` has id `j * (nx + 1) + i` and sits at `(i, j, 0)`; quad
/// `(i, j)` has id `j * nx + i`.
pub fn quad_grid(nx: usize, ny: usize) -> MeshGenResult {
    if nx == 0 || ny == 0 {
        return Err(MeshError::invalid_geometry(format!(
            "quad grid needs at least one cell per axis, got {nx}x{ny}"
        )));
    }
    let vid = |i: usize, j: usize| j * (nx + 1) + i;
    let mut positions = Vec::with_capacity((nx + 1) * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            positions.push([i as f64, j as f64, 0.0]);
        }
    }
    let mut quads = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            quads.push(vec![vid(i, j), vid(i + 1, j), vid(i + 1, j + 1), vid(i, j + 1)]);
        }
    }
    InMemoryMesh::from_polygons(&positions, &quads)
}

/// Closed octahedron with unit-axis corners.
///
/// Points: `0 = +x`, `1 = -x`, `2 = +y`, `3 = -y`, `4 = +z`, `5 = -z`.
/// Faces `0..4` touch `+z`, faces `4..8` touch `-z`.
pub fn octahedron() -> MeshGenResult {
    InMemoryMesh::from_polygons(
        &[
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ],
        &[
            vec![0, 2, 4],
            vec![2, 1, 4],
            vec![1, 3, 4],
            vec![3, 0, 4],
            vec![2, 0, 5],
            vec![1, 2, 5],
            vec![3, 1, 5],
            vec![0, 3, 5],
        ],
    )
}

/// Closed triangulated torus around the `z` axis.
///
/// `n_major` segments run around the axis and `n_minor` around the tube;
/// each grid quad is split into two triangles, so every point has six
/// neighbors. Both counts must be at least 3.
pub fn torus(n_major: usize, n_minor: usize, r_major: f64, r_minor: f64) -> MeshGenResult {
    if n_major < 3 || n_minor < 3 {
        return Err(MeshError::invalid_geometry(format!(
            "torus needs at least 3 segments per direction, got {n_major}x{n_minor}"
        )));
    }
    if !(r_major > r_minor && r_minor > 0.0) {
        return Err(MeshError::invalid_geometry(format!(
            "torus radii must satisfy r_major > r_minor > 0, got {r_major} and {r_minor}"
        )));
    }
    let vid = |i: usize, j: usize| (i % n_major) * n_minor + (j % n_minor);
    let mut positions = Vec::with_capacity(n_major * n_minor);
    for i in 0..n_major {
        let theta = TAU * i as f64 / n_major as f64;
        for j in 0..n_minor {
            let phi = TAU * j as f64 / n_minor as f64;
            let ring = r_major + r_minor * phi.cos();
            positions.push([ring * theta.cos(), ring * theta.sin(), r_minor * phi.sin()]);
        }
    }
    let mut tris = Vec::with_capacity(2 * n_major * n_minor);
    for i in 0..n_major {
        for j in 0..n_minor {
            let (a, b, c, d) = (vid(i, j), vid(i + 1, j), vid(i + 1, j + 1), vid(i, j + 1));
            tris.push(vec![a, b, c]);
            tris.push(vec![a, c, d]);
        }
    }
    InMemoryMesh::from_polygons(&positions, &tris)
}

/// Two triangles that share only point `0`: faces `{0, 1, 2}` and
/// `{0, 3, 4}`. Point `0` is non-manifold.
pub fn bowtie() -> MeshGenResult {
    InMemoryMesh::from_polygons(
        &[
            [0.0, 0.0, 0.0],
            [1.0, -0.5, 0.0],
            [1.0, 0.5, 0.0],
            [-1.0, 0.5, 0.0],
            [-1.0, -0.5, 0.0],
        ],
        &[vec![0, 1, 2], vec![0, 3, 4]],
    )
}
