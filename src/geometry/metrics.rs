//! Area metrics and small vector helpers.
//!
//! Positions and normals are plain `[f64; 3]` arrays. None of the functions
//! here fail: degenerate input (coincident or collinear corners) produces a
//! zero, or for [`triangle_area`] possibly a NaN, which the caller can test
//! with `f64::is_nan`.

use itertools::Itertools;

use crate::topology::incidence::IncidenceQuery;
use crate::topology::point::PointId;

/// Area of the triangle `a`, `b`, `c` by Heron's formula.
///
/// Collinear corners give `0.0`, or a NaN when rounding pushes the product
/// under the square root slightly below zero.
///
/// ```
/// use mesh_onering::geometry::metrics::triangle_area;
/// let area = triangle_area([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
/// assert!((area - 0.5).abs() < 1e-12);
/// ```
pub fn triangle_area(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    let ab = distance(a, b);
    let bc = distance(b, c);
    let ca = distance(c, a);
    let s = 0.5 * (ab + bc + ca);
    (s * (s - ab) * (s - bc) * (s - ca)).sqrt()
}

/// Sum of the areas of the faces around `point`.
///
/// Each face is approximated by the triangle of its first three loop
/// vertices, so quads and larger polygons are under-counted. Faces with fewer
/// than three vertices add nothing.
pub fn local_one_ring_area<M>(mesh: &M, point: PointId) -> f64
where
    M: IncidenceQuery + ?Sized,
{
    mesh.incident_faces(point)
        .iter()
        .filter_map(|&face| match mesh.face_loop(face) {
            [a, b, c, ..] => Some(triangle_area(
                mesh.point_position(*a),
                mesh.point_position(*b),
                mesh.point_position(*c),
            )),
            _ => None,
        })
        .sum()
}

/// Cartesian coordinates of a point given in spherical coordinates.
///
/// `lon` and `lat` are in radians; latitude `0` is the equator and the pole
/// lies on `+y`.
pub fn spherical_to_cartesian(lon: f64, lat: f64, rad: f64) -> [f64; 3] {
    scale(
        [-lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin()],
        rad,
    )
}

/// Unit normal of a polygon with corners `corners`, sampled at `(u, v)`.
///
/// Quads are treated as bilinear patches over `[0, 1]^2` with
/// `P(u, v) = (1-u)(1-v) p0 + u(1-v) p1 + uv p2 + (1-u)v p3`, and the normal
/// is `dP/du x dP/dv`. Every other polygon is planar-fitted with Newell's
/// method and `(u, v)` is ignored. A degenerate polygon gives `[0.0; 3]`.
pub fn polygon_normal(corners: &[[f64; 3]], u: f64, v: f64) -> [f64; 3] {
    let n = match corners {
        [p0, p1, p2, p3] => {
            let du = add(scale(sub(*p1, *p0), 1.0 - v), scale(sub(*p2, *p3), v));
            let dv = add(scale(sub(*p3, *p0), 1.0 - u), scale(sub(*p2, *p1), u));
            cross(du, dv)
        }
        _ => newell(corners),
    };
    normalize_or_zero(n)
}

fn newell(corners: &[[f64; 3]]) -> [f64; 3] {
    if corners.len() < 3 {
        return [0.0; 3];
    }
    corners
        .iter()
        .circular_tuple_windows()
        .fold([0.0; 3], |acc, (a, b)| {
            add(
                acc,
                [
                    (a[1] - b[1]) * (a[2] + b[2]),
                    (a[2] - b[2]) * (a[0] + b[0]),
                    (a[0] - b[0]) * (a[1] + b[1]),
                ],
            )
        })
}

const EPS: f64 = 1e-12;

/// `a / |a|`, or the zero vector when `|a|` is (nearly) zero.
pub fn normalize_or_zero(a: [f64; 3]) -> [f64; 3] {
    let len = norm(a);
    if len <= EPS {
        return [0.0; 3];
    }
    scale(a, 1.0 / len)
}

#[inline]
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    norm(sub(a, b))
}
