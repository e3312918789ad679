//! Ordered one-ring walk around a mesh point.
//!
//! The walk only needs the unordered list of faces incident to the point and
//! each face's ordered vertex loop. It stitches faces together through the
//! vertex they share with the previous face:
//!
//! 1. Start with the point itself as the *anchor*.
//! 2. Take the first not-yet-visited incident face (in incidence-list order)
//!    whose loop contains the anchor, and mark it visited.
//! 3. Walk that loop away from the anchor, in whichever direction does not
//!    step straight onto the point, appending vertices until the point comes
//!    around again.
//! 4. The last appended vertex is the new anchor; repeat until no face
//!    matches.
//!
//! A ring whose first and last entries coincide is closed (interior vertex).
//! Otherwise the point lies on a boundary, or the walk ran out of faces.
//!
//! # Non-manifold points
//! When the faces around a point form several disjoint fans, the default walk
//! returns only the fan it entered first and leaves the other faces
//! unvisited. Use [`OneRingOpts::continue_past_gaps`] to append the remaining
//! fans to the same sequence, or [`one_ring_fans`] to get them separately.
//!
//! The incidence order matters for boundary points as well: the walk only
//! moves in one rotational direction, so if the first incident face is not
//! at the start of an open fan, the walk hits the boundary early and covers
//! only part of the fan.

use serde::{Deserialize, Serialize};

use crate::algs::array::index_of;
use crate::topology::incidence::IncidenceQuery;
use crate::topology::point::{FaceId, PointId};

/// Options for [`one_ring_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneRingOpts {
    /// Restart from the center point when the current fan cannot be extended
    /// and append the next fan, until every incident face has been visited.
    pub continue_past_gaps: bool,
}

/// Ordered neighbor sequence produced by the one-ring walk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OneRing(Vec<PointId>);

impl OneRing {
    #[inline]
    pub fn as_slice(&self) -> &[PointId] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<PointId> {
        self.0.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<PointId> {
        self.0.last().copied()
    }

    /// Non-empty with equal first and last entries.
    pub fn is_closed(&self) -> bool {
        self.0.len() > 1 && self.0.first() == self.0.last()
    }

    /// Non-empty and not closed.
    pub fn is_open(&self) -> bool {
        !self.0.is_empty() && !self.is_closed()
    }

    /// The sequence without the repeated closing entry of a closed ring.
    pub fn distinct_points(&self) -> &[PointId] {
        if self.is_closed() {
            &self.0[..self.0.len() - 1]
        } else {
            &self.0
        }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PointId> {
        self.0.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<PointId> {
        self.0
    }
}

impl From<Vec<PointId>> for OneRing {
    fn from(v: Vec<PointId>) -> Self {
        OneRing(v)
    }
}

impl AsRef<[PointId]> for OneRing {
    fn as_ref(&self) -> &[PointId] {
        &self.0
    }
}

impl IntoIterator for OneRing {
    type Item = PointId;
    type IntoIter = std::vec::IntoIter<PointId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OneRing {
    type Item = &'a PointId;
    type IntoIter = std::slice::Iter<'a, PointId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Ordered one-ring of `point` with default options.
///
/// # Example
/// ```
/// use mesh_onering::algs::meshgen;
/// use mesh_onering::algs::one_ring::one_ring;
/// use mesh_onering::topology::point::PointId;
/// let mesh = meshgen::single_triangle()?;
/// let ring = one_ring(&mesh, PointId::new(0));
/// assert_eq!(ring.as_slice(), &[PointId::new(1), PointId::new(2)]);
/// assert!(ring.is_open());
/// # Ok::<(), mesh_onering::mesh_error::MeshError>(())
/// ```
pub fn one_ring<M>(mesh: &M, point: PointId) -> OneRing
where
    M: IncidenceQuery + ?Sized,
{
    one_ring_with(mesh, point, OneRingOpts::default())
}

/// Ordered one-ring of `point`.
pub fn one_ring_with<M>(mesh: &M, point: PointId, opts: OneRingOpts) -> OneRing
where
    M: IncidenceQuery + ?Sized,
{
    let mut walk = FanWalk::new(mesh, point);
    let mut ring = Vec::new();
    walk.extend_fan(&mut ring);
    if opts.continue_past_gaps {
        while walk.unvisited() > 0 && walk.extend_fan(&mut ring) {}
    }
    let left = walk.unvisited();
    if left > 0 {
        log::debug!(
            "one_ring({point}): stopped with {left} of {} incident faces unvisited",
            walk.faces.len()
        );
    }
    let ring = OneRing(ring);
    log::trace!(
        "one_ring({point}): {} entries, closed = {}",
        ring.len(),
        ring.is_closed()
    );
    ring
}

/// Splits the faces around `point` into separate fans.
///
/// Each fan is walked like [`one_ring`]. Open chains whose end meets the
/// start of another chain are joined afterwards, so a boundary fan entered in
/// the middle still comes back as one ring. A manifold point yields a single
/// fan; a non-manifold point yields one per disjoint fan.
pub fn one_ring_fans<M>(mesh: &M, point: PointId) -> Vec<OneRing>
where
    M: IncidenceQuery + ?Sized,
{
    let mut walk = FanWalk::new(mesh, point);
    let mut chains: Vec<Vec<PointId>> = Vec::new();
    loop {
        let mut chain = Vec::new();
        if !walk.extend_fan(&mut chain) {
            break;
        }
        if !chain.is_empty() {
            chains.push(chain);
        }
    }
    join_open_chains(&mut chains);
    log::debug!("one_ring_fans({point}): {} fan(s)", chains.len());
    chains.into_iter().map(OneRing).collect()
}

fn is_closed_chain(chain: &[PointId]) -> bool {
    chain.len() > 1 && chain.first() == chain.last()
}

fn join_open_chains(chains: &mut Vec<Vec<PointId>>) {
    'outer: loop {
        for i in 0..chains.len() {
            if is_closed_chain(&chains[i]) {
                continue;
            }
            for j in 0..chains.len() {
                if i == j || is_closed_chain(&chains[j]) {
                    continue;
                }
                if chains[i].last() == chains[j].first() {
                    let tail = chains.remove(j);
                    let i = if j < i { i - 1 } else { i };
                    chains[i].extend_from_slice(&tail[1..]);
                    continue 'outer;
                }
            }
        }
        break;
    }
}

/// Call-scoped walk state: the incident faces of one point and a visited
/// flag for each of them.
struct FanWalk<'m, M: ?Sized> {
    mesh: &'m M,
    point: PointId,
    faces: &'m [FaceId],
    visited: Vec<bool>,
}

impl<'m, M> FanWalk<'m, M>
where
    M: IncidenceQuery + ?Sized,
{
    fn new(mesh: &'m M, point: PointId) -> Self {
        let faces = mesh.incident_faces(point);
        Self {
            mesh,
            point,
            faces,
            visited: vec![false; faces.len()],
        }
    }

    fn unvisited(&self) -> usize {
        self.visited.iter().filter(|v| !**v).count()
    }

    /// First unvisited face containing `anchor`; marks it visited and
    /// returns its loop together with the anchor's position in it.
    fn claim(&mut self, anchor: PointId) -> Option<(FaceId, &'m [PointId], usize)> {
        let (mesh, faces) = (self.mesh, self.faces);
        for (i, &face) in faces.iter().enumerate() {
            if self.visited[i] {
                continue;
            }
            let pts = mesh.face_loop(face);
            if let Some(start) = index_of(pts, &anchor) {
                self.visited[i] = true;
                return Some((face, pts, start));
            }
        }
        None
    }

    /// Walks one fan starting at the center point and appends its vertices
    /// to `out`. Returns `false` if no face could be claimed.
    fn extend_fan(&mut self, out: &mut Vec<PointId>) -> bool {
        let mut anchor = self.point;
        let mut consumed = false;
        while let Some((face, pts, start)) = self.claim(anchor) {
            consumed = true;
            let n = pts.len();
            let backward = pts[(start + 1) % n] == self.point;
            log::trace!(
                "one_ring({}): face {face} from anchor {anchor}, {}",
                self.point,
                if backward { "backward" } else { "forward" }
            );
            for i in 1..n {
                let k = if backward {
                    (start + n - i) % n
                } else {
                    (start + i) % n
                };
                let p = pts[k];
                if p == self.point {
                    break;
                }
                out.push(p);
                anchor = p;
            }
        }
        consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::meshgen;
    use crate::algs::neighbors::connected_points;
    use crate::topology::in_memory::InMemoryMesh;

    fn pid(raw: u64) -> PointId {
        PointId::new(raw)
    }

    fn pids(raw: &[u64]) -> Vec<PointId> {
        raw.iter().copied().map(PointId::new).collect()
    }

    #[test]
    fn single_triangle_is_open() {
        let mesh = meshgen::single_triangle().unwrap();
        let ring = one_ring(&mesh, pid(0));
        assert_eq!(ring.as_slice(), pids(&[1, 2]).as_slice());
        assert!(ring.is_open());
        assert!(!ring.is_closed());
    }

    #[test]
    fn octahedron_rings_close() {
        let mesh = meshgen::octahedron().unwrap();
        for p in mesh.points_sorted() {
            let ring = one_ring(&mesh, p);
            assert!(ring.is_closed(), "{p}: {ring:?}");
            assert_eq!(ring.len(), 5);
            let mut distinct = ring.distinct_points().to_vec();
            let mut neigh = connected_points(&mesh, p);
            distinct.sort_unstable();
            neigh.sort_unstable();
            assert_eq!(distinct, neigh);
        }
    }

    #[test]
    fn apex_walk_order() {
        let mesh = meshgen::octahedron().unwrap();
        // faces around +z in incidence order: (0,2,4) (2,1,4) (1,3,4) (3,0,4)
        let ring = one_ring(&mesh, pid(4));
        assert_eq!(ring.into_vec(), pids(&[0, 2, 1, 3, 0]));
    }

    #[test]
    fn mixed_winding_walks_backward() {
        // fan around 0; the second face is wound the other way
        let mesh = InMemoryMesh::from_polygons(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [-1.0, 0.0, 0.0],
            ],
            &[vec![0, 1, 2], vec![0, 3, 2]],
        )
        .unwrap();
        let ring = one_ring(&mesh, pid(0));
        assert_eq!(ring.into_vec(), pids(&[1, 2, 3]));
    }

    #[test]
    fn quad_fan_includes_far_corners() {
        let mesh = meshgen::quad_grid(2, 2).unwrap();
        // center point 4 of a 3x3 vertex grid, four quads around it
        let ring = one_ring(&mesh, pid(4));
        assert!(ring.is_closed(), "{ring:?}");
        assert_eq!(ring.len(), 9);
        assert_eq!(connected_points(&mesh, pid(4)).len(), 4);
    }

    #[test]
    fn bowtie_default_keeps_first_fan() {
        let mesh = meshgen::bowtie().unwrap();
        assert_eq!(one_ring(&mesh, pid(0)).into_vec(), pids(&[1, 2]));
    }

    #[test]
    fn bowtie_continue_past_gaps() {
        let mesh = meshgen::bowtie().unwrap();
        let opts = OneRingOpts {
            continue_past_gaps: true,
        };
        assert_eq!(
            one_ring_with(&mesh, pid(0), opts).into_vec(),
            pids(&[1, 2, 3, 4])
        );
    }

    #[test]
    fn bowtie_fans() {
        let mesh = meshgen::bowtie().unwrap();
        let fans = one_ring_fans(&mesh, pid(0));
        assert_eq!(fans.len(), 2);
        assert_eq!(fans[0].as_slice(), pids(&[1, 2]).as_slice());
        assert_eq!(fans[1].as_slice(), pids(&[3, 4]).as_slice());
    }

    #[test]
    fn fans_rejoin_boundary_entered_midway() {
        let mesh = meshgen::quad_grid(2, 1).unwrap();
        // point 1 sits on the bottom edge between quads 0 and 1; walking
        // quad 0 first runs into the boundary before reaching quad 1
        let partial = one_ring(&mesh, pid(1));
        assert_eq!(partial.as_slice(), pids(&[4, 3, 0]).as_slice());
        let fans = one_ring_fans(&mesh, pid(1));
        assert_eq!(fans.len(), 1);
        assert_eq!(fans[0].as_slice(), pids(&[2, 5, 4, 3, 0]).as_slice());
    }

    #[test]
    fn isolated_point_has_empty_ring() {
        let mut mesh = meshgen::single_triangle().unwrap();
        mesh.add_point(pid(7), [3.0, 3.0, 3.0]);
        let ring = one_ring(&mesh, pid(7));
        assert!(ring.is_empty());
        assert!(!ring.is_open() && !ring.is_closed());
        assert!(one_ring_fans(&mesh, pid(7)).is_empty());
    }

    #[test]
    fn ring_helpers() {
        let closed = OneRing::from(pids(&[1, 2, 3, 1]));
        assert_eq!(closed.distinct_points(), pids(&[1, 2, 3]).as_slice());
        assert_eq!(closed.first(), Some(pid(1)));
        assert_eq!(closed.last(), Some(pid(1)));
        let single = OneRing::from(pids(&[5]));
        assert!(single.is_open());
        assert_eq!(single.distinct_points(), pids(&[5]).as_slice());
        let collected: Vec<PointId> = closed.iter().copied().collect();
        assert_eq!(collected, closed.clone().into_vec());
        assert_eq!((&closed).into_iter().count(), 4);
    }

    #[test]
    fn opts_serde() {
        let opts: OneRingOpts = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, OneRingOpts::default());
        let json = serde_json::to_string(&OneRingOpts {
            continue_past_gaps: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"continue_past_gaps":true}"#);
    }
}
