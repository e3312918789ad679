//! Parallel batch versions of the neighbor queries (feature `rayon`).
//!
//! Every query is a pure read of the mesh, so points can be processed
//! independently. Output order matches input order.

use rayon::prelude::*;

use crate::algs::neighbors::connected_points;
use crate::algs::one_ring::{OneRing, OneRingOpts, one_ring_with};
use crate::topology::incidence::IncidenceQuery;
use crate::topology::point::PointId;

/// One-ring of every point in `points`.
pub fn par_one_rings<M>(mesh: &M, points: &[PointId], opts: OneRingOpts) -> Vec<(PointId, OneRing)>
where
    M: IncidenceQuery + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|&p| (p, one_ring_with(mesh, p, opts)))
        .collect()
}

/// Connected points of every point in `points`.
pub fn par_connected_points<M>(mesh: &M, points: &[PointId]) -> Vec<(PointId, Vec<PointId>)>
where
    M: IncidenceQuery + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|&p| (p, connected_points(mesh, p)))
        .collect()
}
