use std::collections::HashSet;
use tracing::debug;

use crate::algorithms::valence::{classify, VertexRoles};
use crate::algorithms::walk::{step, Step};
use crate::model::{Curves, EdgeId, Loop, Path, Vec2, VertexId};
use crate::Graph;

/// Position of a vertex reached through a live edge.
fn point(g: &Graph, v: VertexId) -> Vec2 {
    match g.position(v) {
        Some(p) => p,
        None => panic!("edge endpoint {v} is not a live vertex"),
    }
}

/// Split every edge of `g` into maximal open paths and closed loops.
///
/// Paths start at boundary vertices first, then at junctions (one path per
/// unused incident edge). Whatever remains must be cycles of regular
/// vertices. Isolated vertices appear in no curve.
///
/// # Panics
///
/// Panics if the final loop sweep reaches a vertex that is not regular, or
/// if a walk meets a removed edge or an edge whose endpoint is gone. Either
/// means the graph's edge and adjacency tables disagree.
pub fn extract_curves(g: &Graph) -> Curves {
    let roles = classify(g);
    let mut used: HashSet<EdgeId> = HashSet::with_capacity(g.edges.len());
    let mut out = Curves::default();

    for &start in &roles.boundary {
        let first = match g.incident_edges(start).first() {
            Some(&e) => e,
            None => continue,
        };
        // Already walked from the other end.
        if used.contains(&first) {
            continue;
        }
        out.paths.push(walk_path(g, &roles, &mut used, start, first));
    }

    for &start in &roles.junction {
        for &first in g.incident_edges(start) {
            if used.contains(&first) {
                continue;
            }
            out.paths.push(walk_path(g, &roles, &mut used, start, first));
        }
    }

    // Only cycles through regular vertices are left.
    for start in g.edge_ids() {
        if used.contains(&start) {
            continue;
        }
        out.loops.push(walk_loop(g, &roles, &mut used, start));
    }

    debug!(
        loops = out.loops.len(),
        paths = out.paths.len(),
        edges = used.len(),
        "extracted curves"
    );
    out
}

fn walk_path(
    g: &Graph,
    roles: &VertexRoles,
    used: &mut HashSet<EdgeId>,
    start: VertexId,
    first: EdgeId,
) -> Path {
    let mut path = Path::default();
    path.vertices.push(start);
    path.points.push(point(g, start));
    let mut vid = start;
    let mut eid = first;
    loop {
        used.insert(eid);
        path.edges.push(eid);
        match step(g, eid, vid) {
            Step::Continue { edge, vertex } => {
                path.vertices.push(vertex);
                path.points.push(point(g, vertex));
                if roles.is_terminal(vertex) {
                    break;
                }
                vid = vertex;
                eid = edge;
            }
            Step::Stop { vertex } => {
                path.vertices.push(vertex);
                path.points.push(point(g, vertex));
                break;
            }
            Step::Invalid => panic!("path walk reached removed edge {eid}"),
        }
    }
    path
}

fn walk_loop(
    g: &Graph,
    roles: &VertexRoles,
    used: &mut HashSet<EdgeId>,
    start: EdgeId,
) -> Loop {
    let mut lp = Loop::default();
    let mut vid = match g.edge(start) {
        Some(e) => e.a,
        None => return lp,
    };
    lp.vertices.push(vid);
    lp.points.push(point(g, vid));
    let mut eid = start;
    loop {
        used.insert(eid);
        lp.edges.push(eid);
        match step(g, eid, vid) {
            Step::Continue { edge, vertex } => {
                if roles.is_terminal(vertex) {
                    panic!("loop sweep reached terminal vertex {vertex} through edge {eid}");
                }
                if used.contains(&edge) {
                    debug_assert_eq!(Some(&vertex), lp.vertices.first());
                    break;
                }
                lp.vertices.push(vertex);
                lp.points.push(point(g, vertex));
                vid = vertex;
                eid = edge;
            }
            Step::Stop { vertex } => panic!(
                "loop sweep reached vertex {vertex} of valence {} through edge {eid}",
                g.valence(vertex)
            ),
            Step::Invalid => panic!("loop sweep reached removed edge {eid}"),
        }
    }
    lp
}
