use tracing::debug;

use crate::config::SmoothOptions;
use crate::error::Result;
use crate::geometry::tolerance::EPS_POS;
use crate::model::{Vec2, VertexId};
use crate::Graph;

/// Uniform Laplacian of a regular vertex: mean of its two neighbors minus
/// its own position. `None` unless `vid` has exactly two neighbors.
pub fn vertex_laplacian(g: &Graph, vid: VertexId) -> Option<Vec2> {
    let p = g.position(vid)?;
    let mut sum = Vec2::ZERO;
    let mut n = 0;
    for nbr in g.neighbors(vid) {
        sum += g.position(nbr)?;
        n += 1;
    }
    if n != 2 {
        return None;
    }
    Some(sum / 2.0 - p)
}

/// Move every regular vertex by `alpha` times its Laplacian, `rounds` times.
///
/// Offsets for a round are all computed before any vertex moves. Boundary,
/// junction and isolated vertices stay put. Returns the number of moves
/// larger than `EPS_POS`, or `GraphError::OutOfRange` for an invalid
/// `alpha` without moving anything.
pub fn smooth_regular_vertices(g: &mut Graph, opts: &SmoothOptions) -> Result<usize> {
    opts.validate()?;
    let mut moved = 0usize;
    for round in 0..opts.rounds {
        let view: &Graph = g;
        let offsets: Vec<(VertexId, Vec2)> = view
            .vertex_ids()
            .filter_map(|v| vertex_laplacian(view, v).map(|d| (v, d * opts.alpha)))
            .collect();
        let mut moved_this_round = 0usize;
        for (v, d) in offsets {
            if d.length() <= EPS_POS {
                continue;
            }
            if let Some(p) = g.position(v) {
                let q = p + d;
                if g.move_node(v, q.x, q.y) {
                    moved_this_round += 1;
                }
            }
        }
        debug!(round, moved = moved_this_round, "smoothing round");
        moved += moved_this_round;
        if moved_this_round == 0 {
            break;
        }
    }
    Ok(moved)
}
