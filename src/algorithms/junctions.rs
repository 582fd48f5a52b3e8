use tracing::{debug, info};

use crate::algorithms::valence::classify;
use crate::config::JunctionOptions;
use crate::error::Result;
use crate::geometry::tolerance::EPS_ANG;
use crate::model::VertexId;
use crate::Graph;

/// Pair of neighbors whose edges leave `v` in the most opposite directions.
///
/// `nbrs` is scanned in order over `(i, j)` with `i < j`; a later pair only
/// wins if its angle is larger by more than `EPS_ANG`, so ties go to the
/// first pair. Returns `None` with fewer than two neighbors.
pub fn straightest_pair(
    g: &Graph,
    v: VertexId,
    nbrs: &[VertexId],
) -> Option<(VertexId, VertexId)> {
    let center = g.position(v)?;
    let dirs: Vec<_> = nbrs
        .iter()
        .map(|&n| (g.position(n).unwrap_or(center) - center).normalized())
        .collect();
    let mut best: Option<((VertexId, VertexId), f32)> = None;
    for i in 0..nbrs.len() {
        for j in (i + 1)..nbrs.len() {
            let angle = dirs[i].angle_to(dirs[j]);
            match best {
                Some((_, max)) if angle <= max + EPS_ANG => {}
                _ => best = Some(((nbrs[i], nbrs[j]), angle)),
            }
        }
    }
    best.map(|(pair, _)| pair)
}

/// Reduce every junction (valence ≥ 3) to valence 2.
///
/// At each junction the straightest pair of incident edges stays connected.
/// Every other edge `(v, k)` is removed (with `prune_isolated`, `k` goes too
/// if that leaves it without edges); a surviving `k` gets a new stub vertex
/// at `lerp(k, v, stub_fraction)` and an edge to it. Ids of removed edges are
/// not reused. Returns the number of junctions processed.
///
/// Invalid options are rejected with `GraphError::OutOfRange` before the
/// graph is touched.
pub fn resolve_junctions(g: &mut Graph, opts: &JunctionOptions) -> Result<usize> {
    opts.validate()?;
    let junctions: Vec<VertexId> = classify(g).junction.into_iter().collect();

    let mut stubs = 0usize;
    for &v in &junctions {
        let center = match g.position(v) {
            Some(p) => p,
            None => continue,
        };
        let mut nbrs: Vec<VertexId> = g.neighbors(v).collect();
        nbrs.sort_unstable();
        let keep = straightest_pair(g, v, &nbrs);

        for &k in &nbrs {
            if keep.map_or(false, |(a, b)| k == a || k == b) {
                continue;
            }
            let eid = match g.find_edge(v, k) {
                Some(e) => e,
                None => continue,
            };
            g.remove_edge(eid, opts.prune_isolated);
            if let Some(pk) = g.position(k) {
                // Both ends are in bounds and the fraction is in [0, 1].
                if let Some(stub) = g.add_vertex(pk.lerp(center, opts.stub_fraction)) {
                    g.add_edge(k, stub);
                    stubs += 1;
                }
            }
        }
        debug!(
            vertex = v,
            kept = ?keep,
            rerouted = nbrs.len().saturating_sub(2),
            "resolved junction"
        );
    }

    if !junctions.is_empty() {
        info!(junctions = junctions.len(), stubs, "disconnected junctions");
    }
    Ok(junctions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::geometry::tolerance::approx_eq;

    #[test]
    fn t_junction_keeps_straight_bar() {
        let mut g = Graph::new();
        let c = g.add_node(0.0, 0.0).unwrap();
        let w = g.add_node(-1.0, 0.0).unwrap();
        let e = g.add_node(1.0, 0.0).unwrap();
        let s = g.add_node(0.0, -2.0).unwrap();
        let stem_end = g.add_node(0.0, -3.0).unwrap();
        g.add_edge(c, s).unwrap();
        g.add_edge(c, w).unwrap();
        g.add_edge(c, e).unwrap();
        g.add_edge(s, stem_end).unwrap();

        assert_eq!(straightest_pair(&g, c, &[w, e, s]), Some((w, e)));
        assert_eq!(resolve_junctions(&mut g, &JunctionOptions::default()).unwrap(), 1);

        assert_eq!(g.valence(c), 2);
        assert!(g.find_edge(c, w).is_some() && g.find_edge(c, e).is_some());
        assert_eq!(g.find_edge(c, s), None);
        // s keeps its tail and gains a stub pointing back at c.
        assert_eq!(g.valence(s), 2);
        let stub = g.neighbors(s).find(|&n| n != stem_end).unwrap();
        let p = g.position(stub).unwrap();
        assert!(approx_eq(p.x, 0.0, 1e-6));
        assert!(approx_eq(p.y, -0.02, 1e-5));
    }

    #[test]
    fn dangling_arm_is_pruned_when_asked() {
        let mut g = Graph::new();
        let c = g.add_node(0.0, 0.0).unwrap();
        let w = g.add_node(-1.0, 0.0).unwrap();
        let e = g.add_node(1.0, 0.0).unwrap();
        let n = g.add_node(0.0, 1.0).unwrap();
        for k in [w, e, n] {
            g.add_edge(c, k).unwrap();
        }
        let opts = JunctionOptions {
            prune_isolated: true,
            ..JunctionOptions::default()
        };
        resolve_junctions(&mut g, &opts).unwrap();
        assert!(!g.is_node(n));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn stub_fraction_is_configurable() {
        let mut g = Graph::new();
        let c = g.add_node(0.0, 0.0).unwrap();
        let arms = [(-1.0, 0.0), (1.0, 0.0), (0.0, 4.0)].map(|(x, y)| g.add_node(x, y).unwrap());
        for k in arms {
            g.add_edge(c, k).unwrap();
        }
        let tail = g.add_node(0.0, 5.0).unwrap();
        g.add_edge(arms[2], tail).unwrap();

        let opts = JunctionOptions {
            stub_fraction: 0.5,
            ..JunctionOptions::default()
        };
        resolve_junctions(&mut g, &opts).unwrap();
        let stub = g.neighbors(arms[2]).find(|&n| n != tail).unwrap();
        assert_eq!(g.position(stub), Some(crate::Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn collinear_neighbors_keep_first_pair() {
        let mut g = Graph::new();
        let c = g.add_node(0.0, 0.0).unwrap();
        let a = g.add_node(1.0, 0.0).unwrap();
        let b = g.add_node(2.0, 0.0).unwrap();
        let d = g.add_node(3.0, 0.0).unwrap();
        assert_eq!(straightest_pair(&g, c, &[a, b, d]), Some((a, b)));
        assert_eq!(straightest_pair(&g, c, &[a]), None);
    }

    #[test]
    fn no_junctions_is_a_noop() {
        let mut g = Graph::new();
        let a = g.add_node(0.0, 0.0).unwrap();
        let b = g.add_node(1.0, 0.0).unwrap();
        g.add_edge(a, b).unwrap();
        assert_eq!(resolve_junctions(&mut g, &JunctionOptions::default()).unwrap(), 0);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn bad_stub_fraction_leaves_graph_untouched() {
        let mut g = Graph::new();
        let c = g.add_node(0.0, 0.0).unwrap();
        for (x, y) in [(-1.0, 0.0), (1.0, 0.0), (0.0, 1.0)] {
            let k = g.add_node(x, y).unwrap();
            g.add_edge(c, k).unwrap();
        }
        for stub_fraction in [f32::NAN, -0.5, 1.5] {
            let opts = JunctionOptions {
                stub_fraction,
                ..JunctionOptions::default()
            };
            assert!(matches!(
                resolve_junctions(&mut g, &opts),
                Err(GraphError::OutOfRange { param: "stub_fraction", .. })
            ));
            assert_eq!(g.node_count(), 4);
            assert_eq!(g.edge_count(), 3);
            assert_eq!(g.valence(c), 3);
        }
    }
}
