use crate::model::{EdgeId, VertexId};
use crate::Graph;

/// Outcome of advancing one edge along a curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// `vertex` is regular; `edge` is its other incident edge.
    Continue { edge: EdgeId, vertex: VertexId },
    /// `vertex` does not have valence 2; the walk ends there.
    Stop { vertex: VertexId },
    /// The edge no longer exists.
    Invalid,
}

/// Cross `eid`, entered from `prev`, and report how the walk continues
/// from the far endpoint.
pub fn step(g: &Graph, eid: EdgeId, prev: VertexId) -> Step {
    let next = match g.edge(eid) {
        Some(e) => e.other(prev),
        None => return Step::Invalid,
    };
    let incident = g.incident_edges(next);
    if incident.len() != 2 {
        return Step::Stop { vertex: next };
    }
    match incident.iter().copied().find(|&e| e != eid) {
        Some(edge) => Step::Continue { edge, vertex: next },
        None => Step::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_regular_and_stops_at_ends() {
        let mut g = Graph::new();
        let a = g.add_node(0.0, 0.0).unwrap();
        let b = g.add_node(1.0, 0.0).unwrap();
        let c = g.add_node(2.0, 0.0).unwrap();
        let e0 = g.add_edge(a, b).unwrap();
        let e1 = g.add_edge(b, c).unwrap();

        assert_eq!(step(&g, e0, a), Step::Continue { edge: e1, vertex: b });
        assert_eq!(step(&g, e1, b), Step::Stop { vertex: c });
        assert_eq!(step(&g, e0, b), Step::Stop { vertex: a });

        g.remove_edge(e1, false);
        assert_eq!(step(&g, e1, b), Step::Invalid);
    }

    #[test]
    fn stops_on_junction() {
        let mut g = Graph::new();
        let a = g.add_node(0.0, 0.0).unwrap();
        let j = g.add_node(1.0, 0.0).unwrap();
        let e = g.add_edge(a, j).unwrap();
        for i in 0..2 {
            let n = g.add_node(2.0, i as f32).unwrap();
            g.add_edge(j, n).unwrap();
        }
        assert_eq!(step(&g, e, a), Step::Stop { vertex: j });
    }
}
