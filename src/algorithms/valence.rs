use std::collections::BTreeSet;

use crate::model::{Valence, VertexId};
use crate::Graph;

/// Boundary (valence 1) and junction (valence ≥ 3) vertices of a graph.
///
/// Regular and isolated vertices are in neither set. The classification is
/// a snapshot: any mutation of the graph invalidates it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexRoles {
    pub boundary: BTreeSet<VertexId>,
    pub junction: BTreeSet<VertexId>,
}

impl VertexRoles {
    /// True if a walk must end on `v`.
    #[inline]
    pub fn is_terminal(&self, v: VertexId) -> bool {
        self.boundary.contains(&v) || self.junction.contains(&v)
    }
}

pub fn valence_of(g: &Graph, v: VertexId) -> Valence {
    Valence::from_count(g.valence(v))
}

pub fn classify(g: &Graph) -> VertexRoles {
    let mut roles = VertexRoles::default();
    for v in g.vertex_ids() {
        match valence_of(g, v) {
            Valence::Boundary => {
                roles.boundary.insert(v);
            }
            Valence::Junction => {
                roles.junction.insert(v);
            }
            Valence::Isolated | Valence::Regular => {}
        }
    }
    roles
}
