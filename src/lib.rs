//! Decomposition of embedded planar graphs into simple curves.
//!
//! A [`Graph`] stores 2D vertices and undirected edges addressed by small
//! integer ids. The algorithms in [`algorithms`] classify vertices by
//! valence, split the edge set into open paths and closed loops, and
//! resolve junctions (valence ≥ 3) so the graph becomes a disjoint union of
//! simple curves.
//!
//! ```
//! use curvenet::{decompose, DecomposeOptions, Graph};
//!
//! let mut g = Graph::new();
//! let a = g.add_node(0.0, 0.0).unwrap();
//! let b = g.add_node(1.0, 0.0).unwrap();
//! let c = g.add_node(0.0, 1.0).unwrap();
//! g.add_edge(a, b).unwrap();
//! g.add_edge(b, c).unwrap();
//! g.add_edge(c, a).unwrap();
//!
//! let curves = decompose(&mut g, &DecomposeOptions::default()).unwrap();
//! assert_eq!(curves.loops.len(), 1);
//! assert!(curves.paths.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod curves;
    pub mod junctions;
    pub mod smoothing;
    pub mod valence;
    pub mod walk;
}
mod json;

pub use algorithms::curves::extract_curves;
pub use algorithms::junctions::resolve_junctions;
pub use algorithms::smoothing::{smooth_regular_vertices, vertex_laplacian};
pub use algorithms::valence::{classify, VertexRoles};
pub use algorithms::walk::{step, Step};
pub use config::{DecomposeOptions, JunctionOptions, SmoothOptions};
pub use error::{GraphError, Result};
pub use model::{Curves, EdgeId, Loop, Path, Valence, Vec2, VertexId};

use geometry::limits;
use model::{Edge, Node};

#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Option<Node>>,   // id is index
    pub(crate) edges: Vec<Option<Edge>>,   // id is index
    pub(crate) adj: Vec<Vec<EdgeId>>,      // node id -> incident edge ids
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            adj: Vec::new(),
        }
    }

    // Nodes
    /// Appends a vertex. `None` if either coordinate is non-finite or
    /// outside `limits::COORD_MIN..=COORD_MAX`, the same bounds a loaded
    /// document must respect.
    pub fn add_node(&mut self, x: f32, y: f32) -> Option<VertexId> {
        if !limits::in_coord_bounds(x) || !limits::in_coord_bounds(y) {
            return None;
        }
        let id = self.nodes.len() as VertexId;
        self.nodes.push(Some(Node { x, y }));
        self.adj.push(Vec::new());
        Some(id)
    }
    pub fn add_vertex(&mut self, p: Vec2) -> Option<VertexId> {
        self.add_node(p.x, p.y)
    }
    pub fn move_node(&mut self, id: VertexId, x: f32, y: f32) -> bool {
        if !limits::in_coord_bounds(x) || !limits::in_coord_bounds(y) {
            return false;
        }
        match self.nodes.get_mut(id as usize) {
            Some(Some(n)) => {
                n.x = x;
                n.y = y;
                true
            }
            _ => false,
        }
    }
    pub fn get_node(&self, id: VertexId) -> Option<(f32, f32)> {
        self.nodes
            .get(id as usize)
            .and_then(|n| *n)
            .map(|n| (n.x, n.y))
    }
    pub fn position(&self, id: VertexId) -> Option<Vec2> {
        self.nodes.get(id as usize).and_then(|n| *n).map(|n| n.pos())
    }
    pub fn is_node(&self, id: VertexId) -> bool {
        matches!(self.nodes.get(id as usize), Some(Some(_)))
    }
    /// Removes the node and every edge incident to it. Neighbors are kept
    /// even when they become isolated.
    pub fn remove_node(&mut self, id: VertexId) -> bool {
        if !self.is_node(id) {
            return false;
        }
        let incident = std::mem::take(&mut self.adj[id as usize]);
        for eid in incident {
            self.remove_edge(eid, false);
        }
        self.nodes[id as usize] = None;
        true
    }
    pub fn node_count(&self) -> u32 {
        self.nodes.iter().filter(|n| n.is_some()).count() as u32
    }
    /// Valid vertex ids in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|_| i as VertexId))
    }

    // Adjacency
    /// Incident edge ids in insertion order; empty for unknown vertices.
    pub fn incident_edges(&self, id: VertexId) -> &[EdgeId] {
        self.adj.get(id as usize).map(Vec::as_slice).unwrap_or(&[])
    }
    /// Neighboring vertex ids, one per incident edge, in incident-edge order.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.incident_edges(id)
            .iter()
            .filter_map(move |&eid| self.edge(eid).map(|e| e.other(id)))
    }
    pub fn valence(&self, id: VertexId) -> usize {
        self.incident_edges(id).len()
    }
    pub fn is_boundary_vertex(&self, id: VertexId) -> bool {
        self.valence(id) == 1
    }
    pub fn is_junction_vertex(&self, id: VertexId) -> bool {
        self.valence(id) > 2
    }
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.incident_edges(a)
            .iter()
            .copied()
            .find(|&eid| self.edge(eid).map_or(false, |e| e.other(a) == b))
    }

    // Edges
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        if a == b || !self.is_node(a) || !self.is_node(b) {
            return None;
        }
        let id = self.edges.len() as EdgeId;
        self.edges.push(Some(Edge { a, b }));
        self.adj[a as usize].push(id);
        self.adj[b as usize].push(id);
        Some(id)
    }
    /// Removes an edge. With `remove_isolated`, endpoints left without any
    /// incident edge are removed as well.
    pub fn remove_edge(&mut self, id: EdgeId, remove_isolated: bool) -> bool {
        let edge = match self.edges.get_mut(id as usize).and_then(Option::take) {
            Some(e) => e,
            None => return false,
        };
        for v in [edge.a, edge.b] {
            if let Some(list) = self.adj.get_mut(v as usize) {
                list.retain(|&eid| eid != id);
                if remove_isolated && list.is_empty() {
                    self.nodes[v as usize] = None;
                }
            }
        }
        true
    }
    pub fn edge_endpoints(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edge(id).map(|e| (e.a, e.b))
    }
    pub fn is_edge(&self, id: EdgeId) -> bool {
        self.edge(id).is_some()
    }
    pub fn edge_count(&self) -> u32 {
        self.edges.iter().filter(|e| e.is_some()).count() as u32
    }
    /// Valid edge ids in ascending order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|_| i as EdgeId))
    }
    pub(crate) fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id as usize).and_then(|e| e.as_ref())
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adj.clear();
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    /// Replaces the graph with the document's contents. On error the graph
    /// is left unchanged.
    pub fn from_json_value(&mut self, v: serde_json::Value) -> Result<()> {
        *self = json::from_json_impl(v)?;
        Ok(())
    }
}

/// Resolve junctions (when enabled) and extract the resulting curves.
pub fn decompose(graph: &mut Graph, options: &DecomposeOptions) -> Result<Curves> {
    options.validate()?;
    if options.resolve_junctions {
        resolve_junctions(graph, &options.junctions)?;
    }
    Ok(extract_curves(graph))
}
