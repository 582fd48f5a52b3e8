use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::geometry::limits;
use crate::model::{Edge, EdgeId, Node, VertexId};
use crate::Graph;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DOC_VERSION: u32 = 1;

pub fn to_json_impl(g: &Graph) -> Value {
    #[derive(Serialize)]
    struct NodeSer {
        id: VertexId,
        x: f32,
        y: f32,
    }
    #[derive(Serialize)]
    struct EdgeSer {
        id: EdgeId,
        a: VertexId,
        b: VertexId,
    }
    #[derive(Serialize)]
    struct Doc {
        version: u32,
        nodes: Vec<NodeSer>,
        edges: Vec<EdgeSer>,
    }
    let mut nodes = Vec::new();
    for (i, n) in g.nodes.iter().enumerate() {
        if let Some(n) = n {
            nodes.push(NodeSer {
                id: i as VertexId,
                x: n.x,
                y: n.y,
            });
        }
    }
    let mut edges = Vec::new();
    for (i, e) in g.edges.iter().enumerate() {
        if let Some(e) = e {
            edges.push(EdgeSer {
                id: i as EdgeId,
                a: e.a,
                b: e.b,
            });
        }
    }
    let doc = Doc {
        version: DOC_VERSION,
        nodes,
        edges,
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn from_json_impl(v: Value) -> Result<Graph> {
    #[derive(Deserialize)]
    struct NodeDe {
        id: VertexId,
        x: f32,
        y: f32,
    }
    #[derive(Deserialize)]
    struct EdgeDe {
        id: EdgeId,
        a: VertexId,
        b: VertexId,
    }
    #[derive(Deserialize)]
    struct DocDe {
        version: Option<u32>,
        nodes: Vec<NodeDe>,
        edges: Vec<EdgeDe>,
    }
    let doc: DocDe = serde_json::from_value(v)?;
    if let Some(ver) = doc.version {
        if ver != DOC_VERSION {
            return Err(GraphError::UnsupportedVersion(ver));
        }
    }
    // Caps: sizes
    if doc.nodes.len() > limits::MAX_NODES {
        return Err(GraphError::LimitExceeded {
            what: "node",
            max: limits::MAX_NODES,
            got: doc.nodes.len(),
        });
    }
    if doc.edges.len() > limits::MAX_EDGES {
        return Err(GraphError::LimitExceeded {
            what: "edge",
            max: limits::MAX_EDGES,
            got: doc.edges.len(),
        });
    }
    // Ids index slots directly, so they share the size caps.
    if let Some(n) = doc.nodes.iter().find(|n| n.id as usize >= limits::MAX_NODES) {
        return Err(GraphError::LimitExceeded {
            what: "node id",
            max: limits::MAX_NODES,
            got: n.id as usize,
        });
    }
    if let Some(e) = doc.edges.iter().find(|e| e.id as usize >= limits::MAX_EDGES) {
        return Err(GraphError::LimitExceeded {
            what: "edge id",
            max: limits::MAX_EDGES,
            got: e.id as usize,
        });
    }

    let max_node = doc.nodes.iter().map(|n| n.id as usize + 1).max().unwrap_or(0);
    let max_edge = doc.edges.iter().map(|e| e.id as usize + 1).max().unwrap_or(0);
    let mut g = Graph {
        nodes: vec![None; max_node],
        edges: vec![None; max_edge],
        adj: vec![Vec::new(); max_node],
    };
    for n in doc.nodes {
        if !limits::in_coord_bounds(n.x) || !limits::in_coord_bounds(n.y) {
            return Err(GraphError::CoordOutOfRange { id: n.id });
        }
        let slot = &mut g.nodes[n.id as usize];
        if slot.is_some() {
            return Err(GraphError::DuplicateId {
                kind: "node",
                id: n.id,
            });
        }
        *slot = Some(Node { x: n.x, y: n.y });
    }
    let mut seen: HashSet<EdgeId> = HashSet::new();
    for e in doc.edges {
        if !seen.insert(e.id) {
            return Err(GraphError::DuplicateId {
                kind: "edge",
                id: e.id,
            });
        }
        if e.a == e.b {
            return Err(GraphError::SelfLoop { id: e.id, node: e.a });
        }
        for node in [e.a, e.b] {
            if !g.is_node(node) {
                return Err(GraphError::DanglingEdge { id: e.id, node });
            }
        }
        g.edges[e.id as usize] = Some(Edge { a: e.a, b: e.b });
    }
    // Adjacency in ascending edge id order, matching a graph built by
    // appending edges one at a time.
    for (i, e) in g.edges.iter().enumerate() {
        if let Some(e) = e {
            g.adj[e.a as usize].push(i as EdgeId);
            g.adj[e.b as usize].push(i as EdgeId);
        }
    }
    Ok(g)
}
