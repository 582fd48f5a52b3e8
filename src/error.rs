use crate::model::{EdgeId, VertexId};

/// Errors raised at the ingestion boundary of the graph.
///
/// Topological operations never return these: ids they receive come from
/// the graph itself.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The document is not a graph document.
    #[error("malformed graph document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported graph document version {0}")]
    UnsupportedVersion(u32),

    /// Too many nodes or edges.
    #[error("{what} count {got} exceeds limit {max}")]
    LimitExceeded {
        what: &'static str,
        max: usize,
        got: usize,
    },

    /// Coordinate is NaN, infinite or outside the accepted range.
    #[error("node {id}: coordinate out of range")]
    CoordOutOfRange { id: VertexId },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("edge {id} connects node {node} to itself")]
    SelfLoop { id: EdgeId, node: VertexId },

    #[error("edge {id} references missing node {node}")]
    DanglingEdge { id: EdgeId, node: VertexId },

    /// Option value outside its accepted range.
    #[error("parameter '{param}' out of range: got {got}, expected {min}..={max}")]
    OutOfRange {
        param: &'static str,
        min: f32,
        max: f32,
        got: f32,
    },
}

/// Result type for graph ingestion.
pub type Result<T> = std::result::Result<T, GraphError>;
