//! Initialization of graphs.

use super::{error::GraphError, graph::Graph};

/// Trait for creating a graph with a given number of vertices and no edges.
pub trait Create: Graph + Sized {
    /// Creates a graph with vertices `0..n`.
    ///
    /// Fails with [`GraphError::InvalidVertexCount`] if `n < 0`.
    fn with_vertex_count(n: i64) -> Result<Self, GraphError>;
}
