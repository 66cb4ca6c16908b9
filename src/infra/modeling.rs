//! Sequences of graph mutations used for comparing storages.

use crate::core::{Cost, Create, Graph, GraphError, Vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutOp {
    AddEdge(Vertex, Vertex),
    AddEdgeWithCost(Vertex, Vertex, Cost),
    AddBidirectional(Vertex, Vertex),
    AddBidirectionalWithCost(Vertex, Vertex, Cost),
    RemoveEdge(Vertex, Vertex),
    RemoveBidirectional(Vertex, Vertex),
}

/// Outcome of a [`MutOp`]. Single-edge operations report whether the graph
/// changed, bidirectional ones report `None`.
pub type MutOpResult = Result<Option<bool>, GraphError>;

impl MutOp {
    pub fn apply<G: Graph>(self, graph: &mut G) -> MutOpResult {
        match self {
            MutOp::AddEdge(from, to) => graph.add_edge(from, to).map(Some),
            MutOp::AddEdgeWithCost(from, to, cost) => {
                graph.add_edge_with_cost(from, to, cost).map(Some)
            }
            MutOp::AddBidirectional(v, w) => graph.add_bidirectional(v, w).map(|_| None),
            MutOp::AddBidirectionalWithCost(v, w, cost) => graph
                .add_bidirectional_with_cost(v, w, cost)
                .map(|_| None),
            MutOp::RemoveEdge(from, to) => graph.remove_edge(from, to).map(Some),
            MutOp::RemoveBidirectional(v, w) => graph.remove_bidirectional(v, w).map(|_| None),
        }
    }
}

/// A vertex count together with mutations to apply on a graph of that size.
///
/// Vertex ids in the operations lie in `[-1, vertex_count]` so that both ends
/// of the valid range are exercised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutOpsSeq {
    pub vertex_count: i64,
    pub ops: Vec<MutOp>,
}

impl MutOpsSeq {
    /// Creates a graph of the given storage and applies all operations on it,
    /// collecting the results.
    pub fn build<G: Create>(&self) -> Result<(G, Vec<MutOpResult>), GraphError> {
        let mut graph = G::with_vertex_count(self.vertex_count)?;
        let results = self.ops.iter().map(|op| op.apply(&mut graph)).collect();
        Ok((graph, results))
    }
}
