use proptest::{collection::vec, prelude::*};

use crate::core::{Cost, Vertex};

use super::modeling::{MutOp, MutOpsSeq};

/// Strategy for a single mutation on a graph with `vertex_count` vertices.
///
/// Vertex ids are drawn from `[-1, vertex_count]` and costs occasionally
/// negative, so some of the operations are expected to fail.
pub fn mut_op(vertex_count: Vertex) -> impl Strategy<Value = MutOp> {
    let vertex = -1..=vertex_count;
    let pair = (vertex.clone(), vertex);
    let cost = -1..50 as Cost;

    prop_oneof![
        4 => pair.clone().prop_map(|(v, w)| MutOp::AddEdge(v, w)),
        4 => (pair.clone(), cost.clone()).prop_map(|((v, w), c)| MutOp::AddEdgeWithCost(v, w, c)),
        2 => pair.clone().prop_map(|(v, w)| MutOp::AddBidirectional(v, w)),
        2 => (pair.clone(), cost).prop_map(|((v, w), c)| MutOp::AddBidirectionalWithCost(v, w, c)),
        3 => pair.clone().prop_map(|(v, w)| MutOp::RemoveEdge(v, w)),
        1 => pair.prop_map(|(v, w)| MutOp::RemoveBidirectional(v, w)),
    ]
}

/// Strategy for a vertex count up to `max_vertex_count` together with up to
/// `max_ops` mutations.
pub fn mut_ops_seq(max_vertex_count: Vertex, max_ops: usize) -> impl Strategy<Value = MutOpsSeq> {
    (0..=max_vertex_count).prop_flat_map(move |vertex_count| {
        vec(mut_op(vertex_count), 0..=max_ops).prop_map(move |ops| MutOpsSeq { vertex_count, ops })
    })
}
