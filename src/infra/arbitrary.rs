use arbitrary::{Arbitrary, Result, Unstructured};

use crate::core::Vertex;

use super::modeling::{MutOp, MutOpsSeq};

const MAX_VERTEX_COUNT: i64 = 32;

fn vertex(u: &mut Unstructured<'_>, vertex_count: i64) -> Result<Vertex> {
    u.int_in_range(-1..=vertex_count)
}

fn cost(u: &mut Unstructured<'_>) -> Result<i64> {
    // Mostly legal costs, occasionally a negative one.
    u.int_in_range(-2..=100)
}

impl MutOp {
    pub fn arbitrary_for(u: &mut Unstructured<'_>, vertex_count: i64) -> Result<Self> {
        let v = vertex(u, vertex_count)?;
        let w = vertex(u, vertex_count)?;

        let op = match u.int_in_range(0..=5u8)? {
            0 => MutOp::AddEdge(v, w),
            1 => MutOp::AddEdgeWithCost(v, w, cost(u)?),
            2 => MutOp::AddBidirectional(v, w),
            3 => MutOp::AddBidirectionalWithCost(v, w, cost(u)?),
            4 => MutOp::RemoveEdge(v, w),
            _ => MutOp::RemoveBidirectional(v, w),
        };

        Ok(op)
    }
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertex_count = u.int_in_range(0..=MAX_VERTEX_COUNT)?;
        let mut ops = Vec::new();

        // Every operation consumes at least one byte, so this terminates.
        while !u.is_empty() {
            ops.push(MutOp::arbitrary_for(u, vertex_count)?);
        }

        Ok(Self { vertex_count, ops })
    }
}
