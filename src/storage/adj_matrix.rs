//! Dense storage keeping an `n × n` matrix of edges.
//!
//! Presence of an edge is a bit in a row-major bit matrix, its cost lives in
//! a parallel vector of the same shape. Together they give three states for
//! every ordered pair: no edge, an edge without a cost, an edge with a cost.
//!
//! Edge lookup, insertion and removal are _O(1)_, the space is _O(n²)_
//! regardless of the number of edges. Enumerating neighbors scans the whole
//! row of the vertex and therefore takes _O(n)_, which makes this storage a
//! poor fit for sparse graphs.

use std::fmt;

use bitvec::{prelude::*, slice::IterOnes};
use tracing::debug;

use crate::core::{
    error::{check_cost, check_vertex, check_vertex_count, check_vertices},
    Cost, Create, Graph, GraphError, Vertex, NO_COST,
};

use super::shared;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjMatrix {
    present: BitVec,
    // Cells without an edge always hold NO_COST.
    costs: Vec<Cost>,
    degrees: Vec<usize>,
    n_edges: usize,
}

impl AdjMatrix {
    /// Creates a graph with vertices `0..n` and no edges.
    ///
    /// Fails with [`GraphError::CapacityOverflow`] if the `n × n` matrix
    /// cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixgraph::{core::Graph, storage::AdjMatrix};
    ///
    /// let mut graph = AdjMatrix::new(4)?;
    /// graph.add_edge(0, 3)?;
    /// graph.add_edge(0, 1)?;
    ///
    /// // Neighbors are always yielded in ascending order.
    /// assert_eq!(graph.neighbors(0)?.collect::<Vec<_>>(), vec![1, 3]);
    /// # Ok::<(), fixgraph::core::GraphError>(())
    /// ```
    pub fn new(n: i64) -> Result<Self, GraphError> {
        let vertex_count = check_vertex_count(n)?;
        let len = vertex_count
            .checked_mul(vertex_count)
            .ok_or(GraphError::CapacityOverflow(n))?;

        let costs = shared::try_filled(len, NO_COST, n)?;
        let degrees = shared::try_filled(vertex_count, 0, n)?;
        let words = shared::try_filled(len.div_ceil(usize::BITS as usize), 0usize, n)?;
        let mut present = BitVec::from_vec(words);
        present.truncate(len);

        debug!(vertex_count, cells = len, "allocated adjacency matrix storage");

        Ok(Self {
            present,
            costs,
            degrees,
            n_edges: 0,
        })
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.vertex_count() + col
    }

    fn row(&self, row: usize) -> std::ops::Range<usize> {
        let start = self.index(row, 0);
        start..start + self.vertex_count()
    }

    fn insert(&mut self, from: usize, to: usize, cost: Cost) -> bool {
        let index = self.index(from, to);
        let added = !self.present[index];

        self.present.set(index, true);
        self.costs[index] = cost;

        if added {
            self.degrees[from] += 1;
            self.n_edges += 1;
        }

        added
    }
}

impl Graph for AdjMatrix {
    type Outgoing<'a> = OutgoingIter<'a>;

    fn vertex_count(&self) -> usize {
        self.degrees.len()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn degree(&self, v: Vertex) -> Result<usize, GraphError> {
        let v = check_vertex(v, self.vertex_count())?;
        Ok(self.degrees[v])
    }

    fn has_edge(&self, v: Vertex, w: Vertex) -> Result<bool, GraphError> {
        let (v, w) = check_vertices(v, w, self.vertex_count())?;
        Ok(self.present[self.index(v, w)])
    }

    fn cost(&self, v: Vertex, w: Vertex) -> Result<Cost, GraphError> {
        let (v, w) = check_vertices(v, w, self.vertex_count())?;
        Ok(self.costs[self.index(v, w)])
    }

    fn add_edge(&mut self, from: Vertex, to: Vertex) -> Result<bool, GraphError> {
        let (from, to) = check_vertices(from, to, self.vertex_count())?;
        Ok(self.insert(from, to, NO_COST))
    }

    fn add_edge_with_cost(
        &mut self,
        from: Vertex,
        to: Vertex,
        cost: Cost,
    ) -> Result<bool, GraphError> {
        let (from, to) = check_vertices(from, to, self.vertex_count())?;
        let cost = check_cost(cost)?;
        Ok(self.insert(from, to, cost))
    }

    fn remove_edge(&mut self, from: Vertex, to: Vertex) -> Result<bool, GraphError> {
        let (from, to) = check_vertices(from, to, self.vertex_count())?;
        let index = self.index(from, to);

        if !self.present[index] {
            return Ok(false);
        }

        self.present.set(index, false);
        self.costs[index] = NO_COST;
        self.degrees[from] -= 1;
        self.n_edges -= 1;

        Ok(true)
    }

    fn outgoing(&self, v: Vertex) -> Result<Self::Outgoing<'_>, GraphError> {
        let v = check_vertex(v, self.vertex_count())?;
        let row = self.row(v);

        Ok(OutgoingIter {
            ones: self.present[row.clone()].iter_ones(),
            costs: &self.costs[row],
        })
    }
}

impl Create for AdjMatrix {
    fn with_vertex_count(n: i64) -> Result<Self, GraphError> {
        Self::new(n)
    }
}

impl fmt::Display for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        shared::fmt_edges(self, f)
    }
}

/// Outgoing edges of a vertex in [`AdjMatrix`], in ascending order.
#[derive(Debug, Clone)]
pub struct OutgoingIter<'a> {
    ones: IterOnes<'a, usize, Lsb0>,
    costs: &'a [Cost],
}

impl Iterator for OutgoingIter<'_> {
    type Item = (Vertex, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        self.ones
            .next()
            .map(|col| (col as Vertex, self.costs[col]))
    }
}
