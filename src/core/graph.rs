use std::iter::FusedIterator;

use super::{
    cost::Cost,
    error::{check_cost, check_vertices, GraphError},
    neighbors::VertexIter,
    Vertex,
};

/// Directed graph over a fixed set of vertices `0..n`.
///
/// At most one edge exists per ordered pair of vertices. Every operation
/// taking vertex ids fails with [`GraphError::OutOfRange`] if an id is not in
/// `[0, n)`, and does so before touching the graph.
///
/// Algorithms are written against this trait only, so that the storage is a
/// pure space/time trade-off. See the [`storage`](crate::storage) module for
/// the available implementations.
pub trait Graph {
    /// Iterator over outgoing edges of a vertex as `(neighbor, cost)` pairs.
    type Outgoing<'a>: Iterator<Item = (Vertex, Cost)>
    where
        Self: 'a;

    /// Returns the number of vertices, fixed for the lifetime of the graph.
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges.
    fn edge_count(&self) -> usize;

    /// Returns the number of outgoing edges of `v`.
    fn degree(&self, v: Vertex) -> Result<usize, GraphError>;

    /// Returns `true` if there is an edge `v → w`.
    fn has_edge(&self, v: Vertex, w: Vertex) -> Result<bool, GraphError>;

    /// Returns the cost of edge `v → w`.
    ///
    /// Returns [`NO_COST`](super::cost::NO_COST) if the edge has no cost or if
    /// there is no such edge at all.
    fn cost(&self, v: Vertex, w: Vertex) -> Result<Cost, GraphError>;

    /// Inserts edge `from → to` without a cost, replacing the existing edge.
    ///
    /// Returns `true` if the edge did not exist before.
    fn add_edge(&mut self, from: Vertex, to: Vertex) -> Result<bool, GraphError>;

    /// Inserts edge `from → to` with a non-negative cost, replacing the
    /// existing edge.
    ///
    /// Returns `true` if the edge did not exist before.
    fn add_edge_with_cost(
        &mut self,
        from: Vertex,
        to: Vertex,
        cost: Cost,
    ) -> Result<bool, GraphError>;

    /// Removes edge `from → to`. Removing an absent edge is not an error.
    ///
    /// Returns `true` if an edge was actually removed.
    fn remove_edge(&mut self, from: Vertex, to: Vertex) -> Result<bool, GraphError>;

    /// Returns the outgoing edges of `v` together with their costs.
    fn outgoing(&self, v: Vertex) -> Result<Self::Outgoing<'_>, GraphError>;

    /// Returns the neighbors of `v`.
    fn neighbors(&self, v: Vertex) -> Result<VertexIter<Self::Outgoing<'_>>, GraphError> {
        self.outgoing(v).map(VertexIter::new)
    }

    /// Inserts edges `v → w` and `w → v`. If `v == w`, a single self-loop is
    /// inserted.
    fn add_bidirectional(&mut self, v: Vertex, w: Vertex) -> Result<(), GraphError> {
        check_vertices(v, w, self.vertex_count())?;

        self.add_edge(v, w)?;
        if v != w {
            self.add_edge(w, v)?;
        }

        Ok(())
    }

    /// Inserts edges `v → w` and `w → v` with the same cost. If `v == w`, a
    /// single self-loop is inserted.
    fn add_bidirectional_with_cost(
        &mut self,
        v: Vertex,
        w: Vertex,
        cost: Cost,
    ) -> Result<(), GraphError> {
        check_vertices(v, w, self.vertex_count())?;
        check_cost(cost)?;

        self.add_edge_with_cost(v, w, cost)?;
        if v != w {
            self.add_edge_with_cost(w, v, cost)?;
        }

        Ok(())
    }

    /// Removes edges `v → w` and `w → v`. If `v == w`, the self-loop is
    /// removed once.
    fn remove_bidirectional(&mut self, v: Vertex, w: Vertex) -> Result<(), GraphError> {
        check_vertices(v, w, self.vertex_count())?;

        self.remove_edge(v, w)?;
        if v != w {
            self.remove_edge(w, v)?;
        }

        Ok(())
    }

    /// Returns `true` if the graph has no edges.
    fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }

    /// Returns all edges as `(from, to, cost)` triples, grouped by the source
    /// vertex in ascending order.
    fn edges(&self) -> Edges<'_, Self>
    where
        Self: Sized,
    {
        Edges {
            graph: self,
            next_src: 0,
            current: None,
        }
    }
}

/// Iterator over all edges of a graph.
///
/// See [`Graph::edges`].
pub struct Edges<'a, G>
where
    G: Graph + 'a,
{
    graph: &'a G,
    next_src: usize,
    current: Option<(Vertex, G::Outgoing<'a>)>,
}

impl<'a, G> Iterator for Edges<'a, G>
where
    G: Graph + 'a,
{
    type Item = (Vertex, Vertex, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((src, outgoing)) = self.current.as_mut() {
                if let Some((dst, cost)) = outgoing.next() {
                    return Some((*src, dst, cost));
                }
            }

            if self.next_src >= self.graph.vertex_count() {
                self.current = None;
                return None;
            }

            let src = self.next_src as Vertex;
            self.next_src += 1;
            self.current = self
                .graph
                .outgoing(src)
                .ok()
                .map(|outgoing| (src, outgoing));
        }
    }
}

impl<'a, G> FusedIterator for Edges<'a, G> where G: Graph + 'a {}
