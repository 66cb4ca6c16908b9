//! Sparse storage keeping a hash map of outgoing edges per vertex.
//!
//! Only existing edges occupy memory, the space complexity is _O(n + m)_. A
//! vertex without outgoing edges costs a single empty slot, its map is
//! allocated on the first outgoing edge.

use std::{collections::hash_map, fmt};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{
    error::{check_cost, check_vertex, check_vertex_count, check_vertices},
    Cost, Create, Graph, GraphError, Vertex, NO_COST,
};

use super::shared;

const INITIAL_MAP_CAPACITY: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct AdjMap {
    edges: Vec<Option<FxHashMap<usize, Cost>>>,
    n_edges: usize,
}

impl AdjMap {
    /// Creates a graph with vertices `0..n` and no edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixgraph::{core::Graph, storage::AdjMap};
    ///
    /// let mut graph = AdjMap::new(3)?;
    /// graph.add_edge_with_cost(0, 1, 5)?;
    ///
    /// assert_eq!(graph.cost(0, 1)?, 5);
    /// assert!(!graph.has_edge(1, 0)?);
    /// assert_eq!(graph.to_string(), "{(0,1,5)}");
    /// # Ok::<(), fixgraph::core::GraphError>(())
    /// ```
    pub fn new(n: i64) -> Result<Self, GraphError> {
        let vertex_count = check_vertex_count(n)?;
        let edges = shared::try_filled(vertex_count, None, n)?;

        debug!(vertex_count, "allocated adjacency map storage");

        Ok(Self { edges, n_edges: 0 })
    }

    fn insert(&mut self, from: usize, to: usize, cost: Cost) -> bool {
        let map = self.edges[from].get_or_insert_with(|| {
            FxHashMap::with_capacity_and_hasher(INITIAL_MAP_CAPACITY, Default::default())
        });

        let added = map.insert(to, cost).is_none();
        if added {
            self.n_edges += 1;
        }

        added
    }

    fn map(&self, index: usize) -> Option<&FxHashMap<usize, Cost>> {
        self.edges[index].as_ref()
    }
}

impl Graph for AdjMap {
    type Outgoing<'a> = OutgoingIter<'a>;

    fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn degree(&self, v: Vertex) -> Result<usize, GraphError> {
        let v = check_vertex(v, self.vertex_count())?;
        Ok(self.map(v).map_or(0, |map| map.len()))
    }

    fn has_edge(&self, v: Vertex, w: Vertex) -> Result<bool, GraphError> {
        let (v, w) = check_vertices(v, w, self.vertex_count())?;
        Ok(self.map(v).is_some_and(|map| map.contains_key(&w)))
    }

    fn cost(&self, v: Vertex, w: Vertex) -> Result<Cost, GraphError> {
        let (v, w) = check_vertices(v, w, self.vertex_count())?;
        Ok(self
            .map(v)
            .and_then(|map| map.get(&w))
            .copied()
            .unwrap_or(NO_COST))
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

        let removed = self.edges[from]
            .as_mut()
            .is_some_and(|map| map.remove(&to).is_some());

        if removed {
            self.n_edges -= 1;
        }

        Ok(removed)
    }

    fn outgoing(&self, v: Vertex) -> Result<Self::Outgoing<'_>, GraphError> {
        let v = check_vertex(v, self.vertex_count())?;
        Ok(OutgoingIter {
            inner: self.map(v).map(|map| map.iter()),
        })
    }
}

impl Create for AdjMap {
    fn with_vertex_count(n: i64) -> Result<Self, GraphError> {
        Self::new(n)
    }
}

// A vertex whose map became empty is equal to a vertex whose map was never
// allocated.
impl PartialEq for AdjMap {
    fn eq(&self, other: &Self) -> bool {
        fn same(lhs: Option<&FxHashMap<usize, Cost>>, rhs: Option<&FxHashMap<usize, Cost>>) -> bool {
            match (lhs, rhs) {
                (Some(lhs), Some(rhs)) => lhs == rhs,
                (Some(map), None) | (None, Some(map)) => map.is_empty(),
                (None, None) => true,
            }
        }

        self.n_edges == other.n_edges
            && self.edges.len() == other.edges.len()
            && self
                .edges
                .iter()
                .zip(other.edges.iter())
                .all(|(lhs, rhs)| same(lhs.as_ref(), rhs.as_ref()))
    }
}

impl Eq for AdjMap {}

impl fmt::Display for AdjMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        shared::fmt_edges(self, f)
    }
}

/// Outgoing edges of a vertex in [`AdjMap`], in hash order.
#[derive(Debug, Clone)]
pub struct OutgoingIter<'a> {
    inner: Option<hash_map::Iter<'a, usize, Cost>>,
}

impl Iterator for OutgoingIter<'_> {
    type Item = (Vertex, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(&to, &cost)| (to as Vertex, cost))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |inner| inner.size_hint())
    }
}

impl ExactSizeIterator for OutgoingIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::*;

    #[test]
    fn construction() {
        test_construction::<AdjMap>();
    }

    #[test]
    fn add_remove() {
        test_add_remove::<AdjMap>();
    }

    #[test]
    fn overwrite() {
        test_overwrite::<AdjMap>();
    }

    #[test]
    fn self_loop() {
        test_self_loop::<AdjMap>();
    }

    #[test]
    fn bidirectional() {
        test_bidirectional::<AdjMap>();
    }

    #[test]
    fn out_of_range() {
        test_out_of_range::<AdjMap>();
    }

    #[test]
    fn negative_cost() {
        test_negative_cost::<AdjMap>();
    }

    #[test]
    fn neighbors() {
        test_neighbors::<AdjMap>();
    }

    #[test]
    fn path_scenario() {
        test_path_scenario::<AdjMap>();
    }

    #[test]
    fn cost_scenario() {
        test_cost_scenario::<AdjMap>();
    }

    #[test]
    fn render() {
        test_render::<AdjMap>();
    }

    #[test]
    fn edges() {
        test_edges::<AdjMap>();
    }

    #[test]
    fn map_overflow() {
        assert_eq!(
            AdjMap::new(i64::MAX).unwrap_err(),
            GraphError::CapacityOverflow(i64::MAX)
        );
    }

    #[test]
    fn maps_allocated_lazily() {
        let mut graph = AdjMap::new(5).unwrap();
        assert!(graph.edges.iter().all(Option::is_none));

        graph.add_edge(2, 3).unwrap();
        assert!(graph.edges[2].is_some());
        assert_eq!(graph.edges.iter().filter(|map| map.is_some()).count(), 1);

        // Removing the last edge keeps the map around.
        graph.remove_edge(2, 3).unwrap();
        assert!(graph.edges[2].is_some());
        assert_eq!(graph.degree(2), Ok(0));
        assert_eq!(graph.neighbors(2).unwrap().count(), 0);
    }

    #[test]
    fn equality_ignores_allocation() {
        let mut lhs = AdjMap::new(3).unwrap();
        let rhs = AdjMap::new(3).unwrap();

        lhs.add_edge(0, 1).unwrap();
        assert_ne!(lhs, rhs);

        lhs.remove_edge(0, 1).unwrap();
        assert_eq!(lhs, rhs);
    }
}
