//! Random population of graphs.
//!
//! Endpoints are always drawn uniformly from `[0, n)`. How many edges are
//! inserted is decided by an [`EdgePolicy`].
//!
//! # Examples
//!
//! ```
//! use fixgraph::{
//!     core::Graph,
//!     generate::{EdgePolicy, RandomGraph},
//!     storage::AdjMatrix,
//! };
//!
//! let graph = RandomGraph::new(100)
//!     .policy(EdgePolicy::UndirectedEdges(50))
//!     .seed(42)
//!     .build::<AdjMatrix>()?;
//!
//! assert_eq!(graph.vertex_count(), 100);
//! # Ok::<(), fixgraph::core::GraphError>(())
//! ```

use fastrand::Rng;
use tracing::debug;

use crate::{
    algo::Components,
    core::{Create, Graph, GraphError, Vertex},
};

/// Decides how many edges are inserted into a randomly populated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Makes exactly this many draws and inserts a directed edge for each.
    ///
    /// Repeated draws of the same pair do not add an edge, so the graph ends
    /// up with at most this many edges.
    Attempts(usize),
    /// Draws until this many new undirected edges were inserted, each stored
    /// as a pair of directed edges.
    ///
    /// The target is clamped to the number of undirected pairs still
    /// missing, self-loops included, so the population always finishes.
    UndirectedEdges(usize),
}

impl EdgePolicy {
    /// `n + 1` directed attempts for a graph with `n` vertices.
    pub fn attempts(vertex_count: usize) -> Self {
        Self::Attempts(vertex_count.saturating_add(1))
    }

    /// `n` undirected edges for a graph with `n` vertices.
    pub fn undirected(vertex_count: usize) -> Self {
        Self::UndirectedEdges(vertex_count)
    }
}

/// Builder of randomly populated graphs.
///
/// Without a [seed](RandomGraph::seed), every population draws from a fresh
/// entropy-seeded generator. With a seed, populating equal graphs gives equal
/// results.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    vertex_count: i64,
    policy: Option<EdgePolicy>,
    seed: Option<u64>,
}

impl RandomGraph {
    pub fn new(vertex_count: i64) -> Self {
        Self {
            vertex_count,
            policy: None,
            seed: None,
        }
    }

    /// Sets the policy. Defaults to [`EdgePolicy::attempts`] for the number of
    /// vertices of the populated graph.
    pub fn policy(self, policy: EdgePolicy) -> Self {
        Self {
            policy: Some(policy),
            ..self
        }
    }

    /// Makes the population deterministic.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Creates an empty graph of the configured size and populates it.
    pub fn build<G>(&self) -> Result<G, GraphError>
    where
        G: Create,
    {
        let mut graph = G::with_vertex_count(self.vertex_count)?;
        self.populate(&mut graph)?;
        Ok(graph)
    }

    /// Inserts random edges into an existing graph.
    ///
    /// The endpoints are drawn from the vertices of `graph`, regardless of
    /// the vertex count this builder was created with.
    pub fn populate<G>(&self, graph: &mut G) -> Result<(), GraphError>
    where
        G: Graph,
    {
        let vertex_count = graph.vertex_count();
        let policy = self
            .policy
            .unwrap_or_else(|| EdgePolicy::attempts(vertex_count));

        if vertex_count == 0 {
            debug!(?policy, "nothing to populate in a graph without vertices");
            return Ok(());
        }

        let mut rng = self.seed.map_or_else(Rng::new, Rng::with_seed);
        let mut draw = || rng.i64(0..vertex_count as Vertex);

        let draws = match policy {
            EdgePolicy::Attempts(attempts) => {
                for _ in 0..attempts {
                    let (from, to) = (draw(), draw());
                    graph.add_edge(from, to)?;
                }

                attempts
            }
            EdgePolicy::UndirectedEdges(target) => {
                let pairs = vertex_count.saturating_mul(vertex_count + 1) / 2;
                let missing = pairs.saturating_sub(undirected_count(graph));
                let target = target.min(missing);

                let mut draws = 0;
                let mut inserted = 0;

                while inserted < target {
                    let (v, w) = (draw(), draw());
                    draws += 1;

                    if !(graph.has_edge(v, w)? && graph.has_edge(w, v)?) {
                        graph.add_bidirectional(v, w)?;
                        inserted += 1;
                    }
                }

                draws
            }
        };

        debug!(
            vertex_count,
            ?policy,
            draws,
            edges = graph.edge_count(),
            "populated random graph"
        );

        Ok(())
    }

    /// Builds a random graph and discovers its components.
    pub fn analyze<G>(&self) -> Result<Components, GraphError>
    where
        G: Create,
    {
        let graph = self.build::<G>()?;
        Ok(Components::on(&graph).run())
    }
}

/// Counts unordered pairs `{v, w}` connected in both directions.
fn undirected_count<G: Graph>(graph: &G) -> usize {
    graph
        .edges()
        .filter(|&(v, w, _)| v <= w && graph.has_edge(w, v).unwrap_or(false))
        .count()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        infra::testing::{check_consistency, check_equivalent},
        storage::{AdjMap, AdjMatrix},
    };

    #[test]
    fn seeded_is_deterministic() {
        let generator = RandomGraph::new(50).seed(7);

        let first = generator.build::<AdjMap>().unwrap();
        let second = generator.build::<AdjMap>().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn seeded_same_on_both_storages() {
        let generator = RandomGraph::new(40)
            .policy(EdgePolicy::UndirectedEdges(60))
            .seed(3);

        let map = generator.build::<AdjMap>().unwrap();
        let matrix = generator.build::<AdjMatrix>().unwrap();

        check_consistency(&map).unwrap();
        check_consistency(&matrix).unwrap();
        check_equivalent(&map, &matrix).unwrap();
    }

    #[test]
    fn attempts_bound_edge_count() {
        let graph = RandomGraph::new(30).seed(11).build::<AdjMatrix>().unwrap();

        assert!(graph.edge_count() >= 1);
        assert!(graph.edge_count() <= 31);
    }

    #[test]
    fn attempts_explicit() {
        let graph = RandomGraph::new(10)
            .policy(EdgePolicy::Attempts(0))
            .build::<AdjMap>()
            .unwrap();

        assert!(graph.is_empty());
    }

    #[test]
    fn undirected_edges_reach_target() {
        let n = 25;
        let graph = RandomGraph::new(n)
            .policy(EdgePolicy::undirected(n as usize))
            .seed(5)
            .build::<AdjMap>()
            .unwrap();

        assert_eq!(undirected_count(&graph), n as usize);

        for (v, w, _) in graph.edges() {
            assert!(graph.has_edge(w, v).unwrap(), "({v}, {w}) is one-way");
        }
    }

    #[test]
    fn undirected_edges_clamped() {
        let graph = RandomGraph::new(3)
            .policy(EdgePolicy::UndirectedEdges(100))
            .build::<AdjMatrix>()
            .unwrap();

        // All 6 undirected pairs: 3 self-loops and 3 pairs of directed edges.
        assert_eq!(undirected_count(&graph), 6);
        assert_eq!(graph.edge_count(), 9);
    }

    #[test]
    fn populate_complete_graph_finishes() {
        let mut graph = AdjMap::new(2).unwrap();

        graph.add_bidirectional(0, 0).unwrap();
        graph.add_bidirectional(0, 1).unwrap();
        graph.add_bidirectional(1, 1).unwrap();

        RandomGraph::new(2)
            .policy(EdgePolicy::UndirectedEdges(10))
            .populate(&mut graph)
            .unwrap();

        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn populate_uses_graph_size() {
        let mut graph = AdjMatrix::new(4).unwrap();

        RandomGraph::new(1000).seed(1).populate(&mut graph).unwrap();

        check_consistency(&graph).unwrap();
        assert!(graph.edge_count() <= 5);
    }

    #[test]
    fn no_vertices() {
        let graph = RandomGraph::new(0)
            .policy(EdgePolicy::UndirectedEdges(10))
            .build::<AdjMatrix>()
            .unwrap();

        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn invalid_vertex_count() {
        assert_matches!(
            RandomGraph::new(-1).build::<AdjMap>().err(),
            Some(GraphError::InvalidVertexCount(-1))
        );
        assert_matches!(
            RandomGraph::new(-1).analyze::<AdjMatrix>().err(),
            Some(GraphError::InvalidVertexCount(-1))
        );
    }

    #[test]
    fn analyze_covers_all_vertices() {
        let generator = RandomGraph::new(200).seed(99);

        let map = generator.analyze::<AdjMap>().unwrap();
        let matrix = generator.analyze::<AdjMatrix>().unwrap();

        assert_eq!(map.vertex_count(), 200);
        assert_eq!(map.sizes().iter().sum::<usize>(), 200);
        assert_eq!(map.sizes(), matrix.sizes());
        assert_eq!(map.tree_edges(), 200 - map.len());
    }
}
