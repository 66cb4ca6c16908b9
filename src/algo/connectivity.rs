//! Discover components of a graph by depth-first traversal.
//!
//! A traversal is started from every vertex not visited yet, in ascending
//! order of ids. Every such start roots a new component, made of the vertices
//! first reached from that root. Edges are followed only in their direction,
//! so on directed graphs the result depends on the numbering of vertices. On
//! graphs built from bidirectional edges, the components are exactly the
//! connected components.
//!
//! # Examples
//!
//! ```
//! use fixgraph::{algo::Components, core::Graph, storage::AdjMap};
//!
//! let mut graph = AdjMap::new(5)?;
//!
//! graph.add_bidirectional(0, 1)?;
//! graph.add_bidirectional(1, 2)?;
//! graph.add_bidirectional(3, 4)?;
//!
//! let components = Components::on(&graph).run();
//!
//! assert_eq!(components.len(), 2);
//! assert_eq!(components.largest(), 3);
//! assert_eq!(components.sizes(), &[3, 2]);
//! # Ok::<(), fixgraph::core::GraphError>(())
//! ```

use std::time::Duration;

mod builder;
mod dfs;

pub use builder::ComponentsBuilder;

/// Components of a graph with the time it took to discover them.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Components {
    sizes: Vec<usize>,
    vertex_count: usize,
    elapsed: Duration,
}

impl Components {
    /// Returns the number of components, i.e., the number of traversal roots.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the size of the largest component, zero for an empty graph.
    pub fn largest(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }

    /// Returns the sizes of components in the order of their roots.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the number of edges the traversal went through to discover a
    /// new vertex.
    ///
    /// Every vertex except the roots is discovered through exactly one such
    /// edge.
    pub fn tree_edges(&self) -> usize {
        self.vertex_count - self.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the time spent in the traversal.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Algorithm for [`Components`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// Iterative DFS started from every unvisited vertex in ascending order.
    Dfs,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct Dfs;
}
