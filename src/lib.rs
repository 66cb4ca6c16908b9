//! Directed graphs over a fixed set of vertices with interchangeable storages.
//!
//! A graph is created with `n` vertices identified by `0..n` and only its
//! edges change afterwards. Algorithms are written against the
//! [`Graph`](core::Graph) trait, so the same code runs unchanged on the
//! sparse [`AdjMap`](storage::AdjMap) and the dense
//! [`AdjMatrix`](storage::AdjMatrix).
//!
//! ```
//! use fixgraph::prelude::*;
//!
//! let components = RandomGraph::new(1000).seed(42).analyze::<AdjMap>()?;
//!
//! assert_eq!(components.sizes().iter().sum::<usize>(), 1000);
//! # Ok::<(), GraphError>(())
//! ```
//!
//! The library emits [`tracing`] events and never installs a subscriber.

pub mod algo;
pub mod core;
pub mod generate;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    pub use crate::algo::Components;
    pub use crate::core::{Cost, Create, Graph, GraphError, Vertex, NO_COST};
    pub use crate::generate::{EdgePolicy, RandomGraph};
    pub use crate::storage::{AdjMap, AdjMatrix};
    pub use crate::visit::Dfs;
}
