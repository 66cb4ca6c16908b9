//! The graph contract shared by all storages.

pub mod cost;
pub mod error;

mod create;
mod graph;
mod neighbors;

pub use cost::{Cost, NO_COST};
pub use create::Create;
pub use error::{GraphError, GraphErrorKind};
pub use graph::{Edges, Graph};
pub use neighbors::VertexIter;

/// Vertex identifier.
///
/// Valid ids of a graph with `n` vertices are `0..n`. The type is signed so
/// that negative ids can be passed and rejected with
/// [`GraphError::OutOfRange`].
pub type Vertex = i64;
