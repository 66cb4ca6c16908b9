//! Implementations of graph storages.
//!
//! A _storage_ is an implementation of the graph representation. It implements
//! [`Graph`](crate::core::Graph) and [`Create`](crate::core::Create), and
//! algorithms never look past these traits. Choosing a storage is therefore
//! only a matter of space and time trade-offs.
//!
//! # Storages and their properties
//!
//! The **adjacency map** provides fast traversal and small memory footprint on
//! sparse graphs. The **adjacency matrix** provides the fastest edge lookup
//! and mutation at the price of quadratic memory and linear neighbor
//! enumeration.
//!
//! |                | **[AdjMap]**   | **[AdjMatrix]** |
//! |----------------|----------------|-----------------|
//! | add edge       | _O*(1)_        | _O(1)_          |
//! | remove edge    | _O*(1)_        | _O(1)_          |
//! | lookup edge    | _O*(1)_        | _O(1)_          |
//! | degree         | _O(1)_         | _O(1)_          |
//! | get neighbors  | _O(d)_         | _O(V)_          |
//! | space          | _O(V + E)_     | _O(V²)_         |
//! | neighbor order | unspecified    | ascending       |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – expected amortized complexity

pub mod adj_map;
pub mod adj_matrix;
mod shared;

#[doc(inline)]
pub use self::{adj_map::AdjMap, adj_matrix::AdjMatrix};
