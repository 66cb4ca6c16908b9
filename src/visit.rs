//! Graph traversal.
//!
//! Traversals are **iterative**, they keep their own stack instead of
//! recursing. Depth of the traversal is thus not limited by the size of the
//! program stack, which matters on long paths of large sparse graphs.
//!
//! The order in which the neighbors of a vertex are discovered follows the
//! neighbor order of the storage and should not be relied upon.

pub mod dfs;

#[doc(inline)]
pub use self::dfs::{Dfs, DfsRooted};
