use std::fmt;

use crate::core::{cost::declared, Graph, GraphError};

/// Renders the edges as `{(from,to), (from,to,cost), ...}`.
pub fn fmt_edges<G: Graph>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;

    for (i, (from, to, cost)) in graph.edges().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }

        match declared(cost) {
            Some(cost) => write!(f, "({from},{to},{cost})")?,
            None => write!(f, "({from},{to})")?,
        }
    }

    f.write_str("}")
}

/// Allocates a vector of `len` copies of `value`, reporting allocation
/// failure as [`GraphError::CapacityOverflow`] for a graph of `n` vertices.
pub fn try_filled<T: Clone>(len: usize, value: T, n: i64) -> Result<Vec<T>, GraphError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|_| GraphError::CapacityOverflow(n))?;
    vec.resize(len, value);
    Ok(vec)
}
