use std::fmt;

use thiserror::Error;

use super::{Cost, Vertex};

/// Error returned by graph operations.
///
/// Every error is raised at the offending call, before any mutation took
/// place.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid vertex count: n = {0}")]
    InvalidVertexCount(i64),
    #[error("illegal cost: c = {0}")]
    NegativeCost(Cost),
    #[error("out of range: v = {vertex}, vertex count = {vertex_count}")]
    OutOfRange { vertex: Vertex, vertex_count: usize },
    #[error("no more neighbors")]
    Exhausted,
    #[error("the graph cannot hold {0} vertices")]
    CapacityOverflow(i64),
}

impl GraphError {
    /// Returns the coarse classification of the error.
    pub fn kind(&self) -> GraphErrorKind {
        match self {
            GraphError::InvalidVertexCount(_)
            | GraphError::NegativeCost(_)
            | GraphError::CapacityOverflow(_) => GraphErrorKind::Argument,
            GraphError::OutOfRange { .. } => GraphErrorKind::OutOfRange,
            GraphError::Exhausted => GraphErrorKind::Exhausted,
        }
    }
}

/// Coarse classification of [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphErrorKind {
    /// An argument other than a vertex id is illegal.
    Argument,
    /// A vertex id is outside of `[0, n)`.
    OutOfRange,
    /// A neighbor was requested from an exhausted iterator.
    Exhausted,
}

impl fmt::Display for GraphErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            GraphErrorKind::Argument => "illegal argument",
            GraphErrorKind::OutOfRange => "vertex out of range",
            GraphErrorKind::Exhausted => "iterator exhausted",
        };
        f.write_str(reason)
    }
}

/// Checks that `vertex` is in `[0, vertex_count)` and returns it as an index.
pub(crate) fn check_vertex(vertex: Vertex, vertex_count: usize) -> Result<usize, GraphError> {
    match usize::try_from(vertex) {
        Ok(index) if index < vertex_count => Ok(index),
        _ => Err(GraphError::OutOfRange {
            vertex,
            vertex_count,
        }),
    }
}

/// Checks both endpoints of an edge.
pub(crate) fn check_vertices(
    v: Vertex,
    w: Vertex,
    vertex_count: usize,
) -> Result<(usize, usize), GraphError> {
    Ok((check_vertex(v, vertex_count)?, check_vertex(w, vertex_count)?))
}

pub(crate) fn check_cost(cost: Cost) -> Result<Cost, GraphError> {
    if cost < 0 {
        Err(GraphError::NegativeCost(cost))
    } else {
        Ok(cost)
    }
}

pub(crate) fn check_vertex_count(n: i64) -> Result<usize, GraphError> {
    usize::try_from(n).map_err(|_| GraphError::InvalidVertexCount(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_vertex_bounds() {
        assert_eq!(check_vertex(0, 3), Ok(0));
        assert_eq!(check_vertex(2, 3), Ok(2));
        assert_eq!(
            check_vertex(3, 3),
            Err(GraphError::OutOfRange {
                vertex: 3,
                vertex_count: 3
            })
        );
        assert_eq!(
            check_vertex(-1, 3),
            Err(GraphError::OutOfRange {
                vertex: -1,
                vertex_count: 3
            })
        );
        assert!(check_vertex(0, 0).is_err());
    }

    #[test]
    fn check_vertices_reports_first_invalid() {
        assert_eq!(
            check_vertices(0, -1, 2),
            Err(GraphError::OutOfRange {
                vertex: -1,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(GraphError::NegativeCost(-3).kind(), GraphErrorKind::Argument);
        assert_eq!(
            GraphError::InvalidVertexCount(-1).kind(),
            GraphErrorKind::Argument
        );
        assert_eq!(GraphError::Exhausted.kind(), GraphErrorKind::Exhausted);
        assert_eq!(
            GraphError::OutOfRange {
                vertex: 9,
                vertex_count: 1
            }
            .kind(),
            GraphErrorKind::OutOfRange
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::OutOfRange {
                vertex: 5,
                vertex_count: 4
            }
            .to_string(),
            "out of range: v = 5, vertex count = 4"
        );
        assert_eq!(GraphError::NegativeCost(-2).to_string(), "illegal cost: c = -2");
    }
}
