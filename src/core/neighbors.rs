use std::iter::FusedIterator;

use super::{cost::Cost, error::GraphError, Vertex};

/// Neighbors of a single vertex.
///
/// Produced fresh by every [`Graph::neighbors`](super::Graph::neighbors) call
/// and reflects the graph at the time of the call. The iterator keeps one
/// neighbor of lookahead so that [`has_next`](VertexIter::has_next) does not
/// need to advance anything.
///
/// The order of neighbors is storage-specific. Callers must rely only on the
/// set of yielded ids being the set of out-neighbors.
#[derive(Debug, Clone)]
pub struct VertexIter<I> {
    inner: I,
    peeked: Option<Vertex>,
}

impl<I> VertexIter<I>
where
    I: Iterator<Item = (Vertex, Cost)>,
{
    pub(crate) fn new(mut inner: I) -> Self {
        let peeked = inner.next().map(|(vertex, _)| vertex);
        Self { inner, peeked }
    }

    /// Returns `true` if there is at least one more neighbor.
    pub fn has_next(&self) -> bool {
        self.peeked.is_some()
    }

    /// Advances the iterator and returns the next neighbor.
    ///
    /// Fails with [`GraphError::Exhausted`] if there are no more neighbors.
    pub fn next_vertex(&mut self) -> Result<Vertex, GraphError> {
        self.next().ok_or(GraphError::Exhausted)
    }
}

impl<I> Iterator for VertexIter<I>
where
    I: Iterator<Item = (Vertex, Cost)>,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.peeked.take()?;
        self.peeked = self.inner.next().map(|(vertex, _)| vertex);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let extra = usize::from(self.peeked.is_some());
        (
            lower.saturating_add(extra),
            upper.and_then(|upper| upper.checked_add(extra)),
        )
    }
}

impl<I> FusedIterator for VertexIter<I> where I: Iterator<Item = (Vertex, Cost)> {}
