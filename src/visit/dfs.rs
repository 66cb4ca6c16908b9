use fixedbitset::FixedBitSet;

use crate::core::{error::check_vertex, Graph, GraphError, Vertex, VertexIter};

/// Depth-first traversal of a graph.
///
/// The visited set is shared by all traversals started from the same `Dfs`,
/// so a vertex is yielded at most once across all of them.
///
/// # Examples
///
/// ```
/// use fixgraph::{core::Graph, storage::AdjMatrix, visit::Dfs};
///
/// let mut graph = AdjMatrix::new(5)?;
/// graph.add_edge(0, 2)?;
/// graph.add_edge(2, 1)?;
/// graph.add_edge(0, 3)?;
/// graph.add_edge(4, 0)?;
///
/// let mut dfs = Dfs::new(&graph);
///
/// assert_eq!(dfs.start(0)?.collect::<Vec<_>>(), vec![0, 2, 1, 3]);
/// // Vertex 0 was already visited.
/// assert_eq!(dfs.start(4)?.collect::<Vec<_>>(), vec![4]);
/// # Ok::<(), fixgraph::core::GraphError>(())
/// ```
pub struct Dfs<'a, G>
where
    G: Graph + 'a,
{
    graph: &'a G,
    visited: FixedBitSet,
    stack: Vec<VertexIter<G::Outgoing<'a>>>,
}

impl<'a, G> Dfs<'a, G>
where
    G: Graph + 'a,
{
    /// Creates a traversal with nothing visited yet.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
            stack: Vec::new(),
        }
    }

    /// Starts a traversal from `root`.
    ///
    /// Yields vertices in preorder. If the root was already visited, nothing
    /// is yielded.
    pub fn start(&mut self, root: Vertex) -> Result<DfsRooted<'_, 'a, G>, GraphError> {
        check_vertex(root, self.graph.vertex_count())?;
        self.stack.clear();

        Ok(DfsRooted {
            dfs: self,
            root: Some(root),
        })
    }

    /// Returns `true` if `v` was yielded by any traversal so far.
    pub fn is_visited(&self, v: Vertex) -> bool {
        usize::try_from(v).is_ok_and(|index| self.visited.contains(index))
    }

    /// Returns the number of vertices yielded by all traversals so far.
    pub fn visited_count(&self) -> usize {
        self.visited.count_ones(..)
    }

    fn discover(&mut self, v: Vertex) -> Option<Vertex> {
        if self.visited.put(v as usize) {
            return None;
        }

        let neighbors = self
            .graph
            .neighbors(v)
            .expect("traversal reaches only vertices of the graph");
        self.stack.push(neighbors);

        Some(v)
    }
}

/// Traversal from a single root. See [`Dfs::start`].
pub struct DfsRooted<'d, 'a, G>
where
    G: Graph + 'a,
{
    dfs: &'d mut Dfs<'a, G>,
    root: Option<Vertex>,
}

impl<'d, 'a, G> Iterator for DfsRooted<'d, 'a, G>
where
    G: Graph + 'a,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return self.dfs.discover(root);
        }

        while let Some(top) = self.dfs.stack.last_mut() {
            match top.next() {
                Some(next) if !self.dfs.is_visited(next) => return self.dfs.discover(next),
                Some(_) => {}
                None => {
                    self.dfs.stack.pop();
                }
            }
        }

        None
    }
}
