use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::{Cost, Graph, GraphError, Vertex};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("sum of degrees ({0}) is not equal to edge count ({1})")]
    DegreeSumMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("neighbors of {0} ({1}) are not as many as its degree ({2})")]
    NeighborsDegreeMismatch(Vertex, usize, usize),
    #[error("neighbor {1} of {0} is yielded more than once")]
    DuplicateNeighbor(Vertex, Vertex),
    #[error("neighbor {1} of {0} is yielded but the edge does not exist")]
    PhantomNeighbor(Vertex, Vertex),
    #[error("edge ({0},{1}) is yielded with cost {2} but its cost is {3}")]
    CostMismatch(Vertex, Vertex, Cost, Cost),
    #[error("graph rejected its own vertex: {0}")]
    Rejected(#[from] GraphError),
}

/// Checks that the counters of the graph agree with its edges.
pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: Graph,
{
    let mut degree_sum = 0;

    for v in 0..graph.vertex_count() as Vertex {
        let degree = graph.degree(v)?;
        degree_sum += degree;

        let mut seen = BTreeSet::new();
        for w in graph.neighbors(v)? {
            if !seen.insert(w) {
                return Err(ConsistencyCheckError::DuplicateNeighbor(v, w));
            }

            if !graph.has_edge(v, w)? {
                return Err(ConsistencyCheckError::PhantomNeighbor(v, w));
            }
        }

        if seen.len() != degree {
            return Err(ConsistencyCheckError::NeighborsDegreeMismatch(
                v,
                seen.len(),
                degree,
            ));
        }
    }

    if degree_sum != graph.edge_count() {
        return Err(ConsistencyCheckError::DegreeSumMismatch(
            degree_sum,
            graph.edge_count(),
        ));
    }

    let mut edges_count = 0;
    for (v, w, cost) in graph.edges() {
        edges_count += 1;

        let expected = graph.cost(v, w)?;
        if cost != expected {
            return Err(ConsistencyCheckError::CostMismatch(v, w, cost, expected));
        }
    }

    if edges_count != graph.edge_count() {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            edges_count,
            graph.edge_count(),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquivalenceCheckError {
    #[error("vertex counts differ: {0} vs {1}")]
    VertexCount(usize, usize),
    #[error("edge counts differ: {0} vs {1}")]
    EdgeCount(usize, usize),
    #[error("edge ({0},{1}) present: {2} vs {3}")]
    HasEdge(Vertex, Vertex, bool, bool),
    #[error("cost of ({0},{1}) differs: {2} vs {3}")]
    Cost(Vertex, Vertex, Cost, Cost),
    #[error("neighbors of {0} differ: {1:?} vs {2:?}")]
    Neighbors(Vertex, BTreeSet<Vertex>, BTreeSet<Vertex>),
    #[error("graph rejected its own vertex: {0}")]
    Rejected(#[from] GraphError),
}

/// Checks that two graphs, possibly of different storages, have the same
/// edges with the same costs. Neighbor order is ignored.
pub fn check_equivalent<G1, G2>(lhs: &G1, rhs: &G2) -> Result<(), EquivalenceCheckError>
where
    G1: Graph,
    G2: Graph,
{
    if lhs.vertex_count() != rhs.vertex_count() {
        return Err(EquivalenceCheckError::VertexCount(
            lhs.vertex_count(),
            rhs.vertex_count(),
        ));
    }

    if lhs.edge_count() != rhs.edge_count() {
        return Err(EquivalenceCheckError::EdgeCount(
            lhs.edge_count(),
            rhs.edge_count(),
        ));
    }

    let n = lhs.vertex_count() as Vertex;

    for v in 0..n {
        let lhs_neighbors = lhs.neighbors(v)?.collect::<BTreeSet<_>>();
        let rhs_neighbors = rhs.neighbors(v)?.collect::<BTreeSet<_>>();

        if lhs_neighbors != rhs_neighbors {
            return Err(EquivalenceCheckError::Neighbors(
                v,
                lhs_neighbors,
                rhs_neighbors,
            ));
        }

        for w in 0..n {
            let (lhs_has, rhs_has) = (lhs.has_edge(v, w)?, rhs.has_edge(v, w)?);
            if lhs_has != rhs_has {
                return Err(EquivalenceCheckError::HasEdge(v, w, lhs_has, rhs_has));
            }

            let (lhs_cost, rhs_cost) = (lhs.cost(v, w)?, rhs.cost(v, w)?);
            if lhs_cost != rhs_cost {
                return Err(EquivalenceCheckError::Cost(v, w, lhs_cost, rhs_cost));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AdjMap, AdjMatrix};

    #[test]
    fn equivalent_storages() {
        let mut map = AdjMap::new(4).unwrap();
        let mut matrix = AdjMatrix::new(4).unwrap();

        populate(&mut map);
        populate(&mut matrix);

        check_consistency(&map).unwrap();
        check_consistency(&matrix).unwrap();
        check_equivalent(&map, &matrix).unwrap();
    }

    #[test]
    fn detects_differences() {
        let mut map = AdjMap::new(3).unwrap();
        let mut matrix = AdjMatrix::new(3).unwrap();

        map.add_edge_with_cost(0, 1, 2).unwrap();
        matrix.add_edge_with_cost(0, 1, 3).unwrap();
        assert_eq!(
            check_equivalent(&map, &matrix),
            Err(EquivalenceCheckError::Cost(0, 1, 2, 3))
        );

        matrix.add_edge(1, 2).unwrap();
        assert_eq!(
            check_equivalent(&map, &matrix),
            Err(EquivalenceCheckError::EdgeCount(1, 2))
        );

        let other = AdjMap::new(4).unwrap();
        assert_eq!(
            check_equivalent(&map, &other),
            Err(EquivalenceCheckError::VertexCount(3, 4))
        );
    }

    fn populate<G: Graph>(graph: &mut G) {
        graph.add_edge(0, 1).unwrap();
        graph.add_bidirectional_with_cost(2, 3, 4).unwrap();
        graph.add_edge(3, 3).unwrap();
        graph.remove_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();
    }
}
