//! Edge costs.

/// Cost attached to an edge.
///
/// Legal costs are non-negative. The negative value [`NO_COST`] is reserved
/// for edges that were added without a cost.
pub type Cost = i64;

/// Cost reported for edges added without a cost and for absent edges.
pub const NO_COST: Cost = -1;

/// Returns the cost if it is a real one, i.e., not [`NO_COST`].
///
/// # Examples
///
/// ```
/// use fixgraph::core::cost::{declared, NO_COST};
///
/// assert_eq!(declared(7), Some(7));
/// assert_eq!(declared(NO_COST), None);
/// ```
pub fn declared(cost: Cost) -> Option<Cost> {
    (cost != NO_COST).then_some(cost)
}
