use std::time::Instant;

use tracing::{debug, trace};

use crate::{
    core::{Graph, Vertex},
    visit::Dfs,
};

use super::Components;

pub fn dfs<G>(graph: &G) -> Components
where
    G: Graph,
{
    let started = Instant::now();
    let vertex_count = graph.vertex_count();

    let mut traversal = Dfs::new(graph);
    let mut sizes = Vec::new();

    for root in 0..vertex_count as Vertex {
        if traversal.is_visited(root) {
            continue;
        }

        let size = traversal
            .start(root)
            .expect("roots are vertices of the graph")
            .count();

        trace!(root, size, "component discovered");
        sizes.push(size);
    }

    let elapsed = started.elapsed();
    let components = Components {
        sizes,
        vertex_count,
        elapsed,
    };

    debug!(
        vertex_count,
        components = components.len(),
        largest = components.largest(),
        elapsed_us = elapsed.as_micros() as u64,
        "connectivity analysis finished"
    );

    components
}
