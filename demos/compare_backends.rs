//! Builds the same random graph on both storages and compares how long it
//! takes to discover its components.
//!
//! Run with `RUST_LOG=fixgraph=debug cargo run --example compare_backends` to
//! see the library events.

use fixgraph::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const VERTEX_COUNT: i64 = 1000;

fn report(label: &str, components: &Components) {
    println!("{label}");
    println!("  number of components = {}", components.len());
    println!("  size of the largest component = {}", components.largest());
    println!("  tree edges = {}", components.tree_edges());
    println!("  time = {:?}", components.elapsed());
}

fn main() -> Result<(), GraphError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = fastrand::u64(..);
    tracing::info!(seed, vertex_count = VERTEX_COUNT, "generating random graphs");

    for (name, policy) in [
        ("directed attempts", EdgePolicy::attempts(VERTEX_COUNT as usize)),
        ("undirected edges", EdgePolicy::undirected(VERTEX_COUNT as usize)),
    ] {
        let generator = RandomGraph::new(VERTEX_COUNT).policy(policy).seed(seed);

        println!("== {name} ==");
        report("HASH", &generator.analyze::<AdjMap>()?);
        report("MATRIX", &generator.analyze::<AdjMatrix>()?);
    }

    Ok(())
}
