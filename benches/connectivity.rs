mod common;

use common::{fixgraph_random, petgraph_random, RANDOM_SEED};
use divan::Bencher;
use fastrand::Rng;
use fixgraph::{
    algo::Components,
    generate::{EdgePolicy, RandomGraph},
    storage::{AdjMap, AdjMatrix},
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.001, 0.01, 0.1])]
fn fixgraph_adj_map_components<const N: usize>(bencher: Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = fixgraph_random::<AdjMap>(N, density, &mut rng);

    bencher.bench_local(|| Components::on(&graph).run().len());
}

#[divan::bench(consts = [100, 1000], args = [0.001, 0.01, 0.1])]
fn fixgraph_adj_matrix_components<const N: usize>(bencher: Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = fixgraph_random::<AdjMatrix>(N, density, &mut rng);

    bencher.bench_local(|| Components::on(&graph).run().len());
}

#[divan::bench(consts = [100, 1000], args = [0.001, 0.01, 0.1])]
fn petgraph_components<const N: usize>(bencher: Bencher, density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = petgraph_random(N, density, &mut rng);

    bencher.bench_local(|| petgraph::algo::connected_components(&graph));
}

#[divan::bench(consts = [100, 1000])]
fn fixgraph_adj_map_populate<const N: usize>() -> AdjMap {
    RandomGraph::new(N as i64)
        .policy(EdgePolicy::undirected(N))
        .seed(RANDOM_SEED)
        .build()
        .unwrap()
}

#[divan::bench(consts = [100, 1000])]
fn fixgraph_adj_matrix_populate<const N: usize>() -> AdjMatrix {
    RandomGraph::new(N as i64)
        .policy(EdgePolicy::undirected(N))
        .seed(RANDOM_SEED)
        .build()
        .unwrap()
}
