#![allow(dead_code)]

use fastrand::Rng;
use fixgraph::core::{Create, Vertex};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Random unordered pairs `(v, w)` with `w <= v`, each included with
/// probability `p`.
///
/// Skips over excluded pairs geometrically, so the cost is proportional to
/// the number of generated pairs.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 0,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w > *v && *v < n {
            *w -= *v + 1;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn fixgraph_random<G: Create>(vertex_count: usize, density: f32, rng: &mut Rng) -> G {
    let mut graph = G::with_vertex_count(vertex_count as Vertex).unwrap();
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((v, w)) = edges.next_edge(rng) {
        graph.add_bidirectional(v as Vertex, w as Vertex).unwrap();
    }

    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((v, w)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
    }

    graph
}
