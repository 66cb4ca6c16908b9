use crate::core::Graph;

use super::{algo, dfs::dfs, Algo, Components};

pub struct ComponentsBuilder<'a, G, A> {
    graph: &'a G,
    algo: A,
}

impl Components {
    /// Starts the configuration of the analysis on `graph`.
    ///
    /// Finish it with `run`.
    pub fn on<G>(graph: &G) -> ComponentsBuilder<'_, G, algo::AnyAlgo>
    where
        G: Graph,
    {
        ComponentsBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, G, A> ComponentsBuilder<'a, G, A>
where
    G: Graph,
{
    /// Chooses the DFS algorithm.
    ///
    /// See [`Algo::Dfs`] for details.
    pub fn dfs(self) -> ComponentsBuilder<'a, G, algo::Dfs> {
        ComponentsBuilder {
            graph: self.graph,
            algo: algo::Dfs,
        }
    }

    /// Chooses the algorithm explicitly.
    pub fn using(self, algo: Algo) -> ComponentsBuilder<'a, G, algo::SpecificAlgo> {
        ComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(Some(algo)),
        }
    }

    /// Chooses the algorithm explicitly, or lets it be chosen automatically
    /// if `None`.
    pub fn using_opt(self, algo: Option<Algo>) -> ComponentsBuilder<'a, G, algo::SpecificAlgo> {
        ComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(algo),
        }
    }
}

impl<'a, G> ComponentsBuilder<'a, G, algo::AnyAlgo>
where
    G: Graph,
{
    /// Runs the analysis.
    pub fn run(self) -> Components {
        dfs(self.graph)
    }
}

impl<'a, G> ComponentsBuilder<'a, G, algo::Dfs>
where
    G: Graph,
{
    /// Runs the analysis.
    pub fn run(self) -> Components {
        dfs(self.graph)
    }
}

impl<'a, G> ComponentsBuilder<'a, G, algo::SpecificAlgo>
where
    G: Graph,
{
    /// Runs the analysis.
    pub fn run(self) -> Components {
        match self.algo.0 {
            Some(Algo::Dfs) => dfs(self.graph),
            None => dfs(self.graph),
        }
    }
}
