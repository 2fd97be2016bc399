use hashbrown::HashSet;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};

use crate::graph::{AdjacencyGraph, VertexId};

/// Parameters for seeded random-graph generation.
///
/// Generation is fully deterministic for a fixed set of parameters, so two
/// benchmark runs with the same seed traverse the same graph.
#[derive(Debug, Clone, Copy)]
pub struct RandomGraphParams {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub seed: u64,
}

impl RandomGraphParams {
    /// Generates an undirected graph with exactly `edge_count` distinct
    /// edges, endpoints sampled uniformly. Self-loops and duplicate edges
    /// are rejected and resampled.
    ///
    /// # Panics
    /// Panics if `edge_count` exceeds the number of distinct undirected
    /// edges that `vertex_count` vertices can carry.
    pub fn generate(&self) -> AdjacencyGraph {
        let max_edges = self.vertex_count * self.vertex_count.saturating_sub(1) / 2;
        assert!(
            self.edge_count <= max_edges,
            "cannot place {} distinct edges on {} vertices",
            self.edge_count,
            self.vertex_count
        );

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::with_capacity(self.edge_count);
        let mut edges: Vec<(VertexId, VertexId)> = Vec::with_capacity(self.edge_count);

        if self.edge_count > 0 {
            let endpoint_sampler = Uniform::new(0, self.vertex_count).unwrap();

            while edges.len() < self.edge_count {
                let a = endpoint_sampler.sample(&mut rng);
                let b = endpoint_sampler.sample(&mut rng);
                if a == b {
                    continue;
                }

                // store undirected edges normalized so (a, b) and (b, a)
                // count as the same edge
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    edges.push(key);
                }
            }
        }

        AdjacencyGraph::build(self.vertex_count, &edges)
            .expect("sampled endpoints are always in range")
    }
}
