//! Seeded synthetic graphs for benchmarks.
//!
//! Every graph starts from a random spanning tree so it is connected, then
//! gains `extra_edges_per_vertex * vertex_count` random edges. Weights are
//! drawn uniformly from `1..=max_weight`. The same configuration always
//! yields the same graph.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use waymark_core::{Graph, Weight};

use crate::params::GraphBenchParams;

/// Configuration for [`generate_graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Largest edge weight.
    pub max_weight: Weight,
    /// Seed for the generator.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Builds a configuration for `params` with the given weight bound and seed.
    #[must_use]
    pub const fn for_params(params: GraphBenchParams, max_weight: Weight, seed: u64) -> Self {
        Self {
            vertex_count: params.vertex_count,
            extra_edges_per_vertex: params.extra_edges_per_vertex,
            max_weight,
            seed,
        }
    }
}

/// Errors raised for unusable generator configurations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
}

/// Generates a connected random graph over `usize` labels.
///
/// # Errors
/// Returns [`GenerationError`] when the vertex count or weight bound is zero.
///
/// # Examples
/// ```
/// use waymark_benches::generation::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges_per_vertex: 2,
///     max_weight: 100,
///     seed: 7,
/// };
/// let graph = generate_graph(&config)?;
/// assert_eq!(graph.vertex_count(), 10);
/// # Ok::<(), waymark_benches::generation::GenerationError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph<usize>, GenerationError> {
    if config.vertex_count == 0 {
        return Err(GenerationError::ZeroVertices);
    }
    if config.max_weight == 0 {
        return Err(GenerationError::ZeroMaxWeight);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new();
    graph.add_vertex(0);
    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(1..=config.max_weight);
        graph.add_edge(parent, vertex, weight);
    }

    let extra = config
        .vertex_count
        .saturating_mul(config.extra_edges_per_vertex);
    for _ in 0..extra {
        let source = rng.gen_range(0..config.vertex_count);
        let target = rng.gen_range(0..config.vertex_count);
        let weight = rng.gen_range(1..=config.max_weight);
        graph.add_edge(source, target, weight);
    }
    Ok(graph)
}
