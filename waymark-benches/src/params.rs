//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the spanning path.
    pub extra_edges_per_vertex: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},extra={}",
            self.vertex_count, self.extra_edges_per_vertex
        )
    }
}
