//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use waymark_core::GraphError;

use crate::generation::GenerationError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// An algorithm rejected the generated graph.
    #[error("graph algorithm failed: {0}")]
    Graph(#[from] GraphError),
}
