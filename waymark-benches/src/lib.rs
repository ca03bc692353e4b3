//! Benchmark support crate for waymark.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for Kruskal's spanning forest builder and Dijkstra's shortest
//! paths.

pub mod error;
pub mod generation;
pub mod params;
