//! Command-line interface for the waymark graph tools.
//!
//! `mst` builds a minimum spanning forest from an edge-list file and reports
//! how each path-compression mode shaped the disjoint-set forest. The
//! `shortest-path` command runs Dijkstra from one vertex and prints every
//! vertex's distance and route.

mod commands;

pub use commands::{
    Cli, CliError, Command, CompressionChoice, ExecutionSummary, MstArgs, MstRun, MstSummary,
    OrientationChoice, PathRow, ShortestPathArgs, ShortestPathSummary, render_summary, run_cli,
};
