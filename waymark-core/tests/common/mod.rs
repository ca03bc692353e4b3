//! Shared graph fixtures for integration tests.

use std::io::Cursor;

use waymark_core::{Graph, read_edge_list};

/// Three vertices where the two-hop route beats the direct edge.
pub const TRIANGLE: &str = "1 2 4\n2 3 1\n1 3 10\n";

/// Two disconnected pairs.
pub const TWO_PAIRS: &str = "1 2 3\n3 4 5\n";

/// Parses `input` as an edge list over `u32` labels.
#[must_use]
pub fn load(input: &str) -> Graph<u32> {
    match read_edge_list(Cursor::new(input)) {
        Ok(graph) => graph,
        Err(err) => panic!("fixture must parse: {err}"),
    }
}
