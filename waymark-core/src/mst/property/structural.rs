//! Structural invariants of a Kruskal spanning forest.
//!
//! For any generated graph, verifies:
//!
//! - **Acyclicity**: no selected edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **Components**: `C` matches the input graph's component count.
//! - **No self-loops**: `source != target` for every selected edge.
//! - **Compression independence**: both modes select identical edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::Graph;
use crate::mst::{CompressionComparison, SpanningForest, compare_compression};
use crate::test_utils::{GraphFixture, component_count, find_root};

/// Runs every structural check for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let comparison = compare_compression(&fixture.graph).map_err(|err| {
        TestCaseError::fail(format!(
            "kruskal failed: {err} (shape={:?}, vertices={}, edges={})",
            fixture.shape,
            fixture.graph.vertex_count(),
            fixture.graph.edge_count(),
        ))
    })?;

    validate_modes_agree(&comparison)?;
    let forest = comparison.compressed.forest();
    validate_no_self_loops(forest)?;
    validate_acyclicity(&fixture.graph, forest)?;
    validate_counts(&fixture.graph, forest)?;
    Ok(())
}

fn validate_modes_agree(comparison: &CompressionComparison) -> TestCaseResult {
    if comparison.uncompressed.forest() != comparison.compressed.forest() {
        return Err(TestCaseError::fail(format!(
            "compression changed the selection: uncompressed={:?}, compressed={:?}",
            comparison.uncompressed.forest(),
            comparison.compressed.forest(),
        )));
    }
    Ok(())
}

fn validate_no_self_loops(forest: &SpanningForest) -> TestCaseResult {
    match forest.edges().iter().position(|edge| edge.is_self_loop()) {
        Some(index) => Err(TestCaseError::fail(format!("edge {index} is a self-loop"))),
        None => Ok(()),
    }
}

fn validate_acyclicity(graph: &Graph<usize>, forest: &SpanningForest) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    for (index, edge) in forest.edges().iter().enumerate() {
        let left = find_root(&mut parent, edge.source().index());
        let right = find_root(&mut parent, edge.target().index());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {index}: ({}, {}) closes a cycle",
                edge.source().index(),
                edge.target().index(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_counts(graph: &Graph<usize>, forest: &SpanningForest) -> TestCaseResult {
    let expected_components = component_count(graph);
    if forest.component_count() != expected_components {
        return Err(TestCaseError::fail(format!(
            "component count {}, input has {expected_components}",
            forest.component_count(),
        )));
    }
    let expected_edges = graph.vertex_count() - expected_components;
    if forest.edges().len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected V - C = {expected_edges}",
            forest.edges().len(),
        )));
    }
    Ok(())
}
