//! Exhaustive spanning-forest oracle.
//!
//! Enumerates every edge subset of a small graph, keeps the ones that form a
//! spanning forest (acyclic, same component count as the input) and returns
//! the smallest total weight. Exponential in the edge count; only used on
//! graphs produced by `small_graph_strategy`.

use crate::graph::Graph;
use crate::test_utils::{component_count, find_root};

/// Minimum total weight over all spanning forests of `graph`.
pub(super) fn brute_force_minimum_weight(graph: &Graph<usize>) -> u128 {
    let edges = graph.edges();
    assert!(edges.len() <= 16, "oracle is exponential in edge count");
    let target_components = component_count(graph);
    let wanted = graph.vertex_count() - target_components;

    let mut best: Option<u128> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
        let mut total: u128 = 0;
        let mut acyclic = true;
        for (bit, edge) in edges.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }
            let left = find_root(&mut parent, edge.source().index());
            let right = find_root(&mut parent, edge.target().index());
            if left == right {
                acyclic = false;
                break;
            }
            parent[right] = left;
            total += u128::from(edge.weight());
        }
        // An acyclic subset with `wanted` edges spans every component.
        if acyclic {
            best = Some(best.map_or(total, |current| current.min(total)));
        }
    }
    best.unwrap_or(0)
}
