//! Exhaustive shortest-path oracle.
//!
//! Explores every simple path leaving the source and keeps the cheapest
//! total per endpoint. Exponential; only used on graphs produced by
//! `small_graph_strategy`.

use crate::graph::{Graph, Orientation, VertexId};
use crate::shortest_path::Distance;

/// Cheapest simple-path length from `source` to every vertex, indexed by id.
pub(super) fn brute_force_distances(
    graph: &Graph<usize>,
    source: VertexId,
    orientation: Orientation,
) -> Vec<Distance> {
    let mut arcs = vec![Vec::new(); graph.vertex_count()];
    for edge in graph.edges() {
        arcs[edge.source().index()].push((edge.target().index(), edge.weight()));
        if orientation == Orientation::Undirected {
            arcs[edge.target().index()].push((edge.source().index(), edge.weight()));
        }
    }

    let mut best = vec![Distance::Infinite; graph.vertex_count()];
    let mut on_path = vec![false; graph.vertex_count()];
    explore(&arcs, source.index(), 0, &mut on_path, &mut best);
    best
}

fn explore(
    arcs: &[Vec<(usize, u64)>],
    vertex: usize,
    length: u64,
    on_path: &mut [bool],
    best: &mut [Distance],
) {
    if Distance::Finite(length) < best[vertex] {
        best[vertex] = Distance::Finite(length);
    }
    on_path[vertex] = true;
    for &(next, weight) in &arcs[vertex] {
        if !on_path[next] {
            explore(arcs, next, length.saturating_add(weight), on_path, best);
        }
    }
    on_path[vertex] = false;
}
