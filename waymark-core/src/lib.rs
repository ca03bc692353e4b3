//! Waymark core library.
//!
//! Provides a labelled weighted [`Graph`], a rank-based [`DisjointSet`] with
//! switchable path compression, an indexed [`MinHeap`] with `decrease_key`,
//! and the two algorithms built on them: Kruskal's minimum spanning forest
//! ([`kruskal`]) and Dijkstra's single-source shortest paths ([`dijkstra`]).
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge_list;
mod error;
mod graph;
mod heap;
mod mst;
mod shortest_path;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    edge_list::read_edge_list,
    error::{
        EdgeListError, EdgeListErrorCode, GraphError, GraphErrorCode, HeapError, HeapErrorCode,
        LineDefect, Result, UnionFindError, UnionFindErrorCode,
    },
    graph::{Edge, Graph, Orientation, VertexId, Weight},
    heap::{HeapEntry, MinHeap},
    mst::{
        CompressionComparison, ForestShape, KruskalConfig, KruskalOutcome, SpanningForest,
        compare_compression, kruskal,
    },
    shortest_path::{DijkstraConfig, Distance, ShortestPaths, dijkstra},
    union_find::{DisjointSet, PathCompression},
};
