//! Kruskal minimum spanning forest construction.
//!
//! Edges are sorted by weight with a stable sort, so equal weights keep the
//! order in which they were added to the graph and the selected forest is
//! reproducible. Every edge is then offered to a [`DisjointSet`]; an edge
//! joins the forest exactly when its endpoints still have different roots.
//! The forest's final shape (root rank and height) is reported alongside the
//! result so compressed and uncompressed runs can be compared.

use tracing::{debug, instrument};

use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};
use crate::union_find::{DisjointSet, PathCompression};

#[cfg(test)]
mod property;

/// Configuration for [`kruskal`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KruskalConfig {
    compression: PathCompression,
}

impl KruskalConfig {
    /// Creates the default configuration (no path compression).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            compression: PathCompression::Disabled,
        }
    }

    /// Selects the path compression mode used by the disjoint-set forest.
    #[must_use]
    pub const fn with_compression(mut self, compression: PathCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Returns the configured path compression mode.
    #[must_use]
    #[rustfmt::skip]
    pub const fn compression(&self) -> PathCompression { self.compression }
}

/// The edges selected by Kruskal's algorithm.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: u128,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the selected edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u128 { self.total_weight }

    /// Returns the number of trees in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Shape of the disjoint-set forest left behind by a Kruskal run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ForestShape {
    /// Rank of the root above the graph's first vertex, if any.
    pub root_rank: Option<u32>,
    /// Longest parent chain in the forest.
    pub height: usize,
}

/// Result of a single [`kruskal`] run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KruskalOutcome {
    forest: SpanningForest,
    shape: ForestShape,
    compression: PathCompression,
}

impl KruskalOutcome {
    /// Returns the selected spanning forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest(&self) -> &SpanningForest { &self.forest }

    /// Returns the disjoint-set diagnostics.
    #[must_use]
    #[rustfmt::skip]
    pub const fn shape(&self) -> ForestShape { self.shape }

    /// Returns the compression mode the run used.
    #[must_use]
    #[rustfmt::skip]
    pub const fn compression(&self) -> PathCompression { self.compression }

    /// Consumes the outcome, returning the forest.
    #[must_use]
    pub fn into_forest(self) -> SpanningForest {
        self.forest
    }
}

/// Uncompressed and compressed runs over the same graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompressionComparison {
    /// Run without path compression.
    pub uncompressed: KruskalOutcome,
    /// Run with path compression.
    pub compressed: KruskalOutcome,
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are treated as undirected. Self-loops never join the forest.
///
/// # Errors
/// Returns [`crate::GraphError::UnionFind`] if the disjoint-set forest
/// rejects a vertex, which indicates an inconsistent graph.
///
/// # Examples
/// ```
/// use waymark_core::{Graph, KruskalConfig, kruskal};
///
/// let graph: Graph<u32> = [(1, 2, 4), (2, 3, 1), (1, 3, 10)].into_iter().collect();
/// let outcome = kruskal(&graph, KruskalConfig::new())?;
/// assert_eq!(outcome.forest().total_weight(), 5);
/// assert!(outcome.forest().is_tree());
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph, config),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        compression = %config.compression(),
    ),
)]
pub fn kruskal<V>(graph: &Graph<V>, config: KruskalConfig) -> Result<KruskalOutcome> {
    let mut sets = DisjointSet::with_capacity(config.compression(), graph.vertex_count());
    for vertex in graph.vertex_ids() {
        sets.make_set(vertex)?;
    }

    let mut edges = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    let mut total_weight: u128 = 0;
    for edge in sorted_by_weight(graph.edges()) {
        if sets.union(&edge.source(), &edge.target())? {
            total_weight += u128::from(edge.weight());
            edges.push(edge);
        }
    }

    let outcome = KruskalOutcome {
        forest: SpanningForest {
            edges,
            total_weight,
            component_count: sets.set_count(),
        },
        shape: shape_of(&sets),
        compression: config.compression(),
    };
    debug!(
        total_weight = outcome.forest.total_weight,
        selected = outcome.forest.edges.len(),
        components = outcome.forest.component_count,
        root_rank = outcome.shape.root_rank,
        height = outcome.shape.height,
        "spanning forest built"
    );
    Ok(outcome)
}

/// Runs [`kruskal`] once per [`PathCompression`] mode.
///
/// # Errors
/// Propagates any error returned by [`kruskal`].
pub fn compare_compression<V>(graph: &Graph<V>) -> Result<CompressionComparison> {
    let uncompressed = kruskal(
        graph,
        KruskalConfig::new().with_compression(PathCompression::Disabled),
    )?;
    let compressed = kruskal(
        graph,
        KruskalConfig::new().with_compression(PathCompression::Enabled),
    )?;
    Ok(CompressionComparison {
        uncompressed,
        compressed,
    })
}

fn shape_of(sets: &DisjointSet<VertexId>) -> ForestShape {
    ForestShape {
        root_rank: sets.root_rank(),
        height: sets.height(),
    }
}

#[cfg(feature = "parallel")]
fn sorted_by_weight(edges: &[Edge]) -> Vec<Edge> {
    use rayon::prelude::*;

    let mut sorted = edges.to_vec();
    // Stable: equal weights keep insertion order.
    sorted.par_sort_by_key(Edge::weight);
    sorted
}

#[cfg(not(feature = "parallel"))]
fn sorted_by_weight(edges: &[Edge]) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(Edge::weight);
    sorted
}
