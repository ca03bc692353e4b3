//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! Every vertex is queued in a [`MinHeap`] keyed by its tentative distance.
//! The engine repeatedly extracts the closest vertex, fixes its distance and
//! relaxes its adjacency list, lowering neighbours' priorities in place with
//! `decrease_key`. Weights are unsigned, so an extracted distance is final.

use std::fmt;
use std::hash::Hash;

use tracing::{debug, instrument};

use crate::error::{GraphError, Result, describe};
use crate::graph::{Graph, Orientation, VertexId, Weight};
use crate::heap::MinHeap;

#[cfg(test)]
mod property;

/// A tentative or final path length.
///
/// Ordered so that every finite distance sorts before [`Distance::Infinite`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Distance {
    /// Reached with the given total weight.
    Finite(Weight),
    /// Not reached.
    Infinite,
}

impl Distance {
    /// Distance of the source from itself.
    pub const ZERO: Self = Self::Finite(0);

    /// Returns the finite value, if any.
    #[must_use]
    pub const fn finite(self) -> Option<Weight> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Infinite => None,
        }
    }

    /// Returns `true` for reached vertices.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

/// Configuration for [`dijkstra`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DijkstraConfig {
    orientation: Orientation,
}

impl DijkstraConfig {
    /// Creates the default configuration (undirected traversal).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orientation: Orientation::Undirected,
        }
    }

    /// Selects how edges are followed during relaxation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the configured orientation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn orientation(&self) -> Orientation { self.orientation }
}

/// Distances and predecessors computed from one source vertex.
#[derive(Clone, Debug)]
pub struct ShortestPaths<'g, V> {
    graph: &'g Graph<V>,
    source: VertexId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<VertexId>>,
}

impl<'g, V: Clone + Eq + Hash> ShortestPaths<'g, V> {
    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> &'g V {
        // The source id was resolved from this graph.
        &self.graph.vertices()[self.source.index()]
    }

    /// Returns the shortest distance to `vertex`, or `None` if the vertex is
    /// not part of the graph.
    #[must_use]
    pub fn distance(&self, vertex: &V) -> Option<Distance> {
        let id = self.graph.vertex_id(vertex)?;
        self.distances.get(id.index()).copied()
    }

    /// Returns the vertex preceding `vertex` on its shortest path.
    ///
    /// `None` for the source, for unreachable vertices and for vertices
    /// outside the graph.
    #[must_use]
    pub fn predecessor(&self, vertex: &V) -> Option<&'g V> {
        let id = self.graph.vertex_id(vertex)?;
        let previous = (*self.predecessors.get(id.index())?)?;
        self.graph.label(previous)
    }

    /// Returns `true` when `vertex` is reachable from the source.
    #[must_use]
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some_and(Distance::is_finite)
    }

    /// Returns the shortest path from the source to `vertex`, source first.
    ///
    /// `None` when `vertex` is unreachable or not part of the graph.
    #[must_use]
    pub fn path_to(&self, vertex: &V) -> Option<Vec<&'g V>> {
        let target = self.graph.vertex_id(vertex)?;
        self.path_ids(target)?
            .into_iter()
            .map(|id| self.graph.label(id))
            .collect()
    }

    /// Iterates over `(vertex, distance)` pairs in vertex insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'g V, Distance)> + '_ {
        self.graph
            .vertices()
            .iter()
            .zip(self.distances.iter().copied())
    }

    fn path_ids(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.distances.get(target.index())?.is_finite() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = *self.predecessors.get(current.index())? {
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes shortest distances from `source` to every vertex of `graph`.
///
/// # Errors
/// Returns [`GraphError::UnknownVertex`] when `source` is not in the graph
/// and [`GraphError::DistanceOverflow`] when a vertex is reachable only
/// through paths longer than `u64::MAX`. Overflowing paths to vertices with
/// a shorter finite route are ignored. Heap failures surface as [`GraphError::Heap`] and indicate a
/// broken invariant.
///
/// # Examples
/// ```
/// use waymark_core::{DijkstraConfig, Distance, Graph, dijkstra};
///
/// let graph: Graph<u32> = [(1, 2, 4), (2, 3, 1), (1, 3, 10)].into_iter().collect();
/// let paths = dijkstra(&graph, &1, DijkstraConfig::new())?;
/// assert_eq!(paths.distance(&3), Some(Distance::Finite(5)));
/// assert_eq!(paths.path_to(&3), Some(vec![&1, &2, &3]));
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[instrument(
    name = "shortest_path.dijkstra",
    err,
    skip(graph, source, config),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        orientation = ?config.orientation(),
    ),
)]
pub fn dijkstra<'g, V>(
    graph: &'g Graph<V>,
    source: &V,
    config: DijkstraConfig,
) -> Result<ShortestPaths<'g, V>>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    let source_id = graph
        .vertex_id(source)
        .ok_or_else(|| GraphError::UnknownVertex {
            vertex: describe(source),
        })?;
    let adjacency = graph.adjacency(config.orientation());

    let vertex_count = graph.vertex_count();
    let mut distances = vec![Distance::Infinite; vertex_count];
    let mut predecessors = vec![None; vertex_count];
    distances[source_id.index()] = Distance::ZERO;

    // Vertices offered a candidate distance beyond `u64::MAX`.
    let mut overflowed = vec![false; vertex_count];
    let mut heap = MinHeap::with_capacity(vertex_count);
    for vertex in graph.vertex_ids() {
        heap.insert(vertex, distances[vertex.index()])?;
    }

    while !heap.is_empty() {
        let (vertex, distance) = heap.extract_min()?.into_parts();
        // Everything still queued is unreachable.
        let Distance::Finite(base) = distance else {
            break;
        };
        for &(neighbour, weight) in adjacency.neighbours(vertex) {
            if !heap.contains(&neighbour) {
                continue;
            }
            // An overflowing candidate loses to every finite distance.
            let Some(candidate) = base.checked_add(weight) else {
                overflowed[neighbour.index()] = true;
                continue;
            };
            let candidate = Distance::Finite(candidate);
            if candidate < distances[neighbour.index()] {
                distances[neighbour.index()] = candidate;
                predecessors[neighbour.index()] = Some(vertex);
                heap.decrease_key(&neighbour, candidate)?;
            }
        }
    }

    if let Some(vertex) = graph
        .vertex_ids()
        .find(|vertex| overflowed[vertex.index()] && !distances[vertex.index()].is_finite())
    {
        return Err(GraphError::DistanceOverflow {
            vertex: graph
                .label(vertex)
                .map_or_else(|| describe(&vertex), describe),
        });
    }

    debug!(
        reached = distances.iter().filter(|distance| distance.is_finite()).count(),
        "shortest paths computed"
    );
    Ok(ShortestPaths {
        graph,
        source: source_id,
        distances,
        predecessors,
    })
}
