//! Weighted graph model shared by the spanning-tree and shortest-path engines.
//!
//! Vertices are interned into dense [`VertexId`]s in order of first
//! appearance so the algorithms can index arenas and adjacency lists directly
//! instead of hashing labels on every step. Edges are keyed by the ordered
//! `(source, target)` pair as supplied; re-adding a key replaces its weight
//! in place.

use std::collections::HashMap;
use std::hash::Hash;


/// Non-negative edge weight.
pub type Weight = u64;

/// Dense identifier assigned to a vertex when it first joins a [`Graph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Returns the zero-based position of the vertex in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

/// A weighted edge between two interned vertices.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

impl Edge {
    /// Returns the endpoint listed first.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the endpoint listed second.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// How edges are followed when building adjacency lists.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// Every edge can be travelled in both directions.
    #[default]
    Undirected,
    /// Edges are only followed from the listed source to the listed target.
    AsListed,
}

/// A weighted graph over caller-chosen vertex labels.
///
/// # Examples
/// ```
/// use waymark_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 4);
/// graph.add_edge("b", "c", 1);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.weight(&"a", &"b"), Some(4));
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V> {
    labels: Vec<V>,
    ids: HashMap<V, VertexId>,
    edges: Vec<Edge>,
    edge_slots: HashMap<(VertexId, VertexId), usize>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            ids: HashMap::new(),
            edges: Vec::new(),
            edge_slots: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `vertex`, returning its id. Existing vertices keep their id.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        if let Some(&id) = self.ids.get(&vertex) {
            return id;
        }
        let id = VertexId(self.labels.len());
        self.labels.push(vertex.clone());
        self.ids.insert(vertex, id);
        id
    }

    /// Adds the edge `source -> target`, registering both endpoints.
    ///
    /// Returns the previous weight when the same ordered pair was already
    /// present; the edge keeps its original position in that case.
    pub fn add_edge(&mut self, source: V, target: V, weight: Weight) -> Option<Weight> {
        let source = self.add_vertex(source);
        let target = self.add_vertex(target);
        if let Some(&slot) = self.edge_slots.get(&(source, target)) {
            let edge = self.edges.get_mut(slot)?;
            let previous = edge.weight;
            edge.weight = weight;
            return Some(previous);
        }
        self.edge_slots.insert((source, target), self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        None
    }

    /// Looks up the id assigned to `vertex`.
    #[must_use]
    pub fn vertex_id(&self, vertex: &V) -> Option<VertexId> {
        self.ids.get(vertex).copied()
    }

    /// Returns the weight stored for the ordered pair `(source, target)`.
    #[must_use]
    pub fn weight(&self, source: &V, target: &V) -> Option<Weight> {
        let key = (self.vertex_id(source)?, self.vertex_id(target)?);
        let slot = *self.edge_slots.get(&key)?;
        self.edges.get(slot).map(Edge::weight)
    }
}

impl<V> Graph<V> {
    /// Returns the label registered under `id`.
    #[must_use]
    pub fn label(&self, id: VertexId) -> Option<&V> {
        self.labels.get(id.0)
    }

    /// Returns all vertex labels in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.labels }

    /// Returns all edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Iterates over every vertex id in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.labels.len()).map(VertexId)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.labels.len() }

    /// Returns the number of distinct edge keys.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Builds adjacency lists following `orientation`.
    pub(crate) fn adjacency(&self, orientation: Orientation) -> Adjacency {
        let mut lists = vec![Vec::new(); self.labels.len()];
        for edge in &self.edges {
            if let Some(list) = lists.get_mut(edge.source.0) {
                list.push((edge.target, edge.weight));
            }
            if orientation == Orientation::Undirected && !edge.is_self_loop() {
                if let Some(list) = lists.get_mut(edge.target.0) {
                    list.push((edge.source, edge.weight));
                }
            }
        }
        Adjacency { lists }
    }
}

impl<V: Clone + Eq + Hash> FromIterator<(V, V, Weight)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V, Weight)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V: Clone + Eq + Hash> Extend<(V, V, Weight)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V, Weight)>>(&mut self, iter: I) {
        for (source, target, weight) in iter {
            self.add_edge(source, target, weight);
        }
    }
}

/// Outgoing arcs per vertex, indexed by [`VertexId`].
#[derive(Clone, Debug)]
pub(crate) struct Adjacency {
    lists: Vec<Vec<(VertexId, Weight)>>,
}

impl Adjacency {
    pub(crate) fn neighbours(&self, vertex: VertexId) -> &[(VertexId, Weight)] {
        self.lists.get(vertex.0).map_or(&[], Vec::as_slice)
    }
}
