//! Disjoint-set forest backing Kruskal's cycle checks.
//!
//! Set nodes live in an arena indexed by the order in which vertices were
//! registered, so `find` and `union` never hash more than the two labels
//! they are given. Unions are by rank. Path compression is optional and is
//! selected once per forest via [`PathCompression`]; the compressing walk is
//! iterative so degenerate chains cannot exhaust the stack.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{UnionFindError, describe};


/// Selects how [`DisjointSet::find`] treats the chains it walks.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PathCompression {
    /// Walk to the root without touching parent links.
    #[default]
    Disabled,
    /// Repoint every visited node directly at the root.
    Enabled,
}

impl PathCompression {
    /// Both modes, uncompressed first.
    pub const ALL: [Self; 2] = [Self::Disabled, Self::Enabled];

    /// Returns a short label for reports and log fields.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Disabled => "uncompressed",
            Self::Enabled => "compressed",
        }
    }
}

impl fmt::Display for PathCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct SetNode {
    parent: usize,
    rank: u32,
}

/// A forest of disjoint sets over vertex labels.
///
/// # Examples
/// ```
/// use waymark_core::{DisjointSet, PathCompression};
///
/// let mut sets = DisjointSet::new(PathCompression::Enabled);
/// for vertex in ["a", "b", "c"] {
///     sets.make_set(vertex)?;
/// }
/// assert!(sets.union(&"a", &"b")?);
/// assert!(!sets.union(&"b", &"a")?);
/// assert_eq!(sets.set_count(), 2);
/// # Ok::<(), waymark_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<V> {
    nodes: Vec<SetNode>,
    labels: Vec<V>,
    slots: HashMap<V, usize>,
    compression: PathCompression,
    sets: usize,
}

impl<V: Clone + Eq + Hash + fmt::Debug> DisjointSet<V> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new(compression: PathCompression) -> Self {
        Self::with_capacity(compression, 0)
    }

    /// Creates an empty forest with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(compression: PathCompression, capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            compression,
            sets: 0,
        }
    }

    /// Registers `vertex` as a singleton set.
    ///
    /// # Errors
    /// Returns [`UnionFindError::DuplicateVertex`] when `vertex` already owns
    /// a node.
    pub fn make_set(&mut self, vertex: V) -> Result<(), UnionFindError> {
        if self.slots.contains_key(&vertex) {
            return Err(UnionFindError::DuplicateVertex {
                vertex: describe(&vertex),
            });
        }
        let slot = self.nodes.len();
        self.nodes.push(SetNode {
            parent: slot,
            rank: 0,
        });
        self.labels.push(vertex.clone());
        self.slots.insert(vertex, slot);
        self.sets += 1;
        Ok(())
    }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// With [`PathCompression::Enabled`] every node on the walked chain is
    /// repointed at the root; ranks are left untouched.
    ///
    /// # Errors
    /// Returns [`UnionFindError::UnknownVertex`] for unregistered vertices.
    pub fn find(&mut self, vertex: &V) -> Result<&V, UnionFindError> {
        let slot = self.slot_of(vertex)?;
        let root = self.root_of(slot);
        Ok(&self.labels[root])
    }

    /// Returns the representative of `vertex` without modifying the forest,
    /// regardless of the configured compression mode.
    ///
    /// # Errors
    /// Returns [`UnionFindError::UnknownVertex`] for unregistered vertices.
    pub fn find_without_compression(&self, vertex: &V) -> Result<&V, UnionFindError> {
        let slot = self.slot_of(vertex)?;
        Ok(&self.labels[self.walk_to_root(slot)])
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both were already in the same set. The root of
    /// lower rank is attached below the other; on equal ranks the root of
    /// `left` goes below the root of `right`, whose rank grows by one.
    ///
    /// # Errors
    /// Returns [`UnionFindError::UnknownVertex`] for unregistered vertices.
    pub fn union(&mut self, left: &V, right: &V) -> Result<bool, UnionFindError> {
        let left_slot = self.slot_of(left)?;
        let right_slot = self.slot_of(right)?;
        let left_root = self.root_of(left_slot);
        let right_root = self.root_of(right_slot);
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.nodes[left_root].rank;
        let right_rank = self.nodes[right_root].rank;
        if left_rank > right_rank {
            self.nodes[right_root].parent = left_root;
        } else {
            self.nodes[left_root].parent = right_root;
            if left_rank == right_rank {
                self.nodes[right_root].rank = right_rank.saturating_add(1);
            }
        }
        self.sets -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Errors
    /// Returns [`UnionFindError::UnknownVertex`] for unregistered vertices.
    pub fn connected(&mut self, left: &V, right: &V) -> Result<bool, UnionFindError> {
        let left_slot = self.slot_of(left)?;
        let right_slot = self.slot_of(right)?;
        Ok(self.root_of(left_slot) == self.root_of(right_slot))
    }

    fn slot_of(&self, vertex: &V) -> Result<usize, UnionFindError> {
        self.slots
            .get(vertex)
            .copied()
            .ok_or_else(|| UnionFindError::UnknownVertex {
                vertex: describe(vertex),
            })
    }
}

impl<V> DisjointSet<V> {
    /// Returns the compression mode chosen at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn compression(&self) -> PathCompression { self.compression }

    /// Returns the number of registered vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns `true` when no vertex has been registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn set_count(&self) -> usize { self.sets }

    /// Rank of the root above the first registered vertex.
    ///
    /// Diagnostic only: walks one chain without compressing it.
    #[must_use]
    pub fn root_rank(&self) -> Option<u32> {
        if self.nodes.is_empty() {
            return None;
        }
        Some(self.nodes[self.walk_to_root(0)].rank)
    }

    /// Longest parent chain over all nodes. O(n · height); diagnostic only.
    #[must_use]
    pub fn height(&self) -> usize {
        (0..self.nodes.len())
            .map(|slot| self.depth(slot))
            .max()
            .unwrap_or(0)
    }

    fn depth(&self, mut slot: usize) -> usize {
        let mut depth = 0;
        while self.nodes[slot].parent != slot {
            slot = self.nodes[slot].parent;
            depth += 1;
        }
        depth
    }

    fn walk_to_root(&self, mut slot: usize) -> usize {
        while self.nodes[slot].parent != slot {
            slot = self.nodes[slot].parent;
        }
        slot
    }

    fn root_of(&mut self, slot: usize) -> usize {
        match self.compression {
            PathCompression::Disabled => self.walk_to_root(slot),
            PathCompression::Enabled => self.compress(slot),
        }
    }

    fn compress(&mut self, slot: usize) -> usize {
        let root = self.walk_to_root(slot);
        let mut current = slot;
        while current != root {
            let next = self.nodes[current].parent;
            self.nodes[current].parent = root;
            current = next;
        }
        root
    }
}
