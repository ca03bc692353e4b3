//! Indexed binary min-heap with decrease-key.
//!
//! Entries are stored in a `Vec` laid out as an implicit binary tree. A side
//! table maps every live key to its current array slot and is updated on each
//! swap, so `decrease_key` finds its entry in O(1) and finishes in O(log n).
//! Ties between equal priorities are resolved by heap shape alone; callers
//! must not rely on any particular order among them.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{HeapError, describe};

#[cfg(test)]
mod tests;

/// A key paired with its current priority.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeapEntry<K, P> {
    key: K,
    priority: P,
}

impl<K, P> HeapEntry<K, P> {
    /// Returns the entry's key.
    #[must_use]
    #[rustfmt::skip]
    pub const fn key(&self) -> &K { &self.key }

    /// Returns the entry's priority.
    #[must_use]
    #[rustfmt::skip]
    pub const fn priority(&self) -> &P { &self.priority }

    /// Splits the entry into `(key, priority)`.
    #[must_use]
    pub fn into_parts(self) -> (K, P) {
        (self.key, self.priority)
    }
}

/// Binary min-heap keyed by `K` and ordered by `P`.
///
/// # Examples
/// ```
/// use waymark_core::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert("far", 9)?;
/// heap.insert("near", 4)?;
/// heap.decrease_key(&"far", 1)?;
/// assert_eq!(heap.extract_min()?.into_parts(), ("far", 1));
/// assert_eq!(heap.extract_min()?.into_parts(), ("near", 4));
/// assert!(heap.extract_min().is_err());
/// # Ok::<(), waymark_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<K, P> {
    entries: Vec<HeapEntry<K, P>>,
    slots: HashMap<K, usize>,
}

impl<K, P> Default for MinHeap<K, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl<K, P> MinHeap<K, P>
where
    K: Clone + Eq + Hash + fmt::Debug,
    P: Ord,
{
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Appends `key` with `priority` and bubbles it towards the root.
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateKey`] when `key` is already queued.
    pub fn insert(&mut self, key: K, priority: P) -> Result<(), HeapError> {
        if self.slots.contains_key(&key) {
            return Err(HeapError::DuplicateKey {
                key: describe(&key),
            });
        }
        let slot = self.entries.len();
        self.slots.insert(key.clone(), slot);
        self.entries.push(HeapEntry { key, priority });
        self.bubble_up(slot);
        Ok(())
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] when nothing is queued.
    pub fn extract_min(&mut self) -> Result<HeapEntry<K, P>, HeapError> {
        let last = self
            .entries
            .len()
            .checked_sub(1)
            .ok_or(HeapError::EmptyHeap)?;
        self.swap(0, last);
        let entry = self.entries.pop().ok_or(HeapError::EmptyHeap)?;
        self.slots.remove(&entry.key);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(entry)
    }

    /// Lowers the priority of `key` and bubbles it towards the root.
    ///
    /// An equal priority is accepted and leaves the heap unchanged.
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownKey`] when `key` is not queued and
    /// [`HeapError::PriorityIncrease`] when `priority` exceeds the current
    /// one; the heap is left untouched in both cases.
    pub fn decrease_key(&mut self, key: &K, priority: P) -> Result<(), HeapError> {
        let slot = *self
            .slots
            .get(key)
            .ok_or_else(|| HeapError::UnknownKey { key: describe(key) })?;
        let entry = &mut self.entries[slot];
        if priority > entry.priority {
            return Err(HeapError::PriorityIncrease { key: describe(key) });
        }
        entry.priority = priority;
        self.bubble_up(slot);
        Ok(())
    }

    /// Returns the current priority of `key`, if queued.
    #[must_use]
    pub fn priority_of(&self, key: &K) -> Option<&P> {
        let slot = *self.slots.get(key)?;
        self.entries.get(slot).map(HeapEntry::priority)
    }

    /// Returns `true` when `key` is queued.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    fn bubble_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].priority <= self.entries[slot].priority {
                break;
            }
            self.swap(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.entries[right].priority < self.entries[left].priority
            {
                right
            } else {
                left
            };
            if self.entries[child].priority >= self.entries[slot].priority {
                break;
            }
            self.swap(child, slot);
            slot = child;
        }
    }

    fn swap(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }
        self.entries.swap(first, second);
        if let Some(slot) = self.slots.get_mut(&self.entries[first].key) {
            *slot = first;
        }
        if let Some(slot) = self.slots.get_mut(&self.entries[second].key) {
            *slot = second;
        }
    }
}

impl<K, P> MinHeap<K, P> {
    /// Returns the entry with the smallest priority without removing it.
    #[must_use]
    #[rustfmt::skip]
    pub fn peek(&self) -> Option<&HeapEntry<K, P>> { self.entries.first() }

    /// Returns the number of queued entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` when nothing is queued.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
