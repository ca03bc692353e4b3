//! Unit and property tests for the indexed min-heap.

use proptest::prelude::*;
use rstest::rstest;

use crate::error::HeapError;
use crate::test_utils::suite_proptest_config;

use super::MinHeap;

/// Asserts the min-heap property and that the slot table mirrors the array.
fn check_invariants<P: Ord + std::fmt::Debug>(heap: &MinHeap<u32, P>) {
    for (slot, entry) in heap.entries.iter().enumerate() {
        assert_eq!(heap.slots.get(entry.key()), Some(&slot), "stale slot");
        if slot > 0 {
            let parent = &heap.entries[(slot - 1) / 2];
            assert!(parent.priority() <= entry.priority(), "heap order broken");
        }
    }
    assert_eq!(heap.slots.len(), heap.entries.len());
}

fn drain(heap: &mut MinHeap<u32, u64>) -> Vec<(u32, u64)> {
    let mut drained = Vec::new();
    while !heap.is_empty() {
        let entry = heap.extract_min().expect("non-empty heap must yield");
        check_invariants(heap);
        drained.push(entry.into_parts());
    }
    drained
}

#[test]
fn extract_from_empty_heap_fails() {
    let mut heap = MinHeap::<u32, u64>::new();
    assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
    assert!(heap.peek().is_none());
}

#[test]
fn extracts_in_priority_order() {
    let mut heap = MinHeap::with_capacity(5);
    for (key, priority) in [(0, 10), (1, 3), (2, 7), (3, 1), (4, 8)] {
        heap.insert(key, priority).expect("distinct keys");
        check_invariants(&heap);
    }
    assert_eq!(heap.peek().map(|entry| *entry.key()), Some(3));
    assert_eq!(
        drain(&mut heap),
        vec![(3, 1), (1, 3), (2, 7), (4, 8), (0, 10)]
    );
}

#[test]
fn decrease_key_moves_entry_to_root() {
    let mut heap = MinHeap::new();
    for key in 0..6_u32 {
        heap.insert(key, u64::from(key) * 10 + 10).expect("distinct keys");
    }
    heap.decrease_key(&5, 0).expect("key is queued");
    check_invariants(&heap);
    assert_eq!(heap.priority_of(&5), Some(&0));
    assert_eq!(heap.extract_min().map(|entry| entry.into_parts()), Ok((5, 0)));
}

#[test]
fn decrease_key_accepts_equal_priority() {
    let mut heap = MinHeap::new();
    heap.insert(1_u32, 4_u64).expect("distinct keys");
    heap.insert(2, 6).expect("distinct keys");
    heap.decrease_key(&2, 6).expect("equal priority is allowed");
    check_invariants(&heap);
    assert_eq!(heap.priority_of(&2), Some(&6));
}

#[rstest]
#[case::raised_priority(2, 9, HeapError::PriorityIncrease { key: "2".into() })]
#[case::unknown_key(7, 1, HeapError::UnknownKey { key: "7".into() })]
fn decrease_key_rejects_invalid_requests(
    #[case] key: u32,
    #[case] priority: u64,
    #[case] expected: HeapError,
) {
    let mut heap = MinHeap::new();
    heap.insert(1_u32, 4_u64).expect("distinct keys");
    heap.insert(2, 6).expect("distinct keys");
    assert_eq!(heap.decrease_key(&key, priority), Err(expected));
    assert_eq!(drain(&mut heap), vec![(1, 4), (2, 6)]);
}

#[test]
fn extracted_keys_are_forgotten() {
    let mut heap = MinHeap::new();
    heap.insert(1_u32, 1_u64).expect("distinct keys");
    heap.extract_min().expect("non-empty");
    assert!(!heap.contains(&1));
    assert!(matches!(
        heap.decrease_key(&1, 0),
        Err(HeapError::UnknownKey { .. })
    ));
    heap.insert(1, 5).expect("extracted keys may be queued again");
    assert_eq!(heap.len(), 1);
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut heap = MinHeap::new();
    heap.insert(1_u32, 1_u64).expect("distinct keys");
    assert_eq!(
        heap.insert(1, 0),
        Err(HeapError::DuplicateKey { key: "1".into() })
    );
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.priority_of(&1), Some(&1));
}

#[test]
fn equal_priorities_all_surface() {
    let mut heap = MinHeap::new();
    for key in 0..8_u32 {
        heap.insert(key, 3_u64).expect("distinct keys");
    }
    let mut keys: Vec<u32> = drain(&mut heap).into_iter().map(|(key, _)| key).collect();
    keys.sort_unstable();
    assert_eq!(keys, (0..8).collect::<Vec<_>>());
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn round_trip_yields_non_decreasing_priorities(
        priorities in proptest::collection::vec(0_u64..1_000, 0..64),
    ) {
        let mut heap = MinHeap::with_capacity(priorities.len());
        for (key, priority) in (0_u32..).zip(priorities.iter().copied()) {
            heap.insert(key, priority).expect("distinct keys");
        }
        let drained: Vec<u64> = drain(&mut heap).into_iter().map(|(_, p)| p).collect();
        let mut expected = priorities.clone();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn decrease_key_sequences_preserve_heap_order(
        initial in proptest::collection::vec(0_u64..1_000, 1..48),
        updates in proptest::collection::vec((any::<prop::sample::Index>(), 0_u64..1_000), 0..64),
    ) {
        let mut heap = MinHeap::new();
        let mut current = initial.clone();
        for (key, priority) in (0_u32..).zip(initial.iter().copied()) {
            heap.insert(key, priority).expect("distinct keys");
        }
        for (index, candidate) in updates {
            let slot = index.index(current.len());
            let key = u32::try_from(slot).expect("small key");
            let lowered = candidate.min(current[slot]);
            heap.decrease_key(&key, lowered).expect("lowering is allowed");
            current[slot] = lowered;
            check_invariants(&heap);
        }
        let drained: Vec<u64> = drain(&mut heap).into_iter().map(|(_, p)| p).collect();
        current.sort_unstable();
        prop_assert_eq!(drained, current);
    }
}
