//! Unit tests for `UniqueCollection`.
//!
//! These tests exercise the public API: uniqueness, membership, swap-based
//! removal, the doubling growth policy, and the standard trait surface.

use rstest::rstest;
use static_assertions::assert_impl_all;
use unicoll::collection::{DEFAULT_CAPACITY, UniqueCollection, UniqueCollectionIterator};

assert_impl_all!(UniqueCollection<i32>: Send, Sync, Clone);
assert_impl_all!(UniqueCollectionIterator<'static, i32>: ExactSizeIterator);

#[rstest]
fn test_new_creates_empty_collection() {
    let collection: UniqueCollection<i32> = UniqueCollection::new();
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
    assert_eq!(collection.capacity(), DEFAULT_CAPACITY);
}

#[rstest]
fn test_with_capacity_sets_initial_capacity() {
    let collection: UniqueCollection<i32> = UniqueCollection::with_capacity(32);
    assert!(collection.is_empty());
    assert_eq!(collection.capacity(), 32);
}

#[rstest]
fn test_insert_reports_whether_element_was_added() {
    let mut collection = UniqueCollection::new();
    assert!(collection.insert(42));
    assert!(!collection.insert(42));
    assert_eq!(collection.len(), 1);
    assert!(collection.contains(&42));
}

#[rstest]
fn test_duplicate_insert_leaves_collection_unchanged() {
    let mut collection = UniqueCollection::new();
    collection.insert("a");
    collection.insert("b");
    collection.insert("c");

    let before = collection.clone();
    assert!(!collection.insert("b"));
    assert_eq!(collection, before);
    assert_eq!(collection.len(), 3);
}

#[rstest]
fn test_contains_supports_borrowed_lookups() {
    let mut collection = UniqueCollection::new();
    collection.insert("hello".to_string());
    collection.insert("world".to_string());

    // &str lookup against String elements, no allocation required.
    assert!(collection.contains("hello"));
    assert!(collection.contains("world"));
    assert!(!collection.contains("missing"));
}

#[rstest]
fn test_remove_existing_element() {
    let mut collection: UniqueCollection<i32> = (1..=3).collect();

    assert!(collection.remove(&2));
    assert_eq!(collection.len(), 2);
    assert!(!collection.contains(&2));
    assert!(collection.contains(&1));
    assert!(collection.contains(&3));
}

#[rstest]
fn test_remove_absent_element_is_a_no_op() {
    let mut collection: UniqueCollection<i32> = (1..=3).collect();

    assert!(!collection.remove(&999));
    assert_eq!(collection.len(), 3);
    for value in 1..=3 {
        assert!(collection.contains(&value));
    }
}

#[rstest]
fn test_remove_then_reinsert() {
    let mut collection = UniqueCollection::new();
    collection.insert(7);
    assert!(collection.remove(&7));
    assert!(!collection.contains(&7));

    // Once removed, the element can be inserted again.
    assert!(collection.insert(7));
    assert!(collection.contains(&7));
    assert_eq!(collection.len(), 1);
}

#[rstest]
fn test_removing_non_last_element_preserves_survivors() {
    let mut collection: UniqueCollection<i32> = (0..10).collect();

    assert!(collection.remove(&3));
    assert_eq!(collection.len(), 9);
    assert!(!collection.contains(&3));
    for value in (0..10).filter(|value| *value != 3) {
        assert!(collection.contains(&value), "survivor {value} went missing");
    }
}

#[rstest]
fn test_is_empty_tracks_len_through_mutations() {
    let mut collection = UniqueCollection::new();
    assert!(collection.is_empty());

    collection.insert(1);
    assert!(!collection.is_empty());

    collection.remove(&1);
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
}

#[rstest]
fn test_growth_doubles_capacity_and_keeps_elements() {
    let mut collection = UniqueCollection::new();
    for value in 0..DEFAULT_CAPACITY {
        assert!(collection.insert(value));
    }
    assert_eq!(collection.len(), DEFAULT_CAPACITY);
    assert_eq!(collection.capacity(), DEFAULT_CAPACITY);

    // The eleventh distinct element forces exactly one doubling.
    assert!(collection.insert(DEFAULT_CAPACITY));
    assert_eq!(collection.capacity(), DEFAULT_CAPACITY * 2);
    assert_eq!(collection.len(), DEFAULT_CAPACITY + 1);
    for value in 0..=DEFAULT_CAPACITY {
        assert!(collection.contains(&value));
    }
}

// Mirrors the canonical walkthrough: a/b/c with a duplicate, remove "b",
// fill to capacity, then overflow into a doubled buffer.
#[rstest]
fn test_full_lifecycle_scenario() {
    let mut collection = UniqueCollection::new();
    assert_eq!(collection.capacity(), 10);

    collection.insert("a");
    collection.insert("b");
    collection.insert("c");
    assert_eq!(collection.len(), 3);

    assert!(!collection.insert("a"));
    assert_eq!(collection.len(), 3);

    assert!(collection.remove("b"));
    assert_eq!(collection.len(), 2);
    assert!(!collection.contains("b"));
    assert!(collection.contains("a"));
    assert!(collection.contains("c"));

    for element in ["d", "e", "f", "g", "h", "i", "j", "k"] {
        assert!(collection.insert(element));
    }
    assert_eq!(collection.len(), 10);
    assert_eq!(collection.capacity(), 10);

    assert!(collection.insert("l"));
    assert_eq!(collection.capacity(), 20);
    assert_eq!(collection.len(), 11);
    for element in ["a", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"] {
        assert!(collection.contains(element), "{element} lost during growth");
    }
}

#[rstest]
fn test_iter_yields_every_element_exactly_once() {
    let collection: UniqueCollection<i32> = (0..25).collect();

    let iterator = collection.iter();
    assert_eq!(iterator.len(), 25);

    let mut seen: Vec<i32> = collection.iter().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..25).collect::<Vec<i32>>());
}

#[rstest]
fn test_into_iterator_consumes_collection() {
    let collection: UniqueCollection<i32> = (0..5).collect();

    let mut owned: Vec<i32> = collection.into_iter().collect();
    owned.sort_unstable();
    assert_eq!(owned, vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn test_from_iterator_drops_duplicates() {
    let collection: UniqueCollection<i32> = [1, 2, 2, 3, 3, 3].into_iter().collect();
    assert_eq!(collection.len(), 3);
    for value in 1..=3 {
        assert!(collection.contains(&value));
    }
}

#[rstest]
fn test_extend_drops_duplicates() {
    let mut collection: UniqueCollection<i32> = (0..5).collect();
    collection.extend(3..8);
    assert_eq!(collection.len(), 8);
    for value in 0..8 {
        assert!(collection.contains(&value));
    }
}

#[rstest]
fn test_equality_ignores_element_order() {
    let forward: UniqueCollection<i32> = (0..10).collect();
    let backward: UniqueCollection<i32> = (0..10).rev().collect();
    assert_eq!(forward, backward);

    let shorter: UniqueCollection<i32> = (0..9).collect();
    assert_ne!(forward, shorter);
}

#[rstest]
fn test_clone_is_independent() {
    let mut collection: UniqueCollection<i32> = (0..5).collect();
    let cloned = collection.clone();

    collection.remove(&0);
    assert_eq!(collection.len(), 4);
    assert_eq!(cloned.len(), 5);
    assert!(cloned.contains(&0));
}

#[rstest]
fn test_default_matches_new() {
    let defaulted: UniqueCollection<i32> = UniqueCollection::default();
    assert!(defaulted.is_empty());
    assert_eq!(defaulted.capacity(), DEFAULT_CAPACITY);
}

#[rstest]
fn test_debug_formats_as_set() {
    let mut collection = UniqueCollection::new();
    collection.insert(1);
    assert_eq!(format!("{collection:?}"), "{1}");

    let empty: UniqueCollection<i32> = UniqueCollection::new();
    assert_eq!(format!("{empty:?}"), "{}");
}
