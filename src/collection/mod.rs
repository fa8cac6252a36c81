//! Mutable unique-element collections.
//!
//! This module provides [`UniqueCollection`], an unordered container that
//! never stores two equal elements, backed by a contiguous buffer with an
//! explicit doubling growth policy.
//!
//! # Examples
//!
//! ```rust
//! use unicoll::collection::UniqueCollection;
//!
//! let mut collection = UniqueCollection::new();
//! assert!(collection.insert(1));
//! assert!(collection.insert(2));
//! assert!(!collection.insert(1)); // already present
//! assert_eq!(collection.len(), 2);
//!
//! assert!(collection.remove(&1));
//! assert!(!collection.contains(&1));
//! ```
//!
//! Growth is observable through an optional callback:
//!
//! ```rust
//! use unicoll::collection::UniqueCollection;
//!
//! let mut collection = UniqueCollection::with_capacity(2);
//! collection.set_growth_observer(|event| {
//!     assert_eq!(event.capacity, event.previous_capacity * 2);
//! });
//! collection.insert(1);
//! collection.insert(2);
//! collection.insert(3); // doubles the buffer, firing the observer
//! ```

mod unique;

pub use unique::DEFAULT_CAPACITY;
pub use unique::GrowthEvent;
pub use unique::UniqueCollection;
pub use unique::UniqueCollectionIntoIterator;
pub use unique::UniqueCollectionIterator;
