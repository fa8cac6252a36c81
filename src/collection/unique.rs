//! Unordered unique collection with an explicitly managed backing buffer.
//!
//! This module provides [`UniqueCollection`], a mutable, duplicate-free
//! container for equality-comparable elements. Unlike a hashed set, it
//! assumes nothing about its elements beyond equality: membership is a
//! linear scan, and removal swaps the last live element into the vacated
//! slot rather than shifting the tail.
//!
//! # Overview
//!
//! The collection owns a single contiguous buffer. Only the prefix holding
//! the live elements is meaningful; the buffer starts at a fixed capacity
//! (10 by default) and is replaced by one twice as large exactly when an
//! insertion would overflow it. Capacity never shrinks: the doubling policy
//! trades memory reclamation for amortized O(1) appends, and the trade-off
//! is part of the type's contract, not an accident of the implementation.
//!
//! Because removal relocates the last live element, the order in which
//! `iter` yields elements can change across mutations. Order is an
//! implementation artifact; callers must not rely on it.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity                         |
//! |--------------|------------------------------------|
//! | `insert`     | O(n) scan + amortized O(1) append  |
//! | `remove`     | O(n) scan + O(1) swap              |
//! | `contains`   | O(n)                               |
//! | `len`        | O(1)                               |
//! | `is_empty`   | O(1)                               |
//! | `capacity`   | O(1)                               |
//! | `iter`       | O(1) + O(n) traversal              |
//!
//! # Examples
//!
//! ```rust
//! use unicoll::collection::UniqueCollection;
//!
//! let mut collection = UniqueCollection::new();
//! assert!(collection.is_empty());
//!
//! // Insertion reports whether the element was actually added
//! assert!(collection.insert("a"));
//! assert!(collection.insert("b"));
//! assert!(!collection.insert("a")); // duplicate, collection unchanged
//! assert_eq!(collection.len(), 2);
//!
//! // Removal reports whether the element was present
//! assert!(collection.remove("a"));
//! assert!(!collection.remove("a"));
//! assert_eq!(collection.len(), 1);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The number of slots allocated when a collection is created with
/// [`UniqueCollection::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A snapshot of a single backing-buffer replacement.
///
/// Delivered to the observer registered with
/// [`UniqueCollection::set_growth_observer`] after the live elements have
/// been copied into the new buffer and the old buffer discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthEvent {
    /// Capacity of the buffer that was just discarded.
    pub previous_capacity: usize,
    /// Capacity of the replacement buffer, always `2 * previous_capacity`.
    pub capacity: usize,
    /// Number of live elements copied into the replacement buffer.
    pub len: usize,
}

/// Callback invoked after each buffer replacement.
///
/// Shared behind `Arc` so that clones of a collection report growth to the
/// same observer.
type GrowthObserver = Arc<dyn Fn(GrowthEvent) + Send + Sync>;

/// An unordered, duplicate-free collection of equality-comparable elements.
///
/// The collection guarantees that no two stored elements compare equal.
/// Elements only need `Eq`; no hashing or ordering capability is required,
/// so lookups are linear scans over the live prefix of the buffer.
///
/// # Type Parameters
///
/// * `T` - The element type. Mutating and querying operations require
///   `T: Eq`.
///
/// # Examples
///
/// ```rust
/// use unicoll::collection::UniqueCollection;
///
/// let mut collection: UniqueCollection<i32> = (0..5).collect();
/// assert_eq!(collection.len(), 5);
///
/// collection.extend(3..8); // 3 and 4 are duplicates and are dropped
/// assert_eq!(collection.len(), 8);
/// ```
pub struct UniqueCollection<T> {
    /// Live elements occupy `buffer[..buffer.len()]`. The allocation always
    /// holds at least `capacity` slots.
    buffer: Vec<T>,
    /// Logical capacity under the doubling policy. Tracked separately from
    /// the allocation so growth follows the stated policy rather than the
    /// allocator's reservation heuristics.
    capacity: usize,
    observer: Option<GrowthObserver>,
}

impl<T> UniqueCollection<T> {
    /// Creates an empty collection with the default capacity of
    /// [`DEFAULT_CAPACITY`] slots.
    ///
    /// The buffer is allocated eagerly; creation cannot fail short of
    /// allocator exhaustion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::{DEFAULT_CAPACITY, UniqueCollection};
    ///
    /// let collection: UniqueCollection<i32> = UniqueCollection::new();
    /// assert!(collection.is_empty());
    /// assert_eq!(collection.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty collection with the given initial capacity.
    ///
    /// A requested capacity of zero is clamped to one: the growth policy
    /// doubles the current capacity, so it must start positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let collection: UniqueCollection<i32> = UniqueCollection::with_capacity(4);
    /// assert_eq!(collection.capacity(), 4);
    ///
    /// let clamped: UniqueCollection<i32> = UniqueCollection::with_capacity(0);
    /// assert_eq!(clamped.capacity(), 1);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            observer: None,
        }
    }

    /// Returns the number of live elements in the collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::new();
    /// collection.insert(1);
    /// collection.insert(2);
    /// assert_eq!(collection.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the collection contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::new();
    /// assert!(collection.is_empty());
    /// collection.insert(42);
    /// assert!(!collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the current capacity of the backing buffer.
    ///
    /// Capacity only ever increases, and only by doubling when an insertion
    /// would otherwise overflow. There is no shrink-on-removal policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::with_capacity(2);
    /// collection.insert(1);
    /// collection.insert(2);
    /// assert_eq!(collection.capacity(), 2);
    ///
    /// collection.insert(3);
    /// assert_eq!(collection.capacity(), 4);
    /// ```
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an iterator over references to the live elements.
    ///
    /// The traversal is restartable (each call re-scans current state) and
    /// yields elements in their current buffer order, which carries no
    /// guarantee: removals relocate elements, so the order observed here can
    /// change across mutations and must not be relied upon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let collection: UniqueCollection<i32> = (1..=3).collect();
    /// let mut elements: Vec<i32> = collection.iter().copied().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> UniqueCollectionIterator<'_, T> {
        UniqueCollectionIterator {
            inner: self.buffer.iter(),
        }
    }

    /// Registers a callback invoked after every buffer replacement.
    ///
    /// The collection performs no logging of its own; a host that wants to
    /// observe growth (for telemetry or debugging) injects it here. Clones
    /// of the collection share the registered observer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let growths = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&growths);
    ///
    /// let mut collection = UniqueCollection::with_capacity(1);
    /// collection.set_growth_observer(move |_event| {
    ///     counter.fetch_add(1, Ordering::Relaxed);
    /// });
    ///
    /// collection.insert(1);
    /// collection.insert(2); // 1 -> 2
    /// collection.insert(3); // 2 -> 4
    /// assert_eq!(growths.load(Ordering::Relaxed), 2);
    /// ```
    pub fn set_growth_observer(&mut self, observer: impl Fn(GrowthEvent) + Send + Sync + 'static) {
        self.observer = Some(Arc::new(observer));
    }

    /// Removes a previously registered growth observer, if any.
    pub fn clear_growth_observer(&mut self) {
        self.observer = None;
    }

    /// Replaces the backing buffer with one twice as large.
    ///
    /// The live elements are moved into the new buffer in their current
    /// order before the old buffer is discarded; if allocating the new
    /// buffer fails, the collection has not yet been touched and remains in
    /// its pre-growth state.
    fn grow(&mut self) {
        let previous_capacity = self.capacity;
        let capacity = previous_capacity * 2;
        let mut replacement = Vec::with_capacity(capacity);
        replacement.append(&mut self.buffer);
        self.buffer = replacement;
        self.capacity = capacity;
        if let Some(observer) = &self.observer {
            observer(GrowthEvent {
                previous_capacity,
                capacity,
                len: self.buffer.len(),
            });
        }
    }
}

impl<T: Eq> UniqueCollection<T> {
    /// Returns the index of the first live element equal to `element`, or
    /// `None` if no element matches.
    ///
    /// Shared primitive behind `contains` and `remove`: a first-match linear
    /// scan over the live prefix.
    fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.buffer.iter().position(|item| item.borrow() == element)
    }

    /// Returns `true` if the collection contains an element equal to
    /// `element`.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait. For example, with `UniqueCollection<String>`, you can
    /// search using `&str` directly without allocating a new `String`.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::new();
    /// collection.insert("hello".to_string());
    /// assert!(collection.contains("hello")); // no allocation needed
    /// assert!(!collection.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(element).is_some()
    }

    /// Inserts an element, returning `true` if it was absent and is now
    /// stored.
    ///
    /// If an equal element is already present the collection is left
    /// unchanged, the offered element is dropped, and `false` is returned.
    /// Duplicate insertion is an ordinary outcome, not an error.
    ///
    /// When the buffer is full and the element is new, the buffer is first
    /// replaced by one twice as large (see
    /// [`set_growth_observer`](Self::set_growth_observer)).
    ///
    /// # Complexity
    ///
    /// O(n) duplicate scan, then amortized O(1) append.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::new();
    /// assert!(collection.insert(42));
    /// assert!(!collection.insert(42));
    /// assert_eq!(collection.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        if self.position(&element).is_some() {
            return false;
        }

        if self.buffer.len() == self.capacity {
            self.grow();
        }

        self.buffer.push(element);
        true
    }

    /// Removes the element equal to `element`, returning `true` if it was
    /// present.
    ///
    /// Removal swaps the last live element into the vacated slot and shrinks
    /// the live prefix by one, so it is O(1) once the element is found. When
    /// the match is the last live slot the swap degenerates to popping it
    /// directly. Removing an absent element returns `false` and leaves the
    /// collection unchanged.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait, like [`contains`](Self::contains).
    ///
    /// # Complexity
    ///
    /// O(n) scan, O(1) swap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unicoll::collection::UniqueCollection;
    ///
    /// let mut collection: UniqueCollection<i32> = (1..=3).collect();
    /// assert!(collection.remove(&2));
    /// assert!(!collection.remove(&2));
    /// assert_eq!(collection.len(), 2);
    /// assert!(collection.contains(&1));
    /// assert!(collection.contains(&3));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.position(element) {
            Some(index) => {
                self.buffer.swap_remove(index);
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to the elements of a [`UniqueCollection`].
pub struct UniqueCollectionIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for UniqueCollectionIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for UniqueCollectionIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`UniqueCollection`].
pub struct UniqueCollectionIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for UniqueCollectionIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for UniqueCollectionIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for UniqueCollection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for UniqueCollection<T> {
    /// Clones the elements into a fresh buffer of the same capacity. The
    /// growth observer handle is shared, not duplicated.
    fn clone(&self) -> Self {
        let mut buffer = Vec::with_capacity(self.capacity);
        buffer.extend(self.buffer.iter().cloned());
        Self {
            buffer,
            capacity: self.capacity,
            observer: self.observer.clone(),
        }
    }
}

impl<T: Eq> FromIterator<T> for UniqueCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<T: Eq> Extend<T> for UniqueCollection<T> {
    /// Inserts every yielded element, silently dropping duplicates.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for UniqueCollection<T> {
    type Item = T;
    type IntoIter = UniqueCollectionIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        UniqueCollectionIntoIterator {
            inner: self.buffer.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a UniqueCollection<T> {
    type Item = &'a T;
    type IntoIter = UniqueCollectionIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq> PartialEq for UniqueCollection<T> {
    /// Set equality: same number of elements and every element of `self`
    /// present in `other`, regardless of buffer order. Capacity and observer
    /// do not participate.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        for element in self {
            if !other.contains(element) {
                return false;
            }
        }

        true
    }
}

impl<T: Eq> Eq for UniqueCollection<T> {}

impl<T: fmt::Debug> fmt::Debug for UniqueCollection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UniqueCollection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct UniqueCollectionVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> UniqueCollectionVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for UniqueCollectionVisitor<T>
where
    T: serde::Deserialize<'de> + Eq,
{
    type Value = UniqueCollection<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Element-wise insertion collapses duplicated wire entries.
        let mut collection = UniqueCollection::new();
        while let Some(element) = seq.next_element()? {
            collection.insert(element);
        }
        Ok(collection)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UniqueCollection<T>
where
    T: serde::Deserialize<'de> + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UniqueCollectionVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
