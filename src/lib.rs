//! # unicoll
//!
//! An unordered, duplicate-free collection for Rust.
//!
//! ## Overview
//!
//! This library provides [`UniqueCollection`](collection::UniqueCollection),
//! a mutable container of equality-comparable elements that never stores the
//! same element twice. Its backing buffer is managed explicitly: it starts at
//! a fixed capacity, doubles exactly when an insertion would overflow, and is
//! never shrunk. Removal relocates the last live element into the vacated
//! slot, so element order is an implementation artifact, not a contract.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for the collection
//!
//! ## Example
//!
//! ```rust
//! use unicoll::prelude::*;
//!
//! let mut collection = UniqueCollection::new();
//! assert!(collection.insert("a"));
//! assert!(!collection.insert("a")); // duplicates are rejected, not errors
//! assert!(collection.contains("a"));
//! assert!(collection.remove("a"));
//! assert!(collection.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use unicoll::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;
