//! # ordset - Paged Ordered String Set
//!
//! An in-memory set of unique strings kept in strict **descending** order,
//! stored as a sequence of fixed-capacity sorted pages instead of a tree.
//!
//! ## Architecture
//!
//! ```text
//! Bucket("user") ──┐
//! Bucket("item") ──┼──> OrdSet ── RwLock<Vec<Page>>
//! Bucket("")     ──┘       |
//!    |                     | locate: binary search over page max/min,
//!    v                     |         then binary search inside the page
//! Cursor (page, item)      v
//!                  [page 0] > [page 1] > ... > [page N]
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module       | Purpose                                                |
//! |--------------|--------------------------------------------------------|
//! | [`page`]     | Fixed-capacity descending page, split at the midpoint  |
//! | [`set`]      | `OrdSet`: page location, put / has / delete / keys     |
//! | [`bucket`]   | Prefix namespaces, bucket scan and positional lookup   |
//! | [`cursor`]   | Backward iteration over one bucket                     |
//!
//! ## Example
//!
//! ```rust
//! use ordset::OrdSet;
//!
//! let set = OrdSet::new();
//! set.put("a");
//! set.put("b");
//! assert_eq!(set.keys(), vec!["b", "a"]);
//!
//! let users = set.bucket("user");
//! users.put("rob");
//! users.put("bob");
//! assert_eq!(users.keys(), vec!["rob", "bob"]);
//! ```
//!
//! ## Bucket names
//!
//! A bucket stores `key` as `name + key` in the shared set. Choose names so
//! that no bucket name is a prefix of another bucket name holding data, or
//! the shorter bucket will see the longer one's keys.
pub mod bucket;
pub mod cursor;
pub mod page;
pub mod set;

pub use bucket::Bucket;
pub use cursor::{Cursor, CursorIter, CursorState};
pub use page::{PAGE_SIZE, PAGE_SLOTS, SPLIT_POINT};
pub use set::{OrdSet, Position, DEFAULT_CAPACITY};

#[cfg(test)]
mod tests;
