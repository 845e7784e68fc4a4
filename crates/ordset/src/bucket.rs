//! Namespaces over one [`OrdSet`] by key prefixing.
//!
//! A bucket stores `key` physically as `name + key`. Because strings order by
//! their common prefix first, every key of a bucket sits in one contiguous run
//! of the set, so a bucket scan is a single locate followed by a linear walk.
//!
//! Bucket names are a usage contract, not a checked one: if one bucket's name
//! is a prefix of another's (`"user"` and `"users"`), the shorter bucket will
//! also see the longer bucket's keys.

use crate::cursor::Cursor;
use crate::set::{locate_prefix, OrdSet, Position};

/// A prefix-scoped view of a shared [`OrdSet`].
///
/// Holds no storage and no lock of its own; all calls go through the set's
/// lock. Cheap to create and clone.
#[derive(Clone)]
pub struct Bucket<'a> {
    name: String,
    set: &'a OrdSet,
}

impl<'a> Bucket<'a> {
    /// Creates a view of `set` whose keys are stored with `name` prefixed.
    /// An empty name sees the whole set. Same as [`OrdSet::bucket`].
    pub fn new(set: &'a OrdSet, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            set,
        }
    }

    /// The prefix this bucket applies to every key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn physical(&self, key: &str) -> String {
        let mut full = String::with_capacity(self.name.len() + key.len());
        full.push_str(&self.name);
        full.push_str(key);
        full
    }

    fn strip<'k>(&self, full: &'k str) -> Option<&'k str> {
        full.strip_prefix(self.name.as_str())
    }

    /// Inserts `key` into this bucket. Returns `true` if it was newly added.
    pub fn put(&self, key: &str) -> bool {
        self.set.put(&self.physical(key))
    }

    /// Returns `true` if `key` is stored in this bucket.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.set.has(&self.physical(key))
    }

    /// Removes `key` from this bucket. Returns `true` if it was present.
    pub fn delete(&self, key: &str) -> bool {
        self.set.delete(&self.physical(key))
    }

    /// The bucket's keys, greatest first, with the bucket name stripped.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let pages = self.set.pages.read();
        let Some(start) = locate_prefix(&pages, &self.name) else {
            return Vec::new();
        };
        pages[start.page..]
            .iter()
            .flat_map(|p| p.items())
            .skip(start.item)
            .map_while(|full| self.strip(full))
            .map(str::to_owned)
            .collect()
    }

    /// Locates the greatest key stored in this bucket.
    ///
    /// Returns the physical key (bucket name included) and its position, or
    /// `None` if the bucket is empty.
    #[must_use]
    pub fn last(&self) -> Option<(String, Position)> {
        let pages = self.set.pages.read();
        let at = locate_prefix(&pages, &self.name)?;
        let full = pages[at.page].get(at.item)?;
        if !full.starts_with(self.name.as_str()) {
            return None;
        }
        Some((full.to_owned(), at))
    }

    /// Steps from `at` to the next smaller key of this bucket.
    ///
    /// Returns the key with the bucket name stripped and its position, or
    /// `None` once the walk leaves the bucket's range or runs off the last
    /// page. `at` is a raw position: if the set was mutated since it was
    /// obtained, the step reads whatever now sits at the following offset.
    #[must_use]
    pub fn prev(&self, at: Position) -> Option<(String, Position)> {
        let pages = self.set.pages.read();
        let page = pages.get(at.page)?;
        let next = if at.item + 1 < page.len() {
            Position {
                page: at.page,
                item: at.item + 1,
            }
        } else if at.page + 1 < pages.len() {
            Position {
                page: at.page + 1,
                item: 0,
            }
        } else {
            return None;
        };
        let full = pages[next.page].get(next.item)?;
        self.strip(full).map(|key| (key.to_owned(), next))
    }

    /// Returns a cursor walking this bucket from its greatest key down.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.clone())
    }
}

impl std::fmt::Debug for Bucket<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bucket").field("name", &self.name).finish()
    }
}
