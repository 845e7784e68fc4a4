//! Fixed-capacity page holding a contiguous, strictly descending run of keys.

/// Nominal page size. One slot is kept free, so a page holds at most
/// [`PAGE_SLOTS`] keys.
pub const PAGE_SIZE: usize = 256;

/// Maximum number of keys a page holds before it must be split.
pub const PAGE_SLOTS: usize = PAGE_SIZE - 1;

/// Index at which a full page is divided: the left page keeps
/// `[0, SPLIT_POINT)`, the right page takes `[SPLIT_POINT, PAGE_SLOTS)`.
pub const SPLIT_POINT: usize = PAGE_SLOTS / 2;

/// How a stored key is compared against a search key during location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Compare {
    /// Plain byte-wise comparison.
    Exact,
    /// Stored keys longer than the search key are truncated to its length
    /// first, so every key carrying the search key as a prefix compares equal.
    Prefix,
}

impl Compare {
    /// Returns `true` if `stored` sits at or below `key` in descending order.
    #[inline]
    pub(crate) fn at_or_below(self, stored: &str, key: &str) -> bool {
        let stored = stored.as_bytes();
        let key = key.as_bytes();
        match self {
            Compare::Exact => stored <= key,
            Compare::Prefix => &stored[..stored.len().min(key.len())] <= key,
        }
    }
}

/// A sorted run of keys, greatest first.
///
/// Pages are owned by [`OrdSet`](crate::OrdSet) and only ever mutated under
/// its write lock. `max()`/`min()` read the first and last slot, so they are
/// consistent with the contents after every mutation.
pub(crate) struct Page {
    items: Vec<String>,
}

impl Page {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::with_capacity(PAGE_SLOTS),
        }
    }

    fn from_items(items: Vec<String>) -> Self {
        debug_assert!(items.len() <= PAGE_SLOTS);
        debug_assert!(items.windows(2).all(|w| w[0] > w[1]));
        Self { items }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.items.len() >= PAGE_SLOTS
    }

    /// Greatest key in the page, or `""` for an empty page.
    #[inline]
    pub(crate) fn max(&self) -> &str {
        self.items.first().map_or("", String::as_str)
    }

    /// Smallest key in the page, or `""` for an empty page.
    #[inline]
    pub(crate) fn min(&self) -> &str {
        self.items.last().map_or("", String::as_str)
    }

    #[inline]
    pub(crate) fn items(&self) -> &[String] {
        &self.items
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&str> {
        self.items.get(idx).map(String::as_str)
    }

    /// First position whose key is `<= key`; `len()` if every key is greater.
    pub(crate) fn locate(&self, key: &str, mode: Compare) -> usize {
        self.items.partition_point(|item| !mode.at_or_below(item, key))
    }

    /// `Ok(i)` if `key` is stored at `i`, otherwise `Err(i)` with the
    /// insertion point that keeps the page descending.
    pub(crate) fn search(&self, key: &str) -> Result<usize, usize> {
        self.items.binary_search_by(|item| key.cmp(item.as_str()))
    }

    /// Inserts `key` at `idx`, which must come from a failed [`search`].
    ///
    /// [`search`]: Page::search
    pub(crate) fn insert_at(&mut self, idx: usize, key: String) {
        assert!(!self.is_full(), "insert into a full page");
        debug_assert!(idx == 0 || self.items[idx - 1] > key);
        debug_assert!(idx == self.items.len() || self.items[idx] < key);
        self.items.insert(idx, key);
    }

    /// Removes `key` if present, closing the gap. Returns whether it was removed.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        match self.search(key) {
            Ok(idx) => {
                self.items.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Moves the upper half of a full page into a new page, which becomes
    /// this page's right-hand (smaller keys) neighbour.
    pub(crate) fn split(&mut self) -> Page {
        assert!(self.is_full(), "split of a page that is not full");
        let mut right = Vec::with_capacity(PAGE_SLOTS);
        right.extend(self.items.drain(SPLIT_POINT..));
        Page::from_items(right)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("max", &self.max())
            .field("min", &self.min())
            .field("len", &self.len())
            .finish()
    }
}
