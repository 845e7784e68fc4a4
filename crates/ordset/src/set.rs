use crate::bucket::Bucket;
use crate::page::{Compare, Page};
use parking_lot::RwLock;
use tracing::{debug, trace};

/// Number of page slots reserved when no capacity hint is given.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Position of a key inside the page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index of the page in the set's page sequence.
    pub page: usize,
    /// Index of the key inside that page.
    pub item: usize,
}

/// Ordered set of unique strings, kept in strict descending order across a
/// sequence of fixed-capacity pages.
///
/// # Layout
///
/// ```text
/// pages[0]            pages[1]            pages[2]
/// ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
/// │ max ...... min│ > │ max ...... min│ > │ max ...... min│
/// └───────────────┘   └───────────────┘   └───────────────┘
/// ```
///
/// Every page is strictly descending and `pages[i].min() > pages[i + 1].max()`,
/// so concatenating the pages yields the whole set in order. A page is split
/// in two when an insert would overflow it; a page that becomes empty after a
/// delete is dropped unless it is the only page.
///
/// # Concurrency
///
/// One [`RwLock`] guards the page sequence. `put` and `delete` hold the write
/// lock for the whole operation (split and retry included); `has`, `keys` and
/// bucket scans hold the read lock.
pub struct OrdSet {
    pub(crate) pages: RwLock<Vec<Page>>,
}

impl OrdSet {
    /// Creates an empty set reserving [`DEFAULT_CAPACITY`] page slots.
    pub fn new() -> Self {
        Self::with_reserve(DEFAULT_CAPACITY)
    }

    /// Creates an empty set with a page-slot reserve hint.
    ///
    /// A hint greater than 4 is rounded up to the next power of two; smaller
    /// hints fall back to [`DEFAULT_CAPACITY`]. The hint never limits growth.
    pub fn with_capacity(hint: usize) -> Self {
        let reserve = if hint > 4 {
            hint.checked_next_power_of_two().unwrap_or(hint)
        } else {
            DEFAULT_CAPACITY
        };
        Self::with_reserve(reserve)
    }

    fn with_reserve(reserve: usize) -> Self {
        let mut pages = Vec::with_capacity(reserve);
        pages.push(Page::new());
        debug!(reserve, "ordset created");
        Self {
            pages: RwLock::new(pages),
        }
    }

    /// Inserts `key` if absent. Returns `true` if the key was newly added.
    pub fn put(&self, key: &str) -> bool {
        let mut pages = self.pages.write();
        loop {
            let idx = locate_page(&pages, key, Compare::Exact);
            let page = &mut pages[idx];
            match page.search(key) {
                Ok(_) => return false,
                Err(_) if page.is_full() => {
                    // split, then locate again from scratch
                    split_page(&mut pages, idx);
                }
                Err(item) => {
                    page.insert_at(item, key.to_owned());
                    trace!(page = idx, item, "key inserted");
                    return true;
                }
            }
        }
    }

    /// Returns `true` if `key` is in the set.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        let pages = self.pages.read();
        let idx = locate_page(&pages, key, Compare::Exact);
        pages[idx].search(key).is_ok()
    }

    /// Removes `key`. Returns `true` if it was present.
    pub fn delete(&self, key: &str) -> bool {
        let mut pages = self.pages.write();
        let idx = locate_page(&pages, key, Compare::Exact);
        if !pages[idx].remove(key) {
            return false;
        }
        trace!(page = idx, "key deleted");

        if pages[idx].is_empty() && pages.len() > 1 {
            pages.remove(idx);
            debug!(page = idx, pages = pages.len(), "empty page dropped");
        }
        true
    }

    /// Every key in the set, greatest first.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let pages = self.pages.read();
        pages.iter().flat_map(|p| p.items().iter().cloned()).collect()
    }

    /// Number of keys in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.read().iter().map(Page::len).sum()
    }

    /// Returns `true` if the set holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.read().iter().all(Page::is_empty)
    }

    /// Number of pages currently allocated. Always at least one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.read().len()
    }

    /// Number of page slots the page sequence can hold before reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pages.read().capacity()
    }

    /// Returns a namespace view over this set. See [`Bucket`].
    pub fn bucket(&self, name: impl Into<String>) -> Bucket<'_> {
        Bucket::new(self, name)
    }
}

impl Default for OrdSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OrdSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pages = self.pages.read();
        f.debug_struct("OrdSet")
            .field("keys", &pages.iter().map(Page::len).sum::<usize>())
            .field("page_count", &pages.len())
            .field("capacity", &pages.capacity())
            .field("pages", &*pages)
            .finish()
    }
}

/// Finds the page `key` belongs in.
///
/// Binary search over a virtual index of `2 * pages.len()` slots where slot
/// `2i` is `pages[i].max()` and slot `2i + 1` is `pages[i].min()`. The first
/// slot at or below `key` names the page; if none is, the key sorts after
/// everything and belongs in the last page.
pub(crate) fn locate_page(pages: &[Page], key: &str, mode: Compare) -> usize {
    debug_assert!(!pages.is_empty());
    let slots = pages.len() * 2;
    let slot = search(slots, |slot| {
        let page = &pages[slot / 2];
        let bound = if slot % 2 == 0 { page.max() } else { page.min() };
        mode.at_or_below(bound, key)
    });
    if slot == slots {
        pages.len() - 1
    } else {
        slot / 2
    }
}

/// Position of the greatest key at or below `prefix` under prefix-truncated
/// comparison. `None` if every key sorts above it.
pub(crate) fn locate_prefix(pages: &[Page], prefix: &str) -> Option<Position> {
    let page = locate_page(pages, prefix, Compare::Prefix);
    let item = pages[page].locate(prefix, Compare::Prefix);
    (item < pages[page].len()).then_some(Position { page, item })
}

/// Splits the full page at `idx`, inserting its upper half right after it.
fn split_page(pages: &mut Vec<Page>, idx: usize) {
    let right = pages[idx].split();
    pages.insert(idx + 1, right);
    debug!(page = idx, pages = pages.len(), "page split");
}

/// Smallest index in `[0, n)` for which `pred` holds, or `n` if none does.
/// `pred` must be monotone: once true, true for every larger index.
fn search(n: usize, pred: impl Fn(usize) -> bool) -> usize {
    let (mut lo, mut hi) = (0, n);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
