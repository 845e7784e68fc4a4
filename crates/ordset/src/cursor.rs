use crate::bucket::Bucket;
use crate::set::Position;

/// Where a [`Cursor`] currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// `last()` has not been called yet.
    Unpositioned,
    /// On a key of the bucket.
    Positioned(Position),
    /// Walked past the bucket's smallest key, or the bucket is empty.
    Exhausted,
}

/// Backward (greatest to smallest) iterator over one bucket.
///
/// The cursor stores a raw `(page, item)` position between calls and takes
/// the set's read lock only for the duration of each step. It does not detect
/// concurrent mutation: a `put` or `delete` between two steps may shift keys
/// under the stored position, and the next step reads whatever sits at the
/// following offset.
///
/// ```
/// use ordset::OrdSet;
///
/// let set = OrdSet::new();
/// let users = set.bucket("user");
/// users.put("rob");
/// users.put("alice");
///
/// let mut c = users.cursor();
/// assert_eq!(c.last().as_deref(), Some("rob"));
/// assert_eq!(c.prev().as_deref(), Some("alice"));
/// assert_eq!(c.prev(), None);
///
/// let walked: Vec<String> = users.cursor().iter().collect();
/// assert_eq!(walked, ["rob", "alice"]);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bucket: Bucket<'a>,
    state: CursorState,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bucket: Bucket<'a>) -> Self {
        Self {
            bucket,
            state: CursorState::Unpositioned,
        }
    }

    /// Current position of the cursor.
    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Moves to the bucket's greatest key and returns it, or `None` if the
    /// bucket is empty. May be called again to restart the walk.
    pub fn last(&mut self) -> Option<String> {
        match self.bucket.last() {
            Some((full, at)) => {
                self.state = CursorState::Positioned(at);
                Some(full[self.bucket.name().len()..].to_owned())
            }
            None => {
                self.state = CursorState::Exhausted;
                None
            }
        }
    }

    /// Moves to the next smaller key and returns it. Returns `None` once the
    /// bucket is exhausted, and keeps returning `None` after that. An
    /// unpositioned cursor stays unpositioned.
    pub fn prev(&mut self) -> Option<String> {
        let CursorState::Positioned(at) = self.state else {
            return None;
        };
        match self.bucket.prev(at) {
            Some((key, next)) => {
                self.state = CursorState::Positioned(next);
                Some(key)
            }
            None => {
                self.state = CursorState::Exhausted;
                None
            }
        }
    }

    /// Walks the remaining keys, greatest first.
    ///
    /// On an unpositioned cursor the first item comes from [`Cursor::last`];
    /// every later item, or every item on an already positioned cursor, comes
    /// from [`Cursor::prev`]. The cursor keeps its state once the iterator is
    /// dropped.
    pub fn iter(&mut self) -> CursorIter<'_, 'a> {
        CursorIter { cursor: self }
    }
}

/// Iterator returned by [`Cursor::iter`].
#[derive(Debug)]
pub struct CursorIter<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
}

impl Iterator for CursorIter<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.cursor.state {
            CursorState::Unpositioned => self.cursor.last(),
            CursorState::Positioned(_) => self.cursor.prev(),
            CursorState::Exhausted => None,
        }
    }
}

impl std::iter::FusedIterator for CursorIter<'_, '_> {}
