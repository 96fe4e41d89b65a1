//! Page identifier type.

use std::fmt;

/// Identifies a page referenced by an access trace.
///
/// Pages are opaque to every policy: the only operation ever performed on
/// them is equality (plus ordering, used by OPT to break ties).
/// There is no range restriction and no sentinel value; empty slots are
/// modelled with `Option<PageId>`.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    #[inline]
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
