//! Access trace type.

use std::collections::HashSet;

use crate::common::PageId;

/// An ordered, finite sequence of page references.
///
/// A trace is fully materialized before any simulation runs (OPT needs
/// to see the future) and is never mutated afterwards. Policies borrow it
/// as a `&[PageId]`.
///
/// # Example
/// ```
/// use pagesim::Trace;
///
/// let trace = Trace::from(vec![1, 2, 1, 3, 2]);
/// assert_eq!(trace.len(), 5);
/// assert_eq!(trace.distinct_pages(), 3);
/// assert_eq!(trace.max_hits(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pages: Vec<PageId>,
}

impl Trace {
    /// Create a trace from already-typed page ids.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Number of accesses.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }

    /// Number of distinct pages referenced.
    pub fn distinct_pages(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }

    /// Misses no policy can avoid: the first reference to every page.
    pub fn compulsory_misses(&self) -> usize {
        self.distinct_pages()
    }

    /// Upper bound on hits for any policy and capacity.
    ///
    /// Reached exactly once capacity ≥ `distinct_pages()`.
    pub fn max_hits(&self) -> usize {
        self.len() - self.compulsory_misses()
    }
}

impl From<Vec<i64>> for Trace {
    fn from(ids: Vec<i64>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<Vec<PageId>> for Trace {
    fn from(pages: Vec<PageId>) -> Self {
        Self::new(pages)
    }
}

impl FromIterator<i64> for Trace {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(PageId::new).collect())
    }
}

impl FromIterator<PageId> for Trace {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[PageId]> for Trace {
    fn as_ref(&self) -> &[PageId] {
        &self.pages
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
