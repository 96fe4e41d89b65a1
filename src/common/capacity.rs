//! Cache capacity type.

use std::fmt;

use crate::common::Error;

/// Number of resident-page slots in the simulated cache.
///
/// Zero is a valid capacity: nothing is ever resident and every access
/// misses. Negative capacities are rejected when converting from a
/// signed integer.
///
/// # Example
/// ```
/// use pagesim::{Capacity, Error};
///
/// assert_eq!(Capacity::try_from(4i64).unwrap().get(), 4);
/// assert_eq!(Capacity::try_from(-1i64), Err(Error::NegativeCapacity(-1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(usize);

impl Capacity {
    /// Create a new Capacity.
    #[inline]
    pub fn new(slots: usize) -> Self {
        Capacity(slots)
    }

    /// Number of slots.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// True if no page can ever be resident.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for Capacity {
    #[inline]
    fn from(slots: usize) -> Self {
        Capacity(slots)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = Error;

    fn try_from(slots: i64) -> Result<Self, Self::Error> {
        usize::try_from(slots)
            .map(Capacity)
            .map_err(|_| Error::NegativeCapacity(slots))
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pages", self.0)
    }
}
