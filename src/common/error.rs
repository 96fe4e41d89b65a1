//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// Simulations are total over well-formed input, so every variant here is
/// a precondition violation caught at the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A negative cache capacity was supplied.
    ///
    /// This indicates a caller bug. Clamping to zero would hide it and
    /// silently skew benchmark results.
    #[error("Invalid capacity {0}: capacity must not be negative")]
    NegativeCapacity(i64),

    /// A policy name did not match any known policy.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
