//! Configuration constants for the simulator.

/// Seed used by [`Policy::Rand`](crate::policy::Policy) when the caller
/// does not pick one.
///
/// Any fixed value works; what matters is that two runs with the same
/// seed see the same sequence of random victims.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Next-use position of a page that is never referenced again.
///
/// OPT compares next-use positions directly, so "never" has to sort
/// after every real trace position.
pub const NEVER: usize = usize::MAX;
