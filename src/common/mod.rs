//! Common types shared across the simulator.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers and inputs (PageId, Capacity, Trace)

mod capacity;
pub mod config;
pub mod error;
mod page_id;
mod trace;

pub use capacity::Capacity;
pub use error::{Error, Result};
pub use page_id::PageId;
pub use trace::Trace;
