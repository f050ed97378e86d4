//! Error handling for the cache engine
//!
//! Steady-state cache operations never fail: rejected writes are reported
//! through [`SetOutcome`](crate::SetOutcome) instead. The types here cover the
//! fallible edges of the crate, namely configuration parsing and validation
//! and the compression codec.

mod conversions;
mod recovery;
mod types;

pub use types::*;
