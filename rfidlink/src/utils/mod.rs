//! Small helpers shared across the crate: hex rendering for frame dumps and
//! deadline arithmetic over the millisecond clock.

/// Hex formatting.
pub mod hex;
/// Millisecond timeouts.
pub mod timeout;

pub use hex::*;
pub use timeout::*;
