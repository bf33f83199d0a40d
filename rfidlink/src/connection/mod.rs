// rfidlink/src/connection/mod.rs

/// Connection lifecycle and liveness tracking.
pub mod manager;

pub use manager::{ConnectionManager, ConnectionState};
