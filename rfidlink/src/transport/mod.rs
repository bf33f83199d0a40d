// rfidlink/src/transport/mod.rs

/// Scripted transport for tests.
pub mod mock;
/// TCP transport.
pub mod tcp;
/// The `Transport` trait.
pub mod traits;

pub use mock::MockTransport;
pub use tcp::TcpTransport;
pub use traits::Transport;
