// rfidlink/src/clock/mod.rs

/// Test clock.
pub mod mock;
/// Clock backed by `Instant`.
pub mod system;
/// The `Clock` trait.
pub mod traits;

pub use mock::MockClock;
pub use system::SystemClock;
pub use traits::Clock;
