// rfidlink/src/clock/traits.rs

/// Monotonic millisecond clock. Abstracted so liveness and deadline logic
/// can be driven deterministically in tests.
pub trait Clock {
    /// Milliseconds since boot (or since the clock was created).
    fn now_ms(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds.
    fn sleep_ms(&self, ms: u64);
}
