// Shared helpers for integration tests. Each test crate pulls this in with
// `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]

pub mod fixtures;

pub use rfidlink::test_support::{MockLink, mock_link, mock_link_with_frames, sent_frames};

/// Route `log` output through env_logger so `RUST_LOG=debug cargo test`
/// shows frame dumps. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
