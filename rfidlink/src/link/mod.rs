// rfidlink/src/link/mod.rs

/// `ServerLink` builder.
pub mod builder;
/// `ServerLink` and its operations.
pub mod handle;

pub use builder::ServerLinkBuilder;
pub use handle::{ServerLink, TagReportOutcome};
