//! Data models
//!
//! Shared between vitrina-server and frontend (via API).
//! Timestamps are UTC epoch milliseconds (`i64`), IDs are `"table:id"`
//! strings as produced by the datastore.

pub mod business;
pub mod promotion;

// Re-exports
pub use business::*;
pub use promotion::*;
