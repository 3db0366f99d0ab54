//! Shared types for Vitrina
//!
//! API-facing data models and auth request/response types used by both
//! the server handlers and API clients. Database row types live in the
//! server crate; handlers convert rows into these types at the boundary.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, LoginResponse, SignupRequest, UserInfo};
pub use models::{AdminBusiness, Business, Category, Promotion, PublicPromotion};
