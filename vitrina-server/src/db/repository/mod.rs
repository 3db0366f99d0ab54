//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.

pub mod business;
pub mod config_entry;
pub mod profile;
pub mod promotion;

// Re-exports
pub use business::BusinessRepository;
pub use config_entry::ConfigRepository;
pub use profile::ProfileRepository;
pub use promotion::PromotionRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// API 路径里既可能出现完整的 "table:id"，也可能只有裸 id；
// parse_id 同时接受两种形式，但表名必须匹配。

/// Parse an incoming ID into a RecordId for `table`. Accepts both the
/// bare key and the full `"table:key"` form.
pub fn parse_id(table: &str, id: &str) -> Result<RecordId, RepoError> {
    match id.split_once(':') {
        Some((tb, key)) if tb == table && !key.is_empty() => {
            id.parse::<RecordId>()
                .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
        }
        Some(_) => Err(RepoError::Validation(format!("Invalid ID: {}", id))),
        None => Ok(RecordId::from_table_key(table, id)),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
