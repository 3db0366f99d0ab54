//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine). Tables are schemaless except for
//! the unique email index on `profile`; all definitions are idempotent
//! and applied at startup.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply schema.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        db.use_ns("vitrina")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        // Idempotent schema: unique account emails
        db.query("DEFINE INDEX IF NOT EXISTS profile_email ON TABLE profile FIELDS email UNIQUE")
            .await
            .map_err(|e| AppError::database(format!("Failed to define indexes: {}", e)))?;

        tracing::info!(path = %db_path, "Database connection established");

        Ok(Self { db })
    }
}
