//! Config Repository
//!
//! Key/value pairs keyed by record id, one row per config key.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::ConfigEntry;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "config";

#[derive(Clone)]
pub struct ConfigRepository {
    base: BaseRepository,
}

impl ConfigRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Read a config value
    pub async fn get(&self, key: &str) -> RepoResult<Option<f64>> {
        let entry: Option<ConfigEntry> = self.base.db().select((TABLE, key)).await?;
        Ok(entry.map(|e| e.value))
    }

    /// Write a config value, creating the row if missing
    pub async fn set(&self, key: &str, value: f64) -> RepoResult<f64> {
        let rid = RecordId::from_table_key(TABLE, key);
        let entry = ConfigEntry {
            id: None,
            key: key.to_string(),
            value,
        };

        // UPSERT: the row may not exist yet
        let updated: Option<ConfigEntry> = self
            .base
            .db()
            .upsert(rid)
            .content(entry)
            .await?;

        updated
            .map(|e| e.value)
            .ok_or_else(|| RepoError::Database(format!("Failed to write config '{}'", key)))
    }

    /// Seed a config key with a default when absent
    pub async fn seed_default(&self, key: &str, value: f64) -> RepoResult<()> {
        if self.get(key).await?.is_none() {
            self.set(key, value).await?;
            tracing::info!(key = %key, value = %value, "Seeded default config value");
        }
        Ok(())
    }
}
