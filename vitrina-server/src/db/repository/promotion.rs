//! Promotion Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Promotion, PromotionUpdate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "promotion";

#[derive(Clone)]
pub struct PromotionRepository {
    base: BaseRepository,
}

impl PromotionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all promotions, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Promotion>> {
        let promotions: Vec<Promotion> = self
            .base
            .db()
            .query("SELECT * FROM promotion ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(promotions)
    }

    /// Find promotions of one business, newest first
    pub async fn find_by_business(&self, business: &RecordId) -> RepoResult<Vec<Promotion>> {
        let promotions: Vec<Promotion> = self
            .base
            .db()
            .query("SELECT * FROM promotion WHERE business = $business ORDER BY created_at DESC")
            .bind(("business", business.clone()))
            .await?
            .take(0)?;
        Ok(promotions)
    }

    /// Find promotion by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Promotion>> {
        let rid = parse_id(TABLE, id)?;
        let promotion: Option<Promotion> = self.base.db().select(rid).await?;
        Ok(promotion)
    }

    /// Create a promotion under `business`. `days_of_week` must already
    /// be normalized (non-empty, 0-6, deduplicated).
    pub async fn create(
        &self,
        business: RecordId,
        title: String,
        description: Option<String>,
        image_url: Option<String>,
        days_of_week: Vec<u8>,
    ) -> RepoResult<Promotion> {
        let promotion = Promotion {
            id: None,
            business,
            title,
            description,
            image_url,
            days_of_week,
            created_at: shared::util::now_millis(),
        };

        let created: Option<Promotion> = self.base.db().create(TABLE).content(promotion).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create promotion".to_string()))
    }

    /// Merge updates into a promotion
    pub async fn update(&self, id: &str, data: PromotionUpdate) -> RepoResult<Promotion> {
        let rid = parse_id(TABLE, id)?;

        let updated: Option<Promotion> = self.base.db().update(rid).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Promotion {} not found", id)))
    }

    /// Delete a promotion
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let rid = parse_id(TABLE, id)?;
        let _deleted: Option<Promotion> = self.base.db().delete(rid).await?;
        Ok(true)
    }
}
