//! Business Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Business, BusinessCreate, BusinessUpdate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "business";

#[derive(Clone)]
pub struct BusinessRepository {
    base: BaseRepository,
}

impl BusinessRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all businesses, newest first (admin moderation table)
    pub async fn find_all(&self) -> RepoResult<Vec<Business>> {
        let businesses: Vec<Business> = self
            .base
            .db()
            .query("SELECT * FROM business ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(businesses)
    }

    /// Find publicly visible businesses, newest first (public browse)
    pub async fn find_active(&self) -> RepoResult<Vec<Business>> {
        let businesses: Vec<Business> = self
            .base
            .db()
            .query("SELECT * FROM business WHERE active = true ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(businesses)
    }

    /// Find businesses owned by one profile, newest first
    pub async fn find_by_owner(&self, owner: &RecordId) -> RepoResult<Vec<Business>> {
        let businesses: Vec<Business> = self
            .base
            .db()
            .query("SELECT * FROM business WHERE owner = $owner ORDER BY created_at DESC")
            .bind(("owner", owner.clone()))
            .await?
            .take(0)?;
        Ok(businesses)
    }

    /// Find business by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Business>> {
        let rid = parse_id(TABLE, id)?;
        let business: Option<Business> = self.base.db().select(rid).await?;
        Ok(business)
    }

    /// Create a new business for `owner`.
    ///
    /// Activation and the expiry date come from the caller: the payment
    /// simulation passes `active = true` and `now + 30 days`.
    pub async fn create(
        &self,
        owner: RecordId,
        data: BusinessCreate,
        active: bool,
        subscription_expires_at: Option<i64>,
    ) -> RepoResult<Business> {
        let business = Business {
            id: None,
            owner,
            name: data.name,
            category: data.category,
            description: data.description,
            phone: data.phone,
            image_url: data.image_url,
            location_lat: data.location_lat,
            location_lng: data.location_lng,
            active,
            subscription_expires_at,
            created_at: shared::util::now_millis(),
        };

        let created: Option<Business> = self.base.db().create(TABLE).content(business).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create business".to_string()))
    }

    /// Merge profile-field updates into a business
    pub async fn update(&self, id: &str, data: BusinessUpdate) -> RepoResult<Business> {
        let rid = parse_id(TABLE, id)?;

        let updated: Option<Business> = self.base.db().update(rid).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Business {} not found", id)))
    }

    /// Set the visibility flag (admin moderation)
    pub async fn set_active(&self, id: &str, active: bool) -> RepoResult<Business> {
        let rid = parse_id(TABLE, id)?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET active = $active RETURN AFTER")
            .bind(("thing", rid))
            .bind(("active", active))
            .await?;

        let updated: Option<Business> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Business {} not found", id)))
    }

    /// Delete a business and its promotions
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let rid = parse_id(TABLE, id)?;

        // Promotions have no life of their own
        self.base
            .db()
            .query("DELETE promotion WHERE business = $business")
            .bind(("business", rid.clone()))
            .await?;

        let _deleted: Option<Business> = self.base.db().delete(rid).await?;
        Ok(true)
    }
}
