//! Profile Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::Profile;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "profile";

#[derive(Clone)]
pub struct ProfileRepository {
    base: BaseRepository,
}

impl ProfileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find profile by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Profile>> {
        let rid = parse_id(TABLE, id)?;
        let profile: Option<Profile> = self.base.db().select(rid).await?;
        Ok(profile)
    }

    /// Find profile by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>> {
        let email_owned = email.to_lowercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM profile WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let profiles: Vec<Profile> = result.take(0)?;
        Ok(profiles.into_iter().next())
    }

    /// Create a new account. Emails are stored lowercased; duplicates are
    /// rejected here and by the unique index.
    pub async fn create(&self, email: &str, password: &str) -> RepoResult<Profile> {
        let email = email.to_lowercase();

        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Account '{}' already exists",
                email
            )));
        }

        let hash_pass = Profile::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let profile = Profile {
            id: None,
            email,
            hash_pass,
            is_admin: false,
            created_at: shared::util::now_millis(),
        };

        let created: Option<Profile> = self.base.db().create(TABLE).content(profile).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create profile".to_string()))
    }
}
