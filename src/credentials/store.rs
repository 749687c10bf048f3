//! SQLite-backed credential store

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use super::db::CredentialDb;
use super::models::{Credential, NewCredential};
use super::{CredentialError, CredentialStore};

/// Runs every query on the blocking pool so callers stay async
#[derive(Clone)]
pub struct SqliteCredentialStore {
    db: CredentialDb,
}

impl SqliteCredentialStore {
    pub fn new(db: CredentialDb) -> Self {
        Self { db }
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T, CredentialError>
    where
        T: Send + 'static,
        F: FnOnce(CredentialDb) -> Result<T, CredentialError> + Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || f(db)).await?
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn create(&self, user_id: &str, input: NewCredential) -> Result<Credential, CredentialError> {
        let input = input.normalized()?;
        let credential = Credential {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            seller_id: input.seller_id,
            marketplace_id: input.marketplace_id,
            aws_access_key_id: input.aws_access_key_id,
            aws_secret_key: input.aws_secret_key,
            role_arn: input.role_arn,
            is_active: true,
            created_at: Utc::now().timestamp_millis(),
        };

        let stored = credential.clone();
        self.blocking(move |db| db.insert(&stored)).await?;
        info!(
            "Stored credential {} for seller {} ({})",
            credential.id,
            credential.seller_id,
            credential.marketplace().code
        );
        Ok(credential)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Credential>, CredentialError> {
        let user_id = user_id.to_string();
        self.blocking(move |db| db.list_for_user(&user_id)).await
    }

    async fn delete(&self, user_id: &str, credential_id: &str) -> Result<(), CredentialError> {
        let (user, id) = (user_id.to_string(), credential_id.to_string());
        let removed = self.blocking(move |db| db.delete(&user, &id)).await?;
        if !removed {
            return Err(CredentialError::NotFound(credential_id.to_string()));
        }
        info!("Deleted credential {}", credential_id);
        Ok(())
    }

    async fn set_active(
        &self,
        user_id: &str,
        credential_id: &str,
        active: bool,
    ) -> Result<Credential, CredentialError> {
        let (user, id) = (user_id.to_string(), credential_id.to_string());
        let updated = self
            .blocking(move |db| {
                if db.set_active(&user, &id, active)? {
                    db.get(&user, &id)
                } else {
                    Ok(None)
                }
            })
            .await?;
        updated.ok_or_else(|| CredentialError::NotFound(credential_id.to_string()))
    }
}
