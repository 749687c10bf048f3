//! Marketplace API credential storage
//!
//! The dashboard's settings page stores seller API credentials in a managed
//! database. [`CredentialStore`] is that collaborator's interface: create,
//! list and delete, always scoped to one user. [`SqliteCredentialStore`] is
//! the local implementation, backed by `~/.sellerhub/credentials.db`.
//!
//! Calls are single request/response; there is no retry.

mod db;
mod models;
mod store;

pub use db::CredentialDb;
pub use models::{Credential, MARKETPLACES, Marketplace, NewCredential};
pub use store::SqliteCredentialStore;

use async_trait::async_trait;

/// Errors from the credential store
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown marketplace: {0}")]
    UnknownMarketplace(String),

    #[error("Credential not found: {0}")]
    NotFound(String),

    #[error("Credential storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Failed to create credentials directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl CredentialError {
    /// Short message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(_) | Self::UnknownMarketplace(_) | Self::NotFound(_) => self.to_string(),
            Self::Storage(_) | Self::Io(_) | Self::Join(_) => {
                "Failed to reach the credential store".to_string()
            }
        }
    }
}

/// Create/list/delete access to stored credentials, keyed by user
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Validate and store a new credential for `user_id`
    async fn create(&self, user_id: &str, input: NewCredential) -> Result<Credential, CredentialError>;

    /// All credentials of `user_id`, oldest first
    async fn list(&self, user_id: &str) -> Result<Vec<Credential>, CredentialError>;

    /// Delete one of `user_id`'s credentials.
    ///
    /// Fails with [`CredentialError::NotFound`] when the id doesn't exist or
    /// belongs to another user.
    async fn delete(&self, user_id: &str, credential_id: &str) -> Result<(), CredentialError>;

    /// Enable or disable a credential without deleting it
    async fn set_active(
        &self,
        user_id: &str,
        credential_id: &str,
        active: bool,
    ) -> Result<Credential, CredentialError>;
}
