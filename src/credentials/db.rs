//! SQLite database connection and schema for stored credentials
//!
//! Manages `~/.sellerhub/credentials.db`. The schema version is recorded in
//! `schema_version`; there is only version 1 so far.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use super::CredentialError;
use super::models::Credential;
use crate::config::Config;

const SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS amazon_credentials (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    seller_id TEXT NOT NULL,
    marketplace_id TEXT NOT NULL,
    aws_access_key_id TEXT NOT NULL,
    aws_secret_key TEXT NOT NULL,
    role_arn TEXT,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_credentials_user ON amazon_credentials(user_id);
"#;

/// Shared connection to the credentials database
#[derive(Clone)]
pub struct CredentialDb {
    conn: Arc<Mutex<Connection>>,
}

impl CredentialDb {
    /// Open or create the database at the default location
    pub fn open_default() -> Result<Self, CredentialError> {
        Self::open(&Config::global_config_dir().join("credentials.db"))
    }

    /// Open or create the database at a specific path
    pub fn open(path: &Path) -> Result<Self, CredentialError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        debug!("Opened credentials db at {}", path.display());
        Self::from_connection(conn)
    }

    /// In-memory database, mostly for tests
    pub fn open_in_memory() -> Result<Self, CredentialError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, CredentialError> {
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Lock the connection. A poisoned lock still holds a usable connection.
    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn init_schema(&self) -> Result<(), CredentialError> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        let version: i32 = conn
            .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;
        if version < SCHEMA_VERSION {
            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (?1)", [SCHEMA_VERSION])?;
        }
        Ok(())
    }

    pub(crate) fn insert(&self, credential: &Credential) -> Result<(), CredentialError> {
        self.conn().execute(
            r#"INSERT INTO amazon_credentials
               (id, user_id, seller_id, marketplace_id, aws_access_key_id, aws_secret_key,
                role_arn, is_active, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"#,
            params![
                credential.id,
                credential.user_id,
                credential.seller_id,
                credential.marketplace_id,
                credential.aws_access_key_id,
                credential.aws_secret_key,
                credential.role_arn,
                credential.is_active,
                credential.created_at,
            ],
        )?;
        Ok(())
    }

    pub(crate) fn list_for_user(&self, user_id: &str) -> Result<Vec<Credential>, CredentialError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            r#"SELECT id, user_id, seller_id, marketplace_id, aws_access_key_id, aws_secret_key,
                      role_arn, is_active, created_at
               FROM amazon_credentials
               WHERE user_id = ?1
               ORDER BY created_at, id"#,
        )?;
        let rows = stmt.query_map([user_id], row_to_credential)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get(&self, user_id: &str, id: &str) -> Result<Option<Credential>, CredentialError> {
        let conn = self.conn();
        let credential = conn
            .query_row(
                r#"SELECT id, user_id, seller_id, marketplace_id, aws_access_key_id, aws_secret_key,
                          role_arn, is_active, created_at
                   FROM amazon_credentials
                   WHERE id = ?1 AND user_id = ?2"#,
                [id, user_id],
                row_to_credential,
            )
            .optional()?;
        Ok(credential)
    }

    /// Delete a user's credential; returns whether a row was removed
    pub(crate) fn delete(&self, user_id: &str, id: &str) -> Result<bool, CredentialError> {
        let removed = self.conn().execute(
            "DELETE FROM amazon_credentials WHERE id = ?1 AND user_id = ?2",
            [id, user_id],
        )?;
        Ok(removed > 0)
    }

    pub(crate) fn set_active(&self, user_id: &str, id: &str, active: bool) -> Result<bool, CredentialError> {
        let updated = self.conn().execute(
            "UPDATE amazon_credentials SET is_active = ?1 WHERE id = ?2 AND user_id = ?3",
            params![active, id, user_id],
        )?;
        Ok(updated > 0)
    }
}

fn row_to_credential(row: &rusqlite::Row<'_>) -> rusqlite::Result<Credential> {
    Ok(Credential {
        id: row.get(0)?,
        user_id: row.get(1)?,
        seller_id: row.get(2)?,
        marketplace_id: row.get(3)?,
        aws_access_key_id: row.get(4)?,
        aws_secret_key: row.get(5)?,
        role_arn: row.get(6)?,
        is_active: row.get(7)?,
        created_at: row.get(8)?,
    })
}
