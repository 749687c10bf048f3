//! Credentials command implementation

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use std::path::Path;
use tracing::debug;

use sellerhub::config::{Config, Settings};
use sellerhub::credentials::{
    Credential, CredentialDb, CredentialError, CredentialStore, MARKETPLACES, Marketplace,
    NewCredential, SqliteCredentialStore,
};

#[derive(Subcommand)]
pub enum CredentialsAction {
    /// List stored credentials
    List,

    /// Store a new credential
    Add {
        /// Seller (merchant) id
        #[arg(long)]
        seller_id: String,

        /// Marketplace id or country code (defaults to US)
        #[arg(long)]
        marketplace: Option<String>,

        /// AWS access key id
        #[arg(long)]
        access_key_id: String,

        /// AWS secret key
        #[arg(long)]
        secret_key: String,

        /// Optional IAM role ARN
        #[arg(long)]
        role_arn: Option<String>,
    },

    /// Delete a credential
    Delete {
        /// Credential id
        id: String,
    },

    /// Enable a credential
    Activate {
        /// Credential id
        id: String,
    },

    /// Disable a credential without deleting it
    Deactivate {
        /// Credential id
        id: String,
    },

    /// List supported marketplaces
    Marketplaces,
}

/// Run a credentials subcommand for the given (or configured) user
pub async fn credentials_command(
    config_path: Option<&Path>,
    user: Option<String>,
    action: CredentialsAction,
) -> Result<()> {
    let action = match action {
        CredentialsAction::Marketplaces => {
            for marketplace in MARKETPLACES.iter() {
                println!("  {:<16} {:<4} {}", marketplace.id, marketplace.code, marketplace.name);
            }
            return Ok(());
        }
        other => other,
    };

    let config = Config::load(config_path)?;
    let user = resolve_user(user, &config.settings)?;
    let store = open_store(&config.settings)?;

    match action {
        CredentialsAction::List => {
            let credentials = store.list(&user).await.map_err(store_error)?;
            if credentials.is_empty() {
                println!("No credentials stored for {}.", user);
                return Ok(());
            }
            println!("Credentials for {} ({}):\n", user, credentials.len());
            for credential in &credentials {
                println!("{}", format_credential(credential));
            }
        }
        CredentialsAction::Add {
            seller_id,
            marketplace,
            access_key_id,
            secret_key,
            role_arn,
        } => {
            let marketplace_id = match marketplace {
                Some(value) => Marketplace::resolve(&value)
                    .map(|m| m.id.to_string())
                    .ok_or_else(|| anyhow!("Unknown marketplace: {}", value))?,
                None => Marketplace::default_id().to_string(),
            };
            let input = NewCredential {
                seller_id,
                marketplace_id,
                aws_access_key_id: access_key_id,
                aws_secret_key: secret_key,
                role_arn,
            };
            let credential = store.create(&user, input).await.map_err(store_error)?;
            println!("Created credential {}", credential.id);
            println!("{}", format_credential(&credential));
        }
        CredentialsAction::Delete { id } => {
            store.delete(&user, &id).await.map_err(store_error)?;
            println!("Deleted credential {}", id);
        }
        CredentialsAction::Activate { id } => {
            let credential = store.set_active(&user, &id, true).await.map_err(store_error)?;
            println!("Activated credential {}", credential.id);
        }
        CredentialsAction::Deactivate { id } => {
            let credential = store.set_active(&user, &id, false).await.map_err(store_error)?;
            println!("Deactivated credential {}", credential.id);
        }
        CredentialsAction::Marketplaces => {}
    }

    Ok(())
}

/// `--user` wins over `settings.default_user`
fn resolve_user(flag: Option<String>, settings: &Settings) -> Result<String> {
    flag.or_else(|| settings.default_user.clone())
        .ok_or_else(|| anyhow!("No user given. Pass --user or set settings.default_user"))
}

fn open_store(settings: &Settings) -> Result<SqliteCredentialStore> {
    let db = match &settings.credentials_db {
        Some(path) => CredentialDb::open(path),
        None => CredentialDb::open_default(),
    }
    .map_err(store_error)?;
    Ok(SqliteCredentialStore::new(db))
}

/// Keep validation messages, hide storage internals behind a generic one
fn store_error(err: CredentialError) -> anyhow::Error {
    debug!(error = ?err, "Credential store request failed");
    anyhow!(err.user_message())
}

fn format_credential(credential: &Credential) -> String {
    let marketplace = credential.marketplace();
    let created = DateTime::<Utc>::from_timestamp_millis(credential.created_at)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    let mut out = format!(
        "  {} [{}] seller {} on {} ({})\n    key {}  secret {}  created {}\n",
        credential.id,
        if credential.is_active { "active" } else { "inactive" },
        credential.seller_id,
        marketplace.name,
        marketplace.code,
        credential.aws_access_key_id,
        credential.masked_secret(),
        created
    );
    if let Some(arn) = &credential.role_arn {
        out.push_str(&format!("    role {}\n", arn));
    }
    out
}
