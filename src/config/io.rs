//! Configuration file I/O operations

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::debug;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.sellerhub/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sellerhub")
    }

    /// Get the global config file path (~/.sellerhub/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path`, or the global config file when `path` is None.
    ///
    /// A missing global file means defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            Self::from_file(&global_path)
        } else {
            debug!("No config at {}, using defaults", global_path.display());
            Ok(Self::default())
        }
    }

    /// Write raw config text to `path` if it parses as a config.
    ///
    /// Comments in `content` are kept. The write takes an exclusive lock
    /// next to the file and replaces it atomically.
    pub fn write_file(path: &Path, content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .with_context(|| format!("Refusing to write invalid config to {}", path.display()))?;
        write_locked(path, content)?;
        debug!("Wrote config to {}", path.display());
        Ok(config)
    }
}

/// Replace `path` with `content` while holding `<path>.lock`.
///
/// The new content goes to `<path>.tmp` first and is renamed over the
/// target, so readers see either the old or the new file.
fn write_locked(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let sibling = |suffix: &str| {
        let mut name = path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    };
    let lock_path = sibling(".lock");
    let temp_path = sibling(".tmp");

    let lock = File::create(&lock_path)
        .with_context(|| format!("Failed to open {}", lock_path.display()))?;
    lock.lock_exclusive()
        .with_context(|| format!("Config {} is locked by another writer", path.display()))?;

    let mut temp = File::create(&temp_path)
        .with_context(|| format!("Failed to create {}", temp_path.display()))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.sync_all())
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    drop(temp);

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
