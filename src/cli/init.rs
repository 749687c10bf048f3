//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;

use sellerhub::config::Config;

/// Default configuration content for sellerhub init
pub const DEFAULT_CONFIG: &str = r#"# SellerHub Configuration
# =======================
#
# Every key is optional. Missing keys fall back to the defaults shown here.

[settings]
# Symbol prefixed to money values
currency_symbol = "$"

# Size of the "Top performers" and "Needs attention" panels
top_n = 3

# KPI selected when the trends view opens:
# sales, orders, unitsSold, refunds, advertisingCost, netProfit, margin, roi, ...
default_metric = "netProfit"

# Shown in place of a ratio whose denominator is zero
undefined_placeholder = "—"

# JSON dataset to load instead of the built-in sample (overridden by --data)
# dataset_path = "/path/to/dashboard.json"

# Credentials database (defaults to ~/.sellerhub/credentials.db)
# credentials_db = "/path/to/credentials.db"

# User id for `sellerhub credentials` when --user is not given
# default_user = "me@example.com"
"#;

/// Write the default config to `config_path`, or ~/.sellerhub/config.toml
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        init_command(Some(&path), false).unwrap();
        assert!(init_command(Some(&path), false).is_err());
        init_command(Some(&path), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_init_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".sellerhub/config.toml");
        init_command(Some(&path), false).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }
}
