//! CLI command implementations

pub mod charts;
pub mod credentials;
pub mod init;
pub mod map;
pub mod pl;
pub mod tiles;
pub mod trends;

use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

use sellerhub::config::Config;
use sellerhub::dataset::Dataset;
use sellerhub::format::Formatter;
use sellerhub::view::{ViewAction, ViewState};

/// Everything a view command needs: settings, data and the starting view state
pub struct Context {
    pub config: Config,
    pub dataset: Dataset,
    pub formatter: Formatter,
    pub state: ViewState,
}

impl Context {
    /// Load config, then the dataset from `--data`, `settings.dataset_path`,
    /// or the built-in sample, in that order
    pub fn load(config_path: Option<&Path>, data_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;

        let data_path = data_path.or(config.settings.dataset_path.as_deref());
        let dataset = match data_path {
            Some(path) => Dataset::from_file(path)
                .with_context(|| format!("Failed to load dataset: {}", path.display()))?,
            None => {
                debug!("No dataset configured, using built-in sample");
                Dataset::sample()
            }
        };

        let formatter = config.settings.formatter();
        let state =
            ViewState::default().apply(ViewAction::SelectMetric(config.settings.default_metric));

        Ok(Self {
            config,
            dataset,
            formatter,
            state,
        })
    }
}
