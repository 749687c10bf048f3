//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::MetricField;
use crate::format::{Formatter, UNDEFINED};
use crate::view::DEFAULT_TOP_N;

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol prefixed to money values
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Size of the top performers / needs attention panels
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// KPI selected when the trends view opens
    #[serde(default = "default_metric")]
    pub default_metric: MetricField,

    /// Shown in place of a ratio whose denominator is zero
    #[serde(default = "default_undefined_placeholder")]
    pub undefined_placeholder: String,

    /// JSON dataset to load instead of the built-in sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,

    /// Credentials database (defaults to ~/.sellerhub/credentials.db)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_db: Option<PathBuf>,

    /// User id used by credential commands when --user is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_metric() -> MetricField {
    MetricField::NetProfit
}

fn default_undefined_placeholder() -> String {
    UNDEFINED.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            top_n: default_top_n(),
            default_metric: default_metric(),
            undefined_placeholder: default_undefined_placeholder(),
            dataset_path: None,
            credentials_db: None,
            default_user: None,
        }
    }
}

impl Settings {
    /// Formatter configured from these settings
    pub fn formatter(&self) -> Formatter {
        Formatter {
            currency_symbol: self.currency_symbol.clone(),
            undefined: self.undefined_placeholder.clone(),
        }
    }
}
