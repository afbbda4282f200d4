use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    currency::{CurrencyCode, FormatOptions, LocaleConfig, MoneyFormatter},
    domain::BudgetThresholds,
    errors::BudgetError,
    utils::app_data_dir,
};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User preferences that shape summaries, insights and money formatting.
/// Missing fields fall back to their defaults when loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: LocaleConfig,
    pub currency: CurrencyCode,
    pub format: FormatOptions,
    pub warning_threshold_percent: i64,
    pub under_spend_ratio: f64,
}

impl Default for Config {
    fn default() -> Self {
        let thresholds = BudgetThresholds::default();
        Self {
            locale: LocaleConfig::default(),
            currency: CurrencyCode::default(),
            format: FormatOptions::default(),
            warning_threshold_percent: thresholds.warning_percent,
            under_spend_ratio: thresholds.under_spend_ratio,
        }
    }
}

impl Config {
    pub fn thresholds(&self) -> BudgetThresholds {
        BudgetThresholds {
            warning_percent: self.warning_threshold_percent,
            under_spend_ratio: self.under_spend_ratio,
        }
    }

    /// Formatter in the configured currency.
    pub fn formatter(&self) -> MoneyFormatter {
        self.formatter_for(&self.currency)
    }

    /// Formatter for `currency` using the configured locale and options.
    pub fn formatter_for(&self, currency: &CurrencyCode) -> MoneyFormatter {
        MoneyFormatter::new(currency.clone(), self.locale.clone(), self.format.clone())
    }

    pub fn validate(&self) -> Result<(), BudgetError> {
        if !(1..=100).contains(&self.warning_threshold_percent) {
            return Err(BudgetError::InvalidConfig(format!(
                "warning_threshold_percent must be within 1..=100, got {}",
                self.warning_threshold_percent
            )));
        }
        if !(0.0..=1.0).contains(&self.under_spend_ratio) {
            return Err(BudgetError::InvalidConfig(format!(
                "under_spend_ratio must be within 0..=1, got {}",
                self.under_spend_ratio
            )));
        }
        if self.currency.as_str().is_empty() {
            return Err(BudgetError::InvalidConfig("currency must not be empty".into()));
        }
        Ok(())
    }
}

/// Loads and persists [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$BUDGET_INSIGHTS_HOME` or `~/.budget_insights`.
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        tracing::info!(path = %self.path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BudgetError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
