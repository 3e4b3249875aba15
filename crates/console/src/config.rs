//! Start-up configuration, read once from the environment.

use core::str::FromStr;

use anyhow::{Context, anyhow};

use stockcard_observability::LogFormat;

pub const ENV_LOG_FORMAT: &str = "STOCKCARD_LOG_FORMAT";
pub const ENV_CURRENCY: &str = "STOCKCARD_CURRENCY";
pub const ENV_LIST_FORMAT: &str = "STOCKCARD_LIST_FORMAT";

pub const DEFAULT_CURRENCY: &str = "руб.";

/// How the "list all" action prints cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// One `|`-separated line per card.
    #[default]
    Table,
    /// One JSON object per line.
    Json,
}

impl FromStr for ListFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ListFormat::Table),
            "json" => Ok(ListFormat::Json),
            other => Err(anyhow!("unknown list format `{other}` (expected table or json)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub log_format: LogFormat,
    /// Suffix printed after costs.
    pub currency: String,
    pub list_format: ListFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            list_format: ListFormat::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take their defaults;
    /// set-but-invalid keys are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw
                .parse::<LogFormat>()
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("invalid {ENV_LOG_FORMAT}"))?;
        }
        if let Some(raw) = lookup(ENV_CURRENCY) {
            config.currency = raw.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_LIST_FORMAT) {
            config.list_format = raw
                .parse::<ListFormat>()
                .with_context(|| format!("invalid {ENV_LIST_FORMAT}"))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.currency, "руб.");
    }

    #[test]
    fn reads_all_keys() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            (ENV_LOG_FORMAT, "json"),
            (ENV_CURRENCY, " EUR "),
            (ENV_LIST_FORMAT, "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.list_format, ListFormat::Json);
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = ConsoleConfig::from_lookup(lookup(&[(ENV_LIST_FORMAT, "csv")])).unwrap_err();
        assert!(format!("{err:#}").contains("csv"));

        let err = ConsoleConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert!(format!("{err:#}").contains(ENV_LOG_FORMAT));
    }
}
