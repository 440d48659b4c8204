//! # Configuration State
//!
//! Display settings for the quote tool, loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ROADREADY_*`)
//! 2. Defaults (this file)
//!
//! Pricing constants are deliberately absent: rates, discounts and add-on
//! prices are fixed in `roadready-core::pricing`.

use serde::{Deserialize, Serialize};
use roadready_core::validation::clamp_hours;

/// Default hours shown before the user touches the slider.
const DEFAULT_HOURS: u32 = 10;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the summary header
    pub school_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Slider starting position when `--hours` is not given
    pub default_hours: u32,
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },

    #[error("{0} must not be empty")]
    Empty(String),
}

impl Default for ConfigState {
    /// ## Default Values
    /// - School: "RoadReady Driving School"
    /// - Currency: GBP (£)
    /// - Hours: 10
    fn default() -> Self {
        ConfigState {
            school_name: "RoadReady Driving School".to_string(),
            currency_symbol: "£".to_string(),
            default_hours: DEFAULT_HOURS,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ROADREADY_SCHOOL_NAME`: Override school name
    /// - `ROADREADY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `ROADREADY_DEFAULT_HOURS`: Starting hours (clamped to 1..=40)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("ROADREADY_SCHOOL_NAME") {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::Empty("ROADREADY_SCHOOL_NAME".to_string()));
            }
            config.school_name = name.to_string();
        }

        // Kept verbatim: a trailing space separates a word symbol from the amount
        if let Some(symbol) = lookup("ROADREADY_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                return Err(ConfigError::Empty("ROADREADY_CURRENCY_SYMBOL".to_string()));
            }
            config.currency_symbol = symbol;
        }

        if let Some(hours) = lookup("ROADREADY_DEFAULT_HOURS") {
            let parsed: i64 = hours
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "ROADREADY_DEFAULT_HOURS".to_string(),
                    value: hours.clone(),
                })?;
            config.default_hours = clamp_hours(parsed);
        }

        Ok(config)
    }

    /// Formats a whole-pound amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use roadready_quote_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(645), "£645");
    /// ```
    pub fn format_currency(&self, amount: i64) -> String {
        format!(
            "{}{}{}",
            if amount < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.default_hours, 10);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("ROADREADY_SCHOOL_NAME", "  Fast Lane  "),
            ("ROADREADY_CURRENCY_SYMBOL", "GBP "),
            ("ROADREADY_DEFAULT_HOURS", "25"),
        ]))
        .unwrap();
        assert_eq!(config.school_name, "Fast Lane");
        assert_eq!(config.currency_symbol, "GBP ");
        assert_eq!(config.default_hours, 25);
        assert_eq!(config.format_currency(1140), "GBP 1140");
    }

    #[test]
    fn test_blank_currency_symbol_rejected() {
        let err = ConfigState::from_lookup(lookup_from(&[("ROADREADY_CURRENCY_SYMBOL", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Empty(ref name) if name == "ROADREADY_CURRENCY_SYMBOL"));
    }

    #[test]
    fn test_default_hours_clamped_to_slider() {
        let config =
            ConfigState::from_lookup(lookup_from(&[("ROADREADY_DEFAULT_HOURS", "90")])).unwrap();
        assert_eq!(config.default_hours, 40);
    }

    #[test]
    fn test_invalid_default_hours() {
        let err = ConfigState::from_lookup(lookup_from(&[("ROADREADY_DEFAULT_HOURS", "ten")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_empty_school_name_rejected() {
        let err = ConfigState::from_lookup(lookup_from(&[("ROADREADY_SCHOOL_NAME", " ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Empty(_)));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(0), "£0");
        assert_eq!(config.format_currency(1140), "£1140");
        assert_eq!(config.format_currency(-5), "-£5");
    }
}
