//! ==============================================================================
//! config.rs - storefront configuration
//! ==============================================================================
//!
//! every field has a default, so a partial json document (or none at all)
//! is enough. string overrides follow the same fallback rule: a value that
//! does not parse keeps the default.
//!
//! ==============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::{format_price, ReleaseWindow, DEFAULT_RELEASE_WINDOW_DAYS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// prefix used by the price formatter
    pub currency_symbol: String,
    /// how many days a release counts as "just released"
    pub new_release_window_days: u32,
    /// free shipping threshold in cents, advertised in the super header
    pub free_shipping_threshold: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            new_release_window_days: DEFAULT_RELEASE_WINDOW_DAYS,
            free_shipping_threshold: 7500,
        }
    }
}

impl StorefrontConfig {
    /// parse and validate a json config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.new_release_window_days == 0 {
            return Err(Error::Config(
                "newReleaseWindowDays must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// apply optional string overrides, ignoring values that do not parse
    pub fn with_overrides(mut self, window_days: Option<&str>, currency_symbol: Option<&str>) -> Self {
        if let Some(raw) = window_days {
            match raw.trim().parse::<u32>() {
                Ok(days) if days > 0 => self.new_release_window_days = days,
                _ => log::warn!("ignoring invalid release window override {:?}", raw),
            }
        }
        if let Some(symbol) = currency_symbol.filter(|s| !s.is_empty()) {
            self.currency_symbol = symbol.to_string();
        }
        self
    }

    /// recency window ending at `today` with the configured length
    pub fn release_window(&self, today: NaiveDate) -> ReleaseWindow {
        ReleaseWindow::new(today, self.new_release_window_days)
    }

    pub fn format_price(&self, cents: u32) -> String {
        format_price(&self.currency_symbol, cents)
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.new_release_window_days, 30);
        assert_eq!(config.format_price(config.free_shipping_threshold), "$75");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StorefrontConfig::from_json(r#"{"currencySymbol":"€"}"#).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.new_release_window_days, 30);
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = StorefrontConfig::from_json(r#"{"newReleaseWindowDays":0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = StorefrontConfig::from_json("[").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::default().with_overrides(Some("14"), Some("£"));
        assert_eq!(config.new_release_window_days, 14);
        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = StorefrontConfig::default().with_overrides(Some("soon"), Some(""));
        assert_eq!(config, StorefrontConfig::default());

        let config = StorefrontConfig::default().with_overrides(Some("0"), None);
        assert_eq!(config.new_release_window_days, 30);
    }
}
