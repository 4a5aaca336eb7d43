//! Storefront context shared by every component.

use chrono::{DateTime, NaiveDate};
use shared::{ReleaseWindow, StorefrontConfig, Theme};

/// Everything a component needs besides its own props.
#[derive(Debug, Clone)]
pub struct StorefrontContext {
    pub config: StorefrontConfig,
    pub theme: Theme,
    /// Date the page is rendered on, in UTC.
    pub today: NaiveDate,
}

impl StorefrontContext {
    pub fn new(config: StorefrontConfig, theme: Theme, today: NaiveDate) -> Self {
        Self { config, theme, today }
    }

    pub fn release_window(&self) -> ReleaseWindow {
        self.config.release_window(self.today)
    }
}

/// Build the config from compile-time settings.
///
/// `STOREFRONT_CONFIG_JSON` holds a full config document; the two single
/// value variables override it. Anything invalid falls back to defaults.
pub fn load_config() -> StorefrontConfig {
    let config = match option_env!("STOREFRONT_CONFIG_JSON") {
        Some(json) => StorefrontConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("falling back to default config: {}", e);
            StorefrontConfig::default()
        }),
        None => StorefrontConfig::default(),
    };

    config.with_overrides(
        option_env!("STOREFRONT_NEW_RELEASE_DAYS"),
        option_env!("STOREFRONT_CURRENCY_SYMBOL"),
    )
}

/// Today's date according to the browser clock.
pub fn today() -> NaiveDate {
    date_from_millis(js_sys::Date::now())
}

fn date_from_millis(millis: f64) -> NaiveDate {
    match DateTime::from_timestamp_millis(millis as i64) {
        Some(at) => at.date_naive(),
        None => {
            log::warn!("clock out of range: {}", millis);
            NaiveDate::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_millis() {
        assert_eq!(date_from_millis(0.0), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(
            date_from_millis(1_719_791_940_000.0),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_context_window_uses_config() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let config = StorefrontConfig::default().with_overrides(Some("7"), None);
        let ctx = StorefrontContext::new(config, Theme::default(), today);

        assert_eq!(ctx.release_window(), ReleaseWindow::new(today, 7));
    }
}
