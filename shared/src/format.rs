//! Formatting collaborators used by the product card.
//!
//! These are the three small helpers the card delegates to: price text,
//! english pluralization and the "released recently" check.

use chrono::NaiveDate;

/// Default length of the "just released" window, in days.
pub const DEFAULT_RELEASE_WINDOW_DAYS: u32 = 30;

/// Format an amount given in minor units (cents).
///
/// Whole amounts drop the decimals (`16500` -> `$165`), anything else is
/// shown with two digits (`16550` -> `$165.50`).
pub fn format_price(symbol: &str, cents: u32) -> String {
    let major = cents / 100;
    let minor = cents % 100;

    if minor == 0 {
        format!("{}{}", symbol, major)
    } else {
        format!("{}{}.{:02}", symbol, major, minor)
    }
}

/// `word` when `count == 1`, its plural form otherwise.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Rolling window of whole days ending at `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindow {
    pub today: NaiveDate,
    pub days: u32,
}

impl ReleaseWindow {
    pub fn new(today: NaiveDate, days: u32) -> Self {
        Self { today, days }
    }

    /// Window of the default length ending at `today`.
    pub fn ending(today: NaiveDate) -> Self {
        Self::new(today, DEFAULT_RELEASE_WINDOW_DAYS)
    }

    /// Whether `date` is strictly less than `days` days before `today`.
    ///
    /// Dates after `today` are inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let age = self.today.signed_duration_since(date).num_days();
        age < i64::from(self.days)
    }
}

/// Whether a shoe released on `release_date` is still "new".
///
/// A missing date is never new.
pub fn is_new_shoe(release_date: Option<NaiveDate>, window: &ReleaseWindow) -> bool {
    release_date.is_some_and(|date| window.contains(date))
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_price_whole_amount() {
        assert_eq!(format_price("$", 16500), "$165");
        assert_eq!(format_price("$", 100), "$1");
        assert_eq!(format_price("$", 0), "$0");
    }

    #[test]
    fn test_format_price_fractional_amount() {
        assert_eq!(format_price("$", 16550), "$165.50");
        assert_eq!(format_price("$", 9005), "$90.05");
        assert_eq!(format_price("€", 1), "€0.01");
    }

    #[test]
    fn test_pluralize_boundary() {
        assert_eq!(pluralize("Color", 1), "Color");
        assert_eq!(pluralize("Color", 0), "Colors");
        assert_eq!(pluralize("Color", 2), "Colors");
    }

    #[test]
    fn test_release_window_edges() {
        let window = ReleaseWindow::ending(date(2024, 6, 30));

        assert!(window.contains(date(2024, 6, 30)));
        // 29 days ago
        assert!(window.contains(date(2024, 6, 1)));
        // exactly 30 days ago falls outside
        assert!(!window.contains(date(2024, 5, 31)));
    }

    #[test]
    fn test_release_window_future_date() {
        let window = ReleaseWindow::ending(date(2024, 6, 30));
        assert!(window.contains(date(2024, 7, 15)));
    }

    #[test]
    fn test_release_window_custom_length() {
        let window = ReleaseWindow::new(date(2024, 6, 30), 7);
        assert!(window.contains(date(2024, 6, 24)));
        assert!(!window.contains(date(2024, 6, 23)));
    }

    #[test]
    fn test_is_new_shoe_without_date() {
        let window = ReleaseWindow::ending(date(2024, 6, 30));
        assert!(!is_new_shoe(None, &window));
        assert!(is_new_shoe(Some(date(2024, 6, 25)), &window));
        assert!(!is_new_shoe(Some(date(2022, 6, 30)), &window));
    }
}
