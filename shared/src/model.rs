//! ==============================================================================
//! model.rs - shoe listing data and display variant selection
//! ==============================================================================

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{is_new_shoe, ReleaseWindow};
use crate::style::StyleRole;

// ==============================================================================
// card input
// ==============================================================================

/// attributes of one shoe listing, supplied fresh on every render
///
/// `sale_price` is expected to be at most `price`; that is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeCardInput {
    /// opaque identifier, used for the `/shoe/{slug}` link
    pub slug: String,
    pub name: String,
    /// url or path of the product image
    pub image_src: String,
    /// list price in cents
    pub price: u32,
    /// discounted price in cents, present only while on sale
    #[serde(default)]
    pub sale_price: Option<u32>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    pub num_of_colors: u32,
}

// ==============================================================================
// display variant
// ==============================================================================

/// mutually exclusive display mode of a product card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    NewRelease,
    OnSale,
    Default,
}

/// small promotional tag overlaid on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub role: StyleRole,
}

impl DisplayVariant {
    /// badge to render for this variant; `Default` renders none
    pub fn badge(self) -> Option<Badge> {
        match self {
            Self::NewRelease => Some(Badge {
                label: "Just Released!",
                role: StyleRole::BadgeNewRelease,
            }),
            Self::OnSale => Some(Badge {
                label: "Sale",
                role: StyleRole::BadgeOnSale,
            }),
            Self::Default => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewRelease => "new-release",
            Self::OnSale => "on-sale",
            Self::Default => "default",
        }
    }
}

/// pick the card variant from the two optional fields
///
/// a sale always wins: a shoe that is both discounted and newly released
/// shows only the sale badge.
pub fn select_variant(
    sale_price: Option<u32>,
    release_date: Option<NaiveDate>,
    window: &ReleaseWindow,
) -> DisplayVariant {
    let variant = if sale_price.is_some() {
        DisplayVariant::OnSale
    } else if is_new_shoe(release_date, window) {
        DisplayVariant::NewRelease
    } else {
        DisplayVariant::Default
    };

    log::trace!(
        "variant {} (sale_price={:?}, release_date={:?})",
        variant.as_str(),
        sale_price,
        release_date
    );
    variant
}

// ==============================================================================
// catalog entries
// ==============================================================================

/// catalog record with a release expressed relative to today
///
/// keeps bundled demo data from going stale: `releasedDaysAgo: 5` is always
/// five days before the day the page is rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: u32,
    #[serde(default)]
    pub sale_price: Option<u32>,
    #[serde(default)]
    pub released_days_ago: Option<u64>,
    pub num_of_colors: u32,
}

impl CatalogEntry {
    /// parse a json array of catalog entries
    pub fn parse_list(json: &str) -> Result<Vec<CatalogEntry>> {
        Ok(serde_json::from_str(json)?)
    }

    /// resolve the relative release against `today`
    pub fn into_input(self, today: NaiveDate) -> ShoeCardInput {
        let release_date = self
            .released_days_ago
            .and_then(|days| today.checked_sub_days(Days::new(days)));

        ShoeCardInput {
            slug: self.slug,
            name: self.name,
            image_src: self.image_src,
            price: self.price,
            sale_price: self.sale_price,
            release_date,
            num_of_colors: self.num_of_colors,
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
