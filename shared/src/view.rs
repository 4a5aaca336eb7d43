//! ==============================================================================
//! view.rs - render descriptions for the header and the product card
//! ==============================================================================
//!
//! purpose:
//!     a view is the exact content a component renders, resolved ahead of
//!     time: link targets, texts, the selected badge. components in the
//!     storefront crate map these fields one to one onto markup.
//!
//! ==============================================================================

use crate::config::StorefrontConfig;
use crate::format::{pluralize, ReleaseWindow};
use crate::model::{select_variant, Badge, DisplayVariant, ShoeCardInput};
use crate::style::StyleRole;

/// gap between the card image and its text rows, in pixels
pub const IMAGE_TEXT_GAP: u32 = 12;

// ==============================================================================
// header
// ==============================================================================

/// main navigation, in display order
pub const MAIN_NAV: [(&str, &str); 6] = [
    ("Sale", "/sale"),
    ("New Releases", "/new"),
    ("Men", "/men"),
    ("Women", "/women"),
    ("Kids", "/kids"),
    ("Collections", "/collections"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// rendered in the accent color
    pub accented: bool,
}

impl NavLink {
    /// space separated classes for the link
    pub fn class(&self) -> String {
        if self.accented {
            format!(
                "{} {}",
                StyleRole::NavLink.class_name(),
                StyleRole::NavLinkAccent.class_name()
            )
        } else {
            StyleRole::NavLink.class_name().to_string()
        }
    }
}

/// promotional strip rendered above the main bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperHeaderView {
    pub message: String,
    pub search_placeholder: &'static str,
    pub help: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub super_header: SuperHeaderView,
    pub links: Vec<NavLink>,
}

impl HeaderView {
    pub fn new(config: &StorefrontConfig) -> Self {
        let links = MAIN_NAV
            .iter()
            .enumerate()
            .map(|(i, &(label, href))| NavLink {
                label,
                href,
                accented: i == 0,
            })
            .collect();

        let super_header = SuperHeaderView {
            message: format!(
                "Free shipping on domestic orders over {}!",
                config.format_price(config.free_shipping_threshold)
            ),
            search_placeholder: "Search…",
            help: NavLink {
                label: "Help",
                href: "/help",
                accented: false,
            },
        };

        Self { super_header, links }
    }
}

// ==============================================================================
// product card
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeCardView {
    pub href: String,
    pub image_src: String,
    pub image_gap: u32,
    pub name: String,
    pub price_text: String,
    pub colors_text: String,
    pub variant: DisplayVariant,
    /// `None` means no badge element at all
    pub badge: Option<Badge>,
}

impl ShoeCardView {
    pub fn build(input: &ShoeCardInput, window: &ReleaseWindow, config: &StorefrontConfig) -> Self {
        let variant = select_variant(input.sale_price, input.release_date, window);

        Self {
            href: format!("/shoe/{}", input.slug),
            image_src: input.image_src.clone(),
            image_gap: IMAGE_TEXT_GAP,
            name: input.name.clone(),
            // the list price is shown even while on sale
            price_text: config.format_price(input.price),
            colors_text: format!(
                "{} {}",
                input.num_of_colors,
                pluralize("Color", input.num_of_colors)
            ),
            variant,
            badge: variant.badge(),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn shoe(price: u32, sale_price: Option<u32>, days_ago: u64, colors: u32) -> ShoeCardInput {
        ShoeCardInput {
            slug: "air-jordan-1".to_string(),
            name: "Air Jordan 1".to_string(),
            image_src: "/assets/air-jordan-1.jpg".to_string(),
            price,
            sale_price,
            release_date: today().checked_sub_days(Days::new(days_ago)),
            num_of_colors: colors,
        }
    }

    fn build(input: &ShoeCardInput) -> ShoeCardView {
        let config = StorefrontConfig::default();
        ShoeCardView::build(input, &config.release_window(today()), &config)
    }

    #[test]
    fn test_discounted_new_shoe_shows_sale() {
        let view = build(&shoe(100, Some(80), 20, 1));

        assert_eq!(view.badge.map(|b| b.label), Some("Sale"));
        assert_eq!(view.price_text, "$1");
        assert_eq!(view.colors_text, "1 Color");
    }

    #[test]
    fn test_recent_shoe_shows_just_released() {
        let view = build(&shoe(120, None, 5, 3));

        assert_eq!(view.variant, DisplayVariant::NewRelease);
        assert_eq!(view.badge.map(|b| b.label), Some("Just Released!"));
        assert_eq!(view.colors_text, "3 Colors");
    }

    #[test]
    fn test_old_shoe_has_no_badge() {
        let view = build(&shoe(90, None, 730, 2));

        assert_eq!(view.variant, DisplayVariant::Default);
        assert!(view.badge.is_none());
        assert_eq!(view.colors_text, "2 Colors");
    }

    #[test]
    fn test_zero_colors_is_plural() {
        assert_eq!(build(&shoe(90, None, 730, 0)).colors_text, "0 Colors");
    }

    #[test]
    fn test_card_link_and_layout() {
        let view = build(&shoe(16500, None, 730, 2));

        assert_eq!(view.href, "/shoe/air-jordan-1");
        assert_eq!(view.image_src, "/assets/air-jordan-1.jpg");
        assert_eq!(view.image_gap, 12);
        assert_eq!(view.price_text, "$165");
    }

    #[test]
    fn test_inconsistent_sale_price_still_renders() {
        let view = build(&shoe(100, Some(500), 730, 1));
        assert_eq!(view.variant, DisplayVariant::OnSale);
        assert_eq!(view.price_text, "$1");
    }

    #[test]
    fn test_header_links_in_order() {
        let header = HeaderView::new(&StorefrontConfig::default());
        let links: Vec<_> = header.links.iter().map(|l| (l.label, l.href)).collect();

        assert_eq!(
            links,
            vec![
                ("Sale", "/sale"),
                ("New Releases", "/new"),
                ("Men", "/men"),
                ("Women", "/women"),
                ("Kids", "/kids"),
                ("Collections", "/collections"),
            ]
        );
    }

    #[test]
    fn test_only_first_link_accented() {
        let header = HeaderView::new(&StorefrontConfig::default());
        let accented: Vec<_> = header.links.iter().map(|l| l.accented).collect();

        assert_eq!(accented, vec![true, false, false, false, false, false]);
        assert_eq!(header.links[0].class(), "nav-link nav-link-accent");
        assert_eq!(header.links[1].class(), "nav-link");
    }

    #[test]
    fn test_super_header_message_uses_threshold() {
        let header = HeaderView::new(&StorefrontConfig::default());
        assert_eq!(
            header.super_header.message,
            "Free shipping on domestic orders over $75!"
        );
        assert_eq!(header.super_header.help.href, "/help");
    }
}
