//! ==============================================================================
//! style.rs - semantic style roles and the storefront theme
//! ==============================================================================
//!
//! purpose:
//!     keeps every visual rule out of the components. components tag their
//!     elements with a `StyleRole`; the active `Theme` turns roles into css.
//!     swapping the theme restyles the page without touching render logic.
//!
//! ==============================================================================

use std::fmt::Write;

// ==============================================================================
// roles
// ==============================================================================

/// semantic role of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    SuperHeader,
    SuperHeaderMessage,
    SearchInput,
    HelpLink,
    BagButton,
    HeaderBar,
    HeaderLogo,
    Logo,
    LogoLink,
    Nav,
    NavLink,
    /// only the first nav link carries this
    NavLinkAccent,
    ShoeGrid,
    ShoeGridItem,
    CardLink,
    Card,
    CardImageWrapper,
    CardImage,
    CardRow,
    CardName,
    CardPrice,
    CardColorInfo,
    BadgeNewRelease,
    BadgeOnSale,
}

impl StyleRole {
    pub const ALL: [StyleRole; 24] = [
        Self::SuperHeader,
        Self::SuperHeaderMessage,
        Self::SearchInput,
        Self::HelpLink,
        Self::BagButton,
        Self::HeaderBar,
        Self::HeaderLogo,
        Self::Logo,
        Self::LogoLink,
        Self::Nav,
        Self::NavLink,
        Self::NavLinkAccent,
        Self::ShoeGrid,
        Self::ShoeGridItem,
        Self::CardLink,
        Self::Card,
        Self::CardImageWrapper,
        Self::CardImage,
        Self::CardRow,
        Self::CardName,
        Self::CardPrice,
        Self::CardColorInfo,
        Self::BadgeNewRelease,
        Self::BadgeOnSale,
    ];

    /// css class the role is rendered with
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::SuperHeader => "super-header",
            Self::SuperHeaderMessage => "super-header-message",
            Self::SearchInput => "search-input",
            Self::HelpLink => "help-link",
            Self::BagButton => "bag-button",
            Self::HeaderBar => "header-bar",
            Self::HeaderLogo => "header-logo",
            Self::Logo => "logo",
            Self::LogoLink => "logo-link",
            Self::Nav => "nav",
            Self::NavLink => "nav-link",
            Self::NavLinkAccent => "nav-link-accent",
            Self::ShoeGrid => "shoe-grid",
            Self::ShoeGridItem => "shoe-grid-item",
            Self::CardLink => "card-link",
            Self::Card => "card",
            Self::CardImageWrapper => "card-image-wrapper",
            Self::CardImage => "card-image",
            Self::CardRow => "card-row",
            Self::CardName => "card-name",
            Self::CardPrice => "card-price",
            Self::CardColorInfo => "card-color-info",
            Self::BadgeNewRelease => "badge-new-release",
            Self::BadgeOnSale => "badge-on-sale",
        }
    }
}

// ==============================================================================
// theme
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub white: String,
    pub primary: String,
    pub secondary: String,
    pub gray_100: String,
    pub gray_300: String,
    pub gray_500: String,
    pub gray_700: String,
    pub gray_900: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub weights: Weights,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette {
                white: "hsl(0deg 0% 100%)".to_string(),
                primary: "hsl(340deg 65% 47%)".to_string(),
                secondary: "hsl(240deg 60% 63%)".to_string(),
                gray_100: "hsl(185deg 5% 95%)".to_string(),
                gray_300: "hsl(190deg 5% 80%)".to_string(),
                gray_500: "hsl(196deg 4% 60%)".to_string(),
                gray_700: "hsl(220deg 5% 40%)".to_string(),
                gray_900: "hsl(220deg 3% 20%)".to_string(),
            },
            weights: Weights {
                normal: 500,
                medium: 600,
                bold: 800,
            },
        }
    }
}

type Declarations = Vec<(&'static str, String)>;

fn decl(property: &'static str, value: impl Into<String>) -> (&'static str, String) {
    (property, value.into())
}

impl Theme {
    /// css declarations for one role
    pub fn declarations(&self, role: StyleRole) -> Declarations {
        let p = &self.palette;
        let w = &self.weights;

        match role {
            StyleRole::SuperHeader => vec![
                decl("display", "flex"),
                decl("align-items", "center"),
                decl("gap", "24px"),
                decl("padding", "12px 32px"),
                decl("font-size", "0.875rem"),
                decl("color", p.gray_300.as_str()),
                decl("background-color", p.gray_900.as_str()),
            ],
            StyleRole::SuperHeaderMessage => vec![decl("margin-right", "auto")],
            StyleRole::SearchInput => vec![
                decl("background", "transparent"),
                decl("border", "none"),
                decl("border-bottom", format!("1px solid {}", p.gray_300)),
                decl("color", "inherit"),
            ],
            StyleRole::HelpLink => vec![
                decl("color", "inherit"),
                decl("text-decoration", "none"),
            ],
            StyleRole::BagButton => vec![
                decl("background", "none"),
                decl("border", "none"),
                decl("padding", "0"),
                decl("color", "inherit"),
                decl("cursor", "pointer"),
            ],
            StyleRole::HeaderBar => vec![
                decl("padding", "0 32px"),
                decl("border-bottom", format!("1px solid {}", p.gray_300)),
                decl("display", "flex"),
                decl("flex-direction", "column"),
                decl("position", "relative"),
                decl("width", "100%"),
                decl("align-items", "center"),
                decl("height", "72px"),
            ],
            StyleRole::HeaderLogo => vec![
                decl("position", "absolute"),
                decl("left", "32px"),
                decl("line-height", "72px"),
            ],
            StyleRole::Logo => vec![
                decl("font-size", "1.5rem"),
                decl("font-weight", w.bold.to_string()),
            ],
            StyleRole::LogoLink => vec![
                decl("text-decoration", "none"),
                decl("color", "inherit"),
            ],
            StyleRole::Nav => vec![
                decl("flex", "1"),
                decl("display", "flex"),
                decl("align-items", "baseline"),
            ],
            StyleRole::NavLink => vec![
                decl("font-size", "1.125rem"),
                decl("text-transform", "uppercase"),
                decl("text-decoration", "none"),
                decl("color", p.gray_900.as_str()),
                decl("font-weight", w.medium.to_string()),
                decl("padding", "0 24px"),
                decl("line-height", "72px"),
            ],
            StyleRole::NavLinkAccent => vec![decl("color", p.secondary.as_str())],
            StyleRole::ShoeGrid => vec![
                decl("display", "flex"),
                decl("flex-wrap", "wrap"),
                decl("gap", "32px"),
                decl("padding", "32px"),
            ],
            StyleRole::ShoeGridItem => vec![
                decl("min-width", "275px"),
                decl("flex", "1"),
            ],
            StyleRole::CardLink => vec![
                decl("text-decoration", "none"),
                decl("color", "inherit"),
            ],
            StyleRole::Card => vec![decl("position", "relative")],
            StyleRole::CardImageWrapper => vec![
                decl("border-radius", "16px 16px 4px 4px"),
                decl("overflow", "clip"),
            ],
            StyleRole::CardImage => vec![decl("width", "100%")],
            StyleRole::CardRow => vec![
                decl("font-size", "1rem"),
                decl("display", "flex"),
            ],
            StyleRole::CardName => vec![
                decl("font-weight", w.medium.to_string()),
                decl("color", p.gray_900.as_str()),
            ],
            StyleRole::CardPrice => vec![decl("margin-left", "auto")],
            StyleRole::CardColorInfo => vec![decl("color", p.gray_700.as_str())],
            StyleRole::BadgeNewRelease => self.badge(p.secondary.as_str()),
            StyleRole::BadgeOnSale => self.badge(p.primary.as_str()),
        }
    }

    fn badge(&self, background: &str) -> Declarations {
        vec![
            decl("position", "absolute"),
            decl("top", "12px"),
            decl("right", "-4px"),
            decl("color", self.palette.white.as_str()),
            decl("padding", "7px 10px"),
            decl("border-radius", "2px"),
            decl("font-weight", self.weights.medium.to_string()),
            decl("font-size", "0.875rem"),
            decl("background-color", background),
        ]
    }

    /// one css rule for `role`
    pub fn rule(&self, role: StyleRole) -> String {
        let mut css = format!(".{} {{", role.class_name());
        for (property, value) in self.declarations(role) {
            let _ = write!(css, " {}: {};", property, value);
        }
        css.push_str(" }");
        css
    }

    /// stylesheet covering every role, one rule per line
    ///
    /// the accent rule comes after the plain nav link rule so it wins.
    pub fn stylesheet(&self) -> String {
        StyleRole::ALL
            .iter()
            .map(|role| self.rule(*role))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ==============================================================================
// spacer
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// inline style for an empty block of `size` pixels
///
/// a vertical spacer is 1px wide, a horizontal one 1px high; without an axis
/// the block is square.
pub fn spacer_style(size: u32, axis: Option<Axis>) -> String {
    let width = if axis == Some(Axis::Vertical) { 1 } else { size };
    let height = if axis == Some(Axis::Horizontal) { 1 } else { size };

    format!(
        "display: block; width: {w}px; min-width: {w}px; height: {h}px; min-height: {h}px;",
        w = width,
        h = height,
    )
}

// ==============================================================================
// tests
// ==============================================================================
