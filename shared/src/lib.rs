//! ==============================================================================
//! lib.rs - shared storefront logic
//! ==============================================================================
//!
//! purpose:
//!     everything the storefront renders is decided here, as plain data.
//!     components in the storefront crate only turn these descriptions into
//!     markup, so the decisions can be tested on the host without a browser.
//!
//! relationships:
//!     - used by: storefront (ShoeCard, Header, ShoeGrid, ThemeStyles)
//!     - model: ShoeCardInput, DisplayVariant, select_variant
//!     - format: price / pluralization / release recency collaborators
//!     - view: render descriptions (ShoeCardView, HeaderView)
//!     - style: semantic style roles and the swappable theme
//!     - config: StorefrontConfig and its json loader
//!
//! ==============================================================================

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod style;
pub mod view;

pub use config::StorefrontConfig;
pub use error::{Error, Result};
pub use format::{format_price, is_new_shoe, pluralize, ReleaseWindow};
pub use model::{select_variant, Badge, CatalogEntry, DisplayVariant, ShoeCardInput};
pub use style::{spacer_style, Axis, StyleRole, Theme};
pub use view::{HeaderView, NavLink, ShoeCardView, SuperHeaderView};
