//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod logo;
mod shoe_card;
mod shoe_grid;
mod spacer;
mod super_header;
mod theme;

pub use header::Header;
pub use logo::Logo;
pub use shoe_card::ShoeCard;
pub use shoe_grid::ShoeGrid;
pub use spacer::Spacer;
pub use super_header::SuperHeader;
pub use theme::ThemeStyles;
