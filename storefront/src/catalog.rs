//! ==============================================================================
//! catalog.rs - bundled demo catalog
//! ==============================================================================
//!
//! the catalog ships inside the wasm bundle; nothing is fetched at runtime.
//! releases are stored relative to today and resolved at load time.
//!
//! ==============================================================================

use chrono::NaiveDate;
use shared::{CatalogEntry, ShoeCardInput};

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Shoes to list, with releases resolved against `today`.
///
/// An unreadable catalog renders as an empty grid.
pub fn load(today: NaiveDate) -> Vec<ShoeCardInput> {
    match CatalogEntry::parse_list(CATALOG_JSON) {
        Ok(entries) => entries.into_iter().map(|e| e.into_input(today)).collect(),
        Err(e) => {
            log::warn!("bundled catalog unreadable: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{select_variant, DisplayVariant, ReleaseWindow};

    #[test]
    fn test_bundled_catalog_parses() {
        assert!(CatalogEntry::parse_list(CATALOG_JSON).is_ok());
    }

    #[test]
    fn test_bundled_catalog_covers_every_variant() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let window = ReleaseWindow::ending(today);
        let variants: Vec<_> = load(today)
            .iter()
            .map(|shoe| select_variant(shoe.sale_price, shoe.release_date, &window))
            .collect();

        assert!(variants.contains(&DisplayVariant::NewRelease));
        assert!(variants.contains(&DisplayVariant::OnSale));
        assert!(variants.contains(&DisplayVariant::Default));
    }
}
