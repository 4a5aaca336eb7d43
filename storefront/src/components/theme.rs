//! Theme stylesheet injection

use leptos::prelude::*;
use leptos_meta::Style;

use crate::context::StorefrontContext;

/// Writes the active theme's stylesheet into the document head.
#[component]
pub fn ThemeStyles() -> impl IntoView {
    let ctx = expect_context::<StorefrontContext>();
    let css = ctx.theme.stylesheet();

    view! { <Style id="storefront-theme">{css}</Style> }
}
