//! Spacer component

use leptos::prelude::*;
use shared::{spacer_style, Axis};

/// Fixed empty space. Square unless an axis is given.
#[component]
pub fn Spacer(
    /// Size in pixels.
    size: u32,
    #[prop(optional)]
    axis: Option<Axis>,
) -> impl IntoView {
    view! { <span style=spacer_style(size, axis)></span> }
}
