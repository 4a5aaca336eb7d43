//! Header component

use leptos::prelude::*;
use shared::{HeaderView, StyleRole};

use super::{Logo, SuperHeader};
use crate::context::StorefrontContext;

/// Site header: the super header strip, then the bar with logo and nav.
///
/// Both visual headers are grouped under a single `<header>` element.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<StorefrontContext>();
    let HeaderView { super_header, links } = HeaderView::new(&ctx.config);

    view! {
        <header>
            <SuperHeader content=super_header />
            <div class=StyleRole::HeaderBar.class_name()>
                <Logo class=StyleRole::HeaderLogo.class_name() />
                <nav class=StyleRole::Nav.class_name()>
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a class=link.class() href=link.href>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
