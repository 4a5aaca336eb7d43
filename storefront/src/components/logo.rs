//! Logo component

use leptos::prelude::*;
use shared::StyleRole;

#[component]
pub fn Logo(
    /// Extra class for positioning the logo inside its parent.
    #[prop(optional, into)]
    class: Option<&'static str>,
) -> impl IntoView {
    let mut cls = StyleRole::LogoLink.class_name().to_string();
    if let Some(c) = class {
        cls.push(' ');
        cls.push_str(c);
    }

    view! {
        <a class=cls href="/">
            <h1 class=StyleRole::Logo.class_name()>"Sole&Ankh"</h1>
        </a>
    }
}
