//! Super header component

use leptos::prelude::*;
use shared::{StyleRole, SuperHeaderView};

/// Promotional strip above the main header bar.
#[component]
pub fn SuperHeader(content: SuperHeaderView) -> impl IntoView {
    let SuperHeaderView {
        message,
        search_placeholder,
        help,
    } = content;

    view! {
        <div class=StyleRole::SuperHeader.class_name()>
            <span class=StyleRole::SuperHeaderMessage.class_name()>{message}</span>
            <input
                type="search"
                class=StyleRole::SearchInput.class_name()
                placeholder=search_placeholder
                aria-label="Search"
            />
            <a class=StyleRole::HelpLink.class_name() href=help.href>{help.label}</a>
            <button type="button" class=StyleRole::BagButton.class_name() aria-label="Shopping bag">
                // shopping bag icon
                <svg
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1"
                >
                    <path d="M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z"></path>
                    <line x1="3" y1="6" x2="21" y2="6"></line>
                    <path d="M16 10a4 4 0 0 1-8 0"></path>
                </svg>
            </button>
        </div>
    }
}
