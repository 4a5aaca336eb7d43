//! Product grid component

use leptos::prelude::*;
use shared::{ShoeCardInput, StyleRole};

use super::ShoeCard;

#[component]
pub fn ShoeGrid(shoes: Vec<ShoeCardInput>) -> impl IntoView {
    view! {
        <div class=StyleRole::ShoeGrid.class_name()>
            {shoes
                .into_iter()
                .map(|shoe| {
                    view! {
                        <div class=StyleRole::ShoeGridItem.class_name()>
                            <ShoeCard shoe=shoe />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
