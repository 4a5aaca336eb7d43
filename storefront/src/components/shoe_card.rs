//! Product card component

use leptos::prelude::*;
use shared::{ShoeCardInput, ShoeCardView, StyleRole};

use super::Spacer;
use crate::context::StorefrontContext;

/// Summary card for one shoe, linking to its product page.
///
/// The badge element only exists for the new-release and on-sale variants.
#[component]
pub fn ShoeCard(shoe: ShoeCardInput) -> impl IntoView {
    let ctx = expect_context::<StorefrontContext>();
    let card = ShoeCardView::build(&shoe, &ctx.release_window(), &ctx.config);

    view! {
        <a class=StyleRole::CardLink.class_name() href=card.href>
            <article class=StyleRole::Card.class_name() data-variant=card.variant.as_str()>
                <div class=StyleRole::CardImageWrapper.class_name()>
                    <img class=StyleRole::CardImage.class_name() alt="" src=card.image_src />
                </div>
                <Spacer size=card.image_gap />
                <div class=StyleRole::CardRow.class_name()>
                    <h3 class=StyleRole::CardName.class_name()>{card.name}</h3>
                    <span class=StyleRole::CardPrice.class_name()>{card.price_text}</span>
                </div>
                <div class=StyleRole::CardRow.class_name()>
                    <p class=StyleRole::CardColorInfo.class_name()>{card.colors_text}</p>
                </div>
                {card
                    .badge
                    .map(|badge| {
                        view! { <span class=badge.role.class_name()>{badge.label}</span> }
                    })}
            </article>
        </a>
    }
}
