//! Generic "heading + bullet list" section

use crate::styles::StyleRole;
use crate::types::TechCategory;
use leptos::prelude::*;

/// Renders one category: an `<h2>` label followed by its items as an
/// unordered list, in authored order.
///
/// `to_html()` closes each collected list with an empty `<!>` comment.
/// Browsers ignore it and no hydration ids are emitted.
#[component]
pub fn CategorySection(category: TechCategory) -> impl IntoView {
    let items = category
        .items
        .iter()
        .map(|item| {
            view! {
                <li class=StyleRole::ListItem.class()>{*item}</li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <h2 class=StyleRole::Subtitle.class()>{category.label}</h2>
        <div class=StyleRole::Text.class()>
            <ul class=StyleRole::ListItem.class()>
                {items}
            </ul>
        </div>
    }
}
