//! Page chrome shared by every informational page

use crate::styles::{CONTAINER_CLASS, MAIN_CLASS};
use leptos::prelude::*;

/// Outer page chrome
#[component]
pub fn Main(children: Children) -> impl IntoView {
    view! {
        <main class=MAIN_CLASS>
            {children()}
        </main>
    }
}

/// Centered content column
#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! {
        <div class=CONTAINER_CLASS>
            {children()}
        </div>
    }
}
