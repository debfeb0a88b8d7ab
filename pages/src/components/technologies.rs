//! "About the technologies" page

use super::{CategorySection, Container, Main};
use crate::content::{TECHNOLOGIES, TECHNOLOGIES_HEADING};
use crate::styles::{CONTENT_CLASS, StyleRole};
use leptos::prelude::*;

/// The technology stack overview: a heading and one section per category.
#[component]
pub fn TechnologiesPage() -> impl IntoView {
    view! {
        <Main>
            <Container>
                <h1 class=StyleRole::Title.class()>{TECHNOLOGIES_HEADING}</h1>
                <div class=CONTENT_CLASS>
                    <div>
                        {TECHNOLOGIES
                            .iter()
                            .copied()
                            .map(|category| view! { <CategorySection category=category /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Container>
        </Main>
    }
}
