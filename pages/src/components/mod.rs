//! Leptos UI components for the informational pages.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (html/head/body, applies PageMeta)
//! └── #root (fragment from RenderedPage)
//!     └── TechnologiesPage
//!         └── Main
//!             └── Container
//!                 ├── h1.title
//!                 └── CategorySection (per TechCategory)
//!                     ├── h2.subtitle
//!                     └── div.text > ul > li.textItem
//! ```
//!
//! Pages are normally rendered through [`crate::render_technologies`] and
//! [`crate::render_document`], but the components can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use foodgram_pages::components::{Container, Main};
//!
//! view! {
//!     <Main>
//!         <Container>
//!             <h1 class="title">"Рецепты"</h1>
//!         </Container>
//!     </Main>
//! }
//! ```

mod category;
mod document;
mod layout;
mod technologies;

pub use category::CategorySection;
pub use document::PageDocument;
pub use layout::{Container, Main};
pub use technologies::TechnologiesPage;
