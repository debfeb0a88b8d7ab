//! # foodgram-pages
//!
//! Leptos SSR renderer for Foodgram's static informational pages.
//!
//! Pages are pure functions of zero arguments. Each returns a
//! [`RenderedPage`]: the markup fragment plus the [`PageMeta`] the host
//! applies to the document head. Nothing is written to a global head
//! behind the caller's back.
//!
//! ## Quick Start
//!
//! ```rust
//! use foodgram_pages::{config::SiteConfig, render_document, render_technologies};
//!
//! let page = render_technologies();
//! assert_eq!(page.meta.title, "О проекте");
//!
//! // Wrap the fragment into a complete document
//! let html = render_document(&page, &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Authored text and category table
//! - [`components`] - Leptos UI components
//! - [`styles`] - Style roles and CSS
//! - [`routes`] - Path to page lookup
//! - [`config`] - Site-level document settings
//! - [`export`] - Static export of every route
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod routes;
pub mod styles;
pub mod types;

use components::{PageDocument, TechnologiesPage};
use config::SiteConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

pub use error::{PageError, Result};
pub use types::{PageMeta, RenderedPage, TechCategory};

/// Render the "About the technologies" page.
///
/// Infallible and deterministic: every call yields byte-identical markup
/// and the same metadata.
///
/// # Example
///
/// ```rust
/// use foodgram_pages::render_technologies;
///
/// let page = render_technologies();
/// assert!(page.html.contains("Технологии"));
/// assert_eq!(page.meta.description, "Фудграм - Технологии");
/// ```
pub fn render_technologies() -> RenderedPage {
    let html = view! { <TechnologiesPage /> }.to_html();
    debug!(bytes = html.len(), "rendered technologies page");

    RenderedPage {
        meta: content::technologies_meta(),
        html,
    }
}

/// Render a complete HTML document around a rendered page.
///
/// The page's metadata goes into `<head>`, its markup into `<div id="root">`.
///
/// # Example
///
/// ```rust
/// use foodgram_pages::{config::SiteConfig, render_document, render_technologies};
///
/// let html = render_document(&render_technologies(), &SiteConfig::default());
/// assert!(html.contains("<title>О проекте</title>"));
/// ```
pub fn render_document(page: &RenderedPage, config: &SiteConfig) -> String {
    let doc = view! {
        <PageDocument page=page.clone() config=config.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
