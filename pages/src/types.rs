//! Data types shared by the page components and the document renderer.
//!
//! Category records are `Copy` and borrow `'static` text, so the content
//! table in [`crate::content`] can be a plain `const`. Metadata owns its
//! strings so it can be serialized and handed to a host.

use serde::{Deserialize, Serialize};

/// One technology grouping shown on a page: a label and its items in
/// authored order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechCategory {
    /// Sub-heading text, e.g. `"Backend:"`
    pub label: &'static str,
    /// Bullet list entries, rendered in this order
    pub items: &'static [&'static str],
}

/// Head-level document metadata produced by a page.
///
/// The document renderer turns this into `<title>`,
/// `<meta name="description">` and `<meta property="og:title">`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Visible tab/page title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Social-preview title (`og:title`)
    pub og_title: String,
}

/// Output of rendering a page: the markup fragment and the metadata the
/// host should apply to the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// Metadata for the surrounding document head
    pub meta: PageMeta,
    /// HTML fragment for the host's mount point
    pub html: String,
}
