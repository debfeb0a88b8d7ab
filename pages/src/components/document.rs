//! Root document component - the complete HTML page
//!
//! Applies a page's [`PageMeta`] to the `<head>` and mounts the rendered
//! fragment under `#root`.

use crate::config::SiteConfig;
use crate::styles::PAGE_CSS;
use crate::types::{PageMeta, RenderedPage};
use leptos::prelude::*;

/// The complete HTML document for one page
#[component]
pub fn PageDocument(page: RenderedPage, config: SiteConfig) -> impl IntoView {
    let RenderedPage { meta, html } = page;
    let PageMeta {
        title,
        description,
        og_title,
    } = meta;
    let SiteConfig {
        lang,
        site_name,
        inline_css,
        stylesheet_href,
    } = config;

    let inline_style = inline_css.then(|| view! { <style>{PAGE_CSS}</style> });
    let stylesheet_link =
        stylesheet_href.map(|href| view! { <link rel="stylesheet" href=href /> });

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                {leptos::html::meta().attr("property", "og:title").content(og_title)}
                {leptos::html::meta().attr("property", "og:site_name").content(site_name)}
                {stylesheet_link}
                {inline_style}
            </head>
            <body>
                <div id="root" inner_html=html></div>
            </body>
        </html>
    }
}
