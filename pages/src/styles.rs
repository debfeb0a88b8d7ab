//! CSS for the informational pages.
//!
//! Components never build class names dynamically: every styled element
//! takes its class from a [`StyleRole`] or one of the fixed layout classes
//! below, and [`PAGE_CSS`] styles exactly those classes.
//!
//! # Customization
//!
//! ```rust
//! use foodgram_pages::styles::PAGE_CSS;
//!
//! let my_css = ".title { color: tomato; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.ends_with("tomato; }"));
//! ```

/// Class on the `<main>` page chrome.
pub const MAIN_CLASS: &str = "main";

/// Class on the centered content column.
pub const CONTAINER_CLASS: &str = "container";

/// Class on the wrapper around all category sections.
pub const CONTENT_CLASS: &str = "content";

/// Semantic style roles used by page markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// Page `<h1>`
    Title,
    /// Category `<h2>`
    Subtitle,
    /// Container around a category's list
    Text,
    /// List and list item
    ListItem,
}

impl StyleRole {
    /// Every role, in the order the stylesheet declares them.
    pub const ALL: [StyleRole; 4] = [
        StyleRole::Title,
        StyleRole::Subtitle,
        StyleRole::Text,
        StyleRole::ListItem,
    ];

    /// CSS class name for this role.
    pub const fn class(self) -> &'static str {
        match self {
            StyleRole::Title => "title",
            StyleRole::Subtitle => "subtitle",
            StyleRole::Text => "text",
            StyleRole::ListItem => "textItem",
        }
    }
}

/// Stylesheet for the page chrome and the four style roles.
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --text-main: #000000;
    --text-dim: #4a4a4a;
    --accent: #4a61dd;
    --font-main: 'Montserrat', 'Helvetica Neue', Arial, sans-serif;
    --container-max: 1240px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text-main);
    font-family: var(--font-main);
}

.main {
    min-height: 100vh;
    padding: 50px 0 100px;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 20px;
}

.title {
    margin: 0 0 50px;
    font-size: 40px;
    font-weight: 700;
    line-height: 1.2;
}

.content {
    max-width: 800px;
}

.subtitle {
    margin: 40px 0 16px;
    font-size: 24px;
    font-weight: 600;
    color: var(--accent);
}

.text {
    font-size: 16px;
    line-height: 1.6;
    color: var(--text-dim);
}

.textItem {
    margin: 0 0 8px;
}

ul.textItem {
    padding-left: 20px;
}

@media (max-width: 820px) {
    .title {
        font-size: 28px;
        margin-bottom: 30px;
    }

    .subtitle {
        font-size: 20px;
    }
}
"#;
