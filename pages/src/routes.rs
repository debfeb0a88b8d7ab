//! Route table mapping URL paths to page renderers.

use tracing::debug;

use crate::error::{PageError, Result};
use crate::types::RenderedPage;

/// A page reachable at a fixed path.
#[derive(Clone, Copy, Debug)]
pub struct PageRoute {
    /// Canonical path, always with a leading slash and no trailing slash
    pub path: &'static str,
    render: fn() -> RenderedPage,
}

impl PageRoute {
    /// Render the page behind this route.
    pub fn render(&self) -> RenderedPage {
        (self.render)()
    }

    /// Directory (relative to an export root) holding this route's
    /// `index.html`.
    pub fn output_dir(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

const ROUTES: &[PageRoute] = &[PageRoute {
    path: "/technologies",
    render: crate::render_technologies,
}];

/// All registered routes, in registration order.
pub fn routes() -> &'static [PageRoute] {
    ROUTES
}

/// Find the route for `path`.
///
/// Leading and trailing slashes are optional: `technologies`,
/// `/technologies` and `/technologies/` all resolve to the same page.
pub fn resolve(path: &str) -> Result<&'static PageRoute> {
    let normalized = path.trim().trim_matches('/');
    let route = ROUTES
        .iter()
        .find(|route| !normalized.is_empty() && route.output_dir() == normalized)
        .ok_or_else(|| PageError::UnknownRoute(path.to_string()))?;

    debug!(requested = path, route = route.path, "resolved route");
    Ok(route)
}
