//! Static export of every registered page to a directory tree.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::SiteConfig;
use crate::error::{PageError, Result};
use crate::render_document;
use crate::routes::routes;

/// Write every route to `<dir>/<route>/index.html`.
///
/// Missing directories are created. Returns the written file paths in
/// route order.
pub fn export_site(dir: &Path, config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(routes().len());

    for route in routes() {
        let page_dir = dir.join(route.output_dir());
        std::fs::create_dir_all(&page_dir).map_err(|e| PageError::io(&page_dir, e))?;

        let html = render_document(&route.render(), config);
        let file = page_dir.join("index.html");
        std::fs::write(&file, html).map_err(|e| PageError::io(&file, e))?;

        info!(route = route.path, file = %file.display(), "page exported");
        written.push(file);
    }

    Ok(written)
}
