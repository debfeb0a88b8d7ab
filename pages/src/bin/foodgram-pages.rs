//! # foodgram-pages
//!
//! Renders Foodgram's static informational pages to HTML.
//!
//! ```bash
//! # Full document on stdout
//! foodgram-pages render --route /technologies
//!
//! # Fragment only, for mounting into an existing shell
//! foodgram-pages render --fragment --out technologies.html
//!
//! # Head metadata as JSON
//! foodgram-pages meta
//!
//! # Every route into ./dist/<route>/index.html
//! foodgram-pages export --dir dist
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use foodgram_pages::config::SiteConfig;
use foodgram_pages::export::export_site;
use foodgram_pages::render_document;
use foodgram_pages::routes::resolve;

const DEFAULT_ROUTE: &str = "/technologies";

#[derive(Parser, Debug)]
#[command(name = "foodgram-pages")]
#[command(about = "Render Foodgram's static informational pages to HTML")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one page as a full HTML document (or bare fragment)
    Render {
        /// Route path to render
        #[arg(long, default_value = DEFAULT_ROUTE)]
        route: String,
        /// Emit only the page markup, without <html>/<head>
        #[arg(long)]
        fragment: bool,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Site config file (default: .foodgram/pages.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a page's head metadata as JSON
    Meta {
        /// Route path to describe
        #[arg(long, default_value = DEFAULT_ROUTE)]
        route: String,
    },
    /// Write every page to <DIR>/<route>/index.html
    Export {
        /// Output directory
        #[arg(long)]
        dir: PathBuf,
        /// Site config file (default: .foodgram/pages.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn site_config(explicit: Option<&Path>) -> Result<SiteConfig> {
    match explicit {
        Some(path) => SiteConfig::read(path)
            .with_context(|| format!("Cannot load site config {}", path.display())),
        None => Ok(SiteConfig::load(Path::new("."))),
    }
}

fn write_output(html: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Cannot create {}", parent.display()))?;
            }
            std::fs::write(path, html)
                .with_context(|| format!("Cannot write {}", path.display()))?;
            info!(file = %path.display(), bytes = html.len(), "page written");
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            route,
            fragment,
            out,
            config,
        } => {
            let page = resolve(&route)?.render();
            let html = if fragment {
                page.html
            } else {
                let config = site_config(config.as_deref())?;
                debug!(?config, "using site config");
                render_document(&page, &config)
            };
            write_output(&html, out.as_deref())
        }
        Command::Meta { route } => {
            let meta = resolve(&route)?.render().meta;
            let json = serde_json::to_string_pretty(&meta).context("Cannot serialize metadata")?;
            println!("{}", json);
            Ok(())
        }
        Command::Export { dir, config } => {
            let config = site_config(config.as_deref())?;
            let written = export_site(&dir, &config)
                .with_context(|| format!("Cannot export pages to {}", dir.display()))?;
            info!(pages = written.len(), dir = %dir.display(), "export complete");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[foodgram-pages] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
