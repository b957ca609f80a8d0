//! folio-rs: a static renderer for CMS-driven portfolio and blog sites
//!
//! Content comes from a headless CMS export (JSON documents). Build-time
//! queries pick the records each page needs, view components turn them into
//! HTML fragments, and the generator writes one set of pages per locale.

pub mod animation;
pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod i18n;
pub mod pages;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::ContentError;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// A site rooted in a directory
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// CMS export directory
    pub content_dir: PathBuf,
    /// Files copied verbatim into the output
    pub static_dir: PathBuf,
    /// UI translation files
    pub i18n_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self {
            content_dir: base_dir.join(&config.content_dir),
            static_dir: base_dir.join(&config.static_dir),
            i18n_dir: base_dir.join(&config.i18n_dir),
            public_dir: base_dir.join(&config.public_dir),
            config,
            base_dir,
        })
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
