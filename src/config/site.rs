//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    /// Suffix appended to every document title ("<page> | <site_title_alt>")
    pub site_title_alt: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Locales
    /// Default locale, rendered without a path prefix
    pub language: String,
    pub locales: IndexMap<String, LocaleConfig>,

    // Directory
    pub content_dir: String,
    pub static_dir: String,
    pub public_dir: String,
    pub i18n_dir: String,

    // Content
    pub date_format: String,
    #[serde(default)]
    pub pages: PagesConfig,
    pub featured_limit: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut locales = IndexMap::new();
        locales.insert(
            "de-de".to_string(),
            LocaleConfig {
                path: "de".to_string(),
                name: "Deutsch".to_string(),
                date_format: None,
            },
        );
        locales.insert(
            "en-gb".to_string(),
            LocaleConfig {
                path: "en".to_string(),
                name: "English".to_string(),
                date_format: Some("DD/MM/YYYY".to_string()),
            },
        );

        Self {
            title: "Folio".to_string(),
            site_title_alt: "Folio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            language: "de-de".to_string(),
            locales,

            content_dir: "content".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),
            i18n_dir: "i18n".to_string(),

            date_format: "DD.MM.YYYY".to_string(),
            pages: PagesConfig::default(),
            featured_limit: 3,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Look up a locale, falling back to nothing for unknown keys
    pub fn locale(&self, lang: &str) -> Option<&LocaleConfig> {
        self.locales.get(lang)
    }

    /// Whether `lang` is the default (unprefixed) locale
    pub fn is_default_locale(&self, lang: &str) -> bool {
        self.language == lang
    }

    /// Date format for a locale, using the site-wide format as fallback
    pub fn date_format_for(&self, lang: &str) -> &str {
        self.locale(lang)
            .and_then(|l| l.date_format.as_deref())
            .unwrap_or(&self.date_format)
    }
}

/// A single locale the site is rendered in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// URL prefix for non-default locales (e.g. "en" for /en/blog/)
    pub path: String,
    /// Human readable name shown in the language switcher
    pub name: String,
    pub date_format: Option<String>,
}

/// CMS page records used by the page composers
///
/// `home` and `blog` are CMS uids; where the blog is served is `blog_path`,
/// so renaming a record in the CMS never moves a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub home: String,
    pub blog: String,
    pub blog_path: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            home: "home".to_string(),
            blog: "blog".to_string(),
            blog_path: "blog".to_string(),
        }
    }
}
