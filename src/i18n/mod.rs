//! Internationalization (i18n) support
//!
//! Two concerns live here: UI strings per locale (loaded from
//! `<i18n_dir>/<locale>.yml`) and locale-aware routing, where the default
//! locale is served from the site root and every other locale from its
//! configured path prefix.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::error::ContentError;
use crate::helpers::url_for;

/// Strings used when no language file provides them
const BUILTIN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.blog", "Blog"),
    ("blog.min_read", "min read"),
    ("skip_nav", "Skip to content"),
    ("footer.copyright", "All rights reserved."),
];

/// Internationalization handler
#[derive(Debug, Clone)]
pub struct I18n {
    /// Current language
    language: String,
    /// Language consulted when the current one lacks a key
    fallback: String,
    /// Language data: lang -> key -> translation
    translations: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    /// Create a new i18n handler
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            fallback: language.to_string(),
            translations: HashMap::new(),
        }
    }

    /// Load language files from a directory
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let ext = path.extension().and_then(|e| e.to_str());
            if !path.is_file() || !matches!(ext, Some("yml") | Some("yaml")) {
                continue;
            }

            let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read language file {:?}", path))?;

            match serde_yaml::from_str(&content) {
                Ok(data) => {
                    self.translations.insert(lang.to_string(), data);
                    tracing::debug!("Loaded language file: {:?}", path);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                }
            }
        }

        Ok(())
    }

    /// Get the current language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// A copy of this handler switched to `lang`
    pub fn for_language(&self, lang: &str) -> Self {
        Self {
            language: lang.to_string(),
            ..self.clone()
        }
    }

    /// Get a translation by key; keys can be nested like "nav.blog"
    pub fn get(&self, key: &str) -> String {
        [self.language.as_str(), self.fallback.as_str()]
            .iter()
            .filter_map(|lang| self.translations.get(*lang))
            .find_map(|data| get_nested_value(data, key))
            .map(yaml_value_to_string)
            .or_else(|| {
                BUILTIN
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            })
            .unwrap_or_else(|| key.to_string())
    }

    /// The strings the layout and cards need, resolved for the current language
    pub fn ui_strings(&self) -> UiStrings {
        UiStrings {
            home: self.get("nav.home"),
            blog: self.get("nav.blog"),
            min_read: self.get("blog.min_read"),
            skip_nav: self.get("skip_nav"),
            copyright: self.get("footer.copyright"),
        }
    }
}

/// Resolved UI strings handed to templates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiStrings {
    pub home: String,
    pub blog: String,
    pub min_read: String,
    pub skip_nav: String,
    pub copyright: String,
}

/// Route of `path` in `lang`, without the site root.
///
/// # Examples
/// ```ignore
/// localized_path(&config, "en-gb", "blog/") // -> "/en/blog/"
/// localized_path(&config, "de-de", "blog/") // -> "/blog/"
/// ```
pub fn localized_path(
    config: &SiteConfig,
    lang: &str,
    path: &str,
) -> Result<String, ContentError> {
    let locale = config
        .locale(lang)
        .ok_or_else(|| ContentError::UnknownLocale(lang.to_string()))?;
    let path = path.trim_start_matches('/');

    if config.is_default_locale(lang) || locale.path.is_empty() {
        Ok(format!("/{}", path))
    } else {
        Ok(format!("/{}/{}", locale.path.trim_matches('/'), path))
    }
}

/// Strip the locale prefix from a pathname, returning the logical route
pub fn unlocalized_path<'a>(config: &SiteConfig, lang: &str, pathname: &'a str) -> &'a str {
    let pathname = pathname.trim_start_matches('/');
    if config.is_default_locale(lang) {
        return pathname;
    }

    match config.locale(lang) {
        Some(locale) if !locale.path.is_empty() => {
            let prefix = locale.path.trim_matches('/');
            match pathname.strip_prefix(prefix) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                    rest.trim_start_matches('/')
                }
                _ => pathname,
            }
        }
        _ => pathname,
    }
}

/// One entry of the language switcher
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternate {
    pub lang: String,
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Links to the same logical page in every configured locale
pub fn alternates(config: &SiteConfig, current: &str, path: &str) -> Result<Vec<Alternate>> {
    config
        .locales
        .iter()
        .map(|(lang, locale)| {
            let route = localized_path(config, lang, path)?;
            Ok(Alternate {
                lang: lang.clone(),
                name: locale.name.clone(),
                href: url_for(&config.root, &route),
                active: lang == current,
            })
        })
        .collect()
}

/// Get a nested value from a YAML map using dot notation
fn get_nested_value<'a>(
    data: &'a HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<&'a serde_yaml::Value> {
    let mut parts = key.split('.');
    let mut current = data.get(parts.next()?);

    for part in parts {
        match current {
            Some(serde_yaml::Value::Mapping(map)) => {
                current = map.get(serde_yaml::Value::String(part.to_string()));
            }
            _ => return None,
        }
    }

    current
}

/// Convert a YAML value to a string
fn yaml_value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i18n() -> I18n {
        let mut i18n = I18n::new("de-de");
        let de: HashMap<String, serde_yaml::Value> =
            serde_yaml::from_str("nav:\n  blog: Journal\nblog:\n  min_read: Min. Lesezeit\n")
                .unwrap();
        let en: HashMap<String, serde_yaml::Value> =
            serde_yaml::from_str("nav:\n  home: Start page\n").unwrap();
        i18n.translations.insert("de-de".to_string(), de);
        i18n.translations.insert("en-gb".to_string(), en);
        i18n
    }

    #[test]
    fn test_get_translation() {
        let i18n = i18n();
        assert_eq!(i18n.get("nav.blog"), "Journal");
        assert_eq!(i18n.get("nav.home"), "Home");
        assert_eq!(i18n.get("unknown.key"), "unknown.key");
    }

    #[test]
    fn test_fallback_language() {
        let en = i18n().for_language("en-gb");
        assert_eq!(en.language(), "en-gb");
        assert_eq!(en.get("nav.home"), "Start page");
        // Missing in en-gb, found in the default language
        assert_eq!(en.get("nav.blog"), "Journal");
        assert_eq!(en.ui_strings().min_read, "Min. Lesezeit");
    }

    #[test]
    fn test_load_languages() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("de-de.yml"), "skip_nav: Zum Inhalt\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut i18n = I18n::new("de-de");
        i18n.load_languages(dir.path()).unwrap();
        assert_eq!(i18n.get("skip_nav"), "Zum Inhalt");
    }

    #[test]
    fn test_localized_path() {
        let config = SiteConfig::default();
        assert_eq!(localized_path(&config, "de-de", "blog/").unwrap(), "/blog/");
        assert_eq!(localized_path(&config, "en-gb", "/blog/").unwrap(), "/en/blog/");
        assert_eq!(localized_path(&config, "en-gb", "").unwrap(), "/en/");
        assert_eq!(
            localized_path(&config, "fr-fr", "blog/").unwrap_err(),
            ContentError::UnknownLocale("fr-fr".to_string())
        );
    }

    #[test]
    fn test_unlocalized_path() {
        let config = SiteConfig::default();
        assert_eq!(unlocalized_path(&config, "en-gb", "/en/blog/"), "blog/");
        assert_eq!(unlocalized_path(&config, "en-gb", "/en/"), "");
        assert_eq!(unlocalized_path(&config, "en-gb", "/english/"), "english/");
        assert_eq!(unlocalized_path(&config, "de-de", "/blog/"), "blog/");
    }

    #[test]
    fn test_alternates() {
        let config = SiteConfig::default();
        let alts = alternates(&config, "en-gb", "blog/").unwrap();
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[0].href, "/blog/");
        assert!(!alts[0].active);
        assert_eq!(alts[1].href, "/en/blog/");
        assert!(alts[1].active);
    }
}
