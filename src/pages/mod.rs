//! Page composers
//!
//! A page takes the result of its content query plus the locale and
//! pathname it is rendered for, turns the records into components, and
//! wraps the rendered cards in the shared layout.

mod blog;
mod index;

pub use blog::BlogPage;
pub use index::IndexPage;

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use crate::components::PageContent;
use crate::config::SiteConfig;
use crate::helpers::{full_url_for, url_for};
use crate::i18n::{alternates, localized_path, unlocalized_path, I18n};
use crate::templates::TemplateRenderer;

/// Document head state owned by one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Head {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Head {
    /// Head with the title composed as "<page title> | <site_title_alt>"
    pub fn for_page(config: &SiteConfig, content: &PageContent, lang: &str) -> Self {
        Self {
            title: format!("{} | {}", content.title, config.site_title_alt),
            description: content.description.clone(),
            lang: lang.to_string(),
        }
    }
}

/// Per-page build context
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub locale: String,
}

/// Where the page is served, relative to the site root
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub pathname: String,
}

/// Shared collaborators for rendering pages
pub struct RenderEnv<'a> {
    pub renderer: &'a TemplateRenderer,
    pub config: &'a SiteConfig,
    pub i18n: &'a I18n,
}

/// Logical route of the home page
pub fn home_route() -> &'static str {
    ""
}

/// Logical route of the blog page (`<pages.blog_path>/`)
pub fn blog_route(config: &SiteConfig) -> String {
    format!("{}/", config.pages.blog_path.trim_matches('/'))
}

#[derive(Serialize)]
struct SiteData<'a> {
    title: &'a str,
    author: &'a str,
}

#[derive(Serialize)]
struct NavLinks {
    home: String,
    blog: String,
    current: String,
}

/// Context shared by every page extending `layout.html`
fn layout_context(
    env: &RenderEnv,
    head: &Head,
    header: &PageContent,
    context: &PageContext,
    location: &Location,
) -> Result<Context> {
    let config = env.config;
    let locale = context.locale.as_str();
    let route = unlocalized_path(config, locale, &location.pathname);

    let nav = NavLinks {
        home: url_for(&config.root, &localized_path(config, locale, home_route())?),
        blog: url_for(&config.root, &localized_path(config, locale, &blog_route(config))?),
        current: url_for(&config.root, &location.pathname),
    };

    let mut ctx = Context::new();
    ctx.insert("head", head);
    ctx.insert("header", header);
    ctx.insert(
        "site",
        &SiteData {
            title: &config.title,
            author: &config.author,
        },
    );
    ctx.insert("i18n", &env.i18n.for_language(locale).ui_strings());
    ctx.insert("nav", &nav);
    ctx.insert("alternates", &alternates(config, locale, route)?);
    ctx.insert("canonical", &full_url_for(config, &location.pathname));
    Ok(ctx)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) struct Env {
        pub renderer: TemplateRenderer,
        pub config: SiteConfig,
        pub i18n: I18n,
    }

    impl Env {
        pub fn new() -> Self {
            let mut config = SiteConfig::default();
            config.site_title_alt = "Studio".to_string();
            Self {
                renderer: TemplateRenderer::new(&config.root).unwrap(),
                i18n: I18n::new(&config.language),
                config,
            }
        }

        pub fn env(&self) -> RenderEnv<'_> {
            RenderEnv {
                renderer: &self.renderer,
                config: &self.config,
                i18n: &self.i18n,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_title() {
        let mut config = SiteConfig::default();
        config.site_title_alt = "Studio".to_string();
        let content = PageContent {
            title: "Blog".to_string(),
            description: "Notes".to_string(),
        };
        let head = Head::for_page(&config, &content, "de-de");
        assert_eq!(head.title, "Blog | Studio");
        assert_eq!(head.description, "Notes");
    }

    #[test]
    fn test_blog_route() {
        let mut config = SiteConfig::default();
        assert_eq!(blog_route(&config), "blog/");
        config.pages.blog_path = "/journal/".to_string();
        assert_eq!(blog_route(&config), "journal/");

        // The CMS uid of the page record does not affect the URL
        config.pages.blog = "blog-overview".to_string();
        assert_eq!(blog_route(&config), "journal/");
    }
}
