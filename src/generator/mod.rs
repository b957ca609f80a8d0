//! Generator module - renders every page of every locale to static HTML

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::animation::Transition;
use crate::content::loader::ContentLoader;
use crate::content::ContentStore;
use crate::i18n::{localized_path, I18n};
use crate::pages::{
    blog_route, home_route, BlogPage, IndexPage, Location, PageContext, RenderEnv,
};
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Folio;

/// Static site generator using the embedded Tera templates
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    i18n: I18n,
    store: ContentStore,
}

impl Generator {
    /// Create a new generator, loading content and translations
    pub fn new(folio: &Folio) -> Result<Self> {
        let store = ContentLoader::new(folio).load()?;
        Self::with_store(folio, store)
    }

    /// Create a generator over already loaded content
    pub fn with_store(folio: &Folio, store: ContentStore) -> Result<Self> {
        let renderer = TemplateRenderer::new(&folio.config.root)?;
        let mut i18n = I18n::new(&folio.config.language);
        i18n.load_languages(&folio.i18n_dir)?;

        Ok(Self {
            folio: folio.clone(),
            renderer,
            i18n,
            store,
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)?;

        self.copy_static_assets()?;
        self.write_stylesheet()?;

        for lang in self.folio.config.locales.keys() {
            self.generate_locale(lang)
                .with_context(|| format!("Failed to generate locale {}", lang))?;
        }

        Ok(())
    }

    /// Render the home and blog pages of one locale
    fn generate_locale(&self, lang: &str) -> Result<()> {
        let config = &self.folio.config;
        let env = RenderEnv {
            renderer: &self.renderer,
            config,
            i18n: &self.i18n,
        };

        let home_path = localized_path(config, lang, home_route())?;
        let index = self
            .store
            .index_query(&config.pages.home, lang, config.featured_limit)?;
        let html = IndexPage::new(&index, page_context(lang), location(&home_path)).render(&env)?;
        self.write_page(&home_path, &html)?;

        let blog_path = localized_path(config, lang, &blog_route(config))?;
        let blog = self
            .store
            .blog_query(&config.pages.blog, lang, config.date_format_for(lang))?;
        let html = BlogPage::new(&blog, page_context(lang), location(&blog_path)).render(&env)?;
        self.write_page(&blog_path, &html)?;

        tracing::info!(
            "Generated {}: {} projects, {} posts",
            lang,
            index.projects.len(),
            blog.all_posts.len()
        );

        Ok(())
    }

    /// Write `html` to `<route>/index.html` under the public directory
    fn write_page(&self, route: &str, html: &str) -> Result<PathBuf> {
        // Strip leading slash from route to avoid creating absolute paths
        let clean = route.trim_start_matches('/');
        let output_path = self.folio.public_dir.join(clean).join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(output_path)
    }

    /// Base stylesheet plus the keyframes of every transition in use
    fn write_stylesheet(&self) -> Result<()> {
        let mut css = String::from(STYLESHEET);
        for transition in [Transition::entrance(0), Transition::fade_in()] {
            css.push('\n');
            css.push_str(&transition.keyframes());
        }

        let output_path = self.folio.public_dir.join("css").join("style.css");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, css)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy static files (images, fonts, ...) to the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || is_hidden(path, static_dir) {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::info!("Copied {} static files", copied);
        Ok(())
    }
}

fn page_context(lang: &str) -> PageContext {
    PageContext {
        locale: lang.to_string(),
    }
}

fn location(pathname: &str) -> Location {
    Location {
        pathname: pathname.to_string(),
    }
}

/// Dotfiles and anything inside a dot directory are not published
fn is_hidden(path: &Path, base: &Path) -> bool {
    path.strip_prefix(base)
        .map(|rel| {
            rel.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.starts_with('.'))
                    .unwrap_or(false)
            })
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::{page, post, project};
    use crate::error::ContentError;

    fn store() -> ContentStore {
        ContentStore {
            projects: vec![
                project("a", "de-de", Some("Acme")),
                project("b", "en-gb", None),
            ],
            posts: vec![
                post("old", "de-de", "2018-01-02", &["News"]),
                post("new", "de-de", "2019-05-01", &["Design"]),
                post("hello", "en-gb", "2019-05-01", &["News"]),
            ],
            pages: vec![
                page("home", "de-de", "Start"),
                page("blog", "de-de", "Blog"),
                page("home", "en-gb", "Home"),
                page("blog", "en-gb", "Blog"),
            ],
        }
    }

    #[test]
    fn test_generate_site() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("static/images")).unwrap();
        fs::write(dir.path().join("static/images/logo.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("static/.DS_Store"), "").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        Generator::with_store(&folio, store())
            .unwrap()
            .generate()
            .unwrap();

        let public = dir.path().join("public");
        assert!(public.join("index.html").exists());
        assert!(public.join("en/index.html").exists());
        assert!(public.join("images/logo.svg").exists());
        assert!(!public.join(".DS_Store").exists());

        let blog = fs::read_to_string(public.join("blog/index.html")).unwrap();
        let new = blog.find(r#"<a href="/blog/new">"#).unwrap();
        let old = blog.find(r#"<a href="/blog/old">"#).unwrap();
        assert!(new < old);
        assert!(blog.contains("<time>01.05.2019</time>"));

        let en_blog = fs::read_to_string(public.join("en/blog/index.html")).unwrap();
        assert!(en_blog.contains("<time>01/05/2019</time>"));

        let css = fs::read_to_string(public.join("css/style.css")).unwrap();
        assert!(css.contains("@keyframes folio-entrance"));
        assert!(css.contains("@keyframes folio-fade-in"));
    }

    #[test]
    fn test_missing_category_aborts_generation() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store();
        store.posts.push(post("orphan", "de-de", "2019-01-01", &[]));

        let folio = Folio::new(dir.path()).unwrap();
        let err = Generator::with_store(&folio, store)
            .unwrap()
            .generate()
            .unwrap_err();
        assert!(err.chain().any(|e| matches!(
            e.downcast_ref::<ContentError>(),
            Some(ContentError::MissingCategory { .. })
        )));
    }
}
