//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded in the binary. Autoescaping is off, as in any
//! HTML generator that passes pre-rendered fragments around; text coming
//! from the CMS goes through the `esc` filter instead.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::{html_escape, url_for};

/// Base stylesheet; spring keyframes are appended at generation time
pub const STYLESHEET: &str = include_str!("site/style.css");

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer; `root` is the site root prefixed to routes
    pub fn new(root: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("blog.html", include_str!("site/blog.html")),
            // Partials
            ("partials/head.html", include_str!("site/partials/head.html")),
            ("partials/nav.html", include_str!("site/partials/nav.html")),
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            ("macros/image.html", include_str!("site/macros/image.html")),
            // Components
            (
                "components/featured_project.html",
                include_str!("site/components/featured_project.html"),
            ),
            (
                "components/item_blog.html",
                include_str!("site/components/item_blog.html"),
            ),
        ])?;

        let root = root.to_string();
        tera.register_filter(
            "url_for",
            move |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let path = tera::try_get_value!("url_for", "value", String, value);
                Ok(tera::Value::String(url_for(&root, &path)))
            },
        );
        tera.register_filter("esc", esc_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape text for HTML bodies and attributes
fn esc_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = match value {
        tera::Value::String(s) => s.clone(),
        tera::Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(tera::Value::String(html_escape(&s)))
}
