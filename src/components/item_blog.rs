//! Blog post summary card

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use crate::content::{BlogPostNode, FluidImage, ImageView};
use crate::error::ContentError;
use crate::i18n::UiStrings;
use crate::templates::TemplateRenderer;

/// Everything a post card shows, passed through from the blog query
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostSummary {
    pub path: String,
    pub cover: FluidImage,
    pub title: String,
    pub date: String,
    pub category: String,
    pub time_to_read: u32,
    pub excerpt: String,
}

#[derive(Serialize)]
struct SummaryView<'a> {
    path: &'a str,
    cover: ImageView<'a>,
    title: &'a str,
    date: &'a str,
    category: &'a str,
    time_to_read: u32,
    excerpt: &'a str,
}

impl BlogPostSummary {
    /// Build a summary from a post.
    ///
    /// The category label comes from the first linked category document; a
    /// post without one is an authoring error and is not papered over.
    pub fn try_from_node(node: &BlogPostNode) -> Result<Self, ContentError> {
        let category = node
            .data
            .category
            .document
            .first()
            .ok_or_else(|| ContentError::MissingCategory {
                uid: node.uid.clone(),
            })?;

        Ok(Self {
            path: node.fields.slug.clone(),
            cover: node.data.cover.fluid().clone(),
            title: node.data.title.text.clone(),
            date: node.data.date.clone(),
            category: category.data.label.clone(),
            time_to_read: node.fields.time_to_read,
            excerpt: node.fields.excerpt.clone(),
        })
    }

    pub fn render(&self, renderer: &TemplateRenderer, ui: &UiStrings) -> Result<String> {
        let view = SummaryView {
            path: &self.path,
            cover: self.cover.view(),
            title: &self.title,
            date: &self.date,
            category: &self.category,
            time_to_read: self.time_to_read,
            excerpt: &self.excerpt,
        };

        let mut context = Context::new();
        context.insert("post", &view);
        context.insert("i18n", ui);
        renderer.render("components/item_blog.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::post;
    use crate::i18n::I18n;

    #[test]
    fn test_from_node() {
        let summary =
            BlogPostSummary::try_from_node(&post("hello", "de-de", "20.03.2019", &["Design", "News"]))
                .unwrap();
        assert_eq!(summary.path, "/blog/hello");
        assert_eq!(summary.title, "Post hello");
        assert_eq!(summary.date, "20.03.2019");
        assert_eq!(summary.category, "Design");
        assert_eq!(summary.time_to_read, 3);
        assert_eq!(summary.excerpt, "About hello");
    }

    #[test]
    fn test_empty_category_fails() {
        let err = BlogPostSummary::try_from_node(&post("orphan", "de-de", "2019-01-01", &[]))
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingCategory {
                uid: "orphan".to_string()
            }
        );
    }

    #[test]
    fn test_render() {
        let renderer = TemplateRenderer::new("/").unwrap();
        let ui = I18n::new("en").ui_strings();
        let summary =
            BlogPostSummary::try_from_node(&post("hello", "de-de", "20.03.2019", &["Design"]))
                .unwrap();
        let html = summary.render(&renderer, &ui).unwrap();

        assert!(html.contains(r#"<a href="/blog/hello">Post hello</a>"#));
        assert!(html.contains("<time>20.03.2019</time>"));
        assert!(html.contains(r#"<span class="item-blog-category">Design</span>"#));
        assert!(html.contains("3 min read"));
        assert!(html.contains("About hello"));
    }
}
