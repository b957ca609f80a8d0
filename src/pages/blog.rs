//! Blog page: header plus one summary card per post

use anyhow::Result;

use super::{layout_context, Head, Location, PageContext, RenderEnv};
use crate::animation::Transition;
use crate::components::{BlogPostSummary, PageContent};
use crate::config::SiteConfig;
use crate::content::BlogQuery;
use crate::error::ContentError;

pub struct BlogPage<'a> {
    query: &'a BlogQuery,
    context: PageContext,
    location: Location,
}

impl<'a> BlogPage<'a> {
    pub fn new(query: &'a BlogQuery, context: PageContext, location: Location) -> Self {
        Self {
            query,
            context,
            location,
        }
    }

    pub fn content(&self) -> PageContent {
        PageContent::from(&self.query.content)
    }

    pub fn head(&self, config: &SiteConfig) -> Head {
        Head::for_page(config, &self.content(), &self.context.locale)
    }

    /// One summary per post, in query order
    pub fn summaries(&self) -> Result<Vec<BlogPostSummary>, ContentError> {
        self.query
            .all_posts
            .iter()
            .map(BlogPostSummary::try_from_node)
            .collect()
    }

    pub fn render(&self, env: &RenderEnv) -> Result<String> {
        let ui = env.i18n.for_language(&self.context.locale).ui_strings();
        let cards = self
            .summaries()?
            .iter()
            .map(|summary| summary.render(env.renderer, &ui))
            .collect::<Result<Vec<_>>>()?;

        let fade = Transition::fade_in();
        let content = self.content();
        let mut ctx = layout_context(
            env,
            &self.head(env.config),
            &content,
            &self.context,
            &self.location,
        )?;
        ctx.insert("cards", &cards);
        ctx.insert(
            "fade_style",
            &format!("{}; {}", fade.frame_css(&fade.from), fade.inline_style()),
        );

        env.renderer.render("blog.html", &ctx)
    }
}
