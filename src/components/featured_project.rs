//! Featured project card

use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use tera::Context;

use crate::animation::Transition;
use crate::content::{FluidImage, ImageView, ProjectNode};
use crate::templates::TemplateRenderer;

/// A clickable project card with a staggered entrance animation
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub cover: FluidImage,
    /// Internal route the card links to
    pub path: String,
    pub customer: String,
    pub title: String,
    /// Emitted as `data-testid` on the card root
    pub testid: String,
    /// Position in the cascade; the entrance starts `delay * 100` ms late
    pub delay: u32,
}

#[derive(Serialize)]
struct CardView<'a> {
    cover: ImageView<'a>,
    path: &'a str,
    customer: &'a str,
    title: &'a str,
    testid: &'a str,
    delay_ms: u64,
    style: String,
}

impl ProjectCard {
    /// A card without a customer line
    pub fn new(
        cover: FluidImage,
        path: impl Into<String>,
        title: impl Into<String>,
        testid: impl Into<String>,
        delay: u32,
    ) -> Self {
        Self {
            cover,
            path: path.into(),
            customer: String::new(),
            title: title.into(),
            testid: testid.into(),
            delay,
        }
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    /// Build the card for the `index`-th project of a listing
    pub fn from_node(node: &ProjectNode, index: u32) -> Self {
        let card = Self::new(
            node.data.cover.fluid().clone(),
            node.fields.slug.clone(),
            node.data.title.text.clone(),
            format!("project-{}", slug::slugify(&node.uid)),
            index,
        );

        match &node.data.customer {
            Some(customer) => card.with_customer(customer.clone()),
            None => card,
        }
    }

    pub fn transition(&self) -> Transition {
        Transition::entrance(self.delay)
    }

    /// How long after mount the entrance animation starts
    pub fn start_delay(&self) -> Duration {
        self.transition().delay
    }

    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String> {
        let transition = self.transition();
        let view = CardView {
            cover: self.cover.view(),
            path: &self.path,
            customer: &self.customer,
            title: &self.title,
            testid: &self.testid,
            delay_ms: transition.delay_ms(),
            style: format!(
                "{}; {}",
                transition.frame_css(&transition.from),
                transition.inline_style()
            ),
        };

        let mut context = Context::new();
        context.insert("card", &view);
        renderer.render("components/featured_project.html", &context)
    }
}
