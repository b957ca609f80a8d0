//! View components
//!
//! Each component is a read-only view-model built from a query result plus a
//! `render` method producing its HTML fragment. Components never look at
//! anything but their own props, so rendering is a pure function.

mod featured_project;
mod item_blog;

pub use featured_project::ProjectCard;
pub use item_blog::BlogPostSummary;

use serde::Serialize;

use crate::content::PageNode;

/// Page-level title and intro text, shown by the page header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContent {
    pub title: String,
    pub description: String,
}

impl From<&PageNode> for PageContent {
    fn from(node: &PageNode) -> Self {
        Self {
            title: node.data.title.text.clone(),
            description: node.data.description.text.clone(),
        }
    }
}
