//! CMS document shapes as exported by the content source
//!
//! Field names follow the export (camelCase, nested `localFile` /
//! `childImageSharp` wrappers) so a query result can be dumped to JSON and
//! read back without a mapping layer.

use serde::{Deserialize, Serialize};

use super::FluidImage;

/// A plain-text rich text field (`{ "text": "..." }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
}

/// An HTML rich text field (`{ "html": "..." }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichHtml {
    pub html: String,
}

/// An image field wrapping the processed fluid variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageField {
    #[serde(rename = "localFile")]
    pub local_file: LocalFile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalFile {
    #[serde(rename = "childImageSharp")]
    pub child_image_sharp: ImageSharp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSharp {
    pub fluid: FluidImage,
}

impl ImageField {
    pub fn fluid(&self) -> &FluidImage {
        &self.local_file.child_image_sharp.fluid
    }

    pub fn from_fluid(fluid: FluidImage) -> Self {
        Self {
            local_file: LocalFile {
                child_image_sharp: ImageSharp { fluid },
            },
        }
    }
}

/// Derived fields attached to every routed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugFields {
    pub slug: String,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// A project document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectNode {
    pub uid: String,
    pub lang: String,
    pub fields: SlugFields,
    pub data: ProjectData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub title: RichText,
    #[serde(default)]
    pub customer: Option<String>,
    pub cover: ImageField,
}

// ---------------------------------------------------------------------------
// Blog posts
// ---------------------------------------------------------------------------

/// A blog post document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostNode {
    pub uid: String,
    pub lang: String,
    pub fields: PostFields,
    pub data: BlogPostData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFields {
    pub slug: String,
    #[serde(rename = "timeToRead")]
    pub time_to_read: u32,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostData {
    pub title: RichText,
    pub cover: ImageField,
    pub date: String,
    pub category: CategoryLink,
}

/// A link to category documents; only the first entry is ever shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLink {
    pub document: Vec<CategoryDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDocument {
    pub data: CategoryData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(alias = "kategorie")]
    pub label: String,
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// A page-level content record (title, intro text, optional body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageNode {
    pub uid: String,
    pub lang: String,
    pub data: PageData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub title: RichText,
    pub description: RichText,
    #[serde(default)]
    pub content: Option<RichHtml>,
}
