//! Content module - CMS documents, the export loader and page queries

mod document;
mod image;
pub mod loader;
mod query;

pub use document::{
    BlogPostData, BlogPostNode, CategoryData, CategoryDocument, CategoryLink, ImageField,
    ImageSharp, LocalFile, PageData, PageNode, PostFields, ProjectData, ProjectNode, RichHtml,
    RichText, SlugFields,
};
pub use image::{FluidImage, ImageView};
pub use query::{BlogQuery, ContentStore, IndexQuery};

#[cfg(test)]
pub(crate) use query::tests as fixtures;
