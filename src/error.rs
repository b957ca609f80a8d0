//! Content errors surfaced while resolving queries and building view-models

use thiserror::Error;

/// Data-integrity errors in the CMS export.
///
/// None of these are recovered: they abort the page being rendered and,
/// through `anyhow`, the whole build.
#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("Blog post '{uid}' has no linked category document")]
    MissingCategory { uid: String },

    #[error("Page '{uid}' not found for locale '{lang}'")]
    PageNotFound { uid: String, lang: String },

    #[error("Document '{uid}' has an invalid date: {date}")]
    InvalidDate { uid: String, date: String },

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}
