//! Content loader - reads the CMS export from the content directory

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use super::ContentStore;
use crate::Folio;

pub const PROJECTS_FILE: &str = "projects.json";
pub const POSTS_FILE: &str = "blogposts.json";
pub const PAGES_FILE: &str = "pages.json";

/// Loads exported documents from the content directory
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load every document type into a store
    pub fn load(&self) -> Result<ContentStore> {
        let store = ContentStore {
            projects: self.load_documents(PROJECTS_FILE)?,
            posts: self.load_documents(POSTS_FILE)?,
            pages: self.load_documents(PAGES_FILE)?,
        };

        tracing::info!(
            "Loaded {} projects, {} posts and {} pages",
            store.projects.len(),
            store.posts.len(),
            store.pages.len()
        );

        Ok(store)
    }

    /// Load one JSON array of documents; a missing file is an empty list
    fn load_documents<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.folio.content_dir.join(file);
        if !path.exists() {
            tracing::debug!("No content file at {:?}", path);
            return Ok(Vec::new());
        }
        read_documents(&path)
    }
}

/// Parse a JSON array of documents; any malformed document fails the whole file
pub fn read_documents<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let documents = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse content file {:?}", path))?;
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::{page, post, project};

    #[test]
    fn test_load_store() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(
            content_dir.join(POSTS_FILE),
            serde_json::to_string(&vec![post("a", "de-de", "2019-01-01", &["News"])]).unwrap(),
        )
        .unwrap();
        fs::write(
            content_dir.join(PAGES_FILE),
            serde_json::to_string(&vec![page("blog", "de-de", "Blog")]).unwrap(),
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let store = ContentLoader::new(&folio).load().unwrap();
        assert_eq!(store.posts.len(), 1);
        assert_eq!(store.pages.len(), 1);
        assert!(store.projects.is_empty());
    }

    #[test]
    fn test_malformed_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        let mut value = serde_json::to_value(vec![project("a", "de-de", None)]).unwrap();
        value[0]["data"]
            .as_object_mut()
            .unwrap()
            .remove("title");
        fs::write(content_dir.join(PROJECTS_FILE), value.to_string()).unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let err = ContentLoader::new(&folio).load().unwrap_err();
        assert!(format!("{:#}", err).contains("title"));
    }
}
