//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::helpers::parse_date;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let store = ContentLoader::new(folio).load()?;

    match content_type {
        "post" | "posts" => {
            let mut posts: Vec<_> = store.posts.iter().collect();
            posts.sort_by_key(|p| std::cmp::Reverse(parse_date(&p.data.date)));
            println!("Posts ({}):", posts.len());
            for post in posts {
                let category = post
                    .data
                    .category
                    .document
                    .first()
                    .map(|c| c.data.label.as_str())
                    .unwrap_or("<missing category>");
                println!(
                    "  {} - {} [{}] ({}, {})",
                    post.data.date, post.data.title.text, post.lang, category, post.fields.slug
                );
            }
        }
        "project" | "projects" => {
            println!("Projects ({}):", store.projects.len());
            for project in &store.projects {
                println!(
                    "  {} [{}] {} ({})",
                    project.data.title.text,
                    project.lang,
                    project.data.customer.as_deref().unwrap_or(""),
                    project.fields.slug
                );
            }
        }
        "page" | "pages" => {
            println!("Pages ({}):", store.pages.len());
            for page in &store.pages {
                println!("  {} [{}] {}", page.uid, page.lang, page.data.title.text);
            }
        }
        "locale" | "locales" => {
            let found = store.locales();
            println!("Locales ({}):", folio.config.locales.len());
            for (lang, locale) in &folio.config.locales {
                let default = if folio.config.is_default_locale(lang) {
                    " (default)"
                } else {
                    ""
                };
                let status = if found.contains(lang.as_str()) {
                    ""
                } else {
                    " - no content"
                };
                println!("  {} /{}{}{}", lang, locale.path, default, status);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, project, page, locale",
                content_type
            );
        }
    }

    Ok(())
}
