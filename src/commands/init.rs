//! Initialize a new site

use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::content::loader::{PAGES_FILE, POSTS_FILE, PROJECTS_FILE};
use crate::CONFIG_FILE;

const CONFIG: &str = r#"# Folio Configuration

# Site
title: Folio
site_title_alt: Folio - Portfolio & Blog
description: ''
author: John Doe

# URL
url: http://example.com
root: /

# Locales (the default one is served without a prefix)
language: de-de
locales:
  de-de:
    path: de
    name: Deutsch
  en-gb:
    path: en
    name: English
    date_format: DD/MM/YYYY

# Directory
content_dir: content
static_dir: static
i18n_dir: i18n
public_dir: public

# Content
date_format: DD.MM.YYYY
pages:
  home: home
  blog: blog
  blog_path: blog
featured_limit: 3
"#;

const I18N_DE: &str = r#"nav:
  home: Start
  blog: Blog
blog:
  min_read: Min. Lesezeit
skip_nav: Zum Inhalt springen
footer:
  copyright: Alle Rechte vorbehalten.
"#;

const I18N_EN: &str = r#"nav:
  home: Home
  blog: Blog
blog:
  min_read: min read
skip_nav: Skip to content
footer:
  copyright: All rights reserved.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let content_dir = target_dir.join("content");
    let i18n_dir = target_dir.join("i18n");
    fs::create_dir_all(&content_dir)?;
    fs::create_dir_all(&i18n_dir)?;
    fs::create_dir_all(target_dir.join("static/images"))?;

    fs::write(target_dir.join(CONFIG_FILE), CONFIG)?;
    fs::write(i18n_dir.join("de-de.yml"), I18N_DE)?;
    fs::write(i18n_dir.join("en-gb.yml"), I18N_EN)?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let mut pages = Vec::new();
    let mut posts = Vec::new();
    let mut projects = Vec::new();

    for (lang, home, blog, intro) in [
        ("de-de", "Willkommen", "Blog", "Neuigkeiten aus dem Studio"),
        ("en-gb", "Welcome", "Blog", "News from the studio"),
    ] {
        pages.push(json!({
            "uid": "home", "lang": lang,
            "data": {
                "title": { "text": home },
                "description": { "text": intro },
                "content": { "html": "<p>Selected work</p>" }
            }
        }));
        pages.push(json!({
            "uid": "blog", "lang": lang,
            "data": { "title": { "text": blog }, "description": { "text": intro } }
        }));
        posts.push(json!({
            "uid": "hello-world", "lang": lang,
            "fields": { "slug": "/blog/hello-world", "timeToRead": 1, "excerpt": "Hello World" },
            "data": {
                "title": { "text": "Hello World" },
                "cover": sample_image("hello-world"),
                "date": today,
                "category": { "document": [ { "data": { "label": "News" } } ] }
            }
        }));
        projects.push(json!({
            "uid": "sample-project", "lang": lang,
            "fields": { "slug": "/work/sample-project" },
            "data": {
                "title": { "text": "Sample Project" },
                "customer": "Acme",
                "cover": sample_image("sample-project")
            }
        }));
    }

    fs::write(content_dir.join(PAGES_FILE), serde_json::to_string_pretty(&pages)?)?;
    fs::write(content_dir.join(POSTS_FILE), serde_json::to_string_pretty(&posts)?)?;
    fs::write(
        content_dir.join(PROJECTS_FILE),
        serde_json::to_string_pretty(&projects)?,
    )?;

    Ok(())
}

fn sample_image(name: &str) -> serde_json::Value {
    let src = format!("/images/{}.jpg", name);
    json!({
        "localFile": { "childImageSharp": { "fluid": {
            "aspectRatio": 1.5,
            "src": src,
            "srcSet": format!("{} 1000w", src),
            "sizes": "(max-width: 1000px) 100vw, 1000px"
        } } }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folio;

    #[test]
    fn test_init_then_generate() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.site_title_alt, "Folio - Portfolio & Blog");
        folio.generate().unwrap();

        let blog = fs::read_to_string(dir.path().join("public/en/blog/index.html")).unwrap();
        assert!(blog.contains("<title>Blog | Folio - Portfolio &amp; Blog</title>"));
        assert!(blog.contains("1 min read"));

        let home = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(home.contains(r#"data-testid="project-sample-project""#));
        assert!(home.contains("Zum Inhalt springen"));
    }
}
