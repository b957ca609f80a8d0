//! Build-time content queries
//!
//! The store holds every exported document; queries pick the records one
//! page needs, filtered by locale and ordered the way the page expects.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::{BlogPostNode, PageNode, ProjectNode};
use crate::error::ContentError;
use crate::helpers::{format_date, parse_date};

/// All documents of a content export
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub projects: Vec<ProjectNode>,
    pub posts: Vec<BlogPostNode>,
    pub pages: Vec<PageNode>,
}

/// Result of the blog page query
#[derive(Debug, Clone)]
pub struct BlogQuery {
    pub content: PageNode,
    /// Posts of the locale, newest first, dates already formatted
    pub all_posts: Vec<BlogPostNode>,
}

/// Result of the home page query
#[derive(Debug, Clone)]
pub struct IndexQuery {
    pub content: PageNode,
    pub projects: Vec<ProjectNode>,
}

impl ContentStore {
    /// Find a page record by uid and locale
    pub fn page(&self, uid: &str, lang: &str) -> Result<&PageNode, ContentError> {
        self.pages
            .iter()
            .find(|p| p.uid == uid && p.lang == lang)
            .ok_or_else(|| ContentError::PageNotFound {
                uid: uid.to_string(),
                lang: lang.to_string(),
            })
    }

    /// Page record `name` plus every post of `lang`, sorted by date descending.
    ///
    /// Posts with the same date keep their export order. Each post's date is
    /// rewritten with `date_format` (moment-style tokens).
    pub fn blog_query(
        &self,
        name: &str,
        lang: &str,
        date_format: &str,
    ) -> Result<BlogQuery, ContentError> {
        let content = self.page(name, lang)?.clone();

        let mut dated: Vec<(NaiveDate, &BlogPostNode)> = self
            .posts
            .iter()
            .filter(|p| p.lang == lang)
            .map(|p| {
                parse_date(&p.data.date)
                    .map(|d| (d, p))
                    .ok_or_else(|| ContentError::InvalidDate {
                        uid: p.uid.clone(),
                        date: p.data.date.clone(),
                    })
            })
            .collect::<Result<_, _>>()?;

        dated.sort_by(|a, b| b.0.cmp(&a.0));

        let all_posts = dated
            .into_iter()
            .map(|(date, post)| {
                let mut post = post.clone();
                post.data.date = format_date(&date, date_format);
                post
            })
            .collect();

        Ok(BlogQuery { content, all_posts })
    }

    /// Page record `name` plus the first `limit` projects of `lang`
    pub fn index_query(
        &self,
        name: &str,
        lang: &str,
        limit: usize,
    ) -> Result<IndexQuery, ContentError> {
        let content = self.page(name, lang)?.clone();
        let projects = self
            .projects
            .iter()
            .filter(|p| p.lang == lang)
            .take(limit)
            .cloned()
            .collect();

        Ok(IndexQuery { content, projects })
    }

    /// Every locale that appears in the export
    pub fn locales(&self) -> BTreeSet<&str> {
        self.projects
            .iter()
            .map(|p| p.lang.as_str())
            .chain(self.posts.iter().map(|p| p.lang.as_str()))
            .chain(self.pages.iter().map(|p| p.lang.as_str()))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::{
        BlogPostData, CategoryData, CategoryDocument, CategoryLink, FluidImage, ImageField,
        PageData, PostFields, ProjectData, RichText, SlugFields,
    };

    pub(crate) fn post(uid: &str, lang: &str, date: &str, categories: &[&str]) -> BlogPostNode {
        BlogPostNode {
            uid: uid.to_string(),
            lang: lang.to_string(),
            fields: PostFields {
                slug: format!("/blog/{}", uid),
                time_to_read: 3,
                excerpt: format!("About {}", uid),
            },
            data: BlogPostData {
                title: RichText {
                    text: format!("Post {}", uid),
                },
                cover: ImageField::from_fluid(FluidImage::new(format!("/{}.jpg", uid), 1.5)),
                date: date.to_string(),
                category: CategoryLink {
                    document: categories
                        .iter()
                        .map(|c| CategoryDocument {
                            data: CategoryData {
                                label: c.to_string(),
                            },
                        })
                        .collect(),
                },
            },
        }
    }

    pub(crate) fn project(uid: &str, lang: &str, customer: Option<&str>) -> ProjectNode {
        ProjectNode {
            uid: uid.to_string(),
            lang: lang.to_string(),
            fields: SlugFields {
                slug: format!("/work/{}", uid),
            },
            data: ProjectData {
                title: RichText {
                    text: format!("Project {}", uid),
                },
                customer: customer.map(str::to_string),
                cover: ImageField::from_fluid(FluidImage::new(format!("/{}.jpg", uid), 1.0)),
            },
        }
    }

    pub(crate) fn page(uid: &str, lang: &str, title: &str) -> PageNode {
        PageNode {
            uid: uid.to_string(),
            lang: lang.to_string(),
            data: PageData {
                title: RichText {
                    text: title.to_string(),
                },
                description: RichText {
                    text: format!("{} description", title),
                },
                content: None,
            },
        }
    }

    fn store() -> ContentStore {
        ContentStore {
            projects: vec![
                project("a", "de-de", Some("Acme")),
                project("b", "en-gb", None),
                project("c", "de-de", None),
                project("d", "de-de", None),
            ],
            posts: vec![
                post("old", "de-de", "2018-01-02", &["News"]),
                post("new", "de-de", "2019-05-01", &["Design"]),
                post("english", "en-gb", "2020-01-01", &["News"]),
                post("mid", "de-de", "2018-12-24", &["Code"]),
            ],
            pages: vec![page("blog", "de-de", "Blog"), page("home", "de-de", "Start")],
        }
    }

    #[test]
    fn test_blog_query_sorts_and_filters() {
        let query = store().blog_query("blog", "de-de", "DD.MM.YYYY").unwrap();
        let uids: Vec<_> = query.all_posts.iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, vec!["new", "mid", "old"]);
        assert_eq!(query.all_posts[0].data.date, "01.05.2019");
        assert_eq!(query.content.data.title.text, "Blog");
    }

    #[test]
    fn test_blog_query_missing_page() {
        let err = store().blog_query("blog", "en-gb", "DD.MM.YYYY").unwrap_err();
        assert_eq!(
            err,
            ContentError::PageNotFound {
                uid: "blog".to_string(),
                lang: "en-gb".to_string()
            }
        );
    }

    #[test]
    fn test_blog_query_invalid_date() {
        let mut store = store();
        store.posts.push(post("broken", "de-de", "someday", &["News"]));
        let err = store.blog_query("blog", "de-de", "DD.MM.YYYY").unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate { ref uid, .. } if uid == "broken"));
    }

    #[test]
    fn test_index_query_limit() {
        let query = store().index_query("home", "de-de", 2).unwrap();
        let uids: Vec<_> = query.projects.iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, vec!["a", "c"]);
    }

    #[test]
    fn test_locales() {
        let store = store();
        let locales: Vec<_> = store.locales().into_iter().collect();
        assert_eq!(locales, vec!["de-de", "en-gb"]);
    }
}
