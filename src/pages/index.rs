//! Home page: intro plus the featured project cards

use anyhow::Result;

use super::{layout_context, Head, Location, PageContext, RenderEnv};
use crate::components::{PageContent, ProjectCard};
use crate::config::SiteConfig;
use crate::content::IndexQuery;

pub struct IndexPage<'a> {
    query: &'a IndexQuery,
    context: PageContext,
    location: Location,
}

impl<'a> IndexPage<'a> {
    pub fn new(query: &'a IndexQuery, context: PageContext, location: Location) -> Self {
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

    /// Cards in query order; the position drives the entrance stagger
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.query
            .projects
            .iter()
            .zip(0u32..)
            .map(|(node, index)| ProjectCard::from_node(node, index))
            .collect()
    }

    pub fn render(&self, env: &RenderEnv) -> Result<String> {
        let cards = self
            .cards()
            .iter()
            .map(|card| card.render(env.renderer))
            .collect::<Result<Vec<_>>>()?;

        let content = self.content();
        let mut ctx = layout_context(
            env,
            &self.head(env.config),
            &content,
            &self.context,
            &self.location,
        )?;
        ctx.insert("cards", &cards);
        // Body HTML comes from the CMS rich text field as-is
        ctx.insert(
            "body",
            &self.query.content.data.content.as_ref().map(|c| &c.html),
        );

        env.renderer.render("index.html", &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::{page, project};
    use crate::content::RichHtml;
    use crate::pages::fixtures::Env;

    #[test]
    fn test_render_featured_projects() {
        let mut content = page("home", "de-de", "Start");
        content.data.content = Some(RichHtml {
            html: "<p>Hello <strong>there</strong></p>".to_string(),
        });
        let query = IndexQuery {
            content,
            projects: vec![
                project("a", "de-de", Some("Acme")),
                project("b", "de-de", None),
                project("c", "de-de", None),
            ],
        };

        let env = Env::new();
        let page = IndexPage::new(
            &query,
            PageContext {
                locale: "de-de".to_string(),
            },
            Location {
                pathname: "/".to_string(),
            },
        );

        let delays: Vec<_> = page.cards().iter().map(|c| c.delay).collect();
        assert_eq!(delays, vec![0, 1, 2]);

        let html = page.render(&env.env()).unwrap();
        assert_eq!(html.matches(r#"<article class="featured-project""#).count(), 3);
        assert!(html.contains(r#"data-testid="project-a""#));
        assert!(html.contains(r#"data-delay="200""#));
        assert!(html.contains("<p>Hello <strong>there</strong></p>"));
        assert!(html.contains("<title>Start | Studio</title>"));
        assert!(html.contains(r#"<a href="/" aria-current="page">Home</a>"#));
    }
}
