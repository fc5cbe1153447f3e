use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

const PROJECTS_JSON: &str = include_str!("../content/projects.json");
const SEO_JSON: &str = include_str!("../content/seo.json");
const FOOTER_JSON: &str = include_str!("../content/footer.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} has no slides")]
    Empty(&'static str),
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ProjectLinks {
    pub demo: String,
    pub github: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub links: ProjectLinks,
    pub features: Vec<String>,
    pub color: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Callout {
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Score {
    pub label: String,
    pub value: u8,
    pub note: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Metric {
    pub label: String,
    pub value: u32,
    pub percent: bool,
    pub tone: String,
}

impl Metric {
    pub fn display_value(&self) -> String {
        if self.percent {
            format!("+{}%", self.value)
        } else {
            format!("+{}", self.value)
        }
    }

    /// Bar fill, capped at a full bar.
    pub fn bar_width(&self) -> u32 {
        self.value.min(100)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ResultCard {
    pub label: String,
    pub value: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideBody {
    Benefits {
        points: Vec<String>,
        callout: Callout,
        scores: Vec<Score>,
    },
    Expertise {
        areas: Vec<String>,
        methodology: String,
        timeline: Vec<String>,
        metrics: Vec<Metric>,
    },
    Stories {
        results: Vec<ResultCard>,
    },
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SeoSlide {
    pub title: String,
    pub description: String,
    pub color: String,
    pub body: SlideBody,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SeoProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub demo: String,
    pub features: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SeoContent {
    pub slides: Vec<SeoSlide>,
    pub stories: Vec<SeoProject>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FooterContent {
    pub owner: String,
    pub tagline: String,
    pub social: Vec<Link>,
    pub quick_links: Vec<Link>,
    pub services: Vec<String>,
}

/// Everything the site shows, parsed once before the first render.
#[derive(Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub projects: Rc<Vec<Project>>,
    pub seo: Rc<SeoContent>,
    pub footer: Rc<FooterContent>,
}

fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { name, source })
}

fn non_empty<T>(name: &'static str, items: Vec<T>) -> Result<Vec<T>, ContentError> {
    if items.is_empty() {
        return Err(ContentError::Empty(name));
    }
    Ok(items)
}

pub fn load() -> Result<SiteContent, ContentError> {
    let projects: Vec<Project> = non_empty("projects", parse("projects", PROJECTS_JSON)?)?;
    let seo: SeoContent = parse("seo", SEO_JSON)?;
    let seo = SeoContent {
        slides: non_empty("seo slides", seo.slides)?,
        stories: seo.stories,
    };
    let footer: FooterContent = parse("footer", FOOTER_JSON)?;
    Ok(SiteContent {
        projects: Rc::new(projects),
        seo: Rc::new(seo),
        footer: Rc::new(footer),
    })
}

pub const PROJECT_ICONS: [&str; 5] = ["smartphone", "globe", "target", "film", "bot"];

/// Icon shown next to the active project's title.
pub fn project_icon(index: usize) -> &'static str {
    PROJECT_ICONS.get(index).copied().unwrap_or("globe")
}

/// Number of tags hidden behind the "+n" badge on preview cards.
pub fn extra_tags(tags: &[String], shown: usize) -> Option<usize> {
    (tags.len() > shown).then(|| tags.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let site = load().unwrap();
        assert_eq!(site.projects.len(), 6);
        assert_eq!(site.seo.slides.len(), 3);
        assert_eq!(site.seo.stories.len(), 5);
        assert_eq!(site.footer.quick_links.len(), 3);
        assert_eq!(site.footer.quick_links[1].href, "#projects");
    }

    #[test]
    fn quick_links_point_at_rendered_sections() {
        let site = load().unwrap();
        for link in site.footer.quick_links.iter() {
            let target = link.href.strip_prefix('#').unwrap_or(&link.href);
            assert!(
                crate::config::PAGE_SECTIONS.contains(&target),
                "{} links to missing section {}",
                link.label,
                link.href
            );
        }
    }

    #[test]
    fn seo_slides_come_in_order() {
        let site = load().unwrap();
        let kinds: Vec<&str> = site
            .seo
            .slides
            .iter()
            .map(|s| match s.body {
                SlideBody::Benefits { .. } => "benefits",
                SlideBody::Expertise { .. } => "expertise",
                SlideBody::Stories { .. } => "stories",
            })
            .collect();
        assert_eq!(kinds, ["benefits", "expertise", "stories"]);
    }

    #[test]
    fn bad_json_names_the_document() {
        let err = parse::<Vec<Project>>("projects", "[{").unwrap_err();
        assert!(matches!(err, ContentError::Parse { name: "projects", .. }));
        assert!(err.to_string().starts_with("failed to parse projects"));
    }

    #[test]
    fn empty_collection_is_an_error() {
        let err = non_empty::<Project>("projects", Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "projects has no slides");
    }

    #[test]
    fn icons_fall_back_to_globe() {
        assert_eq!(project_icon(0), "smartphone");
        assert_eq!(project_icon(4), "bot");
        assert_eq!(project_icon(5), "globe");
    }

    #[test]
    fn tag_badge_counts_hidden_tags() {
        let tags: Vec<String> = ["a", "b", "c", "d"].iter().map(|t| t.to_string()).collect();
        assert_eq!(extra_tags(&tags, 2), Some(2));
        assert_eq!(extra_tags(&tags[..2], 2), None);
    }

    #[test]
    fn metric_formatting() {
        let m = Metric {
            label: "Organic Traffic Growth".into(),
            value: 185,
            percent: false,
            tone: "green".into(),
        };
        assert_eq!(m.display_value(), "+185");
        assert_eq!(m.bar_width(), 100);
        let rate = Metric { value: 34, percent: true, ..m };
        assert_eq!(rate.display_value(), "+34%");
        assert_eq!(rate.bar_width(), 34);
    }
}
