use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    footer::Footer, projects::ProjectsSection, seo::SeoSection, slider::SLIDER_CSS,
};
use crate::config;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub site: Rc<SiteContent>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let site = &props.site;
    html! {
        <div id={config::HOME_SECTION} class="portfolio-page">
            <style>{PAGE_CSS}</style>
            <style>{SLIDER_CSS}</style>
            <ProjectsSection projects={site.projects.clone()} />
            <SeoSection content={site.seo.clone()} />
            <Footer content={site.footer.clone()} />
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .portfolio-page {
        min-height: 100vh;
        background: #0b0f19;
        color: #f9fafb;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: 2.25rem;
        font-weight: bold;
        margin-bottom: 1rem;
    }
    .section-heading p {
        color: #d1d5db;
        max-width: 42rem;
        margin: 0 auto;
    }
    .heading-bar {
        height: 0.25rem;
        width: 5rem;
        margin: 1rem auto 0;
        border-radius: 9999px;
        background: linear-gradient(90deg, var(--primary, #1e90ff), var(--secondary, #7c3aed));
    }
    .text-gradient {
        background: linear-gradient(90deg, var(--primary, #1e90ff), var(--secondary, #7c3aed));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .tag-list {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .tag {
        padding: 0.25rem 0.75rem;
        font-size: 0.75rem;
        border-radius: 9999px;
        border: 1px solid rgba(30, 144, 255, 0.2);
        background: rgba(255, 255, 255, 0.04);
        transition: transform 0.2s ease;
    }
    .tag:hover {
        transform: translateY(-2px) scale(1.05);
    }
    .tag.more {
        background: #374151;
    }
    .feature-dot {
        display: inline-block;
        flex-shrink: 0;
        width: 0.5rem;
        height: 0.5rem;
        margin: 0.4rem 0.5rem 0 0;
        border-radius: 9999px;
        background: var(--primary, #1e90ff);
    }
    .theme-blue-purple { background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2)); }
    .theme-purple-blue { background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(59, 130, 246, 0.2)); }
    .theme-blue-cyan { background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(6, 182, 212, 0.2)); }
    .theme-purple-pink { background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2)); }
    .theme-cyan-emerald { background: linear-gradient(135deg, rgba(6, 182, 212, 0.2), rgba(16, 185, 129, 0.2)); }
    .theme-green-emerald { background: linear-gradient(135deg, rgba(34, 197, 94, 0.2), rgba(16, 185, 129, 0.2)); }
"#;
