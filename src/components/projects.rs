use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::icon;
use crate::components::slider::{
    card_link, use_slide_navigator, Arrow, BrokenSlider, Direction, Dots, SliderConfig,
};
use crate::config;
use crate::content::{extra_tags, project_icon, Project};

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub projects: Rc<Vec<Project>>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    let projects = props.projects.clone();
    let slider = use_slide_navigator(
        projects.len(),
        SliderConfig {
            threshold: config::DRAG_THRESHOLD,
            constraints: config::PROJECT_DRAG,
        },
    );
    let slider = match slider {
        Ok(slider) => slider,
        Err(error) => return html! { <BrokenSlider error={error} /> },
    };

    let nav = slider.nav();
    let active = nav.active_index();
    let project = &projects[active];
    let on_select = slider.on_select();

    html! {
        <section id={config::PROJECTS_SECTION} class="projects-section">
            <style>{PROJECTS_CSS}</style>
            <div class="section-heading">
                <h2>{"Featured "}<span class="text-gradient">{"Projects"}</span></h2>
                <p>{"Real-world applications showcasing my expertise in AI, automation, and full-stack development"}</p>
                <div class="heading-bar"></div>
            </div>

            <div class="slider-frame">
                <div class="slider-arrows-desktop left">
                    <Arrow direction={Direction::Previous} noun="project" onclick={slider.on_previous()} />
                </div>
                <div class="slider-arrows-desktop right">
                    <Arrow direction={Direction::Next} noun="project" onclick={slider.on_next()} />
                </div>

                <div class="slider-viewport">
                    <div
                        key={active}
                        ref={slider.card_ref()}
                        class={classes!("slide-card", slider.is_dragging().then(|| "dragging"))}
                        style={slider.card_style()}
                        onpointerdown={slider.on_pointer_down()}
                        onpointermove={slider.on_pointer_move()}
                        onpointercancel={slider.on_pointer_cancel()}
                    >
                        <div class="project-text">
                            <div class="project-title-row">
                                <div class="project-icon">
                                    {icon(project_icon(active), 20)}
                                </div>
                                <h3>{&project.title}</h3>
                            </div>

                            <p class="project-description">
                                { if nav.is_expanded() { &project.long_description } else { &project.description } }
                            </p>
                            <button class="read-more" onclick={slider.on_toggle()}>
                                { if nav.is_expanded() { "Show less" } else { "Read more" } }
                            </button>

                            <div class="tag-list">
                                { for project.tags.iter().map(|tag| html! {
                                    <span key={tag.clone()} class="tag">{tag}</span>
                                }) }
                            </div>

                            <div class="feature-block">
                                <h4>{"Key Features"}</h4>
                                <ul class="feature-grid">
                                    { for project.features.iter().map(|feature| html! {
                                        <li><span class="feature-dot"></span>{feature}</li>
                                    }) }
                                </ul>
                            </div>

                            <div class="project-links">
                                {card_link(&project.links.demo, "Live Demo", classes!("project-link", "primary"))}
                                {card_link(&project.links.github, "Source Code", classes!("project-link"))}
                            </div>
                        </div>

                        <div class="project-visual">
                            <div class={classes!("project-visual-inner", project.color.clone())}>
                                <img src={project.image.clone()} alt={project.title.clone()} width="800" height="600" loading="lazy" draggable="false" />
                            </div>
                        </div>
                    </div>
                </div>

                <Dots count={nav.len()} active={active} noun="project" on_select={on_select.clone()} />
                <p class="swipe-hint">{"Swipe left or right to navigate projects"}</p>
            </div>

            <div class="slider-arrows-mobile">
                <Arrow direction={Direction::Previous} noun="project" onclick={slider.on_previous()} />
                <Arrow direction={Direction::Next} noun="project" onclick={slider.on_next()} />
            </div>

            <div class="other-projects">
                { for nav.others(config::OTHER_PROJECTS_SHOWN).into_iter().map(|index| {
                    let other = &projects[index];
                    let on_select = on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                    html! {
                        <div key={index} class="preview-card" onclick={onclick}>
                            <div class="preview-image">
                                <img src={other.image.clone()} alt={other.title.clone()} width="400" height="300" loading="lazy" />
                            </div>
                            <h4>{&other.title}</h4>
                            <p class="preview-description">{&other.description}</p>
                            <div class="tag-list small">
                                { for other.tags.iter().take(config::PREVIEW_TAGS_SHOWN).map(|tag| html! {
                                    <span key={tag.clone()} class="tag">{tag}</span>
                                }) }
                                { match extra_tags(&other.tags, config::PREVIEW_TAGS_SHOWN) {
                                    Some(hidden) => html! { <span class="tag more">{format!("+{}", hidden)}</span> },
                                    None => html! {},
                                } }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

const PROJECTS_CSS: &str = r#"
    .projects-section {
        position: relative;
        padding: 5rem 1rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .projects-section .slider-frame {
        position: relative;
    }
    .project-text > * + * {
        margin-top: 1.5rem;
    }
    .project-title-row {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .project-icon {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: linear-gradient(90deg, var(--primary, #1e90ff), var(--secondary, #7c3aed));
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
    }
    .project-description {
        color: #d1d5db;
    }
    .read-more {
        background: none;
        border: none;
        color: var(--primary, #1e90ff);
        font-size: 0.875rem;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .read-more:hover {
        transform: translateX(5px);
    }
    .feature-block {
        padding-top: 1rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .feature-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.5rem;
        list-style: none;
        padding: 0;
        font-size: 0.875rem;
        color: #d1d5db;
    }
    .project-links {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
    }
    .project-link {
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.05);
        color: inherit;
        text-decoration: none;
        transition: transform 0.2s ease;
    }
    .project-link.primary {
        background: rgba(30, 144, 255, 0.1);
    }
    .project-link:hover {
        transform: scale(1.05);
    }
    .project-visual-inner {
        border-radius: 0.75rem;
        overflow: hidden;
        padding: 1rem;
    }
    .project-visual-inner img {
        width: 100%;
        height: auto;
        border-radius: 0.5rem;
        transition: transform 0.3s ease;
    }
    .project-visual-inner img:hover {
        transform: scale(1.03) rotate(1deg);
    }
    .other-projects {
        margin-top: 4rem;
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
    }
    @media (min-width: 768px) {
        .other-projects {
            grid-template-columns: repeat(3, 1fr);
        }
    }
    .preview-card {
        padding: 1.25rem;
        border-radius: 0.75rem;
        background: rgba(255, 255, 255, 0.04);
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .preview-card:hover {
        transform: translateY(-5px) scale(1.02);
    }
    .preview-image {
        height: 10rem;
        margin-bottom: 1rem;
        overflow: hidden;
        border-radius: 0.5rem;
    }
    .preview-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .preview-description {
        font-size: 0.875rem;
        color: #9ca3af;
        display: -webkit-box;
        -webkit-line-clamp: 2;
        -webkit-box-orient: vertical;
        overflow: hidden;
    }
"#;
