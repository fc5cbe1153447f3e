use std::rc::Rc;

use yew::prelude::*;

use crate::components::slider::{
    card_link, use_slide_navigator, Arrow, BrokenSlider, Direction, Dots, SliderConfig,
};
use crate::config;
use crate::content::{Callout, Metric, ResultCard, Score, SeoContent, SeoProject, SlideBody};

#[derive(Properties, PartialEq)]
pub struct SeoSectionProps {
    pub content: Rc<SeoContent>,
}

#[function_component(SeoSection)]
pub fn seo_section(props: &SeoSectionProps) -> Html {
    let content = props.content.clone();
    let slider = use_slide_navigator(
        content.slides.len(),
        SliderConfig {
            threshold: config::DRAG_THRESHOLD,
            constraints: config::SEO_DRAG,
        },
    );
    let slider = match slider {
        Ok(slider) => slider,
        Err(error) => return html! { <BrokenSlider error={error} /> },
    };

    let nav = slider.nav();
    let active = nav.active_index();
    let slide = &content.slides[active];

    let (text, visual) = match &slide.body {
        SlideBody::Benefits { points, callout, scores } => (
            benefits_text(active, &slide.title, points, callout),
            score_panel(scores),
        ),
        SlideBody::Expertise { areas, methodology, timeline, metrics } => (
            expertise_text(active, &slide.title, areas, methodology, timeline),
            metrics_panel(metrics),
        ),
        SlideBody::Stories { results } => (
            stories_text(active, &content.stories),
            results_panel(results),
        ),
    };

    html! {
        <section id={config::SEO_SECTION} class="seo-section">
            <style>{SEO_CSS}</style>
            <div class="section-heading">
                <h2>{"SEO "}<span class="text-gradient">{"Results"}</span></h2>
                <p>{&slide.description}</p>
                <div class="heading-bar"></div>
            </div>

            <div class="slider-frame">
                <div class="slider-arrows-desktop left">
                    <Arrow direction={Direction::Previous} noun="slide" onclick={slider.on_previous()} />
                </div>
                <div class="slider-arrows-desktop right">
                    <Arrow direction={Direction::Next} noun="slide" onclick={slider.on_next()} />
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
                        <div class="seo-text">{text}</div>
                        <div class="seo-visual">
                            <div class={classes!("seo-visual-inner", slide.color.clone())}>
                                {visual}
                            </div>
                        </div>
                    </div>
                </div>

                <Dots count={nav.len()} active={active} noun="slide" on_select={slider.on_select()} />
            </div>

            <div class="slider-arrows-mobile">
                <Arrow direction={Direction::Previous} noun="slide" onclick={slider.on_previous()} />
                <Arrow direction={Direction::Next} noun="slide" onclick={slider.on_next()} />
            </div>
        </section>
    }
}

fn slide_title(index: usize, title: &str) -> Html {
    html! {
        <div class="seo-title-row">
            <div class="seo-number">{index + 1}</div>
            <h3>{title}</h3>
        </div>
    }
}

fn dotted_list(items: &[String]) -> Html {
    html! {
        <ul class="dotted-list">
            { for items.iter().map(|item| html! {
                <li><span class="feature-dot"></span><span>{item}</span></li>
            }) }
        </ul>
    }
}

fn benefits_text(index: usize, title: &str, points: &[String], callout: &Callout) -> Html {
    html! {
        <>
            {slide_title(index, title)}
            {dotted_list(points)}
            <div class="seo-callout">
                <h4>{&callout.title}</h4>
                <p>{&callout.text}</p>
            </div>
        </>
    }
}

fn expertise_text(
    index: usize,
    title: &str,
    areas: &[String],
    methodology: &str,
    timeline: &[String],
) -> Html {
    html! {
        <>
            {slide_title(index, title)}
            <div class="expertise-grid">
                { for areas.iter().map(|area| html! {
                    <div class="expertise-item"><span class="feature-dot"></span><span>{area}</span></div>
                }) }
            </div>
            <div class="seo-subsection">
                <h4>{"Our Methodology"}</h4>
                <p>{methodology}</p>
            </div>
            <div class="seo-subsection">
                <h4>{"Growth Timeline"}</h4>
                {dotted_list(timeline)}
            </div>
        </>
    }
}

fn stories_text(index: usize, stories: &[SeoProject]) -> Html {
    html! {
        <>
            {slide_title(index, "Our SEO Success Stories")}
            <div class="story-list">
                { for stories.iter().map(|story| html! {
                    <div key={story.title.clone()} class="story-card">
                        <img src={story.image.clone()} alt={story.title.clone()} loading="lazy" draggable="false" />
                        <div>
                            <h4>{&story.title}</h4>
                            <p>{&story.description}</p>
                            <div class="story-features">
                                { for story.features.iter().take(4).map(|feature| html! {
                                    <span class="story-feature">{feature}</span>
                                }) }
                            </div>
                            {card_link(&story.demo, "View site", classes!("story-link"))}
                        </div>
                    </div>
                }) }
            </div>
        </>
    }
}

// r = 65 ring drawn in a 160x160 box
const RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * 65.0;

fn ring_offset(score: u8) -> f64 {
    RING_CIRCUMFERENCE * (1.0 - f64::from(score.min(100)) / 100.0)
}

fn score_panel(scores: &[Score]) -> Html {
    html! {
        <>
            <h4 class="panel-title">{"Google PageSpeed Insights"}</h4>
            <div class="score-grid">
                { for scores.iter().map(|score| html! {
                    <div class="score">
                        <div class="score-label">{&score.label}</div>
                        <svg viewBox="0 0 160 160" class="score-ring">
                            <circle cx="80" cy="80" r="65" fill="none" stroke="#374151" stroke-width="12" />
                            <circle
                                cx="80" cy="80" r="65" fill="none" stroke="#10b981" stroke-width="12"
                                stroke-dasharray={RING_CIRCUMFERENCE.to_string()}
                                stroke-dashoffset={ring_offset(score.value).to_string()}
                                transform="rotate(-90 80 80)"
                            />
                            <text x="80" y="90" text-anchor="middle" class="score-value">{score.value}</text>
                        </svg>
                        <p class="score-note">{&score.note}</p>
                    </div>
                }) }
            </div>
        </>
    }
}

fn metrics_panel(metrics: &[Metric]) -> Html {
    html! {
        <>
            <h4 class="panel-title">{"SEO Impact Metrics"}</h4>
            <p class="panel-subtitle">{"Typical results within 6-12 months"}</p>
            { for metrics.iter().map(|metric| html! {
                <div class={classes!("metric", format!("tone-{}", metric.tone))}>
                    <div class="metric-head">
                        <span>{&metric.label}</span>
                        <span class="metric-value">{metric.display_value()}</span>
                    </div>
                    <div class="metric-bar">
                        <div class="metric-fill" style={format!("width: {}%;", metric.bar_width())}></div>
                    </div>
                </div>
            }) }
        </>
    }
}

fn results_panel(results: &[ResultCard]) -> Html {
    html! {
        <>
            <h4 class="panel-title">{"Project Results"}</h4>
            <p class="panel-subtitle">{"Average improvements across our SEO projects"}</p>
            <div class="result-grid">
                { for results.iter().map(|result| html! {
                    <div class="result-card">
                        <div class="result-value">{&result.value}</div>
                        <div class="result-label">{&result.label}</div>
                        <p>{&result.description}</p>
                    </div>
                }) }
            </div>
        </>
    }
}

const SEO_CSS: &str = r#"
    .seo-section {
        position: relative;
        padding: 5rem 1rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .seo-section .slider-frame {
        position: relative;
    }
    .seo-text > * + * {
        margin-top: 1.5rem;
    }
    .seo-title-row {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .seo-number {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: linear-gradient(90deg, var(--primary, #1e90ff), var(--secondary, #7c3aed));
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: bold;
    }
    .dotted-list {
        list-style: none;
        padding: 0;
        color: #d1d5db;
    }
    .dotted-list li {
        display: flex;
        gap: 0.75rem;
        margin-bottom: 0.75rem;
        animation: fadeRight 0.4s ease-out both;
    }
    @keyframes fadeRight {
        from { opacity: 0; transform: translateX(-20px); }
        to { opacity: 1; transform: translateX(0); }
    }
    .seo-callout {
        padding: 1rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.05);
    }
    .expertise-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.75rem;
    }
    .seo-subsection {
        padding-top: 1rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .story-card {
        display: flex;
        gap: 1rem;
        padding: 0.75rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.04);
        margin-bottom: 0.75rem;
    }
    .story-card img {
        width: 6rem;
        height: 4rem;
        object-fit: cover;
        border-radius: 0.375rem;
    }
    .story-link {
        font-size: 0.875rem;
        color: var(--primary, #1e90ff);
    }
    .story-features {
        display: flex;
        flex-wrap: wrap;
        gap: 0.25rem;
        font-size: 0.75rem;
    }
    .seo-visual-inner {
        border-radius: 0.75rem;
        padding: 1.5rem;
    }
    .score-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
        text-align: center;
    }
    .score-ring circle:last-of-type {
        transition: stroke-dashoffset 1.5s ease-out;
    }
    .score-value {
        fill: #10b981;
        font-size: 2rem;
        font-weight: bold;
    }
    .metric {
        margin-bottom: 1rem;
    }
    .metric-head {
        display: flex;
        justify-content: space-between;
    }
    .metric-bar {
        height: 0.5rem;
        border-radius: 9999px;
        background: #374151;
        overflow: hidden;
    }
    .metric-fill {
        height: 100%;
        background: currentColor;
        transition: width 1s ease-out;
    }
    .tone-green { color: #4ade80; }
    .tone-blue { color: #60a5fa; }
    .tone-purple { color: #c084fc; }
    .tone-cyan { color: #22d3ee; }
    .result-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .result-card {
        padding: 1rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.05);
        text-align: center;
    }
    .result-value {
        font-size: 1.75rem;
        font-weight: bold;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_score_closes_the_ring() {
        assert!(ring_offset(100).abs() < 1e-9);
        assert!((ring_offset(0) - RING_CIRCUMFERENCE).abs() < 1e-9);
        assert!((ring_offset(96) - RING_CIRCUMFERENCE * 0.04).abs() < 1e-9);
    }
}
