use std::rc::Rc;

use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::icon;
use crate::content::FooterContent;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: Rc<FooterContent>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let content = &props.content;
    let current_year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-panel">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand text-gradient">{&content.owner}</h3>
                        <p class="footer-tagline">{&content.tagline}</p>
                        <div class="social-links">
                            { for content.social.iter().map(|link| html! {
                                <a
                                    href={link.href.clone()}
                                    class="social-link"
                                    aria-label={link.label.clone()}
                                >
                                    {icon(&link.label.to_lowercase(), 18)}
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-list">
                            { for content.quick_links.iter().map(|link| html! {
                                <li><a href={link.href.clone()}>{&link.label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3>{"Services"}</h3>
                        <ul class="footer-list">
                            { for content.services.iter().map(|service| html! {
                                <li>{service}</li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", current_year, content.owner)}</p>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        padding: 2rem 1rem;
    }
    .footer-panel {
        max-width: 1200px;
        margin: 0 auto;
        padding: 2rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.04);
        backdrop-filter: blur(10px);
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    @media (min-width: 768px) {
        .footer-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
    .footer-brand {
        font-size: 1.5rem;
        margin-bottom: 1rem;
    }
    .footer-tagline {
        color: #9ca3af;
        max-width: 20rem;
        margin-bottom: 1rem;
    }
    .social-links {
        display: flex;
        gap: 1rem;
    }
    .social-link {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 2.25rem;
        height: 2.25rem;
        border-radius: 9999px;
        color: #d1d5db;
        background: rgba(255, 255, 255, 0.08);
        transition: transform 0.2s ease;
    }
    .social-link:hover {
        transform: translateY(-5px);
    }
    .social-link:active {
        transform: scale(0.95);
    }
    .footer-list {
        list-style: none;
        padding: 0;
        color: #9ca3af;
    }
    .footer-list li {
        margin-bottom: 0.5rem;
    }
    .footer-list a {
        color: inherit;
        text-decoration: none;
        transition: color 0.2s ease;
    }
    .footer-list a:hover {
        color: #fff;
    }
    .footer-bottom {
        margin-top: 2rem;
        padding-top: 2rem;
        border-top: 1px solid #1f2937;
        text-align: center;
        color: #6b7280;
        font-size: 0.875rem;
    }
"#;
