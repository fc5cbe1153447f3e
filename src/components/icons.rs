use yew::prelude::*;

/// Stroke paths on a 24x24 grid, drawn with `currentColor`.
pub fn icon_paths(token: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match token {
        "smartphone" => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
        "globe" => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M2 12h20",
            "M12 2a15.3 15.3 0 0 1 4 10a15.3 15.3 0 0 1-4 10a15.3 15.3 0 0 1-4-10a15.3 15.3 0 0 1 4-10z",
        ],
        "target" => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12z",
            "M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        "film" => &[
            "M4 3h16a1 1 0 0 1 1 1v16a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
            "M7 3v18",
            "M17 3v18",
            "M3 12h18",
            "M3 7.5h4",
            "M3 16.5h4",
            "M17 7.5h4",
            "M17 16.5h4",
        ],
        "bot" => &[
            "M12 8V4H8",
            "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
            "M2 14h2",
            "M20 14h2",
            "M15 13v2",
            "M9 13v2",
        ],
        "github" => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        "twitter" => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
        "linkedin" => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        "instagram" => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8A4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        _ => return None,
    };
    Some(paths)
}

/// Inline SVG glyph for `token`. Unknown tokens draw nothing.
pub fn icon(token: &str, size: u32) -> Html {
    let Some(paths) = icon_paths(token) else {
        return html! {};
    };
    html! {
        <svg
            viewBox="0 0 24 24"
            width={size.to_string()}
            height={size.to_string()}
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{self, PROJECT_ICONS};

    #[test]
    fn every_project_icon_has_a_glyph() {
        for token in PROJECT_ICONS {
            let paths = icon_paths(token).unwrap_or_default();
            assert!(!paths.is_empty(), "no glyph for {token}");
        }
        assert!(icon_paths(content::project_icon(99)).is_some());
    }

    #[test]
    fn every_social_link_has_a_glyph() {
        let site = content::load().unwrap();
        for link in site.footer.social.iter() {
            let token = link.label.to_lowercase();
            let paths = icon_paths(&token).unwrap_or_default();
            assert!(!paths.is_empty(), "no glyph for {}", link.label);
        }
    }

    #[test]
    fn unknown_token_draws_nothing() {
        assert!(icon_paths("unicorn").is_none());
        assert_eq!(icon("unicorn", 20), html! {});
    }

    #[test]
    fn known_token_draws_an_svg() {
        match icon("film", 20) {
            Html::VTag(tag) => {
                assert_eq!(tag.tag(), "svg");
                let view_box = tag.attributes.iter().find(|(key, _)| *key == "viewBox");
                assert_eq!(view_box, Some(("viewBox", "0 0 24 24")));
            }
            _ => panic!("expected an svg element"),
        }
    }
}
