use log::Level;

use crate::gesture::DragConstraints;

/// Horizontal travel, in CSS pixels, a released drag must exceed to change slide.
pub const DRAG_THRESHOLD: f64 = 50.0;

/// Project cards can be pulled a little before they resist.
pub const PROJECT_DRAG: DragConstraints = DragConstraints::new(-100.0, 100.0, 0.2);

/// SEO slides stay put and only give elastically.
pub const SEO_DRAG: DragConstraints = DragConstraints::new(0.0, 0.0, 0.2);

/// How many non-active projects the preview row under the carousel shows.
pub const OTHER_PROJECTS_SHOWN: usize = 3;

/// Tags shown on a preview card before the rest collapse into a "+n" badge.
pub const PREVIEW_TAGS_SHOWN: usize = 2;

pub const HOME_SECTION: &str = "home";
pub const PROJECTS_SECTION: &str = "projects";
pub const SEO_SECTION: &str = "seo";

/// Element ids the page renders, the only valid in-page link targets.
pub const PAGE_SECTIONS: [&str; 3] = [HOME_SECTION, PROJECTS_SECTION, SEO_SECTION];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seo_drag_has_no_free_travel() {
        assert_eq!(SEO_DRAG.display_offset(0.0), 0.0);
        assert!(SEO_DRAG.display_offset(DRAG_THRESHOLD) < DRAG_THRESHOLD);
    }

    #[test]
    fn project_drag_range_covers_threshold() {
        assert_eq!(PROJECT_DRAG.display_offset(DRAG_THRESHOLD), DRAG_THRESHOLD);
        assert_eq!(PROJECT_DRAG.display_offset(-DRAG_THRESHOLD), -DRAG_THRESHOLD);
    }
}
