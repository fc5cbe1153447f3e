/// Horizontal bounds a slide card may be dragged within before it starts to
/// resist. Only the card's on-screen position uses this; whether a drag
/// changes slide is decided from the raw offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConstraints {
    pub left: f64,
    pub right: f64,
    pub elastic: f64,
}

impl DragConstraints {
    pub const fn new(left: f64, right: f64, elastic: f64) -> Self {
        Self { left, right, elastic }
    }

    /// Where the card is drawn for a raw pointer offset. Past either bound the
    /// overshoot is scaled by `elastic`, so a zero range still gives a little.
    pub fn display_offset(&self, raw: f64) -> f64 {
        if raw < self.left {
            self.left + (raw - self.left) * self.elastic
        } else if raw > self.right {
            self.right + (raw - self.right) * self.elastic
        } else {
            raw
        }
    }
}

/// Follows one pointer from press to release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    origin: Option<f64>,
    current: f64,
}

impl DragTracker {
    pub fn start(&mut self, x: f64) {
        self.origin = Some(x);
        self.current = x;
    }

    pub fn move_to(&mut self, x: f64) {
        if self.origin.is_some() {
            self.current = x;
        }
    }

    /// Ends the drag and hands back how far the pointer travelled, or `None`
    /// when no drag was in progress.
    pub fn release(&mut self, x: f64) -> Option<f64> {
        let origin = self.origin.take()?;
        self.current = x;
        Some(x - origin)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn offset(&self) -> f64 {
        self.origin.map_or(0.0, |origin| self.current - origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_bounds_follows_pointer() {
        let c = DragConstraints::new(-100.0, 100.0, 0.2);
        assert_eq!(c.display_offset(0.0), 0.0);
        assert_eq!(c.display_offset(-100.0), -100.0);
        assert_eq!(c.display_offset(75.0), 75.0);
    }

    #[test]
    fn overshoot_is_damped() {
        let c = DragConstraints::new(-100.0, 100.0, 0.2);
        assert!((c.display_offset(150.0) - 110.0).abs() < 1e-9);
        assert!((c.display_offset(-200.0) - -120.0).abs() < 1e-9);
    }

    #[test]
    fn zero_range_only_gives_elastic_travel() {
        let c = DragConstraints::new(0.0, 0.0, 0.2);
        assert!((c.display_offset(80.0) - 16.0).abs() < 1e-9);
        assert!((c.display_offset(-80.0) - -16.0).abs() < 1e-9);
    }

    #[test]
    fn tracker_reports_travel_on_release() {
        let mut t = DragTracker::default();
        assert!(!t.is_dragging());
        t.start(300.0);
        t.move_to(260.0);
        assert!(t.is_dragging());
        assert_eq!(t.offset(), -40.0);
        assert_eq!(t.release(220.0), Some(-80.0));
        assert!(!t.is_dragging());
        assert_eq!(t.offset(), 0.0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut t = DragTracker::default();
        t.move_to(50.0);
        assert_eq!(t.offset(), 0.0);
        assert_eq!(t.release(90.0), None);
    }

    #[test]
    fn cancel_drops_the_drag() {
        let mut t = DragTracker::default();
        t.start(10.0);
        t.move_to(200.0);
        t.cancel();
        assert_eq!(t.release(200.0), None);
    }
}
