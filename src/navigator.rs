use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("slide collection is empty")]
    InvalidCollection,
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

/// What a finished drag asks the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorState {
    pub active_index: usize,
    pub is_expanded: bool,
}

/// Keeps track of which slide in a fixed collection is showing.
///
/// The index wraps in both directions and the expanded flag always refers to
/// the slide currently shown: any change of slide collapses it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideNavigator {
    len: usize,
    state: NavigatorState,
}

impl SlideNavigator {
    pub fn new(len: usize) -> Result<Self, NavigatorError> {
        if len == 0 {
            return Err(NavigatorError::InvalidCollection);
        }
        Ok(Self {
            len,
            state: NavigatorState {
                active_index: 0,
                is_expanded: false,
            },
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn next(&mut self) {
        self.select((self.state.active_index + 1) % self.len);
    }

    pub fn previous(&mut self) {
        // add len before subtracting so the intermediate never goes below zero
        self.select((self.state.active_index + self.len - 1) % self.len);
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), NavigatorError> {
        if index >= self.len {
            return Err(NavigatorError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.select(index);
        Ok(())
    }

    pub fn toggle_expanded(&mut self) {
        self.state.is_expanded = !self.state.is_expanded;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::NoOp => {}
        }
    }

    /// Interprets a released drag and applies it. Returns what was done.
    pub fn on_drag_end(&mut self, offset_x: f64, threshold: f64) -> Command {
        let command = interpret_drag(offset_x, threshold);
        self.apply(command);
        command
    }

    /// Navigator after a pointer release. `None` when nothing was being
    /// dragged or the drag stayed inside the dead zone.
    pub fn settle_drag(&self, released: Option<f64>, threshold: f64) -> Option<SlideNavigator> {
        let offset = released?;
        let mut nav = *self;
        match nav.on_drag_end(offset, threshold) {
            Command::NoOp => None,
            command => {
                debug!("drag of {}px -> {:?}", offset, command);
                Some(nav)
            }
        }
    }

    /// Indices of the slides that are not showing, in collection order.
    pub fn others(&self, limit: usize) -> Vec<usize> {
        (0..self.len)
            .filter(|&index| index != self.state.active_index)
            .take(limit)
            .collect()
    }

    fn select(&mut self, index: usize) {
        debug!(
            "slide {} -> {} of {}",
            self.state.active_index, index, self.len
        );
        self.state = NavigatorState {
            active_index: index,
            is_expanded: false,
        };
    }
}

/// Dragging right goes back, dragging left goes forward. Anything within
/// `threshold` of the start in either direction is ignored.
pub fn interpret_drag(offset_x: f64, threshold: f64) -> Command {
    if offset_x > threshold {
        Command::Previous
    } else if offset_x < -threshold {
        Command::Next
    } else {
        Command::NoOp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::DragTracker;

    fn at(len: usize, index: usize) -> SlideNavigator {
        let mut nav = SlideNavigator::new(len).unwrap();
        nav.go_to(index).unwrap();
        nav
    }

    #[test]
    fn starts_at_first_slide_collapsed() {
        let nav = SlideNavigator::new(4).unwrap();
        assert_eq!(nav.active_index(), 0);
        assert!(!nav.is_expanded());
        assert_eq!(nav.len(), 4);
    }

    #[test]
    fn empty_collection_is_rejected() {
        assert_eq!(
            SlideNavigator::new(0),
            Err(NavigatorError::InvalidCollection)
        );
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for len in 1..=8 {
            for start in 0..len {
                let mut nav = at(len, start);
                for _ in 0..len {
                    nav.next();
                }
                assert_eq!(nav.active_index(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn previous_undoes_next_and_back() {
        for len in 1..=8 {
            for start in 0..len {
                let mut nav = at(len, start);
                nav.next();
                nav.previous();
                assert_eq!(nav.active_index(), start);

                nav.previous();
                nav.next();
                assert_eq!(nav.active_index(), start);
            }
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut nav = SlideNavigator::new(5).unwrap();
        nav.previous();
        assert_eq!(nav.active_index(), 4);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut nav = SlideNavigator::new(1).unwrap();
        nav.next();
        assert_eq!(nav.active_index(), 0);
        nav.previous();
        assert_eq!(nav.active_index(), 0);
    }

    #[test]
    fn index_stays_in_range_over_mixed_sequence() {
        let mut nav = SlideNavigator::new(3).unwrap();
        let steps = [0u8, 1, 1, 2, 0, 1, 1, 1, 2, 0, 0, 0, 0, 1];
        for (i, step) in steps.iter().enumerate() {
            match step {
                0 => nav.next(),
                1 => nav.previous(),
                _ => nav.go_to(i % 3).unwrap(),
            }
            assert!(nav.active_index() < nav.len());
        }
    }

    #[test]
    fn navigation_collapses_expanded_text() {
        let mut nav = SlideNavigator::new(4).unwrap();

        nav.toggle_expanded();
        nav.next();
        assert!(!nav.is_expanded());

        nav.toggle_expanded();
        nav.previous();
        assert!(!nav.is_expanded());

        nav.toggle_expanded();
        nav.go_to(nav.active_index()).unwrap();
        assert!(!nav.is_expanded());
    }

    #[test]
    fn toggle_keeps_index() {
        let mut nav = at(5, 3);
        nav.toggle_expanded();
        assert_eq!(nav.state(), NavigatorState { active_index: 3, is_expanded: true });
        nav.toggle_expanded();
        assert_eq!(nav.state(), NavigatorState { active_index: 3, is_expanded: false });
    }

    #[test]
    fn drag_threshold_is_exclusive() {
        assert_eq!(interpret_drag(60.0, 50.0), Command::Previous);
        assert_eq!(interpret_drag(-60.0, 50.0), Command::Next);
        assert_eq!(interpret_drag(10.0, 50.0), Command::NoOp);
        assert_eq!(interpret_drag(-50.0, 50.0), Command::NoOp);
        assert_eq!(interpret_drag(50.0, 50.0), Command::NoOp);
        assert_eq!(interpret_drag(-51.0, 50.0), Command::Next);
    }

    #[test]
    fn six_slides_wrap_both_ways() {
        let mut nav = SlideNavigator::new(6).unwrap();
        for _ in 0..5 {
            nav.next();
        }
        assert_eq!(nav.active_index(), 5);
        nav.next();
        assert_eq!(nav.active_index(), 0);
        nav.previous();
        assert_eq!(nav.active_index(), 5);
    }

    #[test]
    fn go_to_collapses_and_moves() {
        let mut nav = at(3, 1);
        nav.toggle_expanded();
        nav.go_to(2).unwrap();
        assert_eq!(nav.state(), NavigatorState { active_index: 2, is_expanded: false });
    }

    #[test]
    fn go_to_out_of_range_leaves_state_alone() {
        let mut nav = at(3, 1);
        nav.toggle_expanded();
        assert_eq!(
            nav.go_to(3),
            Err(NavigatorError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(nav.state(), NavigatorState { active_index: 1, is_expanded: true });
    }

    #[test]
    fn drag_end_applies_command() {
        let mut nav = SlideNavigator::new(4).unwrap();
        assert_eq!(nav.on_drag_end(-80.0, 50.0), Command::Next);
        assert_eq!(nav.active_index(), 1);
        assert_eq!(nav.on_drag_end(120.0, 50.0), Command::Previous);
        assert_eq!(nav.active_index(), 0);

        nav.toggle_expanded();
        assert_eq!(nav.on_drag_end(20.0, 50.0), Command::NoOp);
        assert!(nav.is_expanded());
    }

    #[test]
    fn release_without_press_changes_nothing() {
        let mut tracker = DragTracker::default();
        let released = tracker.release(300.0);
        assert_eq!(at(4, 2).settle_drag(released, 50.0), None);
    }

    #[test]
    fn short_drag_keeps_slide_and_expanded_text() {
        let mut nav = at(4, 2);
        nav.toggle_expanded();

        let mut tracker = DragTracker::default();
        tracker.start(200.0);
        tracker.move_to(230.0);
        let released = tracker.release(240.0);

        assert_eq!(nav.settle_drag(released, 50.0), None);
        assert_eq!(nav.state(), NavigatorState { active_index: 2, is_expanded: true });
    }

    #[test]
    fn long_drag_moves_and_collapses() {
        let mut nav = at(4, 0);
        nav.toggle_expanded();

        let mut tracker = DragTracker::default();
        tracker.start(400.0);
        let released = tracker.release(320.0);

        let moved = nav.settle_drag(released, 50.0).unwrap();
        assert_eq!(moved.state(), NavigatorState { active_index: 1, is_expanded: false });
        // the navigator it was computed from is untouched
        assert_eq!(nav.state(), NavigatorState { active_index: 0, is_expanded: true });

        let back = moved.settle_drag(Some(75.0), 50.0).unwrap();
        assert_eq!(back.active_index(), 0);
    }

    #[test]
    fn others_skips_active_slide() {
        let nav = at(6, 2);
        assert_eq!(nav.others(3), vec![0, 1, 3]);
        assert_eq!(at(2, 0).others(3), vec![1]);
        assert!(SlideNavigator::new(1).unwrap().others(3).is_empty());
    }
}
