use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use web_sys::{Element, MouseEvent, PointerEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::gesture::{DragConstraints, DragTracker};
use crate::navigator::{NavigatorError, SlideNavigator};

#[derive(Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub threshold: f64,
    pub constraints: DragConstraints,
}

/// Navigator state plus the drag in progress for one slider.
#[derive(Clone)]
pub struct SliderHandle {
    nav: SlideNavigator,
    state: UseStateHandle<Result<SlideNavigator, NavigatorError>>,
    tracker: Rc<RefCell<DragTracker>>,
    drag_offset: UseStateHandle<f64>,
    constraints: DragConstraints,
    card: NodeRef,
}

impl SliderHandle {
    pub fn nav(&self) -> SlideNavigator {
        self.nav
    }

    /// Attach to the swipeable card so a drag keeps the pointer.
    pub fn card_ref(&self) -> NodeRef {
        self.card.clone()
    }

    fn update(&self, f: impl FnOnce(&mut SlideNavigator)) {
        let mut nav = self.nav;
        f(&mut nav);
        if nav.state() != self.nav.state() {
            self.state.set(Ok(nav));
        }
    }

    pub fn on_next(&self) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |_| handle.update(SlideNavigator::next))
    }

    pub fn on_previous(&self) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |_| handle.update(SlideNavigator::previous))
    }

    pub fn on_select(&self) -> Callback<usize> {
        let handle = self.clone();
        Callback::from(move |index: usize| {
            handle.update(|nav| {
                if let Err(e) = nav.go_to(index) {
                    error!("ignoring slide selection: {}", e);
                }
            })
        })
    }

    pub fn on_toggle(&self) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            handle.update(SlideNavigator::toggle_expanded)
        })
    }

    pub fn on_pointer_down(&self) -> Callback<PointerEvent> {
        let tracker = self.tracker.clone();
        let card = self.card.clone();
        Callback::from(move |e: PointerEvent| {
            // capture on the card itself, not whichever child was pressed
            if let Some(el) = card.cast::<Element>() {
                let _ = el.set_pointer_capture(e.pointer_id());
            }
            tracker.borrow_mut().start(f64::from(e.client_x()));
        })
    }

    pub fn on_pointer_move(&self) -> Callback<PointerEvent> {
        let tracker = self.tracker.clone();
        let drag_offset = self.drag_offset.clone();
        Callback::from(move |e: PointerEvent| {
            let mut tracker = tracker.borrow_mut();
            if tracker.is_dragging() {
                tracker.move_to(f64::from(e.client_x()));
                drag_offset.set(tracker.offset());
            }
        })
    }

    pub fn on_pointer_cancel(&self) -> Callback<PointerEvent> {
        let tracker = self.tracker.clone();
        let drag_offset = self.drag_offset.clone();
        Callback::from(move |_| {
            tracker.borrow_mut().cancel();
            drag_offset.set(0.0);
        })
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.borrow().is_dragging()
    }

    /// Inline transform for the card being dragged.
    pub fn card_style(&self) -> String {
        if self.is_dragging() {
            format!(
                "transform: translateX({}px) scale(0.95); transition: none;",
                self.constraints.display_offset(*self.drag_offset)
            )
        } else {
            "transform: translateX(0px) scale(1);".to_string()
        }
    }
}

/// Owns a navigator over `len` slides. Fails when there is nothing to show.
#[hook]
pub fn use_slide_navigator(
    len: usize,
    config: SliderConfig,
) -> Result<SliderHandle, NavigatorError> {
    let state = use_state(move || SlideNavigator::new(len));
    let tracker = use_mut_ref(DragTracker::default);
    let drag_offset = use_state(|| 0.0_f64);
    let card = use_node_ref();

    {
        let state = state.clone();
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        // released outside the card still counts as the end of the drag
        use_event_with_window("pointerup", move |e: PointerEvent| {
            let released = tracker.borrow_mut().release(f64::from(e.client_x()));
            if released.is_none() {
                return;
            }
            drag_offset.set(0.0);
            if let Ok(nav) = *state {
                if let Some(moved) = nav.settle_drag(released, config.threshold) {
                    state.set(Ok(moved));
                }
            }
        });
    }

    let nav = (*state)?;
    Ok(SliderHandle {
        nav,
        state,
        tracker,
        drag_offset,
        constraints: config.constraints,
        card,
    })
}

#[derive(Clone, Copy, PartialEq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Properties, PartialEq)]
pub struct ArrowProps {
    pub direction: Direction,
    /// "project" or "slide", used in the button label.
    pub noun: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Arrow)]
pub fn arrow(props: &ArrowProps) -> Html {
    let (glyph, label) = match props.direction {
        Direction::Previous => ("‹", format!("Previous {}", props.noun)),
        Direction::Next => ("›", format!("Next {}", props.noun)),
    };
    html! {
        <button
            class="slider-arrow"
            onclick={props.onclick.clone()}
            aria-label={label}
        >
            {glyph}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct DotsProps {
    pub count: usize,
    pub active: usize,
    pub noun: AttrValue,
    pub on_select: Callback<usize>,
}

#[function_component(Dots)]
pub fn dots(props: &DotsProps) -> Html {
    html! {
        <div class="slider-dots">
            { for (0..props.count).map(|index| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                html! {
                    <button
                        key={index}
                        class={classes!("slider-dot", (index == props.active).then(|| "active"))}
                        onclick={onclick}
                        aria-label={format!("Go to {} {}", props.noun, index + 1)}
                    />
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BrokenSliderProps {
    pub error: NavigatorError,
}

/// Shown in place of a slider whose collection could not be navigated.
#[function_component(BrokenSlider)]
pub fn broken_slider(props: &BrokenSliderProps) -> Html {
    error!("slider not rendered: {}", props.error);
    html! {
        <div class="slider-error">{"Nothing to show here yet."}</div>
    }
}

/// Outbound link inside a swipeable card. Not draggable, so a swipe that
/// starts on it moves the card instead of dragging the URL.
pub fn card_link(href: &str, label: &'static str, class: Classes) -> Html {
    html! {
        <a
            href={href.to_string()}
            class={class}
            target="_blank"
            rel="noopener noreferrer"
            draggable="false"
        >
            {label}
        </a>
    }
}

pub const SLIDER_CSS: &str = r#"
    .slider-viewport {
        overflow: hidden;
        touch-action: pan-y;
    }
    .slide-card {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
        align-items: center;
        cursor: grab;
        user-select: none;
        transition: transform 0.3s ease-out;
        animation: slideCardIn 0.8s ease-out;
    }
    .slide-card.dragging {
        cursor: grabbing;
    }
    @media (min-width: 768px) {
        .slide-card {
            grid-template-columns: 1fr 1fr;
        }
    }
    @keyframes slideCardIn {
        from { transform: translateY(30px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    .slider-arrow {
        padding: 0.75rem 1rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: #fff;
        font-size: 1.5rem;
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease;
    }
    .slider-arrow:hover {
        transform: scale(1.1);
        background: rgba(255, 255, 255, 0.12);
    }
    .slider-arrow:active {
        transform: scale(0.95);
    }
    .slider-arrows-desktop {
        display: none;
    }
    .slider-arrows-mobile {
        display: flex;
        justify-content: center;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    @media (min-width: 1024px) {
        .slider-arrows-desktop {
            display: block;
            position: absolute;
            top: 50%;
            transform: translateY(-50%);
            z-index: 20;
        }
        .slider-arrows-desktop.left { left: -3rem; }
        .slider-arrows-desktop.right { right: -1rem; }
        .slider-arrows-mobile, .swipe-hint { display: none; }
    }
    .slider-dots {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 2rem;
    }
    .slider-dot {
        width: 0.75rem;
        height: 0.75rem;
        border: none;
        border-radius: 9999px;
        background: #4b5563;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .slider-dot:hover {
        background: #9ca3af;
        transform: scale(1.2);
    }
    .slider-dot.active {
        width: 1.5rem;
        background: var(--primary, #1e90ff);
    }
    .swipe-hint {
        text-align: center;
        margin-top: 1rem;
        font-size: 0.875rem;
        color: #9ca3af;
    }
    .slider-error {
        text-align: center;
        color: #9ca3af;
        padding: 2rem;
    }
"#;
