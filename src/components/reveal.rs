use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_DURATION_SECS, REVEAL_OFFSET_PX, REVEAL_SAMPLE_PERIOD_MS, REVEAL_THRESHOLD};

// Browsers report ratios like 0.1199 right at the crossing.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-way hidden -> visible switch for a single block.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
    detached: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, revealed: false, detached: false }
    }

    /// Feeds one measured visibility fraction. Returns `true` only for the
    /// measurement that flips the block to revealed.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        self.latch(intersecting && ratio >= self.threshold)
    }

    /// Like [`observe`](Self::observe), for ratios an IntersectionObserver
    /// delivered after crossing the threshold.
    pub fn observe_reported(&mut self, ratio: f64, intersecting: bool) -> bool {
        self.latch(intersecting && ratio + RATIO_TOLERANCE >= self.threshold)
    }

    fn latch(&mut self, reached: bool) -> bool {
        if !self.is_active() || !reached {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Block went away. Nothing observed afterwards counts.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_active(&self) -> bool {
        !self.revealed && !self.detached
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Share of `rect`'s area inside a viewport anchored at the origin.
pub fn visible_fraction(rect: Rect, viewport_width: f64, viewport_height: f64) -> f64 {
    let area = rect.width * rect.height;
    if area <= 0.0 {
        return 0.0;
    }
    let visible_w = (rect.left + rect.width).min(viewport_width) - rect.left.max(0.0);
    let visible_h = (rect.top + rect.height).min(viewport_height) - rect.top.max(0.0);
    if visible_w <= 0.0 || visible_h <= 0.0 {
        return 0.0;
    }
    (visible_w * visible_h / area).min(1.0)
}

/// Inline style for a reveal wrapper in either state.
pub fn fade_style(revealed: bool, delay_secs: f64) -> String {
    let (opacity, offset) = if revealed { (1, 0) } else { (0, REVEAL_OFFSET_PX) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {d}s cubic-bezier(0.16,1,0.3,1) {delay:.2}s, transform {d}s cubic-bezier(0.16,1,0.3,1) {delay:.2}s;",
        d = REVEAL_DURATION_SECS,
        delay = delay_secs,
    )
}

/// Live subscription for one block. Dropping it releases the observer (or the
/// fallback sampler) and detaches the latch.
enum ViewWatcher {
    Observer {
        observer: IntersectionObserver,
        latch: Rc<RefCell<RevealLatch>>,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Sampler {
        latch: Rc<RefCell<RevealLatch>>,
        interval: Rc<RefCell<Option<Interval>>>,
    },
}

impl ViewWatcher {
    fn attach(element: Element, threshold: f64, on_reveal: Callback<()>) -> Self {
        let latch = Rc::new(RefCell::new(RevealLatch::new(threshold)));

        let cb_latch = latch.clone();
        let cb_reveal = on_reveal.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let fired = cb_latch
                    .borrow_mut()
                    .observe_reported(entry.intersection_ratio(), entry.is_intersecting());
                if fired {
                    observer.unobserve(&entry.target());
                    observer.disconnect();
                    cb_reveal.emit(());
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                // The first callback arrives right after observe(), so blocks
                // already above the fold reveal too.
                observer.observe(&element);
                ViewWatcher::Observer { observer, latch, _callback: callback }
            }
            Err(e) => {
                warn!("IntersectionObserver unavailable ({:?}), sampling element position", e);
                Self::sample_positions(element, latch, on_reveal)
            }
        }
    }

    fn sample_positions(element: Element, latch: Rc<RefCell<RevealLatch>>, on_reveal: Callback<()>) -> Self {
        let interval = Rc::new(RefCell::new(None));

        if sample(&element, &latch) {
            on_reveal.emit(());
            return ViewWatcher::Sampler { latch, interval };
        }

        let tick_latch = latch.clone();
        let slot = interval.clone();
        let handle = Interval::new(REVEAL_SAMPLE_PERIOD_MS, move || {
            if sample(&element, &tick_latch) {
                on_reveal.emit(());
                // Can't drop the interval from inside its own tick.
                let slot = slot.clone();
                Timeout::new(0, move || {
                    slot.borrow_mut().take();
                })
                .forget();
            }
        });
        *interval.borrow_mut() = Some(handle);
        ViewWatcher::Sampler { latch, interval }
    }
}

fn sample(element: &Element, latch: &Rc<RefCell<RevealLatch>>) -> bool {
    if !latch.borrow().is_active() {
        return false;
    }
    let Some(window) = web_sys::window() else {
        return false;
    };
    let viewport_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let viewport_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let dom_rect = element.get_bounding_client_rect();
    let rect = Rect {
        top: dom_rect.top(),
        left: dom_rect.left(),
        width: dom_rect.width(),
        height: dom_rect.height(),
    };
    let fraction = visible_fraction(rect, viewport_w, viewport_h);
    latch.borrow_mut().observe(fraction, fraction > 0.0)
}

impl Drop for ViewWatcher {
    fn drop(&mut self) {
        match self {
            ViewWatcher::Observer { observer, latch, .. } => {
                latch.borrow_mut().detach();
                observer.disconnect();
            }
            ViewWatcher::Sampler { latch, interval } => {
                latch.borrow_mut().detach();
                interval.borrow_mut().take();
            }
        }
    }
}

/// `true` from the first time `node` is at least 12% inside the viewport,
/// forever after.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watcher = match node.cast::<Element>() {
                    Some(element) => Some(ViewWatcher::attach(
                        element,
                        REVEAL_THRESHOLD,
                        Callback::from(move |_| in_view.set(true)),
                    )),
                    None => {
                        debug!("reveal target not mounted");
                        None
                    }
                };
                move || drop(watcher)
            },
            node,
        );
    }

    *in_view
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub children: Children,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone());

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={props.class.clone()}
            style={fade_style(revealed, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_and_never_again() {
        let mut latch = RevealLatch::new(0.12);
        assert!(!latch.observe(0.05, true));
        assert!(!latch.is_revealed());
        assert!(latch.observe(0.5, true));
        assert!(latch.is_revealed());
        // Scrolling away and back does nothing.
        assert!(!latch.observe(0.0, false));
        assert!(latch.is_revealed());
        assert!(!latch.observe(1.0, true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn ratio_at_threshold_counts() {
        let mut latch = RevealLatch::new(0.12);
        assert!(latch.observe(0.12, true));

        let mut reported = RevealLatch::new(0.12);
        assert!(reported.observe_reported(0.1199, true));
    }

    #[test]
    fn measured_fraction_just_below_threshold_stays_hidden() {
        // 23.9 of 200px showing at the bottom edge: 11.95%
        let rect = Rect { top: 768.0 - 23.9, left: 0.0, width: 400.0, height: 200.0 };
        let fraction = visible_fraction(rect, 1024.0, 768.0);
        assert!(fraction < 0.12 && fraction + RATIO_TOLERANCE >= 0.12);

        let mut latch = RevealLatch::new(0.12);
        assert!(!latch.observe(fraction, fraction > 0.0));
        assert!(latch.is_active());

        // 24px is exactly 12%.
        let rect = Rect { top: 768.0 - 24.0, ..rect };
        let fraction = visible_fraction(rect, 1024.0, 768.0);
        assert!(latch.observe(fraction, fraction > 0.0));
    }

    #[test]
    fn reported_ratio_respects_latch_state() {
        let mut latch = RevealLatch::new(0.12);
        assert!(!latch.observe_reported(0.05, true));
        assert!(!latch.observe_reported(0.5, false));
        assert!(latch.observe_reported(0.3, true));
        assert!(!latch.observe_reported(1.0, true));

        let mut gone = RevealLatch::new(0.12);
        gone.detach();
        assert!(!gone.observe_reported(1.0, true));
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut latch = RevealLatch::new(0.12);
        assert!(!latch.observe(0.5, false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn already_in_view_fires_on_first_measurement() {
        let mut latch = RevealLatch::new(0.12);
        assert!(latch.observe(1.0, true));
    }

    #[test]
    fn detached_latch_never_fires() {
        let mut latch = RevealLatch::new(0.12);
        latch.detach();
        assert!(!latch.observe(1.0, true));
        assert!(!latch.is_revealed());
        assert!(!latch.is_active());
    }

    #[test]
    fn fraction_of_fully_visible_block() {
        let rect = Rect { top: 100.0, left: 0.0, width: 400.0, height: 200.0 };
        assert_eq!(visible_fraction(rect, 1024.0, 768.0), 1.0);
    }

    #[test]
    fn fraction_of_block_below_the_fold() {
        let rect = Rect { top: 800.0, left: 0.0, width: 400.0, height: 200.0 };
        assert_eq!(visible_fraction(rect, 1024.0, 768.0), 0.0);
    }

    #[test]
    fn fraction_of_partially_visible_block() {
        // 50 of 200px visible at the bottom edge
        let rect = Rect { top: 718.0, left: 0.0, width: 400.0, height: 200.0 };
        assert!((visible_fraction(rect, 1024.0, 768.0) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn fraction_of_block_scrolled_past() {
        let rect = Rect { top: -300.0, left: 0.0, width: 400.0, height: 200.0 };
        assert_eq!(visible_fraction(rect, 1024.0, 768.0), 0.0);
    }

    #[test]
    fn zero_sized_block_is_never_visible() {
        let rect = Rect { top: 10.0, left: 10.0, width: 0.0, height: 0.0 };
        assert_eq!(visible_fraction(rect, 1024.0, 768.0), 0.0);
    }

    #[test]
    fn hidden_style_is_offset_and_transparent() {
        let style = fade_style(false, 0.0);
        assert!(style.starts_with("opacity: 0; transform: translateY(32px);"));
    }

    #[test]
    fn revealed_style_carries_delay() {
        let style = fade_style(true, 0.24);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(style.contains("cubic-bezier(0.16,1,0.3,1) 0.24s"));
        assert!(style.contains("opacity 0.7s"));
    }
}
