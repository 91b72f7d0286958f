use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::reveal::use_in_view;
use crate::config::COUNTER_DURATION_MS;

pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub finished: bool,
}

/// One 0 -> target run, driven by frame timestamps rather than a step count
/// so it lands on time whatever the frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRun {
    target: u64,
    duration_ms: f64,
    started_at: Option<f64>,
    last: u64,
}

impl CounterRun {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self { target, duration_ms, started_at: None, last: 0 }
    }

    /// `timestamp_ms` is the animation frame's timestamp. The first call
    /// pins the start of the run.
    pub fn tick(&mut self, timestamp_ms: f64) -> CounterFrame {
        let start = *self.started_at.get_or_insert(timestamp_ms);
        let p = if self.duration_ms > 0.0 {
            ((timestamp_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if p >= 1.0 {
            self.last = self.target;
            return CounterFrame { value: self.target, finished: true };
        }

        let eased = (ease_out_cubic(p) * self.target as f64).floor() as u64;
        self.last = self.last.max(eased.min(self.target));
        CounterFrame { value: self.last, finished: false }
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn counter_text(prefix: &str, value: u64, suffix: &str) -> String {
    format!("{}{}{}", prefix, group_thousands(value), suffix)
}

/// Self-rescheduling requestAnimationFrame chain. Dropping it cancels the
/// pending frame.
struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    fn start(mut run: CounterRun, on_frame: Callback<u64>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let frame_pending = pending.clone();
        let frame_callback = callback.clone();
        let frame_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            frame_pending.set(None);
            let frame = run.tick(timestamp);
            on_frame.emit(frame.value);
            if frame.finished {
                return;
            }
            if let Some(cb) = frame_callback.borrow().as_ref() {
                match frame_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => frame_pending.set(Some(id)),
                    Err(e) => warn!("could not schedule counter frame: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let scheduled = callback
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match scheduled {
            Some(Ok(id)) => {
                pending.set(Some(id));
                Ok(Self { pending, callback })
            }
            Some(Err(e)) => {
                callback.borrow_mut().take();
                Err(e)
            }
            None => Err(JsValue::from_str("frame callback missing")),
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // The closure holds an Rc to its own slot.
        self.callback.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let value = use_state(|| 0u64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(in_view, target): &(bool, u64)| {
                let mut frames = None;
                if *in_view {
                    debug!("counter to {} started", target);
                    let on_frame = {
                        let value = value.clone();
                        Callback::from(move |v: u64| value.set(v))
                    };
                    match FrameLoop::start(CounterRun::new(*target, COUNTER_DURATION_MS), on_frame) {
                        Ok(frame_loop) => frames = Some(frame_loop),
                        Err(e) => {
                            warn!("requestAnimationFrame unavailable ({:?}), showing final value", e);
                            value.set(*target);
                        }
                    }
                }
                move || drop(frames)
            },
            (in_view, props.target),
        );
    }

    html! {
        <span ref={node} class="counter">
            { counter_text(&props.prefix, *value, &props.suffix) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_at_60fps(target: u64) -> Vec<CounterFrame> {
        let mut run = CounterRun::new(target, 1800.0);
        let mut frames = Vec::new();
        let mut ts = 1000.0;
        loop {
            let frame = run.tick(ts);
            frames.push(frame);
            if frame.finished {
                return frames;
            }
            ts += 16.7;
        }
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn first_frame_starts_at_zero() {
        let mut run = CounterRun::new(83, 1800.0);
        assert_eq!(run.tick(5000.0), CounterFrame { value: 0, finished: false });
    }

    #[test]
    fn lands_exactly_on_target() {
        for target in [0, 1, 2, 10, 83, 2_000_000] {
            let frames = run_at_60fps(target);
            let last = frames.last().copied().unwrap();
            assert!(last.finished);
            assert_eq!(last.value, target);
            assert_eq!(frames.iter().filter(|f| f.finished).count(), 1);
        }
    }

    #[test]
    fn never_decreases_or_overshoots() {
        let frames = run_at_60fps(2_000_000);
        for pair in frames.windows(2) {
            assert!(pair[1].value >= pair[0].value);
        }
        assert!(frames.iter().all(|f| f.value <= 2_000_000));
    }

    #[test]
    fn uneven_frames_still_finish_on_time() {
        let mut run = CounterRun::new(10, 1800.0);
        run.tick(0.0);
        assert!(!run.tick(250.0).finished);
        assert!(!run.tick(1700.0).finished);
        let late = run.tick(4000.0);
        assert_eq!(late, CounterFrame { value: 10, finished: true });
    }

    #[test]
    fn value_follows_eased_curve() {
        let mut run = CounterRun::new(1000, 1800.0);
        run.tick(0.0);
        // p = 0.5 -> 0.875
        assert_eq!(run.tick(900.0).value, 875);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(83), "83");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(2_000_000), "2,000,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn final_text_includes_prefix_and_suffix() {
        assert_eq!(counter_text("", 10, ""), "10");
        assert_eq!(counter_text("", 2_000_000, "+ hrs"), "2,000,000+ hrs");
        assert_eq!(counter_text("$", 1500, ""), "$1,500");
    }
}
