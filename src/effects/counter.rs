//! Eased numeric counters for the stats section.
//!
//! A counter starts at 0 and converges on its `data-target` value over a
//! fixed two-second run with a quartic ease-out, one step per rendered
//! frame via `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Fixed run length for every counter.
pub const DURATION_MS: f64 = 2000.0;

#[derive(Debug, Error)]
pub enum CounterError {
    /// The element's `data-target` attribute is missing or not a
    /// non-negative integer. Such elements are skipped rather than
    /// animated toward garbage.
    #[error("missing or non-numeric data-target: {0:?}")]
    InvalidTarget(Option<String>),
}

/// Quartic ease-out. Monotonically non-decreasing on [0, 1].
pub fn ease_out_quart(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(4)
}

/// Group an integer with commas the way `toLocaleString` renders it
/// for en-style locales, e.g. `1234 -> "1,234"`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The label a finished counter settles on: the exact target, with a `+`
/// suffix when the target is greater than one.
pub fn final_label(target: u64) -> String {
    if target > 1 {
        format!("{}+", group_digits(target))
    } else {
        group_digits(target)
    }
}

/// One in-flight counter animation. Owned exclusively by the frame loop
/// that drives it and discarded once the run completes.
#[derive(Debug, Clone, Copy)]
pub struct CounterRun {
    target: u64,
    duration_ms: f64,
}

/// What one animation tick should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

impl CounterRun {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: DURATION_MS,
        }
    }

    /// Displayed integer after `elapsed_ms`: `floor(target * eased)`,
    /// starting from 0.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let p = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        (self.target as f64 * ease_out_quart(p)).floor() as u64
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        if elapsed_ms >= self.duration_ms {
            CounterFrame {
                text: final_label(self.target),
                done: true,
            }
        } else {
            CounterFrame {
                text: group_digits(self.value_at(elapsed_ms)),
                done: false,
            }
        }
    }
}

/// Read and validate a counter element's `data-target`.
pub fn parse_target(element: &Element) -> Result<u64, CounterError> {
    let raw = element.get_attribute("data-target");
    raw.as_deref()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .ok_or(CounterError::InvalidTarget(raw))
}

/// Drive a [`CounterRun`] on `element` with a self-rescheduling
/// `requestAnimationFrame` loop. The loop stops scheduling once the final
/// label has been written; there is no other cancellation path.
pub fn animate(element: HtmlElement, target: u64) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let run = CounterRun::new(target);
    let started: Rc<RefCell<Option<f64>>> = Rc::new(RefCell::new(None));

    let raf: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let raf_handle = Rc::clone(&raf);
    let raf_window = window.clone();

    *raf.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let start = {
            let mut started = started.borrow_mut();
            *started.get_or_insert(timestamp)
        };
        let frame = run.frame(timestamp - start);
        element.set_text_content(Some(&frame.text));
        if frame.done {
            // Dropping the closure here ends the loop; wasm-bindgen defers
            // the deallocation until this invocation returns.
            raf_handle.borrow_mut().take();
        } else if let Some(cb) = raf_handle.borrow().as_ref() {
            let _ = raf_window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = raf.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_matches_locale_style() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(12), "12");
        assert_eq!(group_digits(1234), "1,234");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn halfway_point_of_the_stats_counter() {
        // target 1250 at t=1000ms: eased = 1 - 0.5^4 = 0.9375,
        // floor(1250 * 0.9375) = 1171.
        let run = CounterRun::new(1250);
        assert_eq!(run.value_at(0.0), 0);
        assert_eq!(run.value_at(1000.0), 1171);
        assert_eq!(run.frame(2000.0).text, "1,250+");
        assert!(run.frame(2000.0).done);
    }

    #[test]
    fn target_of_one_gets_no_plus_suffix() {
        assert_eq!(final_label(1), "1");
        assert_eq!(final_label(0), "0");
        assert_eq!(final_label(2), "2+");
        let run = CounterRun::new(1);
        assert_eq!(run.frame(2500.0).text, "1");
    }

    #[test]
    fn displayed_value_never_decreases() {
        let run = CounterRun::new(98765);
        let mut last = 0;
        for step in 0..=400 {
            let value = run.value_at(f64::from(step) * 5.0);
            assert!(value >= last, "value reversed at step {step}");
            last = value;
        }
        assert_eq!(last, 98765);
    }

    #[test]
    fn ticks_before_completion_are_grouped_without_suffix() {
        let run = CounterRun::new(1250);
        let frame = run.frame(1999.0);
        assert!(!frame.done);
        assert!(!frame.text.ends_with('+'));
    }

    #[test]
    fn ease_out_quart_endpoints() {
        assert!((ease_out_quart(0.0)).abs() < f64::EPSILON);
        assert!((ease_out_quart(1.0) - 1.0).abs() < f64::EPSILON);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < f64::EPSILON);
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element_with_target(value: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element("span").unwrap();
        el.set_attribute("data-target", value).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn parses_a_valid_target() {
        assert_eq!(parse_target(&element_with_target("1250")).unwrap(), 1250);
    }

    #[wasm_bindgen_test]
    fn rejects_non_numeric_targets() {
        assert!(parse_target(&element_with_target("lots")).is_err());
        assert!(parse_target(&element_with_target("-5")).is_err());
        let document = web_sys::window().unwrap().document().unwrap();
        let bare = document.create_element("span").unwrap();
        assert!(parse_target(&bare).is_err());
    }
}
