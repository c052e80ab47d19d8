//! Thin wrapper around `IntersectionObserver`.
//!
//! Reports viewport entry/exit for observed elements as batches of
//! [`VisibilityEvent`]s. Batches arrive asynchronously in document order;
//! ordering across batches is up to the browser. Elements removed from the
//! document simply stop emitting.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// How much of an element must be visible, and how far the effective
/// viewport edge is shifted, before a report fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    /// Minimum visible fraction of the element's area, in [0, 1].
    pub threshold: f64,
    /// CSS-style margin applied to the viewport bounds, e.g.
    /// `"0px 0px -50px 0px"` to trigger 50px before the bottom edge.
    pub root_margin: &'static str,
}

/// One observed state change.
pub struct VisibilityEvent {
    pub target: Element,
    pub is_intersecting: bool,
}

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("failed to construct IntersectionObserver: {0:?}")]
    Construct(JsValue),
}

/// Owns an `IntersectionObserver` together with the boxed callback backing
/// it. Dropping the detector without calling [`disconnect`] leaves the
/// browser-side observer running for the page's lifetime.
///
/// [`disconnect`]: IntersectionDetector::disconnect
pub struct IntersectionDetector {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionDetector {
    pub fn new<F>(config: VisibilityConfig, mut on_batch: F) -> Result<Self, DetectorError>
    where
        F: FnMut(Vec<VisibilityEvent>, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let batch: Vec<VisibilityEvent> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| VisibilityEvent {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                on_batch(batch, &observer);
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(config.root_margin);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(DetectorError::Construct)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn detector_constructs_with_margin_and_threshold() {
        let detector = IntersectionDetector::new(
            VisibilityConfig {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px",
            },
            |_batch, _observer| {},
        );
        assert!(detector.is_ok());
    }
}
