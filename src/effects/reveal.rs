//! Scroll-triggered reveals and counter kickoff.
//!
//! Marked elements start hidden (or at "0" for counters). The first time
//! one becomes visible it is revealed or its counter starts, and it is
//! unobserved. The Pending -> Triggered transition is terminal: stray
//! events for an already-triggered element are ignored.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::counter;
use super::visibility::{DetectorError, IntersectionDetector, VisibilityConfig};

/// Elements that fade or slide in on first visibility.
pub const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right, \
     .section-title, .section-subtitle, .text-block, .goal-item, .stat-item, \
     .feature-item, .contact-item, .gallery-item";

/// Elements that count up to their `data-target` on first visibility.
pub const COUNTER_SELECTOR: &str = ".stat-number";

const REVEAL_CONFIG: VisibilityConfig = VisibilityConfig {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

const COUNTER_CONFIG: VisibilityConfig = VisibilityConfig {
    threshold: 0.5,
    root_margin: "0px",
};

/// What a tracked element does when it first becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Reveal,
    Counter { target: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerState {
    Pending,
    Triggered,
}

/// The effect to run. Every returned action implies the element should be
/// unobserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    StartCounter { target: u64 },
}

/// Per-element one-shot state machine, independent of any real visibility
/// backend so the exactly-once contract is testable with synthesized events.
pub struct Orchestrator<K> {
    tracked: HashMap<K, (Intent, TriggerState)>,
}

impl<K: Eq + Hash> Orchestrator<K> {
    pub fn new() -> Self {
        Self {
            tracked: HashMap::new(),
        }
    }

    pub fn track(&mut self, key: K, intent: Intent) {
        self.tracked.insert(key, (intent, TriggerState::Pending));
    }

    /// Feed one visibility report. Returns `Some(action)` exactly once per
    /// tracked key, on its first intersecting event.
    pub fn on_visibility(&mut self, key: &K, is_intersecting: bool) -> Option<Action> {
        if !is_intersecting {
            return None;
        }
        let entry = self.tracked.get_mut(key)?;
        if entry.1 == TriggerState::Triggered {
            return None;
        }
        entry.1 = TriggerState::Triggered;
        Some(match entry.0 {
            Intent::Reveal => Action::Reveal,
            Intent::Counter { target } => Action::StartCounter { target },
        })
    }
}

impl<K: Eq + Hash> Default for Orchestrator<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Declarative presentation for a revealable element, applied in a single
/// render step instead of piecemeal style pokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub transition: Option<&'static str>,
}

const REVEAL_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";

impl Presentation {
    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            translate_y_px: 30.0,
            transition: Some(REVEAL_TRANSITION),
        }
    }

    pub const fn visible() -> Self {
        Self {
            opacity: 1.0,
            translate_y_px: 0.0,
            transition: Some(REVEAL_TRANSITION),
        }
    }

    pub fn style(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity, self.translate_y_px
        );
        if let Some(transition) = self.transition {
            css.push_str(" transition: ");
            css.push_str(transition);
            css.push(';');
        }
        css
    }

    pub fn apply_to(&self, element: &HtmlElement) {
        let _ = element.set_attribute("style", &self.style());
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                out.push(element);
            }
        }
    }
    out
}

fn run_action(action: Action, target: &Element) {
    match action {
        Action::Reveal => {
            if let Ok(html) = target.clone().dyn_into::<HtmlElement>() {
                Presentation::visible().apply_to(&html);
            }
        }
        Action::StartCounter { target: value } => {
            if let Ok(html) = target.clone().dyn_into::<HtmlElement>() {
                counter::animate(html, value);
            }
        }
    }
}

/// Installed scroll effects for one page. Keeps both detectors (and their
/// callbacks) alive; [`disconnect`] tears them down on page unmount.
///
/// [`disconnect`]: ScrollEffects::disconnect
pub struct ScrollEffects {
    reveals: IntersectionDetector,
    counters: IntersectionDetector,
}

impl ScrollEffects {
    /// Scan `document` for marked elements, put them in their initial
    /// presentation and start observing. Selectors that match nothing are
    /// no-ops; counters with malformed targets are skipped with a warning.
    pub fn install(document: &Document) -> Result<Self, DetectorError> {
        let orchestrator = Rc::new(RefCell::new(Orchestrator::new()));

        let reveal_elements = Rc::new(query_all(document, REVEAL_SELECTOR));
        for (key, element) in reveal_elements.iter().enumerate() {
            if let Ok(html) = element.clone().dyn_into::<HtmlElement>() {
                Presentation::hidden().apply_to(&html);
            }
            orchestrator.borrow_mut().track(key, Intent::Reveal);
        }

        let counter_elements: Rc<Vec<Element>> = Rc::new(
            query_all(document, COUNTER_SELECTOR)
                .into_iter()
                .filter_map(|element| match counter::parse_target(&element) {
                    Ok(target) => Some((element, target)),
                    Err(err) => {
                        log::warn!("skipping counter element: {err}");
                        None
                    }
                })
                .map(|(element, target)| {
                    element.set_text_content(Some("0"));
                    (element, target)
                })
                .enumerate()
                .map(|(i, (element, target))| {
                    orchestrator
                        .borrow_mut()
                        .track(reveal_elements.len() + i, Intent::Counter { target });
                    element
                })
                .collect(),
        );

        let reveals = IntersectionDetector::new(REVEAL_CONFIG, {
            let orchestrator = Rc::clone(&orchestrator);
            let elements = Rc::clone(&reveal_elements);
            move |batch, observer| {
                for event in batch {
                    let Some(key) = elements.iter().position(|el| *el == event.target) else {
                        continue;
                    };
                    if let Some(action) = orchestrator
                        .borrow_mut()
                        .on_visibility(&key, event.is_intersecting)
                    {
                        observer.unobserve(&event.target);
                        run_action(action, &event.target);
                    }
                }
            }
        })?;
        for element in reveal_elements.iter() {
            reveals.observe(element);
        }

        let counters = IntersectionDetector::new(COUNTER_CONFIG, {
            let orchestrator = Rc::clone(&orchestrator);
            let elements = Rc::clone(&counter_elements);
            let key_base = reveal_elements.len();
            move |batch, observer| {
                for event in batch {
                    let Some(index) = elements.iter().position(|el| *el == event.target) else {
                        continue;
                    };
                    if let Some(action) = orchestrator
                        .borrow_mut()
                        .on_visibility(&(key_base + index), event.is_intersecting)
                    {
                        observer.unobserve(&event.target);
                        run_action(action, &event.target);
                    }
                }
            }
        })?;
        for element in counter_elements.iter() {
            counters.observe(element);
        }

        log::info!(
            "scroll effects installed: {} reveals, {} counters",
            reveal_elements.len(),
            counter_elements.len()
        );

        Ok(Self { reveals, counters })
    }

    pub fn disconnect(&self) {
        self.reveals.disconnect();
        self.counters.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_triggers_exactly_once() {
        let mut orch: Orchestrator<u32> = Orchestrator::new();
        orch.track(7, Intent::Reveal);

        assert_eq!(orch.on_visibility(&7, true), Some(Action::Reveal));
        // Late or duplicate reports are ignored.
        assert_eq!(orch.on_visibility(&7, true), None);
        assert_eq!(orch.on_visibility(&7, false), None);
        assert_eq!(orch.on_visibility(&7, true), None);
    }

    #[test]
    fn non_intersecting_reports_do_not_consume_the_trigger() {
        let mut orch: Orchestrator<u32> = Orchestrator::new();
        orch.track(1, Intent::Reveal);

        assert_eq!(orch.on_visibility(&1, false), None);
        assert_eq!(orch.on_visibility(&1, false), None);
        assert_eq!(orch.on_visibility(&1, true), Some(Action::Reveal));
    }

    #[test]
    fn counter_intent_carries_its_target() {
        let mut orch: Orchestrator<u32> = Orchestrator::new();
        orch.track(2, Intent::Counter { target: 1250 });

        assert_eq!(
            orch.on_visibility(&2, true),
            Some(Action::StartCounter { target: 1250 })
        );
        assert_eq!(orch.on_visibility(&2, true), None);
    }

    #[test]
    fn untracked_keys_are_ignored() {
        let mut orch: Orchestrator<u32> = Orchestrator::new();
        assert_eq!(orch.on_visibility(&99, true), None);
    }

    #[test]
    fn elements_trigger_independently() {
        let mut orch: Orchestrator<u32> = Orchestrator::new();
        orch.track(0, Intent::Reveal);
        orch.track(1, Intent::Counter { target: 12 });

        assert_eq!(orch.on_visibility(&1, true), Some(Action::StartCounter { target: 12 }));
        assert_eq!(orch.on_visibility(&0, true), Some(Action::Reveal));
        assert_eq!(orch.on_visibility(&0, true), None);
        assert_eq!(orch.on_visibility(&1, true), None);
    }

    #[test]
    fn hidden_and_visible_presentations() {
        let hidden = Presentation::hidden().style();
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(30px)"));
        assert!(hidden.contains("transition: opacity 0.8s ease, transform 0.8s ease;"));

        let visible = Presentation::visible().style();
        assert!(visible.contains("opacity: 1;"));
        assert!(visible.contains("translateY(0px)"));
    }
}
