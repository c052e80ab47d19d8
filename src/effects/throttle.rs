//! Leading-edge rate limiting for high-frequency DOM events.
//!
//! The first call always passes through immediately; everything arriving
//! during the cooldown window is dropped (never queued, never replayed as a
//! trailing call). Scroll and pointer handlers rely on the zero-latency
//! first response.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use web_sys::MouseEvent;

/// Per-handler cooldown state. Constructed once when a handler is wrapped
/// and never shared between handlers.
pub struct ThrottleState {
    in_cooldown: bool,
    reset: Option<Timeout>,
}

impl ThrottleState {
    pub fn new() -> Self {
        Self {
            in_cooldown: false,
            reset: None,
        }
    }

    /// Attempt to pass the gate. Returns `true` exactly when the handler
    /// should run, and enters cooldown as a side effect.
    pub fn try_enter(&mut self) -> bool {
        if self.in_cooldown {
            false
        } else {
            self.in_cooldown = true;
            true
        }
    }

    /// Clear the cooldown so the next call passes through again.
    pub fn clear(&mut self) {
        self.in_cooldown = false;
        self.reset = None;
    }
}

impl Default for ThrottleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap `handler` so it runs at most once per `interval_ms`.
pub fn throttle_arg<A, F>(mut handler: F, interval_ms: u32) -> impl FnMut(A)
where
    F: FnMut(A) + 'static,
{
    let state = Rc::new(RefCell::new(ThrottleState::new()));
    move |arg: A| {
        if state.borrow_mut().try_enter() {
            handler(arg);
            let reset = Timeout::new(interval_ms, {
                let state = Rc::clone(&state);
                move || state.borrow_mut().clear()
            });
            state.borrow_mut().reset = Some(reset);
        }
    }
}

/// Argument-free variant of [`throttle_arg`] for scroll-style handlers.
pub fn throttle<F>(mut handler: F, interval_ms: u32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let mut inner = throttle_arg(move |()| handler(), interval_ms);
    move || inner(())
}

/// A throttled no-argument listener ready for `add_event_listener_with_callback`.
pub fn scroll_listener<F>(interval_ms: u32, handler: F) -> Closure<dyn FnMut()>
where
    F: FnMut() + 'static,
{
    Closure::wrap(Box::new(throttle(handler, interval_ms)) as Box<dyn FnMut()>)
}

/// A throttled mouse-event listener (pointer move, click trails).
pub fn pointer_listener<F>(interval_ms: u32, handler: F) -> Closure<dyn FnMut(MouseEvent)>
where
    F: FnMut(MouseEvent) + 'static,
{
    Closure::wrap(Box::new(throttle_arg(handler, interval_ms)) as Box<dyn FnMut(MouseEvent)>)
}

/// Trailing-edge debounce: only the last call within the delay window runs.
/// Replacing the pending timeout cancels the previous one.
pub struct Debounce {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(self.delay_ms, f));
    }
}

#[cfg(test)]
mod tests {
    use super::ThrottleState;

    #[test]
    fn first_call_passes_and_enters_cooldown() {
        let mut state = ThrottleState::new();
        assert!(state.try_enter());
        assert!(!state.try_enter());
    }

    #[test]
    fn burst_during_cooldown_is_dropped() {
        let mut state = ThrottleState::new();
        assert!(state.try_enter());
        let passed = (0..10).filter(|_| state.try_enter()).count();
        assert_eq!(passed, 0);
    }

    #[test]
    fn clear_lets_next_call_through_immediately() {
        let mut state = ThrottleState::new();
        assert!(state.try_enter());
        assert!(!state.try_enter());
        state.clear();
        assert!(state.try_enter());
        assert!(!state.try_enter());
    }

    #[test]
    fn states_are_independent_per_handler() {
        let mut a = ThrottleState::new();
        let mut b = ThrottleState::new();
        assert!(a.try_enter());
        assert!(b.try_enter());
        a.clear();
        assert!(a.try_enter());
        assert!(!b.try_enter());
    }
}
