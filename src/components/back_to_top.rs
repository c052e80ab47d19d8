use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::effects::throttle;

/// Floating button that appears once the page is scrolled past 300px and
/// smooth-scrolls back to the top.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_cb = throttle::scroll_listener(100, move || {
                    let past_fold = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .map(|y| y > 300.0)
                        .unwrap_or(false);
                    visible.set(past_fold);
                });
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_cb.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|_| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            id="back-to-top"
            class={classes!("back-to-top", (*visible).then_some("visible"))}
            {onclick}
        >
            {"\u{2191}"}
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        width: 48px;
                        height: 48px;
                        border: none;
                        border-radius: 50%;
                        background: #00ff88;
                        color: #000;
                        font-size: 1.4rem;
                        cursor: pointer;
                        opacity: 0;
                        pointer-events: none;
                        transform: translateY(12px);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                        z-index: 1000;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        pointer-events: auto;
                        transform: translateY(0);
                    }
                "#}
            </style>
        </button>
    }
}
