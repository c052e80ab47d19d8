use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::effects::throttle;

const DESKTOP_MIN_WIDTH: f64 = 768.0;

fn is_desktop_width() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w > DESKTOP_MIN_WIDTH)
        .unwrap_or(false)
}

/// Soft dot trailing the pointer, desktop widths only. The mousemove
/// handler is throttled to one update per 16ms; a debounced resize
/// listener re-evaluates whether the trail should exist at all.
#[function_component(CursorTrail)]
pub fn cursor_trail() -> Html {
    let dot_ref = use_node_ref();
    let enabled = use_state(is_desktop_width);

    {
        let enabled = enabled.clone();
        use_effect_with_deps(
            move |_| {
                let debounce = Rc::new(RefCell::new(throttle::Debounce::new(250)));
                let resize_cb = Closure::wrap(Box::new(move || {
                    let enabled = enabled.clone();
                    debounce
                        .borrow_mut()
                        .call(move || enabled.set(is_desktop_width()));
                }) as Box<dyn FnMut()>);

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_cb.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let dot_ref = dot_ref.clone();
        use_effect_with_deps(
            move |enabled: &bool| {
                let listener = if *enabled {
                    let mousemove = throttle::pointer_listener(16, move |e: MouseEvent| {
                        if let Some(dot) = dot_ref.cast::<HtmlElement>() {
                            let _ = dot.set_attribute(
                                "style",
                                &format!(
                                    "left: {}px; top: {}px;",
                                    e.client_x() - 10,
                                    e.client_y() - 10
                                ),
                            );
                        }
                    });
                    let document = web_sys::window().and_then(|w| w.document());
                    if let Some(document) = &document {
                        let _ = document.add_event_listener_with_callback(
                            "mousemove",
                            mousemove.as_ref().unchecked_ref(),
                        );
                    }
                    Some((document, mousemove))
                } else {
                    None
                };
                move || {
                    if let Some((Some(document), mousemove)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
                            mousemove.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            *enabled,
        );
    }

    if !*enabled {
        return html! {};
    }

    html! {
        <>
            <div ref={dot_ref} class="cursor-trail"></div>
            <style>
                {r#"
                    .cursor-trail {
                        position: fixed;
                        width: 20px;
                        height: 20px;
                        background: rgba(0, 255, 136, 0.3);
                        border-radius: 50%;
                        pointer-events: none;
                        z-index: 9999;
                        transition: transform 0.1s ease;
                    }
                "#}
            </style>
        </>
    }
}
