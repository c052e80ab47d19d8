use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

mod effects {
    pub mod counter;
    pub mod reveal;
    pub mod throttle;
    pub mod visibility;
}
mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod cursor_trail;
    pub mod notification;
    pub mod particles;
    pub mod preloader;
}
mod pages {
    pub mod home;
}

use components::back_to_top::BackToTop;
use components::cursor_trail::CursorTrail;
use components::preloader::Preloader;
use pages::home::Home;

const NAV_LINKS: &[(&str, &str)] = &[
    ("about", "About"),
    ("goals", "Goals"),
    ("stats", "So far"),
    ("features", "Why biochar"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

/// Smooth-scroll the viewport so `selector`'s target sits just below the
/// fixed navbar. Missing targets are a no-op.
pub fn smooth_scroll_to(selector: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    if let Ok(Some(target)) = document.query_selector(selector) {
        if let Ok(target) = target.dyn_into::<HtmlElement>() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(f64::from(target.offset_top()) - 80.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Pick the section containing `scroll_y`, given `(id, offset_top, height)`
/// tuples in document order. Mirrors the navbar's 100px lead-in.
fn section_at(scroll_y: f64, sections: &[(String, f64, f64)]) -> Option<&str> {
    let mut current = None;
    for (id, offset_top, height) in sections {
        let top = offset_top - 100.0;
        if scroll_y >= top && scroll_y < top + height {
            current = Some(id.as_str());
        }
    }
    current
}

fn collect_sections() -> Vec<(String, f64, f64)> {
    let mut out = Vec::new();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return out;
    };
    if let Ok(list) = document.query_selector_all("section[id]") {
        for i in 0..list.length() {
            if let Some(section) = list
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                out.push((
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.client_height()),
                ));
            }
        }
    }
    out
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(String::new);

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_cb = effects::throttle::scroll_listener(100, move || {
                    let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
                        return;
                    };
                    is_scrolled.set(scroll_y > 100.0);
                    let current = section_at(scroll_y, &collect_sections())
                        .unwrap_or("")
                        .to_string();
                    active_section.set(current);
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

    // Escape and outside clicks both close the mobile menu.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());

                let keydown_cb = {
                    let menu_open = menu_open.clone();
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                };
                let click_cb = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let outside = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .map(|el| el.closest(".top-nav").ok().flatten().is_none())
                        .unwrap_or(false);
                    if outside {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "click",
                        click_cb.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown_cb.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click_cb.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            smooth_scroll_to(&format!("#{id}"));
        });
        let active = (*active_section == id).then_some("active");
        html! {
            <a class={classes!("nav-link", active)} href={format!("#{id}")} {onclick}>
                {label}
            </a>
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" href="#hero" onclick={
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        smooth_scroll_to("#hero");
                    })
                }>
                    {"B10"}
                </a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().copied().map(|(id, label)| nav_link(id, label)) }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1500;
                        padding: 16px 24px;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(10, 10, 10, 0.92);
                        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
                    }
                    .nav-content {
                        max-width: 1080px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 800;
                        font-size: 1.3rem;
                        letter-spacing: 0.15em;
                        color: #00ff88;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 24px;
                    }
                    .nav-link {
                        color: rgba(245, 245, 245, 0.8);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: #00ff88;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #f5f5f5;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: rgba(10, 10, 10, 0.97);
                            padding: 24px;
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Preloader />
            <Nav />
            <Home />
            <BackToTop />
            <CursorTrail />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::section_at;

    fn sections() -> Vec<(String, f64, f64)> {
        vec![
            ("hero".to_string(), 0.0, 800.0),
            ("about".to_string(), 800.0, 600.0),
            ("contact".to_string(), 1400.0, 700.0),
        ]
    }

    #[test]
    fn resolves_the_section_under_the_navbar_lead_in() {
        let sections = sections();
        assert_eq!(section_at(0.0, &sections), Some("hero"));
        // 100px before a section's top already counts as inside it.
        assert_eq!(section_at(700.0, &sections), Some("about"));
        assert_eq!(section_at(1299.0, &sections), Some("about"));
        assert_eq!(section_at(1300.0, &sections), Some("contact"));
    }

    #[test]
    fn later_sections_win_when_lead_ins_overlap() {
        let sections = sections();
        // Overlap window: both "hero" and "about" match at 750.
        assert_eq!(section_at(750.0, &sections), Some("about"));
    }

    #[test]
    fn nothing_matches_past_the_last_section() {
        let sections = sections();
        assert_eq!(section_at(5000.0, &sections), None);
        assert_eq!(section_at(-50.0, &sections), Some("hero"));
    }

    #[test]
    fn empty_documents_have_no_active_section() {
        assert_eq!(section_at(100.0, &[]), None);
    }
}
