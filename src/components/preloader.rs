use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Full-screen cover shown while the page settles: holds for 1.5s to match
/// the logo animation, fades over 0.5s, then stops rendering entirely.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    // 0 = covering, 1 = fading out, 2 = gone
    let stage = use_state(|| 0u32);

    {
        let stage_clone = stage.clone();
        let stage_setter = stage.setter();
        use_effect(move || {
            match *stage_clone {
                0 => {
                    Timeout::new(1500, move || stage_setter.set(1)).forget();
                }
                1 => {
                    Timeout::new(500, move || stage_setter.set(2)).forget();
                }
                _ => {}
            }
            || ()
        });
    }

    if *stage == 2 {
        return html! {};
    }

    html! {
        <div id="preloader" class={classes!("preloader", (*stage == 1).then_some("hidden"))}>
            <div class="preloader-logo">{"B10"}</div>
            <div class="preloader-bar">
                <div class="preloader-bar-fill"></div>
            </div>
            <style>
                {r#"
                    .preloader {
                        position: fixed;
                        inset: 0;
                        background: #0a0a0a;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        gap: 24px;
                        z-index: 20000;
                        opacity: 1;
                        transition: opacity 0.5s ease;
                    }
                    .preloader.hidden {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .preloader-logo {
                        font-size: 3rem;
                        font-weight: 800;
                        letter-spacing: 0.2em;
                        color: #00ff88;
                    }
                    .preloader-bar {
                        width: 180px;
                        height: 3px;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 2px;
                        overflow: hidden;
                    }
                    .preloader-bar-fill {
                        width: 100%;
                        height: 100%;
                        background: #00ff88;
                        transform-origin: left;
                        animation: preload 1.5s ease forwards;
                    }
                    @keyframes preload {
                        from { transform: scaleX(0); }
                        to { transform: scaleX(1); }
                    }
                "#}
            </style>
        </div>
    }
}
