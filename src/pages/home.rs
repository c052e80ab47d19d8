use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::particles::Particles;
use crate::effects::reveal::ScrollEffects;
use crate::effects::throttle;
use crate::smooth_scroll_to;

/// How fast the hero decoration drifts against the scroll direction.
const PARALLAX_RATE: f64 = -0.3;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Reveal/counter effects plus hero parallax, torn down on unmount.
    use_effect_with_deps(
        move |_| {
            let effects = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|document| match ScrollEffects::install(&document) {
                    Ok(effects) => Some(effects),
                    Err(err) => {
                        log::error!("scroll effects unavailable: {err}");
                        None
                    }
                });

            let window = web_sys::window();
            let parallax_cb = throttle::scroll_listener(16, move || {
                let Some(window) = web_sys::window() else { return };
                let Ok(scroll_y) = window.scroll_y() else { return };
                let Some(document) = window.document() else { return };
                if let Ok(Some(hero)) = document.query_selector(".hero-particles") {
                    if let Ok(hero) = hero.dyn_into::<HtmlElement>() {
                        let _ = hero.set_attribute(
                            "style",
                            &format!("transform: translateY({}px);", scroll_y * PARALLAX_RATE),
                        );
                    }
                }
            });
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    parallax_cb.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(effects) = effects {
                    effects.disconnect();
                }
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        parallax_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    let scroll_to_about = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        smooth_scroll_to("#about");
    });

    html! {
        <div class="home-page">
            <section id="hero" class="hero">
                <Particles />
                <div class="hero-content">
                    <h1 class="hero-title">{"Carbon, locked in char."}</h1>
                    <p class="hero-subtitle">
                        {"B10 turns farm residues into biochar that keeps carbon \
                          in the soil for centuries and the soil itself alive."}
                    </p>
                    <button class="cta-button" onclick={scroll_to_about}>
                        {"See how it works"}
                    </button>
                </div>
                <div class="scroll-cue">{"\u{2193}"}</div>
            </section>

            <section id="about" class="section">
                <h2 class="section-title">{"What we do"}</h2>
                <p class="section-subtitle">
                    {"Pyrolysis on the farm, carbon in the ground"}
                </p>
                <div class="text-block fade-in">
                    <p>
                        {"Crop residues that would otherwise rot or burn are \
                          heated without oxygen in our container-sized kilns. \
                          What comes out is biochar: a stable, porous carbon \
                          sponge that soils hold onto for hundreds of years."}
                    </p>
                </div>
                <div class="text-block fade-in">
                    <p>
                        {"Every batch is weighed, sampled and registered, so a \
                          tonne of B10 char is a tonne of carbon you can point \
                          at \u{2014} in a field, not on a slide."}
                    </p>
                </div>
            </section>

            <section id="goals" class="section">
                <h2 class="section-title">{"Where we're headed"}</h2>
                <div class="goals-grid">
                    <div class="goal-item slide-in-left">
                        <h3>{"2026"}</h3>
                        <p>{"Ten kilns running on partner farms across the region."}</p>
                    </div>
                    <div class="goal-item slide-in-right">
                        <h3>{"2027"}</h3>
                        <p>{"First certified carbon-removal credits issued on our own registry data."}</p>
                    </div>
                    <div class="goal-item slide-in-left">
                        <h3>{"2028"}</h3>
                        <p>{"Char-amended soil trials published with two universities."}</p>
                    </div>
                    <div class="goal-item slide-in-right">
                        <h3>{"2030"}</h3>
                        <p>{"Ten thousand tonnes of CO\u{2082} locked away, every year."}</p>
                    </div>
                </div>
            </section>

            <section id="stats" class="section stats-section">
                <h2 class="section-title">{"So far"}</h2>
                <div class="stats-grid">
                    <div class="stat-item">
                        <span class="stat-number" data-target="1250">{"0"}</span>
                        <span class="stat-label">{"tonnes of CO\u{2082} locked away"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number" data-target="340">{"0"}</span>
                        <span class="stat-label">{"hectares improved with char"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number" data-target="12">{"0"}</span>
                        <span class="stat-label">{"partner farms"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number" data-target="98">{"0"}</span>
                        <span class="stat-label">{"% of feedstock from waste streams"}</span>
                    </div>
                </div>
            </section>

            <section id="features" class="section">
                <h2 class="section-title">{"Why biochar"}</h2>
                <div class="features-grid">
                    <div class="feature-item">
                        <h3>{"Permanent"}</h3>
                        <p>{"Char carbon stays put for centuries; no reversal risk when a forest burns."}</p>
                    </div>
                    <div class="feature-item">
                        <h3>{"Measurable"}</h3>
                        <p>{"Mass in, mass out. Each kiln batch is weighed and sampled."}</p>
                    </div>
                    <div class="feature-item">
                        <h3>{"Good for soil"}</h3>
                        <p>{"Porous char holds water and nutrients where roots can reach them."}</p>
                    </div>
                    <div class="feature-item">
                        <h3>{"Local"}</h3>
                        <p>{"Residues are processed on the farm that grew them. No haulage, no middlemen."}</p>
                    </div>
                </div>
            </section>

            <section id="gallery" class="section">
                <h2 class="section-title">{"In the field"}</h2>
                <div class="gallery-grid">
                    <div class="gallery-item"><img src="/assets/kiln.jpg" alt="Container kiln mid-burn" /></div>
                    <div class="gallery-item"><img src="/assets/char-close.jpg" alt="Fresh biochar close up" /></div>
                    <div class="gallery-item"><img src="/assets/spreading.jpg" alt="Char being spread on a field" /></div>
                    <div class="gallery-item"><img src="/assets/soil-pit.jpg" alt="Soil profile after amendment" /></div>
                </div>
            </section>

            <section id="contact" class="section">
                <h2 class="section-title">{"Talk to us"}</h2>
                <div class="contact-grid">
                    <div class="contact-items">
                        <div class="contact-item">
                            <h3>{"Farmers"}</h3>
                            <p>{"Have residues and a corner of the yard for a kiln? We handle the rest."}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Buyers"}</h3>
                            <p>{"Carbon removal with paperwork you can audit down to the batch."}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Press"}</h3>
                            <p>{"We like talking about char. Drop us a line."}</p>
                        </div>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <span>{"\u{00a9} 2026 B10. Char done right."}</span>
            </footer>

            <style>
                {r#"
                    .home-page {
                        background: #0a0a0a;
                        color: #f5f5f5;
                        font-family: 'Inter', sans-serif;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        overflow: hidden;
                        padding: 0 24px;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 720px;
                    }
                    .hero-title {
                        font-size: clamp(2.4rem, 6vw, 4.5rem);
                        font-weight: 800;
                        margin-bottom: 16px;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: rgba(245, 245, 245, 0.8);
                        margin-bottom: 32px;
                    }
                    .cta-button {
                        background: #00ff88;
                        color: #000;
                        border: none;
                        border-radius: 999px;
                        padding: 14px 32px;
                        font-size: 1rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .cta-button:hover {
                        transform: translateY(-2px);
                    }
                    .scroll-cue {
                        position: absolute;
                        bottom: 24px;
                        font-size: 1.5rem;
                        opacity: 0.6;
                        animation: float 3s ease-in-out infinite;
                    }
                    .section {
                        max-width: 1080px;
                        margin: 0 auto;
                        padding: 96px 24px;
                    }
                    .section-title {
                        font-size: 2.2rem;
                        margin-bottom: 8px;
                        text-align: center;
                    }
                    .section-subtitle {
                        text-align: center;
                        color: rgba(245, 245, 245, 0.6);
                        margin-bottom: 48px;
                    }
                    .text-block {
                        max-width: 680px;
                        margin: 0 auto 24px;
                        line-height: 1.7;
                        color: rgba(245, 245, 245, 0.85);
                    }
                    .goals-grid, .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 24px;
                        margin-top: 32px;
                    }
                    .goal-item, .feature-item, .contact-item {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(0, 255, 136, 0.15);
                        border-radius: 12px;
                        padding: 24px;
                    }
                    .goal-item h3, .feature-item h3 {
                        color: #00ff88;
                        margin-bottom: 8px;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 24px;
                        text-align: center;
                        margin-top: 32px;
                    }
                    .stat-number {
                        display: block;
                        font-size: 2.8rem;
                        font-weight: 800;
                        color: #00ff88;
                    }
                    .stat-label {
                        color: rgba(245, 245, 245, 0.7);
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 16px;
                        margin-top: 32px;
                    }
                    .gallery-item img {
                        width: 100%;
                        border-radius: 12px;
                        display: block;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1.2fr;
                        gap: 48px;
                        align-items: start;
                        margin-top: 32px;
                    }
                    .contact-items {
                        display: grid;
                        gap: 16px;
                    }
                    .contact-form {
                        display: grid;
                        gap: 16px;
                    }
                    .contact-form input, .contact-form textarea {
                        background: rgba(255, 255, 255, 0.06);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        border-radius: 8px;
                        padding: 12px 16px;
                        color: #f5f5f5;
                        font-size: 1rem;
                    }
                    .footer {
                        text-align: center;
                        padding: 48px 24px;
                        color: rgba(245, 245, 245, 0.5);
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    @media (max-width: 768px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
