use web_sys::js_sys;
use yew::prelude::*;

/// One floating decoration dot. Randomized once at mount so re-renders
/// don't reshuffle the field.
#[derive(Clone, PartialEq)]
pub struct Particle {
    size_px: f64,
    left_pct: f64,
    top_pct: f64,
    duration_s: f64,
    delay_s: f64,
}

impl Particle {
    fn random() -> Self {
        Self {
            size_px: js_sys::Math::random() * 4.0 + 2.0,
            left_pct: js_sys::Math::random() * 100.0,
            top_pct: js_sys::Math::random() * 100.0,
            duration_s: js_sys::Math::random() * 4.0 + 3.0,
            delay_s: js_sys::Math::random() * 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "position: absolute; width: {size:.1}px; height: {size:.1}px; \
             background: rgba(0, 255, 136, 0.6); border-radius: 50%; \
             left: {left:.1}%; top: {top:.1}%; \
             animation: float {duration:.1}s ease-in-out infinite; \
             animation-delay: {delay:.1}s; pointer-events: none;",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// The hero's floating particle field. Purely decorative; also the target
/// of the parallax translation wired up by the home page.
#[function_component(Particles)]
pub fn particles() -> Html {
    let particles = use_state(|| (0..15).map(|_| Particle::random()).collect::<Vec<_>>());

    html! {
        <div class="hero-particles">
            { for particles.iter().map(|p| html! {
                <div class="floating-particle" style={p.style()}></div>
            }) }
            <style>
                {r#"
                    .hero-particles {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        z-index: 0;
                    }
                    @keyframes float {
                        0%, 100% {
                            transform: translateY(0px) rotate(0deg);
                            opacity: 0.3;
                        }
                        50% {
                            transform: translateY(-30px) rotate(180deg);
                            opacity: 0.8;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::Particle;

    #[test]
    fn particle_style_is_self_contained() {
        let p = Particle {
            size_px: 4.0,
            left_pct: 25.0,
            top_pct: 75.0,
            duration_s: 5.0,
            delay_s: 1.5,
        };
        let style = p.style();
        assert!(style.contains("width: 4.0px"));
        assert!(style.contains("height: 4.0px"));
        assert!(style.contains("left: 25.0%"));
        assert!(style.contains("top: 75.0%"));
        assert!(style.contains("animation: float 5.0s ease-in-out infinite"));
        assert!(style.contains("animation-delay: 1.5s"));
        assert!(style.contains("pointer-events: none"));
    }
}
