use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animation::stagger;
use crate::components::reveal::{Reveal, RevealMotion};
use crate::config::LandingConfig;
use crate::content::Showcase;

/// Which showcase card is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    pub active: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let active = match action {
            CarouselAction::Advance if self.len > 0 => (self.active + 1) % self.len,
            CarouselAction::Advance => 0,
            CarouselAction::Select(index) if index < self.len => index,
            CarouselAction::Select(_) => return self,
        };
        Rc::new(Self { active, ..*self })
    }
}

#[derive(Properties, PartialEq)]
pub struct ModulesShowcaseProps {
    pub showcase: &'static Showcase,
}

#[function_component(ModulesShowcase)]
pub fn modules_showcase(props: &ModulesShowcaseProps) -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let modules = &props.showcase.modules;
    let carousel = use_reducer(|| Carousel {
        active: 0,
        len: modules.len(),
    });

    {
        let carousel = carousel.dispatcher();
        use_effect_with_deps(
            move |interval_ms: &u32| {
                let interval = Interval::new(*interval_ms, move || {
                    carousel.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            config.carousel_interval_ms,
        );
    }

    html! {
        <section class="modules-showcase">
            <div class="blob-field">
                <div class="blob blob-a"></div>
                <div class="blob blob-b"></div>
                <div class="blob blob-c"></div>
            </div>

            <div class="section-header">
                <h2 class="section-title">
                    <span class="animate-gradient">{ &props.showcase.heading }</span>
                </h2>
                <p class="section-subtitle">{ &props.showcase.subheading }</p>
            </div>

            <div class="modules-grid">
                { for modules.iter().enumerate().map(|(index, module)| {
                    let is_active = carousel.active == index;
                    let onmouseenter = {
                        let carousel = carousel.dispatcher();
                        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(index)))
                    };
                    html! {
                        <Reveal
                            key={module.id.clone()}
                            class="module-card-wrap"
                            motion={RevealMotion::Tilt}
                            delay={index as f64 * 0.2}
                            {onmouseenter}
                        >
                            <div
                                class="card-glow"
                                style={format!("background: {};", module.gradient_css("to bottom right"))}
                            ></div>
                            <div class={classes!("module-card", is_active.then_some("active"))}>
                                <div class="module-icon">{ &module.icon }</div>
                                <h3>{ &module.name }</h3>
                                <p
                                    class="module-tagline"
                                    style={format!("background-image: {};", module.gradient_css("to right"))}
                                >
                                    { &module.tagline }
                                </p>
                                <p class="module-description">{ &module.description }</p>
                                <ul class="module-features">
                                    { for module.features.iter().enumerate().map(|(i, feature)| {
                                        let style = if is_active {
                                            format!("animation: slide-in-left 0.5s ease-out {} both;", stagger(i, 0.1))
                                        } else {
                                            String::new()
                                        };
                                        html! {
                                            <li {style}>
                                                <span class="feature-bullet">{"▸"}</span>
                                                <span>{ feature }</span>
                                            </li>
                                        }
                                    }) }
                                </ul>
                                <button class="module-cta">{ format!("Explore {}", module.name) }</button>
                                if is_active {
                                    <div class="active-indicator"></div>
                                }
                            </div>
                        </Reveal>
                    }
                }) }
            </div>
            <style>
                {r#"
    .modules-showcase {
        position: relative;
        min-height: 100vh;
        width: 100%;
        padding: 8rem 3rem;
        overflow: hidden;
        perspective: 1500px;
        box-sizing: border-box;
    }
    .blob-field {
        position: absolute;
        inset: 0;
        opacity: 0.3;
    }
    .blob {
        position: absolute;
        width: 24rem;
        height: 24rem;
        border-radius: 9999px;
        mix-blend-mode: multiply;
        filter: blur(128px);
        animation: blob 7s infinite;
    }
    .blob-a { top: 5rem; left: 5rem; background: #0078B4; }
    .blob-b { top: 10rem; right: 5rem; background: #00A8E8; animation-delay: 2s; }
    .blob-c { bottom: 5rem; left: 50%; background: #3FBFE8; animation-delay: 4s; }
    .modules-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        position: relative;
        z-index: 10;
    }
    .module-card-wrap {
        position: relative;
        transform-style: preserve-3d;
    }
    .card-glow {
        position: absolute;
        inset: 0;
        opacity: 0;
        filter: blur(24px);
        transition: opacity 0.5s ease;
    }
    .module-card-wrap:hover .card-glow {
        opacity: 0.2;
    }
    .module-card {
        position: relative;
        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0.02));
        backdrop-filter: blur(24px);
        padding: 2rem;
        border: 5px solid rgba(255, 255, 255, 0.2);
        transition: border-color 0.5s ease;
        height: 100%;
        min-height: 600px;
        display: flex;
        flex-direction: column;
        box-sizing: border-box;
    }
    .module-card:hover {
        border-color: rgba(0, 120, 180, 0.8);
    }
    .module-icon {
        font-size: 4.5rem;
        margin-bottom: 1.5rem;
        transition: transform 0.5s ease;
    }
    .module-card-wrap:hover .module-icon {
        transform: scale(1.1) rotate(12deg);
    }
    .module-card h3 {
        font-size: 2.25rem;
        font-family: var(--font-primary);
        font-weight: 900;
        margin: 0 0 0.75rem;
        color: #fff;
        text-transform: uppercase;
        letter-spacing: -0.025em;
    }
    .module-tagline {
        font-family: var(--font-mono);
        font-weight: 600;
        text-transform: uppercase;
        margin-bottom: 1.5rem;
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
        letter-spacing: 0.025em;
    }
    .module-description {
        color: rgba(255, 255, 255, 0.7);
        margin-bottom: 2rem;
        line-height: 1.625;
    }
    .module-features {
        flex-grow: 1;
        list-style: none;
        padding: 0;
    }
    .module-features li {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        color: rgba(255, 255, 255, 0.8);
        margin-bottom: 1rem;
    }
    .feature-bullet {
        color: #0078B4;
        transition: transform 0.3s ease;
    }
    .module-card-wrap:hover .feature-bullet {
        transform: scale(1.25);
    }
    .module-cta {
        margin-top: 2rem;
        width: 100%;
        padding: 1rem 0;
        background: linear-gradient(to right, rgba(0, 120, 180, 0.2), transparent);
        border: 3px solid rgba(0, 120, 180, 0.5);
        color: #fff;
        font-family: var(--font-mono);
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        font-size: 0.875rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .module-cta:hover {
        background: linear-gradient(to right, #0078B4, #00A8E8);
        border-color: #0078B4;
        transform: scale(1.05);
    }
    .active-indicator {
        position: absolute;
        bottom: -0.5rem;
        left: 50%;
        transform: translateX(-50%);
        width: 6rem;
        height: 0.25rem;
        border-radius: 9999px;
        background: linear-gradient(to right, transparent, #0078B4, transparent);
        animation: pulse-soft 2s ease-in-out infinite;
    }
    @keyframes blob {
        0%, 100% { transform: translate(0, 0) scale(1); }
        33% { transform: translate(30px, -50px) scale(1.1); }
        66% { transform: translate(-20px, 20px) scale(0.9); }
    }
    @keyframes slide-in-left {
        from { opacity: 0; transform: translateX(-20px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @media (max-width: 768px) {
        .modules-showcase {
            padding: 8rem 1.5rem;
        }
        .modules-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Carousel, action: CarouselAction) -> Carousel {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn advance_wraps_around() {
        let mut state = Carousel { active: 0, len: 3 };
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = reduce(state, CarouselAction::Advance);
            seen.push(state.active);
        }
        assert_eq!(seen, [1, 2, 0, 1]);
    }

    #[test]
    fn select_jumps_to_hovered_card() {
        let state = reduce(Carousel { active: 0, len: 3 }, CarouselAction::Select(2));
        assert_eq!(state.active, 2);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let state = reduce(Carousel { active: 1, len: 3 }, CarouselAction::Select(7));
        assert_eq!(state.active, 1);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        let state = reduce(Carousel { active: 0, len: 0 }, CarouselAction::Advance);
        assert_eq!(state.active, 0);
    }
}
