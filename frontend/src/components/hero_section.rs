use yew::prelude::*;

use crate::config::{self, LandingConfig};
use crate::content::HeroCopy;
use crate::hooks::scroll_animation::use_scroll_animation;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub copy: &'static HeroCopy,
}

/// Tall scroll track with a sticky stage. The mask zooms, the titles part and
/// the caption sharpens as the track scrolls by.
#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let refs = use_scroll_animation(config.hero);
    let copy = props.copy;

    html! {
        <section
            ref={refs.track.clone()}
            class="hero-track"
            style={format!("height: {}vh;", config.hero.track_height_vh)}
        >
            <div class="hero-sticky">
                <h1 class="hero-title">
                    <span ref={refs.title_top.clone()} class="hero-title-line">
                        { &copy.title_top }
                    </span>
                </h1>

                <div class="hero-image-container">
                    <div ref={refs.clip_mask.clone()} class="hero-clip-mask">
                        <video
                            src={config::asset_url(&copy.video)}
                            autoplay=true
                            loop=true
                            muted=true
                            playsinline=true
                            preload="auto"
                        />
                    </div>
                </div>

                <h1 class="hero-title hero-title-bottom">
                    <span ref={refs.title_bottom.clone()} class="hero-title-line italic">
                        { &copy.title_bottom }
                    </span>
                </h1>

                <div class="scroll-hint">{ &copy.scroll_hint }</div>

                <div class="intro-text">
                    <p ref={refs.caption.clone()}>{ &copy.caption }</p>
                </div>
            </div>
            <style>
                {r#"
    .hero-track {
        position: relative;
        width: 100%;
        background: transparent;
    }
    .hero-sticky {
        position: sticky;
        top: 0;
        height: 100vh;
        width: 100%;
        overflow: hidden;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        color: #f8f8f8;
    }
    .hero-title {
        position: relative;
        z-index: 10;
        text-align: center;
        mix-blend-mode: difference;
        margin: 0;
    }
    .hero-title-bottom {
        align-self: flex-end;
        padding-right: 10vw;
    }
    .hero-title-line {
        display: block;
        font-size: 11.5vw;
        line-height: 0.9;
        letter-spacing: -0.04em;
        font-family: var(--font-primary);
        will-change: transform, opacity;
    }
    .hero-title-line.italic {
        font-style: italic;
    }
    .hero-image-container {
        position: absolute;
        inset: 0;
        z-index: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        pointer-events: none;
    }
    .hero-clip-mask {
        position: relative;
        width: 12vw;
        height: 13.8vw;
        overflow: hidden;
        clip-path: polygon(50% 0%, 100% 25%, 100% 75%, 50% 100%, 0% 75%, 0% 25%);
        will-change: transform;
    }
    .hero-clip-mask video {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 100vw;
        height: 100vh;
        object-fit: cover;
        background: #000;
        transform: translate(-50%, -50%);
        will-change: transform;
    }
    .scroll-hint {
        position: absolute;
        bottom: 2.5rem;
        left: 2.5rem;
        font-size: 0.6rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        opacity: 0.6;
    }
    .intro-text {
        position: absolute;
        bottom: 2.5rem;
        left: 2.5rem;
        max-width: 28rem;
    }
    .intro-text p {
        font-size: 1.875rem;
        font-family: var(--font-primary);
        line-height: 1.25;
        color: #fff;
        opacity: 0.4;
        filter: blur(4px);
        mix-blend-mode: difference;
        will-change: filter, opacity, transform;
    }
    @media (max-width: 768px) {
        .intro-text {
            display: none;
        }
    }
                "#}
            </style>
        </section>
    }
}
