use yew::prelude::*;

use crate::components::dashboard_preview::DashboardPreview;
use crate::components::floating_modules::FloatingModules;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero_section::HeroSection;
use crate::components::modules_showcase::ModulesShowcase;
use crate::components::optimized_video::OptimizedVideo;
use crate::components::reporting_hub::ReportingHub;
use crate::components::risk_detection::RiskDetection;
use crate::config::{self, LandingConfig};
use crate::content;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub config: LandingConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = match content::catalog() {
        Ok(content) => content,
        Err(e) => {
            log::error!("landing content unavailable: {}", e);
            return html! {
                <div class="landing-fallback">
                    <h1>{"Athermind"}</h1>
                    <p>{"Governance, risk and compliance intelligence for BFSI."}</p>
                    <style>{LANDING_STYLES}</style>
                </div>
            };
        }
    };

    html! {
        <ContextProvider<LandingConfig> context={props.config}>
            <div class="landing">
                <Header brand={&content.brand} nav={content.nav.as_slice()} cta={&content.header_cta} />

                <div class="ambient-video">
                    <OptimizedVideo
                        src={config::asset_url(&content.ambient_video)}
                        priority=true
                    />
                </div>

                <FloatingModules modules={content.floating_modules.as_slice()} />

                <main class="landing-main">
                    <HeroSection copy={&content.hero} />
                    <ModulesShowcase showcase={&content.showcase} />
                    <ReportingHub reporting={&content.reporting} />
                    <RiskDetection risk={&content.risk} />
                    <DashboardPreview dashboard={&content.dashboard} />
                </main>

                <Footer brand={&content.brand} footer={&content.footer} />
            </div>
            <style>{LANDING_STYLES}</style>
        </ContextProvider<LandingConfig>>
    }
}

const LANDING_STYLES: &str = r#"
    :root {
        --font-primary: 'Space Grotesk', 'Inter', sans-serif;
        --font-mono: 'Roboto Mono', monospace;
        --brand-blue: #0078B4;
    }
    html, body {
        margin: 0;
        padding: 0;
        background: #000;
        color: #fff;
        font-family: 'Inter', sans-serif;
        overflow-x: hidden;
    }
    .landing {
        position: relative;
        min-height: 100vh;
        background: #000;
    }
    .landing-main {
        position: relative;
        z-index: 10;
    }
    .landing-fallback {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        background: #000;
        color: #fff;
        font-family: var(--font-primary);
    }
    .ambient-video {
        position: fixed;
        inset: 0;
        z-index: 0;
        pointer-events: none;
        overflow: hidden;
    }
    .ambient-video video {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: blur(100px);
        transform: scale(1.25);
        will-change: transform;
    }
    .ambient-video video.loaded {
        opacity: 0.6;
    }
    .optimized-video.loading {
        opacity: 0;
    }
    .optimized-video.loaded {
        opacity: 1;
    }
    .section-inner {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        margin: 0 auto;
    }
    .section-header {
        position: relative;
        z-index: 10;
        text-align: center;
        margin-bottom: 5rem;
    }
    .section-title {
        font-size: 4.5rem;
        font-family: var(--font-primary);
        font-weight: 700;
        margin: 0 0 1.5rem;
        color: #fff;
    }
    .section-subtitle {
        font-size: 1.25rem;
        color: rgba(255, 255, 255, 0.6);
        max-width: 48rem;
        margin: 0 auto;
    }
    .animate-gradient {
        background-image: linear-gradient(90deg, #0078B4, #00A8E8, #3FBFE8, #0078B4);
        background-size: 300% auto;
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
        animation: gradient 6s ease infinite;
    }
    .reveal {
        opacity: 0;
        transition-property: opacity, transform;
        transition-duration: 1s;
        transition-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
    }
    .reveal-rise { transform: translateY(50px); }
    .reveal-left { transform: translateX(-100px); }
    .reveal-right { transform: translateX(100px); }
    .reveal-pop { transform: scale(0.8); }
    .reveal-tilt { transform: translateY(100px) rotateX(-15deg); }
    .reveal-spin { transform: scale(0.8) rotate(-10deg); }
    .reveal.revealed {
        opacity: 1;
        transform: none;
    }
    @keyframes gradient {
        0%, 100% { background-position: 0% center; }
        50% { background-position: 100% center; }
    }
    @keyframes fill-bar {
        from { width: 0%; }
    }
    @keyframes pulse-soft {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    @media (max-width: 768px) {
        .section-title {
            font-size: 3rem;
        }
    }
"#;
