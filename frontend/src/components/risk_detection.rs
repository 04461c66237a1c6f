use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealMotion};
use crate::content::Risk;

const RADAR_RINGS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct RiskDetectionProps {
    pub risk: &'static Risk,
}

#[function_component(RiskDetection)]
pub fn risk_detection(props: &RiskDetectionProps) -> Html {
    let risk = props.risk;

    html! {
        <section class="risk-detection">
            <div class="radial-backdrop"></div>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title">{ &risk.heading }</h2>
                    <p class="section-subtitle">{ &risk.subheading }</p>
                </div>

                <div class="risk-layout">
                    <div>
                        <Reveal class="radar" motion={RevealMotion::Spin}>
                            { for (0..RADAR_RINGS).map(|i| html! {
                                <div
                                    class="radar-ring"
                                    style={format!(
                                        "margin: {}%; animation: ring-pulse {}s ease-in-out {}s infinite;",
                                        i * 10,
                                        3 + i,
                                        i as f64 * 0.3
                                    )}
                                ></div>
                            }) }
                            <div class="radar-scan"></div>
                            { for risk.points.iter().enumerate().map(|(i, point)| html! {
                                <div
                                    class="risk-point"
                                    style={format!(
                                        "left: {}%; top: {}%; background-color: {}; animation-delay: {}s;",
                                        point.x,
                                        point.y,
                                        point.severity.color(),
                                        i as f64 * 0.5
                                    )}
                                ></div>
                            }) }
                            <div class="radar-center">{"🎯"}</div>
                        </Reveal>
                        <p class="radar-caption">{"Live Risk Mapping"}</p>
                    </div>

                    <div class="risk-levels">
                        { for risk.levels.iter().enumerate().map(|(index, level)| {
                            let color = level.severity.color();
                            html! {
                                <Reveal
                                    key={level.severity.label()}
                                    class="risk-card"
                                    motion={RevealMotion::Pop}
                                    delay={index as f64 * 0.15}
                                >
                                    <div
                                        class="risk-bar"
                                        style={format!(
                                            "background: linear-gradient(90deg, {}, transparent); animation: slide-right 2s ease-out {}s both;",
                                            color, level.delay
                                        )}
                                    ></div>
                                    <div class="risk-row">
                                        <div class="risk-label">
                                            <div class="risk-dot" style={format!("background-color: {};", color)}></div>
                                            <div>
                                                <h3>{ format!("{} Risk", level.severity.label()) }</h3>
                                                <p>{"Active threats detected"}</p>
                                            </div>
                                        </div>
                                        <div class="risk-count" style={format!("color: {};", color)}>
                                            { level.count.to_string() }
                                        </div>
                                    </div>
                                    <div class="risk-shimmer"></div>
                                </Reveal>
                            }
                        }) }

                        <div class="risk-summary">
                            <h3>{"Total Risks Monitored"}</h3>
                            <div class="risk-summary-row">
                                <span class="risk-total">{ risk.total_risks().to_string() }</span>
                                <span>{"across all categories"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .risk-detection {
        position: relative;
        min-height: 100vh;
        width: 100%;
        padding: 8rem 3rem;
        overflow: hidden;
        box-sizing: border-box;
    }
    .radial-backdrop {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 800px;
        height: 800px;
        transform: translate(-50%, -50%);
        border-radius: 9999px;
        filter: blur(64px);
        background: radial-gradient(circle, rgba(0, 120, 180, 0.2), transparent 70%);
    }
    .risk-layout {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .radar {
        position: relative;
        width: 100%;
        aspect-ratio: 1 / 1;
        max-width: 32rem;
        margin: 0 auto;
    }
    .radar-ring {
        position: absolute;
        inset: 0;
        border-radius: 9999px;
        border: 1px solid rgba(0, 120, 180, 0.3);
    }
    .radar-scan {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 50%;
        height: 2px;
        transform-origin: left;
        background: linear-gradient(90deg, #0078B4, transparent);
        animation: scan 4s linear infinite;
    }
    .risk-point {
        position: absolute;
        width: 1rem;
        height: 1rem;
        border-radius: 9999px;
        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .radar-center {
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        font-size: 3.75rem;
    }
    .radar-caption {
        text-align: center;
        margin-top: 2rem;
        color: rgba(255, 255, 255, 0.6);
        font-size: 1.125rem;
    }
    .risk-levels {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .risk-card {
        position: relative;
        padding: 1.5rem;
        background: linear-gradient(to right, rgba(255, 255, 255, 0.05), transparent);
        border: 3px solid rgba(255, 255, 255, 0.15);
        cursor: pointer;
        overflow: hidden;
    }
    .risk-card:hover {
        border-color: rgba(255, 255, 255, 0.4);
    }
    .risk-bar {
        position: absolute;
        inset: 0;
        width: 100%;
        opacity: 0.1;
        transition: opacity 0.5s ease;
    }
    .risk-card:hover .risk-bar {
        opacity: 0.2;
    }
    .risk-row {
        position: relative;
        z-index: 10;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .risk-label {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .risk-label h3 {
        margin: 0;
        font-size: 1.5rem;
        font-family: var(--font-primary);
        font-weight: 900;
        text-transform: uppercase;
        color: #fff;
    }
    .risk-label p {
        margin: 0;
        color: rgba(255, 255, 255, 0.6);
    }
    .risk-dot {
        width: 1rem;
        height: 1rem;
        border-radius: 9999px;
        animation: pulse-soft 2s ease-in-out infinite;
    }
    .risk-count {
        font-size: 3rem;
        font-family: var(--font-mono);
        font-weight: 700;
        font-variant-numeric: tabular-nums;
    }
    .risk-shimmer {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.05), transparent);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.5s ease;
        animation: shimmer 2s infinite;
    }
    .risk-card:hover .risk-shimmer {
        opacity: 1;
    }
    .risk-summary {
        margin-top: 2rem;
        padding: 1.5rem;
        border-radius: 1rem;
        background: linear-gradient(to bottom right, rgba(0, 120, 180, 0.2), transparent);
        border: 1px solid rgba(0, 120, 180, 0.3);
        backdrop-filter: blur(24px);
    }
    .risk-summary h3 {
        margin: 0 0 0.5rem;
        font-size: 1.25rem;
        font-family: var(--font-primary);
        color: #fff;
    }
    .risk-summary-row {
        display: flex;
        align-items: baseline;
        gap: 0.5rem;
        color: rgba(255, 255, 255, 0.6);
    }
    .risk-total {
        font-size: 3.75rem;
        font-family: var(--font-primary);
        font-weight: 700;
        color: #0078B4;
    }
    @keyframes scan {
        0% { transform: rotate(0deg); }
        100% { transform: rotate(360deg); }
    }
    @keyframes ring-pulse {
        0%, 100% { opacity: 0.3; transform: scale(1); }
        50% { opacity: 0.6; transform: scale(1.05); }
    }
    @keyframes ping {
        75%, 100% { transform: scale(2); opacity: 0; }
    }
    @keyframes slide-right {
        from { width: 0%; }
        to { width: 100%; }
    }
    @keyframes shimmer {
        0% { transform: translateX(-100%); }
        100% { transform: translateX(100%); }
    }
    @media (max-width: 1024px) {
        .risk-layout {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 768px) {
        .risk-detection {
            padding: 8rem 1.5rem;
        }
    }
                "#}
            </style>
        </section>
    }
}
