use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealMotion};
use crate::content::Reporting;

const WAVE_LAYERS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct ReportingHubProps {
    pub reporting: &'static Reporting,
}

#[function_component(ReportingHub)]
pub fn reporting_hub(props: &ReportingHubProps) -> Html {
    let reporting = props.reporting;

    html! {
        <section class="reporting-hub">
            <div class="grid-backdrop"></div>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="section-title">{ &reporting.heading }</h2>
                    <p class="section-subtitle">{ &reporting.subheading }</p>
                </div>

                <div class="reporting-layout">
                    <div class="report-list">
                        { for reporting.report_types.iter().enumerate().map(|(index, report)| html! {
                            <Reveal
                                key={report.name.clone()}
                                class="report-card"
                                motion={RevealMotion::alternating(index)}
                                delay={index as f64 * 0.15}
                                style={format!("animation-delay: {}s;", index as f64 * 0.5)}
                            >
                                <div class="report-row">
                                    <div
                                        class="report-index"
                                        style={format!(
                                            "background: linear-gradient(135deg, {c}40, {c}10); border: 2px solid {c}30;",
                                            c = report.color
                                        )}
                                    >
                                        { (index + 1).to_string() }
                                    </div>
                                    <div class="report-text">
                                        <h3>{ format!("{} Reports", report.name) }</h3>
                                        <p>{ &report.description }</p>
                                    </div>
                                    <div class="report-dot" style={format!("background-color: {};", report.color)}></div>
                                </div>
                            </Reveal>
                        }) }
                    </div>

                    <Reveal class="analytics-visual" motion={RevealMotion::Spin}>
                        <div class="waves">
                            { for (0..WAVE_LAYERS).map(|i| html! {
                                <div
                                    class="wave"
                                    style={format!(
                                        "animation: wave {}s ease-in-out {}s infinite; bottom: {}%;",
                                        3 + i,
                                        i as f64 * 0.3,
                                        i * 15
                                    )}
                                ></div>
                            }) }
                        </div>
                        <div class="analytics-content">
                            <div class="analytics-heading">
                                <div class="analytics-icon">{"📈"}</div>
                                <h3>{"Real-time Analytics"}</h3>
                                <p>{"Dashboard Preview"}</p>
                            </div>
                            <div class="quarter-bars">
                                { for reporting.quarterly.iter().enumerate().map(|(i, value)| html! {
                                    <div class="quarter-row">
                                        <div class="quarter-label">{ format!("Q{}", i + 1) }</div>
                                        <div class="quarter-track">
                                            <div
                                                class="quarter-fill"
                                                style={format!(
                                                    "width: {}%; animation: fill-bar 2s ease-out {}s both;",
                                                    value,
                                                    i as f64 * 0.2
                                                )}
                                            ></div>
                                        </div>
                                        <div class="quarter-value">{ format!("{}%", value) }</div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </Reveal>
                </div>

                <div class="alert-banner-wrap">
                    <div class="alert-banner">
                        <h3>
                            <span class="pulse">{"⚠️"}</span>
                            { &reporting.alert_title }
                            <span class="pulse">{"⚠️"}</span>
                        </h3>
                        <p>{ &reporting.alert_body }</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .reporting-hub {
        position: relative;
        min-height: 100vh;
        width: 100%;
        padding: 8rem 3rem;
        overflow: hidden;
        background: linear-gradient(to bottom, transparent, #0a0a0a);
        box-sizing: border-box;
    }
    .grid-backdrop {
        position: absolute;
        inset: 0;
        opacity: 0.2;
        background-image:
            linear-gradient(rgba(0, 120, 180, 0.1) 1px, transparent 1px),
            linear-gradient(90deg, rgba(0, 120, 180, 0.1) 1px, transparent 1px);
        background-size: 50px 50px;
    }
    .reporting-layout {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
        margin-bottom: 5rem;
    }
    .report-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .report-card.revealed {
        animation: report-breathe 2s ease-in-out infinite alternate;
    }
    .report-card > .report-row {
        padding: 1.5rem;
        background: linear-gradient(to right, rgba(255, 255, 255, 0.05), transparent);
        border: 3px solid rgba(255, 255, 255, 0.15);
        transition: border-color 0.5s ease;
        cursor: pointer;
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .report-card:hover > .report-row {
        border-color: rgba(0, 120, 180, 0.8);
    }
    .report-index {
        width: 4rem;
        height: 4rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        font-weight: 700;
        transition: transform 0.3s ease;
    }
    .report-card:hover .report-index {
        transform: scale(1.1);
    }
    .report-text {
        flex-grow: 1;
    }
    .report-text h3 {
        margin: 0 0 0.25rem;
        font-size: 1.5rem;
        font-family: var(--font-primary);
        font-weight: 900;
        text-transform: uppercase;
        color: #fff;
    }
    .report-text p {
        margin: 0;
        color: rgba(255, 255, 255, 0.6);
    }
    .report-dot {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 9999px;
        animation: pulse-soft 2s ease-in-out infinite;
    }
    .analytics-visual {
        position: relative;
        height: 600px;
        border-radius: 1.5rem;
        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), transparent);
        backdrop-filter: blur(24px);
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 2rem;
        overflow: hidden;
        box-sizing: border-box;
    }
    .waves {
        position: absolute;
        inset: 0;
    }
    .wave {
        position: absolute;
        left: 0;
        right: 0;
        height: 8rem;
        opacity: 0.2;
        background: linear-gradient(180deg, transparent, #0078B4);
    }
    .analytics-content {
        position: relative;
        z-index: 10;
        height: 100%;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
    }
    .analytics-heading {
        text-align: center;
        margin-bottom: 2rem;
    }
    .analytics-icon {
        font-size: 4.5rem;
        margin-bottom: 1rem;
    }
    .analytics-heading h3 {
        font-size: 1.875rem;
        font-family: var(--font-primary);
        color: #fff;
        margin: 0 0 0.5rem;
    }
    .analytics-heading p {
        color: rgba(255, 255, 255, 0.6);
    }
    .quarter-bars {
        width: 100%;
        max-width: 24rem;
    }
    .quarter-row {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .quarter-label {
        width: 5rem;
        color: rgba(255, 255, 255, 0.6);
        font-size: 0.875rem;
    }
    .quarter-track {
        flex-grow: 1;
        height: 2rem;
        background: rgba(255, 255, 255, 0.05);
        border-radius: 9999px;
        overflow: hidden;
    }
    .quarter-fill {
        height: 100%;
        border-radius: 9999px;
        background: linear-gradient(to right, #0078B4, #00A8E8);
    }
    .quarter-value {
        width: 3rem;
        color: #fff;
        font-weight: 700;
    }
    .alert-banner-wrap {
        text-align: center;
    }
    .alert-banner {
        display: inline-block;
        padding: 1rem 2rem;
        border-radius: 1rem;
        background: linear-gradient(to right, rgba(239, 68, 68, 0.2), rgba(249, 115, 22, 0.2), rgba(239, 68, 68, 0.2));
        border: 1px solid rgba(239, 68, 68, 0.3);
        backdrop-filter: blur(24px);
    }
    .alert-banner h3 {
        font-size: 1.5rem;
        font-family: var(--font-primary);
        color: #fff;
        margin: 0 0 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
    }
    .alert-banner p {
        color: rgba(255, 255, 255, 0.8);
        margin: 0;
    }
    .pulse {
        font-size: 1.875rem;
        animation: pulse-soft 2s ease-in-out infinite;
    }
    @keyframes wave {
        0%, 100% { transform: translateY(0) scaleY(1); opacity: 0.1; }
        50% { transform: translateY(-20px) scaleY(1.2); opacity: 0.3; }
    }
    @keyframes report-breathe {
        to { scale: 1.02; }
    }
    @media (max-width: 1024px) {
        .reporting-layout {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 768px) {
        .reporting-hub {
            padding: 8rem 1.5rem;
        }
    }
                "#}
            </style>
        </section>
    }
}
