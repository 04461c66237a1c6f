use yew::prelude::*;

use crate::animation::stagger;
use crate::components::reveal::{Reveal, RevealMotion};
use crate::content::Dashboard;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

#[derive(Properties, PartialEq)]
pub struct DashboardPreviewProps {
    pub dashboard: &'static Dashboard,
}

#[function_component(DashboardPreview)]
pub fn dashboard_preview(props: &DashboardPreviewProps) -> Html {
    let dashboard = props.dashboard;
    let points = dashboard.trend_points(CHART_WIDTH);
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        <section class="dashboard-preview">
            <div class="dashboard-grid-bg"></div>
            <div class="section-inner">
                <div class="section-header">
                    <div class="soon-badge">{ &dashboard.badge }</div>
                    <h2 class="section-title">{ &dashboard.heading }</h2>
                    <p class="section-subtitle">{ &dashboard.subheading }</p>
                </div>

                <Reveal class="mockup" motion={RevealMotion::Tilt}>
                    <div class="mockup-glow"></div>
                    <div class="mockup-frame">
                        <div class="browser-bar">
                            <div class="browser-dots">
                                <span style="background: rgba(239, 68, 68, 0.8);"></span>
                                <span style="background: rgba(234, 179, 8, 0.8);"></span>
                                <span style="background: rgba(34, 197, 94, 0.8);"></span>
                            </div>
                            <div class="browser-address">{ &dashboard.address }</div>
                        </div>

                        <div class="mockup-body">
                            <div class="widget-row">
                                { for dashboard.widgets.iter().map(|widget| html! {
                                    <div class="widget" key={widget.label.clone()}>
                                        <div class="widget-top">
                                            <span class="widget-icon">{ &widget.icon }</span>
                                            <span class="widget-value" style={format!("color: {};", widget.color)}>
                                                { &widget.value }
                                            </span>
                                        </div>
                                        <p class="widget-label">{ &widget.label }</p>
                                        <div class="widget-track">
                                            <div
                                                class="widget-fill"
                                                style={format!(
                                                    "width: {}%; background-color: {}; animation: fill-bar {}s ease-out both;",
                                                    widget.fill, widget.color, widget.duration
                                                )}
                                            ></div>
                                        </div>
                                    </div>
                                }) }
                            </div>

                            <div class="chart-card">
                                <div class="chart-head">
                                    <h3>{"Compliance Trends"}</h3>
                                    <div class="chart-ranges">
                                        <span class="active">{"30D"}</span>
                                        <span>{"90D"}</span>
                                        <span>{"1Y"}</span>
                                    </div>
                                </div>
                                <div class="chart-area">
                                    <svg
                                        viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}
                                        preserveAspectRatio="none"
                                    >
                                        <defs>
                                            <linearGradient id="chart-line" x1="0%" y1="0%" x2="100%" y2="0%">
                                                <stop offset="0%" stop-color="#0078B4" />
                                                <stop offset="50%" stop-color="#00A8E8" />
                                                <stop offset="100%" stop-color="#3FBFE8" />
                                            </linearGradient>
                                        </defs>
                                        <polyline
                                            class="chart-line"
                                            points={polyline}
                                            fill="none"
                                            stroke="url(#chart-line)"
                                            stroke-width="3"
                                        />
                                        { for points.iter().enumerate().map(|(i, (x, y))| html! {
                                            <circle
                                                class="chart-dot"
                                                cx={x.to_string()}
                                                cy={y.to_string()}
                                                r="5"
                                                fill="#0078B4"
                                                style={format!("animation-delay: {}s;", 2.0 + i as f64 * 0.1)}
                                            />
                                        }) }
                                    </svg>
                                </div>
                            </div>
                        </div>
                    </div>
                </Reveal>

                <div class="stats-grid">
                    { for dashboard.stats.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal
                            key={stat.label.clone()}
                            class="stat-card"
                            motion={RevealMotion::Rise}
                            delay={index as f64 * 0.1}
                        >
                            <div class="stat-icon">{ &stat.icon }</div>
                            <div class="stat-value" style={format!("animation-delay: {};", stagger(index, 0.1))}>
                                { &stat.value }
                            </div>
                            <div class="stat-label">{ &stat.label }</div>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
    .dashboard-preview {
        position: relative;
        min-height: 100vh;
        width: 100%;
        padding: 8rem 3rem;
        overflow: hidden;
        box-sizing: border-box;
    }
    .dashboard-grid-bg {
        position: absolute;
        inset: 0;
        opacity: 0.1;
        background-image:
            linear-gradient(rgba(0, 120, 180, 0.5) 2px, transparent 2px),
            linear-gradient(90deg, rgba(0, 120, 180, 0.5) 2px, transparent 2px);
        background-size: 100px 100px;
        animation: grid-move 20s linear infinite;
    }
    .soon-badge {
        display: inline-block;
        padding: 0.5rem 1.5rem;
        margin-bottom: 1.5rem;
        border-radius: 9999px;
        background: rgba(0, 120, 180, 0.2);
        border: 1px solid rgba(0, 120, 180, 0.4);
        color: #00A8E8;
        font-family: var(--font-mono);
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    .mockup {
        position: relative;
        max-width: 72rem;
        margin: 0 auto 5rem;
        perspective: 2000px;
    }
    .mockup-glow {
        position: absolute;
        inset: -1rem;
        filter: blur(48px);
        opacity: 0.4;
        background: linear-gradient(to right, #0078B4, #00A8E8, #3FBFE8);
    }
    .mockup-frame {
        position: relative;
        border-radius: 1.5rem;
        overflow: hidden;
        background: linear-gradient(to bottom right, #111827, #000);
        border: 1px solid rgba(255, 255, 255, 0.1);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    }
    .browser-bar {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 1.5rem;
        background: rgba(31, 41, 55, 0.5);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .browser-dots {
        display: flex;
        gap: 0.5rem;
    }
    .browser-dots span {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 9999px;
    }
    .browser-address {
        flex-grow: 1;
        margin-left: 1rem;
        padding: 0.375rem 1rem;
        border-radius: 0.5rem;
        background: rgba(17, 24, 39, 0.5);
        color: rgba(255, 255, 255, 0.4);
        font-size: 0.875rem;
    }
    .mockup-body {
        padding: 2rem;
    }
    .widget-row {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        margin-bottom: 2rem;
    }
    .widget {
        padding: 1.5rem;
        border-radius: 0.75rem;
        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), transparent);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .widget-top {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 1rem;
    }
    .widget-icon {
        font-size: 1.875rem;
    }
    .widget-value {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .widget-label {
        margin: 0;
        color: rgba(255, 255, 255, 0.6);
        font-size: 0.875rem;
    }
    .widget-track {
        margin-top: 1rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
        overflow: hidden;
    }
    .widget-fill {
        height: 100%;
        border-radius: 9999px;
    }
    .chart-card {
        padding: 1.5rem;
        border-radius: 0.75rem;
        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), transparent);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .chart-head {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 1.5rem;
    }
    .chart-head h3 {
        margin: 0;
        font-size: 1.25rem;
        font-family: var(--font-primary);
        color: #fff;
    }
    .chart-ranges {
        display: flex;
        gap: 0.5rem;
    }
    .chart-ranges span {
        padding: 0.25rem 0.75rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.05);
        color: rgba(255, 255, 255, 0.6);
        font-size: 0.875rem;
    }
    .chart-ranges span.active {
        background: rgba(0, 120, 180, 0.2);
        color: #00A8E8;
    }
    .chart-area {
        height: 16rem;
    }
    .chart-area svg {
        width: 100%;
        height: 100%;
    }
    .chart-line {
        stroke-dasharray: 1000;
        stroke-dashoffset: 1000;
        animation: draw-line 2s ease-out forwards;
    }
    .chart-dot {
        opacity: 0;
        animation: fade-in 0.3s ease-out forwards;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .stat-card {
        text-align: center;
        padding: 1.5rem;
        border-radius: 1rem;
        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), transparent);
        border: 1px solid rgba(255, 255, 255, 0.1);
        transition: border-color 0.3s ease;
    }
    .stat-card:hover {
        border-color: rgba(0, 120, 180, 0.5);
    }
    .stat-icon {
        font-size: 2.25rem;
        margin-bottom: 0.75rem;
    }
    .stat-value {
        font-size: 2.25rem;
        font-family: var(--font-primary);
        font-weight: 700;
        margin-bottom: 0.5rem;
        background: linear-gradient(to right, #0078B4, #00A8E8);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .stat-label {
        color: rgba(255, 255, 255, 0.6);
        font-size: 0.875rem;
    }
    @keyframes grid-move {
        0% { background-position: 0 0; }
        100% { background-position: 100px 100px; }
    }
    @keyframes draw-line {
        to { stroke-dashoffset: 0; }
    }
    @keyframes fade-in {
        to { opacity: 1; }
    }
    @media (max-width: 1024px) {
        .stats-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .dashboard-preview {
            padding: 8rem 1.5rem;
        }
        .widget-row {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
