use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::animation::stagger;
use crate::config::LandingConfig;
use crate::content::{Brand, Link};

const NAV_STAGGER_SECS: f64 = 0.08;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: &'static Brand,
    pub nav: &'static [Link],
    pub cta: &'static Link,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let entered = use_state_eq(|| false);

    // Entrance plays once, shortly after mount
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config.header_entrance_delay_ms, move || {
                    entered.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // CTA goes last, after every nav item has started
    let cta_delay = stagger(props.nav.len() + 1, NAV_STAGGER_SECS);

    html! {
        <header class={classes!("site-header", entered.then_some("entered"))}>
            <div class="logo">{ &props.brand.name }</div>
            <div class="header-right">
                <nav class="header-nav">
                    { for props.nav.iter().enumerate().map(|(i, link)| html! {
                        <a
                            href={link.href.clone()}
                            style={format!("transition-delay: {}", stagger(i + 1, NAV_STAGGER_SECS))}
                        >
                            { &link.label }
                        </a>
                    }) }
                </nav>
                <div class="header-cta" style={format!("transition-delay: {}", cta_delay)}>
                    <a href={props.cta.href.clone()}>{ &props.cta.label }</a>
                </div>
                <div class="menu-trigger">
                    <div></div>
                    <div></div>
                </div>
            </div>
            <style>
                {r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 50;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.5rem 2.5rem;
        color: #fff;
        border-bottom: 5px solid rgba(255, 255, 255, 0.3);
        background: rgba(5, 5, 5, 0.8);
        backdrop-filter: blur(4px);
        box-sizing: border-box;
    }
    .site-header .logo {
        font-family: var(--font-primary);
        font-weight: 700;
        font-size: 3.5rem;
        line-height: 1;
        text-transform: uppercase;
        letter-spacing: -0.1em;
        transform: scale(0);
        opacity: 0;
        transition: transform 0.8s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.8s ease, letter-spacing 0.6s ease 0.6s;
        will-change: transform, opacity;
    }
    .site-header.entered .logo {
        transform: scale(1);
        opacity: 1;
        letter-spacing: -0.04em;
    }
    .header-right {
        display: flex;
        align-items: center;
        gap: 3rem;
    }
    .header-nav {
        display: flex;
        gap: 2.5rem;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        font-weight: 700;
    }
    .header-nav a,
    .header-cta {
        transform: translateY(-50px);
        opacity: 0;
        transition: transform 0.6s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.6s ease;
        will-change: transform, opacity;
    }
    .site-header.entered .header-nav a,
    .site-header.entered .header-cta {
        transform: translateY(0);
        opacity: 1;
    }
    .header-nav a {
        color: rgba(248, 248, 248, 0.9);
        text-decoration: none;
        border-bottom: 3px solid transparent;
        transition-property: transform, opacity, translate, color, border-color;
    }
    .header-nav a:hover {
        translate: 0 -3px;
        color: #0078B4;
        border-color: #0078B4;
    }
    .header-cta a {
        display: inline-block;
        border: 3px solid rgba(255, 255, 255, 0.4);
        padding: 0.5rem 2rem;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
        transition: scale 0.3s ease, background-color 0.3s ease, border-color 0.3s ease;
    }
    .header-cta a:hover {
        scale: 1.05;
        background-color: #0078B4;
        border-color: #0078B4;
    }
    .menu-trigger {
        display: none;
    }
    .menu-trigger div {
        width: 2rem;
        height: 2px;
        background: #fff;
        margin-bottom: 6px;
    }
    @media (max-width: 768px) {
        .header-nav,
        .header-cta {
            display: none;
        }
        .menu-trigger {
            display: block;
        }
        .site-header .logo {
            font-size: 2rem;
        }
    }
                "#}
            </style>
        </header>
    }
}
