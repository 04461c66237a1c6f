use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::content::{Brand, Footer as FooterCopy};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: &'static Brand,
    pub footer: &'static FooterCopy,
}

fn initial(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { brand, footer } = props;
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-cta">
                <h2>
                    { &footer.heading }
                    <br />
                    <span class="animate-gradient">{ &footer.heading_accent }</span>
                </h2>
                <p>{ &footer.blurb }</p>
                <button class="footer-cta-button">
                    <span>{ &footer.cta }</span>
                    <div class="footer-cta-fill"></div>
                </button>
            </div>

            <div class="footer-links">
                <div class="footer-brand">
                    <h3>{ &brand.name }</h3>
                    <p>{ &brand.description }</p>
                    <div class="socials">
                        { for footer.socials.iter().map(|social| html! {
                            <a href="#" class="social" key={social.clone()} aria-label={social.clone()}>
                                { initial(social) }
                            </a>
                        }) }
                    </div>
                </div>

                { for footer.columns.iter().map(|column| html! {
                    <div class="footer-column" key={column.title.clone()}>
                        <h4>{ &column.title }</h4>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li><a href="#">{ link }</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>

            <div class="footer-bottom">
                <p>{ format!("© {} {}. All rights reserved.", year, brand.name) }</p>
                <div class="footer-bottom-links">
                    <span class="status">
                        <span class="status-dot"></span>
                        { &footer.status }
                    </span>
                    { for footer.bottom_links.iter().map(|link| html! {
                        <a href="#" key={link.clone()}>{ link }</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
    .site-footer {
        position: relative;
        width: 100%;
        padding: 5rem 3rem 2.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        box-sizing: border-box;
    }
    .footer-cta {
        max-width: 80rem;
        margin: 0 auto 5rem;
        text-align: center;
    }
    .footer-cta h2 {
        font-size: 3rem;
        font-family: var(--font-primary);
        font-weight: 700;
        color: #fff;
        margin: 0 0 1.5rem;
    }
    .footer-cta p {
        font-size: 1.25rem;
        color: rgba(255, 255, 255, 0.6);
        max-width: 42rem;
        margin: 0 auto 2.5rem;
    }
    .footer-cta-button {
        position: relative;
        overflow: hidden;
        padding: 1.25rem 3rem;
        border: none;
        border-radius: 9999px;
        background: linear-gradient(to right, #0078B4, #00A8E8);
        color: #fff;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
        transition: box-shadow 0.3s ease, transform 0.3s ease;
    }
    .footer-cta-button span {
        position: relative;
        z-index: 10;
    }
    .footer-cta-button:hover {
        transform: scale(1.05);
        box-shadow: 0 25px 50px -12px rgba(0, 120, 180, 0.5);
    }
    .footer-cta-fill {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, #00A8E8, #3FBFE8);
        transform: translateX(100%);
        transition: transform 0.3s ease;
    }
    .footer-cta-button:hover .footer-cta-fill {
        transform: translateX(0);
    }
    .footer-links {
        max-width: 80rem;
        margin: 0 auto 4rem;
        display: grid;
        grid-template-columns: 2fr repeat(4, 1fr);
        gap: 3rem;
    }
    .footer-brand h3 {
        font-size: 1.5rem;
        font-family: var(--font-primary);
        color: #fff;
        margin: 0 0 1rem;
    }
    .footer-brand p {
        color: rgba(255, 255, 255, 0.6);
        margin: 0 0 1.5rem;
    }
    .socials {
        display: flex;
        gap: 1rem;
    }
    .social {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: rgba(255, 255, 255, 0.6);
        text-decoration: none;
        transition: all 0.3s ease;
    }
    .social:hover {
        background: rgba(0, 120, 180, 0.2);
        border-color: #0078B4;
        color: #fff;
    }
    .footer-column h4 {
        color: #fff;
        font-weight: 600;
        text-transform: capitalize;
        margin: 0 0 1rem;
    }
    .footer-column ul {
        list-style: none;
        padding: 0;
        margin: 0;
    }
    .footer-column li {
        margin-bottom: 0.75rem;
    }
    .footer-column a,
    .footer-bottom a {
        color: rgba(255, 255, 255, 0.6);
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .footer-column a:hover,
    .footer-bottom a:hover {
        color: #00A8E8;
    }
    .footer-bottom {
        max-width: 80rem;
        margin: 0 auto;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        color: rgba(255, 255, 255, 0.4);
        font-size: 0.875rem;
    }
    .footer-bottom p {
        margin: 0;
    }
    .footer-bottom-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .status {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .status-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #22c55e;
        animation: pulse-soft 2s ease-in-out infinite;
    }
    @media (max-width: 1024px) {
        .footer-links {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .site-footer {
            padding: 5rem 1.5rem 2.5rem;
        }
        .footer-cta h2 {
            font-size: 2rem;
        }
        .footer-bottom {
            flex-direction: column;
        }
    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_badges_use_the_first_letter() {
        assert_eq!(initial("LinkedIn"), "L");
        assert_eq!(initial(""), "");
    }
}
