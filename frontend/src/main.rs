mod animation;
mod components;
mod config;
mod content;
mod error;
mod hooks;
mod pages;

use yew::prelude::*;

use crate::config::LandingConfig;
use crate::pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Landing config={LandingConfig::default()} />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).ok();
    log::info!("starting athermind frontend");
    yew::Renderer::<App>::new().render();
}
