use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::LandingConfig;
use crate::hooks::reveal::use_reveal;

/// How an element enters once it scrolls into view.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealMotion {
    #[default]
    Rise,
    FromLeft,
    FromRight,
    Pop,
    Tilt,
    Spin,
}

impl RevealMotion {
    pub fn class(self) -> &'static str {
        match self {
            RevealMotion::Rise => "reveal-rise",
            RevealMotion::FromLeft => "reveal-left",
            RevealMotion::FromRight => "reveal-right",
            RevealMotion::Pop => "reveal-pop",
            RevealMotion::Tilt => "reveal-tilt",
            RevealMotion::Spin => "reveal-spin",
        }
    }

    /// Alternating sides for list items.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            RevealMotion::FromLeft
        } else {
            RevealMotion::FromRight
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub motion: RevealMotion,
    /// Seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub style: String,
    #[prop_or_default]
    pub onmouseenter: Option<Callback<MouseEvent>>,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config.reveal_start_ratio);

    let class = classes!(
        "reveal",
        props.motion.class(),
        revealed.then_some("revealed"),
        props.class.clone()
    );
    let style = format!("transition-delay: {}s; {}", props.delay, props.style);
    let onmouseenter = props.onmouseenter.clone();

    html! {
        <div ref={node} {class} {style} {onmouseenter}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_motion_starts_left() {
        assert_eq!(RevealMotion::alternating(0), RevealMotion::FromLeft);
        assert_eq!(RevealMotion::alternating(1), RevealMotion::FromRight);
        assert_eq!(RevealMotion::alternating(4).class(), "reveal-left");
    }
}
