use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::is_past_start;
use crate::error::LandingError;
use crate::hooks::viewport_size;

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(
    element: &Element,
    start_ratio: f64,
    on_change: Callback<bool>,
) -> Result<Observation, LandingError> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let (_, viewport_height) = viewport_size();
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                let top = entry.bounding_client_rect().top();
                on_change.emit(is_past_start(top, viewport_height, start_ratio));
            }
        }
    });

    let init = IntersectionObserverInit::new();
    // shrink the root so crossings happen at the start line, not the viewport edge
    let bottom_margin = ((1.0 - start_ratio) * 100.0).round();
    init.set_root_margin(&format!("0px 0px -{}% 0px", bottom_margin));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(LandingError::dom)?;
    observer.observe(element);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// `true` once the element's top edge has scrolled above
/// `start_ratio * viewport height`; flips back when scrolled below it again.
#[hook]
pub fn use_reveal(node: NodeRef, start_ratio: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, start_ratio): &(NodeRef, f64)| {
                let start_ratio = *start_ratio;
                let on_change = Callback::from(move |visible: bool| revealed.set(visible));
                let observation = node.cast::<Element>().and_then(|element| {
                    observe(&element, start_ratio, on_change)
                        .map_err(|e| log::warn!("reveal observer not attached: {}", e))
                        .ok()
                });
                move || drop(observation)
            },
            (node, start_ratio),
        );
    }

    *revealed
}
