pub mod reveal;
pub mod scroll_animation;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event};

use crate::error::{self, LandingError};

/// A window event listener that unregisters itself when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl WindowListener {
    pub fn passive(
        event: &'static str,
        callback: Closure<dyn Fn(Event)>,
    ) -> Result<Self, LandingError> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        error::window()?
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(LandingError::dom)?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {} listener: {:?}", self.event, e);
            }
        }
    }
}

/// Current viewport size in CSS pixels, `(0, 0)` when unavailable.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}
