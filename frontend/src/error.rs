use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum LandingError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("failed to parse landing content: {0}")]
    Content(#[from] serde_json::Error),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl LandingError {
    /// Wraps a rejected DOM call. `JsValue` is not `Send` so only its debug text is kept.
    pub fn dom(err: JsValue) -> Self {
        Self::Dom(format!("{:?}", err))
    }
}

pub fn window() -> Result<web_sys::Window, LandingError> {
    web_sys::window().ok_or(LandingError::NoWindow)
}
