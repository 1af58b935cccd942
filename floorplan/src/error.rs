//! Error type shared by the loader, the engine constructor and desk parsing.

use wasm_bindgen::JsValue;

/// Errors surfaced by the floorplan engine.
#[derive(Debug, thiserror::Error)]
pub enum FloorplanError {
    /// The floor image fired its `error` event instead of `load`.
    #[error("floor image failed to load: {src}")]
    ImageLoad { src: String },
    /// A browser API call threw.
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
    /// The canvas did not hand out a 2D rendering context.
    #[error("canvas has no 2d rendering context")]
    MissingContext,
    /// Desk records could not be decoded.
    #[error("invalid desk data: {0}")]
    DeskData(#[from] serde_json::Error),
}

impl FloorplanError {
    /// Wrap a thrown JS value with a short description of the failing call.
    #[must_use]
    pub fn js(context: &'static str, value: &JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}
