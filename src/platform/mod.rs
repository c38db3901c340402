//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Pointer coordinates (CSS pixels to surface pixels)
//! - Frame timing
//! - Canvas setup failures

pub mod input;
pub mod time;

pub use input::{MOUSE_EVENTS, TOUCH_EVENTS, pointer_event, to_surface_coords, touch_offset};
pub use time::FrameClock;

use thiserror::Error;

/// Failures while locating the canvas and its 2D context
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
}

#[cfg(target_arch = "wasm32")]
impl From<SetupError> for wasm_bindgen::JsValue {
    fn from(err: SetupError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
