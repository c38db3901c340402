//! 2D rendering
//!
//! Drawing goes through the `Surface` trait so the same routine can target
//! the browser canvas or an in-memory `DisplayList`.

pub mod display_list;
pub mod player;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use display_list::{DisplayList, DrawCmd};
pub use player::draw_player;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;

use glam::Vec2;

use crate::settings::Settings;

/// Something that can draw circles and lines
pub trait Surface {
    /// Erase a `width` x `height` region from the origin
    fn clear(&mut self, width: f32, height: f32);
    /// Fill a circle at the given opacity
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32);
    /// Outline a circle at full opacity
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32);
    /// Straight segment at full opacity
    fn line(&mut self, from: Vec2, to: Vec2, color: &str, line_width: f32);
}

/// Colors and stroke parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub color: String,
    pub line_width: f32,
    pub fill_alpha: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Style {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            color: settings.color.clone(),
            line_width: settings.line_width,
            fill_alpha: settings.fill_alpha,
        }
    }
}
