//! Seek Canvas - a circle that chases the pointer
//!
//! Core modules:
//! - `sim`: Pointer state, the seeking player, and the per-frame tick
//! - `renderer`: Drawing surface abstraction and the player draw routine
//! - `frame`: One clear/draw/update cycle
//! - `platform`: Browser glue (coordinate mapping, frame timing, setup errors)

pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use frame::run_frame;
pub use settings::Settings;

use glam::Vec2;

/// Configuration constants
pub mod consts {
    /// Logical surface size
    pub const SURFACE_WIDTH: u32 = 1280;
    pub const SURFACE_HEIGHT: u32 = 720;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 50.0;
    /// Pixels moved per frame; also the stopping distance
    pub const SPEED_MODIFIER: f32 = 5.0;

    /// Stroke defaults
    pub const LINE_WIDTH: f32 = 3.0;
    pub const FILL_ALPHA: f32 = 0.5;
    pub const DEFAULT_COLOR: &str = "white";

    /// Id of the host page's canvas element
    pub const CANVAS_ID: &str = "canvas1";
}

/// Center point of a surface of the given size
#[inline]
pub fn surface_center(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 * 0.5, height as f32 * 0.5)
}
