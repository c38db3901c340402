//! Owned simulation state
//!
//! Created once at startup and handed to the frame driver by reference.

use super::player::Player;
use super::pointer::PointerState;
use crate::settings::Settings;
use crate::surface_center;

#[derive(Debug, Clone)]
pub struct GameState {
    pub width: u32,
    pub height: u32,
    pub pointer: PointerState,
    pub player: Player,
    /// Frames advanced since startup
    pub frame_count: u64,
}

impl GameState {
    /// Player and pointer both start at the surface center
    pub fn new(width: u32, height: u32, settings: &Settings) -> Self {
        let center = surface_center(width, height);
        Self {
            width,
            height,
            pointer: PointerState::new(center),
            player: Player::with_params(center, settings.player_radius, settings.speed_modifier),
            frame_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_centers_everything() {
        let state = GameState::new(1280, 720, &Settings::default());
        assert_eq!(state.player.pos, Vec2::new(640.0, 360.0));
        assert_eq!(state.pointer.pos, Vec2::new(640.0, 360.0));
        assert!(!state.pointer.pressed);
        assert_eq!(state.frame_count, 0);
    }

    #[test]
    fn test_new_uses_settings() {
        let settings = Settings {
            player_radius: 20.0,
            speed_modifier: 8.0,
            ..Default::default()
        };
        let state = GameState::new(100, 100, &settings);
        assert_eq!(state.player.radius, 20.0);
        assert_eq!(state.player.speed_modifier, 8.0);
    }
}
