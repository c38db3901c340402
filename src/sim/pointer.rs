//! Pointer tracking
//!
//! The player steers toward the pointer only while it is dragged: move
//! events are ignored until a press is seen.

use glam::Vec2;

/// A pointer callback expressed as a message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed / touch started
    Down(Vec2),
    /// Button released / touch ended
    Up(Vec2),
    /// Pointer moved
    Move(Vec2),
}

/// Latest pointer position and button state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub pressed: bool,
}

impl PointerState {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            pressed: false,
        }
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.pos = pos;
        self.pressed = true;
    }

    pub fn on_pointer_up(&mut self, pos: Vec2) {
        self.pos = pos;
        self.pressed = false;
    }

    /// Drag-to-steer: only tracked while pressed
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if self.pressed {
            self.pos = pos;
        }
    }

    /// Dispatch a queued event
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.on_pointer_down(pos),
            PointerEvent::Up(pos) => self.on_pointer_up(pos),
            PointerEvent::Move(pos) => self.on_pointer_move(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_move_up() {
        let mut pointer = PointerState::new(Vec2::new(640.0, 360.0));

        pointer.on_pointer_down(Vec2::new(50.0, 50.0));
        assert_eq!(pointer.pos, Vec2::new(50.0, 50.0));
        assert!(pointer.pressed);

        pointer.on_pointer_move(Vec2::new(60.0, 60.0));
        assert_eq!(pointer.pos, Vec2::new(60.0, 60.0));

        pointer.on_pointer_up(Vec2::new(60.0, 60.0));
        assert_eq!(pointer.pos, Vec2::new(60.0, 60.0));
        assert!(!pointer.pressed);
    }

    #[test]
    fn test_move_ignored_when_released() {
        let start = Vec2::new(640.0, 360.0);
        let mut pointer = PointerState::new(start);

        pointer.on_pointer_move(Vec2::new(10.0, 20.0));
        assert_eq!(pointer.pos, start);
        // Moving must never latch the button
        assert!(!pointer.pressed);
    }

    #[test]
    fn test_apply_in_order() {
        let mut pointer = PointerState::new(Vec2::ZERO);
        let events = [
            PointerEvent::Move(Vec2::new(5.0, 5.0)),
            PointerEvent::Down(Vec2::new(1.0, 2.0)),
            PointerEvent::Move(Vec2::new(3.0, 4.0)),
            PointerEvent::Up(Vec2::new(7.0, 8.0)),
            PointerEvent::Move(Vec2::new(9.0, 9.0)),
        ];
        for event in events {
            pointer.apply(event);
        }
        assert_eq!(pointer.pos, Vec2::new(7.0, 8.0));
        assert!(!pointer.pressed);
    }
}
