//! Per-frame simulation tick

use super::pointer::PointerEvent;
use super::state::GameState;

/// Pointer events queued since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<PointerEvent>,
}

impl TickInput {
    pub fn push(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    /// Apply queued events to the pointer in arrival order
    pub fn apply_to(&self, state: &mut GameState) {
        for &event in &self.events {
            state.pointer.apply(event);
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Advance the player one seek step toward the pointer
pub fn tick(state: &mut GameState) {
    let target = state.pointer.pos;
    state.player.update(target);
    state.frame_count += 1;
}
