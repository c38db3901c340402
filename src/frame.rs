//! One frame: clear, apply input, draw, then update

use crate::renderer::{Style, Surface, draw_player};
use crate::sim::{GameState, TickInput, tick};

/// Run a single render/update cycle.
///
/// Input is applied before drawing so the pointer line reflects this
/// frame's events; the player moves only after it has been drawn.
pub fn run_frame<S: Surface + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    surface: &mut S,
    style: &Style,
) {
    surface.clear(state.width as f32, state.height as f32);
    input.apply_to(state);
    draw_player(surface, &state.player, state.pointer.pos, style);
    tick(state);
}
