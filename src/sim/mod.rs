//! Simulation module
//!
//! Everything that moves lives here. No rendering or platform dependencies:
//! - Pointer events arrive as messages and are applied in order
//! - The player advances exactly one seek step per tick

pub mod player;
pub mod pointer;
pub mod state;
pub mod tick;

pub use player::{Player, seek_velocity};
pub use pointer::{PointerEvent, PointerState};
pub use state::GameState;
pub use tick::{TickInput, tick};
