//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod bird;
pub mod collision;
pub mod pipe;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{any_collision, bird_pipe_collision, out_of_bounds};
pub use pipe::{Pipe, generate_pair, generate_pair_with_height};
pub use state::{GameEvent, GamePhase, GameState, RngState};
pub use tick::{TickInput, next_gap_center, tick};
