//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. The order of a
//! tick is fixed: spawn check, pipes, birds, then collision, so both kinds of
//! entity reflect the same tick's motion when a crash is judged.

use super::collision::any_collision;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump before this tick's integration
    pub jump: bool,
    /// Idle/demo mode - the bird flies itself
    pub autopilot: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Terminal state is sticky
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    if state.time_ticks.is_multiple_of(state.config.spawn_interval) {
        state.spawn_pair();
        log::debug!("Spawned pipe pair at tick {}", state.time_ticks);
        events.push(GameEvent::PairSpawned);
    }

    for pipe in &mut state.pipes {
        pipe.tick();
    }
    let before = state.pipes.len();
    state.pipes.retain(|p| !p.retired);
    let retired = before - state.pipes.len();
    if retired > 0 {
        log::trace!("Retired {} pipes at tick {}", retired, state.time_ticks);
        events.push(GameEvent::PipesRetired(retired));
    }

    let jump = input.jump || (input.autopilot && autopilot_wants_jump(state));
    if jump {
        if let Some(bird) = state.bird_mut() {
            bird.jump();
        }
    }

    for bird in &mut state.birds {
        bird.integrate();
    }

    if any_collision(&state.birds, &state.pipes, state.config.field_height) {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at tick {}", state.time_ticks);
        events.push(GameEvent::GameOver);
    }

    events
}

/// Vertical centre of the next gap the bird has to fly through
pub fn next_gap_center(state: &GameState) -> Option<f32> {
    let bird = state.bird()?;
    state
        .pipes
        .iter()
        .find(|p| p.y == 0.0 && p.right() >= bird.pos.x)
        .map(|top| top.bottom() + state.config.gap / 2.0)
}

/// Demo-mode policy: hop whenever the bird sinks well below the gap centre.
///
/// A jump climbs roughly `v^2 / 2g` (80 units with the defaults), so jumping
/// at a third of the gap below centre keeps the bird inside the opening.
fn autopilot_wants_jump(state: &GameState) -> bool {
    let Some(bird) = state.bird() else {
        return false;
    };
    let target = next_gap_center(state).unwrap_or(state.config.field_height / 2.0);
    bird.velocity >= 0.0 && bird.pos.y >= target + state.config.gap / 3.0
}
