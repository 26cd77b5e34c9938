//! Game state and core simulation types
//!
//! Everything a session needs to be replayed lives here.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipe::{Pipe, generate_pair};
use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being processed
    Running,
    /// A bird hit a pipe or left the field; terminal
    GameOver,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new pipe pair entered at the right edge
    PairSpawned,
    /// This many pipes scrolled off and were pruned
    PipesRetired(usize),
    /// The session just ended
    GameOver,
}

/// RNG state wrapper for serialization
///
/// Each pipe pair draws from its own PCG stream, so the state can be resumed
/// from the seed and the number of pairs generated so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out the generator for the next pair
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed and pipe-pair stream
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Active pipes in spawn order
    pub pipes: Vec<Pipe>,
    /// Active birds (only ever one)
    pub birds: Vec<Bird>,
}

impl GameState {
    /// Create a new running state with one bird and the opening pipe pair
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let bird = Bird::new(&config);
        let mut state = Self {
            config,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            phase: GamePhase::Running,
            pipes: Vec::new(),
            birds: vec![bird],
        };

        state.spawn_pair();

        state
    }

    /// Append a freshly generated pipe pair
    pub fn spawn_pair(&mut self) {
        let mut rng = self.rng_state.next_rng();
        let pair = generate_pair(&self.config, self.config.gap, &mut rng);
        self.pipes.extend(pair);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// The controllable bird
    pub fn bird(&self) -> Option<&Bird> {
        self.birds.first()
    }

    pub fn bird_mut(&mut self) -> Option<&mut Bird> {
        self.birds.first_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), 42);
        assert_eq!(state.time_ticks, 0);
        assert!(state.is_running());
        assert_eq!(state.birds.len(), 1);
        assert_eq!(state.pipes.len(), 2);
        assert_eq!(state.rng_state.seed, 42);
        assert_eq!(state.rng_state.stream, 1);
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let a = GameState::new(GameConfig::default(), 42);
        let b = GameState::new(GameConfig::default(), 42);
        assert_eq!(a.pipes, b.pipes);
    }

    #[test]
    fn test_snapshot_resumes_rng() {
        let mut state = GameState::new(GameConfig::default(), 9);
        let json = serde_json::to_string(&state).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();

        state.spawn_pair();
        restored.spawn_pair();
        assert_eq!(state.pipes, restored.pipes);
    }
}
