//! Maze Chase - a tile-based maze-chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, adversary
//!   behavior, game state machine)
//!
//! Rendering and input live in the binary; the library exposes a read-only
//! [`sim::Snapshot`] for drawing and consumes [`sim::TickInput`] intents.

pub mod sim;

pub use sim::{GamePhase, GameState, Snapshot, TickInput, tick};

/// Game configuration constants (the reference arcade setup)
pub mod consts {
    /// Side length of one map tile in pixels
    pub const TILE_SIZE: i32 = 32;
    /// Fixed simulation cadence: one tick every 50 ms (20 Hz)
    pub const TICK_INTERVAL_MS: u64 = 50;
    /// Points awarded per pellet eaten
    pub const PELLET_SCORE: u32 = 10;
    /// Bonus awarded for clearing a level
    pub const LEVEL_BONUS: u32 = 100;
    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;
}
