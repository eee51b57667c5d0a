//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (map scan order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod behavior;
pub mod collision;
pub mod maze;
pub mod state;
pub mod tick;

pub use actor::{Actor, Direction, Ghost, GhostKind};
pub use collision::overlaps;
pub use maze::{Maze, MazeError, REFERENCE_MAP};
pub use state::{GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
