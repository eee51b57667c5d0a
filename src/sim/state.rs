//! Game state and lifecycle transitions
//!
//! [`GameState`] owns every simulation entity and all scalar bookkeeping;
//! it is the only mutator. External collaborators read a [`Snapshot`] and
//! feed intents back through [`super::tick::TickInput`].

use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{STARTING_LIVES, TILE_SIZE};

use super::actor::{Actor, Ghost};
use super::behavior;
use super::maze::{Maze, MazeError, REFERENCE_MAP};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ticks are no-ops until unpaused
    Paused,
    /// Run ended; restart is the only way out
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving ghost direction picks
    pub(crate) rng: Pcg32,
    /// Immutable parsed map; every level loads from this template
    maze: Maze,
    /// Static geometry, never mutated during a tick
    pub walls: Vec<Actor>,
    /// Consumable score items, removed on contact
    pub pellets: Vec<Actor>,
    /// Roaming adversaries
    pub ghosts: Vec<Ghost>,
    pub player: Actor,
    pub score: u32,
    pub lives: u8,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

/// Read-only view of everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub player: &'a Actor,
    pub ghosts: &'a [Ghost],
    pub walls: &'a [Actor],
    pub pellets: &'a [Actor],
    pub score: u32,
    pub lives: u8,
    pub paused: bool,
    pub game_over: bool,
}

impl GameState {
    /// Build a game from a character map. The map is validated once here;
    /// level reloads reuse the parsed template and cannot fail.
    pub fn new(map: &[&str], tile_size: i32, seed: u64) -> Result<Self, MazeError> {
        let maze = Maze::parse(map, tile_size)?;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            walls: maze.walls.clone(),
            pellets: maze.pellets.clone(),
            ghosts: maze.ghosts.clone(),
            player: maze.player,
            maze,
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Playing,
            time_ticks: 0,
        };
        state.reset_positions();
        Ok(state)
    }

    /// Game on the reference 21x19 map
    pub fn reference(seed: u64) -> Self {
        Self::new(&REFERENCE_MAP, TILE_SIZE, seed).expect("reference map is valid")
    }

    /// Replace all entity collections from the map template. Callers must
    /// re-apply position resets afterward.
    pub(crate) fn load_level(&mut self) {
        self.walls = self.maze.walls.clone();
        self.pellets = self.maze.pellets.clone();
        self.ghosts = self.maze.ghosts.clone();
        self.player = self.maze.player;
    }

    /// Return the player and every ghost to spawn. The player stops dead;
    /// each ghost gets a fresh random direction, validated against walls.
    pub(crate) fn reset_positions(&mut self) {
        let tile_size = self.maze.tile_size();
        self.player.reset();
        self.player.vel = glam::IVec2::ZERO;

        let Self { ghosts, walls, rng, .. } = self;
        for ghost in ghosts.iter_mut() {
            ghost.actor.reset();
            let dir = behavior::random_direction(rng);
            ghost.actor.set_direction(dir, tile_size, walls);
        }
    }

    /// Full restart: fresh level, score 0, full lives, back to Playing.
    /// Works from any phase.
    pub fn restart(&mut self) {
        info!("restarting run (seed {})", self.seed);
        self.load_level();
        self.reset_positions();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::Playing;
    }

    /// Flip Playing <-> Paused. No effect once the run is over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            ghosts: &self.ghosts,
            walls: &self.walls,
            pellets: &self.pellets,
            score: self.score,
            lives: self.lives,
            paused: self.phase == GamePhase::Paused,
            game_over: self.phase == GamePhase::GameOver,
        }
    }

    pub fn tile_size(&self) -> i32 {
        self.maze.tile_size()
    }

    pub fn board_width(&self) -> i32 {
        self.maze.board_width()
    }

    pub fn board_height(&self) -> i32 {
        self.maze.board_height()
    }

    pub fn gate_y(&self) -> Option<i32> {
        self.maze.gate_y()
    }
}
