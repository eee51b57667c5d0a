//! Maze loading
//!
//! Parses a fixed character grid into wall, pellet, and ghost collections
//! plus the player spawn. Malformed maps are a configuration error rejected
//! up front; nothing at tick time can fail.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::actor::{Actor, Ghost, GhostKind};

/// The reference 21x19 map.
///
/// `X` wall, `O` open skip tile, `P` player spawn, space pellet, and the
/// ghost markers `b` blue, `o` orange, `p` pink, `r` red.
pub const REFERENCE_MAP: [&str; 21] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

/// Map validation failures, all caught at load time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("map has no rows")]
    Empty,
    #[error("row {row} is {len} tiles wide, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("unknown tile '{tile}' at row {row}, column {col}")]
    UnknownTile { tile: char, row: usize, col: usize },
    #[error("map has no player spawn")]
    MissingPlayer,
    #[error("map has {0} player spawns, expected exactly one")]
    DuplicatePlayer(usize),
}

/// A parsed map: the immutable template every level is loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    tile_size: i32,
    rows: usize,
    cols: usize,
    pub walls: Vec<Actor>,
    pub pellets: Vec<Actor>,
    pub ghosts: Vec<Ghost>,
    pub player: Actor,
    gate_y: Option<i32>,
}

impl Maze {
    /// Parse a character grid into entity collections.
    ///
    /// Entities come out in map scan order (row-major), so iteration over
    /// them is reproducible. The gate row is the bottom row of the ghost
    /// spawn cluster, `None` when the map has no ghosts.
    pub fn parse(map: &[&str], tile_size: i32) -> Result<Self, MazeError> {
        if map.is_empty() {
            return Err(MazeError::Empty);
        }
        let cols = map[0].chars().count();

        let mut walls = Vec::new();
        let mut pellets = Vec::new();
        let mut ghosts = Vec::new();
        let mut players = Vec::new();

        // Pellets are small sub-tiles centered in their cell
        let pellet_size = tile_size / 8;
        let pellet_offset = (tile_size - pellet_size) / 2;

        for (row, line) in map.iter().enumerate() {
            let len = line.chars().count();
            if len != cols {
                return Err(MazeError::RaggedRow { row, len, expected: cols });
            }
            for (col, tile) in line.chars().enumerate() {
                let pos = IVec2::new(col as i32 * tile_size, row as i32 * tile_size);
                let kind = match tile {
                    'X' => {
                        walls.push(Actor::new(pos, IVec2::splat(tile_size)));
                        continue;
                    }
                    ' ' => {
                        let center = pos + IVec2::splat(pellet_offset);
                        pellets.push(Actor::new(center, IVec2::splat(pellet_size)));
                        continue;
                    }
                    'P' => {
                        players.push(Actor::new(pos, IVec2::splat(tile_size)));
                        continue;
                    }
                    'O' => continue,
                    'b' => GhostKind::Blue,
                    'o' => GhostKind::Orange,
                    'p' => GhostKind::Pink,
                    'r' => GhostKind::Red,
                    other => {
                        return Err(MazeError::UnknownTile { tile: other, row, col });
                    }
                };
                ghosts.push(Ghost {
                    actor: Actor::new(pos, IVec2::splat(tile_size)),
                    kind,
                });
            }
        }

        let player = match players.len() {
            0 => return Err(MazeError::MissingPlayer),
            1 => players[0],
            n => return Err(MazeError::DuplicatePlayer(n)),
        };

        let gate_y = ghosts.iter().map(|g| g.actor.spawn.y).max();

        Ok(Self {
            tile_size,
            rows: map.len(),
            cols,
            walls,
            pellets,
            ghosts,
            player,
            gate_y,
        })
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn board_width(&self) -> i32 {
        self.cols as i32 * self.tile_size
    }

    pub fn board_height(&self) -> i32 {
        self.rows as i32 * self.tile_size
    }

    /// Pixel y of the row ghosts are forced to turn up out of
    pub fn gate_y(&self) -> Option<i32> {
        self.gate_y
    }
}
