//! Simulation entities and the movement/collision engine
//!
//! Every positioned thing in the maze (player, ghost, wall, pellet) is an
//! [`Actor`]. Motion is axis-aligned: velocity is zero or a quarter tile on
//! exactly one axis, derived from the facing [`Direction`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::overlaps;

/// Facing direction of a moving actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four cardinal directions, in the order the behavior controller
    /// samples them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Velocity for this direction: a quarter tile along one axis, zero on
    /// the other
    pub fn velocity(self, tile_size: i32) -> IVec2 {
        let step = tile_size / 4;
        match self {
            Direction::Up => IVec2::new(0, -step),
            Direction::Down => IVec2::new(0, step),
            Direction::Left => IVec2::new(-step, 0),
            Direction::Right => IVec2::new(step, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A positioned, sized entity with optional motion state.
///
/// Walls and pellets never move; their velocity stays zero. The spawn
/// position is the immutable reset origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: IVec2,
    pub size: IVec2,
    pub vel: IVec2,
    pub dir: Direction,
    pub spawn: IVec2,
}

impl Actor {
    /// Create a stationary actor at `pos`, facing right
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self {
            pos,
            size,
            vel: IVec2::ZERO,
            dir: Direction::Right,
            spawn: pos,
        }
    }

    /// Request a direction change, the single point where "is this move
    /// legal" is decided.
    ///
    /// The new velocity is applied and the actor takes one tentative step.
    /// If that step overlaps any wall the step, velocity, and direction all
    /// roll back and the actor is left exactly as before. Returns whether
    /// the change was accepted.
    pub fn set_direction(&mut self, direction: Direction, tile_size: i32, walls: &[Actor]) -> bool {
        let prev_dir = self.dir;
        let prev_vel = self.vel;
        self.dir = direction;
        self.vel = direction.velocity(tile_size);
        self.pos += self.vel;
        if walls.iter().any(|wall| overlaps(self, wall)) {
            self.pos -= self.vel;
            self.dir = prev_dir;
            self.vel = prev_vel;
            return false;
        }
        true
    }

    /// Move one step along the current velocity, reverting the step if it
    /// runs into a wall. Direction and velocity stay intact either way: the
    /// actor keeps pressing into the wall until a new direction is issued.
    pub fn advance(&mut self, walls: &[Actor]) {
        self.step();
        if walls.iter().any(|wall| overlaps(self, wall)) {
            self.step_back();
        }
    }

    /// Teleport across the horizontal board edges (the tunnel rows).
    /// Vertical wrap is not supported.
    pub fn wrap_horizontal(&mut self, board_width: i32) {
        if self.pos.x < 0 {
            self.pos.x = board_width - self.size.x;
        } else if self.pos.x > board_width - self.size.x {
            self.pos.x = 0;
        }
    }

    /// Return to the spawn position. Velocity and direction are left for the
    /// caller to reissue.
    pub fn reset(&mut self) {
        self.pos = self.spawn;
    }

    pub(crate) fn step(&mut self) {
        self.pos += self.vel;
    }

    pub(crate) fn step_back(&mut self) {
        self.pos -= self.vel;
    }
}

/// The four adversary identities. Opaque to the simulation; renderers key
/// colors or sprites off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostKind {
    Blue,
    Orange,
    Pink,
    Red,
}

/// A roaming adversary: an actor plus its identity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ghost {
    pub actor: Actor,
    pub kind: GhostKind,
}
