//! Adversary direction selection
//!
//! Ghosts roam by dead reckoning: keep going until something blocks the way,
//! then pick a new cardinal direction at random. The gate row is the one
//! exception, forcing horizontal movers up and out of the spawn cluster.
//! This is the only source of non-determinism in the simulation, so the RNG
//! is always injected.

use rand::Rng;

use super::actor::{Actor, Direction, Ghost};
use super::collision::overlaps;

/// Pick one of the four cardinal directions uniformly at random
pub fn random_direction<R: Rng>(rng: &mut R) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}

/// Advance one ghost for this tick.
///
/// On the gate row a horizontal mover is forced up; an accepted turn is the
/// whole update for the tick. Under a wall the turn is rejected and the
/// ghost keeps sliding along the gate row until it reaches an opening.
/// Otherwise the ghost steps along its velocity, and if the step hits a
/// wall or a horizontal board edge it is undone and a random replacement
/// direction is issued. The replacement is validated like any other
/// direction change, so a blocked pick leaves the ghost stationary for the
/// tick.
pub fn update_ghost<R: Rng>(
    ghost: &mut Ghost,
    walls: &[Actor],
    board_width: i32,
    gate_y: Option<i32>,
    tile_size: i32,
    rng: &mut R,
) {
    let actor = &mut ghost.actor;

    if gate_y == Some(actor.pos.y)
        && actor.dir.is_horizontal()
        && actor.set_direction(Direction::Up, tile_size, walls)
    {
        return;
    }

    actor.step();
    let blocked = actor.pos.x <= 0
        || actor.pos.x + actor.size.x >= board_width
        || walls.iter().any(|wall| overlaps(actor, wall));
    if blocked {
        actor.step_back();
        let next = random_direction(rng);
        actor.set_direction(next, tile_size, walls);
    }
}
