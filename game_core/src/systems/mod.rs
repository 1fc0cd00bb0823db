pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;

use crate::Ball;
use hecs::{Entity, World};

/// Copy out the ball so it can be mutated alongside other components
pub(crate) fn find_ball(world: &World) -> Option<(Entity, Ball)> {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(entity, ball)| (entity, *ball))
}

pub(crate) fn store_ball(world: &mut World, entity: Entity, ball: Ball) {
    if let Ok(mut stored) = world.get::<&mut Ball>(entity) {
        *stored = ball;
    }
}
