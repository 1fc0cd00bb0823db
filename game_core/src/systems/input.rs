use glam::IVec2;
use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued commands to paddle and ball velocities
pub fn ingest_commands(world: &mut World, queue: &mut CommandQueue) {
    for command in queue.drain() {
        match command {
            Command::PaddleVelocity { player, dy } => {
                // Both paddles take the delta, only the enabled one moves
                for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                    if paddle.player == player {
                        paddle.apply_velocity_delta(IVec2::new(0, dy));
                    }
                }
            }
            Command::SelectActivePaddle { player, slot } => {
                select_active_paddle(world, player, slot);
            }
            Command::NudgeBall { dvx, dvy } => {
                for (_entity, ball) in world.query_mut::<&mut Ball>() {
                    ball.apply_velocity_delta(IVec2::new(dvx, dvy));
                }
            }
        }
    }
}

/// Enable exactly one of a player's paddles
pub fn select_active_paddle(world: &mut World, player: PlayerId, slot: Slot) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player == player {
            paddle.set_enabled(paddle.slot == slot);
        }
    }
}
