use crate::{Ball, Paddle};
use hecs::World;

/// Move ball based on velocity (frozen while not rolling)
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.integrate();
    }
}

/// Move enabled paddles based on velocity
pub fn move_paddles(world: &mut World) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.integrate();
    }
}
