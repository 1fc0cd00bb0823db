use crate::{Config, Events, Paddle, PlayerId, Slot, Wall};
use hecs::{Entity, World};

use super::{find_ball, store_ball};

/// Resolve ball collisions against paddles and walls, then pull the ball
/// back inside the play area if it ended up outside.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let (ball_entity, mut ball) = match find_ball(world) {
        Some(found) => found,
        None => return, // No ball in world
    };
    let area = config.play_area();

    // Fixed order: player one before player two, back slot before forward
    let mut paddles: Vec<(Entity, PlayerId, Slot)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(entity, paddle)| (entity, paddle.player, paddle.slot))
        .collect();
    paddles.sort_by_key(|(_entity, player, slot)| (*player, *slot));

    for (entity, _player, _slot) in paddles {
        if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
            if paddle.resolve_collision(&mut ball, &area) {
                events.ball_hit_paddle = true;
            }
        }
    }

    for (_entity, wall) in world.query::<&Wall>().iter() {
        if wall.collide(&mut ball, &area) {
            events.ball_hit_wall = true;
        }
    }

    ball.clamp_inside_bounds(&area);
    store_ball(world, ball_entity, ball);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, create_wall, Ball, Config, Events};
    use glam::IVec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        let paddle = create_paddle(&mut world, &config, PlayerId::One, Slot::Back);
        // Back paddle spans x 50..70, y 310..410
        let ball = create_ball(&mut world, IVec2::new(64, 340), IVec2::new(-8, 3), 20);

        check_collisions(&mut world, &config, &mut events);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert!(ball.vel.x > 0, "Ball should bounce right off the paddle");
        assert_eq!(ball.pos.x, 72);
        assert!(events.ball_hit_paddle);
        assert_eq!(world.get::<&Paddle>(paddle).unwrap().pos.y, 310);
    }

    #[test]
    fn test_disabled_paddle_still_blocks() {
        let (mut world, config, mut events) = setup_world();
        // Forward paddle starts disabled, spans x 940..960, y 310..510
        create_paddle(&mut world, &config, PlayerId::Two, Slot::Forward);
        let ball = create_ball(&mut world, IVec2::new(925, 450), IVec2::new(9, 0), 20);

        check_collisions(&mut world, &config, &mut events);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.vel.x, -9);
        assert_eq!(ball.pos.x, 916);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_stops_at_contact() {
        let (mut world, config, mut events) = setup_world();
        let paddle = create_paddle(&mut world, &config, PlayerId::One, Slot::Back);
        // Paddle moved down 20 onto a ball sitting just below it
        {
            let mut p = world.get::<&mut Paddle>(paddle).unwrap();
            p.apply_velocity_delta(IVec2::new(0, 20));
            p.integrate();
        }
        create_ball(&mut world, IVec2::new(55, 420), IVec2::new(0, -6), 20);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().pos.y, 310);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_bottom_edge() {
        let (mut world, config, mut events) = setup_world();
        create_wall(&mut world, config.top_wall_rect());
        let ball = create_ball(&mut world, IVec2::new(600, 705), IVec2::new(6, 8), 20);

        check_collisions(&mut world, &config, &mut events);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.vel, IVec2::new(6, -8));
        assert_eq!(ball.pos.y, 697);
        assert!(events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_pulled_back_inside_area() {
        let (mut world, config, mut events) = setup_world();
        // Far outside on the right with no obstacle to bounce it
        let ball = create_ball(&mut world, IVec2::new(1300, 400), IVec2::new(10, 0), 20);

        check_collisions(&mut world, &config, &mut events);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert!(config.play_area().encloses(&ball.collider()));
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, PlayerId::One, Slot::Back);

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
