pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod rect;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use rect::*;
pub use resources::*;

use glam::IVec2;
use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut ScoreTracker,
    events: &mut Events,
    commands: &mut CommandQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest commands (velocity deltas, paddle selection)
    ingest_commands(world, commands);

    // 2. Move ball, then paddles
    move_ball(world);
    move_paddles(world);

    // 3. Collisions (ball vs paddles, walls, play area edges)
    check_collisions(world, config, events);

    // 4. Goals (scores and re-serves)
    check_goals(world, config, score, events, rng);
}

/// Put every paddle back on its starting spot, clear the score and re-serve
/// a frozen ball. Used when a fresh match begins.
pub fn reset_match(
    world: &mut World,
    config: &Config,
    score: &mut ScoreTracker,
    rng: &mut GameRng,
) {
    score.reset();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.set_position(config.paddle_start(paddle.player, paddle.slot));
        paddle.reset_velocity();
        paddle.set_enabled(paddle.slot == Slot::Back);
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(score, config, rng);
        ball.set_rolling(false);
    }
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    player: PlayerId,
    slot: Slot,
) -> hecs::Entity {
    let paddle = Paddle::new(
        player,
        slot,
        config.paddle_start(player, slot),
        config.paddle_size(slot),
    );
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: IVec2, vel: IVec2, size: i32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, IVec2::splat(size)),))
}

/// Helper to create the goal a player defends
pub fn create_goal(world: &mut World, config: &Config, owner: PlayerId) -> hecs::Entity {
    world.spawn((Goal::new(owner, config.goal_rect(owner)),))
}

pub fn create_wall(world: &mut World, rect: Rect) -> hecs::Entity {
    world.spawn((Wall::new(rect),))
}

/// Spawn the full arena: four paddles, two goals, the top wall and a ball
/// waiting at the centre. Returns the ball entity.
pub fn spawn_arena(world: &mut World, config: &Config) -> hecs::Entity {
    for player in PlayerId::ALL {
        for slot in Slot::ALL {
            create_paddle(world, config, player, slot);
        }
        create_goal(world, config, player);
    }
    create_wall(world, config.top_wall_rect());

    let ball = create_ball(world, config.screen_center(), IVec2::ZERO, config.ball_size);
    if let Ok(mut b) = world.get::<&mut Ball>(ball) {
        b.set_rolling(false);
    }
    ball
}
