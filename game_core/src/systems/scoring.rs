use crate::{Config, Events, GameRng, Goal, ScoreTracker};
use hecs::World;

use super::{find_ball, store_ball};

/// Check whether the ball entered a goal. Goals are checked left to right and
/// at most one goal counts per tick.
pub fn check_goals(
    world: &mut World,
    config: &Config,
    score: &mut ScoreTracker,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    let (ball_entity, mut ball) = match find_ball(world) {
        Some(found) => found,
        None => return false,
    };

    let mut goals: Vec<Goal> = world.query::<&Goal>().iter().map(|(_e, g)| *g).collect();
    goals.sort_by_key(|goal| goal.owner);

    let scored = goals
        .iter()
        .find(|goal| goal.check_scored(&mut ball, score, config, rng))
        .map(|goal| goal.owner.opponent());

    match scored {
        Some(scorer) => {
            events.record_goal(scorer);
            store_ball(world, ball_entity, ball);
            true
        }
        None => false,
    }
}
