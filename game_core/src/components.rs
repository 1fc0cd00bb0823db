use glam::IVec2;
use rand::Rng;

use crate::config::Config;
use crate::error::CoreError;
use crate::rect::Rect;
use crate::resources::{GameRng, ScoreTracker};

/// Player identity. Player one defends the left goal, player two the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    One = 1,
    Two = 2,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = CoreError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(CoreError::UnknownPlayer(other)),
        }
    }
}

/// Which of a player's two paddles. Back guards the goal, Forward is the
/// double-height paddle near midfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Back = 1,
    Forward = 2,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Back, Slot::Forward];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn other(self) -> Self {
        match self {
            Slot::Back => Slot::Forward,
            Slot::Forward => Slot::Back,
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = CoreError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Slot::Back),
            2 => Ok(Slot::Forward),
            other => Err(CoreError::UnknownSlot(other)),
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    pub size: IVec2,
    /// Position only integrates while rolling (false during the serve countdown)
    pub rolling: bool,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2, size: IVec2) -> Self {
        Self {
            pos,
            vel,
            size,
            rolling: true,
        }
    }

    /// Collision box, always anchored at `pos`
    pub fn collider(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Apply one edge-triggered velocity change (press and release are inverses)
    pub fn apply_velocity_delta(&mut self, delta: IVec2) {
        self.vel += delta;
    }

    pub fn set_rolling(&mut self, rolling: bool) {
        self.rolling = rolling;
    }

    pub fn integrate(&mut self) {
        if !self.rolling {
            return;
        }
        self.pos += self.vel;
    }

    /// Bounce off the play area edges and `obstacle`.
    ///
    /// Each axis is checked on its own: an offending axis has its last move
    /// reverted and its velocity negated. A corner hit reverses both.
    pub fn resolve_collision(&mut self, obstacle: &Rect, area: &Rect) -> bool {
        let mut collided = false;

        if self.pos.x < area.left()
            || self.pos.x + self.size.x > area.right()
            || self.collider().overlaps(obstacle)
        {
            self.pos.x -= self.vel.x;
            self.vel.x = -self.vel.x;
            collided = true;
        }

        if self.pos.y < area.top()
            || self.pos.y + self.size.y > area.bottom()
            || self.collider().overlaps(obstacle)
        {
            self.pos.y -= self.vel.y;
            self.vel.y = -self.vel.y;
            collided = true;
        }

        collided
    }

    /// Walk the ball back along its velocity until it sits inside `area`.
    /// Velocity keeps its sign.
    pub fn clamp_inside_bounds(&mut self, area: &Rect) {
        pull_back(
            &mut self.pos.x,
            self.vel.x,
            self.size.x,
            area.left(),
            area.right(),
        );
        pull_back(
            &mut self.pos.y,
            self.vel.y,
            self.size.y,
            area.top(),
            area.bottom(),
        );
    }

    pub fn collides_with_goal(&self, goal: &Rect) -> bool {
        self.collider().overlaps(goal)
    }

    /// Re-centre and serve.
    ///
    /// Speed per axis is drawn from `[min, min + span)` where the span grows
    /// with the stage but never reaches past the speed cap. The serve heads
    /// toward the leader's goal; a tied score serves either way.
    pub fn reset(&mut self, score: &ScoreTracker, config: &Config, rng: &mut GameRng) {
        self.pos = config.screen_center();

        let stage = i32::try_from(score.stage()).unwrap_or(i32::MAX);
        let span = config
            .ball_speed_span
            .saturating_add(stage)
            .min(config.ball_speed_cap - config.ball_speed_min)
            .max(1);

        let mut vx = config.ball_speed_min + rng.0.gen_range(0..span);
        let mut vy = config.ball_speed_min + rng.0.gen_range(0..span);

        match score.leading_player() {
            Some(PlayerId::One) => vx = -vx,
            Some(PlayerId::Two) => {}
            None => {
                if rng.0.gen_bool(0.5) {
                    vx = -vx;
                }
            }
        }
        if rng.0.gen_bool(0.5) {
            vy = -vy;
        }

        self.vel = IVec2::new(vx, vy);
        log::debug!(
            "ball served at stage {} with velocity ({}, {})",
            stage,
            vx,
            vy
        );
    }
}

/// Step `pos` back by `vel` until `[pos, pos + size]` fits in `[lo, hi]`.
/// Snaps to the nearest bound when stepping back cannot get closer.
fn pull_back(pos: &mut i32, vel: i32, size: i32, lo: i32, hi: i32) {
    let overshoot = |p: i32| (lo - p).max(0) + (p + size - hi).max(0);

    while overshoot(*pos) > 0 {
        let stepped = *pos - vel;
        if vel == 0 || overshoot(stepped) >= overshoot(*pos) {
            *pos = (*pos).min(hi - size).max(lo);
            break;
        }
        *pos = stepped;
    }
}

/// Paddle component - one of a player's two bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub player: PlayerId,
    pub slot: Slot,
    pub pos: IVec2,
    pub vel: IVec2,
    pub size: IVec2,
    /// Disabled paddles hold still but still block the ball
    pub enabled: bool,
}

impl Paddle {
    pub fn new(player: PlayerId, slot: Slot, pos: IVec2, size: IVec2) -> Self {
        Self {
            player,
            slot,
            pos,
            vel: IVec2::ZERO,
            size,
            enabled: slot == Slot::Back,
        }
    }

    pub fn collider(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn apply_velocity_delta(&mut self, delta: IVec2) {
        self.vel += delta;
    }

    pub fn integrate(&mut self) {
        if !self.enabled {
            return;
        }
        self.pos += self.vel;
    }

    /// Relocate without touching velocity
    pub fn set_position(&mut self, pos: IVec2) {
        self.pos = pos;
    }

    pub fn reset_velocity(&mut self) {
        self.vel = IVec2::ZERO;
    }

    /// Bounce the ball off this paddle, then stop the paddle at the edges
    /// or at the point of contact.
    pub fn resolve_collision(&mut self, ball: &mut Ball, area: &Rect) -> bool {
        let collided = ball.resolve_collision(&self.collider(), area);

        // A disabled paddle did not move this tick, so there is nothing to undo
        let rect = self.collider();
        if self.enabled && (rect.top() < area.top() || rect.bottom() > area.bottom() || collided)
        {
            self.pos.y -= self.vel.y;
        }

        collided
    }
}

/// Goal component - scoring zone defended by `owner`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub owner: PlayerId,
    pub rect: Rect,
}

impl Goal {
    pub fn new(owner: PlayerId, rect: Rect) -> Self {
        Self { owner, rect }
    }

    /// Credit the opponent and re-serve when the ball enters this goal
    pub fn check_scored(
        &self,
        ball: &mut Ball,
        score: &mut ScoreTracker,
        config: &Config,
        rng: &mut GameRng,
    ) -> bool {
        if !ball.collides_with_goal(&self.rect) {
            return false;
        }

        let scorer = self.owner.opponent();
        score.award(scorer);
        log::debug!(
            "player {} scored ({} : {})",
            scorer.id(),
            score.p1,
            score.p2
        );
        ball.reset(score, config, rng);
        true
    }
}

/// Wall component - fixed obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub rect: Rect,
}

impl Wall {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn collide(&self, ball: &mut Ball, area: &Rect) -> bool {
        ball.resolve_collision(&self.rect, area)
    }
}
