use glam::IVec2;

use crate::components::{PlayerId, Slot};
use crate::params::Params;
use crate::rect::Rect;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub header_margin: i32,
    pub ball_size: i32,
    pub ball_speed_min: i32,
    pub ball_speed_cap: i32,
    pub ball_speed_span: i32,
    pub ball_nudge: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub goal_width: i32,
    pub goal_height: i32,
    pub win_score: u8,
    pub serve_countdown_ms: u64,
    pub frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            header_margin: Params::HEADER_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed_min: Params::BALL_SPEED_MIN,
            ball_speed_cap: Params::BALL_SPEED_CAP,
            ball_speed_span: Params::BALL_SPEED_SPAN,
            ball_nudge: Params::BALL_NUDGE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            goal_width: Params::GOAL_WIDTH,
            goal_height: Params::GOAL_HEIGHT,
            win_score: Params::WIN_SCORE,
            serve_countdown_ms: Params::SERVE_COUNTDOWN_MS,
            frame_interval_ms: Params::FRAME_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Region the ball and paddles must stay inside (below the header band)
    pub fn play_area(&self) -> Rect {
        Rect::from_xywh(
            0,
            self.header_margin,
            self.screen_width,
            self.screen_height - self.header_margin,
        )
    }

    /// Where the ball's top-left corner goes on reset
    pub fn screen_center(&self) -> IVec2 {
        IVec2::new(self.screen_width / 2, self.screen_height / 2)
    }

    /// Paddle size for a slot. Forward paddles are twice as tall.
    pub fn paddle_size(&self, slot: Slot) -> IVec2 {
        match slot {
            Slot::Back => IVec2::new(self.paddle_width, self.paddle_height),
            Slot::Forward => IVec2::new(self.paddle_width, self.paddle_height * 2),
        }
    }

    /// Starting top-left corner of a paddle at the beginning of a match
    pub fn paddle_start(&self, player: PlayerId, slot: Slot) -> IVec2 {
        let y = self.screen_height / 2 - self.paddle_height / 2;
        let half = self.screen_width / 2;
        let x = match (player, slot) {
            (PlayerId::One, Slot::Back) => 50,
            (PlayerId::One, Slot::Forward) => half - 300,
            (PlayerId::Two, Slot::Back) => self.screen_width - 100,
            (PlayerId::Two, Slot::Forward) => half + 300,
        };
        IVec2::new(x, y)
    }

    /// Goal rectangle owned by a player (player one defends the left edge)
    pub fn goal_rect(&self, owner: PlayerId) -> Rect {
        let y = self.screen_height / 2 - self.goal_height / 2;
        let x = match owner {
            PlayerId::One => 0,
            PlayerId::Two => self.screen_width - self.goal_width,
        };
        Rect::from_xywh(x, y, self.goal_width, self.goal_height)
    }

    /// The header band doubles as the top wall
    pub fn top_wall_rect(&self) -> Rect {
        Rect::from_xywh(0, 0, self.screen_width, self.header_margin)
    }
}
