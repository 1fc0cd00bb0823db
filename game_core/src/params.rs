/// Game tuning parameters for the four-paddle Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (pixels)
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 720;
    pub const HEADER_MARGIN: i32 = 100; // Score band above the play area

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED_MIN: i32 = 5; // px per tick
    pub const BALL_SPEED_CAP: i32 = 15; // exclusive upper bound at any stage
    pub const BALL_SPEED_SPAN: i32 = 5; // span at stage 0, widened by stage
    pub const BALL_NUDGE: i32 = 5;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 20; // px per tick

    // Goal
    pub const GOAL_WIDTH: i32 = 40;
    pub const GOAL_HEIGHT: i32 = 300;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Timing (ms)
    pub const SERVE_COUNTDOWN_MS: u64 = 3000;
    pub const FRAME_INTERVAL_MS: u64 = 1000 / 60;
}
