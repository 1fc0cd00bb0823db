use crate::components::{PlayerId, Slot};
use crate::params::Params;

/// Frame time resource
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt_ms: u64,  // Delta time for this frame
    pub now_ms: u64, // Total elapsed time
}

impl Time {
    pub fn advance(&mut self, dt_ms: u64) {
        self.dt_ms = dt_ms;
        self.now_ms += dt_ms;
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    pub p1: u8,
    pub p2: u8,
    pub win_score: u8,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(Params::WIN_SCORE)
    }
}

impl ScoreTracker {
    pub fn new(win_score: u8) -> Self {
        Self {
            p1: 0,
            p2: 0,
            win_score,
        }
    }

    pub fn get(&self, player: PlayerId) -> u8 {
        match player {
            PlayerId::One => self.p1,
            PlayerId::Two => self.p2,
        }
    }

    pub fn award(&mut self, player: PlayerId) {
        match player {
            PlayerId::One => self.p1 = self.p1.saturating_add(1),
            PlayerId::Two => self.p2 = self.p2.saturating_add(1),
        }
    }

    /// Raw-id form used by the UI layer. Unknown ids are ignored.
    pub fn plus_score(&mut self, player_id: u8) {
        match PlayerId::try_from(player_id) {
            Ok(player) => self.award(player),
            Err(err) => log::debug!("ignoring score for {}", err),
        }
    }

    /// `None` when tied
    pub fn leading_player(&self) -> Option<PlayerId> {
        match self.p1.cmp(&self.p2) {
            std::cmp::Ordering::Greater => Some(PlayerId::One),
            std::cmp::Ordering::Less => Some(PlayerId::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        if self.p1 >= self.win_score {
            Some(PlayerId::One)
        } else if self.p2 >= self.win_score {
            Some(PlayerId::Two)
        } else {
            None
        }
    }

    /// Difficulty stage, driven by the trailing player's score
    pub fn stage(&self) -> u32 {
        u32::from(self.p1.min(self.p2)) + 1
    }

    pub fn reset(&mut self) {
        self.p1 = 0;
        self.p2 = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub p1_scored: bool,
    pub p2_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.p1_scored = false;
        self.p2_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn goal_scored(&self) -> bool {
        self.p1_scored || self.p2_scored
    }

    pub fn record_goal(&mut self, scorer: PlayerId) {
        match scorer {
            PlayerId::One => self.p1_scored = true,
            PlayerId::Two => self.p2_scored = true,
        }
    }
}

/// Elapsed-time counter with start/stop/reset, advanced by the frame loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_ms: u64,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from zero
    pub fn start(&mut self) {
        self.elapsed_ms = 0;
        self.running = true;
    }

    /// Freeze the current reading
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.running = false;
    }

    pub fn advance(&mut self, dt_ms: u64) {
        if self.running {
            self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Average frames per second since the counter started
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsCounter {
    frames: u64,
    clock: Stopwatch,
}

impl FpsCounter {
    const ABSURD_FPS: f32 = 2_000_000.0;

    pub fn new() -> Self {
        let mut clock = Stopwatch::new();
        clock.start();
        Self { frames: 0, clock }
    }

    pub fn advance(&mut self, dt_ms: u64) {
        self.clock.advance(dt_ms);
    }

    pub fn count_frame(&mut self) {
        self.frames += 1;
    }

    pub fn average(&self) -> f32 {
        let seconds = self.clock.elapsed_ms() as f32 / 1000.0;
        let fps = self.frames as f32 / seconds;
        // No time elapsed yet gives inf or NaN
        if !fps.is_finite() || fps > Self::ABSURD_FPS {
            0.0
        } else {
            fps
        }
    }
}

/// Player input, already translated from raw keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Vertical velocity change for both of a player's paddles
    PaddleVelocity { player: PlayerId, dy: i32 },
    /// Make `slot` the player's only moving paddle
    SelectActivePaddle { player: PlayerId, slot: Slot },
    /// Velocity change applied straight to the ball
    NudgeBall { dvx: i32, dvy: i32 },
}

/// Commands waiting for the next simulation step
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pub commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}
