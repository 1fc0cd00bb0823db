//! Keyboard and pointer input handling

use game_core::{Command, Config, PlayerId, Slot};
use glam::IVec2;

use crate::simulation::GameMode;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    I,
    J,
    K,
    L,
    Num1,
    Num2,
    Num8,
    Num9,
    Escape,
    Other,
}

impl Key {
    /// I/J/K/L push the ball rather than a paddle
    pub fn is_nudge(self) -> bool {
        matches!(self, Key::I | Key::J | Key::K | Key::L)
    }
}

/// Discrete, edge-triggered events handed over by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key, repeat: bool },
    PointerMove { x: i32, y: i32 },
    PointerDown { x: i32, y: i32 },
    PointerUp { x: i32, y: i32 },
    QuitRequested,
}

impl InputEvent {
    pub fn key_down(key: Key) -> Self {
        InputEvent::KeyDown { key, repeat: false }
    }

    pub fn key_up(key: Key) -> Self {
        InputEvent::KeyUp { key, repeat: false }
    }

    pub fn pointer(&self) -> Option<IVec2> {
        match *self {
            InputEvent::PointerMove { x, y }
            | InputEvent::PointerDown { x, y }
            | InputEvent::PointerUp { x, y } => Some(IVec2::new(x, y)),
            _ => None,
        }
    }
}

/// Translates key edges into simulation commands.
///
/// Player one: W/S to move, 1/2 to pick the back or forward paddle.
/// Player two: Up/Down to move, 8/9 to pick a paddle.
/// I/J/K/L nudge the ball.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    paddle_speed: i32,
    nudge: i32,
}

impl KeyBindings {
    pub fn new(config: &Config) -> Self {
        Self {
            paddle_speed: config.paddle_speed,
            nudge: config.ball_nudge,
        }
    }

    /// Command for a key event, if any. Auto-repeat is dropped so that a
    /// press and its release stay exact inverses.
    pub fn translate(&self, event: &InputEvent, mode: GameMode) -> Option<Command> {
        let command = match *event {
            InputEvent::KeyDown { key, repeat: false } => self.handle_key_down(key),
            InputEvent::KeyUp { key, repeat: false } => self.handle_key_up(key),
            _ => None,
        }?;

        // The bot owns player two's paddles
        if mode == GameMode::Bot && command_player(&command) == Some(PlayerId::Two) {
            log::debug!("bot mode ignores {:?}", command);
            return None;
        }
        Some(command)
    }

    /// Handle key down event
    fn handle_key_down(&self, key: Key) -> Option<Command> {
        match key {
            Key::Num1 => Some(select(PlayerId::One, Slot::Back)),
            Key::Num2 => Some(select(PlayerId::One, Slot::Forward)),
            Key::Num8 => Some(select(PlayerId::Two, Slot::Back)),
            Key::Num9 => Some(select(PlayerId::Two, Slot::Forward)),
            _ => self.velocity_delta(key, 1),
        }
    }

    /// Handle key up event
    fn handle_key_up(&self, key: Key) -> Option<Command> {
        self.velocity_delta(key, -1)
    }

    fn velocity_delta(&self, key: Key, sign: i32) -> Option<Command> {
        let speed = self.paddle_speed * sign;
        let nudge = self.nudge * sign;
        match key {
            Key::W => Some(paddle(PlayerId::One, -speed)),
            Key::S => Some(paddle(PlayerId::One, speed)),
            Key::Up => Some(paddle(PlayerId::Two, -speed)),
            Key::Down => Some(paddle(PlayerId::Two, speed)),
            Key::I => Some(Command::NudgeBall { dvx: 0, dvy: -nudge }),
            Key::K => Some(Command::NudgeBall { dvx: 0, dvy: nudge }),
            Key::J => Some(Command::NudgeBall { dvx: -nudge, dvy: 0 }),
            Key::L => Some(Command::NudgeBall { dvx: nudge, dvy: 0 }),
            _ => None,
        }
    }
}

/// Keys whose press was turned into a velocity delta and whose release has
/// not been seen yet. A release only counts when its press did, so every
/// delta is undone exactly once.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: Vec<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn press(&mut self, key: Key) {
        if !self.is_held(key) {
            self.keys.push(key);
        }
    }

    /// Returns true if the key was held
    pub fn release(&mut self, key: Key) -> bool {
        let before = self.keys.len();
        self.keys.retain(|held| *held != key);
        self.keys.len() != before
    }

    /// Drop held nudge keys. Their deltas went away with the ball's old
    /// velocity when it was re-served.
    pub fn forget_nudges(&mut self) {
        self.keys.retain(|held| !held.is_nudge());
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn paddle(player: PlayerId, dy: i32) -> Command {
    Command::PaddleVelocity { player, dy }
}

fn select(player: PlayerId, slot: Slot) -> Command {
    Command::SelectActivePaddle { player, slot }
}

fn command_player(command: &Command) -> Option<PlayerId> {
    match *command {
        Command::PaddleVelocity { player, .. } | Command::SelectActivePaddle { player, .. } => {
            Some(player)
        }
        Command::NudgeBall { .. } => None,
    }
}
