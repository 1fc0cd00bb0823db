use game_core::{
    reset_match, spawn_arena, step, Ball, Command, CommandQueue, Config, Events, FpsCounter,
    GameRng, Paddle, PlayerId, ScoreTracker, Stopwatch, Time,
};
use hecs::{Entity, World};

use crate::fsm::{Screen, ScreenAction, ScreenFsm, TransitionResult};
use crate::input::{HeldKeys, InputEvent, Key, KeyBindings};
use crate::menu::{ButtonAction, Menu};

/// Who controls player two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Standard,
    Bot,
}

/// Everything one run of the game owns. Passed by reference to whatever
/// needs it; there is no global state.
pub struct Session {
    pub world: World,
    pub config: Config,
    pub score: ScoreTracker,
    pub events: Events,
    pub commands: CommandQueue,
    pub rng: GameRng,
    pub time: Time,
    pub fsm: ScreenFsm,
    pub mode: GameMode,
    pub match_clock: Stopwatch,
    pub serve_countdown: Stopwatch,
    pub fps: FpsCounter,
    pub main_menu: Menu,
    pub result_menu: Menu,
    pub bindings: KeyBindings,
    pub held: HeldKeys,
    /// Set when the next entry into Play must start a new match
    fresh_game: bool,
    ball: Entity,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        let ball = spawn_arena(&mut world, &config);

        Self {
            world,
            score: ScoreTracker::new(config.win_score),
            events: Events::new(),
            commands: CommandQueue::new(),
            rng: GameRng::new(seed),
            time: Time::default(),
            fsm: ScreenFsm::new(),
            mode: GameMode::default(),
            match_clock: Stopwatch::new(),
            serve_countdown: Stopwatch::new(),
            fps: FpsCounter::new(),
            main_menu: Menu::main(&config),
            result_menu: Menu::result(&config),
            bindings: KeyBindings::new(&config),
            held: HeldKeys::new(),
            fresh_game: true,
            ball,
            config,
        }
    }

    pub fn screen(&self) -> Screen {
        self.fsm.state()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddles(&self) -> Vec<Paddle> {
        let mut paddles: Vec<Paddle> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .collect();
        paddles.sort_by_key(|p| (p.player, p.slot));
        paddles
    }

    /// True while the ball is held for a serve
    pub fn serve_pending(&self) -> bool {
        self.serve_countdown.is_running()
            && self.serve_countdown.elapsed_ms() < self.config.serve_countdown_ms
    }

    /// Feed one platform event
    pub fn handle_event(&mut self, event: InputEvent) {
        if event == InputEvent::QuitRequested {
            self.apply(ScreenAction::Quit);
            return;
        }

        match self.fsm.state() {
            Screen::Menu => {
                if let Some(action) = self.main_menu.handle_event(&event) {
                    self.activate(action);
                }
            }
            Screen::Result => {
                if let Some(action) = self.result_menu.handle_event(&event) {
                    self.activate(action);
                }
            }
            Screen::Play => self.handle_play_event(event),
            Screen::Exit => {}
        }
    }

    /// Button activation. Heading into Play always clears the score.
    pub fn activate(&mut self, action: ButtonAction) -> TransitionResult {
        if let Some(mode) = action.mode {
            self.mode = mode;
        }
        if action.target == Screen::Play {
            self.score.reset();
        }
        self.apply(ScreenAction::Open(action.target))
    }

    fn apply(&mut self, action: ScreenAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if !result.success {
            log::debug!(
                "ignored {:?} while on {:?}",
                result.action,
                result.from_state
            );
            return result;
        }

        log::info!(
            "screen {:?} -> {:?} ({:?})",
            result.from_state,
            result.to_state,
            result.action
        );
        if result.to_state == Screen::Play && self.fresh_game {
            self.start_new_game();
        }
        result
    }

    fn handle_play_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown {
                key: Key::Escape, ..
            } => {
                self.fresh_game = true;
                self.apply(ScreenAction::Escape);
            }
            InputEvent::KeyDown { key, repeat: false } => {
                if self.held.is_held(key) {
                    return;
                }
                if let Some(command) = self.bindings.translate(&event, self.mode) {
                    if !matches!(command, Command::SelectActivePaddle { .. }) {
                        self.held.press(key);
                    }
                    self.commands.push(command);
                }
            }
            InputEvent::KeyUp { key, repeat: false } => {
                // Pressed before this match began, or already undone by a re-serve
                if !self.held.release(key) {
                    log::debug!("release of {:?} without a matching press", key);
                    return;
                }
                if let Some(command) = self.bindings.translate(&event, self.mode) {
                    self.commands.push(command);
                }
            }
            _ => {}
        }
    }

    fn start_new_game(&mut self) {
        reset_match(&mut self.world, &self.config, &mut self.score, &mut self.rng);
        self.commands.clear();
        self.held.clear();
        self.match_clock.start();
        self.restart_serve_countdown();
        self.fresh_game = false;
        log::info!("new match ({:?})", self.mode);
    }

    fn restart_serve_countdown(&mut self) {
        self.serve_countdown.start();
        self.set_ball_rolling(false);
    }

    fn set_ball_rolling(&mut self, rolling: bool) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.set_rolling(rolling);
        }
    }

    /// Advance the session by one frame of `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: u64) {
        self.time.advance(dt_ms);
        let dt_ms = self.time.dt_ms;
        self.fps.advance(dt_ms);
        self.fps.count_frame();
        self.match_clock.advance(dt_ms);
        self.serve_countdown.advance(dt_ms);

        if self.fsm.is_playing() {
            self.update_play();
        }
    }

    fn update_play(&mut self) {
        self.update_serve_countdown();

        if self.mode == GameMode::Bot {
            drive_bot(&mut self.world, &self.config);
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.commands,
            &mut self.rng,
        );

        if self.events.goal_scored() {
            self.held.forget_nudges();
            self.restart_serve_countdown();
        }

        if let Some(winner) = self.score.winner() {
            log::info!(
                "player {} wins {} : {} after {} ms",
                winner.id(),
                self.score.p1,
                self.score.p2,
                self.match_clock.elapsed_ms()
            );
            self.fresh_game = true;
            self.match_clock.stop();
            self.apply(ScreenAction::GameOver);
        }
    }

    fn update_serve_countdown(&mut self) {
        if !self.serve_countdown.is_running() {
            return;
        }
        if self.serve_countdown.elapsed_ms() >= self.config.serve_countdown_ms {
            self.serve_countdown.stop();
            self.set_ball_rolling(true);
            log::debug!("serve");
        } else {
            self.set_ball_rolling(false);
        }
    }
}

/// Steer player two's active paddle toward the ball.
///
/// While the ball comes toward the paddle, aim at where it will cross the
/// paddle's column; otherwise drift back to the middle.
pub fn drive_bot(world: &mut World, config: &Config) {
    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return,
    };
    let deadzone = config.paddle_speed / 2;
    let center_y = config.play_area().center().y;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player != PlayerId::Two || !paddle.enabled {
            continue;
        }

        let paddle_mid = paddle.collider().center().y;
        let target_y = if ball.vel.x > 0 && ball.pos.x < paddle.pos.x {
            let ticks = (paddle.pos.x - ball.pos.x) / ball.vel.x.max(1);
            ball.collider().center().y + ball.vel.y * ticks
        } else {
            center_y
        };

        let diff = target_y - paddle_mid;
        paddle.vel.y = if diff > deadzone {
            config.paddle_speed
        } else if diff < -deadzone {
            -config.paddle_speed
        } else {
            0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Slot;
    use glam::IVec2;

    fn click(session: &mut Session, menu_label: &str) {
        let menu = match session.screen() {
            Screen::Result => &session.result_menu,
            _ => &session.main_menu,
        };
        let at = menu.button_center(menu_label).unwrap();
        session.handle_event(InputEvent::PointerDown { x: at.x, y: at.y });
    }

    #[test]
    fn test_start_resets_match() {
        let mut session = Session::new(1);
        session.score.award(PlayerId::One);

        click(&mut session, "Standard Mode");

        assert_eq!(session.screen(), Screen::Play);
        assert_eq!(session.mode, GameMode::Standard);
        assert_eq!((session.score.p1, session.score.p2), (0, 0));
        let ball = session.ball().unwrap();
        assert_eq!(ball.pos, session.config.screen_center());
        assert!(!ball.rolling);
        assert!(session.serve_pending());
        assert!(session.match_clock.is_running());
    }

    #[test]
    fn test_escape_returns_to_menu_and_next_entry_is_fresh() {
        let mut session = Session::new(2);
        click(&mut session, "Standard Mode");
        session.handle_event(InputEvent::key_down(Key::W));
        session.tick(16);

        session.handle_event(InputEvent::key_down(Key::Escape));
        assert_eq!(session.screen(), Screen::Menu);

        click(&mut session, "Standard Mode");
        for paddle in session.paddles() {
            assert_eq!(paddle.pos, session.config.paddle_start(paddle.player, paddle.slot));
            assert_eq!(paddle.vel, IVec2::ZERO);
        }
    }

    #[test]
    fn test_keys_ignored_outside_play() {
        let mut session = Session::new(3);
        session.handle_event(InputEvent::key_down(Key::W));
        assert!(session.commands.is_empty());
    }

    #[test]
    fn test_selecting_paddle_through_keys() {
        let mut session = Session::new(4);
        click(&mut session, "Standard Mode");
        session.handle_event(InputEvent::key_down(Key::Num2));
        session.tick(16);

        let enabled: Vec<(PlayerId, Slot)> = session
            .paddles()
            .iter()
            .filter(|p| p.enabled)
            .map(|p| (p.player, p.slot))
            .collect();
        assert_eq!(
            enabled,
            vec![(PlayerId::One, Slot::Forward), (PlayerId::Two, Slot::Back)]
        );
    }

    #[test]
    fn test_tick_advances_frame_time() {
        let mut session = Session::new(7);
        session.tick(16);
        session.tick(17);
        assert_eq!(session.time.dt_ms, 17);
        assert_eq!(session.time.now_ms, 33);
        assert_eq!(session.match_clock.elapsed_ms(), 0, "no match running yet");
    }

    #[test]
    fn test_selection_keys_are_not_held() {
        let mut session = Session::new(8);
        click(&mut session, "Standard Mode");
        session.handle_event(InputEvent::key_down(Key::Num2));
        session.handle_event(InputEvent::key_down(Key::W));
        assert!(!session.held.is_held(Key::Num2));
        assert!(session.held.is_held(Key::W));
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut session = Session::new(5);
        click(&mut session, "Bot Mode");
        assert_eq!(session.mode, GameMode::Bot);
        session.handle_event(InputEvent::QuitRequested);
        assert!(!session.is_running());
        assert_eq!(session.screen(), Screen::Exit);
    }

    #[test]
    fn test_exit_button() {
        let mut session = Session::new(6);
        click(&mut session, "Exit");
        assert!(!session.is_running());
    }

    #[test]
    fn test_bot_tracks_incoming_ball() {
        let config = Config::new();
        let mut world = World::new();
        spawn_arena(&mut world, &config);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = IVec2::new(600, 150);
            ball.vel = IVec2::new(10, 0);
        }

        drive_bot(&mut world, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            let expected = match (paddle.player, paddle.slot) {
                (PlayerId::Two, Slot::Back) => -config.paddle_speed,
                _ => 0,
            };
            assert_eq!(paddle.vel.y, expected);
        }
    }

    #[test]
    fn test_bot_returns_to_center_when_ball_leaves() {
        let config = Config::new();
        let mut world = World::new();
        spawn_arena(&mut world, &config);
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.pos.y = 600;
        }
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.vel = IVec2::new(-10, 4);
        }

        drive_bot(&mut world, &config);

        let bot = world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| *p)
            .find(|p| p.player == PlayerId::Two && p.slot == Slot::Back)
            .unwrap();
        assert_eq!(bot.vel.y, -config.paddle_speed);
    }
}
