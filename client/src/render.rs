//! Renderer collaborator
//!
//! The session never touches textures or fonts. Each frame it hands the
//! renderer one call per drawable with its top-left position.

use game_core::{Goal, Wall};
use glam::IVec2;

use crate::fsm::Screen;
use crate::hud::Hud;
use crate::menu::{ButtonState, Menu};
use crate::simulation::Session;

/// Something to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite<'a> {
    Ball,
    /// `tall` paddles are drawn as two stacked bars
    Paddle { enabled: bool, tall: bool },
    Goal { size: IVec2 },
    Wall { size: IVec2 },
    Button { label: &'a str, state: ButtonState },
    Label(&'a str),
}

pub trait Renderer {
    /// Load assets. Failures are reported with `false` and a log message,
    /// never passed on to the simulation.
    fn load(&mut self) -> bool {
        true
    }

    fn render(&mut self, sprite: Sprite<'_>, at: IVec2);
}

/// Emit the draw calls for the current screen
pub fn render_frame<R: Renderer>(session: &Session, renderer: &mut R) {
    let width = session.config.screen_width;
    match session.screen() {
        Screen::Menu => render_menu(&session.main_menu, width, renderer),
        Screen::Play => render_play(session, renderer),
        Screen::Result => {
            let hud = Hud::from_session(session);
            renderer.render(Sprite::Label(&hud.score), IVec2::new(width / 2, 250));
            if let Some(winner) = &hud.winner {
                renderer.render(Sprite::Label(winner), IVec2::new(width / 2, 300));
            }
            render_menu(&session.result_menu, width, renderer);
        }
        Screen::Exit => {}
    }
}

fn render_menu<R: Renderer>(menu: &Menu, width: i32, renderer: &mut R) {
    renderer.render(Sprite::Label(menu.title), IVec2::new(width / 2, 200));
    for button in &menu.buttons {
        renderer.render(
            Sprite::Button {
                label: button.label,
                state: button.state,
            },
            button.rect.min,
        );
    }
}

fn render_play<R: Renderer>(session: &Session, renderer: &mut R) {
    let config = &session.config;

    for paddle in session.paddles() {
        renderer.render(
            Sprite::Paddle {
                enabled: paddle.enabled,
                tall: paddle.size.y > config.paddle_height,
            },
            paddle.pos,
        );
    }
    for (_e, goal) in session.world.query::<&Goal>().iter() {
        renderer.render(Sprite::Goal { size: goal.rect.size }, goal.rect.min);
    }
    for (_e, wall) in session.world.query::<&Wall>().iter() {
        renderer.render(Sprite::Wall { size: wall.rect.size }, wall.rect.min);
    }
    if let Some(ball) = session.ball() {
        renderer.render(Sprite::Ball, ball.pos);
    }

    let hud = Hud::from_session(session);
    let width = config.screen_width;
    renderer.render(Sprite::Label(&hud.score), IVec2::new(width / 2, 25));
    renderer.render(Sprite::Label(&hud.fps), IVec2::new(width, 0));
    renderer.render(Sprite::Label(&hud.clock), IVec2::new(width, 50));
    if let Some(countdown) = &hud.countdown {
        renderer.render(Sprite::Label(countdown), config.screen_center());
    }
}

/// Headless renderer that only logs and counts draw calls
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub draws: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, sprite: Sprite<'_>, at: IVec2) {
        self.draws += 1;
        log::trace!("draw {:?} at ({}, {})", sprite, at.x, at.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, IVec2)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, sprite: Sprite<'_>, at: IVec2) {
            self.calls.push((format!("{:?}", sprite), at));
        }
    }

    #[test]
    fn test_menu_draws_title_and_buttons() {
        let session = Session::new(21);
        let mut recorder = Recorder::default();
        render_frame(&session, &mut recorder);

        assert_eq!(recorder.calls.len(), 1 + session.main_menu.buttons.len());
        assert!(recorder.calls[0].0.contains("Ping Pong Remastered"));
    }

    #[test]
    fn test_play_draws_every_entity() {
        let mut session = Session::new(22);
        let at = session.main_menu.button_center("Standard Mode").unwrap();
        session.handle_event(InputEvent::PointerDown { x: at.x, y: at.y });

        let mut recorder = Recorder::default();
        render_frame(&session, &mut recorder);

        let count = |needle: &str| {
            recorder
                .calls
                .iter()
                .filter(|(sprite, _)| sprite.starts_with(needle))
                .count()
        };
        assert_eq!(count("Paddle"), 4);
        assert_eq!(count("Goal"), 2);
        assert_eq!(count("Wall"), 1);
        assert_eq!(count("Ball"), 1);
        // score, fps, clock and the serve countdown
        assert_eq!(count("Label"), 4);
        assert_eq!(
            count("Paddle { enabled: true"),
            2,
            "one active paddle per player"
        );
    }

    #[test]
    fn test_exit_draws_nothing() {
        let mut session = Session::new(23);
        session.handle_event(InputEvent::QuitRequested);
        let mut renderer = LogRenderer::default();
        assert!(renderer.load());
        render_frame(&session, &mut renderer);
        assert_eq!(renderer.draws, 0);
    }
}
