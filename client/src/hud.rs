//! Text labels derived from session state each frame

use game_core::PlayerId;

use crate::fsm::Screen;
use crate::simulation::Session;

/// Read-only view of the labels the renderer draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub clock: String,
    pub fps: String,
    /// Seconds left before the serve, while the ball is held
    pub countdown: Option<String>,
    pub winner: Option<String>,
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        let countdown = session.serve_pending().then(|| {
            let left = session
                .config
                .serve_countdown_ms
                .saturating_sub(session.serve_countdown.elapsed_ms());
            left.div_ceil(1000).to_string()
        });

        let winner = match session.screen() {
            Screen::Result => session
                .score
                .winner()
                .map(|player| format!("Player {} win", player.id())),
            _ => None,
        };

        Self {
            score: format!(
                "{} : {}",
                session.score.get(PlayerId::One),
                session.score.get(PlayerId::Two)
            ),
            clock: format!("{}s", session.match_clock.elapsed_ms() / 1000),
            fps: format!("{} FPS", session.fps.average().floor() as u32),
            countdown,
            winner,
        }
    }
}
