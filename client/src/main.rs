use std::time::{SystemTime, UNIX_EPOCH};

use client::{render_frame, GameMode, Hud, InputEvent, LogRenderer, Renderer, Screen, Session};

/// Ten minutes of frames at 60 FPS
const MAX_FRAMES: u64 = 36_000;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(12345);
    let mut session = Session::new(seed);
    let mut renderer = LogRenderer::default();
    if !renderer.load() {
        log::error!("failed to load assets");
        return;
    }

    // Headless run: the bot plays player two, player one stands still
    match session.main_menu.button_center("Bot Mode") {
        Some(at) => session.handle_event(InputEvent::PointerDown { x: at.x, y: at.y }),
        None => {
            log::error!("main menu has no Bot Mode button");
            return;
        }
    }
    log::info!("seed {} mode {:?}", seed, GameMode::Bot);

    let frame_ms = session.config.frame_interval_ms;
    let mut frames = 0u64;
    while session.is_running() {
        session.tick(frame_ms);
        render_frame(&session, &mut renderer);
        frames += 1;

        if session.screen() == Screen::Result {
            let hud = Hud::from_session(&session);
            log::info!(
                "{} ({}) in {}",
                hud.winner.unwrap_or_default(),
                hud.score,
                hud.clock
            );
            session.handle_event(InputEvent::QuitRequested);
        } else if frames >= MAX_FRAMES {
            log::warn!("no winner after {} frames, quitting", frames);
            session.handle_event(InputEvent::QuitRequested);
        }
    }

    log::info!(
        "{} frames over {} ms, {} draw calls",
        frames,
        session.time.now_ms,
        renderer.draws
    );
}
