//! Client for the four-paddle Pong
//!
//! Owns the screen state machine, menus, input mapping and the per-frame
//! loop around `game_core`. Drawing goes through the [`render::Renderer`]
//! trait so the session itself never touches a graphics API.

pub mod fsm;
pub mod hud;
pub mod input;
pub mod menu;
pub mod render;
pub mod simulation;

pub use fsm::{Screen, ScreenAction, ScreenFsm, TransitionResult};
pub use hud::Hud;
pub use input::{HeldKeys, InputEvent, Key, KeyBindings};
pub use menu::{Button, ButtonAction, ButtonState, Menu};
pub use render::{render_frame, LogRenderer, Renderer, Sprite};
pub use simulation::{drive_bot, GameMode, Session};
