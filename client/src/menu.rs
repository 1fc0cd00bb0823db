//! Menu button widgets

use game_core::{Config, Rect};
use glam::IVec2;

use crate::fsm::Screen;
use crate::input::InputEvent;
use crate::simulation::GameMode;

pub const BUTTON_WIDTH: i32 = 250;
pub const BUTTON_HEIGHT: i32 = 40;

/// Visual state of a button, following the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Out,
    Over,
    Down,
    Up,
}

/// What activating a button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonAction {
    pub target: Screen,
    /// `None` keeps the current mode
    pub mode: Option<GameMode>,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: ButtonAction,
    pub state: ButtonState,
}

impl Button {
    pub fn new(label: &'static str, pos: IVec2, action: ButtonAction) -> Self {
        Self {
            label,
            rect: Rect::new(pos, IVec2::new(BUTTON_WIDTH, BUTTON_HEIGHT)),
            action,
            state: ButtonState::Out,
        }
    }

    /// Update the visual state; a press inside the button activates it
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ButtonAction> {
        let point = event.pointer()?;

        if !self.rect.contains(point) {
            self.state = ButtonState::Out;
            return None;
        }

        match event {
            InputEvent::PointerMove { .. } => self.state = ButtonState::Over,
            InputEvent::PointerDown { .. } => {
                self.state = ButtonState::Down;
                return Some(self.action);
            }
            InputEvent::PointerUp { .. } => self.state = ButtonState::Up,
            _ => {}
        }
        None
    }

    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Down
    }
}

/// A titled column of buttons
#[derive(Debug, Clone)]
pub struct Menu {
    pub title: &'static str,
    pub buttons: Vec<Button>,
}

impl Menu {
    pub fn main(config: &Config) -> Self {
        let x = config.screen_width / 2 - BUTTON_WIDTH / 2;
        Self {
            title: "Ping Pong Remastered",
            buttons: vec![
                Button::new(
                    "Standard Mode",
                    IVec2::new(x, 300),
                    ButtonAction {
                        target: Screen::Play,
                        mode: Some(GameMode::Standard),
                    },
                ),
                Button::new(
                    "Bot Mode",
                    IVec2::new(x, 400),
                    ButtonAction {
                        target: Screen::Play,
                        mode: Some(GameMode::Bot),
                    },
                ),
                Button::new(
                    "Exit",
                    IVec2::new(x, 500),
                    ButtonAction {
                        target: Screen::Exit,
                        mode: None,
                    },
                ),
            ],
        }
    }

    pub fn result(config: &Config) -> Self {
        let x = config.screen_width / 2 - BUTTON_WIDTH / 2;
        Self {
            title: "Result",
            buttons: vec![
                Button::new(
                    "New Game",
                    IVec2::new(x, 400),
                    ButtonAction {
                        target: Screen::Play,
                        mode: None,
                    },
                ),
                Button::new(
                    "Back to Main Menu",
                    IVec2::new(x, 450),
                    ButtonAction {
                        target: Screen::Menu,
                        mode: None,
                    },
                ),
            ],
        }
    }

    /// Every button sees the event; the first activation wins
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ButtonAction> {
        let mut activated = None;
        for button in &mut self.buttons {
            if let Some(action) = button.handle_event(event) {
                activated.get_or_insert(action);
            }
        }
        activated
    }

    pub fn button(&self, label: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Where to click to activate a button
    pub fn button_center(&self, label: &str) -> Option<IVec2> {
        self.button(label).map(|b| b.rect.center())
    }
}
