//! Screen State Machine
//!
//! Which screen is active and which actions may move between them.

use game_core::CoreError;

/// Screens, numbered the way button targets refer to them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Exit = 0,
    Menu = 1,
    Play = 2,
    Result = 3,
}

impl Screen {
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Screen {
    type Error = CoreError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Screen::Exit),
            1 => Ok(Screen::Menu),
            2 => Ok(Screen::Play),
            3 => Ok(Screen::Result),
            other => Err(CoreError::UnknownScreen(other)),
        }
    }
}

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// A menu button was activated
    Open(Screen),
    /// Leave a match back to the main menu
    Escape,
    GameOver,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: Screen,
    pub to_state: Screen,
    pub action: ScreenAction,
}

/// Screen Finite State Machine
#[derive(Debug)]
pub struct ScreenFsm {
    state: Screen,
}

impl ScreenFsm {
    pub fn new() -> Self {
        Self {
            state: Screen::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> Screen {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ScreenAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: ScreenAction) -> Option<Screen> {
        match (self.state, action) {
            // Exit is terminal
            (Screen::Exit, _) => None,

            // Quit from anywhere
            (_, ScreenAction::Quit) => Some(Screen::Exit),

            // Buttons only live on the menu screens
            (Screen::Menu | Screen::Result, ScreenAction::Open(target)) => Some(target),

            // From Play
            (Screen::Play, ScreenAction::Escape) => Some(Screen::Menu),
            (Screen::Play, ScreenAction::GameOver) => Some(Screen::Result),

            // Invalid transition
            _ => None,
        }
    }

    /// False once the loop should terminate
    pub fn is_running(&self) -> bool {
        self.state != Screen::Exit
    }

    pub fn is_playing(&self) -> bool {
        self.state == Screen::Play
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = ScreenFsm::new();
        assert_eq!(fsm.state(), Screen::Menu);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = ScreenFsm::new();
        let result = fsm.transition(ScreenAction::Open(Screen::Play));
        assert!(result.success);
        assert_eq!(result.from_state, Screen::Menu);
        assert_eq!(fsm.state(), Screen::Play);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = ScreenFsm::new();
        let result = fsm.transition(ScreenAction::GameOver);
        assert!(!result.success);
        assert_eq!(result.to_state, Screen::Menu);
        assert_eq!(fsm.state(), Screen::Menu);
    }

    #[test]
    fn test_buttons_ignored_during_play() {
        let mut fsm = ScreenFsm::new();
        fsm.transition(ScreenAction::Open(Screen::Play));
        assert!(!fsm.transition(ScreenAction::Open(Screen::Menu)).success);
        assert_eq!(fsm.state(), Screen::Play);
    }

    #[test]
    fn test_match_flow() {
        let mut fsm = ScreenFsm::new();
        fsm.transition(ScreenAction::Open(Screen::Play));
        fsm.transition(ScreenAction::GameOver);
        assert_eq!(fsm.state(), Screen::Result);
        fsm.transition(ScreenAction::Open(Screen::Play));
        assert_eq!(fsm.state(), Screen::Play);
        fsm.transition(ScreenAction::Escape);
        assert_eq!(fsm.state(), Screen::Menu);
    }

    #[test]
    fn test_exit_is_terminal() {
        let mut fsm = ScreenFsm::new();
        fsm.transition(ScreenAction::Open(Screen::Exit));
        assert!(!fsm.is_running());
        assert!(!fsm.transition(ScreenAction::Open(Screen::Menu)).success);
        assert!(!fsm.transition(ScreenAction::Quit).success);
    }

    #[test]
    fn test_quit_from_play() {
        let mut fsm = ScreenFsm::new();
        fsm.transition(ScreenAction::Open(Screen::Play));
        assert!(fsm.transition(ScreenAction::Quit).success);
        assert_eq!(fsm.state(), Screen::Exit);
    }

    #[test]
    fn test_screen_ids() {
        assert_eq!(Screen::try_from(2), Ok(Screen::Play));
        assert_eq!(Screen::Result.id(), 3);
        assert_eq!(Screen::try_from(9), Err(CoreError::UnknownScreen(9)));
    }
}
