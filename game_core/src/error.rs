use thiserror::Error;

/// Raised when a raw id from the UI layer does not name anything we know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown player id {0} (expected 1 or 2)")]
    UnknownPlayer(u8),
    #[error("unknown paddle slot {0} (expected 1 or 2)")]
    UnknownSlot(u8),
    #[error("unknown screen id {0}")]
    UnknownScreen(u8),
}
