//! Crate-wide error and outcome types.

/// Errors surfaced by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Deploy on a finished/abandoned game, or attack before the fleet is
    /// fully deployed or on a non-in-progress game.
    GameNotReady,
    /// Unrecognized ship type, or the per-type quota is already exhausted.
    InvalidShipType,
    /// Placement runs off the board or collides with another ship's buffer.
    InvalidShipCoordinate,
    /// Attack target off the board, or already attacked.
    InvalidAttackCoordinate,
    /// Board dimensions exceed the 26x26 letter-alphabet limit (or are zero).
    InvalidBoardConfig,
    /// No game has been created yet.
    NoActiveGame,
    /// The repository failed; carries the underlying message.
    Storage(String),
}

impl GameError {
    /// Stable wire code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::GameNotReady => "GAME_NOT_READY",
            GameError::InvalidShipType => "INVALID_SHIP_TYPE",
            GameError::InvalidShipCoordinate => "INVALID_SHIP_COORDINATE",
            GameError::InvalidAttackCoordinate => "INVALID_ATTACK_COORDINATE",
            GameError::InvalidBoardConfig => "INVALID_BOARD_CONFIG",
            GameError::NoActiveGame => "NO_ACTIVE_GAME",
            GameError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::GameNotReady => write!(f, "Game is not ready for this command"),
            GameError::InvalidShipType => write!(f, "Unknown ship type or quota exhausted"),
            GameError::InvalidShipCoordinate => write!(f, "Ship placement is invalid"),
            GameError::InvalidAttackCoordinate => write!(f, "Attack coordinate is invalid"),
            GameError::InvalidBoardConfig => write!(f, "Board dimensions are out of range"),
            GameError::NoActiveGame => write!(f, "No game exists yet"),
            GameError::Storage(msg) => write!(f, "Storage failure: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<anyhow::Error> for GameError {
    fn from(err: anyhow::Error) -> Self {
        GameError::Storage(err.to_string())
    }
}
