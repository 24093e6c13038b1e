//! Engine error type.
//!
//! Every fallible engine call returns [`Result`]. Errors fall into two kinds:
//!
//! - [`ErrorKind::Configuration`]: invalid construction arguments (board too
//!   small, no dice, blank player name, duplicate token, ...).
//! - [`ErrorKind::IllegalOperation`]: a valid object asked to do something it
//!   cannot (piece index out of range, tile from another board, rules paired
//!   with the wrong board variant).
//!
//! Calling `play_turn` on a finished game is not an error; it returns 0.

use thiserror::Error;

use super::player::Token;

/// Broad classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid construction input.
    Configuration,
    /// Operation not permitted on a valid object.
    IllegalOperation,
}

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board size {size} is below the minimum of {min}")]
    BoardTooSmall { size: u32, min: u32 },

    #[error("invalid board geometry: {0}")]
    InvalidGeometry(String),

    #[error("dice count must be at least 1")]
    NoDice,

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("player name must not be blank")]
    BlankName,

    #[error("player {name} must own at least one piece")]
    NoPieces { name: String },

    #[error("player {name} has no token")]
    MissingToken { name: String },

    #[error("player {name} has no birthdate")]
    MissingBirthdate { name: String },

    #[error("token {0} is used by more than one player")]
    DuplicateToken(Token),

    #[error("{kind} {from} -> {to} lies outside a board of size {size}")]
    JumpOutOfRange {
        kind: &'static str,
        from: u32,
        to: u32,
        size: u32,
    },

    #[error("{kind} at {tile} sits on the end tile, so nobody could finish")]
    JumpFromEnd { kind: &'static str, tile: u32 },

    #[error("token {0} has no seat on a Ludo board")]
    NoLudoSeat(Token),

    #[error("player {name} has {found} pieces, expected {expected}")]
    WrongPieceCount {
        name: String,
        found: usize,
        expected: usize,
    },

    #[error("piece {piece} is out of range for a player with {count} pieces")]
    PieceOutOfRange { piece: usize, count: usize },

    #[error("player {player} is out of range for a game with {count} players")]
    PlayerOutOfRange { player: usize, count: usize },

    #[error("tile {0} does not belong to this board")]
    ForeignTile(String),

    #[error("{rules} rules cannot run on a {board} board")]
    VariantMismatch {
        rules: &'static str,
        board: &'static str,
    },
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::PieceOutOfRange { .. }
            | GameError::PlayerOutOfRange { .. }
            | GameError::ForeignTile(_)
            | GameError::VariantMismatch { .. } => ErrorKind::IllegalOperation,
            _ => ErrorKind::Configuration,
        }
    }

    /// True for invalid construction input.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, GameError>;
