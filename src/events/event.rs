//! Game event types.
//!
//! Events describe state changes after they happen. The engine emits them
//! synchronously from the call that caused the change; UI layers consume
//! them to animate, log, or persist.

use serde::{Deserialize, Serialize};

use crate::core::{PieceId, PlayerId, Token};
use crate::rules::{MoveCause, PieceMove};

/// Discriminant of a [`GameEvent`], for listeners that filter by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    PlayerAdded,
    DiceRolled,
    PlayerMoved,
    TurnChanged,
    WinnerDeclared,
    GameReset,
}

/// A state change notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent<T> {
    /// A player joined the roster (emitted while the game is built).
    PlayerAdded {
        player: PlayerId,
        name: String,
        token: Token,
    },

    /// Dice were rolled for `player`.
    DiceRolled { player: PlayerId, values: Vec<u8> },

    /// A piece changed tiles. `None` means home.
    PlayerMoved {
        player: PlayerId,
        piece: PieceId,
        from: Option<T>,
        to: Option<T>,
        cause: MoveCause,
    },

    /// The turn passed to another player.
    TurnChanged { from: PlayerId, to: PlayerId },

    /// `player` won. Emitted once per game.
    WinnerDeclared { player: PlayerId },

    /// The game returned to its opening position.
    GameReset,
}

impl<T> GameEvent<T> {
    /// Kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::PlayerAdded { .. } => EventKind::PlayerAdded,
            GameEvent::DiceRolled { .. } => EventKind::DiceRolled,
            GameEvent::PlayerMoved { .. } => EventKind::PlayerMoved,
            GameEvent::TurnChanged { .. } => EventKind::TurnChanged,
            GameEvent::WinnerDeclared { .. } => EventKind::WinnerDeclared,
            GameEvent::GameReset => EventKind::GameReset,
        }
    }

    /// Player the event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerAdded { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::PlayerMoved { player, .. }
            | GameEvent::WinnerDeclared { player } => Some(*player),
            GameEvent::TurnChanged { to, .. } => Some(*to),
            GameEvent::GameReset => None,
        }
    }
}

impl<T> From<PieceMove<T>> for GameEvent<T> {
    fn from(mv: PieceMove<T>) -> Self {
        GameEvent::PlayerMoved {
            player: mv.player,
            piece: mv.piece,
            from: mv.from,
            to: mv.to,
            cause: mv.cause,
        }
    }
}
