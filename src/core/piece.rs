//! Player pieces.
//!
//! A piece is either **at home** (no tile) or **on board** (bound to a tile).
//! The home state is an `Option::None`, so it can never be dereferenced by
//! accident.

use serde::{Deserialize, Serialize};

/// Piece index within its owner, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw piece index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}

/// One token belonging to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPiece<T> {
    id: PieceId,
    tile: Option<T>,
}

impl<T: Copy> PlayerPiece<T> {
    /// Create a piece at home.
    #[must_use]
    pub const fn new(id: PieceId) -> Self {
        Self { id, tile: None }
    }

    /// This piece's index within its owner.
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// The tile this piece stands on, `None` while at home.
    #[must_use]
    pub const fn tile(&self) -> Option<T> {
        self.tile
    }

    /// True while the piece has no tile.
    #[must_use]
    pub const fn is_home(&self) -> bool {
        self.tile.is_none()
    }

    /// True while the piece stands on a tile.
    #[must_use]
    pub const fn is_on_board(&self) -> bool {
        self.tile.is_some()
    }

    /// Move unconditionally; `None` sends the piece home.
    pub fn move_to(&mut self, tile: Option<T>) {
        self.tile = tile;
    }
}
