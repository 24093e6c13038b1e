//! Rules engine trait for game variants.
//!
//! Variants implement `RuleEngine` to define:
//! - Which piece a roll moves and where it goes
//! - Post-landing effects (teleports, bumps, captures)
//! - Extra turns and the win condition
//!
//! The engine names its board as an associated type, so a rule set can only
//! ever be handed tiles and boards of its own variant.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Tile};
use crate::core::{GameError, PieceId, Player, PlayerId, Result, Variant};

/// Tile type used by a rule engine's board.
pub type TileOf<R> = <<R as RuleEngine>::Board as Board>::Tile;

/// Why a piece changed tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCause {
    /// Ordinary advance by the roll.
    Roll,
    /// Left home onto the entry tile.
    Entry,
    /// Slid down a snake.
    Snake,
    /// Climbed a ladder.
    Ladder,
    /// Sent back to the start tile by another player's landing.
    Bump,
    /// Captured and sent home.
    Capture,
    /// Repositioned by a game reset.
    Reset,
}

/// One piece changing tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceMove<T> {
    pub player: PlayerId,
    pub piece: PieceId,
    /// `None` means the piece was at home.
    pub from: Option<T>,
    /// `None` means the piece went home.
    pub to: Option<T>,
    pub cause: MoveCause,
}

impl<T: Tile> PieceMove<T> {
    /// Apply this move to the owning player.
    pub fn apply(&self, players: &mut [Player<T>]) -> Result<()> {
        let count = players.len();
        let owner = players
            .get_mut(self.player.index())
            .ok_or(GameError::PlayerOutOfRange {
                player: self.player.index(),
                count,
            })?;
        owner.move_piece(self.piece, self.to)
    }
}

/// Outcome of the post-landing phase of a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landing<T> {
    /// Mover's tile after every effect.
    pub final_tile: Option<T>,
    /// Moves caused by effects, in the order they were applied.
    pub effects: Vec<PieceMove<T>>,
    /// Same player rolls again.
    pub extra_turn: bool,
}

impl<T> Landing<T> {
    /// A landing with no side effects.
    #[must_use]
    pub fn quiet(final_tile: Option<T>, extra_turn: bool) -> Self {
        Self {
            final_tile,
            effects: Vec::new(),
            extra_turn,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `plan_move`: Return `Ok(None)` when the roll moves nothing
/// - `resolve_landing`: Applies every effect before returning
/// - `has_won`: Checked after each turn for the player who moved
pub trait RuleEngine {
    /// Board variant these rules run on.
    type Board: Board;

    /// Variant these rules belong to.
    fn variant(&self) -> Variant;

    /// Pieces each player owns.
    fn pieces_per_player(&self) -> usize;

    /// Validate these rules against the board they will run on.
    ///
    /// The default only checks the variant tag; implementations extend it
    /// with table checks.
    fn check_board(&self, board: &Self::Board) -> Result<()> {
        if board.variant() == self.variant() {
            Ok(())
        } else {
            Err(GameError::VariantMismatch {
                rules: self.variant().name(),
                board: board.variant().name(),
            })
        }
    }

    /// Validate a roster entry for this variant.
    fn check_player(&self, board: &Self::Board, player: &Player<TileOf<Self>>) -> Result<()> {
        let _ = board;
        if player.piece_count() == self.pieces_per_player() {
            Ok(())
        } else {
            Err(GameError::WrongPieceCount {
                name: player.name().to_string(),
                found: player.piece_count(),
                expected: self.pieces_per_player(),
            })
        }
    }

    /// Where every piece stands before the first turn (`None`: at home).
    fn opening_tile(&self, board: &Self::Board) -> Option<TileOf<Self>>;

    /// Decide which piece a roll moves and where it lands.
    ///
    /// `choice` requests a specific piece; `None` lets the rules pick.
    fn plan_move(
        &self,
        board: &Self::Board,
        mover: PlayerId,
        player: &Player<TileOf<Self>>,
        roll: u32,
        choice: Option<PieceId>,
    ) -> Result<Option<PieceMove<TileOf<Self>>>>;

    /// Apply every post-landing effect and decide the extra turn.
    ///
    /// `moved` is the piece the roll moved, `None` if nothing moved.
    fn resolve_landing(
        &self,
        board: &Self::Board,
        players: &mut [Player<TileOf<Self>>],
        mover: PlayerId,
        moved: Option<PieceId>,
        faces: &[u8],
    ) -> Result<Landing<TileOf<Self>>>;

    /// Whether a roll with these faces grants another turn.
    fn grants_extra_turn(&self, faces: &[u8]) -> bool;

    /// Whether `player` has met the win condition.
    fn has_won(&self, board: &Self::Board, player: &Player<TileOf<Self>>) -> bool;
}

/// Sum of the dice faces.
#[must_use]
pub fn roll_sum(faces: &[u8]) -> u32 {
    faces.iter().map(|&f| u32::from(f)).sum()
}
