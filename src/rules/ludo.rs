//! Ludo rules.
//!
//! - A home piece enters only on a roll of exactly 6, onto its color's entry
//!   tile. Any other roll leaves it home.
//! - On-board pieces advance along the color's path (ring, then lane).
//! - Landing outside the goal band captures every opposing piece on that
//!   tile, sending it home. Goal-band tiles are safe.
//! - A 6 always grants another roll; the configured policy is ignored.
//! - A player wins once all four pieces sit in the goal band.

use tracing::trace;

use super::engine::{roll_sum, Landing, MoveCause, PieceMove, RuleEngine};
use crate::board::{LudoBoard, LudoTile};
use crate::core::{GameError, PieceId, Player, PlayerId, PlayerPiece, Result, Variant};

/// Roll needed to leave home, and to roll again.
pub const LUDO_SIX: u32 = 6;

/// Pieces each Ludo player owns.
pub const LUDO_PIECES: usize = 4;

/// Ludo rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LudoRules;

impl LudoRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Where `piece` would go on `roll`, or `None` if it cannot move.
    fn destination(
        board: &LudoBoard,
        player: &Player<LudoTile>,
        piece: &PlayerPiece<LudoTile>,
        roll: u32,
    ) -> Result<Option<(LudoTile, MoveCause)>> {
        let color = player.token();
        let last = board.final_tile(color)?;
        match piece.tile() {
            None if roll == LUDO_SIX => Ok(Some((board.entry_tile(color)?, MoveCause::Entry))),
            None => Ok(None),
            Some(tile) if tile == last => Ok(None),
            Some(tile) => Ok(Some((board.move_by(tile, roll, color)?, MoveCause::Roll))),
        }
    }

    /// Default piece choice: on a 6 the first home piece enters; otherwise
    /// the first on-board piece that has not reached the final tile moves.
    fn pick_piece<'a>(
        board: &LudoBoard,
        player: &'a Player<LudoTile>,
        roll: u32,
    ) -> Result<Option<&'a PlayerPiece<LudoTile>>> {
        if roll == LUDO_SIX {
            if let Some(home) = player.pieces().iter().find(|p| p.is_home()) {
                return Ok(Some(home));
            }
        }
        let last = board.final_tile(player.token())?;
        Ok(player
            .pieces()
            .iter()
            .find(|p| p.tile().is_some_and(|t| t != last)))
    }
}

impl RuleEngine for LudoRules {
    type Board = LudoBoard;

    fn variant(&self) -> Variant {
        Variant::Ludo
    }

    fn pieces_per_player(&self) -> usize {
        LUDO_PIECES
    }

    fn check_player(&self, _board: &LudoBoard, player: &Player<LudoTile>) -> Result<()> {
        if player.token().ludo_seat().is_none() {
            return Err(GameError::NoLudoSeat(player.token()));
        }
        if player.piece_count() != LUDO_PIECES {
            return Err(GameError::WrongPieceCount {
                name: player.name().to_string(),
                found: player.piece_count(),
                expected: LUDO_PIECES,
            });
        }
        Ok(())
    }

    fn opening_tile(&self, _board: &LudoBoard) -> Option<LudoTile> {
        None
    }

    fn plan_move(
        &self,
        board: &LudoBoard,
        mover: PlayerId,
        player: &Player<LudoTile>,
        roll: u32,
        choice: Option<PieceId>,
    ) -> Result<Option<PieceMove<LudoTile>>> {
        let piece = match choice {
            Some(id) => player.piece(id)?,
            None => match Self::pick_piece(board, player, roll)? {
                Some(piece) => piece,
                None => return Ok(None),
            },
        };

        Ok(Self::destination(board, player, piece, roll)?.map(|(to, cause)| PieceMove {
            player: mover,
            piece: piece.id(),
            from: piece.tile(),
            to: Some(to),
            cause,
        }))
    }

    fn resolve_landing(
        &self,
        board: &LudoBoard,
        players: &mut [Player<LudoTile>],
        mover: PlayerId,
        moved: Option<PieceId>,
        faces: &[u8],
    ) -> Result<Landing<LudoTile>> {
        let extra_turn = self.grants_extra_turn(faces);
        let count = players.len();
        let player = players
            .get(mover.index())
            .ok_or(GameError::PlayerOutOfRange { player: mover.index(), count })?;

        let Some(piece) = moved else {
            return Ok(Landing::quiet(None, extra_turn));
        };
        let Some(landed) = player.piece(piece)?.tile() else {
            return Ok(Landing::quiet(None, extra_turn));
        };
        if board.in_goal_band(landed) {
            return Ok(Landing::quiet(Some(landed), extra_turn));
        }

        let mut effects = Vec::new();
        for (idx, other) in players.iter_mut().enumerate() {
            if idx == mover.index() {
                continue;
            }
            let captured: Vec<PieceId> = other.pieces_at(landed).collect();
            for id in captured {
                other.move_piece(id, None)?;
                trace!(player = idx, piece = id.0, tile = %landed, "captured");
                effects.push(PieceMove {
                    player: PlayerId::new(idx as u8),
                    piece: id,
                    from: Some(landed),
                    to: None,
                    cause: MoveCause::Capture,
                });
            }
        }

        Ok(Landing {
            final_tile: Some(landed),
            effects,
            extra_turn,
        })
    }

    fn grants_extra_turn(&self, faces: &[u8]) -> bool {
        roll_sum(faces) == LUDO_SIX
    }

    fn has_won(&self, board: &LudoBoard, player: &Player<LudoTile>) -> bool {
        player.piece_count() == LUDO_PIECES
            && player
                .pieces()
                .iter()
                .all(|p| p.tile().is_some_and(|t| board.in_goal_band(t)))
    }
}
