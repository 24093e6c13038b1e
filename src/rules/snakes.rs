//! Snakes and ladders rules.
//!
//! After a piece lands:
//! 1. A snake head sends it to the snake's tail; a ladder bottom lifts it to
//!    the ladder's top. One hop only, even if the destination is itself a
//!    head or bottom. A tile configured as both resolves as the snake.
//! 2. Every other player standing on the mover's final tile is bumped back
//!    to the start tile. The start tile is shared and never bumps.
//! 3. The extra turn follows the configured [`ExtraTurnPolicy`].

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use super::engine::{roll_sum, Landing, MoveCause, PieceMove, RuleEngine};
use crate::board::{Board, LinearBoard, LinearTile};
use crate::core::{ExtraTurnPolicy, GameError, PieceId, Player, PlayerId, Result, Variant};

/// Snakes and ladders rule set.
#[derive(Clone, Debug, Default)]
pub struct SnakesAndLadders {
    snakes: FxHashMap<u32, u32>,
    ladders: FxHashMap<u32, u32>,
    policy: ExtraTurnPolicy,
}

impl SnakesAndLadders {
    /// Create rules with no snakes or ladders.
    #[must_use]
    pub fn new(policy: ExtraTurnPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Create rules from head->tail and bottom->top tables.
    #[must_use]
    pub fn from_tables(
        snakes: &BTreeMap<u32, u32>,
        ladders: &BTreeMap<u32, u32>,
        policy: ExtraTurnPolicy,
    ) -> Self {
        Self {
            snakes: snakes.iter().map(|(&k, &v)| (k, v)).collect(),
            ladders: ladders.iter().map(|(&k, &v)| (k, v)).collect(),
            policy,
        }
    }

    /// Add a snake (builder pattern).
    #[must_use]
    pub fn with_snake(mut self, head: u32, tail: u32) -> Self {
        self.snakes.insert(head, tail);
        self
    }

    /// Add a ladder (builder pattern).
    #[must_use]
    pub fn with_ladder(mut self, bottom: u32, top: u32) -> Self {
        self.ladders.insert(bottom, top);
        self
    }

    #[must_use]
    pub fn policy(&self) -> ExtraTurnPolicy {
        self.policy
    }

    /// Destination of a single snake or ladder hop from `tile`, if any.
    #[must_use]
    pub fn jump_from(&self, tile: LinearTile) -> Option<(LinearTile, MoveCause)> {
        if let Some(&tail) = self.snakes.get(&tile.0) {
            if self.ladders.contains_key(&tile.0) {
                warn!(tile = tile.0, "tile is both a snake head and a ladder bottom; taking the snake");
            }
            return Some((LinearTile(tail), MoveCause::Snake));
        }
        self.ladders
            .get(&tile.0)
            .map(|&top| (LinearTile(top), MoveCause::Ladder))
    }
}

impl RuleEngine for SnakesAndLadders {
    type Board = LinearBoard;

    fn variant(&self) -> Variant {
        Variant::SnakesAndLadders
    }

    fn pieces_per_player(&self) -> usize {
        1
    }

    fn check_board(&self, board: &LinearBoard) -> Result<()> {
        let size = board.last_id();
        let tables = [("snake", &self.snakes), ("ladder", &self.ladders)];
        for (kind, table) in tables {
            for (&from, &to) in table {
                if from > size || to > size {
                    return Err(GameError::JumpOutOfRange { kind, from, to, size });
                }
                // A jump off the end tile would teleport every finisher away.
                if from == size {
                    return Err(GameError::JumpFromEnd { kind, tile: from });
                }
            }
        }
        Ok(())
    }

    fn opening_tile(&self, board: &LinearBoard) -> Option<LinearTile> {
        Some(board.start())
    }

    fn plan_move(
        &self,
        board: &LinearBoard,
        mover: PlayerId,
        player: &Player<LinearTile>,
        roll: u32,
        choice: Option<PieceId>,
    ) -> Result<Option<PieceMove<LinearTile>>> {
        let piece = match choice {
            Some(piece) => player.piece(piece)?,
            None => player
                .pieces()
                .iter()
                .find(|p| p.is_on_board())
                .unwrap_or(&player.pieces()[0]),
        };

        let from = piece.tile().unwrap_or_else(|| board.start());
        let to = board.move_by(from, roll)?;

        Ok(Some(PieceMove {
            player: mover,
            piece: piece.id(),
            from: piece.tile(),
            to: Some(to),
            cause: MoveCause::Roll,
        }))
    }

    fn resolve_landing(
        &self,
        board: &LinearBoard,
        players: &mut [Player<LinearTile>],
        mover: PlayerId,
        moved: Option<PieceId>,
        faces: &[u8],
    ) -> Result<Landing<LinearTile>> {
        let extra_turn = self.grants_extra_turn(faces);
        let count = players.len();
        let player = players
            .get(mover.index())
            .ok_or(GameError::PlayerOutOfRange { player: mover.index(), count })?;

        let piece = match moved {
            Some(piece) => piece,
            None => return Ok(Landing::quiet(player.current_tile(), extra_turn)),
        };
        let Some(landed) = player.piece(piece)?.tile() else {
            return Ok(Landing::quiet(None, extra_turn));
        };

        let mut effects = Vec::new();
        let mut final_tile = landed;

        if let Some((to, cause)) = self.jump_from(landed) {
            let hop = PieceMove {
                player: mover,
                piece,
                from: Some(landed),
                to: Some(to),
                cause,
            };
            hop.apply(players)?;
            effects.push(hop);
            final_tile = to;
        }

        let start = board.start();
        if final_tile != start {
            for (idx, other) in players.iter_mut().enumerate() {
                if idx == mover.index() || other.current_tile() != Some(final_tile) {
                    continue;
                }
                let bumped = other.move_to(Some(start));
                trace!(player = idx, tile = final_tile.0, "bumped to start");
                effects.push(PieceMove {
                    player: PlayerId::new(idx as u8),
                    piece: bumped,
                    from: Some(final_tile),
                    to: Some(start),
                    cause: MoveCause::Bump,
                });
            }
        }

        Ok(Landing {
            final_tile: Some(final_tile),
            effects,
            extra_turn,
        })
    }

    fn grants_extra_turn(&self, faces: &[u8]) -> bool {
        self.policy.grants_extra_turn(roll_sum(faces))
    }

    fn has_won(&self, board: &LinearBoard, player: &Player<LinearTile>) -> bool {
        match player.current_tile() {
            Some(tile) if board.contains(tile) => tile == board.last(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;
    use chrono::NaiveDate;

    fn roster(count: usize) -> Vec<Player<LinearTile>> {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        (0..count)
            .map(|i| {
                let mut p = Player::new(format!("P{}", i), Token::ALL[i], date, 1).unwrap();
                p.move_to(Some(LinearTile(0)));
                p
            })
            .collect()
    }

    fn land(rules: &SnakesAndLadders, board: &LinearBoard, players: &mut [Player<LinearTile>], mover: usize, tile: u32) -> Landing<LinearTile> {
        players[mover].move_to(Some(LinearTile(tile)));
        rules
            .resolve_landing(board, players, PlayerId::new(mover as u8), Some(PieceId::new(0)), &[1, 2])
            .unwrap()
    }

    #[test]
    fn test_snake_sends_down() {
        let board = LinearBoard::new(90).unwrap();
        let rules = SnakesAndLadders::default().with_snake(35, 4);
        let mut players = roster(2);

        let landing = land(&rules, &board, &mut players, 0, 35);

        assert_eq!(landing.final_tile, Some(LinearTile(4)));
        assert_eq!(players[0].current_tile(), Some(LinearTile(4)));
        assert_eq!(landing.effects[0].cause, MoveCause::Snake);
    }

    #[test]
    fn test_ladder_single_hop() {
        let board = LinearBoard::new(90).unwrap();
        // Top of the first ladder is the bottom of another
        let rules = SnakesAndLadders::default().with_ladder(3, 22).with_ladder(22, 60);
        let mut players = roster(1);

        let landing = land(&rules, &board, &mut players, 0, 3);

        assert_eq!(landing.final_tile, Some(LinearTile(22)));
        assert_eq!(landing.effects.len(), 1);
    }

    #[test]
    fn test_snake_wins_tie_break() {
        let board = LinearBoard::new(90).unwrap();
        let rules = SnakesAndLadders::default().with_snake(40, 10).with_ladder(40, 70);
        let mut players = roster(1);

        let landing = land(&rules, &board, &mut players, 0, 40);
        assert_eq!(landing.final_tile, Some(LinearTile(10)));
    }

    #[test]
    fn test_bump_after_teleport() {
        let board = LinearBoard::new(90).unwrap();
        let rules = SnakesAndLadders::default().with_ladder(8, 30);
        let mut players = roster(3);
        players[1].move_to(Some(LinearTile(30)));
        players[2].move_to(Some(LinearTile(8)));

        let landing = land(&rules, &board, &mut players, 0, 8);

        // Player 1 sat on the ladder top and is bumped; player 2 on the bottom is not
        assert_eq!(players[0].current_tile(), Some(LinearTile(30)));
        assert_eq!(players[1].current_tile(), Some(LinearTile(0)));
        assert_eq!(players[2].current_tile(), Some(LinearTile(8)));
        assert_eq!(landing.effects.len(), 2);
        assert_eq!(landing.effects[1].cause, MoveCause::Bump);
        assert_eq!(landing.effects[1].player, PlayerId::new(1));
    }

    #[test]
    fn test_start_tile_never_bumps() {
        let board = LinearBoard::new(90).unwrap();
        let rules = SnakesAndLadders::default().with_snake(5, 0);
        let mut players = roster(2);

        let landing = land(&rules, &board, &mut players, 0, 5);

        assert_eq!(landing.final_tile, Some(LinearTile(0)));
        assert_eq!(players[1].current_tile(), Some(LinearTile(0)));
        assert_eq!(landing.effects.len(), 1);
    }

    #[test]
    fn test_check_board_rejects_out_of_range_jump() {
        let board = LinearBoard::new(50).unwrap();
        let rules = SnakesAndLadders::default().with_ladder(10, 51);
        assert_eq!(
            rules.check_board(&board).unwrap_err(),
            GameError::JumpOutOfRange { kind: "ladder", from: 10, to: 51, size: 50 }
        );
    }

    #[test]
    fn test_check_board_rejects_jump_from_end() {
        let board = LinearBoard::new(50).unwrap();

        let snake = SnakesAndLadders::default().with_snake(50, 1);
        assert_eq!(
            snake.check_board(&board).unwrap_err(),
            GameError::JumpFromEnd { kind: "snake", tile: 50 }
        );

        let ladder = SnakesAndLadders::default().with_ladder(50, 50);
        assert!(ladder.check_board(&board).unwrap_err().is_configuration());

        // Landing on the end tile from a jump is fine
        assert!(SnakesAndLadders::default().with_ladder(44, 50).check_board(&board).is_ok());
    }

    #[test]
    fn test_plan_move_clamps() {
        let board = LinearBoard::new(90).unwrap();
        let rules = SnakesAndLadders::default();
        let mut players = roster(1);
        players[0].move_to(Some(LinearTile(85)));

        let mv = rules
            .plan_move(&board, PlayerId::new(0), &players[0], 11, None)
            .unwrap()
            .unwrap();
        assert_eq!(mv.from, Some(LinearTile(85)));
        assert_eq!(mv.to, Some(LinearTile(90)));

        let err = rules.plan_move(&board, PlayerId::new(0), &players[0], 3, Some(PieceId::new(1)));
        assert!(matches!(err, Err(GameError::PieceOutOfRange { .. })));
    }

    #[test]
    fn test_has_won() {
        let board = LinearBoard::new(90).unwrap();
        let rules = SnakesAndLadders::default();
        let mut players = roster(1);

        assert!(!rules.has_won(&board, &players[0]));
        players[0].move_to(Some(LinearTile(90)));
        assert!(rules.has_won(&board, &players[0]));
    }

    #[test]
    fn test_foreign_tile_has_not_won() {
        let board = LinearBoard::new(90).unwrap();
        let rules = SnakesAndLadders::default();
        let mut players = roster(1);

        players[0].move_to(Some(LinearTile(500)));
        assert!(!board.contains(LinearTile(500)));
        assert!(!rules.has_won(&board, &players[0]));

        players[0].move_to(None);
        assert!(!rules.has_won(&board, &players[0]));
    }

    #[test]
    fn test_extra_turn_uses_policy() {
        let even = SnakesAndLadders::new(ExtraTurnPolicy::EvenButNot12);
        assert!(even.grants_extra_turn(&[4, 4]));
        assert!(!even.grants_extra_turn(&[6, 6]));
        assert!(!even.grants_extra_turn(&[3, 4]));

        let never = SnakesAndLadders::new(ExtraTurnPolicy::None);
        assert!(!never.grants_extra_turn(&[4, 4]));
    }
}
