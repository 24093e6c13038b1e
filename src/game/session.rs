//! The turn-state machine.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, info};

use super::builder::GameBuilder;
use crate::board::Board;
use crate::core::{Dice, GameRngState, PieceId, Player, PlayerId, Result, Variant};
use crate::events::{EventBus, GameEvent, ListenerId};
use crate::rules::{MoveCause, PieceMove, RuleEngine, TileOf};

/// One game session.
///
/// A game is IN_PROGRESS until a winner is set, then FINISHED for good:
/// further turns are ignored. [`Game::reset`] is the only way back.
///
/// ## Turn order
///
/// Each turn runs roll, move, landing effects, turn advance, win check, in
/// that order, and emits an event for every state change along the way.
pub struct Game<R: RuleEngine> {
    board: Arc<R::Board>,
    rules: Arc<R>,
    dice: Dice,
    players: Vec<Player<TileOf<R>>>,
    current: usize,
    winner: Option<PlayerId>,
    turns: u64,
    events: EventBus<TileOf<R>>,
}

impl<R: RuleEngine> Game<R> {
    /// Build a game with no pre-registered listeners.
    ///
    /// Use [`GameBuilder`] to observe the `PlayerAdded` events.
    pub fn new(
        players: Vec<Player<TileOf<R>>>,
        board: impl Into<Arc<R::Board>>,
        rules: impl Into<Arc<R>>,
        dice: Dice,
    ) -> Result<Self> {
        GameBuilder::new(board, rules, dice).with_players(players).build()
    }

    /// Start a [`GameBuilder`].
    pub fn builder(board: impl Into<Arc<R::Board>>, rules: impl Into<Arc<R>>, dice: Dice) -> GameBuilder<R> {
        GameBuilder::new(board, rules, dice)
    }

    pub(super) fn from_parts(
        board: Arc<R::Board>,
        rules: Arc<R>,
        dice: Dice,
        players: Vec<Player<TileOf<R>>>,
        events: EventBus<TileOf<R>>,
    ) -> Self {
        Self {
            board,
            rules,
            dice,
            players,
            current: 0,
            winner: None,
            turns: 0,
            events,
        }
    }

    /// Play one turn, letting the rules pick the piece.
    ///
    /// Returns the roll sum, or 0 without touching any state once the game
    /// is finished.
    pub fn play_turn(&mut self) -> Result<u32> {
        self.run_turn(None)
    }

    /// Play one turn moving `piece` if the roll allows it.
    ///
    /// An out-of-range piece fails before the dice are rolled.
    pub fn play_turn_with(&mut self, piece: PieceId) -> Result<u32> {
        self.run_turn(Some(piece))
    }

    fn run_turn(&mut self, choice: Option<PieceId>) -> Result<u32> {
        if let Some(winner) = self.winner {
            debug!(%winner, "turn ignored, game finished");
            return Ok(0);
        }

        let mover = PlayerId::new(self.current as u8);
        if let Some(piece) = choice {
            self.players[self.current].piece(piece)?;
        }

        // 1. Roll
        let sum = self.dice.roll();
        let faces: SmallVec<[u8; 4]> = SmallVec::from_slice(self.dice.last_values());
        debug!(player = %mover, ?faces, sum, "rolled");
        self.events.emit(GameEvent::DiceRolled {
            player: mover,
            values: faces.to_vec(),
        });

        // 2-3. Plan and apply the move
        let planned = self
            .rules
            .plan_move(&self.board, mover, &self.players[self.current], sum, choice)?;
        let moved = match planned {
            Some(mv) => {
                mv.apply(&mut self.players)?;
                debug!(player = %mover, piece = %mv.piece, from = ?mv.from, to = ?mv.to, "moved");
                self.events.emit(mv.into());
                Some(mv.piece)
            }
            None => {
                debug!(player = %mover, sum, "no piece can move");
                None
            }
        };

        // 4. Landing effects
        let landing = self
            .rules
            .resolve_landing(&self.board, &mut self.players, mover, moved, &faces)?;
        for effect in landing.effects {
            debug!(player = %effect.player, cause = ?effect.cause, to = ?effect.to, "effect");
            self.events.emit(effect.into());
        }

        // 5. Advance
        if landing.extra_turn {
            debug!(player = %mover, "extra turn");
        } else {
            self.current = (self.current + 1) % self.players.len();
            self.events.emit(GameEvent::TurnChanged {
                from: mover,
                to: PlayerId::new(self.current as u8),
            });
        }

        // 6. Win check
        if self.rules.has_won(&self.board, &self.players[mover.index()]) {
            self.winner = Some(mover);
            info!(winner = %self.players[mover.index()], turns = self.turns + 1, "winner declared");
            self.events.emit(GameEvent::WinnerDeclared { player: mover });
        }

        self.turns += 1;
        Ok(sum)
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player<TileOf<R>> {
        &self.players[self.current]
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Move the turn to `index`, wrapped into the roster.
    pub fn set_current_player_index(&mut self, index: usize) {
        let next = index % self.players.len();
        if next != self.current {
            let from = PlayerId::new(self.current as u8);
            self.current = next;
            self.events.emit(GameEvent::TurnChanged {
                from,
                to: PlayerId::new(next as u8),
            });
        }
    }

    /// The winning player, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&Player<TileOf<R>>> {
        self.winner.map(|id| &self.players[id.index()])
    }

    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// All players in turn order, with their piece positions.
    #[must_use]
    pub fn players(&self) -> &[Player<TileOf<R>>] {
        &self.players
    }

    /// Get a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player<TileOf<R>>> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn board(&self) -> &R::Board {
        &self.board
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Faces of the most recent roll.
    #[must_use]
    pub fn last_dice(&self) -> &[u8] {
        self.dice.last_values()
    }

    /// RNG position of the dice, for storing a session mid-game.
    ///
    /// Pass it back through [`GameConfig::with_rng_state`](crate::core::GameConfig::with_rng_state)
    /// to resume the same roll sequence. `None` when the dice are scripted.
    #[must_use]
    pub fn rng_state(&self) -> Option<GameRngState> {
        self.dice.rng_state()
    }

    /// Turns played since construction or the last reset.
    #[must_use]
    pub fn turns_played(&self) -> u64 {
        self.turns
    }

    /// Return every piece to its opening tile and clear the winner and the
    /// last roll.
    ///
    /// The dice keep their stream; the roster and listeners are kept.
    pub fn reset(&mut self) {
        let opening = self.rules.opening_tile(&self.board);
        let mut moves = Vec::new();
        for (idx, player) in self.players.iter_mut().enumerate() {
            for piece in player.pieces() {
                if piece.tile() != opening {
                    moves.push(PieceMove {
                        player: PlayerId::new(idx as u8),
                        piece: piece.id(),
                        from: piece.tile(),
                        to: opening,
                        cause: MoveCause::Reset,
                    });
                }
            }
            player.place_all(opening);
        }

        self.current = 0;
        self.winner = None;
        self.turns = 0;
        self.dice.clear();
        info!(variant = %self.rules.variant(), moved = moves.len(), "game reset");

        for mv in moves {
            self.events.emit(mv.into());
        }
        self.events.emit(GameEvent::GameReset);
    }

    /// Register a listener for every later event.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent<TileOf<R>>) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }
}

impl<R: RuleEngine> std::fmt::Debug for Game<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("variant", &self.rules.variant())
            .field("players", &self.players)
            .field("current", &self.current)
            .field("winner", &self.winner)
            .field("turns", &self.turns)
            .field("dice", &self.dice)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
