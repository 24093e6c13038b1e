//! Game construction.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::debug;

use super::session::Game;
use crate::core::{Dice, GameError, Player, PlayerId, Result};
use crate::events::{EventBus, GameEvent, ListenerId};
use crate::rules::{RuleEngine, TileOf};

/// Collects a board, rules, dice, roster and listeners, then validates them
/// together in [`GameBuilder::build`].
///
/// Listeners registered here see the `PlayerAdded` events emitted while the
/// game is built.
pub struct GameBuilder<R: RuleEngine> {
    board: Arc<R::Board>,
    rules: Arc<R>,
    dice: Dice,
    players: Vec<Player<TileOf<R>>>,
    events: EventBus<TileOf<R>>,
}

impl<R: RuleEngine> GameBuilder<R> {
    /// Start a game on `board` under `rules`, rolling `dice`.
    pub fn new(board: impl Into<Arc<R::Board>>, rules: impl Into<Arc<R>>, dice: Dice) -> Self {
        Self {
            board: board.into(),
            rules: rules.into(),
            dice,
            players: Vec::new(),
            events: EventBus::new(),
        }
    }

    /// Append a player to the turn order (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: Player<TileOf<R>>) -> Self {
        self.players.push(player);
        self
    }

    /// Append several players to the turn order (builder pattern).
    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = Player<TileOf<R>>>) -> Self {
        self.players.extend(players);
        self
    }

    /// Register a listener before the game exists (builder pattern).
    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&GameEvent<TileOf<R>>) + 'static) -> Self {
        self.events.subscribe(listener);
        self
    }

    /// Register a listener and keep its handle.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent<TileOf<R>>) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    /// Validate everything and place the pieces.
    ///
    /// Fails when the roster is empty, a token repeats, the rules reject the
    /// board, or the rules reject a player.
    pub fn build(self) -> Result<Game<R>> {
        let Self {
            board,
            rules,
            dice,
            mut players,
            mut events,
        } = self;

        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let mut seen = FxHashSet::default();
        for player in &players {
            if !seen.insert(player.token()) {
                return Err(GameError::DuplicateToken(player.token()));
            }
        }

        rules.check_board(&board)?;
        for player in &players {
            rules.check_player(&board, player)?;
        }

        let opening = rules.opening_tile(&board);
        for player in &mut players {
            player.place_all(opening);
        }

        debug!(
            variant = %rules.variant(),
            players = players.len(),
            dice = dice.count(),
            "game built"
        );

        for (idx, player) in players.iter().enumerate() {
            events.emit(GameEvent::PlayerAdded {
                player: PlayerId::new(idx as u8),
                name: player.name().to_string(),
                token: player.token(),
            });
        }

        Ok(Game::from_parts(board, rules, dice, players, events))
    }
}
