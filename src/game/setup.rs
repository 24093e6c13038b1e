//! Building a typed game from [`GameConfig`].
//!
//! The config names its variant twice, once for the board and once for the
//! rules; the two must agree. The result is an [`AnyGame`] so callers that
//! load configuration at runtime can hold either variant.

use tracing::debug;

use super::builder::GameBuilder;
use super::session::Game;
use crate::board::{LinearBoard, LudoBoard};
use crate::core::{
    BoardConfig, Dice, GameConfig, GameError, GameRng, GameRngState, Player, PlayerId, PlayerSpec, Result, RulesConfig,
    Variant,
};
use crate::rules::{LudoRules, RuleEngine, SnakesAndLadders};

/// A game of either variant.
#[derive(Debug)]
pub enum AnyGame {
    Linear(Game<SnakesAndLadders>),
    Ludo(Game<LudoRules>),
}

impl AnyGame {
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            AnyGame::Linear(_) => Variant::SnakesAndLadders,
            AnyGame::Ludo(_) => Variant::Ludo,
        }
    }

    /// Play one turn. See [`Game::play_turn`].
    pub fn play_turn(&mut self) -> Result<u32> {
        match self {
            AnyGame::Linear(game) => game.play_turn(),
            AnyGame::Ludo(game) => game.play_turn(),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        match self {
            AnyGame::Linear(game) => game.is_finished(),
            AnyGame::Ludo(game) => game.is_finished(),
        }
    }

    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        match self {
            AnyGame::Linear(game) => game.winner_id(),
            AnyGame::Ludo(game) => game.winner_id(),
        }
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        match self {
            AnyGame::Linear(game) => game.current_player_index(),
            AnyGame::Ludo(game) => game.current_player_index(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        match self {
            AnyGame::Linear(game) => game.players().len(),
            AnyGame::Ludo(game) => game.players().len(),
        }
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        match self {
            AnyGame::Linear(game) => game.board_size(),
            AnyGame::Ludo(game) => game.board_size(),
        }
    }

    #[must_use]
    pub fn last_dice(&self) -> &[u8] {
        match self {
            AnyGame::Linear(game) => game.last_dice(),
            AnyGame::Ludo(game) => game.last_dice(),
        }
    }

    /// RNG position of the dice. See [`Game::rng_state`].
    #[must_use]
    pub fn rng_state(&self) -> Option<GameRngState> {
        match self {
            AnyGame::Linear(game) => game.rng_state(),
            AnyGame::Ludo(game) => game.rng_state(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            AnyGame::Linear(game) => game.reset(),
            AnyGame::Ludo(game) => game.reset(),
        }
    }

    /// The snakes-and-ladders game, if that is the variant.
    pub fn as_linear_mut(&mut self) -> Option<&mut Game<SnakesAndLadders>> {
        match self {
            AnyGame::Linear(game) => Some(game),
            AnyGame::Ludo(_) => None,
        }
    }

    /// The Ludo game, if that is the variant.
    pub fn as_ludo_mut(&mut self) -> Option<&mut Game<LudoRules>> {
        match self {
            AnyGame::Ludo(game) => Some(game),
            AnyGame::Linear(_) => None,
        }
    }
}

/// A builder of either variant, for attaching listeners before the roster
/// is announced.
pub enum AnyBuilder {
    Linear(GameBuilder<SnakesAndLadders>),
    Ludo(GameBuilder<LudoRules>),
}

impl AnyBuilder {
    /// Validate and build. See [`GameBuilder::build`].
    pub fn build(self) -> Result<AnyGame> {
        match self {
            AnyBuilder::Linear(builder) => builder.build().map(AnyGame::Linear),
            AnyBuilder::Ludo(builder) => builder.build().map(AnyGame::Ludo),
        }
    }
}

/// Build a game from configuration.
pub fn build(config: GameConfig) -> Result<AnyGame> {
    builder(config)?.build()
}

/// Resolve configuration into a builder without building yet.
///
/// Board, rules and dice are validated here; roster checks happen in
/// [`AnyBuilder::build`].
pub fn builder(config: GameConfig) -> Result<AnyBuilder> {
    let dice = config.dice_count();
    let GameConfig {
        board,
        rules,
        seed,
        rng_state,
        players,
        ..
    } = config;

    if board.variant() != rules.variant() {
        return Err(GameError::VariantMismatch {
            rules: rules.variant().name(),
            board: board.variant().name(),
        });
    }

    let rng = match (&rng_state, seed) {
        (Some(state), _) => GameRng::from_state(state),
        (None, Some(seed)) => GameRng::new(seed),
        (None, None) => GameRng::from_entropy(),
    };
    debug!(
        variant = %board.variant(),
        seed = rng.seed(),
        resumed = rng_state.is_some(),
        dice,
        "configuring game"
    );
    let dice = Dice::new(dice, rng)?;

    match (board, rules) {
        (
            BoardConfig::Linear { size },
            RulesConfig::SnakesAndLadders {
                snakes,
                ladders,
                policy,
            },
        ) => {
            let board = LinearBoard::new(size)?;
            let rules = SnakesAndLadders::from_tables(&snakes, &ladders, policy);
            let roster = roster(players, rules.pieces_per_player())?;
            Ok(AnyBuilder::Linear(
                GameBuilder::new(board, rules, dice).with_players(roster),
            ))
        }
        (BoardConfig::Ludo { geometry }, RulesConfig::Ludo) => {
            let board = LudoBoard::new(geometry)?;
            let rules = LudoRules::new();
            let roster = roster(players, rules.pieces_per_player())?;
            Ok(AnyBuilder::Ludo(
                GameBuilder::new(board, rules, dice).with_players(roster),
            ))
        }
        (board, rules) => Err(GameError::VariantMismatch {
            rules: rules.variant().name(),
            board: board.variant().name(),
        }),
    }
}

fn roster<T: Copy + PartialEq>(specs: Vec<PlayerSpec>, pieces: usize) -> Result<Vec<Player<T>>> {
    specs
        .into_iter()
        .map(|spec| spec.into_player(pieces))
        .collect()
}
