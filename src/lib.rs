//! # rust-boardgame
//!
//! A turn-based board game engine with two variants sharing one turn loop:
//! a linear snakes-and-ladders track and a four-piece Ludo board.
//!
//! ## Design Principles
//!
//! 1. **Variant safety in types**: each rule engine names its board type, so
//!    a Ludo tile can never reach a snakes-and-ladders board.
//!
//! 2. **Explicit dependencies**: a game is built from a board, rules, dice
//!    and a roster passed in by the caller. Nothing is fetched from global
//!    state.
//!
//! 3. **Synchronous notifications**: every state change is reported through
//!    [`GameEvent`]s delivered in listener registration order.
//!
//! ## Modules
//!
//! - `core`: players, pieces, dice, RNG, errors, configuration
//! - `board`: tile graphs and movement
//! - `rules`: `RuleEngine` trait and the two variant rule sets
//! - `events`: event types and the listener registry
//! - `game`: the turn-state machine and config-driven setup
//!
//! ## Example
//!
//! ```
//! use rust_boardgame::{build, GameConfig, PlayerSpec, RulesConfig, Token};
//! use chrono::NaiveDate;
//!
//! let born = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
//! let config = GameConfig::snakes_and_ladders(100)
//!     .with_rules(RulesConfig::snakes_and_ladders().with_snake(98, 12).with_ladder(4, 56))
//!     .with_seed(42)
//!     .with_player(PlayerSpec::new("Ada", Token::Red, born))
//!     .with_player(PlayerSpec::new("Linus", Token::Blue, born));
//!
//! let mut game = build(config).unwrap();
//! while !game.is_finished() {
//!     game.play_turn().unwrap();
//! }
//! assert!(game.winner_id().is_some());
//! ```

pub mod board;
pub mod core;
pub mod events;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Dice, ErrorKind, ExtraTurnPolicy, FaceSource, GameConfig, GameError, GameRng,
    GameRngState, LudoGeometry, PieceId, Player, PlayerId, PlayerPiece, PlayerSpec, Result,
    RulesConfig, ScriptedFaces, Token, Variant,
};

pub use crate::board::{Board, LinearBoard, LinearTile, LudoBoard, LudoTile, Tile};

pub use crate::rules::{
    Landing, LudoRules, MoveCause, PieceMove, RuleEngine, SnakesAndLadders, TileOf,
};

pub use crate::events::{EventBus, EventKind, GameEvent, ListenerId};

pub use crate::game::setup::{build, builder};
pub use crate::game::{AnyBuilder, AnyGame, Game, GameBuilder};
