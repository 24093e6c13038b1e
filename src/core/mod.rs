//! Core engine types: players, pieces, dice, RNG, errors, configuration.
//!
//! This module contains the building blocks shared by every variant.
//! Variants are selected through `GameConfig` rather than by modifying the
//! core.

pub mod config;
pub mod dice;
pub mod error;
pub mod piece;
pub mod player;
pub mod rng;

pub use config::{BoardConfig, ExtraTurnPolicy, GameConfig, LudoGeometry, RulesConfig, Variant};
pub use dice::{Dice, FaceSource, ScriptedFaces};
pub use error::{ErrorKind, GameError, Result};
pub use piece::{PieceId, PlayerPiece};
pub use player::{Player, PlayerId, PlayerSpec, Token};
pub use rng::{GameRng, GameRngState};
