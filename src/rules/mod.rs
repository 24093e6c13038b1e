//! Variant rule sets.
//!
//! Variants implement `RuleEngine` to define:
//! - Which piece a roll moves and where it lands
//! - Post-landing effects (snake/ladder teleport, bump, capture)
//! - Extra turns and the win condition
//!
//! The game loop calls into `RuleEngine` but never interprets
//! variant-specific concepts directly.

mod engine;
mod ludo;
mod snakes;

pub use engine::{roll_sum, Landing, MoveCause, PieceMove, RuleEngine, TileOf};
pub use ludo::{LudoRules, LUDO_PIECES, LUDO_SIX};
pub use snakes::SnakesAndLadders;
