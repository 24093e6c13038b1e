//! Game orchestration.
//!
//! ## Key Features
//!
//! - **Typed sessions**: `Game<R>` is parameterized by its rule engine, which
//!   fixes the board and tile types at compile time
//! - **One call per turn**: `play_turn` rolls, moves, resolves landing
//!   effects, advances the turn and checks for a winner
//! - **Terminal state**: once a winner is set further turns return 0
//! - **Config-driven setup**: [`setup::build`] picks the variant from a
//!   deserialized [`GameConfig`](crate::core::GameConfig)

mod builder;
mod session;
pub mod setup;

pub use builder::GameBuilder;
pub use session::Game;
pub use setup::{AnyBuilder, AnyGame};
