//! Boards: tile graphs with movement and an end-of-game predicate.
//!
//! Each board variant has its own tile type, so a tile from one variant can
//! never be handed to the other. Movement is an inherent method on each
//! board because the variants need different inputs: a linear track only
//! needs a step count, a Ludo board also needs the mover's color.
//!
//! - [`LinearBoard`] / [`LinearTile`]: snakes-and-ladders track
//! - [`LudoBoard`] / [`LudoTile`]: shared ring plus per-color lanes

mod linear;
mod ludo;

pub use linear::{LinearBoard, LinearTile, MIN_LINEAR_SIZE};
pub use ludo::{LudoBoard, LudoTile, LUDO_SEATS};

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::core::{Result, Variant};

/// A discrete position on a board.
pub trait Tile: Copy + Eq + Hash + Debug + Display {
    /// Stable numeric identifier, unique within one board.
    fn id(&self) -> u32;
}

/// Behavior shared by every board variant.
pub trait Board {
    /// Tile type of this board.
    type Tile: Tile;

    /// Variant this board belongs to.
    fn variant(&self) -> Variant;

    /// The fixed entry tile.
    fn start(&self) -> Self::Tile;

    /// True when `tile` ends the race.
    ///
    /// Fails for tiles that do not belong to this board.
    fn is_end(&self, tile: Self::Tile) -> Result<bool>;

    /// Number of tiles on the board.
    fn size(&self) -> usize;

    /// True when `tile` belongs to this board.
    fn contains(&self, tile: Self::Tile) -> bool;
}
