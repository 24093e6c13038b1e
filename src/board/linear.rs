//! Linear track.
//!
//! Tiles `0..=size` form a singly linked chain; tile `size` has no successor
//! and ends the race. Moving past the end clamps to the last tile.

use serde::{Deserialize, Serialize};

use super::{Board, Tile};
use crate::core::{GameError, Result, Variant};

/// Smallest accepted board size.
pub const MIN_LINEAR_SIZE: u32 = 2;

/// A tile on a [`LinearBoard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinearTile(pub u32);

impl Tile for LinearTile {
    fn id(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LinearTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile {}", self.0)
    }
}

/// Snakes-and-ladders track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearBoard {
    /// `successors[i]` is the tile after tile `i`.
    successors: Vec<Option<LinearTile>>,
}

impl LinearBoard {
    /// Build the chain `0 -> 1 -> ... -> size`.
    pub fn new(size: u32) -> Result<Self> {
        if size < MIN_LINEAR_SIZE {
            return Err(GameError::BoardTooSmall {
                size,
                min: MIN_LINEAR_SIZE,
            });
        }

        let successors = (0..=size)
            .map(|id| (id < size).then(|| LinearTile(id + 1)))
            .collect();

        Ok(Self { successors })
    }

    /// Id of the final tile.
    #[must_use]
    pub fn last_id(&self) -> u32 {
        (self.successors.len() - 1) as u32
    }

    /// The final tile.
    #[must_use]
    pub fn last(&self) -> LinearTile {
        LinearTile(self.last_id())
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: u32) -> Option<LinearTile> {
        (id <= self.last_id()).then_some(LinearTile(id))
    }

    /// The tile after `tile`, or `None` at the end of the chain.
    pub fn successor(&self, tile: LinearTile) -> Result<Option<LinearTile>> {
        self.successors
            .get(tile.0 as usize)
            .copied()
            .ok_or_else(|| GameError::ForeignTile(tile.to_string()))
    }

    /// Walk at most `steps` successors, stopping at the end of the chain.
    pub fn move_by(&self, from: LinearTile, steps: u32) -> Result<LinearTile> {
        let mut current = from;
        let mut next = self.successor(from)?;
        for _ in 0..steps {
            let Some(tile) = next else { break };
            current = tile;
            next = self.successor(current)?;
        }
        Ok(current)
    }
}

impl Board for LinearBoard {
    type Tile = LinearTile;

    fn variant(&self) -> Variant {
        Variant::SnakesAndLadders
    }

    fn start(&self) -> LinearTile {
        LinearTile(0)
    }

    fn is_end(&self, tile: LinearTile) -> Result<bool> {
        Ok(self.successor(tile)?.is_none())
    }

    fn size(&self) -> usize {
        self.successors.len()
    }

    fn contains(&self, tile: LinearTile) -> bool {
        tile.0 <= self.last_id()
    }
}
