//! Ludo cross board.
//!
//! ## Layout
//!
//! A shared ring of `ring_len` cells is split into four seats. Each seat's
//! color enters the ring at its own entry cell (`seat * ring_len / 4`), runs
//! the whole ring once, then turns into a private lane of `lane_len` cells.
//! The last `goal_band` lane cells are the goal.
//!
//! ## Tile ids
//!
//! - ring cell `c`: `c`
//! - lane cell `step` of seat `s`: `ring_len + s * lane_len + step`
//!
//! Movement works on the per-color travel distance: ring cells count
//! `0..ring_len` from the color's entry, lane cells continue from there.
//! Overshooting the last lane cell clamps onto it.

use serde::{Deserialize, Serialize};

use super::{Board, Tile};
use crate::core::{GameError, LudoGeometry, Result, Token, Variant};

/// Number of colors that can sit at a Ludo board.
pub const LUDO_SEATS: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
enum Region {
    Ring { cell: u8 },
    Lane { color: Token, step: u8 },
}

/// A tile on a [`LudoBoard`]. Obtained from the board, never built by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LudoTile {
    id: u32,
    region: Region,
}

impl LudoTile {
    /// Ring cell index, if this is a ring tile.
    #[must_use]
    pub fn ring_cell(&self) -> Option<u8> {
        match self.region {
            Region::Ring { cell } => Some(cell),
            Region::Lane { .. } => None,
        }
    }

    /// Owning color and step, if this is a lane tile.
    #[must_use]
    pub fn lane(&self) -> Option<(Token, u8)> {
        match self.region {
            Region::Lane { color, step } => Some((color, step)),
            Region::Ring { .. } => None,
        }
    }

    #[must_use]
    pub fn is_ring(&self) -> bool {
        matches!(self.region, Region::Ring { .. })
    }
}

impl Tile for LudoTile {
    fn id(&self) -> u32 {
        self.id
    }
}

impl std::fmt::Display for LudoTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.region {
            Region::Ring { cell } => write!(f, "Ring {} (#{})", cell, self.id),
            Region::Lane { color, step } => write!(f, "{} lane {} (#{})", color, step, self.id),
        }
    }
}

/// Four-seat Ludo board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LudoBoard {
    geometry: LudoGeometry,
}

impl LudoBoard {
    /// Build a board, validating the geometry.
    pub fn new(geometry: LudoGeometry) -> Result<Self> {
        let LudoGeometry {
            ring_len,
            lane_len,
            goal_band,
        } = geometry;

        if ring_len == 0 || ring_len % LUDO_SEATS != 0 {
            return Err(GameError::InvalidGeometry(format!(
                "ring of {} cells cannot seat {} colors",
                ring_len, LUDO_SEATS
            )));
        }
        if lane_len == 0 {
            return Err(GameError::InvalidGeometry("lane must have at least one cell".into()));
        }
        if goal_band == 0 || goal_band > lane_len {
            return Err(GameError::InvalidGeometry(format!(
                "goal band of {} does not fit a lane of {}",
                goal_band, lane_len
            )));
        }

        Ok(Self { geometry })
    }

    /// The standard 52-cell board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            geometry: LudoGeometry::default(),
        }
    }

    #[must_use]
    pub fn geometry(&self) -> LudoGeometry {
        self.geometry
    }

    fn seat(color: Token) -> Result<u8> {
        color.ludo_seat().ok_or(GameError::NoLudoSeat(color))
    }

    /// Ring cell by index.
    #[must_use]
    pub fn ring_tile(&self, cell: u8) -> Option<LudoTile> {
        (cell < self.geometry.ring_len).then(|| LudoTile {
            id: u32::from(cell),
            region: Region::Ring { cell },
        })
    }

    /// Lane cell of `color` by step.
    pub fn lane_tile(&self, color: Token, step: u8) -> Result<LudoTile> {
        let seat = Self::seat(color)?;
        if step >= self.geometry.lane_len {
            return Err(GameError::ForeignTile(format!("{} lane {}", color, step)));
        }
        Ok(LudoTile {
            id: u32::from(self.geometry.ring_len)
                + u32::from(seat) * u32::from(self.geometry.lane_len)
                + u32::from(step),
            region: Region::Lane { color, step },
        })
    }

    /// Fixed ring cell where `color` enters from home.
    pub fn entry_tile(&self, color: Token) -> Result<LudoTile> {
        let seat = Self::seat(color)?;
        let cell = seat * (self.geometry.ring_len / LUDO_SEATS);
        Ok(LudoTile {
            id: u32::from(cell),
            region: Region::Ring { cell },
        })
    }

    /// Last cell of `color`'s lane.
    pub fn final_tile(&self, color: Token) -> Result<LudoTile> {
        self.lane_tile(color, self.geometry.lane_len - 1)
    }

    /// Longest travel distance a piece can cover.
    #[must_use]
    pub fn max_distance(&self) -> u32 {
        u32::from(self.geometry.ring_len) + u32::from(self.geometry.lane_len) - 1
    }

    /// Distance `tile` lies along `color`'s path.
    pub fn distance(&self, tile: LudoTile, color: Token) -> Result<u32> {
        if !self.contains(tile) {
            return Err(GameError::ForeignTile(tile.to_string()));
        }
        let ring = u32::from(self.geometry.ring_len);
        match tile.region {
            Region::Ring { cell } => {
                let entry = u32::from(self.entry_tile(color)?.id);
                Ok((u32::from(cell) + ring - entry) % ring)
            }
            Region::Lane { color: owner, step } if owner == color => Ok(ring + u32::from(step)),
            Region::Lane { .. } => Err(GameError::ForeignTile(format!(
                "{} is not on {}'s path",
                tile, color
            ))),
        }
    }

    /// Tile at `distance` along `color`'s path, clamped to the final tile.
    pub fn tile_at(&self, color: Token, distance: u32) -> Result<LudoTile> {
        let distance = distance.min(self.max_distance());
        let ring = u32::from(self.geometry.ring_len);
        if distance < ring {
            let entry = u32::from(self.entry_tile(color)?.id);
            let cell = ((entry + distance) % ring) as u8;
            Ok(LudoTile {
                id: u32::from(cell),
                region: Region::Ring { cell },
            })
        } else {
            self.lane_tile(color, (distance - ring) as u8)
        }
    }

    /// Advance `steps` along `color`'s path.
    pub fn move_by(&self, from: LudoTile, steps: u32, color: Token) -> Result<LudoTile> {
        let distance = self.distance(from, color)?;
        self.tile_at(color, distance.saturating_add(steps))
    }

    /// True for lane cells inside the goal band.
    #[must_use]
    pub fn in_goal_band(&self, tile: LudoTile) -> bool {
        match tile.region {
            Region::Lane { step, .. } => {
                step >= self.geometry.lane_len - self.geometry.goal_band && self.contains(tile)
            }
            Region::Ring { .. } => false,
        }
    }
}

impl Board for LudoBoard {
    type Tile = LudoTile;

    fn variant(&self) -> Variant {
        Variant::Ludo
    }

    fn start(&self) -> LudoTile {
        LudoTile {
            id: 0,
            region: Region::Ring { cell: 0 },
        }
    }

    fn is_end(&self, tile: LudoTile) -> Result<bool> {
        if !self.contains(tile) {
            return Err(GameError::ForeignTile(tile.to_string()));
        }
        Ok(self.in_goal_band(tile))
    }

    fn size(&self) -> usize {
        usize::from(self.geometry.ring_len)
            + usize::from(LUDO_SEATS) * usize::from(self.geometry.lane_len)
    }

    fn contains(&self, tile: LudoTile) -> bool {
        match tile.region {
            Region::Ring { cell } => self.ring_tile(cell) == Some(tile),
            Region::Lane { color, step } => self.lane_tile(color, step).ok() == Some(tile),
        }
    }
}
