//! Game configuration types.
//!
//! The storage layer hands the engine a [`GameConfig`] at startup:
//! - `BoardConfig`: board shape and size
//! - `RulesConfig`: rule variant and its tables (snakes, ladders, policy)
//! - dice count, an optional RNG seed or saved RNG position, and the player roster
//!
//! All types are serde-derivable; the engine owns no file format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::player::PlayerSpec;
use super::rng::GameRngState;

/// The two supported game variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Single-piece race along a linear track.
    SnakesAndLadders,
    /// Four-piece race around a shared ring into private lanes.
    Ludo,
}

impl Variant {
    /// Short name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::SnakesAndLadders => "snakes-and-ladders",
            Variant::Ludo => "Ludo",
        }
    }

    /// Dice rolled per turn when the config does not say.
    #[must_use]
    pub const fn default_dice(self) -> usize {
        match self {
            Variant::SnakesAndLadders => 2,
            Variant::Ludo => 1,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// When a roll grants the same player another turn.
///
/// Ignored by Ludo, which always grants an extra turn on a 6.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtraTurnPolicy {
    /// Never.
    None,
    /// Sum is even and not 12.
    EvenButNot12,
    /// Sum is even and not 12.
    #[default]
    DoubleExcept12,
    /// Sum is exactly 6.
    OnSix,
}

impl ExtraTurnPolicy {
    /// Decide from the roll sum alone.
    #[must_use]
    pub const fn grants_extra_turn(self, sum: u32) -> bool {
        match self {
            ExtraTurnPolicy::None => false,
            ExtraTurnPolicy::EvenButNot12 | ExtraTurnPolicy::DoubleExcept12 => {
                sum % 2 == 0 && sum != 12
            }
            ExtraTurnPolicy::OnSix => sum == 6,
        }
    }
}

/// Ring and lane dimensions of a Ludo board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LudoGeometry {
    /// Cells in the shared ring. Must split evenly into four seats.
    pub ring_len: u8,
    /// Cells in each color's private lane.
    pub lane_len: u8,
    /// Trailing lane cells that count as the goal.
    pub goal_band: u8,
}

impl Default for LudoGeometry {
    fn default() -> Self {
        Self {
            ring_len: 52,
            lane_len: 6,
            goal_band: 1,
        }
    }
}

impl LudoGeometry {
    /// Set the goal band width.
    #[must_use]
    pub fn with_goal_band(mut self, goal_band: u8) -> Self {
        self.goal_band = goal_band;
        self
    }
}

/// Board shape selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum BoardConfig {
    /// Tiles `0..=size` in a chain.
    Linear { size: u32 },
    /// Shared ring plus four private lanes.
    Ludo {
        #[serde(default)]
        geometry: LudoGeometry,
    },
}

impl BoardConfig {
    /// Variant this board belongs to.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            BoardConfig::Linear { .. } => Variant::SnakesAndLadders,
            BoardConfig::Ludo { .. } => Variant::Ludo,
        }
    }
}

/// Rule variant selector and its tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulesConfig {
    SnakesAndLadders {
        /// Head tile -> tail tile.
        #[serde(default)]
        snakes: BTreeMap<u32, u32>,
        /// Bottom tile -> top tile.
        #[serde(default)]
        ladders: BTreeMap<u32, u32>,
        #[serde(default)]
        policy: ExtraTurnPolicy,
    },
    Ludo,
}

impl RulesConfig {
    /// Snakes and ladders with no jumps and the default policy.
    #[must_use]
    pub fn snakes_and_ladders() -> Self {
        RulesConfig::SnakesAndLadders {
            snakes: BTreeMap::new(),
            ladders: BTreeMap::new(),
            policy: ExtraTurnPolicy::default(),
        }
    }

    /// Variant these rules belong to.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            RulesConfig::SnakesAndLadders { .. } => Variant::SnakesAndLadders,
            RulesConfig::Ludo => Variant::Ludo,
        }
    }

    /// Add a snake (builder pattern). No effect on Ludo rules.
    #[must_use]
    pub fn with_snake(mut self, head: u32, tail: u32) -> Self {
        if let RulesConfig::SnakesAndLadders { snakes, .. } = &mut self {
            snakes.insert(head, tail);
        }
        self
    }

    /// Add a ladder (builder pattern). No effect on Ludo rules.
    #[must_use]
    pub fn with_ladder(mut self, bottom: u32, top: u32) -> Self {
        if let RulesConfig::SnakesAndLadders { ladders, .. } = &mut self {
            ladders.insert(bottom, top);
        }
        self
    }

    /// Set the extra-turn policy (builder pattern). No effect on Ludo rules.
    #[must_use]
    pub fn with_policy(mut self, new_policy: ExtraTurnPolicy) -> Self {
        if let RulesConfig::SnakesAndLadders { policy, .. } = &mut self {
            *policy = new_policy;
        }
        self
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board: BoardConfig,

    pub rules: RulesConfig,

    /// Dice rolled per turn. `None` uses the variant's default, see
    /// [`GameConfig::dice_count`].
    #[serde(default)]
    pub dice: Option<usize>,

    /// RNG seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Saved RNG position of a stored session. Takes precedence over `seed`.
    #[serde(default)]
    pub rng_state: Option<GameRngState>,

    /// Players in turn order.
    #[serde(default)]
    pub players: Vec<PlayerSpec>,
}

impl GameConfig {
    /// Snakes and ladders on a board of `size` with two dice.
    pub fn snakes_and_ladders(size: u32) -> Self {
        Self {
            board: BoardConfig::Linear { size },
            rules: RulesConfig::snakes_and_ladders(),
            dice: None,
            seed: None,
            rng_state: None,
            players: Vec::new(),
        }
    }

    /// Ludo on the standard board with one die.
    pub fn ludo() -> Self {
        Self {
            board: BoardConfig::Ludo {
                geometry: LudoGeometry::default(),
            },
            rules: RulesConfig::Ludo,
            dice: None,
            seed: None,
            rng_state: None,
            players: Vec::new(),
        }
    }

    /// Replace the rules (builder pattern).
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Set the dice count (builder pattern).
    #[must_use]
    pub fn with_dice(mut self, dice: usize) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Dice rolled per turn: the configured count, or two for snakes and
    /// ladders and one for Ludo.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice.unwrap_or_else(|| self.rules.variant().default_dice())
    }

    /// Set the RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resume the dice from a captured RNG position (builder pattern).
    #[must_use]
    pub fn with_rng_state(mut self, state: GameRngState) -> Self {
        self.rng_state = Some(state);
        self
    }

    /// Append a player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: PlayerSpec) -> Self {
        self.players.push(player);
        self
    }
}
