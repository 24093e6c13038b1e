//! Dice.
//!
//! [`Dice`] rolls a fixed number of six-sided dice and remembers the faces of
//! the most recent roll. Faces come from a [`FaceSource`]: the seeded
//! [`GameRng`] in play, or [`ScriptedFaces`] when a caller needs a known
//! sequence (tests, tutorials, resuming a recorded session).

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::error::{GameError, Result};
use super::rng::{GameRng, GameRngState};

/// Supplies die faces in `1..=6`.
pub trait FaceSource {
    /// Produce the next face.
    fn next_face(&mut self) -> u8;

    /// Resumable position in the face stream, if the source has one.
    fn state(&self) -> Option<GameRngState> {
        None
    }
}

impl FaceSource for GameRng {
    fn next_face(&mut self) -> u8 {
        self.roll_die()
    }

    fn state(&self) -> Option<GameRngState> {
        Some(GameRng::state(self))
    }
}

/// A fixed face sequence, repeated once exhausted.
///
/// Faces outside `1..=6` are clamped into range.
#[derive(Clone, Debug)]
pub struct ScriptedFaces {
    faces: VecDeque<u8>,
}

impl ScriptedFaces {
    /// Create a script. An empty script always yields 1.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().map(|f| f.clamp(1, 6)).collect(),
        }
    }
}

impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> u8 {
        match self.faces.pop_front() {
            Some(face) => {
                self.faces.push_back(face);
                face
            }
            None => 1,
        }
    }
}

/// N independent six-sided dice.
pub struct Dice {
    count: usize,
    source: Box<dyn FaceSource>,
    last: SmallVec<[u8; 4]>,
}

impl Dice {
    /// Create `count` dice drawing from `source`.
    pub fn new(count: usize, source: impl FaceSource + 'static) -> Result<Self> {
        if count == 0 {
            return Err(GameError::NoDice);
        }
        Ok(Self {
            count,
            source: Box::new(source),
            last: SmallVec::new(),
        })
    }

    /// Create `count` dice from a seeded RNG.
    pub fn seeded(count: usize, seed: u64) -> Result<Self> {
        Self::new(count, GameRng::new(seed))
    }

    /// Number of dice rolled per call.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Roll every die, replacing the previous faces. Returns the sum.
    pub fn roll(&mut self) -> u32 {
        self.last.clear();
        for _ in 0..self.count {
            self.last.push(self.source.next_face());
        }
        self.last.iter().map(|&f| u32::from(f)).sum()
    }

    /// Faces of the most recent roll; empty before the first roll.
    #[must_use]
    pub fn last_values(&self) -> &[u8] {
        &self.last
    }

    /// Forget the last faces. The source keeps its position.
    pub fn clear(&mut self) {
        self.last.clear();
    }

    /// Capture the RNG position so a stored session can roll on from here.
    ///
    /// `None` for sources without a seed, such as [`ScriptedFaces`].
    #[must_use]
    pub fn rng_state(&self) -> Option<GameRngState> {
        self.source.state()
    }
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dice")
            .field("count", &self.count)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_dice_rejected() {
        assert_eq!(Dice::seeded(0, 1).unwrap_err(), GameError::NoDice);
    }

    #[test]
    fn test_empty_before_first_roll() {
        let dice = Dice::seeded(2, 1).unwrap();
        assert!(dice.last_values().is_empty());
        assert_eq!(dice.count(), 2);
    }

    #[test]
    fn test_roll_overwrites_previous_faces() {
        let mut dice = Dice::new(2, ScriptedFaces::new([4, 4, 6, 1])).unwrap();

        assert_eq!(dice.roll(), 8);
        assert_eq!(dice.last_values(), &[4, 4]);

        assert_eq!(dice.roll(), 7);
        assert_eq!(dice.last_values(), &[6, 1]);

        // Script repeats
        assert_eq!(dice.roll(), 8);
    }

    #[test]
    fn test_last_values_is_a_snapshot() {
        let mut dice = Dice::new(1, ScriptedFaces::new([3])).unwrap();
        dice.roll();

        let mut copy = dice.last_values().to_vec();
        copy[0] = 6;

        assert_eq!(dice.last_values(), &[3]);
    }

    #[test]
    fn test_clear_keeps_stream() {
        let mut dice = Dice::new(1, ScriptedFaces::new([2, 5])).unwrap();
        dice.roll();
        dice.clear();

        assert!(dice.last_values().is_empty());
        assert_eq!(dice.roll(), 5);
    }

    #[test]
    fn test_rng_state_resumes_rolls() {
        let mut dice = Dice::seeded(2, 31).unwrap();
        for _ in 0..7 {
            dice.roll();
        }

        let state = dice.rng_state().unwrap();
        let mut resumed = Dice::new(2, GameRng::from_state(&state)).unwrap();
        for _ in 0..10 {
            assert_eq!(dice.roll(), resumed.roll());
            assert_eq!(dice.last_values(), resumed.last_values());
        }

        let scripted = Dice::new(1, ScriptedFaces::new([3])).unwrap();
        assert_eq!(scripted.rng_state(), None);
    }

    #[test]
    fn test_scripted_clamps_and_defaults() {
        let mut script = ScriptedFaces::new([0, 9]);
        assert_eq!(script.next_face(), 1);
        assert_eq!(script.next_face(), 6);

        let mut empty = ScriptedFaces::new([]);
        assert_eq!(empty.next_face(), 1);
    }

    proptest! {
        #[test]
        fn roll_sum_matches_faces(count in 1usize..6, seed: u64) {
            let mut dice = Dice::seeded(count, seed).unwrap();
            let sum = dice.roll();

            prop_assert_eq!(dice.last_values().len(), count);
            prop_assert!(dice.last_values().iter().all(|f| (1..=6).contains(f)));
            prop_assert_eq!(sum, dice.last_values().iter().map(|&f| u32::from(f)).sum::<u32>());
            prop_assert!(sum >= count as u32 && sum <= 6 * count as u32);
        }
    }
}
