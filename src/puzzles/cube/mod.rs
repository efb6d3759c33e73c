//! Rubik's-cube environments of order 2, 3, and 4.
//!
//! The state is `6·N²` stickers in face order U, D, L, R, B, F, each
//! holding a color 0..6; the solved color of a face is its own index.
//! Orders 2 and 3 expose the 12 outer face turns; order 4 adds inner-slice
//! turns for 24 actions. Every action is a simultaneous permutation of a
//! fixed sticker subset (see [`tables`]), so the color multiset is
//! invariant under any action sequence.

mod tables;

use smallvec::SmallVec;

use crate::core::env::Environment;
use crate::core::error::EnvError;

/// Cube environment of order `N` (2, 3, or 4).
///
/// Unsupported orders are rejected at compile time by the constructors.
///
/// ```
/// use puzzle_envs::{Cube, Environment};
///
/// let cube = Cube::<3>::solved();
/// // Adjacent actions are inverse turns of the same face.
/// let back = cube.next_state(0).unwrap().next_state(1).unwrap();
/// assert!(back.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube<const N: usize> {
    state: Vec<u8>,
}

/// 2×2×2 pocket cube.
pub type Cube2 = Cube<2>;
/// 3×3×3 Rubik's cube.
pub type Cube3 = Cube<3>;
/// 4×4×4 cube with outer and inner-slice turns.
pub type Cube4 = Cube<4>;

impl<const N: usize> Cube<N> {
    const STICKERS: usize = 6 * N * N;

    /// Construct from a raw sticker state.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidState`] when `state.len() != 6·N²`.
    pub fn new(state: Vec<u8>) -> Result<Self, EnvError> {
        const { assert!(N >= 2 && N <= 4, "cube order must be 2, 3, or 4") }
        if state.len() != Self::STICKERS {
            return Err(EnvError::InvalidState {
                expected: Self::STICKERS,
                actual: state.len(),
            });
        }
        Ok(Self { state })
    }

    /// The canonical solved cube: each face uniformly its own color.
    #[must_use]
    pub fn solved() -> Self {
        const { assert!(N >= 2 && N <= 4, "cube order must be 2, 3, or 4") }
        let state = (0..6u8)
            .flat_map(|face| std::iter::repeat(face).take(N * N))
            .collect();
        Self { state }
    }

    /// Apply an in-range turn through its old/new index pairs.
    fn apply(&self, action: usize) -> Self {
        let turn = &tables::turns(N)[action];

        // Two-pass permutation: stage every source sticker from the
        // pre-turn snapshot, then write. The old and new index sets
        // overlap, so writing directly while reading would corrupt the
        // turn.
        let staged: SmallVec<[u8; 32]> = turn
            .old
            .iter()
            .map(|&src| self.state[src as usize])
            .collect();

        let mut state = self.state.clone();
        for (&dst, sticker) in turn.new.iter().zip(staged) {
            state[dst as usize] = sticker;
        }
        Self { state }
    }
}

impl<const N: usize> Environment for Cube<N> {
    fn state(&self) -> &[u8] {
        &self.state
    }

    fn num_actions(&self) -> usize {
        tables::turns(N).len()
    }

    fn next_state(&self, action: usize) -> Result<Self, EnvError> {
        if action >= self.num_actions() {
            return Err(EnvError::ActionOutOfRange {
                action,
                num_actions: self.num_actions(),
            });
        }
        Ok(self.apply(action))
    }

    fn next_states(&self) -> Vec<Self> {
        (0..self.num_actions()).map(|a| self.apply(a)).collect()
    }

    fn is_solved(&self) -> bool {
        self.state
            .chunks_exact(N * N)
            .enumerate()
            .all(|(face, stickers)| stickers.iter().all(|&v| v as usize == face))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_counts<const N: usize>(cube: &Cube<N>) -> [usize; 6] {
        let mut counts = [0; 6];
        for &v in cube.state() {
            counts[v as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_solved_layout() {
        let cube = Cube::<3>::solved();

        assert_eq!(cube.state().len(), 54);
        assert!(cube.is_solved());
        assert_eq!(&cube.state()[..9], &[0; 9]);
        assert_eq!(&cube.state()[45..], &[5; 9]);
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert_eq!(
            Cube::<2>::new(vec![0; 54]),
            Err(EnvError::InvalidState {
                expected: 24,
                actual: 54
            })
        );
    }

    #[test]
    fn test_action_counts() {
        assert_eq!(Cube::<2>::solved().num_actions(), 12);
        assert_eq!(Cube::<3>::solved().num_actions(), 12);
        assert_eq!(Cube::<4>::solved().num_actions(), 24);
    }

    #[test]
    fn test_turn_does_not_mutate_receiver() {
        let cube = Cube::<2>::solved();
        let _child = cube.next_state(5).unwrap();
        assert!(cube.is_solved());
    }

    // Golden scenario: actions 0 and 1 are inverse turns of the same face.
    #[test]
    fn test_adjacent_actions_are_inverses() {
        let cube = Cube::<3>::solved();
        let back = cube.next_state(0).unwrap().next_state(1).unwrap();
        assert!(back.is_solved());
    }

    #[test]
    fn test_inverse_pairs_from_scrambled() {
        let mut cube = Cube::<4>::solved();
        for action in [3, 17, 8, 22, 0] {
            cube = cube.next_state(action).unwrap();
        }

        for pair in 0..cube.num_actions() / 2 {
            let there = cube.next_state(2 * pair).unwrap();
            let back = there.next_state(2 * pair + 1).unwrap();
            assert_eq!(back, cube);
        }
    }

    #[test]
    fn test_color_multiset_invariant() {
        let mut cube = Cube::<3>::solved();
        assert_eq!(color_counts(&cube), [9; 6]);

        for action in [0, 5, 7, 2, 11, 4, 9] {
            cube = cube.next_state(action).unwrap();
            assert_eq!(color_counts(&cube), [9; 6]);
        }
    }

    #[test]
    fn test_is_solved_only_for_goal() {
        for child in Cube::<2>::solved().next_states() {
            assert!(!child.is_solved());
        }
        for child in Cube::<4>::solved().next_states() {
            assert!(!child.is_solved());
        }
    }

    #[test]
    fn test_out_of_range() {
        let cube = Cube::<3>::solved();
        assert_eq!(
            cube.next_state(12),
            Err(EnvError::ActionOutOfRange {
                action: 12,
                num_actions: 12
            })
        );
    }
}
