//! Random-walk scramble generation for building solver datasets.
//!
//! A scramble starts from a caller-supplied state (usually the goal) and
//! steps through uniformly chosen children for a random number of moves.
//! The walk length is recorded as the cost of the resulting state; it is
//! an upper bound on the true solution length, which is what distance
//! estimators are trained against.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::core::env::Environment;
use crate::core::rng::EnvRng;

/// Generate `count` scrambled environments by random walks from `start`.
///
/// Each walk picks a depth uniformly from `depths` (inclusive), then takes
/// that many uniform steps through `next_states()`. Stepping through the
/// child set means border-blocked sliding-tile moves are never selected,
/// so every step changes the state.
///
/// Returns the scrambled environments and their walk lengths, in the same
/// order.
pub fn generate_states<E>(
    start: &E,
    count: usize,
    depths: RangeInclusive<usize>,
    rng: &mut EnvRng,
) -> (Vec<E>, Vec<u32>)
where
    E: Environment + Clone,
{
    let mut states = Vec::with_capacity(count);
    let mut costs = Vec::with_capacity(count);

    for _ in 0..count {
        let depth = rng.gen_range_inclusive(depths.clone());
        let mut current = start.clone();
        for _ in 0..depth {
            let children = current.next_states();
            // Every puzzle has at least one child from any state.
            if let Some(child) = rng.choose(&children) {
                current = child.clone();
            }
        }
        states.push(current);
        costs.push(depth as u32);
    }

    (states, costs)
}

/// Plain-data snapshot of a scramble run: raw states plus walk costs.
///
/// This is the shape downstream training pipelines consume. The crate does
/// no file IO; serialize with any serde format and store it yourself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleBatch {
    /// Encoded states, one per scramble.
    pub states: Vec<Vec<u8>>,
    /// Walk length that produced each state.
    pub costs: Vec<u32>,
}

impl ScrambleBatch {
    /// Snapshot the raw bytes out of a set of scrambled environments.
    #[must_use]
    pub fn from_envs<E: Environment>(envs: &[E], costs: Vec<u32>) -> Self {
        Self {
            states: envs.iter().map(|e| e.state().to_vec()).collect(),
            costs,
        }
    }

    /// Number of scrambles in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True if the batch holds no scrambles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::{Cube, LightsOut, SlidingPuzzle};

    #[test]
    fn test_generate_states_counts_and_depths() {
        let goal = Cube::<2>::solved();
        let mut rng = EnvRng::new(7);

        let (states, costs) = generate_states(&goal, 20, 5..=10, &mut rng);

        assert_eq!(states.len(), 20);
        assert_eq!(costs.len(), 20);
        assert!(costs.iter().all(|&c| (5..=10).contains(&(c as usize))));
    }

    #[test]
    fn test_generate_states_deterministic() {
        let goal = LightsOut::solved(4);

        let mut rng1 = EnvRng::new(123);
        let mut rng2 = EnvRng::new(123);
        let (states1, costs1) = generate_states(&goal, 10, 1..=8, &mut rng1);
        let (states2, costs2) = generate_states(&goal, 10, 1..=8, &mut rng2);

        assert_eq!(costs1, costs2);
        for (a, b) in states1.iter().zip(&states2) {
            assert_eq!(a.state(), b.state());
        }
    }

    #[test]
    fn test_zero_depth_walk_is_start() {
        let goal = SlidingPuzzle::solved(3);
        let mut rng = EnvRng::new(1);

        let (states, costs) = generate_states(&goal, 3, 0..=0, &mut rng);

        assert_eq!(costs, vec![0, 0, 0]);
        assert!(states.iter().all(SlidingPuzzle::is_solved));
    }

    #[test]
    fn test_scramble_batch_serde() {
        let goal = Cube::<3>::solved();
        let mut rng = EnvRng::new(9);
        let (states, costs) = generate_states(&goal, 4, 1..=6, &mut rng);

        let batch = ScrambleBatch::from_envs(&states, costs);
        assert_eq!(batch.len(), 4);

        let json = serde_json::to_string(&batch).unwrap();
        let decoded: ScrambleBatch = serde_json::from_str(&json).unwrap();

        assert_eq!(batch, decoded);
    }
}
