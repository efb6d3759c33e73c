//! The shared environment contract and the closed sum type over all
//! puzzle kinds.
//!
//! ## Contract
//!
//! Every puzzle is an immutable snapshot of one state. Transitions never
//! mutate the receiver; they return a newly owned successor of the same
//! concrete type. External search code relies on:
//!
//! - `num_actions()` being fixed per instance type (pre-sizing tree nodes)
//! - `next_states()` preserving the canonical `0..num_actions()` ordering
//!   across calls (mapping tree edges back to concrete moves)
//! - `state()` being usable as a byte-comparable, hashable key for
//!   visited-state deduplication
//!
//! ## Concurrency
//!
//! All operations are pure and synchronous. Action tables are immutable
//! after initialization and shared across instances and threads; every
//! successor is independently owned, so callers may expand children in
//! parallel.

use crate::core::error::EnvError;
use crate::puzzles::{Cube, LightsOut, SlidingPuzzle};

/// Uniform interface over all puzzle environments.
///
/// Implementations are value types: `next_state` hands ownership of the
/// successor to the caller, and the receiver is left untouched.
pub trait Environment: Sized {
    /// The current encoded state, one small unsigned integer per
    /// cell/light/sticker. Does not expose internal table references.
    fn state(&self) -> &[u8];

    /// Fixed branching-factor upper bound for this environment type.
    fn num_actions(&self) -> usize;

    /// Apply exactly one action, returning a new instance.
    ///
    /// Fails with [`EnvError::ActionOutOfRange`] when `action` is not in
    /// `0..num_actions()`.
    fn next_state(&self, action: usize) -> Result<Self, EnvError>;

    /// All children, in increasing action order.
    ///
    /// Length equals `num_actions()` for every puzzle except the sliding
    /// tile, which omits moves blocked by the grid border.
    fn next_states(&self) -> Vec<Self>;

    /// True iff the state equals this puzzle's canonical goal.
    fn is_solved(&self) -> bool;
}

/// Closed tagged variant over the five puzzle kinds.
///
/// Search code that mixes puzzle types at runtime dispatches through this
/// enum instead of a trait object, keeping successors as plain owned
/// values.
///
/// ```
/// use puzzle_envs::{Env, Environment, SlidingPuzzle};
///
/// let env = Env::from(SlidingPuzzle::solved(3));
/// assert!(env.is_solved());
/// assert_eq!(env.num_actions(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Env {
    /// N-tile sliding puzzle (`PuzzleN` in the original formulation).
    Sliding(SlidingPuzzle),
    /// Lights-Out toggle grid.
    LightsOut(LightsOut),
    /// 2×2×2 pocket cube.
    Cube2(Cube<2>),
    /// 3×3×3 Rubik's cube.
    Cube3(Cube<3>),
    /// 4×4×4 cube with outer and inner-slice turns.
    Cube4(Cube<4>),
}

impl Environment for Env {
    fn state(&self) -> &[u8] {
        match self {
            Env::Sliding(p) => p.state(),
            Env::LightsOut(p) => p.state(),
            Env::Cube2(p) => p.state(),
            Env::Cube3(p) => p.state(),
            Env::Cube4(p) => p.state(),
        }
    }

    fn num_actions(&self) -> usize {
        match self {
            Env::Sliding(p) => p.num_actions(),
            Env::LightsOut(p) => p.num_actions(),
            Env::Cube2(p) => p.num_actions(),
            Env::Cube3(p) => p.num_actions(),
            Env::Cube4(p) => p.num_actions(),
        }
    }

    fn next_state(&self, action: usize) -> Result<Self, EnvError> {
        Ok(match self {
            Env::Sliding(p) => Env::Sliding(p.next_state(action)?),
            Env::LightsOut(p) => Env::LightsOut(p.next_state(action)?),
            Env::Cube2(p) => Env::Cube2(p.next_state(action)?),
            Env::Cube3(p) => Env::Cube3(p.next_state(action)?),
            Env::Cube4(p) => Env::Cube4(p.next_state(action)?),
        })
    }

    fn next_states(&self) -> Vec<Self> {
        match self {
            Env::Sliding(p) => p.next_states().into_iter().map(Env::Sliding).collect(),
            Env::LightsOut(p) => p.next_states().into_iter().map(Env::LightsOut).collect(),
            Env::Cube2(p) => p.next_states().into_iter().map(Env::Cube2).collect(),
            Env::Cube3(p) => p.next_states().into_iter().map(Env::Cube3).collect(),
            Env::Cube4(p) => p.next_states().into_iter().map(Env::Cube4).collect(),
        }
    }

    fn is_solved(&self) -> bool {
        match self {
            Env::Sliding(p) => p.is_solved(),
            Env::LightsOut(p) => p.is_solved(),
            Env::Cube2(p) => p.is_solved(),
            Env::Cube3(p) => p.is_solved(),
            Env::Cube4(p) => p.is_solved(),
        }
    }
}

impl From<SlidingPuzzle> for Env {
    fn from(p: SlidingPuzzle) -> Self {
        Env::Sliding(p)
    }
}

impl From<LightsOut> for Env {
    fn from(p: LightsOut) -> Self {
        Env::LightsOut(p)
    }
}

impl From<Cube<2>> for Env {
    fn from(p: Cube<2>) -> Self {
        Env::Cube2(p)
    }
}

impl From<Cube<3>> for Env {
    fn from(p: Cube<3>) -> Self {
        Env::Cube3(p)
    }
}

impl From<Cube<4>> for Env {
    fn from(p: Cube<4>) -> Self {
        Env::Cube4(p)
    }
}
