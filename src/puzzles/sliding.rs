//! N-tile sliding puzzle on a `dim × dim` grid.
//!
//! The state is the grid flattened row-major; value 0 is the blank. An
//! action slides the tile on one side of the blank into the blank's cell,
//! identified by where that tile sits relative to the blank: above, below,
//! left, or right.
//!
//! ## Border policy
//!
//! All four actions exist for every state (`num_actions()` is always 4),
//! but an action whose source cell lies outside the grid is a no-op:
//! `next_state` returns an identical successor, and `next_states` omits it
//! entirely. The per-state branching factor is therefore 2 or 3 at corners
//! and edges.
//!
//! ## Goal
//!
//! The identity ordering `0, 1, ..., dim²-1`, blank at index 0.

use smallvec::SmallVec;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::core::env::Environment;
use crate::core::error::EnvError;

/// The four tile slides, named by where the moved tile sits relative to
/// the blank. `Slide as usize` is the action index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slide {
    /// Tile above the blank moves down into it (action 0).
    Above,
    /// Tile below the blank moves up into it (action 1).
    Below,
    /// Tile left of the blank moves right into it (action 2).
    Left,
    /// Tile right of the blank moves left into it (action 3).
    Right,
}

impl Slide {
    /// All slides in canonical action order.
    pub const ALL: [Slide; 4] = [Slide::Above, Slide::Below, Slide::Left, Slide::Right];

    /// The action index of this slide.
    #[must_use]
    pub const fn action(self) -> usize {
        self as usize
    }

    /// The slide that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Slide::Above => Slide::Below,
            Slide::Below => Slide::Above,
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
        }
    }
}

/// Per-blank-position swap targets, one `Option` per action.
///
/// `table[blank][action]` is the cell whose tile slides into the blank, or
/// `None` when that cell lies outside the grid. Built once per puzzle
/// lineage and shared immutably across all successors.
fn blank_swap_table(dim: usize) -> Arc<[[Option<u16>; 4]]> {
    let cells = dim * dim;
    let mut table = Vec::with_capacity(cells);
    for z in 0..cells {
        let row = z / dim;
        let col = z % dim;
        table.push([
            (row > 0).then(|| (z - dim) as u16),
            (row + 1 < dim).then(|| (z + dim) as u16),
            (col > 0).then(|| (z - 1) as u16),
            (col + 1 < dim).then(|| (z + 1) as u16),
        ]);
    }
    table.into()
}

/// Sliding-tile puzzle environment.
///
/// ```
/// use puzzle_envs::{Environment, Slide, SlidingPuzzle};
///
/// let puzzle = SlidingPuzzle::new(vec![1, 2, 3, 0], 2).unwrap();
/// let child = puzzle.next_state(Slide::Above.action()).unwrap();
/// assert_eq!(child.state(), &[1, 0, 3, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct SlidingPuzzle {
    state: Vec<u8>,
    dim: usize,
    blank: usize,
    swaps: Arc<[[Option<u16>; 4]]>,
}

impl SlidingPuzzle {
    const NUM_ACTIONS: usize = 4;

    /// Construct from a raw state, inferring the blank by scanning for 0.
    ///
    /// Tile values are stored as `u8`, so `dim` is limited to 16.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidState`] when `state.len() != dim²`;
    /// [`EnvError::MissingBlank`] when no entry is 0.
    pub fn new(state: Vec<u8>, dim: usize) -> Result<Self, EnvError> {
        let blank = state
            .iter()
            .position(|&v| v == 0)
            .ok_or(EnvError::MissingBlank)?;
        Self::with_blank(state, dim, blank)
    }

    /// Construct from a raw state with a known blank index.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidState`] when `state.len() != dim²`;
    /// [`EnvError::MissingBlank`] when `state[blank]` is not 0.
    pub fn with_blank(state: Vec<u8>, dim: usize, blank: usize) -> Result<Self, EnvError> {
        let expected = dim * dim;
        if state.len() != expected {
            return Err(EnvError::InvalidState {
                expected,
                actual: state.len(),
            });
        }
        if state.get(blank) != Some(&0) {
            return Err(EnvError::MissingBlank);
        }
        Ok(Self {
            state,
            dim,
            blank,
            swaps: blank_swap_table(dim),
        })
    }

    /// The canonical goal: tiles in identity order, blank at index 0.
    #[must_use]
    pub fn solved(dim: usize) -> Self {
        let state = (0..dim * dim).map(|v| v as u8).collect();
        Self {
            state,
            dim,
            blank: 0,
            swaps: blank_swap_table(dim),
        }
    }

    /// Grid side length.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Current blank index.
    #[must_use]
    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Actions that actually move a tile from this state, in canonical
    /// order. Between 2 and 4 entries depending on the blank's position.
    #[must_use]
    pub fn legal_actions(&self) -> SmallVec<[usize; 4]> {
        self.swaps[self.blank]
            .iter()
            .enumerate()
            .filter_map(|(a, target)| target.map(|_| a))
            .collect()
    }

    /// Apply an in-range action. Blocked border moves return a copy.
    fn apply(&self, action: usize) -> Self {
        match self.swaps[self.blank][action] {
            Some(target) => {
                let target = target as usize;
                let mut state = self.state.clone();
                state.swap(self.blank, target);
                Self {
                    state,
                    dim: self.dim,
                    blank: target,
                    swaps: Arc::clone(&self.swaps),
                }
            }
            None => self.clone(),
        }
    }
}

impl Environment for SlidingPuzzle {
    fn state(&self) -> &[u8] {
        &self.state
    }

    fn num_actions(&self) -> usize {
        Self::NUM_ACTIONS
    }

    fn next_state(&self, action: usize) -> Result<Self, EnvError> {
        if action >= Self::NUM_ACTIONS {
            return Err(EnvError::ActionOutOfRange {
                action,
                num_actions: Self::NUM_ACTIONS,
            });
        }
        Ok(self.apply(action))
    }

    fn next_states(&self) -> Vec<Self> {
        self.legal_actions()
            .into_iter()
            .map(|a| self.apply(a))
            .collect()
    }

    fn is_solved(&self) -> bool {
        self.state.iter().enumerate().all(|(i, &v)| v as usize == i)
    }
}

// The swap table is a function of `dim`, so state + dim identify a puzzle.
impl PartialEq for SlidingPuzzle {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.state == other.state
    }
}

impl Eq for SlidingPuzzle {}

impl Hash for SlidingPuzzle {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.dim.hash(hasher);
        self.state.hash(hasher);
    }
}
