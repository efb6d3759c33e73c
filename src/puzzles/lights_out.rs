//! Lights-Out on a `dim × dim` grid.
//!
//! Each cell is a light (0 off, 1 on). Pressing a cell toggles the cell
//! and its grid-adjacent neighbors, clipped at the edges. One action per
//! cell, so `num_actions()` is `dim²`. The goal is the all-dark grid.
//!
//! Pressing is addition mod 2 over a fixed toggle set, so every action is
//! its own inverse.

use smallvec::SmallVec;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::core::env::Environment;
use crate::core::error::EnvError;

/// Per-cell toggle sets: the pressed cell first, then its neighbors in
/// up, down, left, right order. Shared immutably across successors.
fn toggle_table(dim: usize) -> Arc<[SmallVec<[u16; 5]>]> {
    let cells = dim * dim;
    let mut table = Vec::with_capacity(cells);
    for z in 0..cells {
        let row = z / dim;
        let col = z % dim;
        let mut toggles = SmallVec::new();
        toggles.push(z as u16);
        if row > 0 {
            toggles.push((z - dim) as u16);
        }
        if row + 1 < dim {
            toggles.push((z + dim) as u16);
        }
        if col > 0 {
            toggles.push((z - 1) as u16);
        }
        if col + 1 < dim {
            toggles.push((z + 1) as u16);
        }
        table.push(toggles);
    }
    table.into()
}

/// Lights-Out environment.
///
/// ```
/// use puzzle_envs::{Environment, LightsOut};
///
/// let board = LightsOut::solved(2);
/// let pressed = board.next_state(0).unwrap();
/// assert_eq!(pressed.state(), &[1, 1, 1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct LightsOut {
    state: Vec<u8>,
    dim: usize,
    toggles: Arc<[SmallVec<[u16; 5]>]>,
}

impl LightsOut {
    /// Construct from a raw state of 0/1 light values.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidState`] when `state.len() != dim²`.
    pub fn new(state: Vec<u8>, dim: usize) -> Result<Self, EnvError> {
        let expected = dim * dim;
        if state.len() != expected {
            return Err(EnvError::InvalidState {
                expected,
                actual: state.len(),
            });
        }
        Ok(Self {
            state,
            dim,
            toggles: toggle_table(dim),
        })
    }

    /// The canonical goal: every light off.
    #[must_use]
    pub fn solved(dim: usize) -> Self {
        Self {
            state: vec![0; dim * dim],
            dim,
            toggles: toggle_table(dim),
        }
    }

    /// Grid side length.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Press a cell, toggling its set mod 2. Caller guarantees range.
    fn apply(&self, action: usize) -> Self {
        let mut state = self.state.clone();
        for &cell in &self.toggles[action] {
            state[cell as usize] ^= 1;
        }
        Self {
            state,
            dim: self.dim,
            toggles: Arc::clone(&self.toggles),
        }
    }
}

impl Environment for LightsOut {
    fn state(&self) -> &[u8] {
        &self.state
    }

    fn num_actions(&self) -> usize {
        self.dim * self.dim
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
        self.state.iter().all(|&v| v == 0)
    }
}

impl PartialEq for LightsOut {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.state == other.state
    }
}

impl Eq for LightsOut {}

impl Hash for LightsOut {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.dim.hash(hasher);
        self.state.hash(hasher);
    }
}
