//! # puzzle-envs
//!
//! Combinatorial puzzle environments for search and RL training: an
//! N-tile sliding puzzle, Lights-Out, and Rubik's cubes of order 2, 3,
//! and 4 behind one uniform contract.
//!
//! ## Design Principles
//!
//! 1. **Uniform contract**: every puzzle exposes state, action count,
//!    deterministic transition, and goal test through [`Environment`].
//!    Search code (BFS, A*, MCTS, learned planners) never sees puzzle
//!    internals.
//!
//! 2. **Immutable snapshots**: a puzzle instance is one state. Transitions
//!    return newly owned successors; the receiver is never mutated.
//!
//! 3. **Precomputed action tables**: puzzle mechanics are index
//!    permutation/swap tables applied to flat byte arrays. Tables are
//!    built once, immutable afterwards, and shared across instances and
//!    threads.
//!
//! ## Modules
//!
//! - `core`: the `Environment` trait, the `Env` sum type, errors, RNG,
//!   scramble generation
//! - `puzzles`: the five concrete puzzle models
//!
//! ## Example
//!
//! ```
//! use puzzle_envs::{Cube, Environment};
//!
//! let cube = Cube::<3>::solved();
//! let children = cube.next_states();
//! assert_eq!(children.len(), cube.num_actions());
//! assert!(children.iter().all(|c| !c.is_solved()));
//! ```

pub mod core;
pub mod puzzles;

pub use crate::core::{generate_states, Env, EnvError, EnvRng, Environment, ScrambleBatch};
pub use crate::puzzles::{Cube, Cube2, Cube3, Cube4, LightsOut, Slide, SlidingPuzzle};
