//! Core abstractions: the environment contract, error taxonomy, RNG, and
//! scramble generation.
//!
//! Concrete puzzle models live in [`crate::puzzles`]; everything here is
//! puzzle-agnostic.

pub mod env;
pub mod error;
pub mod rng;
pub mod scramble;

pub use env::{Env, Environment};
pub use error::EnvError;
pub use rng::EnvRng;
pub use scramble::{generate_states, ScrambleBatch};
