//! Concrete puzzle models.
//!
//! Each puzzle owns its state encoding and action tables and implements
//! the shared [`crate::core::Environment`] contract. No puzzle depends on
//! another.

pub mod cube;
pub mod lights_out;
pub mod sliding;

pub use cube::{Cube, Cube2, Cube3, Cube4};
pub use lights_out::LightsOut;
pub use sliding::{Slide, SlidingPuzzle};
