//! Error taxonomy for environment construction and transitions.
//!
//! Every failure is a contract violation by the caller and is surfaced
//! immediately as a `Result`. Operations are pure and deterministic, so
//! there are no retries and nothing is ever swallowed or clamped.

use thiserror::Error;

/// Errors reported by environment constructors and transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Constructor input length does not match the expected state size
    /// (`dim²` for grid puzzles, `6·N²` for cubes). Fatal to construction;
    /// no partial environment is produced.
    #[error("state has {actual} entries, expected {expected}")]
    InvalidState { expected: usize, actual: usize },

    /// `next_state` was called with an action index at or beyond
    /// `num_actions()`. Negative actions are unrepresentable (`usize`).
    #[error("action {action} out of range, environment has {num_actions} actions")]
    ActionOutOfRange { action: usize, num_actions: usize },

    /// A sliding-tile state contains no zero-valued (blank) entry, or the
    /// supplied blank index does not point at a zero tile.
    #[error("sliding-tile state has no blank at the expected position")]
    MissingBlank,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EnvError::InvalidState {
            expected: 16,
            actual: 9,
        };
        assert_eq!(err.to_string(), "state has 9 entries, expected 16");

        let err = EnvError::ActionOutOfRange {
            action: 12,
            num_actions: 12,
        };
        assert_eq!(
            err.to_string(),
            "action 12 out of range, environment has 12 actions"
        );
    }
}
