/// Error taxonomy for draw generation.
use thiserror::Error;

use crate::constants::MIN_PARTICIPANTS;

/// Why a draw attempt produced no pairings.
///
/// There is no partial-success mode: a draw either returns a complete,
/// invariant-satisfying set of pairings or one of these errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Fewer participants than a valid assignment requires. Not retryable
    /// without changing the input.
    #[error("a draw needs at least {min} participants, got {found}", min = MIN_PARTICIPANTS)]
    InsufficientParticipants { found: usize },

    /// The random realization left no valid candidate for the final slots.
    /// Retryable: a re-run with fresh randomness may succeed. Retry policy
    /// belongs to the caller, never to the engine.
    #[error("no valid assignment remained for the final participants, re-run the draw")]
    PairingImpossible,
}

pub type Result<T> = std::result::Result<T, DrawError>;
