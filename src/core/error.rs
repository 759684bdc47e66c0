//! Typed rules errors.
//!
//! One enum covers three families:
//!
//! - **Contract violations** (out-of-range values, reusing a consumed piece,
//!   submitting out of turn): caller bugs, surfaced immediately, never
//!   recovered silently.
//! - **Gameplay-illegal moves** (`IllegalMove`): expected, recoverable, and
//!   the trigger for the forfeit transition.
//! - **`NoLegalMove`**: the expected terminal condition reported by decoders
//!   when the caller skipped the `can_make_any_move` check.

use thiserror::Error;

/// Errors reported by the rules engine and the action codecs.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RulesError {
    /// Piece number outside `[0, PIECE_COUNT)`.
    #[error("piece number {number} is out of range")]
    PieceOutOfRange { number: usize },

    /// Cell index outside `[0, CELL_COUNT)`.
    #[error("cell index {cell} is out of range")]
    CellOutOfRange { cell: usize },

    /// Placement rejected: the piece is already played or the target cell
    /// holds a piece it cannot cover.
    #[error("illegal move: piece {piece} cannot be placed on cell {cell}")]
    IllegalMove { piece: u8, cell: u8 },

    /// A piece was consumed twice without an intervening reset.
    #[error("piece {number} has already been played")]
    PieceAlreadyPlayed { number: u8 },

    /// Discrete action index outside `[0, ACTION_COUNT)`.
    #[error("discrete action {action} is out of range")]
    ActionOutOfRange { action: usize },

    /// Continuous action scalar outside `[-1, 1]`.
    #[error("action scalar {value} is outside [-1, 1]")]
    ScalarOutOfRange { value: f32 },

    /// A move was submitted while the player was not waiting for one.
    #[error("player is not waiting for a move")]
    NotWaitingForMove,

    /// Decoding was attempted with no available piece or no legal cell.
    #[error("no legal move is available")]
    NoLegalMove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RulesError::IllegalMove { piece: 5, cell: 4 };
        assert_eq!(
            format!("{}", err),
            "illegal move: piece 5 cannot be placed on cell 4"
        );

        let err = RulesError::PieceAlreadyPlayed { number: 2 };
        assert_eq!(format!("{}", err), "piece 2 has already been played");
    }
}
