//! Discrete action space: one index per (piece, cell) pair.

use tracing::error;

use crate::board::Board;
use crate::core::{Move, RulesError, CELL_COUNT, PIECE_COUNT};
use crate::player::Player;

/// Size of the discrete action space.
pub const ACTION_COUNT: usize = PIECE_COUNT * CELL_COUNT;

/// Map a discrete action index to a move.
///
/// ```
/// use gobblers::codec::decode_discrete;
///
/// let mv = decode_discrete(31).unwrap();
/// assert_eq!(mv.piece(), 3);
/// assert_eq!(mv.cell(), 4);
/// ```
pub fn decode_discrete(action: usize) -> Result<Move, RulesError> {
    if action >= ACTION_COUNT {
        return Err(RulesError::ActionOutOfRange { action });
    }
    Move::new((action / CELL_COUNT) as u8, (action % CELL_COUNT) as u8)
}

/// Inverse of `decode_discrete`.
#[must_use]
pub fn encode_discrete(mv: Move) -> usize {
    usize::from(mv.piece()) * CELL_COUNT + usize::from(mv.cell())
}

/// Per-action legality mask.
///
/// An actor restricted to enabled actions can never submit an illegal move;
/// for such actors the mask, not post-hoc validation, is the legality gate.
#[must_use]
pub fn action_mask(player: &Player, board: &Board) -> [bool; ACTION_COUNT] {
    let mut mask = [false; ACTION_COUNT];
    for (action, enabled) in mask.iter_mut().enumerate() {
        if let Ok(mv) = decode_discrete(action) {
            *enabled = player.can_move(board, mv);
        }
    }

    if mask.iter().all(|&enabled| !enabled) {
        error!(team = %player.team(), "no enabled action in mask");
    }
    mask
}
