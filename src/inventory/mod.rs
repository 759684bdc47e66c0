//! Per-player piece bookkeeping.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Piece, RulesError, Team, PIECE_COUNT};

/// Tracks which of a player's graded pieces remain unplayed.
///
/// Entries only ever move from unplayed to played; the sole way back is a
/// full `reset`. Exhaustion (`minimum_available` returning `None`) is a
/// terminal gameplay condition, distinct from "no legal destination", which
/// is the board's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceInventory {
    unplayed: [bool; PIECE_COUNT],
}

impl PieceInventory {
    /// Create a full inventory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            unplayed: [true; PIECE_COUNT],
        }
    }

    /// Mark every piece unplayed.
    pub fn reset(&mut self) {
        self.unplayed = [true; PIECE_COUNT];
    }

    /// Whether `number` is still unplayed.
    ///
    /// An out-of-range number is an error, not a silent `false`: callers
    /// must never probe non-existent pieces.
    pub fn has(&self, number: u8) -> Result<bool, RulesError> {
        self.unplayed
            .get(usize::from(number))
            .copied()
            .ok_or(RulesError::PieceOutOfRange {
                number: usize::from(number),
            })
    }

    /// The lowest-numbered unplayed piece, `None` when exhausted.
    #[must_use]
    pub fn minimum_available(&self) -> Option<u8> {
        self.unplayed.iter().position(|&unplayed| unplayed).map(|i| i as u8)
    }

    /// Mark `number` as played.
    ///
    /// Consuming an already-played piece is a contract violation and fails
    /// with `PieceAlreadyPlayed`.
    pub fn consume(&mut self, number: u8) -> Result<(), RulesError> {
        let slot = self.unplayed.get_mut(usize::from(number)).ok_or(
            RulesError::PieceOutOfRange {
                number: usize::from(number),
            },
        )?;
        if !*slot {
            return Err(RulesError::PieceAlreadyPlayed { number });
        }
        *slot = false;
        Ok(())
    }

    /// Number of unplayed pieces.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.unplayed.iter().filter(|&&unplayed| unplayed).count()
    }

    /// All unplayed piece numbers the board accepts at `cell`, ascending.
    ///
    /// Mirrors `Board::can_place`; the analog decoder depends on the two
    /// staying in lock-step.
    #[must_use]
    pub fn legal_pieces(&self, board: &Board, team: Team, cell: usize) -> SmallVec<[u8; PIECE_COUNT]> {
        (0..PIECE_COUNT as u8)
            .filter(|&number| self.unplayed[usize::from(number)])
            .filter_map(|number| Piece::new(number, team).ok())
            .filter(|&piece| board.can_place(piece, cell))
            .map(|piece| piece.number())
            .collect()
    }
}

impl Default for PieceInventory {
    fn default() -> Self {
        Self::new()
    }
}
