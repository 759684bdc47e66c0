//! Board state and win geometry.
//!
//! The board is the sole authority on cell occupancy and per-cell legality.
//! Each cell tracks only its topmost piece: a covered piece is logically
//! replaced and never resurfaces, so the occupant chain of any cell is
//! strictly decreasing in piece number over a game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::error;

use crate::core::{Piece, RulesError, Team, CELL_COUNT};

mod masks;

pub use masks::WIN_MASKS;

/// The board's verdict after a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game continues.
    Continue,
    /// The placing team completed a line.
    Win(Team),
}

/// The 3x3 playing surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Clear all cells. Idempotent.
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// The topmost piece at `cell`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `cell >= CELL_COUNT`; callers are expected to range-check.
    #[must_use]
    pub fn top_piece(&self, cell: usize) -> Option<Piece> {
        self.cells[cell]
    }

    /// Whether `piece` may be placed on `cell`.
    ///
    /// True iff the cell is empty or its occupant has a strictly greater
    /// number. An out-of-range cell is reported and treated as unplaceable.
    #[must_use]
    pub fn can_place(&self, piece: Piece, cell: usize) -> bool {
        let Some(slot) = self.cells.get(cell) else {
            error!(cell, "cell index is out of range");
            return false;
        };
        match slot {
            None => true,
            Some(top) => top.number() > piece.number(),
        }
    }

    /// Place `piece` on `cell` and evaluate the win lines.
    ///
    /// Fails with `IllegalMove` when `can_place` rejects the placement; the
    /// board is left untouched in that case.
    pub fn place(&mut self, piece: Piece, cell: usize) -> Result<Outcome, RulesError> {
        if cell >= CELL_COUNT {
            return Err(RulesError::CellOutOfRange { cell });
        }
        if !self.can_place(piece, cell) {
            return Err(RulesError::IllegalMove {
                piece: piece.number(),
                cell: cell as u8,
            });
        }

        self.cells[cell] = Some(piece);

        if masks::wins_at(self.mask(piece.team()), cell as u8) {
            Ok(Outcome::Win(piece.team()))
        } else {
            Ok(Outcome::Continue)
        }
    }

    /// The 9-bit occupancy mask for a team: bit `i` is set iff cell `i`'s
    /// top piece belongs to that team. The two team masks never overlap.
    #[must_use]
    pub fn mask(&self, team: Team) -> u16 {
        let mut mask = 0u16;
        for (cell, slot) in self.cells.iter().enumerate() {
            if slot.is_some_and(|p| p.team() == team) {
                mask |= 1 << cell;
            }
        }
        mask
    }

    /// Whether `piece` has at least one legal destination.
    #[must_use]
    pub fn can_any_move(&self, piece: Piece) -> bool {
        (0..CELL_COUNT).any(|cell| self.can_place(piece, cell))
    }

    /// All legal destinations for `piece`, in ascending cell order.
    #[must_use]
    pub fn legal_cells(&self, piece: Piece) -> SmallVec<[u8; CELL_COUNT]> {
        (0..CELL_COUNT as u8)
            .filter(|&cell| self.can_place(piece, usize::from(cell)))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
