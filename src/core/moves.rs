//! Move representation.

use serde::{Deserialize, Serialize};

use super::error::RulesError;
use super::piece::PIECE_COUNT;

/// Number of board cells.
pub const CELL_COUNT: usize = 9;

/// An immutable piece/cell pairing, the atomic unit every mutation consumes.
///
/// Both fields are range-checked at construction. An out-of-range value is a
/// caller bug and fails immediately instead of being clamped, so a `Move`
/// that exists is always addressable.
///
/// ```
/// use gobblers::core::Move;
///
/// let mv = Move::new(3, 4).unwrap();
/// assert_eq!(mv.piece(), 3);
/// assert_eq!(mv.cell(), 4);
///
/// assert!(Move::new(7, 0).is_err());
/// assert!(Move::new(0, 9).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    piece: u8,
    cell: u8,
}

impl Move {
    /// Create a move, range-checking both fields.
    pub fn new(piece: u8, cell: u8) -> Result<Self, RulesError> {
        if usize::from(piece) >= PIECE_COUNT {
            return Err(RulesError::PieceOutOfRange {
                number: usize::from(piece),
            });
        }
        if usize::from(cell) >= CELL_COUNT {
            return Err(RulesError::CellOutOfRange {
                cell: usize::from(cell),
            });
        }
        Ok(Self { piece, cell })
    }

    /// The piece number to play.
    #[must_use]
    pub const fn piece(self) -> u8 {
        self.piece
    }

    /// The target cell index.
    #[must_use]
    pub const fn cell(self) -> u8 {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "piece {} to cell {}", self.piece, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for piece in 0..PIECE_COUNT as u8 {
            for cell in 0..CELL_COUNT as u8 {
                let mv = Move::new(piece, cell).unwrap();
                assert_eq!(mv.piece(), piece);
                assert_eq!(mv.cell(), cell);
            }
        }
    }

    #[test]
    fn test_out_of_range_fails_construction() {
        assert_eq!(
            Move::new(7, 0),
            Err(RulesError::PieceOutOfRange { number: 7 })
        );
        assert_eq!(Move::new(0, 9), Err(RulesError::CellOutOfRange { cell: 9 }));
        assert!(Move::new(u8::MAX, u8::MAX).is_err());
    }

    #[test]
    fn test_display() {
        let mv = Move::new(2, 8).unwrap();
        assert_eq!(format!("{}", mv), "piece 2 to cell 8");
    }

    #[test]
    fn test_serialization() {
        let mv = Move::new(6, 0).unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
