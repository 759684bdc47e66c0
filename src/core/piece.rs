//! Graded pieces.
//!
//! Each side owns one piece per number in `[0, PIECE_COUNT)`. The number is
//! the grading used directly in legality comparisons: a piece may only cover
//! an occupant with a strictly greater number, so lower numbers dominate.
//! The lowest-numbered unplayed piece is the canonical forced piece when a
//! single choice has to be made.

use serde::{Deserialize, Serialize};

use super::error::RulesError;
use super::team::Team;

/// Number of graded pieces per player.
pub const PIECE_COUNT: usize = 7;

/// A graded piece owned by one team.
///
/// Immutable once created. Ownership moves from a player's inventory to a
/// board cell on a successful move and never back except on a full reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    number: u8,
    team: Team,
}

impl Piece {
    /// Create a piece, range-checking the number.
    ///
    /// ```
    /// use gobblers::core::{Piece, Team};
    ///
    /// let piece = Piece::new(3, Team::Blue).unwrap();
    /// assert_eq!(piece.number(), 3);
    /// assert!(Piece::new(7, Team::Blue).is_err());
    /// ```
    pub fn new(number: u8, team: Team) -> Result<Self, RulesError> {
        if usize::from(number) >= PIECE_COUNT {
            return Err(RulesError::PieceOutOfRange {
                number: usize::from(number),
            });
        }
        Ok(Self { number, team })
    }

    /// The grading number, `0` being the dominant end of the scale.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    /// The owning team.
    #[must_use]
    pub const fn team(self) -> Team {
        self.team
    }
}
