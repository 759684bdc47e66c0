//! Core value types: teams, pieces, moves, errors.
//!
//! These are the building blocks everything else consumes. All of them are
//! small `Copy` values with range checks at the constructor boundary.

pub mod error;
pub mod moves;
pub mod piece;
pub mod team;

pub use error::RulesError;
pub use moves::{Move, CELL_COUNT};
pub use piece::{Piece, PIECE_COUNT};
pub use team::Team;
