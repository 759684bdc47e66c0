//! Paired-continuous action decoding.
//!
//! Two scalars in `[-1, 1]` select first a cell, then a piece, each from the
//! currently-legal list, so any in-range pair decodes to a legal move. Many
//! scalar pairs collapse onto the same move; that precision is traded away
//! to keep a continuous-action actor from ever producing an illegal move.
//! Only decoding is defined; there is no exact inverse.

use crate::board::Board;
use crate::core::{Move, RulesError};
use crate::player::Player;

/// Decode a `(cell, piece)` scalar pair into a legal move.
///
/// Stage one picks the cell among the legal destinations of the smallest
/// available piece; stage two picks the piece among the legal pieces for
/// that cell. Callers are expected to have checked `can_make_any_move`
/// first; decoding with no available piece or no legal cell fails with
/// `NoLegalMove`.
pub fn decode_analog(
    cell_scalar: f32,
    piece_scalar: f32,
    player: &Player,
    board: &Board,
) -> Result<Move, RulesError> {
    let minimum = player.minimum_piece().ok_or(RulesError::NoLegalMove)?;

    let cells = board.legal_cells(minimum);
    let cell = cells[signed_unit_to_index(cell_scalar, cells.len())?];

    let pieces = player
        .inventory()
        .legal_pieces(board, player.team(), usize::from(cell));
    let piece = pieces[signed_unit_to_index(piece_scalar, pieces.len())?];

    Move::new(piece, cell)
}

/// Normalize a scalar in `[-1, 1]` onto an index in `[0, count)`.
///
/// `floor(((x + 1) / 2) * count)`, with the upper boundary `x = 1` clamped
/// to `count - 1`.
pub fn signed_unit_to_index(value: f32, count: usize) -> Result<usize, RulesError> {
    if count == 0 {
        return Err(RulesError::NoLegalMove);
    }
    if !(-1.0..=1.0).contains(&value) {
        return Err(RulesError::ScalarOutOfRange { value });
    }

    let unit = (value + 1.0) / 2.0;
    let index = (unit * count as f32).floor() as usize;
    Ok(index.min(count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, Team, CELL_COUNT, PIECE_COUNT};

    #[test]
    fn test_signed_unit_boundaries() {
        assert_eq!(signed_unit_to_index(-1.0, 9).unwrap(), 0);
        assert_eq!(signed_unit_to_index(1.0, 9).unwrap(), 8);
        assert_eq!(signed_unit_to_index(0.0, 2).unwrap(), 1);
        assert_eq!(signed_unit_to_index(-0.1, 2).unwrap(), 0);
    }

    #[test]
    fn test_signed_unit_rejects_out_of_range() {
        assert!(matches!(
            signed_unit_to_index(1.5, 9),
            Err(RulesError::ScalarOutOfRange { .. })
        ));
        assert!(matches!(
            signed_unit_to_index(-1.01, 9),
            Err(RulesError::ScalarOutOfRange { .. })
        ));
        assert!(matches!(
            signed_unit_to_index(f32::NAN, 9),
            Err(RulesError::ScalarOutOfRange { .. })
        ));
    }

    #[test]
    fn test_signed_unit_with_no_options() {
        assert_eq!(signed_unit_to_index(0.0, 0), Err(RulesError::NoLegalMove));
    }

    #[test]
    fn test_decode_lowest_scalars_pick_first_options() {
        let board = Board::new();
        let player = Player::new(Team::Blue);

        let mv = decode_analog(-1.0, -1.0, &player, &board).unwrap();
        assert_eq!(mv.cell(), 0);
        assert_eq!(mv.piece(), 0);
    }

    #[test]
    fn test_decode_highest_scalars_pick_last_options() {
        let board = Board::new();
        let player = Player::new(Team::Blue);

        let mv = decode_analog(1.0, 1.0, &player, &board).unwrap();
        assert_eq!(mv.cell(), (CELL_COUNT - 1) as u8);
        assert_eq!(mv.piece(), (PIECE_COUNT - 1) as u8);
    }

    #[test]
    fn test_decode_skips_dominated_cells() {
        // Cell 0 is topped by red's 0; the minimum blue piece cannot land
        // there, so the first legal cell is 1.
        let mut board = Board::new();
        board
            .place(Piece::new(0, Team::Red).unwrap(), 0)
            .unwrap();
        let player = Player::new(Team::Blue);

        let mv = decode_analog(-1.0, -1.0, &player, &board).unwrap();
        assert_eq!(mv.cell(), 1);
    }

    #[test]
    fn test_decode_restricts_pieces_to_the_chosen_cell() {
        // Cell 4 is topped by red's 3; covering it takes a piece under 3.
        let mut board = Board::new();
        for cell in 0..CELL_COUNT {
            if cell != 4 {
                board
                    .place(Piece::new(0, Team::Red).unwrap(), cell)
                    .unwrap();
            }
        }
        board
            .place(Piece::new(3, Team::Red).unwrap(), 4)
            .unwrap();

        let player = Player::new(Team::Blue);
        let mv = decode_analog(0.0, 1.0, &player, &board).unwrap();
        assert_eq!(mv.cell(), 4);
        assert_eq!(mv.piece(), 2);
        assert!(player.can_move(&board, mv));
    }

    #[test]
    fn test_decode_with_exhausted_inventory_fails() {
        let board = Board::new();
        let mut player = Player::new(Team::Blue);
        {
            let mut scratch = Board::new();
            for number in 0..PIECE_COUNT as u8 {
                player.start_turn(&scratch);
                player
                    .submit_move(&mut scratch, Move::new(number, number).unwrap())
                    .unwrap();
                player.settle();
            }
        }

        assert_eq!(
            decode_analog(0.0, 0.0, &player, &board),
            Err(RulesError::NoLegalMove)
        );
    }

    #[test]
    fn test_decode_with_no_destination_fails() {
        let mut board = Board::new();
        for cell in 0..CELL_COUNT {
            board
                .place(Piece::new(0, Team::Red).unwrap(), cell)
                .unwrap();
        }

        let player = Player::new(Team::Blue);
        assert_eq!(
            decode_analog(0.0, 0.0, &player, &board),
            Err(RulesError::NoLegalMove)
        );
    }
}
