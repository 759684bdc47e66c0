//! Observation encoding for learned policies.
//!
//! Flattens the board and both inventories into the fixed-size feature
//! vectors the two agent variants consume. Encoders are stateless; the
//! perspective comes from which player is passed as the observer.

use crate::board::Board;
use crate::core::{Team, CELL_COUNT, PIECE_COUNT};
use crate::player::Player;

/// Encodes the visible game state from one player's perspective.
pub trait ObservationEncoder {
    /// Encode the state as a flat feature vector of length `feature_count`.
    fn encode(&self, board: &Board, player: &Player, rival: &Player) -> Vec<f32>;

    /// Number of features produced.
    fn feature_count(&self) -> usize;
}

/// One-hot board layout.
///
/// Per cell: a `PIECE_COUNT`-wide one-hot of the top piece's number (all
/// zero when empty) plus an is-red flag; then both inventories' unplayed
/// flags. 86 features in total.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscreteObservation;

impl ObservationEncoder for DiscreteObservation {
    fn encode(&self, board: &Board, player: &Player, rival: &Player) -> Vec<f32> {
        let mut features = Vec::with_capacity(self.feature_count());

        for cell in 0..CELL_COUNT {
            let top = board.top_piece(cell);
            for number in 0..PIECE_COUNT as u8 {
                features.push(flag(top.is_some_and(|p| p.number() == number)));
            }
            features.push(flag(top.is_some_and(|p| p.team() == Team::Red)));
        }

        push_inventory(&mut features, player);
        push_inventory(&mut features, rival);
        features
    }

    fn feature_count(&self) -> usize {
        CELL_COUNT * (PIECE_COUNT + 1) + 2 * PIECE_COUNT
    }
}

/// Signed-scalar board layout.
///
/// Per cell: `±(number + 1) / PIECE_COUNT`, positive for the observer's
/// team and zero when empty; then both inventories. 23 features in total.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalogObservation;

impl ObservationEncoder for AnalogObservation {
    fn encode(&self, board: &Board, player: &Player, rival: &Player) -> Vec<f32> {
        let mut features = Vec::with_capacity(self.feature_count());

        for cell in 0..CELL_COUNT {
            features.push(match board.top_piece(cell) {
                None => 0.0,
                Some(piece) => {
                    let sign = if piece.team() == player.team() { 1.0 } else { -1.0 };
                    sign * f32::from(piece.number() + 1) / PIECE_COUNT as f32
                }
            });
        }

        push_inventory(&mut features, player);
        push_inventory(&mut features, rival);
        features
    }

    fn feature_count(&self) -> usize {
        CELL_COUNT + 2 * PIECE_COUNT
    }
}

fn push_inventory(features: &mut Vec<f32>, player: &Player) {
    for number in 0..PIECE_COUNT as u8 {
        features.push(flag(matches!(player.inventory().has(number), Ok(true))));
    }
}

fn flag(set: bool) -> f32 {
    if set {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    fn players() -> (Player, Player) {
        (Player::new(Team::Blue), Player::new(Team::Red))
    }

    #[test]
    fn test_feature_counts() {
        assert_eq!(DiscreteObservation.feature_count(), 86);
        assert_eq!(AnalogObservation.feature_count(), 23);
    }

    #[test]
    fn test_encoded_length_matches_feature_count() {
        let board = Board::new();
        let (blue, red) = players();

        let encoded = DiscreteObservation.encode(&board, &blue, &red);
        assert_eq!(encoded.len(), DiscreteObservation.feature_count());

        let encoded = AnalogObservation.encode(&board, &blue, &red);
        assert_eq!(encoded.len(), AnalogObservation.feature_count());
    }

    #[test]
    fn test_discrete_one_hot_per_cell() {
        let mut board = Board::new();
        board
            .place(Piece::new(2, Team::Red).unwrap(), 0)
            .unwrap();
        let (blue, red) = players();

        let encoded = DiscreteObservation.encode(&board, &blue, &red);

        // Cell 0 block: one-hot index 2 set, is-red flag set.
        assert_eq!(encoded[2], 1.0);
        assert_eq!(encoded[PIECE_COUNT], 1.0);
        for index in 0..PIECE_COUNT {
            if index != 2 {
                assert_eq!(encoded[index], 0.0);
            }
        }

        // Cell 1 block: empty, everything zero.
        let base = PIECE_COUNT + 1;
        for index in base..base + PIECE_COUNT + 1 {
            assert_eq!(encoded[index], 0.0);
        }
    }

    #[test]
    fn test_discrete_inventory_flags() {
        let board = Board::new();
        let (mut blue, red) = players();
        {
            let mut scratch = Board::new();
            blue.start_turn(&scratch);
            blue.submit_move(&mut scratch, crate::core::Move::new(4, 0).unwrap())
                .unwrap();
        }

        let encoded = DiscreteObservation.encode(&board, &blue, &red);
        let own_base = CELL_COUNT * (PIECE_COUNT + 1);

        for number in 0..PIECE_COUNT {
            let expected = if number == 4 { 0.0 } else { 1.0 };
            assert_eq!(encoded[own_base + number], expected);
            assert_eq!(encoded[own_base + PIECE_COUNT + number], 1.0);
        }
    }

    #[test]
    fn test_analog_sign_follows_the_observer() {
        let mut board = Board::new();
        board
            .place(Piece::new(2, Team::Blue).unwrap(), 0)
            .unwrap();
        let (blue, red) = players();

        let from_blue = AnalogObservation.encode(&board, &blue, &red);
        let from_red = AnalogObservation.encode(&board, &red, &blue);

        let magnitude = 3.0 / PIECE_COUNT as f32;
        assert_eq!(from_blue[0], magnitude);
        assert_eq!(from_red[0], -magnitude);
        assert_eq!(from_blue[1], 0.0);
    }
}
