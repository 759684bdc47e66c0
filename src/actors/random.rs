//! Seeded random policies.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::codec::{action_mask, decode_analog, decode_discrete};
use crate::core::{Move, RulesError};
use crate::player::Player;

/// Uniform random policy over the enabled entries of the discrete mask.
#[derive(Clone, Debug)]
pub struct RandomDiscreteActor {
    rng: ChaCha8Rng,
}

impl RandomDiscreteActor {
    /// Create an actor with a deterministic stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a uniformly random legal move.
    ///
    /// Fails with `NoLegalMove` when the mask has no enabled action.
    pub fn pick_move(&mut self, player: &Player, board: &Board) -> Result<Move, RulesError> {
        let mask = action_mask(player, board);
        let enabled: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|&(_, &legal)| legal)
            .map(|(action, _)| action)
            .collect();

        if enabled.is_empty() {
            return Err(RulesError::NoLegalMove);
        }
        decode_discrete(enabled[self.rng.gen_range(0..enabled.len())])
    }
}

/// Uniform random policy over the continuous action square.
///
/// Samples both scalars from `[-1, 1]`; the two-stage decoder guarantees
/// the result is legal whenever any legal move exists.
#[derive(Clone, Debug)]
pub struct RandomAnalogActor {
    rng: ChaCha8Rng,
}

impl RandomAnalogActor {
    /// Create an actor with a deterministic stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sample a scalar pair and decode it.
    pub fn pick_move(&mut self, player: &Player, board: &Board) -> Result<Move, RulesError> {
        let cell_scalar = self.rng.gen_range(-1.0f32..=1.0);
        let piece_scalar = self.rng.gen_range(-1.0f32..=1.0);
        decode_analog(cell_scalar, piece_scalar, player, board)
    }
}
