//! # gobblers
//!
//! A deterministic rules engine for a two-player stacking variant of
//! tic-tac-toe: each side owns seven graded pieces, and a piece may be
//! placed on an empty cell or on top of a strictly weaker piece of either
//! team. Three in a row of a team's topmost pieces wins.
//!
//! ## Design Principles
//!
//! 1. **One submission contract**: human input, scripted actors and learned
//!    policies all funnel through the same validation path; legality is
//!    decided in exactly one place.
//!
//! 2. **Rules vs. sequencing**: `Board` and `Player` hold the rules; the
//!    `GameController` only sequences turns and classifies terminal
//!    outcomes.
//!
//! 3. **Deterministic episodes**: all randomness flows through seeded RNGs,
//!    so the same seed replays the same game. No global state; concurrent
//!    games are just independent values.
//!
//! ## Modules
//!
//! - `core`: teams, pieces, moves, error types
//! - `board`: cell occupancy and win geometry
//! - `inventory`: per-player piece bookkeeping
//! - `player`: the turn-actor state machine and relocation task
//! - `controller`: two-player turn orchestration
//! - `codec`: discrete/analog action codecs and observation encoders
//! - `events`: synchronous observer registration
//! - `actors`: seeded random policies

pub mod actors;
pub mod board;
pub mod codec;
pub mod controller;
pub mod core;
pub mod events;
pub mod inventory;
pub mod player;

// Re-export commonly used types
pub use crate::core::{Move, Piece, RulesError, Team, CELL_COUNT, PIECE_COUNT};

pub use crate::board::{Board, Outcome, WIN_MASKS};

pub use crate::inventory::PieceInventory;

pub use crate::player::{Player, PlayerState, Relocation, RelocationStatus};

pub use crate::controller::{ControllerState, GameController, GameOverReason, StartPolicy};

pub use crate::codec::{
    action_mask, decode_analog, decode_discrete, encode_discrete, AnalogObservation,
    DiscreteObservation, ObservationEncoder, ACTION_COUNT,
};

pub use crate::events::{EventSink, GameEvent, Subscribers};

pub use crate::actors::{RandomAnalogActor, RandomDiscreteActor};
