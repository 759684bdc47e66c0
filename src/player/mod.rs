//! The turn actor: a team, its inventory, and the per-episode state machine.
//!
//! A player never stores the board; rules methods borrow it per call, so one
//! board serves both players without shared ownership. Every mutation funnels
//! through `submit_move`, which keeps legality decisions identical for the
//! mouse-driven, scripted and learned callers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Outcome};
use crate::core::{Move, Piece, RulesError, Team};
use crate::events::{EventSink, GameEvent, Subscribers};
use crate::inventory::PieceInventory;

mod relocation;

pub use relocation::{Relocation, RelocationStatus};

/// Lifecycle states of a turn actor.
///
/// `Win`, `Lose`, `Draw` and `Invalid` are terminal for the episode; the
/// next `reset` returns the player to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Idle,
    /// The controller opened this player's turn; a move may be submitted.
    WaitingForMove,
    /// A legal move was accepted; the piece is being relocated externally.
    Moving,
    Win,
    Lose,
    Draw,
    /// The player attempted an illegal move and forfeits the episode.
    Invalid,
}

/// One side's turn actor.
#[derive(Debug)]
pub struct Player {
    team: Team,
    inventory: PieceInventory,
    state: PlayerState,
    subscribers: Subscribers,
}

impl Player {
    /// Create an idle player with a full inventory.
    #[must_use]
    pub fn new(team: Team) -> Self {
        Self {
            team,
            inventory: PieceInventory::new(),
            state: PlayerState::Idle,
            subscribers: Subscribers::new(),
        }
    }

    /// The side this player plays for.
    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    /// Current state-machine state.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// The player's piece inventory.
    #[must_use]
    pub fn inventory(&self) -> &PieceInventory {
        &self.inventory
    }

    /// Register a listener for this player's events.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.subscribers.subscribe(sink);
    }

    /// Return to `Idle` with a full inventory.
    pub fn reset(&mut self) {
        self.inventory.reset();
        self.set_state(PlayerState::Idle);
    }

    /// The lowest-numbered unplayed piece, as a placeable piece.
    #[must_use]
    pub fn minimum_piece(&self) -> Option<Piece> {
        self.inventory
            .minimum_available()
            .and_then(|number| Piece::new(number, self.team).ok())
    }

    /// Whether any legal move exists for this player.
    ///
    /// Covering is monotonic in piece number: if the smallest available
    /// piece has no destination, no larger-numbered piece has one either,
    /// so probing the minimum is sufficient.
    #[must_use]
    pub fn can_make_any_move(&self, board: &Board) -> bool {
        match self.minimum_piece() {
            Some(piece) => board.can_any_move(piece),
            None => false,
        }
    }

    /// Open this player's turn.
    ///
    /// Returns `false` when no legal move exists, either because the
    /// inventory is exhausted or because the smallest available piece has no
    /// destination; the caller drives the draw in that case.
    pub fn start_turn(&mut self, board: &Board) -> bool {
        if !self.can_make_any_move(board) {
            debug!(team = %self.team, "no legal move available");
            return false;
        }
        self.set_state(PlayerState::WaitingForMove);
        true
    }

    /// Pure legality predicate: the piece is unplayed and the board accepts
    /// it at the target cell.
    ///
    /// Consistent with what `submit_move` would accept at the same instant;
    /// the discrete action mask is built from this.
    #[must_use]
    pub fn can_move(&self, board: &Board, mv: Move) -> bool {
        match (self.inventory.has(mv.piece()), Piece::new(mv.piece(), self.team)) {
            (Ok(true), Ok(piece)) => board.can_place(piece, usize::from(mv.cell())),
            _ => false,
        }
    }

    /// Submit a move while `WaitingForMove`.
    ///
    /// A gameplay-illegal move transitions the player to `Invalid` (episode
    /// forfeit) and reports `IllegalMove`, leaving the board and inventory
    /// untouched. On success the piece leaves the inventory, the board
    /// mutates, and the player enters `Moving` until `settle` is called.
    /// Calling outside `WaitingForMove` is a contract violation and does
    /// not forfeit.
    pub fn submit_move(&mut self, board: &mut Board, mv: Move) -> Result<Outcome, RulesError> {
        if self.state != PlayerState::WaitingForMove {
            return Err(RulesError::NotWaitingForMove);
        }

        let piece = Piece::new(mv.piece(), self.team)?;
        if !self.inventory.has(mv.piece())? || !board.can_place(piece, usize::from(mv.cell())) {
            debug!(team = %self.team, %mv, "illegal move submitted");
            self.set_state(PlayerState::Invalid);
            self.subscribers.emit(&GameEvent::InvalidMove {
                team: self.team,
                mv,
            });
            return Err(RulesError::IllegalMove {
                piece: mv.piece(),
                cell: mv.cell(),
            });
        }

        self.inventory.consume(mv.piece())?;
        let outcome = board.place(piece, usize::from(mv.cell()))?;

        self.set_state(PlayerState::Moving);
        self.subscribers.emit(&GameEvent::MoveAccepted {
            team: self.team,
            mv,
            outcome,
        });
        Ok(outcome)
    }

    /// Complete the relocation: `Moving` back to `Idle`.
    ///
    /// Headless callers invoke this immediately after a move resolves;
    /// animated hosts invoke it when the relocation reports `Complete`.
    pub fn settle(&mut self) {
        if self.state == PlayerState::Moving {
            self.set_state(PlayerState::Idle);
        }
    }

    /// Controller-declared episode outcomes.
    pub fn mark_win(&mut self) {
        self.set_state(PlayerState::Win);
    }

    pub fn mark_lose(&mut self) {
        self.set_state(PlayerState::Lose);
    }

    pub fn mark_draw(&mut self) {
        self.set_state(PlayerState::Draw);
    }

    fn set_state(&mut self, new: PlayerState) {
        let old = std::mem::replace(&mut self.state, new);
        if old != new {
            self.subscribers.emit(&GameEvent::PlayerStateChanged {
                team: self.team,
                old,
                new,
            });
        }
    }
}
