//! Two-player turn orchestration.
//!
//! The controller sequences whose turn it is and classifies terminal
//! outcomes; it never computes legality or wins itself. Board and players
//! hold the rules, the controller holds the sequencing, and exactly one
//! player is ever `WaitingForMove` at a time.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Outcome};
use crate::codec;
use crate::core::{Move, RulesError, Team};
use crate::events::{EventSink, GameEvent, Subscribers};
use crate::player::Player;

/// Why an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    Win(Team),
    Draw,
    /// The named team attempted an illegal move and forfeited.
    Forfeit(Team),
}

/// Orchestrator turn state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerState {
    Idle,
    /// The named team's player is waiting for a move.
    Waiting(Team),
    GameOver(GameOverReason),
}

/// How the starting team is chosen: a configuration choice, not a rules one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartPolicy {
    /// The same team always starts.
    Fixed(Team),
    /// The starter alternates between games, blue first.
    Alternating,
    /// A seeded coin flip per game.
    Random,
}

/// Alternates two players over one board and resolves episode outcomes.
#[derive(Debug)]
pub struct GameController {
    board: Board,
    blue: Player,
    red: Player,
    state: ControllerState,
    start_policy: StartPolicy,
    next_starter: Team,
    rng: ChaCha8Rng,
    subscribers: Subscribers,
}

impl GameController {
    /// Create an idle controller. `seed` drives the `Random` start policy.
    #[must_use]
    pub fn new(start_policy: StartPolicy, seed: u64) -> Self {
        Self {
            board: Board::new(),
            blue: Player::new(Team::Blue),
            red: Player::new(Team::Red),
            state: ControllerState::Idle,
            start_policy,
            next_starter: Team::Blue,
            rng: ChaCha8Rng::seed_from_u64(seed),
            subscribers: Subscribers::new(),
        }
    }

    /// The shared board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One side's player.
    #[must_use]
    pub fn player(&self, team: Team) -> &Player {
        match team {
            Team::Blue => &self.blue,
            Team::Red => &self.red,
        }
    }

    /// Mutable access to one side's player, e.g. for subscribing.
    pub fn player_mut(&mut self, team: Team) -> &mut Player {
        match team {
            Team::Blue => &mut self.blue,
            Team::Red => &mut self.red,
        }
    }

    /// Current orchestration state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The team currently waiting for a move, if any.
    #[must_use]
    pub fn active_team(&self) -> Option<Team> {
        match self.state {
            ControllerState::Waiting(team) => Some(team),
            _ => None,
        }
    }

    /// Register a listener for controller-level events.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.subscribers.subscribe(sink);
    }

    /// Reset everything and open the starting player's turn.
    ///
    /// Falls straight through to a draw when the starter has no legal move,
    /// which only happens with a degenerate configuration.
    pub fn start_game(&mut self) {
        self.board.reset();
        self.blue.reset();
        self.red.reset();

        let starter = self.pick_starter();
        info!(%starter, "starting game");

        let started = match starter {
            Team::Blue => self.blue.start_turn(&self.board),
            Team::Red => self.red.start_turn(&self.board),
        };
        if started {
            self.state = ControllerState::Waiting(starter);
        } else {
            self.blue.mark_draw();
            self.red.mark_draw();
            self.finish(GameOverReason::Draw);
        }
    }

    /// The single move-submission entry point shared by every actor.
    ///
    /// Routes the move to the active player and interprets the board's
    /// verdict: `Continue` hands the turn over (or draws when the opponent
    /// has no legal move), `Win` closes the episode, and a gameplay-illegal
    /// move forfeits it for the offender without penalizing the opponent.
    pub fn submit(&mut self, team: Team, mv: Move) -> Result<Outcome, RulesError> {
        if self.state != ControllerState::Waiting(team) {
            return Err(RulesError::NotWaitingForMove);
        }

        let result = match team {
            Team::Blue => self.blue.submit_move(&mut self.board, mv),
            Team::Red => self.red.submit_move(&mut self.board, mv),
        };

        match result {
            Ok(outcome) => {
                self.resolve(team, outcome);
                Ok(outcome)
            }
            Err(err @ RulesError::IllegalMove { .. }) => {
                // The offender already transitioned to Invalid.
                self.subscribers.emit(&GameEvent::InvalidMove { team, mv });
                self.finish(GameOverReason::Forfeit(team));
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Decode a discrete action and submit it.
    pub fn submit_discrete(&mut self, team: Team, action: usize) -> Result<Outcome, RulesError> {
        let mv = codec::decode_discrete(action)?;
        self.submit(team, mv)
    }

    /// Decode a paired-continuous action and submit it.
    pub fn submit_analog(
        &mut self,
        team: Team,
        cell_scalar: f32,
        piece_scalar: f32,
    ) -> Result<Outcome, RulesError> {
        let mv = codec::decode_analog(cell_scalar, piece_scalar, self.player(team), &self.board)?;
        self.submit(team, mv)
    }

    fn resolve(&mut self, team: Team, outcome: Outcome) {
        match outcome {
            Outcome::Win(winner) => {
                match winner {
                    Team::Blue => {
                        self.blue.mark_win();
                        self.red.mark_lose();
                    }
                    Team::Red => {
                        self.red.mark_win();
                        self.blue.mark_lose();
                    }
                }
                self.finish(GameOverReason::Win(winner));
            }
            Outcome::Continue => {
                match team {
                    Team::Blue => self.blue.settle(),
                    Team::Red => self.red.settle(),
                }

                let next = team.opponent();
                let started = match next {
                    Team::Blue => self.blue.start_turn(&self.board),
                    Team::Red => self.red.start_turn(&self.board),
                };
                if started {
                    debug!(team = %next, "turn handed over");
                    self.state = ControllerState::Waiting(next);
                } else {
                    self.blue.mark_draw();
                    self.red.mark_draw();
                    self.finish(GameOverReason::Draw);
                }
            }
        }
    }

    fn finish(&mut self, reason: GameOverReason) {
        info!(?reason, "game over");
        self.state = ControllerState::GameOver(reason);
        self.subscribers.emit(&GameEvent::GameOver { reason });
    }

    fn pick_starter(&mut self) -> Team {
        match self.start_policy {
            StartPolicy::Fixed(team) => team,
            StartPolicy::Alternating => {
                let starter = self.next_starter;
                self.next_starter = starter.opponent();
                starter
            }
            StartPolicy::Random => {
                if self.rng.gen_range(0..2) == 0 {
                    Team::Blue
                } else {
                    Team::Red
                }
            }
        }
    }
}
