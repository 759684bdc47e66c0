//! Synchronous observer registration.
//!
//! Components that emit events own a plain `Subscribers` list: listeners are
//! registered once, notified synchronously in registration order, and
//! released when the owning component drops. There is no global bus, so a
//! listener can never outlive or dangle past its emitter.

use crate::board::Outcome;
use crate::controller::GameOverReason;
use crate::core::{Move, Team};
use crate::player::PlayerState;

/// Everything the engine reports to the outside world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A player's state machine transitioned.
    PlayerStateChanged {
        team: Team,
        old: PlayerState,
        new: PlayerState,
    },
    /// A legal move was accepted and applied to the board.
    MoveAccepted {
        team: Team,
        mv: Move,
        outcome: Outcome,
    },
    /// A player attempted a gameplay-illegal move and forfeits the episode.
    InvalidMove { team: Team, mv: Move },
    /// The controller classified a terminal outcome.
    GameOver { reason: GameOverReason },
}

/// A synchronous event listener.
pub trait EventSink {
    /// Receive one event. Called inline from the emitting component.
    fn notify(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn notify(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// An owned list of listeners.
pub struct Subscribers {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Subscribers {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Register a listener. Listeners stay registered until the owner drops.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Notify every listener, in registration order.
    pub fn emit(&mut self, event: &GameEvent) {
        for sink in &mut self.sinks {
            sink.notify(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Default for Subscribers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscribers({})", self.sinks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_sinks_in_order() {
        let log: Rc<RefCell<Vec<(usize, GameEvent)>>> = Rc::default();
        let mut subscribers = Subscribers::new();

        for id in 0..3 {
            let log = Rc::clone(&log);
            subscribers.subscribe(move |event: &GameEvent| {
                log.borrow_mut().push((id, *event));
            });
        }

        let event = GameEvent::GameOver {
            reason: GameOverReason::Draw,
        };
        subscribers.emit(&event);

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0], (0, event));
        assert_eq!(log[1], (1, event));
        assert_eq!(log[2], (2, event));
    }

    #[test]
    fn test_empty_list_is_a_no_op() {
        let mut subscribers = Subscribers::new();
        assert!(subscribers.is_empty());
        subscribers.emit(&GameEvent::GameOver {
            reason: GameOverReason::Draw,
        });
    }

    #[test]
    fn test_len_tracks_registrations() {
        let mut subscribers = Subscribers::new();
        subscribers.subscribe(|_: &GameEvent| {});
        subscribers.subscribe(|_: &GameEvent| {});
        assert_eq!(subscribers.len(), 2);
    }
}
