//! Action and observation codecs shared by every automated actor.
//!
//! Two interchangeable action encodings cover the same move space. The
//! discrete side pairs an index space with a legality mask; the analog side
//! decodes only through pre-filtered legal lists. Either way, an actor that
//! stays inside the encoding can never produce an illegal move.

mod analog;
mod discrete;
mod observation;

pub use analog::{decode_analog, signed_unit_to_index};
pub use discrete::{action_mask, decode_discrete, encode_discrete, ACTION_COUNT};
pub use observation::{AnalogObservation, DiscreteObservation, ObservationEncoder};
