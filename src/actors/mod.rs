//! Scripted actors.
//!
//! Seeded, reproducible policies that route through the shared codecs, so
//! by construction they never submit an illegal move.

mod random;

pub use random::{RandomAnalogActor, RandomDiscreteActor};
