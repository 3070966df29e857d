mod busy;
mod engine;

pub use {
    busy::{BusyFlag, BusyGuard},
    engine::{Activation, CycleEngine, CycleOutcome, next_target},
};
