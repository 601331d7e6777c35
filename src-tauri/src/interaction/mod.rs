pub mod commands;
pub mod controller;
pub mod state;
pub mod taps;

pub use controller::{InteractionController, InteractionTimings};
pub use state::InteractionState;
