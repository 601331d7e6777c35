pub mod commands;
pub mod controller;
pub mod state;

pub use controller::ClockController;
pub use state::ClockState;
