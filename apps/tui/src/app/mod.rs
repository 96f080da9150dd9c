// App module for the baby names explorer
// Handles application state and the requests it issues

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{AppActions, Outcome, Request};
pub use input::handle_input;
pub use state::{App, FilterState};
