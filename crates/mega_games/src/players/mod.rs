//! Move sources for the console host.

mod console;
mod first_available;
mod random;

pub use console::ConsolePlayer;
pub use first_available::FirstAvailablePlayer;
pub use random::RandomPlayer;
