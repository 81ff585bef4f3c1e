//! Core Connect Four game logic: board representation, rules, positions, and
//! the menu / play / rematch state machine.

mod board;
pub mod machine;
pub mod rules;
mod side;
mod state;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS, DIRECTIONS, WINDOW};
pub use machine::{GameMachine, Input, Mode, Phase};
pub use rules::GameOutcome;
pub use side::Side;
pub use state::GameState;
