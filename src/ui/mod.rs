//! Terminal UI: menu, game board and rematch prompt on top of the
//! [`GameMachine`](crate::game::GameMachine).

mod app;
mod game_view;

pub use app::App;
