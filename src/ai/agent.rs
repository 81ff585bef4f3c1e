use crate::error::SearchError;
use crate::game::GameState;

/// Anything that can pick a column for the side to move.
pub trait Agent {
    /// Select an action (column) given the current game state. Fails with
    /// `NoLegalMove` when the state has no legal column.
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
