use crate::error::MoveError;

use super::rules::{self, GameOutcome};
use super::{Board, Side};

/// A position: the board plus the side to move. The outcome is always
/// recomputed from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_side: Side,
}

impl GameState {
    /// Create initial game state on a default-sized board, Red to move
    pub fn initial() -> Self {
        Self::new(Board::new(), Side::Red)
    }

    pub fn new(board: Board, current_side: Side) -> Self {
        GameState {
            board,
            current_side,
        }
    }

    /// Get side to move
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        rules::evaluate_terminal(&self.board)
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Get list of legal columns (empty once the game is over)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place, returning the outcome it produced
    pub fn apply_move_mut(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.place(column, self.current_side)?;
        self.current_side = self.current_side.other();

        Ok(self.outcome())
    }
}
