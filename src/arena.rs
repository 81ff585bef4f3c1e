//! Headless matches between two agents.

use tracing::{debug, info};

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{Board, GameOutcome, GameState, Side};

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub moves: Vec<usize>,
    pub final_board: Board,
}

/// Play one game on `board`, Red moving first.
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    board: Board,
) -> Result<GameRecord, MatchError> {
    let mut state = GameState::new(board, Side::Red);
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_side() {
            Side::Red => &mut *red,
            Side::Yellow => &mut *yellow,
        };
        let column = agent.select_action(&state)?;
        state
            .apply_move_mut(column)
            .map_err(|source| MatchError::IllegalAction {
                agent: agent.name().to_string(),
                column,
                source,
            })?;
        moves.push(column);
    }

    let outcome = state.outcome();
    debug!(?outcome, moves = moves.len(), "game finished");
    Ok(GameRecord {
        outcome,
        moves,
        final_board: state.into_board(),
    })
}

/// Running tally for agent A against agent B.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchStats {
    pub fn games(&self) -> usize {
        self.a_wins + self.b_wins + self.draws
    }

    /// Record a game in which agent A played `a_side`.
    pub fn record(&mut self, record: &GameRecord, a_side: Side) {
        self.total_moves += record.moves.len();
        match record.outcome {
            GameOutcome::Winner(side) if side == a_side => self.a_wins += 1,
            GameOutcome::Winner(_) => self.b_wins += 1,
            GameOutcome::Draw | GameOutcome::InProgress => self.draws += 1,
        }
    }

    pub fn a_win_rate(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.a_wins as f64 / self.games() as f64
    }

    pub fn average_length(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games() as f64
    }
}

/// Play `games` games, swapping colors every game (A is Red in even games).
pub fn run_match(
    a: &mut dyn Agent,
    b: &mut dyn Agent,
    games: usize,
    rows: usize,
    columns: usize,
) -> Result<MatchStats, MatchError> {
    let mut stats = MatchStats::default();
    for game in 0..games {
        let board = Board::with_size(rows, columns);
        let (record, a_side) = if game % 2 == 0 {
            (play_game(a, b, board)?, Side::Red)
        } else {
            (play_game(b, a, board)?, Side::Yellow)
        };
        stats.record(&record, a_side);
        info!(
            game = game + 1,
            a_side = a_side.name(),
            outcome = ?record.outcome,
            moves = record.moves.len(),
            "game complete"
        );
    }
    Ok(stats)
}
