//! Depth-bounded minimax with alpha-beta pruning, center-out move ordering and
//! an immediate-win shortcut at every ply.

use std::time::Instant;

use tracing::debug;

use crate::error::SearchError;
use crate::game::rules::{self, GameOutcome};
use crate::game::{Board, GameState, Side};

use super::agent::Agent;
use super::heuristic::{Heuristic, Score, WindowHeuristic};

/// Score of a position the AI side has won.
pub const SCORE_WIN: Score = Score::MAX;
/// Score of a position the AI side has lost.
pub const SCORE_LOSS: Score = Score::MIN;

/// Outcome of a search: the score from the AI side's perspective and the
/// column achieving it. `column` is `None` only at leaves and on boards with
/// no legal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: Score,
    pub column: Option<usize>,
}

/// One minimax search rooted at a position, scored for `ai_side`.
pub struct Searcher<'h> {
    ai_side: Side,
    heuristic: &'h dyn Heuristic,
    nodes: u64,
}

impl<'h> Searcher<'h> {
    pub fn new(ai_side: Side, heuristic: &'h dyn Heuristic) -> Self {
        Searcher {
            ai_side,
            heuristic,
            nodes: 0,
        }
    }

    /// Nodes visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `board` with `to_move` on turn. The AI side maximizes, the
    /// opponent minimizes. Never mutates `board`.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        to_move: Side,
    ) -> SearchResult {
        self.nodes += 1;

        let outcome = rules::evaluate_terminal(board);
        if depth == 0 || outcome.is_terminal() {
            let score = match outcome {
                GameOutcome::Winner(side) if side == self.ai_side => SCORE_WIN,
                GameOutcome::Winner(_) => SCORE_LOSS,
                GameOutcome::Draw => 0,
                GameOutcome::InProgress => self.heuristic.evaluate(board, self.ai_side),
            };
            return SearchResult {
                score,
                column: None,
            };
        }

        let maximizing = to_move == self.ai_side;
        let order: Vec<usize> = board
            .center_out_order()
            .into_iter()
            .filter(|&col| !board.is_column_full(col))
            .collect();

        if let Some(&col) = order
            .iter()
            .find(|&&col| rules::wins_immediately(board, col, to_move))
        {
            return SearchResult {
                score: if maximizing { SCORE_WIN } else { SCORE_LOSS },
                column: Some(col),
            };
        }

        let mut best = SearchResult {
            score: if maximizing { SCORE_LOSS } else { SCORE_WIN },
            column: None,
        };

        for &col in &order {
            let mut child = board.clone();
            if child.place(col, to_move).is_err() {
                continue;
            }
            let score = self
                .search(&child, depth - 1, alpha, beta, to_move.other())
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                beta = beta.min(best.score);
            }

            if alpha >= beta {
                break;
            }
        }

        // Every move is forced loss (or forced win for the minimizer): any
        // legal column will do.
        if best.column.is_none() {
            best.column = order.first().copied();
        }
        best
    }
}

/// Pick a column for `ai_side`: win now if possible, otherwise block an
/// immediate opponent win, otherwise run the bounded search.
pub fn choose_ai_move(
    board: &Board,
    ai_side: Side,
    depth: usize,
    heuristic: &dyn Heuristic,
) -> Result<usize, SearchError> {
    let legal = board.legal_columns();
    let Some(&fallback) = legal.first() else {
        return Err(SearchError::NoLegalMove);
    };

    if let Some(&col) = rules::winning_moves(board, ai_side).first() {
        debug!(side = ai_side.name(), column = col, "taking immediate win");
        return Ok(col);
    }
    if let Some(&col) = rules::winning_moves(board, ai_side.other()).first() {
        debug!(side = ai_side.name(), column = col, "blocking opponent win");
        return Ok(col);
    }

    let start = Instant::now();
    let mut searcher = Searcher::new(ai_side, heuristic);
    let result = searcher.search(board, depth, SCORE_LOSS, SCORE_WIN, ai_side);
    let column = result.column.unwrap_or(fallback);

    debug!(
        side = ai_side.name(),
        column,
        score = result.score,
        depth,
        nodes = searcher.nodes(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "search complete"
    );

    Ok(column)
}

/// Minimax agent with alpha-beta pruning at a fixed depth.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Choose a column for `side` on `board`.
    pub fn choose_move(&self, board: &Board, side: Side) -> Result<usize, SearchError> {
        choose_ai_move(board, side, self.depth, self.heuristic.as_ref())
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::NoLegalMove);
        }
        self.choose_move(state.board(), state.current_side())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
