//! Menu / play / terminal / rematch flow. The machine owns the live board;
//! front-ends feed it [`Input`]s and redraw from its read-only accessors.

use std::ops::ControlFlow;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::ai::MinimaxAgent;
use crate::config::AppConfig;
use crate::error::SearchError;

use super::{Board, GameOutcome, GameState, Side};

/// Side played by the human in versus-computer mode.
pub const HUMAN_SIDE: Side = Side::Red;
/// Side played by the computer in versus-computer mode.
pub const COMPUTER_SIDE: Side = Side::Yellow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Two humans share the keyboard; Red always opens.
    TwoPlayer,
    /// Human (Red) against the computer (Yellow); the opener is random.
    VsComputer,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Two Player",
            Mode::VsComputer => "Vs Computer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Menu,
    InPlay { mode: Mode, state: GameState },
    Terminal {
        mode: Mode,
        board: Board,
        outcome: GameOutcome,
    },
    Rematch { mode: Mode },
}

/// Events accepted by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    SelectMode(Mode),
    Drop(usize),
    /// Dismiss the result screen and show the rematch prompt.
    Acknowledge,
    Rematch,
    ToMenu,
    Quit,
}

pub struct GameMachine<R = StdRng> {
    phase: Phase,
    rows: usize,
    columns: usize,
    ai: MinimaxAgent,
    rng: R,
}

impl GameMachine<StdRng> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameMachine<R> {
    pub fn with_rng(config: &AppConfig, rng: R) -> Self {
        GameMachine {
            phase: Phase::Menu,
            rows: config.board.rows,
            columns: config.board.columns,
            ai: MinimaxAgent::new(config.ai.depth),
            rng,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The board of the current or just-finished game.
    pub fn board(&self) -> Option<&Board> {
        match &self.phase {
            Phase::InPlay { state, .. } => Some(state.board()),
            Phase::Terminal { board, .. } => Some(board),
            Phase::Menu | Phase::Rematch { .. } => None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match &self.phase {
            Phase::InPlay { state, .. } => Some(state.outcome()),
            Phase::Terminal { outcome, .. } => Some(*outcome),
            Phase::Menu | Phase::Rematch { .. } => None,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match &self.phase {
            Phase::Menu => None,
            Phase::InPlay { mode, .. } | Phase::Terminal { mode, .. } | Phase::Rematch { mode } => {
                Some(*mode)
            }
        }
    }

    pub fn side_to_move(&self) -> Option<Side> {
        match &self.phase {
            Phase::InPlay { state, .. } => Some(state.current_side()),
            _ => None,
        }
    }

    /// Whether the computer is due to move; human drops are ignored meanwhile.
    pub fn ai_to_move(&self) -> bool {
        matches!(
            &self.phase,
            Phase::InPlay { mode: Mode::VsComputer, state } if state.current_side() == COMPUTER_SIDE
        )
    }

    /// Feed one input. Returns `Break` only for [`Input::Quit`]; inputs that
    /// make no sense in the current phase are ignored.
    pub fn handle(&mut self, input: Input) -> ControlFlow<()> {
        let accepted = match input {
            Input::Quit => {
                info!("quit requested");
                return ControlFlow::Break(());
            }
            Input::SelectMode(mode) => {
                if self.phase == Phase::Menu {
                    self.start_game(mode);
                    true
                } else {
                    false
                }
            }
            Input::Drop(column) => {
                if matches!(self.phase, Phase::InPlay { .. }) && !self.ai_to_move() {
                    self.apply_drop(column)
                } else {
                    false
                }
            }
            Input::Acknowledge => {
                let terminal_mode = match &self.phase {
                    Phase::Terminal { mode, .. } => Some(*mode),
                    _ => None,
                };
                match terminal_mode {
                    Some(mode) => {
                        self.phase = Phase::Rematch { mode };
                        true
                    }
                    None => false,
                }
            }
            Input::Rematch => match self.finished_mode() {
                Some(mode) => {
                    self.start_game(mode);
                    true
                }
                None => false,
            },
            Input::ToMenu => match self.finished_mode() {
                Some(_) => {
                    self.phase = Phase::Menu;
                    true
                }
                None => false,
            },
        };

        if !accepted {
            debug!(?input, "input ignored");
        }
        ControlFlow::Continue(())
    }

    /// Let the computer move if it is its turn. Returns the column played.
    pub fn play_ai_turn(&mut self) -> Result<Option<usize>, SearchError> {
        let column = match &self.phase {
            Phase::InPlay { state, .. } if self.ai_to_move() => {
                self.ai.choose_move(state.board(), state.current_side())?
            }
            _ => return Ok(None),
        };
        Ok(self.apply_drop(column).then_some(column))
    }

    fn finished_mode(&self) -> Option<Mode> {
        match &self.phase {
            Phase::Terminal { mode, .. } | Phase::Rematch { mode } => Some(*mode),
            _ => None,
        }
    }

    fn start_game(&mut self, mode: Mode) {
        let first = match mode {
            Mode::TwoPlayer => Side::Red,
            Mode::VsComputer => {
                if self.rng.random_bool(0.5) {
                    Side::Red
                } else {
                    Side::Yellow
                }
            }
        };
        info!(mode = mode.name(), first = first.name(), "new game");
        self.phase = Phase::InPlay {
            mode,
            state: GameState::new(Board::with_size(self.rows, self.columns), first),
        };
    }

    /// Drop for the side to move. Rejected columns leave the game untouched.
    fn apply_drop(&mut self, column: usize) -> bool {
        let Phase::InPlay { mode, state } = &mut self.phase else {
            return false;
        };
        let side = state.current_side();
        let outcome = match state.apply_move_mut(column) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(column, %err, "move rejected");
                return false;
            }
        };
        debug!(side = side.name(), column, "piece dropped");

        if outcome.is_terminal() {
            let mode = *mode;
            let board = state.board().clone();
            info!(?outcome, moves = board.piece_count(), "game over");
            self.phase = Phase::Terminal {
                mode,
                board,
                outcome,
            };
        }
        true
    }
}
