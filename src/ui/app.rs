use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::error;

use crate::config::AppConfig;
use crate::game::{GameMachine, GameOutcome, Input, Mode, Phase};

pub struct App {
    machine: GameMachine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    ai_delay: Duration,
    ai_ready_at: Option<Instant>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            machine: GameMachine::new(config),
            selected_column: config.board.columns / 2,
            should_quit: false,
            message: None,
            ai_delay: Duration::from_millis(config.ai.delay_ms),
            ai_ready_at: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.machine.ai_to_move() {
                self.advance_ai()?;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Play the computer's move once the pacing delay has passed
    fn advance_ai(&mut self) -> io::Result<()> {
        let ready_at = *self
            .ai_ready_at
            .get_or_insert_with(|| Instant::now() + self.ai_delay);
        if Instant::now() < ready_at {
            return Ok(());
        }
        self.ai_ready_at = None;

        match self.machine.play_ai_turn() {
            Ok(Some(column)) => {
                self.message = Some(format!("Computer played column {}", column + 1));
                self.announce_outcome();
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                error!(%err, "computer failed to move");
                Err(io::Error::other(err))
            }
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = if self.ai_ready_at.is_some() {
            Duration::from_millis(20)
        } else {
            Duration::from_millis(100)
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        let columns = self
            .machine
            .board()
            .map(|b| b.columns())
            .unwrap_or_default();

        match key.code {
            KeyCode::Left if self.selected_column > 0 => {
                self.selected_column -= 1;
            }
            KeyCode::Right if self.selected_column + 1 < columns => {
                self.selected_column += 1;
            }
            _ => {
                let Some(input) = key_to_input(self.machine.phase(), self.selected_column, key)
                else {
                    return;
                };
                self.message = None;
                if self.machine.handle(input).is_break() {
                    self.should_quit = true;
                    return;
                }
                if matches!(input, Input::SelectMode(_) | Input::Rematch) {
                    let columns = self.machine.board().map_or(0, |b| b.columns());
                    self.selected_column = columns / 2;
                    self.ai_ready_at = None;
                }
                self.announce_outcome();
            }
        }
    }

    fn announce_outcome(&mut self) {
        if let Phase::Terminal { outcome, .. } = self.machine.phase() {
            self.message = Some(match outcome {
                GameOutcome::Winner(side) => format!("{} wins!", side.name()),
                GameOutcome::Draw => "It's a draw!".to_string(),
                GameOutcome::InProgress => return,
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.machine, self.selected_column, &self.message);
    }
}

/// Map a key to a state-machine input for the current phase.
fn key_to_input(phase: &Phase, selected_column: usize, key: KeyEvent) -> Option<Input> {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        return Some(Input::Quit);
    }

    match phase {
        Phase::Menu => match key.code {
            KeyCode::Char('1') => Some(Input::SelectMode(Mode::TwoPlayer)),
            KeyCode::Char('2') => Some(Input::SelectMode(Mode::VsComputer)),
            _ => None,
        },
        Phase::InPlay { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Drop(selected_column)),
            KeyCode::Char(c @ '1'..='9') => Some(Input::Drop(c as usize - '1' as usize)),
            _ => None,
        },
        Phase::Terminal { .. } | Phase::Rematch { .. } => match key.code {
            KeyCode::Enter => Some(Input::Acknowledge),
            KeyCode::Char('r') => Some(Input::Rematch),
            KeyCode::Char('m') => Some(Input::ToMenu),
            _ => None,
        },
    }
}
