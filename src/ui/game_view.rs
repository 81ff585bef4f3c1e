use crate::game::{Board, Cell, GameMachine, GameOutcome, Mode, Phase, Side};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    machine: &GameMachine,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board / menu
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, machine, chunks[0]);
    match (machine.phase(), machine.board()) {
        (Phase::Menu, _) => render_menu(frame, chunks[1]),
        (Phase::Rematch { mode }, _) => render_rematch(frame, *mode, chunks[1]),
        (_, Some(board)) => {
            let selector = matches!(machine.phase(), Phase::InPlay { .. }) && !machine.ai_to_move();
            render_board(frame, board, selector.then_some(selected_column), chunks[1]);
        }
        (_, None) => {}
    }
    render_message(frame, message, chunks[2]);
    render_controls(frame, machine.phase(), chunks[3]);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Red => Color::Red,
        Side::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, machine: &GameMachine, area: Rect) {
    let mode = machine.mode().map(Mode::name).unwrap_or("Menu");
    let (status, color) = match (machine.phase(), machine.side_to_move()) {
        (Phase::InPlay { .. }, Some(side)) if machine.ai_to_move() => {
            (format!("Computer's Turn  |  {mode}"), side_color(side))
        }
        (Phase::InPlay { .. }, Some(side)) => (
            format!("{}'s Turn  |  {mode}", side.name()),
            side_color(side),
        ),
        (Phase::Terminal { outcome, .. }, _) => match outcome {
            GameOutcome::Winner(side) => (
                format!("{} Wins!  |  {mode}", side.name()),
                side_color(*side),
            ),
            _ => (format!("It's a Draw!  |  {mode}"), Color::White),
        },
        _ => (mode.to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_menu(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CONNECT 4",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1  Two Player"),
        Line::from("2  Vs Computer"),
        Line::from("Q  Quit"),
    ];
    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu, area);
}

fn render_rematch(frame: &mut Frame, mode: Mode, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Play again?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("R  Rematch ({})", mode.name())),
        Line::from("M  Main Menu"),
    ];
    let prompt = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: Option<usize>, area: Rect) {
    let cols = board.columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * cols + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    // Top row first; row 0 is the bottom of the board
    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    if let Some(selected) = selected_column {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..cols {
            if col == selected {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, phase: &Phase, area: Rect) {
    let help = match phase {
        Phase::Menu => "1/2: Choose Mode  |  Q: Quit",
        Phase::InPlay { .. } => "←/→: Move  |  Enter: Drop  |  1-9: Drop in Column  |  Q: Quit",
        Phase::Terminal { .. } => "Enter: Continue  |  R: Rematch  |  M: Menu  |  Q: Quit",
        Phase::Rematch { .. } => "R: Rematch  |  M: Menu  |  Q: Quit",
    };

    let controls = Paragraph::new(Line::from(help))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
