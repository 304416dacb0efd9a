//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::game::{Cell, Phase, Position, Seat, TurnReport};

const HELP: &str =
    "arrows/hjkl move  enter/space play  1-9 play cell  n new game  s reset scores  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app.report());
    draw_board(frame, chunks[2], app.report(), app.cursor());

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn seat_color(seat: Seat) -> Color {
    match seat {
        Seat::One => Color::Blue,
        Seat::Two => Color::Red,
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, report: &TurnReport) {
    let mut spans = Vec::new();
    for player in &report.players {
        let mut style = Style::default().fg(seat_color(player.seat()));
        if report.phase == Phase::AwaitingMove && player.seat() == report.current_player.seat() {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(format!("{}: {}", player, player.wins()), style));
    }
    let scores = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    frame.render_widget(scores, area);
}

fn draw_board(frame: &mut Frame, area: Rect, report: &TurnReport, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], report, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, report: &TurnReport, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for column in 0..3 {
        if let Ok(pos) = Position::new(row, column) {
            draw_cell(frame, cols[column * 2], report, cursor, pos);
        }
        if column < 2 {
            draw_separator_vertical(frame, cols[column * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, report: &TurnReport, cursor: Position, pos: Position) {
    let cell = report.cell(pos.row(), pos.column()).unwrap_or_default();

    let (symbol, mut style) = match cell {
        Cell::Empty => (pos.keypad().to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Marked(marker) => {
            let color = report
                .players
                .iter()
                .find(|p| p.marker() == marker)
                .map(|p| seat_color(p.seat()))
                .unwrap_or(Color::White);
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            (marker.to_string(), style)
        }
    };

    if report.line.is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor && report.phase == Phase::AwaitingMove {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"), Line::raw("│"), Line::raw("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{PlayerSetup, Session};
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_draw_shows_names_and_marks() {
        let session = Session::with_players(
            &PlayerSetup::new("Xena", "X"),
            &PlayerSetup::new("Otto", "O"),
        )
        .unwrap();
        let mut app = App::new(session).unwrap();
        app.handle_key(KeyCode::Char('1'));

        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Xena (X): 0"));
        assert!(text.contains("Otto (O) to move."));
    }
}
