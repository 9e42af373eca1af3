//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::layout::BoardLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe_core::{Cell, CellView, GameView, Mark, Position};

/// Draws the whole screen and returns the layout used.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let layout = BoardLayout::new(frame.area());
    let view = app.view();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    frame.render_widget(turn_indicator(&view), layout.turn);

    for cell in &view.cells {
        draw_cell(frame, layout.cells[cell.position.to_index()], cell, app);
    }

    let status = Paragraph::new(view.status.as_str())
        .style(status_style(&view))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    if view.replay_visible {
        let replay = Paragraph::new("Replay")
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        frame.render_widget(replay, layout.replay);
    }

    let help = Paragraph::new("1-9 / arrows + Enter / mouse: play | R: replay | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn turn_indicator(view: &GameView) -> Paragraph<'static> {
    let line = if view.outcome.is_over() {
        Line::from(Span::styled("Game over", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::raw("Turn: "),
            Span::styled(view.turn.to_string(), mark_style(view.turn)),
        ])
    };
    Paragraph::new(line).alignment(Alignment::Center)
}

fn status_style(view: &GameView) -> Style {
    match view.outcome.winner() {
        Some(mark) => mark_style(mark),
        None if view.outcome.is_over() => Style::default().fg(Color::Magenta),
        None => Style::default().fg(Color::Yellow),
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, app: &App) {
    let (symbol, style) = match cell.cell {
        Cell::Empty if app.show_hints() => (
            cell.position.key().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Marked(mark) => (mark.to_string(), mark_style(mark)),
    };

    let style = if cell.highlighted {
        style.bg(Color::Green).fg(Color::Black)
    } else {
        style
    };

    let border = if is_cursor(app, cell.position) {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn is_cursor(app: &App, pos: Position) -> bool {
    !app.game().outcome().is_over() && app.cursor() == pos
}
