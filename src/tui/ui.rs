//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Board, Cell, Coordinate, Mark};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, board_area, status_area, score_area] = screen_layout(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let cursor = app.notification().is_none().then(|| app.cursor());
    draw_board(frame, board_area, app.displayed_board(), cursor);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    let session = app.session();
    let score = session.score();
    let [first, second] = session.players().as_slice();
    let score_line = format!(
        "{} {}  |  {} {}  |  draws {}    arrows/1-9/click: play  r: restart  q: quit",
        first.label(),
        score.wins_for(0),
        second.label(),
        score.wins_for(1),
        score.draws()
    );
    frame.render_widget(
        Paragraph::new(score_line)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        score_area,
    );

    if let Some(notification) = app.notification() {
        let width = popup_width(&notification.message).min(frame.area().width);
        let popup = center_rect(frame.area(), width, 3);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            popup,
        );
    }
}

/// Finds the cell drawn at terminal position `(column, row)` for a frame of
/// size `area`.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Coordinate> {
    let [_, board_area, _, _] = screen_layout(area);
    let point = Position::new(column, row);
    cell_areas(board_area)
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(coord, _)| coord)
}

fn screen_layout(area: Rect) -> [Rect; 4] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Score
        ])
        .areas(area)
}

/// Screen rectangle of every cell, row 1 on top.
fn cell_areas(area: Rect) -> [(Coordinate, Rect); 9] {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    Coordinate::ALL.map(|coord| {
        let x = board.x + u16::from(coord.column() - 1) * (CELL_WIDTH + 1);
        let y = board.y + u16::from(coord.row() - 1) * (CELL_HEIGHT + 1);
        (coord, Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area))
    })
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Coordinate>) {
    let outline = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    frame.render_widget(
        Paragraph::new(grid_lines()).style(Style::default().fg(Color::DarkGray)),
        outline,
    );

    for (coord, rect) in cell_areas(area) {
        draw_cell(frame, rect, board.get(coord), cursor == Some(coord));
    }
}

fn grid_lines() -> Vec<Line<'static>> {
    let blank = format!("{0}│{0}│{0}", " ".repeat(CELL_WIDTH as usize));
    let rule = format!("{0}┼{0}┼{0}", "─".repeat(CELL_WIDTH as usize));
    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for band in 0..3 {
        for _ in 0..CELL_HEIGHT {
            lines.push(Line::from(blank.clone()));
        }
        if band < 2 {
            lines.push(Line::from(rule.clone()));
        }
    }
    lines
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, selected: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Marked(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::Marked(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the cell carries the mark.
    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(
            format!("{:^width$}", symbol, width = area.width as usize),
            style,
        )),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Width of a bordered box holding `message`, measured in characters.
fn popup_width(message: &str) -> u16 {
    u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
