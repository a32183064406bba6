//! Terminal UI rendering with ratatui
//!
//! Draws only from the game's query surface (`field_cells`, `piece_cells`),
//! never from its internal layout.

use crate::game::Game;
use crate::settings::Settings;
use crate::tetromino::TetrominoType;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BLOCK: &str = "██";
const EMPTY: &str = "  ";
/// Width of the side panel
const PANEL_WIDTH: u16 = 22;

/// Render the field, the live piece, the side panel and the game-over overlay
pub fn render_game(frame: &mut Frame, game: &Game, settings: &Settings) {
    let area = frame.area();
    let field = game.field();
    // Field size comes from settings and may exceed what a terminal can hold
    let board_width = clamp_u16(field.columns()).saturating_mul(2).saturating_add(2);
    let board_height = clamp_u16(field.rows()).saturating_add(2);

    let game_area = center_rect(area, board_width.saturating_add(PANEL_WIDTH), board_height);
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Length(PANEL_WIDTH)])
        .split(game_area);

    render_board(frame, layout[0], game);
    render_panel(frame, layout[1], game, settings);

    if game.is_game_over() {
        let restart = settings.keys.restart.first().map_or("restart", String::as_str);
        let quit = settings.keys.quit.first().map_or("quit", String::as_str);
        render_overlay(
            frame,
            area,
            "GAME OVER",
            &format!("{} = again, {} = quit", restart, quit),
        );
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_board(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" BLOCKFALL ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field = game.field();
    let mut grid: Vec<Vec<Option<TetrominoType>>> = vec![vec![None; field.columns()]; field.rows()];
    for cell in game.field_cells().chain(game.piece_cells()) {
        grid[cell.row][cell.column] = Some(cell.kind);
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| match cell {
                        Some(kind) => Span::styled(BLOCK, Style::default().fg(kind.color())),
                        None => Span::raw(EMPTY),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the lines counter and key hints
fn render_panel(frame: &mut Frame, area: Rect, game: &Game, settings: &Settings) {
    let block = Block::default()
        .title(" INFO ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let keys = &settings.keys;
    let hint = |label: &'static str, bound: &[String]| {
        Line::from(vec![
            Span::styled(format!("{:<8}", label), Style::default().fg(Color::Gray)),
            Span::styled(bound.join(", "), Style::default().fg(Color::Magenta)),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Lines   ", Style::default().fg(Color::Gray)),
            Span::styled(game.lines_cleared().to_string(), Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::raw(""),
        hint("Left", &keys.move_left),
        hint("Right", &keys.move_right),
        hint("Down", &keys.move_down),
        hint("Rotate", &keys.rotate),
        hint("CW", &keys.rotate_clockwise),
        hint("Restart", &keys.restart),
        hint("Quit", &keys.quit),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let popup_width = 30u16;
    let popup_height = 5u16;
    let popup_area = center_rect(area, popup_width, popup_height);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::styled(title, Style::default().fg(Color::Yellow).bold()),
        Line::raw(""),
        Line::styled(subtitle, Style::default().fg(Color::Gray)),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
