//! TUI rendering with ratatui
//!
//! Draws the tile board, the category/phrase status line, and the message
//! log. The board is re-derived from the session on every frame; nothing
//! is cached between keystrokes.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

use super::app::{App, MessageStyle};
use crate::core::{BOARD_COLUMNS, BOARD_ROWS};

/// Width of one rendered tile in terminal cells
const TILE_WIDTH: usize = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(BOARD_ROWS as u16 + 2), // Board
            Constraint::Length(3),                   // Status line
            Constraint::Min(5),                      // Messages
            Constraint::Length(3),                   // Key hints
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_status(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_hints(f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎡 LYKKEHJULET")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// One terminal row per board row, three cells per tile
///
/// Closed slots get a dark block, open tiles a light one; a guessed
/// letter is drawn black-on-white in its tile. Tiles pushed off the board
/// by an overlong line are not drawn.
fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let closed = Style::default().fg(Color::DarkGray).bg(Color::DarkGray);
    let open = Style::default().fg(Color::Gray).bg(Color::Gray);
    let revealed = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    let guessed = app.session.guessed();
    let mut cells: FxHashMap<(usize, i32), Option<char>> = FxHashMap::default();
    for tile in app.session.tiles() {
        let shown = guessed.contains(&tile.ch).then_some(tile.ch);
        cells.insert((tile.row, tile.column), shown);
    }

    let mut rows: Vec<Line> = Vec::with_capacity(BOARD_ROWS);
    for row in 0..BOARD_ROWS {
        let mut spans: Vec<Span> = Vec::with_capacity(BOARD_COLUMNS);
        for column in 0..BOARD_COLUMNS {
            let span = match cells.get(&(row, column as i32)) {
                Some(Some(ch)) => Span::styled(format!(" {ch} "), revealed),
                Some(None) => Span::styled(" ".repeat(TILE_WIDTH), open),
                None => Span::styled(" ".repeat(TILE_WIDTH), closed),
            };
            spans.push(span);
        }
        rows.push(Line::from(spans));
    }

    let board = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (label, style) = if app.peeking {
        (
            "Sætning",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Kategori",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![
        Span::raw(format!("{label}: ")),
        Span::styled(app.status_text().to_string(), style),
    ];
    if app.session.is_victorious() {
        spans.push(Span::styled(
            "   ★ SOLVED ★",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Span::styled(message.text.clone(), style))
        })
        .collect();

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_hints(f: &mut Frame, area: Rect) {
    let hints = Paragraph::new(
        "letters: guess │ enter: solve │ space: peek │ ctrl-n: new phrase │ esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(hints, area);
}
