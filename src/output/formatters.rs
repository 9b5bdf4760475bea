//! Formatting utilities for terminal output

use rustc_hash::FxHashSet;

use crate::core::{tile_positions, Line, BOARD_COLUMNS, BOARD_ROWS};

/// A board slot with no tile behind it
pub const CLOSED_GLYPH: char = '▓';

/// An open tile whose letter has not been guessed yet
pub const HIDDEN_GLYPH: char = '□';

/// Render the board as a plain-text grid
///
/// Closed slots show [`CLOSED_GLYPH`], unguessed tiles [`HIDDEN_GLYPH`],
/// guessed tiles their letter. Tiles that fall off the board (negative or
/// too-large columns from overlong lines) are simply not drawn, matching
/// the original board which let them run off the canvas.
#[must_use]
pub fn render_board(phrase: &str, guessed: &FxHashSet<char>) -> String {
    let mut grid = vec![[CLOSED_GLYPH; BOARD_COLUMNS]; BOARD_ROWS];

    for tile in tile_positions(phrase) {
        let on_board =
            tile.row < BOARD_ROWS && tile.column >= 0 && (tile.column as usize) < BOARD_COLUMNS;
        if on_board {
            grid[tile.row][tile.column as usize] = if guessed.contains(&tile.ch) {
                tile.ch
            } else {
                HIDDEN_GLYPH
            };
        }
    }

    grid.iter()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One preview row: the start column and the joined line text
#[must_use]
pub fn format_line(index: usize, line: &Line) -> String {
    format!(
        "row {} col {:>2}  {}",
        index + 1,
        line.start_column,
        if line.text.is_empty() { "(empty)" } else { &line.text }
    )
}
