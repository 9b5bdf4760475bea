//! Core domain types for the phrase board
//!
//! The pure heart of the game: the guessing alphabet, the phrase-to-board
//! layout, the round state machine, and the phrase-table row type. Nothing
//! here touches the terminal or the disk.

pub mod alphabet;
mod entry;
mod layout;
mod session;

pub use entry::{EntryError, PhraseEntry};
pub use layout::{
    distribute_to_lines, reveal_positions, tile_positions, Line, Tile, TilePos, BOARD_COLUMNS,
    BOARD_ROWS, MAX_LINE_WIDTH,
};
pub use session::{GameSession, GuessOutcome};
