//! Lykkehjulet
//!
//! A "Wheel of Fortune" style phrase board for the terminal: a hidden
//! phrase sits behind a 12-column grid of tiles, and the player opens
//! tiles by guessing letters. A small set of editor commands maintains
//! the phrase/category table on disk.
//!
//! # Quick Start
//!
//! ```rust
//! use lykkehjulet::core::{GameSession, GuessOutcome};
//!
//! let mut session = GameSession::new();
//! session.start("BAMSE ER FRA JYLLAND");
//!
//! // A correct guess opens every matching tile at once.
//! match session.guess('E') {
//!     GuessOutcome::Revealed { positions, .. } => assert!(!positions.is_empty()),
//!     GuessOutcome::Ignored => unreachable!("E is in the phrase"),
//! }
//! ```

// Core domain types
pub mod core;

// Phrase-table persistence
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
