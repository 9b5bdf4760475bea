//! Lykkehjulet - CLI
//!
//! Phrase board game with TUI and plain-terminal modes, plus subcommands
//! for maintaining the phrase table.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lykkehjulet::{
    commands::{add_entry, preview_phrase, remove_entry, run_simple, set_entry},
    output::{print_phrase_table, print_preview_result},
    store::PhraseStore,
};

#[derive(Parser)]
#[command(
    name = "lykkehjulet",
    about = "Wheel-of-Fortune style phrase board for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Phrase table file (default: per-user data directory)
    #[arg(short = 's', long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Plain-terminal game loop (no TUI)
    Simple,

    /// Show how a phrase would wrap onto the board
    Preview {
        /// The phrase to lay out (quote it: "BAMSE ER FRA JYLLAND")
        phrase: String,
    },

    /// List the phrase table
    List,

    /// Add a phrase/category row to the table
    Add {
        /// The phrase to guess
        phrase: String,

        /// The hint label shown instead of the phrase
        category: String,
    },

    /// Remove a row from the table (1-based index, see `list`)
    Remove {
        /// Row number to remove
        index: usize,
    },

    /// Replace a row of the table (1-based index, see `list`)
    Set {
        /// Row number to replace
        index: usize,

        /// The new phrase
        phrase: String,

        /// The new category
        category: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match &cli.store {
        Some(path) => PhraseStore::at(path),
        None => PhraseStore::open_default()?,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&store),
        Commands::Simple => run_simple(&store),
        Commands::Preview { phrase } => run_preview_command(&phrase),
        Commands::List => run_list_command(&store),
        Commands::Add { phrase, category } => run_add_command(&store, &phrase, &category),
        Commands::Remove { index } => run_remove_command(&store, index),
        Commands::Set {
            index,
            phrase,
            category,
        } => run_set_command(&store, index, &phrase, &category),
    }
}

fn run_play_command(store: &PhraseStore) -> Result<()> {
    use lykkehjulet::interactive::{run_tui, App};

    let entries = store.load()?;
    let app = App::new(entries);
    run_tui(app)
}

fn run_preview_command(phrase: &str) -> Result<()> {
    let result = preview_phrase(phrase).map_err(|e| anyhow::anyhow!(e))?;
    print_preview_result(&result);
    Ok(())
}

fn run_list_command(store: &PhraseStore) -> Result<()> {
    let entries = store.load()?;
    print_phrase_table(&entries);
    Ok(())
}

fn run_add_command(store: &PhraseStore, phrase: &str, category: &str) -> Result<()> {
    let entry = add_entry(store, phrase, category)?;
    println!("Added: {entry}");
    Ok(())
}

fn run_remove_command(store: &PhraseStore, index: usize) -> Result<()> {
    let entry = remove_entry(store, index)?;
    println!("Removed row {index}: {entry}");
    Ok(())
}

fn run_set_command(store: &PhraseStore, index: usize, phrase: &str, category: &str) -> Result<()> {
    let entry = set_entry(store, index, phrase, category)?;
    println!("Updated row {index}: {entry}");
    Ok(())
}
