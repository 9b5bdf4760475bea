//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: prints the tile board after every
//! event, reads guesses from stdin.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::{GameSession, GuessOutcome, PhraseEntry};
use crate::output::formatters::render_board;
use crate::store::{pick_random, PhraseStore};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the phrase table cannot be loaded or on an I/O
/// error reading user input.
pub fn run_simple(store: &PhraseStore) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Lykkehjulet - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden phrase one letter at a time.");
    println!("Type a single letter to guess it.\n");
    println!("Commands: 'solve' opens every tile, 'peek' shows the phrase,");
    println!("          'new' draws a fresh phrase, 'quit' exits\n");

    let entries = store.load()?;
    let mut session = GameSession::new();
    let mut rng = rand::rng();

    let mut category = start_round(&mut session, &entries, &mut rng)?;
    print_board(&session, &category);

    loop {
        let input = get_user_input("Letter (or 'solve'/'peek'/'new'/'quit')")?;

        // Single characters are guesses; anything longer is a command.
        let mut chars = input.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            handle_guess(&mut session, &category, ch);
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                category = start_round(&mut session, &entries, &mut rng)?;
                println!("\n🔄 New phrase on the board!\n");
                print_board(&session, &category);
            }
            "peek" => {
                if let Some(phrase) = session.phrase() {
                    println!("  {}\n", phrase.bright_yellow());
                }
            }
            "solve" => {
                if let GuessOutcome::Revealed { celebration, .. } = session.reveal_all() {
                    print_board(&session, &category);
                    if celebration {
                        print_victory(&session);
                    }
                }
            }
            "" => {}
            other => println!("❓ Unknown command '{other}'\n"),
        }
    }
}

fn handle_guess(session: &mut GameSession, category: &str, ch: char) {
    match session.guess(ch) {
        GuessOutcome::Revealed {
            positions,
            celebration,
            ..
        } => {
            println!(
                "\n🔔 {} {} {}!\n",
                "DING!".bright_green().bold(),
                positions.len(),
                if positions.len() == 1 { "tile opens" } else { "tiles open" }
            );
            print_board(session, category);
            if celebration {
                print_victory(session);
            }
        }
        // Wrong, repeated, and illegal guesses are all silent no-ops.
        GuessOutcome::Ignored => {}
    }
}

fn start_round<R: rand::Rng>(
    session: &mut GameSession,
    entries: &[PhraseEntry],
    rng: &mut R,
) -> Result<String> {
    let entry = pick_random(entries, rng).context("phrase table is empty")?;
    session.start(&entry.phrase);
    Ok(entry.category.clone())
}

fn print_board(session: &GameSession, category: &str) {
    let Some(phrase) = session.phrase() else {
        return;
    };
    println!("{}", "─".repeat(40).cyan());
    println!("Kategori: {}", category.bright_cyan().bold());
    println!("{}\n", "─".repeat(40).cyan());
    println!("{}\n", render_board(phrase, &session.guessed()));
}

fn print_victory(session: &GameSession) {
    println!("\n{}", "═".repeat(64).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  P H R A S E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(64).bright_cyan());
    if let Some(phrase) = session.phrase() {
        println!("\n  {}\n", phrase.bright_yellow().bold());
    }
    println!("Type 'new' for the next phrase or 'quit' to stop.\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok(input.trim().to_string())
}
