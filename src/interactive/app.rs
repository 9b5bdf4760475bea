//! TUI application state and logic

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::{GameSession, GuessOutcome, PhraseEntry};
use crate::store::pick_random;

/// Application state
pub struct App {
    pub session: GameSession,
    pub category: String,
    pub peeking: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    entries: Vec<PhraseEntry>,
    rng: ThreadRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Build the app around a loaded phrase table
    ///
    /// The table is guaranteed non-empty by the store's load fallback.
    #[must_use]
    pub fn new(entries: Vec<PhraseEntry>) -> Self {
        Self {
            session: GameSession::new(),
            category: String::new(),
            peeking: false,
            messages: vec![Message {
                text: "Welcome! Guess letters to open the tiles.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            entries,
            rng: rand::rng(),
        }
    }

    /// Draw a random phrase and put it on the board
    pub fn new_round(&mut self) {
        let Some(entry) = pick_random(&self.entries, &mut self.rng).cloned() else {
            self.add_message("Phrase table is empty!", MessageStyle::Error);
            return;
        };

        self.category = entry.category;
        self.peeking = false;
        let celebration = self.session.start(&entry.phrase);
        self.add_message("New phrase on the board.", MessageStyle::Info);
        // A phrase with no letters is won on arrival.
        if celebration {
            self.celebrate();
        }
    }

    /// Feed one typed character into the round
    pub fn handle_guess(&mut self, raw: char) {
        match self.session.guess(raw) {
            GuessOutcome::Revealed {
                positions,
                ding,
                celebration,
            } => {
                if ding {
                    self.add_message(
                        &format!(
                            "DING! {} {} open.",
                            positions.len(),
                            if positions.len() == 1 { "tile" } else { "tiles" }
                        ),
                        MessageStyle::Success,
                    );
                    ring_bell();
                }
                if celebration {
                    self.celebrate();
                }
            }
            // Wrong, repeated, and illegal characters are silent no-ops.
            GuessOutcome::Ignored => {}
        }
    }

    /// The explicit solve action (Enter)
    pub fn handle_solve(&mut self) {
        if let GuessOutcome::Revealed { celebration, .. } = self.session.reveal_all() {
            self.add_message("Phrase revealed.", MessageStyle::Info);
            if celebration {
                self.celebrate();
            }
        }
    }

    /// Swap the status label between category and phrase
    ///
    /// Pure presentation state; guesses are untouched.
    pub fn toggle_peek(&mut self) {
        self.peeking = !self.peeking;
    }

    /// Text for the status line: the category, or the phrase while peeking
    #[must_use]
    pub fn status_text(&self) -> &str {
        if self.peeking {
            self.session.phrase().unwrap_or("")
        } else {
            &self.category
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn celebrate(&mut self) {
        self.add_message("🎉 VICTORY! The phrase is solved! 🎉", MessageStyle::Success);
        self.add_message("Press 'n' for a new phrase or 'q' to quit.", MessageStyle::Info);
        ring_bell();
    }
}

/// Best-effort terminal bell for the audio cues
fn ring_bell() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Put the first phrase on the board
    app.new_round();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_round();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Enter => {
                    app.handle_solve();
                }
                KeyCode::Char(' ') => {
                    app.toggle_peek();
                }
                // Once the round is won, plain n/q stop being guesses.
                KeyCode::Char('n') if app.session.is_victorious() => {
                    app.new_round();
                }
                KeyCode::Char('q') if app.session.is_victorious() => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    app.handle_guess(c);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(phrase: &str, category: &str) -> App {
        let mut app = App::new(vec![
            PhraseEntry::new(phrase, category).expect("valid test entry")
        ]);
        app.new_round();
        app
    }

    #[test]
    fn new_round_sets_category_and_board() {
        let app = app_with("BAMSE ER FRA JYLLAND", "RANDOM");
        assert!(app.session.is_active());
        assert_eq!(app.category, "RANDOM");
        assert_eq!(app.status_text(), "RANDOM");
    }

    #[test]
    fn peek_swaps_status_without_touching_guesses() {
        let mut app = app_with("BAMSE ER FRA JYLLAND", "RANDOM");
        app.handle_guess('B');
        let guessed_before = app.session.guessed();

        app.toggle_peek();
        assert_eq!(app.status_text(), "BAMSE ER FRA JYLLAND");
        assert_eq!(app.session.guessed(), guessed_before);

        app.toggle_peek();
        assert_eq!(app.status_text(), "RANDOM");
    }

    #[test]
    fn correct_guess_pushes_a_ding_message() {
        let mut app = app_with("BAMSE ER FRA JYLLAND", "RANDOM");
        let before = app.messages.len();
        app.handle_guess('b');
        assert!(app.messages.len() > before);
        assert!(app.messages.last().unwrap().text.contains("DING"));
    }

    #[test]
    fn wrong_guess_is_silent() {
        let mut app = app_with("BAMSE ER FRA JYLLAND", "RANDOM");
        let before = app.messages.len();
        app.handle_guess('q');
        app.handle_guess('!');
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn solve_wins_the_round_once() {
        let mut app = app_with("BAMSE ER FRA JYLLAND", "RANDOM");
        app.handle_solve();
        assert!(app.session.is_victorious());

        let victories = app
            .messages
            .iter()
            .filter(|m| m.text.contains("VICTORY"))
            .count();
        assert_eq!(victories, 1);

        // Solving again must not re-celebrate.
        app.handle_solve();
        let victories = app
            .messages
            .iter()
            .filter(|m| m.text.contains("VICTORY"))
            .count();
        assert_eq!(victories, 1);
    }
}
