//! Round state: guessed letters, targets, victory
//!
//! A session is Idle between rounds and Active while a phrase is on the
//! board. All transitions are synchronous; the presentation layer feeds
//! characters in and gets reveal positions and cues back.

use rustc_hash::FxHashSet;

use super::alphabet::{is_legal, normalize};
use super::layout::{reveal_positions, tile_positions, Tile, TilePos};

/// What a guess (or solve) did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Tiles opened. `ding` asks the presentation layer for the per-letter
    /// cue; `celebration` fires at most once per round, on the transition
    /// into victory.
    Revealed {
        positions: Vec<TilePos>,
        ding: bool,
        celebration: bool,
    },
    /// Illegal, absent, already-guessed, or no round in play. Never an error.
    Ignored,
}

/// The word-guessing state machine
///
/// Layout is re-derived from the phrase on every call instead of cached;
/// [`tile_positions`] is pure and the board is tiny.
#[derive(Debug, Default)]
pub struct GameSession {
    round: Option<Round>,
}

#[derive(Debug)]
struct Round {
    phrase: String,
    targets: FxHashSet<char>,
    guessed: FxHashSet<char>,
    celebrated: bool,
}

impl Round {
    fn new(phrase: &str) -> Self {
        let phrase: String = phrase.chars().map(normalize).collect();
        let targets: FxHashSet<char> = phrase.chars().filter(|&ch| ch != ' ').collect();
        Self {
            phrase,
            targets,
            guessed: FxHashSet::default(),
            celebrated: false,
        }
    }

    fn is_victorious(&self) -> bool {
        self.guessed.is_superset(&self.targets)
    }

    /// Latch the celebration; true only on the unset→set transition.
    fn check_celebration(&mut self) -> bool {
        if self.is_victorious() && !self.celebrated {
            self.celebrated = true;
            return true;
        }
        false
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a round with `phrase`, from Idle or over a running round
    ///
    /// Resets the guessed set, recomputes the targets, clears the victory
    /// latch. Returns `true` when the round is won on arrival: a phrase
    /// with no non-space characters has an empty target set, which is
    /// vacuously covered, and the celebration fires right here.
    pub fn start(&mut self, phrase: &str) -> bool {
        let mut round = Round::new(phrase);
        let celebration = round.check_celebration();
        self.round = Some(round);
        celebration
    }

    /// Forget the current round
    pub fn stop(&mut self) {
        self.round = None;
    }

    /// Attempt a guess with a raw input character
    ///
    /// The character is uppercased first. It must be in the legal
    /// alphabet, present in the phrase, and not guessed before; anything
    /// else is a silent no-op.
    pub fn guess(&mut self, raw: char) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::Ignored;
        };

        let ch = normalize(raw);
        if !is_legal(ch) || !round.targets.contains(&ch) || round.guessed.contains(&ch) {
            return GuessOutcome::Ignored;
        }

        round.guessed.insert(ch);
        let positions = reveal_positions(&round.phrase, ch);
        let celebration = round.check_celebration();
        GuessOutcome::Revealed {
            positions,
            ding: true,
            celebration,
        }
    }

    /// The explicit solve action: open every tile at once
    ///
    /// Adds every phrase character to the guessed set, bypassing the
    /// legality and presence checks a normal guess goes through. No
    /// per-letter ding, only the (once-only) victory celebration.
    pub fn reveal_all(&mut self) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::Ignored;
        };

        for ch in round.phrase.chars().filter(|&ch| ch != ' ') {
            round.guessed.insert(ch);
        }
        let positions = tile_positions(&round.phrase)
            .into_iter()
            .map(Tile::pos)
            .collect();
        let celebration = round.check_celebration();
        GuessOutcome::Revealed {
            positions,
            ding: false,
            celebration,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.round.is_some()
    }

    /// The current phrase, uppercased, if a round is in play
    #[must_use]
    pub fn phrase(&self) -> Option<&str> {
        self.round.as_ref().map(|round| round.phrase.as_str())
    }

    #[must_use]
    pub fn is_victorious(&self) -> bool {
        self.round.as_ref().is_some_and(Round::is_victorious)
    }

    /// Whether a character has been guessed this round
    #[must_use]
    pub fn is_guessed(&self, ch: char) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| round.guessed.contains(&normalize(ch)))
    }

    /// Letters guessed so far this round
    #[must_use]
    pub fn guessed(&self) -> FxHashSet<char> {
        self.round
            .as_ref()
            .map(|round| round.guessed.clone())
            .unwrap_or_default()
    }

    /// All tiles of the board with their characters
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        self.phrase().map(tile_positions).unwrap_or_default()
    }

    /// The tiles whose letters have been guessed, re-derived on each call
    #[must_use]
    pub fn revealed_tiles(&self) -> Vec<Tile> {
        let Some(round) = self.round.as_ref() else {
            return Vec::new();
        };
        tile_positions(&round.phrase)
            .into_iter()
            .filter(|tile| round.guessed.contains(&tile.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed(outcome: &GuessOutcome) -> &[TilePos] {
        match outcome {
            GuessOutcome::Revealed { positions, .. } => positions,
            GuessOutcome::Ignored => panic!("expected a reveal, got Ignored"),
        }
    }

    #[test]
    fn guess_before_start_is_ignored() {
        let mut session = GameSession::new();
        assert_eq!(session.guess('A'), GuessOutcome::Ignored);
        assert_eq!(session.reveal_all(), GuessOutcome::Ignored);
        assert!(!session.is_active());
    }

    #[test]
    fn start_uppercases_and_collects_targets() {
        let mut session = GameSession::new();
        session.start("bamse er fra jylland");
        assert_eq!(session.phrase(), Some("BAMSE ER FRA JYLLAND"));
        // Unique non-space letters of the phrase.
        let expected: FxHashSet<char> =
            "BAMSE ER FRA JYLLAND".chars().filter(|&c| c != ' ').collect();
        for ch in &expected {
            session.guess(*ch);
        }
        assert_eq!(session.guessed(), expected);
    }

    #[test]
    fn correct_guess_reveals_every_occurrence_at_once() {
        let mut session = GameSession::new();
        session.start("BAMSE ELSKER SODAVANDEN");

        let outcome = session.guess('S');
        assert_eq!(
            revealed(&outcome),
            [
                TilePos { column: 6, row: 1 },
                TilePos { column: 5, row: 2 },
                TilePos { column: 1, row: 3 },
            ]
        );
        match outcome {
            GuessOutcome::Revealed { ding, celebration, .. } => {
                assert!(ding);
                assert!(!celebration);
            }
            GuessOutcome::Ignored => unreachable!(),
        }
    }

    #[test]
    fn repeated_guess_is_a_silent_no_op() {
        let mut session = GameSession::new();
        session.start("BAMSE ELSKER SODAVANDEN");

        assert!(matches!(session.guess('S'), GuessOutcome::Revealed { .. }));
        let before = session.guessed();
        assert_eq!(session.guess('S'), GuessOutcome::Ignored);
        assert_eq!(session.guessed(), before);
    }

    #[test]
    fn absent_and_illegal_guesses_are_ignored() {
        let mut session = GameSession::new();
        session.start("BAMSE ER FRA JYLLAND");

        assert_eq!(session.guess('Q'), GuessOutcome::Ignored); // absent
        assert_eq!(session.guess(' '), GuessOutcome::Ignored); // never legal
        assert_eq!(session.guess('3'), GuessOutcome::Ignored);
        assert!(session.guessed().is_empty());
    }

    #[test]
    fn lowercase_input_is_normalized() {
        let mut session = GameSession::new();
        session.start("BAMSE ER FRA JYLLAND");
        assert!(matches!(session.guess('b'), GuessOutcome::Revealed { .. }));
        assert!(session.is_guessed('B'));
    }

    #[test]
    fn guessing_all_letters_wins_with_one_celebration() {
        let mut session = GameSession::new();
        session.start("BAMSE ELSKER SODAVANDEN");

        let targets = "BAMSELKRODVN";
        assert_eq!(targets.chars().count(), 12);

        let mut celebrations = 0;
        for ch in targets.chars() {
            if let GuessOutcome::Revealed { celebration, .. } = session.guess(ch) {
                if celebration {
                    celebrations += 1;
                }
            }
        }

        assert!(session.is_victorious());
        assert_eq!(celebrations, 1);

        // Still victorious, but no second celebration from further input.
        assert_eq!(session.guess('B'), GuessOutcome::Ignored);
        if let GuessOutcome::Revealed { celebration, .. } = session.reveal_all() {
            assert!(!celebration);
        }
    }

    #[test]
    fn reveal_all_opens_every_tile_without_ding() {
        let mut session = GameSession::new();
        session.start("BAMSE ER FRA JYLLAND");
        session.guess('B');

        match session.reveal_all() {
            GuessOutcome::Revealed { positions, ding, celebration } => {
                assert_eq!(positions.len(), 17); // every letter tile
                assert!(!ding);
                assert!(celebration);
            }
            GuessOutcome::Ignored => panic!("active session must reveal"),
        }
        assert!(session.is_victorious());
    }

    #[test]
    fn empty_phrase_is_instant_victory() {
        let mut session = GameSession::new();
        assert!(session.start(""));
        assert!(session.is_victorious());
        // The latch is already set; nothing re-celebrates.
        if let GuessOutcome::Revealed { celebration, .. } = session.reveal_all() {
            assert!(!celebration);
        }
    }

    #[test]
    fn space_only_phrase_is_instant_victory() {
        let mut session = GameSession::new();
        assert!(session.start("   "));
        assert!(session.is_victorious());
    }

    #[test]
    fn new_round_resets_the_latch() {
        let mut session = GameSession::new();
        session.start("AB");
        session.guess('A');
        if let GuessOutcome::Revealed { celebration, .. } = session.guess('B') {
            assert!(celebration);
        }

        // Fresh round: clean guessed set, celebration can fire again.
        assert!(!session.start("AB"));
        assert!(session.guessed().is_empty());
        session.guess('A');
        match session.guess('B') {
            GuessOutcome::Revealed { celebration, .. } => assert!(celebration),
            GuessOutcome::Ignored => panic!("B is a fresh guess this round"),
        }
    }

    #[test]
    fn revealed_tiles_track_guesses() {
        let mut session = GameSession::new();
        session.start("BAMSE ELSKER SODAVANDEN");
        assert!(session.revealed_tiles().is_empty());

        session.guess('S');
        let revealed = session.revealed_tiles();
        assert_eq!(revealed.len(), 3);
        assert!(revealed.iter().all(|t| t.ch == 'S'));

        session.reveal_all();
        assert_eq!(session.revealed_tiles().len(), session.tiles().len());
    }
}
