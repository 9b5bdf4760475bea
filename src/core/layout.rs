//! Phrase-to-board layout
//!
//! Maps a phrase onto a fixed 12-column tile board: words are packed
//! greedily onto lines of at most [`MAX_LINE_WIDTH`] characters, each line
//! is centered on the board, and every non-space character becomes a tile.
//!
//! Everything here is a pure function of its inputs. The session layer
//! re-derives the layout on every keystroke instead of caching it; the
//! board is small enough that this is always cheap.

/// Number of tile columns on the board
pub const BOARD_COLUMNS: usize = 12;

/// Number of tile rows on the board (row 0 is the top margin)
pub const BOARD_ROWS: usize = 6;

/// Maximum characters per line when packing words
pub const MAX_LINE_WIDTH: usize = 10;

/// Half the board width, used for centering
const HALF_BOARD: i32 = (BOARD_COLUMNS / 2) as i32;

/// One display row of the phrase: its words re-joined with single spaces,
/// plus the column the first character lands on.
///
/// `start_column` may be negative when the joined text is wider than the
/// board; that is accepted, never clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub start_column: i32,
    pub text: String,
}

impl Line {
    /// Character length of the joined text
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// A board slot holding one phrase character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub column: i32,
    pub row: usize,
    pub ch: char,
}

impl Tile {
    /// The slot without its character
    #[must_use]
    pub const fn pos(self) -> TilePos {
        TilePos {
            column: self.column,
            row: self.row,
        }
    }
}

/// A board slot address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub column: i32,
    pub row: usize,
}

/// Pack the phrase's words onto centered lines
///
/// Greedy packing: a word opens a new line when the characters already on
/// the line (each counted with its trailing space) plus the word itself
/// would exceed `max_line_width`. The word's own trailing space is not
/// counted, so the first word placed after a break always fits no matter
/// how long it is; a single overlong word can therefore never loop, it
/// just overflows the board. A first word longer than the width leaves a
/// leading empty line behind.
///
/// Consecutive spaces split into empty words. These are kept: each one
/// contributes an extra joining space to the line text and so consumes a
/// board column, but never produces a tile.
///
/// # Examples
/// ```
/// use lykkehjulet::core::distribute_to_lines;
///
/// let lines = distribute_to_lines("BAMSE ER FRA JYLLAND", 10);
/// let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
/// assert_eq!(texts, ["BAMSE ER", "FRA", "JYLLAND"]);
/// ```
#[must_use]
pub fn distribute_to_lines(phrase: &str, max_line_width: usize) -> Vec<Line> {
    let mut lines: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    // Characters consumed by the words already on the line, each with its
    // trailing space.
    let mut used = 0usize;

    for word in phrase.split(' ') {
        let len = word.chars().count();
        if used + len > max_line_width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        used += len + 1;
        current.push(word);
    }
    lines.push(current);

    lines.iter().map(|words| center_on_line(words)).collect()
}

/// Join a line's words and center them: `start = 6 - ceil(len / 2)`
fn center_on_line(words: &[&str]) -> Line {
    let text = words.join(" ");
    let len = text.chars().count() as i32;
    let start_column = HALF_BOARD - (len + 1) / 2;
    Line { start_column, text }
}

/// Every tile of the phrase, in reading order
///
/// `row` is the line index plus one; row 0 stays empty as the board's top
/// margin. Spaces never produce a tile.
#[must_use]
pub fn tile_positions(phrase: &str) -> Vec<Tile> {
    let mut tiles = Vec::new();
    for (index, line) in distribute_to_lines(phrase, MAX_LINE_WIDTH).iter().enumerate() {
        for (i, ch) in line.text.chars().enumerate() {
            if ch != ' ' {
                tiles.push(Tile {
                    column: i as i32 + line.start_column,
                    row: index + 1,
                    ch,
                });
            }
        }
    }
    tiles
}

/// The slots whose character equals `ch`
///
/// The query is expected pre-uppercased by the caller; comparison is exact.
#[must_use]
pub fn reveal_positions(phrase: &str, ch: char) -> Vec<TilePos> {
    tile_positions(phrase)
        .into_iter()
        .filter(|tile| tile.ch == ch)
        .map(Tile::pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn distribute_packs_greedily() {
        // BAMSE(5) ER(2) fit on one line: 6 used + 2 = 8 <= 10.
        // FRA would need 9 + 3 = 12, so it breaks.
        let lines = distribute_to_lines("BAMSE ER FRA JYLLAND", 10);
        assert_eq!(texts(&lines), ["BAMSE ER", "FRA", "JYLLAND"]);
    }

    #[test]
    fn distribute_never_splits_a_word() {
        let lines = distribute_to_lines("BAMSE ER FRA JYLLAND", 10);
        for line in &lines {
            for word in line.text.split(' ') {
                assert!(
                    "BAMSE ER FRA JYLLAND".split(' ').any(|w| w == word),
                    "'{word}' is not a whole source word"
                );
            }
        }
    }

    #[test]
    fn centering_stays_on_board_for_narrow_lines() {
        let lines = distribute_to_lines("BAMSE ER FRA JYLLAND", 10);
        assert_eq!(lines[0].start_column, 2); // 6 - ceil(8/2)
        assert_eq!(lines[1].start_column, 4); // 6 - ceil(3/2)
        assert_eq!(lines[2].start_column, 2); // 6 - ceil(7/2)
        for line in &lines {
            assert!(line.width() <= BOARD_COLUMNS);
            assert!(line.start_column >= 0);
            assert!(line.start_column + line.width() as i32 <= BOARD_COLUMNS as i32);
        }
    }

    #[test]
    fn single_word_per_line_when_nothing_fits_together() {
        let lines = distribute_to_lines("BAMSE ELSKER SODAVANDEN", 10);
        assert_eq!(texts(&lines), ["BAMSE", "ELSKER", "SODAVANDEN"]);
        assert_eq!(lines[0].start_column, 3);
        assert_eq!(lines[1].start_column, 3);
        assert_eq!(lines[2].start_column, 1);
    }

    #[test]
    fn overlong_first_word_leaves_leading_empty_line() {
        // 14 characters: breaks immediately, flushing the empty line, then
        // lands unconditionally on the next one.
        let lines = distribute_to_lines("KÆMPESTORSLÅET", 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "");
        assert_eq!(lines[0].start_column, 6);
        assert_eq!(lines[1].text, "KÆMPESTORSLÅET");
        assert_eq!(lines[1].start_column, -1); // 6 - ceil(14/2), unclamped
    }

    #[test]
    fn start_column_negative_only_when_wider_than_board() {
        for phrase in ["BAMSE ER FRA JYLLAND", "KÆMPESTORSLÅET", "A  B", ""] {
            for line in distribute_to_lines(phrase, 10) {
                if line.width() <= BOARD_COLUMNS {
                    assert!(
                        line.start_column + line.width() as i32 <= BOARD_COLUMNS as i32,
                        "line {line:?} overflows the board"
                    );
                } else {
                    assert!(line.start_column < 0);
                }
            }
        }
    }

    #[test]
    fn double_space_keeps_column() {
        // "A", "", "B" rejoin as "A  B": the empty word consumes a column
        // through its joining space but renders no tile.
        let lines = distribute_to_lines("A  B", 10);
        assert_eq!(texts(&lines), ["A  B"]);
        assert_eq!(lines[0].start_column, 4);

        let tiles = tile_positions("A  B");
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0], Tile { column: 4, row: 1, ch: 'A' });
        assert_eq!(tiles[1], Tile { column: 7, row: 1, ch: 'B' });
    }

    #[test]
    fn empty_phrase_has_no_tiles() {
        let lines = distribute_to_lines("", 10);
        assert_eq!(texts(&lines), [""]);
        assert!(tile_positions("").is_empty());
    }

    #[test]
    fn tiles_skip_spaces_and_offset_rows() {
        let tiles = tile_positions("BAMSE ER FRA JYLLAND");
        // 17 letters in the phrase, none of the 3 spaces.
        assert_eq!(tiles.len(), 17);
        assert!(tiles.iter().all(|t| t.ch != ' '));
        // Row 0 is the top margin.
        assert!(tiles.iter().all(|t| t.row >= 1));
        assert_eq!(tiles.iter().map(|t| t.row).max(), Some(3));
    }

    #[test]
    fn first_tile_of_each_line_sits_at_start_column() {
        let lines = distribute_to_lines("BAMSE ELSKER SODAVANDEN", 10);
        let tiles = tile_positions("BAMSE ELSKER SODAVANDEN");
        for (index, line) in lines.iter().enumerate() {
            let first = tiles
                .iter()
                .find(|t| t.row == index + 1)
                .expect("line has tiles");
            assert_eq!(first.column, line.start_column);
        }
    }

    #[test]
    fn reveal_positions_match_the_queried_letter() {
        // S appears once per line: BAMSE, ELSKER, SODAVANDEN.
        let positions = reveal_positions("BAMSE ELSKER SODAVANDEN", 'S');
        assert_eq!(
            positions,
            [
                TilePos { column: 6, row: 1 },
                TilePos { column: 5, row: 2 },
                TilePos { column: 1, row: 3 },
            ]
        );
    }

    #[test]
    fn reveal_positions_is_always_a_subset_of_tiles() {
        let phrase = "BAMSE ELSKER SODAVANDEN";
        let tiles: Vec<TilePos> = tile_positions(phrase).into_iter().map(Tile::pos).collect();
        for ch in 'A'..='Z' {
            for pos in reveal_positions(phrase, ch) {
                assert!(tiles.contains(&pos), "{pos:?} not a tile for '{ch}'");
            }
        }
    }

    #[test]
    fn reveal_positions_unknown_letter_is_empty() {
        assert!(reveal_positions("BAMSE ER FRA JYLLAND", 'Q').is_empty());
        assert!(reveal_positions("BAMSE ER FRA JYLLAND", ' ').is_empty());
    }

    #[test]
    fn layout_is_deterministic() {
        let phrase = "BAMSE ELSKER SODAVANDEN";
        assert_eq!(tile_positions(phrase), tile_positions(phrase));
        assert_eq!(reveal_positions(phrase, 'S'), reveal_positions(phrase, 'S'));
    }
}
