//! Layout preview command
//!
//! Computes the board placement for a phrase without starting a game, so
//! an operator can check how a candidate phrase wraps before adding it.

use rustc_hash::FxHashSet;

use crate::core::{alphabet::normalize, distribute_to_lines, tile_positions, Line, MAX_LINE_WIDTH};

/// Result of previewing a phrase's layout
pub struct PreviewResult {
    pub phrase: String,
    pub lines: Vec<Line>,
    pub tile_count: usize,
    pub target_count: usize,
}

/// Compute the layout a phrase would get on the board
///
/// The phrase is uppercased first, the same normalization a game round
/// applies.
///
/// # Errors
///
/// Returns an error if the phrase contains no letters at all; such a
/// phrase would start an already-won round.
pub fn preview_phrase(phrase: &str) -> Result<PreviewResult, String> {
    let normalized: String = phrase.chars().map(normalize).collect();
    if normalized.chars().all(|ch| ch == ' ') {
        return Err("phrase has no letters to lay out".to_string());
    }

    let lines = distribute_to_lines(&normalized, MAX_LINE_WIDTH);
    let tile_count = tile_positions(&normalized).len();
    let targets: FxHashSet<char> = normalized.chars().filter(|&ch| ch != ' ').collect();

    Ok(PreviewResult {
        phrase: normalized,
        lines,
        tile_count,
        target_count: targets.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_valid_phrase() {
        let result = preview_phrase("bamse er fra jylland").unwrap();

        assert_eq!(result.phrase, "BAMSE ER FRA JYLLAND");
        assert_eq!(result.lines.len(), 3);
        assert_eq!(result.tile_count, 17);
        // Unique letters: B,A,M,S,E,R,F,J,Y,L,N,D
        assert_eq!(result.target_count, 12);
    }

    #[test]
    fn preview_empty_phrase_is_an_error() {
        assert!(preview_phrase("").is_err());
        assert!(preview_phrase("   ").is_err());
    }

    #[test]
    fn preview_keeps_line_order() {
        let result = preview_phrase("BAMSE ELSKER SODAVANDEN").unwrap();
        let texts: Vec<&str> = result.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["BAMSE", "ELSKER", "SODAVANDEN"]);
    }
}
