//! A phrase/category row of the phrase table

use std::fmt;

use serde::{Deserialize, Serialize};

use super::alphabet::normalize;

/// One row of the phrase table: the secret sentence and its hint label
///
/// Both fields are stored uppercase. Rows live in a flat ordered `Vec`;
/// duplicates are allowed and edits replace the whole collection on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub phrase: String,
    pub category: String,
}

/// Error type for incomplete rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    EmptyPhrase,
    EmptyCategory,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhrase => write!(f, "Phrase must not be empty"),
            Self::EmptyCategory => write!(f, "Category must not be empty"),
        }
    }
}

impl std::error::Error for EntryError {}

impl PhraseEntry {
    /// Create a validated row
    ///
    /// Both fields are trimmed and uppercased. A blank phrase or category
    /// is refused.
    ///
    /// # Errors
    /// Returns `EntryError` when either field is empty after trimming.
    ///
    /// # Examples
    /// ```
    /// use lykkehjulet::core::PhraseEntry;
    ///
    /// let entry = PhraseEntry::new("Bamse er fra Jylland", "random").unwrap();
    /// assert_eq!(entry.phrase, "BAMSE ER FRA JYLLAND");
    /// assert_eq!(entry.category, "RANDOM");
    ///
    /// assert!(PhraseEntry::new("", "random").is_err());
    /// ```
    pub fn new(
        phrase: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let phrase = uppercase(phrase.into().trim());
        let category = uppercase(category.into().trim());

        if phrase.is_empty() {
            return Err(EntryError::EmptyPhrase);
        }
        if category.is_empty() {
            return Err(EntryError::EmptyCategory);
        }

        Ok(Self { phrase, category })
    }

    /// The built-in row used whenever no phrase table exists yet
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            phrase: "BAMSE ER FRA JYLLAND".to_string(),
            category: "RANDOM".to_string(),
        }
    }

    /// Uppercase both fields in place, as load/save normalization does
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            phrase: uppercase(&self.phrase),
            category: uppercase(&self.category),
        }
    }

    /// Whether both fields are non-empty
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.phrase.trim().is_empty() && !self.category.trim().is_empty()
    }
}

impl fmt::Display for PhraseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.phrase, self.category)
    }
}

fn uppercase(text: &str) -> String {
    text.chars().map(normalize).collect()
}
