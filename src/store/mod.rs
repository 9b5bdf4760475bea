//! Phrase-table persistence
//!
//! The whole table lives in one JSON file in the per-user data directory.
//! Loads fall back to the built-in row when nothing has been saved yet, so
//! callers always hold at least one entry; saves replace the entire file
//! atomically, never merging.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::PhraseEntry;

/// Subdirectory of the user data dir holding the table
pub const STORE_DIR: &str = "lykkehjulet";

/// File name of the phrase table
pub const STORE_FILE: &str = "phrases.json";

/// Handle to the phrase table's on-disk location
#[derive(Debug, Clone)]
pub struct PhraseStore {
    path: PathBuf,
}

impl PhraseStore {
    /// The store at the default per-user location
    ///
    /// # Errors
    /// Fails when the platform exposes no user data directory.
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir().context("no user data directory available")?;
        Ok(Self {
            path: base.join(STORE_DIR).join(STORE_FILE),
        })
    }

    /// A store at an explicit path
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole table
    ///
    /// A missing file (or an empty table) is not an error: the built-in
    /// fallback row is returned instead, so the result is never empty.
    /// All text is uppercased on the way in.
    ///
    /// # Errors
    /// Fails on unreadable or malformed JSON.
    pub fn load(&self) -> Result<Vec<PhraseEntry>> {
        if !self.path.exists() {
            return Ok(vec![PhraseEntry::fallback()]);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let entries: Vec<PhraseEntry> = serde_json::from_str(&content)
            .with_context(|| format!("malformed phrase table {}", self.path.display()))?;

        if entries.is_empty() {
            return Ok(vec![PhraseEntry::fallback()]);
        }
        Ok(entries.into_iter().map(PhraseEntry::normalized).collect())
    }

    /// Replace the whole table on disk
    ///
    /// Entries are uppercased before writing. The file is written next to
    /// its final location and renamed into place, so a crash mid-save
    /// never leaves a half-written table.
    ///
    /// # Errors
    /// Refuses a collection containing a row with an empty phrase or
    /// category; fails on I/O errors.
    pub fn save(&self, entries: &[PhraseEntry]) -> Result<()> {
        if let Some(incomplete) = entries.iter().find(|entry| !entry.is_complete()) {
            bail!(
                "refusing to save: row with empty field ({:?} / {:?})",
                incomplete.phrase,
                incomplete.category
            );
        }

        let dir = self
            .path
            .parent()
            .context("phrase table path has no parent directory")?;
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let normalized: Vec<PhraseEntry> = entries
            .iter()
            .cloned()
            .map(PhraseEntry::normalized)
            .collect();
        let json = serde_json::to_string_pretty(&normalized)
            .context("failed to serialize phrase table")?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .context("failed to write phrase table")?;
        tmp.persist(&self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

/// Pick a phrase uniformly at random
///
/// The RNG is injected so tests can seed it. Returns `None` only for an
/// empty slice, which [`PhraseStore::load`] never produces.
pub fn pick_random<'a, R: Rng + ?Sized>(
    entries: &'a [PhraseEntry],
    rng: &mut R,
) -> Option<&'a PhraseEntry> {
    entries.choose(rng)
}
