//! Phrase-table editing operations
//!
//! Each operation loads the table, mutates a working copy, and saves the
//! whole collection back; there are no partial writes. The table never
//! drops below one row, so random selection always has something to pick.

use anyhow::{bail, Result};

use crate::core::PhraseEntry;
use crate::store::PhraseStore;

/// Append a validated row and save
///
/// # Errors
/// Fails when either field is empty, or on store I/O errors.
pub fn add_entry(store: &PhraseStore, phrase: &str, category: &str) -> Result<PhraseEntry> {
    let entry = PhraseEntry::new(phrase, category)?;
    let mut entries = store.load()?;
    entries.push(entry.clone());
    store.save(&entries)?;
    Ok(entry)
}

/// Remove the row at `index` (1-based) and save
///
/// The last remaining row is never removed.
///
/// # Errors
/// Fails on an out-of-range index, on an attempt to empty the table, or
/// on store I/O errors.
pub fn remove_entry(store: &PhraseStore, index: usize) -> Result<PhraseEntry> {
    let mut entries = store.load()?;

    if index == 0 || index > entries.len() {
        bail!("no row {index}; the table has {} rows", entries.len());
    }
    if entries.len() == 1 {
        bail!("the table must keep at least one row");
    }

    let removed = entries.remove(index - 1);
    store.save(&entries)?;
    Ok(removed)
}

/// Replace the row at `index` (1-based) and save
///
/// # Errors
/// Fails on an out-of-range index, empty fields, or store I/O errors.
pub fn set_entry(
    store: &PhraseStore,
    index: usize,
    phrase: &str,
    category: &str,
) -> Result<PhraseEntry> {
    let entry = PhraseEntry::new(phrase, category)?;
    let mut entries = store.load()?;

    if index == 0 || index > entries.len() {
        bail!("no row {index}; the table has {} rows", entries.len());
    }

    entries[index - 1] = entry.clone();
    store.save(&entries)?;
    Ok(entry)
}
