//! File storage for decks
//!
//! Every deck lives in its own file inside one directory:
//! ```text
//! decks/
//! ├── Spanish.json   # [{"question": "...", "answer": "..."}, ...]
//! └── Capitals.json
//! ```
//! Files are read and written whole. There is no envelope around the card
//! array, so anything that is a JSON array of question/answer objects is a deck.

use crate::config::Config;
use crate::error::{FlashcardError, Result};
use crate::models::Flashcard;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

const DECK_EXTENSION: &str = ".json";

fn name_problem(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("name is empty")
    } else if name != name.trim() {
        Some("name has leading or trailing whitespace")
    } else if name.contains(['/', '\\']) {
        Some("name contains a path separator")
    } else if name.contains('\0') {
        Some("name contains a NUL character")
    } else if name.starts_with('.') {
        Some("name starts with '.'")
    } else {
        None
    }
}

/// Checks that a deck name can be used as a file stem inside the decks directory.
///
/// Rejects empty names, surrounding whitespace, path separators, NUL and
/// names starting with a dot (which covers `.` and `..`).
pub fn validate_deck_name(name: &str) -> Result<()> {
    match name_problem(name) {
        Some(reason) => {
            warn!(name, reason, "rejected deck name");
            Err(FlashcardError::InvalidDeckName(format!("{name}: {reason}")))
        }
        None => Ok(()),
    }
}

/// Directory that holds the deck files
#[derive(Debug, Clone)]
pub struct DeckDirectory {
    dir: PathBuf,
}

impl DeckDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.decks_dir.clone())
    }

    /// Path of the file backing `name`, after validating the name
    pub fn deck_path(&self, name: &str) -> Result<PathBuf> {
        validate_deck_name(name)?;
        Ok(self.dir.join(format!("{name}{DECK_EXTENSION}")))
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.deck_path(name)?.is_file())
    }

    /// Overwrites the deck file with the given cards, creating the directory if needed
    pub fn write_cards(&self, name: &str, cards: &[Flashcard]) -> Result<()> {
        let path = self.deck_path(name)?;
        fs::create_dir_all(&self.dir)?;

        let entries = cards
            .iter()
            .map(Flashcard::to_json_value)
            .collect::<Result<Vec<_>>>()?;
        let json_string = serde_json::to_string_pretty(&entries)?;
        fs::write(&path, json_string)?;

        debug!(path = %path.display(), cards = cards.len(), "deck written");
        Ok(())
    }

    /// Reads the cards of a deck, in file order.
    ///
    /// Returns `Ok(None)` when the deck has no file yet.
    pub fn read_cards(&self, name: &str) -> Result<Option<Vec<Flashcard>>> {
        let path = self.deck_path(name)?;
        if !path.is_file() {
            debug!(path = %path.display(), "deck file not found");
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let entries: Vec<Value> = serde_json::from_str(&contents)?;
        let cards = entries
            .iter()
            .map(Flashcard::from_json_value)
            .collect::<Result<Vec<_>>>()?;

        debug!(path = %path.display(), cards = cards.len(), "deck read");
        Ok(Some(cards))
    }

    /// Names of all decks stored in the directory.
    ///
    /// Order is whatever the filesystem enumerates. A missing directory
    /// means no decks. Files whose stem is not a valid deck name are skipped.
    pub fn list_decks(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(stem) = file_name.strip_suffix(DECK_EXTENSION) {
                if name_problem(stem).is_none() {
                    names.push(stem.to_string());
                }
            }
        }

        debug!(dir = %self.dir.display(), decks = names.len(), "listed decks");
        Ok(names)
    }
}
