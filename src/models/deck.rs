//! Deck is a named, ordered set of flashcards backed by one file
use super::Flashcard;
use crate::error::{FlashcardError, Result};
use crate::storage::DeckDirectory;
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Deck {
    pub name: String,
    pub flashcards: Vec<Flashcard>,
    /// Set by mutations, cleared by `save`
    dirty: bool,
}

impl Deck {
    /// Creates an empty deck. Nothing is written until `save` is called.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flashcards: Vec::new(),
            dirty: false,
        }
    }

    /// Loads a deck from its file.
    ///
    /// A deck without a file comes back empty and no file is created.
    pub fn load(name: &str, decks: &DeckDirectory) -> Result<Self> {
        let flashcards = decks.read_cards(name)?.unwrap_or_default();
        Ok(Self {
            name: name.to_string(),
            flashcards,
            dirty: false,
        })
    }

    /// Overwrites the deck file with the current flashcards
    pub fn save(&mut self, decks: &DeckDirectory) -> Result<()> {
        decks.write_cards(&self.name, &self.flashcards)?;
        self.dirty = false;
        Ok(())
    }

    pub fn add_flashcard(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.flashcards.push(Flashcard::new(question, answer));
        self.dirty = true;
        info!(deck = %self.name, cards = self.flashcards.len(), "flashcard added");
    }

    /// Removes and returns the flashcard at `index`.
    /// An out-of-range index leaves the deck untouched.
    pub fn delete_flashcard(&mut self, index: usize) -> Result<Flashcard> {
        if index >= self.flashcards.len() {
            return Err(FlashcardError::InvalidIndex {
                index,
                len: self.flashcards.len(),
            });
        }

        let removed = self.flashcards.remove(index);
        self.dirty = true;
        info!(deck = %self.name, index, "flashcard deleted");
        Ok(removed)
    }

    /// Walks through the cards in order: shows the question, waits for a
    /// line of input, then shows the answer.
    ///
    /// Returns how many answers were revealed. Running out of input ends the
    /// session early.
    pub fn study<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<usize> {
        if self.flashcards.is_empty() {
            writeln!(output, "No flashcards in this deck.")?;
            return Ok(0);
        }

        let mut revealed = 0;
        let mut line = Vec::new();
        for card in &self.flashcards {
            write!(output, "Q: {} (press Enter to see the answer)", card.question)?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            writeln!(output, "A: {}\n", card.answer)?;
            revealed += 1;
        }

        Ok(revealed)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }
}
