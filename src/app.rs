//! Interactive text shell.
//! Handles the main menu, deck management and study sessions over any line-based input.

use crate::config::Config;
use crate::error::{FlashcardError, Result};
use crate::models::Deck;
use crate::storage::DeckDirectory;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Shell states. The loaded deck is owned by the deck menu and dropped on the way back.
#[derive(Debug)]
enum Screen {
    MainMenu,
    DeckMenu(Deck),
}

/// Main application state
pub struct App<R, W> {
    input: R,
    output: W,
    decks: DeckDirectory,
}

/// Parses a typed flashcard index
fn parse_index(text: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| FlashcardError::InvalidInput(format!("'{}' is not an index", text.trim())))
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self {
            input,
            output,
            decks: DeckDirectory::from_config(config),
        }
    }

    /// Runs the menu loop until "exit" is chosen or input runs out
    pub fn run(&mut self) -> Result<()> {
        let mut screen = Screen::MainMenu;
        loop {
            let next = match screen {
                Screen::MainMenu => self.main_menu()?,
                Screen::DeckMenu(deck) => self.deck_menu(deck)?,
            };
            match next {
                Some(next) => screen = next,
                None => break,
            }
        }
        Ok(())
    }

    /// Writes `text` and reads one line without its line ending.
    /// Returns `None` at end of input. Invalid UTF-8 is decoded lossily.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD instead of ending the session
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// One round of the main menu. `None` means the shell should stop.
    fn main_menu(&mut self) -> Result<Option<Screen>> {
        self.say("\n--- Flashcard App ---")?;
        self.say("1. Create a new deck")?;
        self.say("2. Load a deck")?;
        self.say("3. List decks")?;
        self.say("4. Exit")?;
        let Some(choice) = self.prompt("Choose an option: ")? else {
            return Ok(None);
        };

        match choice.trim() {
            "1" => self.create_deck(),
            "2" => self.load_deck(),
            "3" => {
                self.list_decks()?;
                Ok(Some(Screen::MainMenu))
            }
            "4" => Ok(None),
            _ => {
                self.say("Invalid choice.")?;
                Ok(Some(Screen::MainMenu))
            }
        }
    }

    fn create_deck(&mut self) -> Result<Option<Screen>> {
        let Some(name) = self.prompt("Enter deck name: ")? else {
            return Ok(None);
        };
        let name = name.trim();

        match self.decks.exists(name) {
            Ok(true) => {
                self.say(&format!("Deck '{name}' already exists!"))?;
                return Ok(Some(Screen::MainMenu));
            }
            Ok(false) => {}
            Err(e) => {
                self.say(&format!("Cannot create deck: {e}"))?;
                return Ok(Some(Screen::MainMenu));
            }
        }

        let mut deck = Deck::new(name);
        match deck.save(&self.decks) {
            Ok(()) => {
                info!(deck = name, "deck created");
                self.say(&format!("Deck '{name}' created!"))?;
            }
            Err(e) => self.say(&format!("Cannot create deck: {e}"))?,
        }
        Ok(Some(Screen::MainMenu))
    }

    /// Deck names sorted for display
    fn sorted_deck_names(&mut self) -> Result<Option<Vec<String>>> {
        match self.decks.list_decks() {
            Ok(mut names) => {
                names.sort();
                Ok(Some(names))
            }
            Err(e) => {
                warn!(error = %e, "could not list decks");
                self.say(&format!("Cannot list decks: {e}"))?;
                Ok(None)
            }
        }
    }

    fn list_decks(&mut self) -> Result<()> {
        if let Some(names) = self.sorted_deck_names()? {
            let listing = if names.is_empty() {
                "None".to_string()
            } else {
                names.join(", ")
            };
            self.say(&format!("Decks available: {listing}"))?;
        }
        Ok(())
    }

    fn load_deck(&mut self) -> Result<Option<Screen>> {
        let Some(names) = self.sorted_deck_names()? else {
            return Ok(Some(Screen::MainMenu));
        };
        if names.is_empty() {
            self.say("No decks found!")?;
            return Ok(Some(Screen::MainMenu));
        }
        self.say(&format!("Available decks: {}", names.join(", ")))?;

        let Some(name) = self.prompt("Enter deck to load: ")? else {
            return Ok(None);
        };
        let name = name.trim();
        if !names.iter().any(|n| n == name) {
            self.say("Deck not found!")?;
            return Ok(Some(Screen::MainMenu));
        }

        match Deck::load(name, &self.decks) {
            Ok(deck) => Ok(Some(Screen::DeckMenu(deck))),
            Err(e) => {
                warn!(deck = name, error = %e, "could not load deck");
                self.say(&format!("Cannot load deck '{name}': {e}"))?;
                Ok(Some(Screen::MainMenu))
            }
        }
    }

    /// One round of the deck menu. `None` means the shell should stop.
    fn deck_menu(&mut self, mut deck: Deck) -> Result<Option<Screen>> {
        self.say(&format!("\n--- Deck: {} ---", deck.name))?;
        self.say("1. Study flashcards")?;
        self.say("2. Add flashcard")?;
        self.say("3. Delete flashcard")?;
        self.say("4. Back to main menu")?;
        let Some(choice) = self.prompt("Choose an option: ")? else {
            return Ok(None);
        };

        match choice.trim() {
            "1" => {
                deck.study(&mut self.input, &mut self.output)?;
            }
            "2" => {
                if !self.add_flashcard(&mut deck)? {
                    return Ok(None);
                }
            }
            "3" => {
                if !self.delete_flashcard(&mut deck)? {
                    return Ok(None);
                }
            }
            "4" => {
                if deck.is_dirty() {
                    self.say(&format!("Unsaved changes to '{}' were discarded.", deck.name))?;
                }
                return Ok(Some(Screen::MainMenu));
            }
            _ => self.say("Invalid choice.")?,
        }
        Ok(Some(Screen::DeckMenu(deck)))
    }

    /// Saves the deck, reporting `confirmation` on success
    fn save_deck(&mut self, deck: &mut Deck, confirmation: &str) -> Result<()> {
        match deck.save(&self.decks) {
            Ok(()) => self.say(confirmation),
            Err(e) => {
                warn!(deck = %deck.name, error = %e, "could not save deck");
                self.say(&format!("Cannot save deck '{}': {e}", deck.name))
            }
        }
    }

    /// Returns `false` when input ran out
    fn add_flashcard(&mut self, deck: &mut Deck) -> Result<bool> {
        let Some(question) = self.prompt("Question: ")? else {
            return Ok(false);
        };
        let Some(answer) = self.prompt("Answer: ")? else {
            return Ok(false);
        };

        deck.add_flashcard(question, answer);
        self.save_deck(deck, "Flashcard added!")?;
        Ok(true)
    }

    /// Returns `false` when input ran out
    fn delete_flashcard(&mut self, deck: &mut Deck) -> Result<bool> {
        if deck.is_empty() {
            self.say("No flashcards to delete.")?;
            return Ok(true);
        }
        for (i, card) in deck.flashcards.iter().enumerate() {
            writeln!(self.output, "{i}: {}", card.question)?;
        }

        let Some(text) = self.prompt("Enter index to delete: ")? else {
            return Ok(false);
        };

        match parse_index(&text).and_then(|index| deck.delete_flashcard(index)) {
            Ok(_) => self.save_deck(deck, "Flashcard deleted!")?,
            Err(e) => {
                warn!(deck = %deck.name, error = %e, "delete rejected");
                self.say("Invalid index!")?;
            }
        }
        Ok(true)
    }
}
