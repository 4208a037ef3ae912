pub mod deck_files;

pub use deck_files::{DeckDirectory, validate_deck_name};
