pub mod deck;
pub mod flashcard;

pub use deck::Deck;
pub use flashcard::Flashcard;
