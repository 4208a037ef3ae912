pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use app::App;
pub use config::Config;
pub use error::{FlashcardError, Result};
pub use models::{Deck, Flashcard};
