pub mod card;
pub mod deck;
pub mod error;
pub mod images;
pub mod store;

pub use card::*;
pub use deck::Deck;
pub use error::DeckError;
pub use images::{image_path, CardImages};
pub use store::{DeckStore, Intent, Snapshot, MAIN_DECK_ID};
