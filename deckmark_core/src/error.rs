use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("duplicate deck id: {0}")]
    DuplicateDeck(String),
    #[error("unknown deck: {0}")]
    UnknownDeck(String),
    #[error("unknown card {card_id} in deck {deck_id}")]
    UnknownCard { deck_id: String, card_id: String },
    #[error("invalid card id: {0}")]
    InvalidCardId(String),
}
