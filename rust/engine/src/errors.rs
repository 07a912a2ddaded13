use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Too many cards: {count}, maximum: {maximum}")]
    TooManyCards { count: usize, maximum: usize },
    #[error("Deck exhausted")]
    DeckExhausted,
}
