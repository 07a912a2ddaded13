use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::equity::{estimate_equity, Street};
use crate::errors::EngineError;
use crate::hand::{compare_results, evaluate, EvaluationResult};

/// Cards of one practice hand, laid out the way the practice game deals them:
/// two hole cards to the player, two to the opponent, then five board cards
/// (flop, turn, river) with no burns.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PracticeHand {
    /// Seed the deck was shuffled with
    pub seed: u64,
    /// Player's hole cards
    pub player: [Card; 2],
    /// Opponent's hole cards
    pub opponent: [Card; 2],
    /// Full five-card board; see [`PracticeHand::board_at`] for what is visible
    pub board: [Card; 5],
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
    Split,
}

/// Outcome of comparing both players' seven cards by category score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Showdown {
    pub player: EvaluationResult,
    pub opponent: EvaluationResult,
    pub winner: Winner,
}

/// Deals practice hands from a seeded deck.
///
/// # Examples
///
/// ```
/// use pokerschool_engine::equity::Street;
/// use pokerschool_engine::table::Table;
///
/// let mut table = Table::new(Some(12345));
/// let hand = table.deal().unwrap();
/// assert_eq!(hand.board_at(Street::Flop).len(), 3);
/// assert_eq!(table.deck_remaining(), 52 - 9);
/// ```
#[derive(Debug)]
pub struct Table {
    seed: u64,
    deck: Deck,
}

impl Table {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            deck: Deck::new_with_seed(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffles a fresh deck and deals one practice hand from it.
    pub fn deal(&mut self) -> Result<PracticeHand, EngineError> {
        self.deck.shuffle();
        let mut next = || self.deck.deal_card().ok_or(EngineError::DeckExhausted);
        let player = [next()?, next()?];
        let opponent = [next()?, next()?];
        let board = [next()?, next()?, next()?, next()?, next()?];
        debug!(seed = self.seed, "practice hand dealt");
        Ok(PracticeHand {
            seed: self.seed,
            player,
            opponent,
            board,
        })
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

impl PracticeHand {
    /// Community cards visible on `street`.
    pub fn board_at(&self, street: Street) -> &[Card] {
        &self.board[..street.community_cards()]
    }

    pub fn player_cards_at(&self, street: Street) -> Vec<Card> {
        self.player
            .iter()
            .chain(self.board_at(street))
            .copied()
            .collect()
    }

    pub fn player_result(&self, street: Street) -> EvaluationResult {
        evaluate(&self.player_cards_at(street))
    }

    pub fn player_equity(&self, street: Street) -> f64 {
        estimate_equity(&self.player, self.board_at(street))
    }

    pub fn showdown(&self) -> Showdown {
        let player = evaluate(&self.player_cards_at(Street::River));
        let opponent_cards: Vec<Card> = self.opponent.iter().chain(&self.board).copied().collect();
        let opponent = evaluate(&opponent_cards);
        let winner = match compare_results(&player, &opponent) {
            Ordering::Greater => Winner::Player,
            Ordering::Less => Winner::Opponent,
            Ordering::Equal => Winner::Split,
        };
        Showdown {
            player,
            opponent,
            winner,
        }
    }
}
