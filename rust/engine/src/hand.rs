use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{count_by_rank, is_flush, is_straight};
use crate::cards::{Card, Rank};
use crate::errors::EngineError;

/// Maximum cards in a Hold'em evaluation: 2 hole + 5 community.
pub const MAX_CARDS: usize = 7;

/// The ten poker hand classes, ordered weakest to strongest.
/// The discriminant is the category's score (High Card = 1 .. Royal Flush = 10).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

/// All categories from strongest to weakest, in display order.
pub const HAND_RANKINGS: [HandCategory; 10] = [
    HandCategory::RoyalFlush,
    HandCategory::StraightFlush,
    HandCategory::FourOfAKind,
    HandCategory::FullHouse,
    HandCategory::Flush,
    HandCategory::Straight,
    HandCategory::ThreeOfAKind,
    HandCategory::TwoPair,
    HandCategory::OnePair,
    HandCategory::HighCard,
];

impl HandCategory {
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference text shown next to each category.
pub fn description(category: HandCategory) -> &'static str {
    match category {
        HandCategory::RoyalFlush => {
            "The absolute best hand in poker! A-K-Q-J-10 all of the same suit."
        }
        HandCategory::StraightFlush => {
            "Five consecutive cards of the same suit. Extremely rare and powerful."
        }
        HandCategory::FourOfAKind => "Four cards of the same rank. Also called \"quads\".",
        HandCategory::FullHouse => "Three of a kind plus a pair. A very strong hand.",
        HandCategory::Flush => "Five cards of the same suit, not in sequence.",
        HandCategory::Straight => "Five consecutive cards of different suits.",
        HandCategory::ThreeOfAKind => {
            "Three cards of the same rank. Also called \"trips\" or \"a set\"."
        }
        HandCategory::TwoPair => "Two different pairs. A decent hand.",
        HandCategory::OnePair => "Two cards of the same rank.",
        HandCategory::HighCard => "No matching cards. The highest card determines strength.",
    }
}

/// Category plus a standalone comparable score.
///
/// `score` equals `category.score()` for complete hands and is `0` for the
/// placeholder returned when fewer than five cards are known.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub category: HandCategory,
    pub score: u8,
}

impl EvaluationResult {
    fn of(category: HandCategory) -> Self {
        Self {
            category,
            score: category.score(),
        }
    }

    pub fn is_incomplete(&self) -> bool {
        self.score == 0
    }
}

/// Classifies up to seven cards into a hand category.
///
/// Counts and flush/straight flags are taken over the whole input rather than
/// the best five cards, which is enough to name the category but not to break
/// ties. Two consequences are kept on purpose:
///
/// - fewer than five cards yields `High Card` with score `0`;
/// - a straight flush reads as a Royal Flush whenever any card in the set is
///   an Ace, even if the Ace is not part of the straight flush.
///
/// ```
/// use pokerschool_engine::cards::parse_cards;
/// use pokerschool_engine::hand::{evaluate, HandCategory};
///
/// let cards = parse_cards("A♠ K♠ Q♠ J♠ 10♠").unwrap();
/// let result = evaluate(&cards);
/// assert_eq!(result.category, HandCategory::RoyalFlush);
/// assert_eq!(result.score, 10);
/// ```
pub fn evaluate(cards: &[Card]) -> EvaluationResult {
    if cards.len() < 5 {
        return EvaluationResult {
            category: HandCategory::HighCard,
            score: 0,
        };
    }

    let counts = count_by_rank(cards).sorted_desc();
    let top = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);
    let flush = is_flush(cards);
    let straight = is_straight(cards);

    let category = if flush && straight {
        let high = cards.iter().map(|c| c.rank).max();
        if high == Some(Rank::Ace) {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        }
    } else if top == 4 {
        HandCategory::FourOfAKind
    } else if top == 3 && second >= 2 {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if top == 3 {
        HandCategory::ThreeOfAKind
    } else if top == 2 && second == 2 {
        HandCategory::TwoPair
    } else if top == 2 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    };

    let result = EvaluationResult::of(category);
    debug!(
        category = %result.category,
        score = result.score,
        cards = cards.len(),
        "hand evaluated"
    );
    result
}

/// [`evaluate`] with input validation: at most seven cards, no duplicates.
pub fn evaluate_checked(cards: &[Card]) -> Result<EvaluationResult, EngineError> {
    if cards.len() > MAX_CARDS {
        return Err(EngineError::TooManyCards {
            count: cards.len(),
            maximum: MAX_CARDS,
        });
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(EngineError::DuplicateCard(c));
        }
    }
    Ok(evaluate(cards))
}

/// Orders two results by score alone; equal scores are a split.
pub fn compare_results(a: &EvaluationResult, b: &EvaluationResult) -> Ordering {
    a.score.cmp(&b.score)
}
