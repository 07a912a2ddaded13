//! Rank/suit frequency counting and the flush and straight detectors.
//!
//! Counters are plain arrays indexed by [`Rank::ordinal`] and [`Suit::index`],
//! so results never depend on iteration order.

use crate::cards::{Card, Rank, Suit, RANKS, SUITS};

/// Ordinals of the wheel (2, 3, 4, 5, A).
const WHEEL: [u8; 5] = [0, 1, 2, 3, 12];

/// Occurrences of each rank in a card set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankCounts([usize; 13]);

impl RankCounts {
    pub fn get(&self, rank: Rank) -> usize {
        self.0[rank.ordinal() as usize]
    }

    /// The multiset of non-zero counts, largest first.
    pub fn sorted_desc(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.0.iter().copied().filter(|&n| n > 0).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }
}

/// Occurrences of each suit in a card set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuitCounts([usize; 4]);

impl SuitCounts {
    pub fn get(&self, suit: Suit) -> usize {
        self.0[suit.index()]
    }
}

pub fn count_by_rank(cards: &[Card]) -> RankCounts {
    let mut counts = [0usize; 13];
    for c in cards {
        counts[c.rank.ordinal() as usize] += 1;
    }
    RankCounts(counts)
}

pub fn count_by_suit(cards: &[Card]) -> SuitCounts {
    let mut counts = [0usize; 4];
    for c in cards {
        counts[c.suit.index()] += 1;
    }
    SuitCounts(counts)
}

/// True when any suit appears five or more times.
///
/// Structural only: it does not check that the suited cards are the ones
/// forming a straight.
pub fn is_flush(cards: &[Card]) -> bool {
    let counts = count_by_suit(cards);
    SUITS.iter().any(|&s| counts.get(s) >= 5)
}

/// True when five distinct ranks run consecutively, or the wheel (A-2-3-4-5) is present.
pub fn is_straight(cards: &[Card]) -> bool {
    let counts = count_by_rank(cards);
    // RANKS is in ordinal order, so this is sorted and distinct
    let ordinals: Vec<u8> = RANKS
        .iter()
        .filter(|&&r| counts.get(r) > 0)
        .map(|r| r.ordinal())
        .collect();

    let run = ordinals
        .windows(5)
        .any(|w| w.windows(2).all(|pair| pair[1] == pair[0] + 1));
    if run {
        return true;
    }

    // Ace plays low in the wheel
    WHEEL.iter().all(|o| ordinals.binary_search(o).is_ok())
}
