//! Street-based equity heuristic and pot odds.
//!
//! The equity figure is a linear remap of the category score, not a
//! probability computed from outs or enumeration.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::evaluate;

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards only
    Preflop,
    /// Three community cards
    Flop,
    /// Four community cards
    Turn,
    /// Five community cards
    River,
}

impl Street {
    /// Street implied by the total number of known cards (hole + community).
    /// Counts other than 2, 5 and 6 fall through to the river bucket.
    pub fn from_card_count(total: usize) -> Street {
        match total {
            2 => Street::Preflop,
            5 => Street::Flop,
            6 => Street::Turn,
            _ => Street::River,
        }
    }

    pub fn community_cards(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }

    // (scale, offset) applied to score / 10
    fn weights(self) -> (f64, f64) {
        match self {
            Street::Preflop => (0.5, 0.25),
            Street::Flop => (0.6, 0.2),
            Street::Turn => (0.7, 0.15),
            Street::River => (0.8, 0.1),
        }
    }
}

pub const STREETS: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

/// Approximate win probability for `hole` given the `community` cards seen so far.
///
/// ```
/// use pokerschool_engine::cards::parse_cards;
/// use pokerschool_engine::equity::estimate_equity;
///
/// let hole = parse_cards("A♠ K♠").unwrap();
/// assert_eq!(estimate_equity(&hole, &[]), 0.25);
/// ```
pub fn estimate_equity(hole: &[Card], community: &[Card]) -> f64 {
    let all: Vec<Card> = hole.iter().chain(community).copied().collect();
    let score = evaluate(&all).score;
    let (scale, offset) = Street::from_card_count(all.len()).weights();
    f64::from(score) / 10.0 * scale + offset
}

/// Share of the final pot the caller puts in: `bet / (pot + bet)`.
///
/// Returns `0.0` when both inputs are zero instead of dividing by zero.
pub fn pot_odds(pot_size: f64, bet_to_call: f64) -> f64 {
    let total = pot_size + bet_to_call;
    if total == 0.0 {
        return 0.0;
    }
    bet_to_call / total
}

/// Odds written as `call:pot`, e.g. `20:100`.
pub fn pot_odds_ratio(pot_size: f64, bet_to_call: f64) -> String {
    format!("{}:{}", bet_to_call, pot_size)
}
