use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, RANKS, SUITS};
use crate::errors::EngineError;

/// Builds the 52-card deck in fixed order: suits outer (♠ ♥ ♦ ♣), ranks inner (2..A).
pub fn create_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &suit in &SUITS {
        for &rank in &RANKS {
            v.push(Card { rank, suit });
        }
    }
    v
}

/// Returns a shuffled copy of `deck`; the input is left untouched.
///
/// Fisher–Yates from the last index down to 1, swapping each position with a
/// uniformly chosen index in `0..=i`.
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Same as [`shuffle`] with a ChaCha20 stream seeded from `seed`.
pub fn shuffle_with_seed(deck: &[Card], seed: u64) -> Vec<Card> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    shuffle(deck, &mut rng)
}

/// A seeded dealing shoe over a full deck.
///
/// # Examples
///
/// ```
/// use pokerschool_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.deal_n(5).unwrap(), b.deal_n(5).unwrap());
/// assert_eq!(a.remaining(), 47);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: create_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = shuffle(&create_deck(), &mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        (0..n)
            .map(|_| self.deal_card().ok_or(EngineError::DeckExhausted))
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
