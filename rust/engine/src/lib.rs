//! # pokerschool-engine: Hand Evaluation Core
//!
//! Card and deck model, hand-category evaluation, a street-based equity
//! heuristic and pot odds for an educational Texas Hold'em toolkit.
//! Every operation is a pure function over caller-owned cards; randomness
//! only enters through shuffling.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Deck construction, Fisher–Yates shuffle, seeded dealing
//! - [`analysis`] - Rank/suit counting, flush and straight detection
//! - [`hand`] - Hand category evaluation and the ranking reference table
//! - [`equity`] - Street-based equity estimate and pot odds
//! - [`table`] - Practice-hand dealing and showdown by score
//! - [`logger`] - JSONL evaluation records
//! - [`errors`] - Error types for checked operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerschool_engine::cards::parse_cards;
//! use pokerschool_engine::equity::estimate_equity;
//! use pokerschool_engine::hand::{evaluate, HandCategory};
//!
//! let hole = parse_cards("A♥ K♥").unwrap();
//! let board = parse_cards("Q♥ J♥ 10♥ 2♣ 3♦").unwrap();
//! let all: Vec<_> = hole.iter().chain(&board).copied().collect();
//!
//! assert_eq!(evaluate(&all).category, HandCategory::RoyalFlush);
//! assert_eq!(estimate_equity(&hole, &board), 0.9);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use pokerschool_engine::deck::{create_deck, shuffle_with_seed};
//!
//! let deck = create_deck();
//! assert_eq!(shuffle_with_seed(&deck, 42), shuffle_with_seed(&deck, 42));
//! ```

pub mod analysis;
pub mod cards;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod table;
