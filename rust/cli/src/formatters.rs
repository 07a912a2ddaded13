//! Card, board, and number formatters for terminal display.
//!
//! Cards render with Unicode suit symbols (`A♠`, `10♥`) or, in ASCII mode,
//! with suit letters and `T` for ten (`As`, `Th`). The mode comes from the
//! `unicode` config value, which defaults to [`supports_unicode`].
//!
//! ## Example
//!
//! ```rust
//! use pokerschool_engine::cards::{Card, Rank, Suit};
//! use pokerschool_cli::formatters::{format_board, format_card, CardStyle};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert_eq!(format_card(&ace_spades, CardStyle::Unicode), "A♠");
//! assert_eq!(format_card(&ace_spades, CardStyle::Ascii), "As");
//! assert_eq!(format_board(&[ace_spades], CardStyle::Ascii), "[As]");
//! ```

use pokerschool_engine::cards::{Card, Rank};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Unicode,
    Ascii,
}

impl CardStyle {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode {
            CardStyle::Unicode
        } else {
            CardStyle::Ascii
        }
    }
}

pub fn format_card(card: &Card, style: CardStyle) -> String {
    match style {
        CardStyle::Unicode => card.to_string(),
        CardStyle::Ascii => {
            let rank = match card.rank {
                Rank::Ten => "T",
                r => r.label(),
            };
            format!("{}{}", rank, card.suit.letter())
        }
    }
}

/// Format a board (list of cards) in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card], style: CardStyle) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(c, style)).collect();
    format!("[{}]", formatted.join(" "))
}

/// Cards separated by spaces, no brackets.
pub fn format_cards(cards: &[Card], style: CardStyle) -> String {
    cards
        .iter()
        .map(|c| format_card(c, style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A probability as a percentage with one decimal, e.g. `0.1666` -> `16.7%`.
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}
