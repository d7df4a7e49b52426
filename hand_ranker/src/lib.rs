//! # Hand Ranker
//!
//! Poker hand classification for thirteen rule variants, from standard
//! five-card poker to video poker with jokers or deuces wild, three- and
//! four-card games, and Pai Gow Poker.
//!
//! A pool of two to seven cards is classified into the strongest hand type
//! the variant lists. Each hand type is its own classifier, dispatched with
//! `enum_dispatch`; the variant's priority list decides which one wins.
//!
//! ## Core Modules
//!
//! - [`game`]: cards, rule sets, hand type classifiers and [`Hand`]
//! - [`paigow`]: the Pai Gow house way and banker settlement
//!
//! ## Example
//!
//! ```
//! use hand_ranker::{Hand, Variant};
//!
//! let hand = Hand::solve_codes(&["Kh", "Tc", "5d", "As", "3c", "3s", "2h"], Variant::Standard, false)
//!     .unwrap();
//! assert_eq!(hand.name(), "Pair");
//! assert_eq!(hand.descr(), "Pair, 3's");
//! ```

/// Cards, rule sets and hand classification.
pub mod game;
pub use game::{
    Card, Game, Hand, HandCard, HandError, HandKind, Result, Suit, Value, Variant, WildBindings,
    WildMode, constants, entities, value_name,
};

/// Pai Gow Poker splitting and settlement.
pub mod paigow;
pub use paigow::{PaiGowOutcome, PaiGowPokerHelper, best_sub_selection};
