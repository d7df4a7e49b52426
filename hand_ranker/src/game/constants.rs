//! Card values and table limits shared across the classifiers.

use super::entities::Value;

/// A joker's face value. Jokers are wild under every rule set.
pub const JOKER: Value = 0;
/// An ace played low inside a straight.
pub const ACE_LOW: Value = 1;
pub const DEUCE: Value = 2;
pub const SIX: Value = 6;
pub const TEN: Value = 10;
pub const JACK: Value = 11;
pub const QUEEN: Value = 12;
pub const KING: Value = 13;
pub const ACE: Value = 14;

/// Natural values from strongest to weakest.
pub const VALUES_DESC: [Value; 13] = [ACE, KING, QUEEN, JACK, TEN, 9, 8, 7, SIX, 5, 4, 3, DEUCE];

/// Ranks compared positionally when two hands share a hand type.
pub const COMPARED_POSITIONS: usize = 5;

/// Largest pool any variant classifies.
pub const MAX_HAND_SIZE: usize = 7;
/// Smallest hand any variant classifies.
pub const MIN_HAND_SIZE: usize = 2;

/// Pai Gow hands are always split from exactly seven cards.
pub const PAI_GOW_CARDS: usize = 7;
pub const PAI_GOW_HI_CARDS: usize = 5;
pub const PAI_GOW_LO_CARDS: usize = 2;
