//! Hand classification.
//!
//! Cards go in, a [`Hand`] comes out: the strongest hand type the rule set
//! lists that the cards can form, with wild cards bound to whatever values
//! the hand type needs.

pub mod classifiers;
pub mod constants;
pub mod entities;
pub mod errors;
pub mod hand;
pub mod rules;

mod pool;
mod straights;

pub use classifiers::HandKind;
pub use entities::{Card, HandCard, Suit, Value, value_name};
pub use errors::{HandError, Result};
pub use hand::Hand;
pub use pool::WildBindings;
pub use rules::{Game, Variant, WildMode};
