use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{
    constants::{ACE, ACE_LOW, JACK, JOKER, KING, QUEEN, TEN},
    errors::HandError,
};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
    // Jokers carry this suit unless a code names one of the four
    // real suits for them.
    Wild,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Spade, Suit::Diamond, Suit::Heart];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Club => 'c',
            Self::Spade => 's',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Wild => 'w',
        }
    }

    /// Index into per-suit tables. Only meaningful for the four real suits.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Club => 0,
            Self::Spade => 1,
            Self::Diamond => 2,
            Self::Heart => 3,
            Self::Wild => 4,
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Self::Club),
            's' => Some(Self::Spade),
            'd' => Some(Self::Diamond),
            'h' => Some(Self::Heart),
            'w' => Some(Self::Wild),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Placeholder for card values.
pub type Value = u8;

/// Name of a value as it appears in hand descriptions ("10", "J", "A").
#[must_use]
pub fn value_name(value: Value) -> String {
    match value {
        ACE_LOW | ACE => "A".to_string(),
        KING => "K".to_string(),
        QUEEN => "Q".to_string(),
        JACK => "J".to_string(),
        JOKER => "Joker".to_string(),
        v => v.to_string(),
    }
}

fn value_letter(value: Value) -> char {
    match value {
        ACE_LOW | ACE => 'A',
        KING => 'K',
        QUEEN => 'Q',
        JACK => 'J',
        TEN => 'T',
        JOKER => 'O',
        v => char::from(b'0' + v),
    }
}

fn value_from_letter(c: char) -> Option<Value> {
    match c.to_ascii_uppercase() {
        'A' | '1' => Some(ACE),
        'K' => Some(KING),
        'Q' => Some(QUEEN),
        'J' => Some(JACK),
        'T' => Some(TEN),
        'O' => Some(JOKER),
        c @ '2'..='9' => Some(c as Value - b'0'),
        _ => None,
    }
}

/// A card is a tuple of a uInt8 value (ace=14u8, deuce=2u8) and a suit.
/// A joker is depicted as 0u8; 1u8 is accepted as an ace.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(pub Value, pub Suit);

impl Card {
    /// The card's natural value with aces normalized to 14.
    #[must_use]
    pub const fn face(&self) -> Value {
        if self.0 == ACE_LOW { ACE } else { self.0 }
    }

    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.0 == JOKER
    }

    /// Parses every code in `codes`, failing on the first bad one.
    pub fn parse_all<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Card>, HandError> {
        codes.iter().map(|code| code.as_ref().parse()).collect()
    }
}

/// Parses a two-letter code: a value (`2`-`9`, `T`, `J`, `Q`, `K`, `A`,
/// `1` for an ace, `O` for a joker) and a suit (`c`, `s`, `d`, `h`).
/// Jokers may also use `w`; no other suit letter is accepted.
impl FromStr for Card {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(value), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(HandError::InvalidCard(s.to_string()));
        };
        let value = value_from_letter(value).ok_or_else(|| HandError::InvalidCard(s.to_string()))?;
        let suit = Suit::from_letter(suit).ok_or_else(|| HandError::InvalidCard(s.to_string()))?;
        // Only jokers may go without a real suit.
        if suit == Suit::Wild && value != JOKER {
            return Err(HandError::InvalidCard(s.to_string()));
        }
        Ok(Self(value, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = HandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(value: Card) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", value_letter(self.0), self.1)
    }
}

/// A card as it is played inside a solved hand. `value` is the value the
/// card counts as: a wild card's bound value, or an ace's low/high value
/// inside a straight.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct HandCard {
    pub card: Card,
    pub value: Value,
    pub wild: bool,
}

impl HandCard {
    #[must_use]
    pub const fn natural(card: Card) -> Self {
        Self {
            card,
            value: card.face(),
            wild: false,
        }
    }

    #[must_use]
    pub const fn bound(card: Card, value: Value) -> Self {
        Self {
            card,
            value,
            wild: true,
        }
    }

    /// A natural card counted at a different value (aces inside straights).
    #[must_use]
    pub const fn counted_as(card: Card, value: Value) -> Self {
        Self {
            card,
            value,
            wild: false,
        }
    }
}

impl fmt::Display for HandCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.card, f)
    }
}
