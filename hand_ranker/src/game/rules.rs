//! Rule sets ("games") that drive hand classification.
//!
//! A [`Game`] is plain, immutable configuration: how many cards make a hand,
//! which hand types exist and in what order of strength, which cards are
//! wild and how they may be used. Every supported variant is available via
//! [`Variant`]; custom rule sets can be decoded from JSON.

use log::warn;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{
    classifiers::{
        Classifier, FiveOfAKind, Flush, FourOfAKind, FourOfAKindPairPlus, FourWilds, FullHouse,
        HandKind, HighCard, NaturalRoyalFlush, OnePair, RoyalFlush, Straight, StraightFlush,
        ThreeOfAKind, ThreeOfAKindTwoPair, ThreePair, TwoPair, TwoThreeOfAKind, WildRoyalFlush,
    },
    constants::{ACE, DEUCE, JOKER, MAX_HAND_SIZE, MIN_HAND_SIZE},
    entities::{Card, Value},
    errors::{HandError, Result},
};

/// Supported rule variants.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Standard,
    JacksBetter,
    Joker,
    DeucesWild,
    ThreeCard,
    FourCard,
    FourCardBonus,
    PaiGowPokerFull,
    PaiGowPokerAlt,
    PaiGowPokerSf6,
    PaiGowPokerSf7,
    PaiGowPokerHi,
    PaiGowPokerLo,
}

impl Variant {
    pub const ALL: [Variant; 13] = [
        Self::Standard,
        Self::JacksBetter,
        Self::Joker,
        Self::DeucesWild,
        Self::ThreeCard,
        Self::FourCard,
        Self::FourCardBonus,
        Self::PaiGowPokerFull,
        Self::PaiGowPokerAlt,
        Self::PaiGowPokerSf6,
        Self::PaiGowPokerSf7,
        Self::PaiGowPokerHi,
        Self::PaiGowPokerLo,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::JacksBetter => "jacksbetter",
            Self::Joker => "joker",
            Self::DeucesWild => "deuceswild",
            Self::ThreeCard => "threecard",
            Self::FourCard => "fourcard",
            Self::FourCardBonus => "fourcardbonus",
            Self::PaiGowPokerFull => "paigowpokerfull",
            Self::PaiGowPokerAlt => "paigowpokeralt",
            Self::PaiGowPokerSf6 => "paigowpokersf6",
            Self::PaiGowPokerSf7 => "paigowpokersf7",
            Self::PaiGowPokerHi => "paigowpokerhi",
            Self::PaiGowPokerLo => "paigowpokerlo",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Variant {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HandError::InvalidRules(format!("unknown variant {s:?}")))
    }
}

/// How wild cards may substitute for missing cards.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WildMode {
    /// A wild card becomes whatever value a hand type needs.
    #[default]
    Any,
    /// The Pai Gow "bug": a wild card only counts as an ace, or to
    /// complete a straight, flush or straight flush.
    Bug,
}

impl WildMode {
    /// Whether a wild card may join a group of same-valued cards.
    #[must_use]
    pub const fn substitutes_for(self, value: Value) -> bool {
        match self {
            Self::Any => true,
            Self::Bug => value == ACE,
        }
    }
}

/// Game configuration: the rules a hand is classified under.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Game {
    /// Rule set name. Only `standard` rejects duplicate cards.
    pub(crate) descr: String,
    pub(crate) cards_in_hand: usize,
    /// Hand types from strongest to weakest.
    pub(crate) hand_values: Vec<HandKind>,
    /// A face value that is wild on top of jokers, e.g. deuces.
    #[serde(default)]
    pub(crate) wild_value: Option<Value>,
    #[serde(default)]
    pub(crate) wild_mode: WildMode,
    /// Checks A-2-3-4-5 first and plays it with the ace high.
    #[serde(default)]
    pub(crate) wheel: bool,
    /// Shortest run of cards that counts as a straight or flush.
    pub(crate) min_run: usize,
    /// Weakest hand that can still win when disqualification applies.
    #[serde(default)]
    pub(crate) lowest_qualified: Option<Vec<Card>>,
    /// Strip cards beyond the defining cards of a hand.
    #[serde(default)]
    pub(crate) no_kickers: bool,
}

impl Default for Game {
    fn default() -> Self {
        Variant::Standard.into()
    }
}

impl Game {
    /// Builds the named variant. Unknown names fall back to `standard`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        match name.parse::<Variant>() {
            Ok(variant) => variant.into(),
            Err(_) => {
                warn!("unknown variant {name:?}, falling back to standard");
                Self::default()
            }
        }
    }

    /// Decodes and validates a custom rule set.
    pub fn from_json(json: &str) -> Result<Self> {
        let game: Game = serde_json::from_str(json)?;
        game.validate()?;
        Ok(game)
    }

    /// Checks that a rule set can classify hands.
    pub fn validate(&self) -> Result<()> {
        if self.hand_values.is_empty() {
            return Err(HandError::InvalidRules("no hand types".to_string()));
        }
        if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&self.cards_in_hand) {
            return Err(HandError::InvalidRules(format!(
                "hand size {} outside {MIN_HAND_SIZE}..={MAX_HAND_SIZE}",
                self.cards_in_hand
            )));
        }
        if !(3..=MAX_HAND_SIZE).contains(&self.min_run) {
            return Err(HandError::InvalidRules(format!(
                "straight/flush length {} outside 3..={MAX_HAND_SIZE}",
                self.min_run
            )));
        }
        if let Some(value) = self.wild_value
            && !(value == JOKER || (DEUCE..=ACE).contains(&value))
        {
            return Err(HandError::InvalidRules(format!("wild value {value}")));
        }
        for (i, kind) in self.hand_values.iter().enumerate() {
            if self.hand_values[..i].contains(kind) {
                return Err(HandError::InvalidRules(format!("{} listed twice", kind.key())));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn descr(&self) -> &str {
        &self.descr
    }

    #[must_use]
    pub const fn cards_in_hand(&self) -> usize {
        self.cards_in_hand
    }

    #[must_use]
    pub fn hand_values(&self) -> &[HandKind] {
        &self.hand_values
    }

    #[must_use]
    pub const fn wild_value(&self) -> Option<Value> {
        self.wild_value
    }

    #[must_use]
    pub const fn wild_mode(&self) -> WildMode {
        self.wild_mode
    }

    #[must_use]
    pub const fn wheel(&self) -> bool {
        self.wheel
    }

    #[must_use]
    pub const fn min_run(&self) -> usize {
        self.min_run
    }

    #[must_use]
    pub fn lowest_qualified(&self) -> Option<&[Card]> {
        self.lowest_qualified.as_deref()
    }

    #[must_use]
    pub const fn no_kickers(&self) -> bool {
        self.no_kickers
    }

    /// Jokers are always wild; the variant may name one more wild value.
    #[must_use]
    pub fn is_wild(&self, card: &Card) -> bool {
        card.is_joker() || self.wild_value == Some(card.face())
    }

    /// Integer strength of a hand type under these rules: the strongest
    /// type scores `hand_values.len()`, the weakest scores 1.
    #[must_use]
    pub fn rank_of(&self, kind: &HandKind) -> Option<usize> {
        self.hand_values
            .iter()
            .position(|k| k == kind)
            .map(|position| self.hand_values.len() - position)
    }
}

impl From<&str> for Game {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&Game> for Game {
    fn from(value: &Game) -> Self {
        value.clone()
    }
}

fn qualifier(codes: &[&str]) -> Option<Vec<Card>> {
    // The tables below only hold valid codes.
    Card::parse_all(codes).ok()
}

impl From<Variant> for Game {
    fn from(value: Variant) -> Self {
        let standard: Vec<HandKind> = vec![
            StraightFlush.into(),
            FourOfAKind.into(),
            FullHouse.into(),
            Flush.into(),
            Straight.into(),
            ThreeOfAKind.into(),
            TwoPair.into(),
            OnePair.into(),
            HighCard.into(),
        ];
        let four_card: Vec<HandKind> = vec![
            FourOfAKind.into(),
            StraightFlush.into(),
            ThreeOfAKind.into(),
            Flush.into(),
            Straight.into(),
            TwoPair.into(),
            OnePair.into(),
            HighCard.into(),
        ];
        let base = Self {
            descr: value.name().to_string(),
            cards_in_hand: 5,
            hand_values: standard.clone(),
            wild_value: None,
            wild_mode: WildMode::Any,
            wheel: false,
            min_run: 5,
            lowest_qualified: None,
            no_kickers: false,
        };
        let pai_gow = Self {
            cards_in_hand: 7,
            wild_value: Some(JOKER),
            wild_mode: WildMode::Bug,
            wheel: true,
            ..base.clone()
        };

        match value {
            Variant::Standard => base,
            Variant::JacksBetter => Self {
                hand_values: [vec![RoyalFlush.into()], standard].concat(),
                lowest_qualified: qualifier(&["Jc", "Jd", "4h", "3s", "2c"]),
                no_kickers: true,
                ..base
            },
            Variant::Joker => Self {
                hand_values: vec![
                    NaturalRoyalFlush.into(),
                    FiveOfAKind.into(),
                    WildRoyalFlush.into(),
                    StraightFlush.into(),
                    FourOfAKind.into(),
                    FullHouse.into(),
                    Flush.into(),
                    Straight.into(),
                    ThreeOfAKind.into(),
                    TwoPair.into(),
                    OnePair.into(),
                    HighCard.into(),
                ],
                wild_value: Some(JOKER),
                lowest_qualified: qualifier(&["Kc", "Kd", "4h", "3s", "2c"]),
                no_kickers: true,
                ..base
            },
            Variant::DeucesWild => Self {
                hand_values: vec![
                    NaturalRoyalFlush.into(),
                    FourWilds.into(),
                    WildRoyalFlush.into(),
                    FiveOfAKind.into(),
                    StraightFlush.into(),
                    FourOfAKind.into(),
                    FullHouse.into(),
                    Flush.into(),
                    Straight.into(),
                    ThreeOfAKind.into(),
                    TwoPair.into(),
                    OnePair.into(),
                    HighCard.into(),
                ],
                wild_value: Some(DEUCE),
                lowest_qualified: qualifier(&["3c", "3d", "3h", "5s", "4c"]),
                no_kickers: true,
                ..base
            },
            Variant::ThreeCard => Self {
                cards_in_hand: 3,
                hand_values: vec![
                    StraightFlush.into(),
                    ThreeOfAKind.into(),
                    Straight.into(),
                    Flush.into(),
                    OnePair.into(),
                    HighCard.into(),
                ],
                min_run: 3,
                lowest_qualified: qualifier(&["Qh", "3s", "2c"]),
                ..base
            },
            Variant::FourCard => Self {
                cards_in_hand: 4,
                hand_values: four_card,
                min_run: 4,
                ..base
            },
            Variant::FourCardBonus => Self {
                cards_in_hand: 4,
                hand_values: four_card,
                min_run: 4,
                lowest_qualified: qualifier(&["Ac", "Ad", "3h", "2s"]),
                no_kickers: true,
                ..base
            },
            Variant::PaiGowPokerFull => Self {
                hand_values: vec![
                    FiveOfAKind.into(),
                    FourOfAKindPairPlus.into(),
                    StraightFlush.into(),
                    Flush.into(),
                    Straight.into(),
                    FourOfAKind.into(),
                    TwoThreeOfAKind.into(),
                    ThreeOfAKindTwoPair.into(),
                    FullHouse.into(),
                    ThreeOfAKind.into(),
                    ThreePair.into(),
                    TwoPair.into(),
                    OnePair.into(),
                    HighCard.into(),
                ],
                ..pai_gow
            },
            Variant::PaiGowPokerAlt => Self {
                hand_values: vec![
                    FourOfAKind.into(),
                    FullHouse.into(),
                    ThreeOfAKind.into(),
                    ThreePair.into(),
                    TwoPair.into(),
                    OnePair.into(),
                    HighCard.into(),
                ],
                ..pai_gow
            },
            Variant::PaiGowPokerSf6 => Self {
                hand_values: vec![StraightFlush.into(), Flush.into(), Straight.into()],
                min_run: 6,
                ..pai_gow
            },
            Variant::PaiGowPokerSf7 => Self {
                hand_values: vec![StraightFlush.into(), Flush.into(), Straight.into()],
                min_run: 7,
                ..pai_gow
            },
            Variant::PaiGowPokerHi => Self {
                cards_in_hand: 5,
                hand_values: vec![
                    FiveOfAKind.into(),
                    StraightFlush.into(),
                    FourOfAKind.into(),
                    FullHouse.into(),
                    Flush.into(),
                    Straight.into(),
                    ThreeOfAKind.into(),
                    TwoPair.into(),
                    OnePair.into(),
                    HighCard.into(),
                ],
                ..pai_gow
            },
            Variant::PaiGowPokerLo => Self {
                cards_in_hand: 2,
                hand_values: vec![OnePair.into(), HighCard.into()],
                ..pai_gow
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
            assert_eq!(Game::from(variant).descr(), variant.name());
        }
    }

    #[test]
    fn test_unknown_variant_falls_back_to_standard() {
        let game = Game::new("no-such-game");
        assert_eq!(game, Game::from(Variant::Standard));
        assert_eq!(game.descr(), "standard");
    }

    #[test]
    fn test_variant_parse_is_case_insensitive() {
        assert_eq!("DeucesWild".parse::<Variant>().unwrap(), Variant::DeucesWild);
        assert!("omaha".parse::<Variant>().is_err());
    }

    #[test]
    fn test_every_variant_is_valid() {
        for variant in Variant::ALL {
            let game = Game::from(variant);
            assert!(game.validate().is_ok(), "{variant} failed validation");
        }
    }

    #[test]
    fn test_hand_sizes() {
        assert_eq!(Game::from(Variant::Standard).cards_in_hand(), 5);
        assert_eq!(Game::from(Variant::ThreeCard).cards_in_hand(), 3);
        assert_eq!(Game::from(Variant::FourCard).cards_in_hand(), 4);
        assert_eq!(Game::from(Variant::PaiGowPokerFull).cards_in_hand(), 7);
        assert_eq!(Game::from(Variant::PaiGowPokerLo).cards_in_hand(), 2);
    }

    #[test]
    fn test_qualifiers_are_present() {
        assert_eq!(Game::from(Variant::JacksBetter).lowest_qualified().unwrap().len(), 5);
        assert_eq!(Game::from(Variant::ThreeCard).lowest_qualified().unwrap().len(), 3);
        assert!(Game::from(Variant::Standard).lowest_qualified().is_none());
    }

    #[test]
    fn test_wild_cards() {
        let deuces = Game::from(Variant::DeucesWild);
        assert!(deuces.is_wild(&"2h".parse().unwrap()));
        assert!(!deuces.is_wild(&"3h".parse().unwrap()));

        let standard = Game::default();
        assert!(!standard.is_wild(&"2h".parse().unwrap()));
        assert!(standard.is_wild(&"Ow".parse().unwrap()));
    }

    #[test]
    fn test_wild_mode_bug_only_joins_aces() {
        assert!(WildMode::Bug.substitutes_for(ACE));
        assert!(!WildMode::Bug.substitutes_for(13));
        assert!(WildMode::Any.substitutes_for(7));
    }

    #[test]
    fn test_rank_of_counts_down_from_strongest() {
        let game = Game::default();
        assert_eq!(game.rank_of(&StraightFlush.into()), Some(9));
        assert_eq!(game.rank_of(&HighCard.into()), Some(1));
        assert_eq!(game.rank_of(&FiveOfAKind.into()), None);
    }

    #[test]
    fn test_game_json_round_trip() {
        let game = Game::from(Variant::JacksBetter);
        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"RoyalFlush\""));
        assert!(json.contains("\"Jc\""));
        assert_eq!(Game::from_json(&json).unwrap(), game);
    }

    #[test]
    fn test_custom_rules_from_json() {
        let json = r#"{
            "descr": "acesup",
            "cards_in_hand": 5,
            "hand_values": ["FourOfAKind", "FullHouse", "OnePair", "HighCard"],
            "min_run": 5
        }"#;
        let game = Game::from_json(json).unwrap();
        assert_eq!(game.hand_values().len(), 4);
        assert_eq!(game.wild_mode(), WildMode::Any);
        assert!(!game.no_kickers());
    }

    #[test]
    fn test_custom_rules_rejected() {
        let empty = r#"{"descr": "x", "cards_in_hand": 5, "hand_values": [], "min_run": 5}"#;
        assert!(matches!(Game::from_json(empty), Err(HandError::InvalidRules(_))));

        let huge = r#"{"descr": "x", "cards_in_hand": 9, "hand_values": ["HighCard"], "min_run": 5}"#;
        assert!(matches!(Game::from_json(huge), Err(HandError::InvalidRules(_))));

        let twice =
            r#"{"descr": "x", "cards_in_hand": 5, "hand_values": ["HighCard", "HighCard"], "min_run": 5}"#;
        assert!(matches!(Game::from_json(twice), Err(HandError::InvalidRules(_))));

        let unknown =
            r#"{"descr": "x", "cards_in_hand": 5, "hand_values": ["Quads"], "min_run": 5}"#;
        assert!(matches!(Game::from_json(unknown), Err(HandError::Decode(_))));
    }
}
