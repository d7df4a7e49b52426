//! Hand type classifiers.
//!
//! Every hand type is a unit struct implementing [`Classifier`]; rule sets
//! list them as [`HandKind`]s from strongest to weakest and the first one
//! that can be formed from a pool wins.

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    constants::{ACE, KING, VALUES_DESC},
    entities::{HandCard, Suit, Value, value_name},
    pool::{Made, Pool, Selection},
    straights::{Run, find_run, is_wheel},
};

#[enum_dispatch]
pub(crate) trait Classifier {
    /// Stable identifier used when rule sets are serialized.
    fn key(&self) -> &'static str;

    /// Human-readable name of the hand type.
    fn label(&self) -> &'static str;

    /// Forms the best hand of this type from `pool`, if there is one.
    fn classify(&self, pool: &Pool<'_>) -> Option<Made>;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StraightFlush;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RoyalFlush;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NaturalRoyalFlush;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WildRoyalFlush;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FiveOfAKind;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FourWilds;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FourOfAKindPairPlus;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FourOfAKind;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TwoThreeOfAKind;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ThreeOfAKindTwoPair;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FullHouse;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Flush;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Straight;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ThreeOfAKind;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ThreePair;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TwoPair;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OnePair;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HighCard;

/// A hand type a rule set can list.
#[enum_dispatch(Classifier)]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum HandKind {
    StraightFlush,
    RoyalFlush,
    NaturalRoyalFlush,
    WildRoyalFlush,
    FiveOfAKind,
    FourWilds,
    FourOfAKindPairPlus,
    FourOfAKind,
    TwoThreeOfAKind,
    ThreeOfAKindTwoPair,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    ThreePair,
    TwoPair,
    OnePair,
    HighCard,
}

impl HandKind {
    pub const ALL: [HandKind; 18] = [
        HandKind::StraightFlush(StraightFlush),
        HandKind::RoyalFlush(RoyalFlush),
        HandKind::NaturalRoyalFlush(NaturalRoyalFlush),
        HandKind::WildRoyalFlush(WildRoyalFlush),
        HandKind::FiveOfAKind(FiveOfAKind),
        HandKind::FourWilds(FourWilds),
        HandKind::FourOfAKindPairPlus(FourOfAKindPairPlus),
        HandKind::FourOfAKind(FourOfAKind),
        HandKind::TwoThreeOfAKind(TwoThreeOfAKind),
        HandKind::ThreeOfAKindTwoPair(ThreeOfAKindTwoPair),
        HandKind::FullHouse(FullHouse),
        HandKind::Flush(Flush),
        HandKind::Straight(Straight),
        HandKind::ThreeOfAKind(ThreeOfAKind),
        HandKind::ThreePair(ThreePair),
        HandKind::TwoPair(TwoPair),
        HandKind::OnePair(OnePair),
        HandKind::HighCard(HighCard),
    ];

    /// Display name, e.g. "Full House".
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<String> for HandKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == value)
            .ok_or_else(|| format!("unknown hand type {value:?}"))
    }
}

impl From<HandKind> for String {
    fn from(value: HandKind) -> Self {
        value.key().to_string()
    }
}

fn plural(value: Value) -> String {
    format!("{}'s", value_name(value))
}

/// Groups of same-valued cards, strongest values first.
fn of_a_kind(
    pool: &Pool<'_>,
    sizes: &[usize],
    describe: impl FnOnce(&[Value]) -> String,
) -> Option<Made> {
    let values = pool.find_groups(sizes)?;
    Some(pool.select_groups(&values, sizes).finish(describe(&values)))
}

fn run_values(run: &Run) -> Vec<Value> {
    run.iter().map(|(_, card)| card.value).collect()
}

fn is_royal(run: &Run) -> bool {
    run.len() >= 5 && run[0].1.value == ACE && run[1].1.value == KING
}

/// The strongest straight flush across all suits.
fn best_straight_flush(pool: &Pool<'_>, wilds: &[usize]) -> Option<(Suit, Run)> {
    Suit::ALL
        .into_iter()
        .filter_map(|suit| find_run(pool, pool.with_suit(suit), wilds).map(|run| (suit, run)))
        .max_by_key(|(_, run)| run_values(run))
}

/// Suited naturals plus wild cards bound to the highest values the suit
/// is missing, strongest first and capped at the hand size.
fn flush_cards(pool: &Pool<'_>, suit: Suit) -> Option<Run> {
    let mut run: Run = pool
        .with_suit(suit)
        .iter()
        .map(|&i| (i, HandCard::natural(pool.cards[i])))
        .collect();
    let mut wilds = pool.wilds.iter().copied();
    for value in VALUES_DESC {
        if run.iter().any(|(_, card)| card.value == value) {
            continue;
        }
        let Some(w) = wilds.next() else {
            break;
        };
        run.push((w, HandCard::bound(pool.cards[w], value)));
    }
    run.sort_by(|a, b| b.1.value.cmp(&a.1.value));
    run.truncate(pool.game.cards_in_hand());
    (run.len() >= pool.game.min_run()).then_some(run)
}

fn made_from_run(pool: &Pool<'_>, run: Run, descr: String) -> Made {
    let mut selection = Selection::new(pool);
    selection.extend(run);
    selection.finish(descr)
}

impl Classifier for StraightFlush {
    fn key(&self) -> &'static str {
        "StraightFlush"
    }

    fn label(&self) -> &'static str {
        "Straight Flush"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        let (suit, run) = best_straight_flush(pool, &pool.wilds)?;
        let cards: Vec<HandCard> = run.iter().map(|(_, card)| *card).collect();
        let descr = if is_royal(&run) {
            "Royal Flush".to_string()
        } else if is_wheel(&cards) {
            "Straight Flush, Wheel".to_string()
        } else {
            format!("Straight Flush, {}{suit} High", value_name(cards[0].value))
        };
        Some(made_from_run(pool, run, descr))
    }
}

impl Classifier for RoyalFlush {
    fn key(&self) -> &'static str {
        "RoyalFlush"
    }

    fn label(&self) -> &'static str {
        "Royal Flush"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        let (_, run) = best_straight_flush(pool, &pool.wilds)?;
        is_royal(&run).then(|| made_from_run(pool, run, "Royal Flush".to_string()))
    }
}

impl Classifier for NaturalRoyalFlush {
    fn key(&self) -> &'static str {
        "NaturalRoyalFlush"
    }

    fn label(&self) -> &'static str {
        "Natural Royal Flush"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        let (_, run) = best_straight_flush(pool, &[])?;
        is_royal(&run).then(|| made_from_run(pool, run, "Royal Flush".to_string()))
    }
}

impl Classifier for WildRoyalFlush {
    fn key(&self) -> &'static str {
        "WildRoyalFlush"
    }

    fn label(&self) -> &'static str {
        "Wild Royal Flush"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        let (_, run) = best_straight_flush(pool, &pool.wilds)?;
        let uses_wild = run.iter().take(5).any(|(_, card)| card.wild);
        (is_royal(&run) && uses_wild)
            .then(|| made_from_run(pool, run, "Wild Royal Flush".to_string()))
    }
}

impl Classifier for FiveOfAKind {
    fn key(&self) -> &'static str {
        "FiveOfAKind"
    }

    fn label(&self) -> &'static str {
        "Five of a Kind"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[5], |v| format!("Five of a Kind, {}", plural(v[0])))
    }
}

impl Classifier for FourWilds {
    fn key(&self) -> &'static str {
        "FourWilds"
    }

    fn label(&self) -> &'static str {
        "Four Wild Cards"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        if pool.wilds.len() < 4 {
            return None;
        }
        let mut selection = Selection::new(pool);
        for &w in &pool.wilds[..4] {
            selection.push(w, HandCard::bound(pool.cards[w], ACE));
        }
        Some(selection.finish("Four Wild Cards".to_string()))
    }
}

impl Classifier for FourOfAKindPairPlus {
    fn key(&self) -> &'static str {
        "FourOfAKindPairPlus"
    }

    fn label(&self) -> &'static str {
        "Four of a Kind with Pair or Better"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[4, 2], |v| {
            format!(
                "Four of a Kind with Pair or Better, {} over {}",
                plural(v[0]),
                plural(v[1])
            )
        })
    }
}

impl Classifier for FourOfAKind {
    fn key(&self) -> &'static str {
        "FourOfAKind"
    }

    fn label(&self) -> &'static str {
        "Four of a Kind"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[4], |v| format!("Four of a Kind, {}", plural(v[0])))
    }
}

impl Classifier for TwoThreeOfAKind {
    fn key(&self) -> &'static str {
        "TwoThreeOfAKind"
    }

    fn label(&self) -> &'static str {
        "Two Three Of a Kind"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[3, 3], |v| {
            format!("Two Three Of a Kind, {} & {}", plural(v[0]), plural(v[1]))
        })
    }
}

impl Classifier for ThreeOfAKindTwoPair {
    fn key(&self) -> &'static str {
        "ThreeOfAKindTwoPair"
    }

    fn label(&self) -> &'static str {
        "Three of a Kind with Two Pair"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[3, 2, 2], |v| {
            format!(
                "Three of a Kind with Two Pair, {} over {} & {}",
                plural(v[0]),
                plural(v[1]),
                plural(v[2])
            )
        })
    }
}

impl Classifier for FullHouse {
    fn key(&self) -> &'static str {
        "FullHouse"
    }

    fn label(&self) -> &'static str {
        "Full House"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[3, 2], |v| {
            format!("Full House, {} over {}", plural(v[0]), plural(v[1]))
        })
    }
}

impl Classifier for Flush {
    fn key(&self) -> &'static str {
        "Flush"
    }

    fn label(&self) -> &'static str {
        "Flush"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        let (suit, run) = Suit::ALL
            .into_iter()
            .filter_map(|suit| flush_cards(pool, suit).map(|run| (suit, run)))
            .max_by_key(|(_, run)| run_values(run))?;
        let descr = format!("Flush, {}{suit} High", value_name(run[0].1.value));
        Some(made_from_run(pool, run, descr))
    }
}

impl Classifier for Straight {
    fn key(&self) -> &'static str {
        "Straight"
    }

    fn label(&self) -> &'static str {
        "Straight"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        let run = find_run(pool, &pool.naturals, &pool.wilds)?;
        let cards: Vec<HandCard> = run.iter().map(|(_, card)| *card).collect();
        let descr = if is_wheel(&cards) {
            "Straight, Wheel".to_string()
        } else {
            format!("Straight, {} High", value_name(cards[0].value))
        };
        Some(made_from_run(pool, run, descr))
    }
}

impl Classifier for ThreeOfAKind {
    fn key(&self) -> &'static str {
        "ThreeOfAKind"
    }

    fn label(&self) -> &'static str {
        "Three of a Kind"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[3], |v| format!("Three of a Kind, {}", plural(v[0])))
    }
}

impl Classifier for ThreePair {
    fn key(&self) -> &'static str {
        "ThreePair"
    }

    fn label(&self) -> &'static str {
        "Three Pair"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[2, 2, 2], |v| {
            format!(
                "Three Pair, {} & {} & {}",
                plural(v[0]),
                plural(v[1]),
                plural(v[2])
            )
        })
    }
}

impl Classifier for TwoPair {
    fn key(&self) -> &'static str {
        "TwoPair"
    }

    fn label(&self) -> &'static str {
        "Two Pair"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[2, 2], |v| {
            format!("Two Pair, {} & {}", plural(v[0]), plural(v[1]))
        })
    }
}

impl Classifier for OnePair {
    fn key(&self) -> &'static str {
        "OnePair"
    }

    fn label(&self) -> &'static str {
        "Pair"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        of_a_kind(pool, &[2], |v| format!("Pair, {}", plural(v[0])))
    }
}

impl Classifier for HighCard {
    fn key(&self) -> &'static str {
        "HighCard"
    }

    fn label(&self) -> &'static str {
        "High Card"
    }

    fn classify(&self, pool: &Pool<'_>) -> Option<Made> {
        Some(Selection::new(pool).finish_full(|cards| match cards.first() {
            Some(top) => format!("{} High", value_name(top.value)),
            None => "High Card".to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{
        entities::Card,
        rules::{Game, Variant},
    };

    fn classify(kind: impl Into<HandKind>, codes: &[&str], variant: Variant) -> Option<Made> {
        let game = Game::from(variant);
        let cards = Card::parse_all(codes).unwrap();
        let pool = Pool::new(&cards, &game);
        let kind: HandKind = kind.into();
        kind.classify(&pool)
    }

    fn values(made: &Made) -> Vec<Value> {
        made.cards.iter().map(|c| c.value).collect()
    }

    // === Naming Tests ===

    #[test]
    fn test_keys_round_trip() {
        for kind in HandKind::ALL {
            let key = String::from(kind);
            assert_eq!(HandKind::try_from(key).unwrap(), kind);
        }
        assert!(HandKind::try_from("Quads".to_string()).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(HandKind::from(OnePair).name(), "Pair");
        assert_eq!(HandKind::from(FourWilds).to_string(), "Four Wild Cards");
        assert_eq!(HandKind::from(TwoThreeOfAKind).name(), "Two Three Of a Kind");
    }

    // === Group Tests ===

    #[test]
    fn test_pair_descr_and_kickers() {
        let made = classify(OnePair, &["3c", "3d", "Kh", "9s", "5c"], Variant::Standard).unwrap();
        assert_eq!(made.descr, "Pair, 3's");
        assert_eq!(values(&made), [3, 3, 13, 9, 5]);
    }

    #[test]
    fn test_pair_without_kickers() {
        let made = classify(OnePair, &["Jc", "Jd", "Kh", "9s", "5c"], Variant::JacksBetter).unwrap();
        assert_eq!(values(&made), [11, 11]);
    }

    #[test]
    fn test_two_pair_descr() {
        let made = classify(TwoPair, &["Tc", "Td", "4h", "4s", "Ac"], Variant::Standard).unwrap();
        assert_eq!(made.descr, "Two Pair, 10's & 4's");
        assert_eq!(values(&made), [10, 10, 4, 4, 14]);
    }

    #[test]
    fn test_full_house_descr() {
        let made = classify(FullHouse, &["Kc", "Kd", "Kh", "4s", "4c"], Variant::Standard).unwrap();
        assert_eq!(made.descr, "Full House, K's over 4's");
    }

    #[test]
    fn test_full_house_needs_distinct_values() {
        assert!(classify(FullHouse, &["Kc", "Kd", "Kh", "Ks", "4c"], Variant::Standard).is_none());
    }

    #[test]
    fn test_five_of_a_kind_with_joker() {
        let made =
            classify(FiveOfAKind, &["9c", "9d", "9h", "9s", "Ow"], Variant::Joker).unwrap();
        assert_eq!(made.descr, "Five of a Kind, 9's");
        assert_eq!(made.bindings.get(&4), Some(&9));
    }

    #[test]
    fn test_pai_gow_joker_only_joins_aces() {
        let codes = ["Kc", "Kd", "Ow", "9s", "7c", "4h", "2d"];
        assert!(classify(ThreeOfAKind, &codes, Variant::PaiGowPokerFull).is_none());

        let codes = ["Ac", "Ad", "Ow", "9s", "7c", "4h", "2d"];
        let made = classify(ThreeOfAKind, &codes, Variant::PaiGowPokerFull).unwrap();
        assert_eq!(made.descr, "Three of a Kind, A's");
    }

    #[test]
    fn test_three_of_a_kind_with_two_pair() {
        let codes = ["8c", "8d", "8h", "5s", "5c", "3h", "3d"];
        let made = classify(ThreeOfAKindTwoPair, &codes, Variant::PaiGowPokerFull).unwrap();
        assert_eq!(made.descr, "Three of a Kind with Two Pair, 8's over 5's & 3's");
    }

    #[test]
    fn test_four_wilds() {
        let codes = ["2c", "2d", "2h", "2s", "9c"];
        let made = classify(FourWilds, &codes, Variant::DeucesWild).unwrap();
        assert_eq!(made.descr, "Four Wild Cards");
        assert!(classify(FourWilds, &["2c", "2d", "2h", "9s", "9c"], Variant::DeucesWild).is_none());
    }

    // === Straight and Flush Tests ===

    #[test]
    fn test_straight_descr() {
        let made = classify(Straight, &["9c", "8d", "7h", "6s", "5c"], Variant::Standard).unwrap();
        assert_eq!(made.descr, "Straight, 9 High");
    }

    #[test]
    fn test_pai_gow_wheel_descr() {
        let codes = ["Ac", "5d", "4h", "3s", "2c", "Kd", "9h"];
        let made = classify(Straight, &codes, Variant::PaiGowPokerFull).unwrap();
        assert_eq!(made.descr, "Straight, Wheel");
        assert_eq!(made.cards[0].value, ACE);
    }

    #[test]
    fn test_flush_descr() {
        let made = classify(Flush, &["Ah", "9h", "7h", "4h", "2h"], Variant::Standard).unwrap();
        assert_eq!(made.descr, "Flush, Ah High");
    }

    #[test]
    fn test_flush_wild_takes_highest_missing() {
        let made = classify(Flush, &["Kh", "9h", "7h", "4h", "Ow"], Variant::Joker).unwrap();
        assert_eq!(values(&made), [14, 13, 9, 7, 4]);
        assert!(made.cards[0].wild);
    }

    #[test]
    fn test_flush_picks_strongest_suit() {
        let codes = ["Ks", "9s", "7s", "4s", "2s", "Ad", "9d"];
        let made = classify(Flush, &codes, Variant::Standard).unwrap();
        assert_eq!(made.descr, "Flush, Ks High");
    }

    #[test]
    fn test_straight_flush_descr() {
        let made =
            classify(StraightFlush, &["9c", "8c", "7c", "6c", "5c"], Variant::Standard).unwrap();
        assert_eq!(made.descr, "Straight Flush, 9c High");

        let royal =
            classify(StraightFlush, &["Ac", "Kc", "Qc", "Jc", "Tc"], Variant::Standard).unwrap();
        assert_eq!(royal.descr, "Royal Flush");
    }

    // === Royal Tests ===

    #[test]
    fn test_natural_and_wild_royals() {
        let natural = ["Ah", "Kh", "Qh", "Jh", "Th"];
        let wild = ["Ah", "Kh", "Qh", "Jh", "2c"];
        assert!(classify(NaturalRoyalFlush, &natural, Variant::DeucesWild).is_some());
        assert!(classify(WildRoyalFlush, &natural, Variant::DeucesWild).is_none());
        assert!(classify(NaturalRoyalFlush, &wild, Variant::DeucesWild).is_none());
        let made = classify(WildRoyalFlush, &wild, Variant::DeucesWild).unwrap();
        assert_eq!(made.descr, "Wild Royal Flush");
    }

    #[test]
    fn test_royal_requires_ace_high() {
        let codes = ["Kh", "Qh", "Jh", "Th", "9h"];
        assert!(classify(RoyalFlush, &codes, Variant::JacksBetter).is_none());
    }

    // === High Card Tests ===

    #[test]
    fn test_high_card_fills_hand_without_kickers_rule() {
        let made =
            classify(HighCard, &["Kc", "9d", "7h", "4s", "2c"], Variant::JacksBetter).unwrap();
        assert_eq!(made.descr, "K High");
        assert_eq!(made.cards.len(), 5);
    }
}
