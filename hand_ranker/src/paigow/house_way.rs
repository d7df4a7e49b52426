//! The casino "house way" for splitting seven Pai Gow cards.
//!
//! Every layout names positions in a solved seven-card hand: five cards go
//! to the high hand, two to the low hand.

use log::debug;

use crate::game::{
    Card, Hand, HandCard, HandKind, Value, Variant,
    classifiers::{Flush, Straight, StraightFlush},
    constants::{ACE, DEUCE, KING, PAI_GOW_CARDS, SIX, TEN},
    errors::{HandError, Result},
};

use super::best_sub_selection;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Layout {
    hi: [usize; 5],
    lo: [usize; 2],
}

impl Layout {
    const fn new(hi: [usize; 5], lo: [usize; 2]) -> Self {
        Self { hi, lo }
    }

    fn pick(self, cards: &[HandCard]) -> (Vec<Card>, Vec<Card>) {
        let take = |positions: &[usize]| -> Vec<Card> {
            positions.iter().map(|&i| cards[i].card).collect()
        };
        (take(&self.hi), take(&self.lo))
    }
}

/// Best five high, next two low.
const TOP_FIVE: Layout = Layout::new([0, 1, 2, 3, 4], [5, 6]);
/// Keep the top pair high, the second pair low.
const SPLIT_PAIRS: Layout = Layout::new([0, 1, 4, 5, 6], [2, 3]);
/// Keep four cards together high with the last card, 5th and 6th low.
const KEEP_FOUR: Layout = Layout::new([0, 1, 2, 3, 6], [4, 5]);
/// Keep three cards high, the next two low.
const SPLIT_TRIPS: Layout = Layout::new([0, 1, 2, 5, 6], [3, 4]);
/// Top card high, next two low.
const HIGH_CARD: Layout = Layout::new([0, 3, 4, 5, 6], [1, 2]);
/// Top two low, everything else high.
const LEAD_LOW: Layout = Layout::new([2, 3, 4, 5, 6], [0, 1]);

fn values(hand: &Hand) -> Vec<Value> {
    hand.cards().iter().map(|card| card.value).collect()
}

fn two_pair(v: &[Value]) -> Layout {
    let (high, low) = (v[0], v[2]);
    let together = if high <= SIX {
        v[4] == ACE
    } else if high <= TEN {
        low <= SIX && v[4] == ACE
    } else {
        false
    };
    if together { KEEP_FOUR } else { SPLIT_PAIRS }
}

fn three_of_a_kind(v: &[Value]) -> Layout {
    if v[0] == ACE { SPLIT_PAIRS } else { SPLIT_TRIPS }
}

fn full_house(v: &[Value]) -> Layout {
    if v[3] == DEUCE && v[5] == ACE && v[6] == KING {
        TOP_FIVE
    } else {
        SPLIT_TRIPS
    }
}

fn four_of_a_kind(v: &[Value]) -> Layout {
    let quads = v[0];
    let together = if quads <= SIX {
        true
    } else if quads <= TEN {
        v[4] == ACE
    } else if quads < ACE {
        v[4] == ACE && v[5] == KING
    } else {
        v[4] == KING
    };
    match (together, quads <= SIX) {
        (true, true) => TOP_FIVE,
        (true, false) => KEEP_FOUR,
        (false, _) => SPLIT_PAIRS,
    }
}

fn four_with_pair(v: &[Value]) -> Layout {
    if v[0] == ACE && v[4] != KING {
        SPLIT_PAIRS
    } else {
        KEEP_FOUR
    }
}

fn five_of_a_kind(v: &[Value]) -> Layout {
    if v[5] == KING && v[6] == KING {
        TOP_FIVE
    } else {
        LEAD_LOW
    }
}

/// Splits a hand solved under `paigowpokerfull` into high and low cards.
pub(crate) fn split(base: &Hand) -> Result<(Vec<Card>, Vec<Card>)> {
    if base.cards().len() != PAI_GOW_CARDS {
        return Err(HandError::WrongCardCount {
            expected: PAI_GOW_CARDS,
            got: base.cards().len(),
        });
    }
    let v = values(base);
    let layout = match base.kind() {
        HandKind::HighCard(_) => Some(HIGH_CARD),
        HandKind::OnePair(_) => Some(SPLIT_PAIRS),
        HandKind::TwoPair(_) => Some(two_pair(&v)),
        HandKind::ThreePair(_) | HandKind::TwoThreeOfAKind(_) => Some(LEAD_LOW),
        HandKind::ThreeOfAKind(_) => Some(three_of_a_kind(&v)),
        HandKind::ThreeOfAKindTwoPair(_) => Some(SPLIT_TRIPS),
        HandKind::FullHouse(_) => Some(full_house(&v)),
        HandKind::FourOfAKind(_) => Some(four_of_a_kind(&v)),
        HandKind::FourOfAKindPairPlus(_) => Some(four_with_pair(&v)),
        HandKind::FiveOfAKind(_) => Some(five_of_a_kind(&v)),
        _ => None,
    };
    if let Some(layout) = layout {
        debug!("house way: {} split {:?}", base.descr(), layout);
        return Ok(layout.pick(base.cards()));
    }
    split_around_run(base)
}

/// Straights and flushes: play the hand's pairs the usual way when it has
/// them, otherwise keep the strongest five-card run with the best low hand.
fn split_around_run(base: &Hand) -> Result<(Vec<Card>, Vec<Card>)> {
    let alt = Hand::solve_unchecked(base.pool(), Variant::PaiGowPokerAlt.into(), false);
    let v = values(&alt);
    let layout = match alt.kind() {
        HandKind::FourOfAKind(_) => Some(four_of_a_kind(&v)),
        HandKind::FullHouse(_) => Some(full_house(&v)),
        HandKind::ThreePair(_) => Some(LEAD_LOW),
        HandKind::TwoPair(_) => Some(two_pair(&v)),
        HandKind::ThreeOfAKind(_) if v[0] == ACE => Some(three_of_a_kind(&v)),
        _ => None,
    };
    if let Some(layout) = layout
        && alt.cards().len() == PAI_GOW_CARDS
    {
        debug!("house way: {} played as {}", base.descr(), alt.descr());
        return Ok(layout.pick(alt.cards()));
    }

    let runs: [HandKind; 3] = [StraightFlush.into(), Flush.into(), Straight.into()];
    match best_sub_selection(base.pool(), &runs)? {
        Some((hi, lo)) => {
            debug!("house way: {} kept as {}", base.descr(), hi.descr());
            Ok((hi.pool().to_vec(), lo.pool().to_vec()))
        }
        None => Ok(HIGH_CARD.pick(base.cards())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::JACK;

    fn split_codes(codes: &[&str]) -> (Vec<String>, Vec<String>) {
        let base = Hand::solve_codes(codes, Variant::PaiGowPokerFull, false).unwrap();
        let (hi, lo) = split(&base).unwrap();
        (
            hi.iter().map(ToString::to_string).collect(),
            lo.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn test_high_card_plays_second_and_third_low() {
        let (hi, lo) = split_codes(&["Ad", "Kc", "9h", "7d", "5s", "3c", "2h"]);
        assert_eq!(hi, ["Ad", "7d", "5s", "3c", "2h"]);
        assert_eq!(lo, ["Kc", "9h"]);
    }

    #[test]
    fn test_one_pair_stays_high() {
        let (hi, lo) = split_codes(&["8d", "8c", "Ah", "Qd", "9s", "5c", "2h"]);
        assert_eq!(hi, ["8d", "8c", "9s", "5c", "2h"]);
        assert_eq!(lo, ["Ah", "Qd"]);
    }

    #[test]
    fn test_small_two_pair_with_ace_stays_together() {
        let (hi, lo) = split_codes(&["6d", "6c", "4h", "4d", "As", "9c", "2h"]);
        assert_eq!(hi, ["6d", "6c", "4h", "4d", "2h"]);
        assert_eq!(lo, ["As", "9c"]);
    }

    #[test]
    fn test_big_two_pair_splits() {
        let (hi, lo) = split_codes(&["Kd", "Kc", "4h", "4d", "As", "9c", "2h"]);
        assert_eq!(hi, ["Kd", "Kc", "As", "9c", "2h"]);
        assert_eq!(lo, ["4h", "4d"]);
    }

    #[test]
    fn test_three_pair_plays_top_pair_low() {
        let (hi, lo) = split_codes(&["Kd", "Kc", "9h", "9d", "4s", "4c", "2h"]);
        assert_eq!(lo, ["Kd", "Kc"]);
        assert_eq!(hi.len(), 5);
    }

    #[test]
    fn test_trip_aces_split() {
        let (hi, lo) = split_codes(&["Ad", "Ac", "Ah", "Kd", "9s", "5c", "2h"]);
        assert_eq!(hi, ["Ad", "Ac", "9s", "5c", "2h"]);
        assert_eq!(lo, ["Ah", "Kd"]);
    }

    #[test]
    fn test_small_quads_stay_together() {
        let (hi, lo) = split_codes(&["5d", "5c", "5h", "5s", "Kd", "9c", "2h"]);
        assert_eq!(hi, ["5d", "5c", "5h", "5s", "Kd"]);
        assert_eq!(lo, ["9c", "2h"]);
    }

    #[test]
    fn test_straight_with_two_pair_splits_pairs() {
        let (hi, lo) = split_codes(&["9d", "8c", "7h", "6s", "5d", "9c", "5h"]);
        assert_eq!(hi, ["9d", "9c", "8c", "7h", "6s"]);
        assert_eq!(lo, ["5d", "5h"]);
    }

    #[test]
    fn test_flush_keeps_best_low_hand() {
        let (hi, lo) = split_codes(&["Ah", "Kh", "Qd", "9h", "6h", "3h", "2h"]);
        assert_eq!(lo, ["Ah", "Qd"]);
        assert_eq!(hi, ["Kh", "9h", "6h", "3h", "2h"]);
        assert!(hi.iter().all(|code| code.ends_with('h')));
    }

    #[test]
    fn test_split_needs_seven_cards() {
        let base = Hand::solve_codes(&["Ad", "Kc", "9h"], Variant::PaiGowPokerFull, false).unwrap();
        assert!(matches!(
            split(&base),
            Err(HandError::WrongCardCount { expected: 7, got: 3 })
        ));
    }

    #[test]
    fn test_layout_tables() {
        assert_eq!(four_of_a_kind(&[8, 8, 8, 8, ACE, 9, 2]), KEEP_FOUR);
        assert_eq!(four_of_a_kind(&[8, 8, 8, 8, KING, 9, 2]), SPLIT_PAIRS);
        assert_eq!(four_of_a_kind(&[JACK, JACK, JACK, JACK, ACE, KING, 2]), KEEP_FOUR);
        assert_eq!(four_of_a_kind(&[ACE, ACE, ACE, ACE, KING, 9, 2]), KEEP_FOUR);
        assert_eq!(four_of_a_kind(&[ACE, ACE, ACE, ACE, 9, 8, 2]), SPLIT_PAIRS);
        assert_eq!(full_house(&[5, 5, 5, DEUCE, DEUCE, ACE, KING]), TOP_FIVE);
        assert_eq!(full_house(&[5, 5, 5, 9, 9, ACE, KING]), SPLIT_TRIPS);
        assert_eq!(five_of_a_kind(&[ACE, ACE, ACE, ACE, ACE, KING, KING]), TOP_FIVE);
        assert_eq!(four_with_pair(&[ACE, ACE, ACE, ACE, 9, 9, 2]), SPLIT_PAIRS);
    }
}
