//! Pai Gow Poker: splitting seven cards into a five-card high hand and a
//! two-card low hand, and settling a player against the banker.

mod house_way;

use log::debug;
use std::{cmp::Ordering, fmt};

use crate::game::{
    Card, Game, Hand, HandKind, Variant,
    constants::{PAI_GOW_CARDS, PAI_GOW_HI_CARDS, PAI_GOW_LO_CARDS},
    errors::{HandError, Result},
};

/// Result of a player's hand against the banker's.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PaiGowOutcome {
    Banker = -1,
    Push = 0,
    Player = 1,
}

impl From<PaiGowOutcome> for i8 {
    fn from(value: PaiGowOutcome) -> Self {
        value as i8
    }
}

impl fmt::Display for PaiGowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Banker => "banker",
            Self::Push => "push",
            Self::Player => "player",
        };
        write!(f, "{repr}")
    }
}

fn check_count(got: usize, expected: usize) -> Result<()> {
    if got == expected {
        Ok(())
    } else {
        Err(HandError::WrongCardCount { expected, got })
    }
}

/// Finds the best five-card high hand of one of the `candidates` kinds
/// that seven cards can make, together with the two cards left over.
///
/// Candidates are ranked by kind, then by the low hand, then by the high
/// hand. Returns `None` when no split makes a candidate kind.
pub fn best_sub_selection(
    cards: &[Card],
    candidates: &[HandKind],
) -> Result<Option<(Hand, Hand)>> {
    check_count(cards.len(), PAI_GOW_CARDS)?;
    let hi_game = Game::from(Variant::PaiGowPokerHi);
    let lo_game = Game::from(Variant::PaiGowPokerLo);

    let mut best: Option<(Hand, Hand)> = None;
    for i in 0..cards.len() {
        for j in i + 1..cards.len() {
            let lo_cards = [cards[i], cards[j]];
            let hi_cards: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, card)| *card)
                .collect();
            let hi = Hand::solve_unchecked(&hi_cards, hi_game.clone(), false);
            if !candidates.contains(&hi.kind()) {
                continue;
            }
            let lo = Hand::solve_unchecked(&lo_cards, lo_game.clone(), false);
            let better = match &best {
                None => true,
                Some((best_hi, best_lo)) => hi
                    .rank()
                    .cmp(&best_hi.rank())
                    .then_with(|| lo.compare(best_lo))
                    .then_with(|| hi.compare(best_hi))
                    .is_gt(),
            };
            if better {
                best = Some((hi, lo));
            }
        }
    }
    Ok(best)
}

/// A seven-card Pai Gow hand and its high/low split.
#[derive(Clone, Debug)]
pub struct PaiGowPokerHelper {
    base: Hand,
    hi: Hand,
    lo: Hand,
}

impl PaiGowPokerHelper {
    /// Classifies seven cards and splits them the house way.
    pub fn solve(cards: &[Card]) -> Result<Self> {
        check_count(cards.len(), PAI_GOW_CARDS)?;
        let base = Hand::solve_unchecked(cards, Variant::PaiGowPokerFull.into(), false);
        Self::from_hand(base)
    }

    /// Parses seven card codes and splits them the house way.
    pub fn solve_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        Self::solve(&Card::parse_all(codes)?)
    }

    /// Splits an already classified hand the house way. Hands solved under
    /// another rule set are classified again under `paigowpokerfull`.
    pub fn from_hand(base: Hand) -> Result<Self> {
        check_count(base.pool().len(), PAI_GOW_CARDS)?;
        let base = if base.game().descr() == Variant::PaiGowPokerFull.name() {
            base
        } else {
            Hand::solve_unchecked(base.pool(), Variant::PaiGowPokerFull.into(), false)
        };
        let (hi, lo) = house_way::split(&base)?;
        let hi = Hand::solve_unchecked(&hi, Variant::PaiGowPokerHi.into(), false);
        let lo = Hand::solve_unchecked(&lo, Variant::PaiGowPokerLo.into(), false);
        debug!("pai gow: {} / {}", hi.descr(), lo.descr());
        Ok(Self { base, hi, lo })
    }

    /// Uses a split made elsewhere; the house way is not applied.
    pub fn set_hands(hi: &[Card], lo: &[Card]) -> Result<Self> {
        check_count(hi.len(), PAI_GOW_HI_CARDS)?;
        check_count(lo.len(), PAI_GOW_LO_CARDS)?;
        let hi = Hand::solve_unchecked(hi, Variant::PaiGowPokerHi.into(), false);
        let lo = Hand::solve_unchecked(lo, Variant::PaiGowPokerLo.into(), false);
        Self::from_hands(hi, lo)
    }

    /// Uses hands that were already classified.
    pub fn from_hands(hi: Hand, lo: Hand) -> Result<Self> {
        let cards = [hi.pool(), lo.pool()].concat();
        check_count(cards.len(), PAI_GOW_CARDS)?;
        let base = Hand::solve_unchecked(&cards, Variant::PaiGowPokerFull.into(), false);
        Ok(Self { base, hi, lo })
    }

    /// The seven-card hand under `paigowpokerfull`.
    #[must_use]
    pub const fn base(&self) -> &Hand {
        &self.base
    }

    #[must_use]
    pub const fn hi(&self) -> &Hand {
        &self.hi
    }

    #[must_use]
    pub const fn lo(&self) -> &Hand {
        &self.lo
    }

    /// A split fouls when the low hand, read as a high hand, beats the
    /// high hand.
    #[must_use]
    pub fn qualifies_valid(&self) -> bool {
        let lo_as_hi = Hand::solve_unchecked(self.lo.pool(), Variant::PaiGowPokerHi.into(), false);
        lo_as_hi.compare(&self.hi) != Ordering::Greater
    }

    /// Settles a player against the banker. The banker wins ties.
    #[must_use]
    pub fn winners(player: &Self, banker: &Self) -> PaiGowOutcome {
        let outcome = match (player.qualifies_valid(), banker.qualifies_valid()) {
            (false, false) => PaiGowOutcome::Push,
            (false, true) => PaiGowOutcome::Banker,
            (true, false) => PaiGowOutcome::Player,
            (true, true) => {
                let hi = player.hi.compare(&banker.hi).is_gt();
                let lo = player.lo.compare(&banker.lo).is_gt();
                match (hi, lo) {
                    (true, true) => PaiGowOutcome::Player,
                    (false, false) => PaiGowOutcome::Banker,
                    _ => PaiGowOutcome::Push,
                }
            }
        };
        debug!("pai gow: {player} vs {banker}: {outcome}");
        outcome
    }
}

impl fmt::Display for PaiGowPokerHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.hi, self.lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::classifiers::{Flush, Straight, StraightFlush};

    fn helper(codes: &[&str]) -> PaiGowPokerHelper {
        PaiGowPokerHelper::solve_codes(codes).unwrap()
    }

    fn set(hi: &[&str], lo: &[&str]) -> PaiGowPokerHelper {
        let hi = Card::parse_all(hi).unwrap();
        let lo = Card::parse_all(lo).unwrap();
        PaiGowPokerHelper::set_hands(&hi, &lo).unwrap()
    }

    #[test]
    fn test_outcome_as_integer() {
        assert_eq!(i8::from(PaiGowOutcome::Banker), -1);
        assert_eq!(i8::from(PaiGowOutcome::Push), 0);
        assert_eq!(i8::from(PaiGowOutcome::Player), 1);
    }

    #[test]
    fn test_solve_splits_into_five_and_two() {
        let hand = helper(&["Ad", "Kc", "9h", "7d", "5s", "3c", "2h"]);
        assert_eq!(hand.hi().cards().len(), 5);
        assert_eq!(hand.lo().cards().len(), 2);
        assert_eq!(hand.hi().game().descr(), "paigowpokerhi");
        assert_eq!(hand.lo().game().descr(), "paigowpokerlo");
        assert_eq!(hand.lo().descr(), "K High");
        assert!(hand.qualifies_valid());
    }

    #[test]
    fn test_small_quads_go_high() {
        let hand = helper(&["4d", "4c", "4h", "4s", "Kd", "9c", "2h"]);
        assert_eq!(hand.hi().name(), "Four of a Kind");
        assert_eq!(hand.lo().to_string(), "9c, 2h");
    }

    #[test]
    fn test_solve_needs_seven_cards() {
        let err = PaiGowPokerHelper::solve_codes(&["Ad", "Kc", "9h"]).unwrap_err();
        assert!(matches!(err, HandError::WrongCardCount { expected: 7, got: 3 }));
    }

    #[test]
    fn test_set_hands_checks_counts() {
        let hi = Card::parse_all(&["Ad", "Kc", "9h", "7d"]).unwrap();
        let lo = Card::parse_all(&["5s", "3c", "2h"]).unwrap();
        assert!(matches!(
            PaiGowPokerHelper::set_hands(&hi, &lo),
            Err(HandError::WrongCardCount { expected: 5, got: 4 })
        ));
    }

    #[test]
    fn test_foul_detected() {
        let foul = set(&["Kd", "Qc", "9h", "7d", "5s"], &["As", "Ac"]);
        assert!(!foul.qualifies_valid());

        let fine = set(&["As", "Ac", "9h", "7d", "5s"], &["Kd", "Qc"]);
        assert!(fine.qualifies_valid());
    }

    #[test]
    fn test_player_must_win_both() {
        let banker = set(&["Kd", "Kc", "9h", "7d", "5s"], &["Qd", "Jc"]);
        let both = set(&["Ad", "Ac", "9s", "7c", "5h"], &["Kh", "Jd"]);
        let one = set(&["Ad", "Ac", "9s", "7c", "5h"], &["Th", "8d"]);
        let none = set(&["Qh", "Qs", "9s", "7c", "5h"], &["Th", "8d"]);
        assert_eq!(PaiGowPokerHelper::winners(&both, &banker), PaiGowOutcome::Player);
        assert_eq!(PaiGowPokerHelper::winners(&one, &banker), PaiGowOutcome::Push);
        assert_eq!(PaiGowPokerHelper::winners(&none, &banker), PaiGowOutcome::Banker);
    }

    #[test]
    fn test_copies_go_to_banker() {
        let banker = set(&["Kd", "Kc", "9h", "7d", "5s"], &["Qd", "Jc"]);
        let player = set(&["Kh", "Ks", "9s", "7c", "5h"], &["Qh", "Js"]);
        assert_eq!(PaiGowPokerHelper::winners(&player, &banker), PaiGowOutcome::Banker);
    }

    #[test]
    fn test_fouls_settle() {
        let foul = set(&["Kd", "Qc", "9h", "7d", "5s"], &["As", "Ac"]);
        let banker_foul = set(&["Kh", "Qs", "9s", "7c", "5h"], &["Ad", "Ah"]);
        let fine = set(&["Ts", "Tc", "9s", "7c", "5h"], &["3h", "2d"]);
        assert_eq!(PaiGowPokerHelper::winners(&foul, &fine), PaiGowOutcome::Banker);
        assert_eq!(PaiGowPokerHelper::winners(&fine, &banker_foul), PaiGowOutcome::Player);
        assert_eq!(PaiGowPokerHelper::winners(&foul, &banker_foul), PaiGowOutcome::Push);
    }

    #[test]
    fn test_from_hand_resolves_other_games() {
        let hand =
            Hand::solve_codes(&["Ad", "Kc", "9h", "7d", "5s", "3c", "2h"], "standard", false)
                .unwrap();
        let split = PaiGowPokerHelper::from_hand(hand).unwrap();
        assert_eq!(split.base().game().descr(), "paigowpokerfull");
        assert_eq!(split.base().cards().len(), 7);
    }

    #[test]
    fn test_best_sub_selection_prefers_best_low() {
        let cards = Card::parse_all(&["9d", "8c", "7h", "6s", "5d", "Kc", "Qh"]).unwrap();
        let runs: [HandKind; 3] = [StraightFlush.into(), Flush.into(), Straight.into()];
        let (hi, lo) = best_sub_selection(&cards, &runs).unwrap().unwrap();
        assert_eq!(hi.name(), "Straight");
        assert_eq!(lo.to_string(), "Kc, Qh");
    }

    #[test]
    fn test_best_sub_selection_none() {
        let cards = Card::parse_all(&["9d", "8c", "7h", "Ks", "5d", "3c", "2h"]).unwrap();
        let runs: [HandKind; 1] = [Straight.into()];
        assert!(best_sub_selection(&cards, &runs).unwrap().is_none());
    }
}
