//! Solved hands: classification, comparison and winner selection.

use log::{debug, trace, warn};
use std::{cmp::Ordering, collections::BTreeSet, fmt};

use super::{
    classifiers::{Classifier, HandKind, HighCard},
    constants::COMPARED_POSITIONS,
    entities::{Card, HandCard, Value},
    errors::{HandError, Result},
    pool::{Pool, WildBindings},
    rules::{Game, Variant},
};

/// The best hand a pool of cards makes under one rule set.
#[derive(Clone, Debug)]
pub struct Hand {
    /// Every card given to the solver, strongest first.
    pool: Vec<Card>,
    /// Cards that make up the hand, in comparison order.
    cards: Vec<HandCard>,
    bindings: WildBindings,
    kind: HandKind,
    rank: usize,
    descr: String,
    possible: bool,
    always_qualifies: bool,
    game: Game,
}

impl Hand {
    /// Classifies `cards` under `game`.
    ///
    /// With `can_disqualify`, the hand must also beat the rule set's lowest
    /// qualifying hand to win in [`Hand::winners`].
    pub fn solve(cards: &[Card], game: impl Into<Game>, can_disqualify: bool) -> Result<Self> {
        let game = game.into();
        if game.descr() == Variant::Standard.name() {
            check_duplicates(cards)?;
        }
        Ok(Self::solve_unchecked(cards, game, can_disqualify))
    }

    /// Parses card codes and classifies them.
    pub fn solve_codes<S: AsRef<str>>(
        codes: &[S],
        game: impl Into<Game>,
        can_disqualify: bool,
    ) -> Result<Self> {
        let cards = Card::parse_all(codes)?;
        Self::solve(&cards, game, can_disqualify)
    }

    pub(crate) fn solve_unchecked(cards: &[Card], game: Game, can_disqualify: bool) -> Self {
        let pool = Pool::new(cards, &game);
        let count = game.hand_values().len();

        let mut solved = None;
        for (position, kind) in game.hand_values().iter().enumerate() {
            trace!("trying {} for {} cards", kind.name(), pool.len());
            if let Some(made) = kind.classify(&pool) {
                debug!("{}: {} ({})", game.descr(), made.descr, kind.name());
                solved = Some((made, *kind, count - position));
                break;
            }
        }

        let sorted = pool.cards.clone();
        match solved {
            Some((made, kind, rank)) => Self {
                pool: sorted,
                cards: made.cards,
                bindings: made.bindings,
                kind,
                rank,
                descr: made.descr,
                possible: true,
                always_qualifies: !can_disqualify,
                game,
            },
            None => {
                let kind = game.hand_values().last().copied().unwrap_or(HighCard.into());
                debug!("{}: no hand type fits, weakest is {}", game.descr(), kind.name());
                Self {
                    pool: sorted,
                    cards: Vec::new(),
                    bindings: WildBindings::new(),
                    kind,
                    rank: 0,
                    descr: String::new(),
                    possible: false,
                    always_qualifies: !can_disqualify,
                    game,
                }
            }
        }
    }

    /// Display name of the hand type, e.g. "Two Pair".
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Detailed description, e.g. "Two Pair, K's & 9's".
    #[must_use]
    pub fn descr(&self) -> &str {
        &self.descr
    }

    /// Strength of the hand type: higher beats lower. A hand whose pool
    /// fits none of the listed types ranks 0.
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    #[must_use]
    pub const fn kind(&self) -> HandKind {
        self.kind
    }

    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    #[must_use]
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// Values the wild cards were played as, keyed by index into [`Hand::pool`].
    #[must_use]
    pub const fn bindings(&self) -> &WildBindings {
        &self.bindings
    }

    /// Whether the hand type could actually be formed. Only rule sets that
    /// don't end in high card can fail.
    #[must_use]
    pub const fn is_possible(&self) -> bool {
        self.possible
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Effective values of the hand's cards, in comparison order.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.cards.iter().map(|card| card.value).collect()
    }

    /// Hand cards as codes, e.g. `["As", "Ks"]`.
    #[must_use]
    pub fn to_codes(&self) -> Vec<String> {
        self.cards.iter().map(ToString::to_string).collect()
    }

    /// Orders hands by type, then by card values position by position.
    /// Positions where either hand has no card are skipped.
    #[must_use]
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| {
            self.cards
                .iter()
                .zip(&other.cards)
                .take(COMPARED_POSITIONS)
                .map(|(a, b)| a.value.cmp(&b.value))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    #[must_use]
    pub fn lose_to(&self, other: &Hand) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Whether the hand is at least the rule set's lowest qualifying hand.
    #[must_use]
    pub fn qualifies_high(&self) -> bool {
        if self.always_qualifies {
            return true;
        }
        let Some(qualifier) = self.game.lowest_qualified() else {
            return true;
        };
        match Hand::solve(qualifier, &self.game, false) {
            Ok(lowest) => self.compare(&lowest) != Ordering::Less,
            Err(err) => {
                warn!("{}: unusable qualifying hand: {err}", self.game.descr());
                true
            }
        }
    }

    /// Indices of the winning hands. Impossible hands and hands that don't
    /// qualify never win; ties return every tied hand.
    #[must_use]
    pub fn winner_indices(hands: &[Hand]) -> Vec<usize> {
        let qualified: Vec<usize> = (0..hands.len())
            .filter(|&i| hands[i].possible && hands[i].qualifies_high())
            .collect();
        let Some(best) = qualified.iter().map(|&i| hands[i].rank).max() else {
            return Vec::new();
        };
        let contenders: Vec<usize> = qualified
            .into_iter()
            .filter(|&i| hands[i].rank == best)
            .collect();
        contenders
            .iter()
            .copied()
            .filter(|&i| contenders.iter().all(|&j| !hands[i].lose_to(&hands[j])))
            .collect()
    }

    /// The winning hands, see [`Hand::winner_indices`].
    #[must_use]
    pub fn winners(hands: &[Hand]) -> Vec<&Hand> {
        Self::winner_indices(hands)
            .into_iter()
            .map(|i| &hands[i])
            .collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes = self.to_codes();
        write!(f, "{}", codes.join(", "))
    }
}

fn check_duplicates(cards: &[Card]) -> Result<()> {
    let mut seen = BTreeSet::new();
    let duplicates: BTreeSet<String> = cards
        .iter()
        .filter(|card| !seen.insert(**card))
        .map(ToString::to_string)
        .collect();
    if duplicates.is_empty() {
        Ok(())
    } else {
        let list: Vec<String> = duplicates.into_iter().collect();
        Err(HandError::DuplicateCards(list.join(", ")))
    }
}
