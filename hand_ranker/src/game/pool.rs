//! Card pools and the selections classifiers build out of them.
//!
//! A [`Pool`] is immutable: classifiers never change a card. Each attempt
//! starts a fresh [`Selection`] that records which pool cards it used and
//! what value every wild card was bound to for that attempt only.

use std::collections::BTreeMap;

use super::{
    constants::{ACE, VALUES_DESC},
    entities::{Card, HandCard, Suit, Value},
    rules::Game,
};

/// Pool index of a wild card mapped to the value it was played as.
pub type WildBindings = BTreeMap<usize, Value>;

/// The cards being classified, indexed for the classifiers.
pub(crate) struct Pool<'a> {
    /// Sorted by face value, strongest first, wild cards last.
    pub cards: Vec<Card>,
    pub game: &'a Game,
    /// Indices of wild cards.
    pub wilds: Vec<usize>,
    /// Indices of natural cards, strongest first.
    pub naturals: Vec<usize>,
    /// Indices of natural cards per face value.
    by_value: [Vec<usize>; 15],
    /// Indices of natural cards per suit, strongest first.
    by_suit: [Vec<usize>; 4],
}

impl<'a> Pool<'a> {
    pub fn new(cards: &[Card], game: &'a Game) -> Self {
        let mut cards = cards.to_vec();
        let key = |card: &Card| if game.is_wild(card) { 0 } else { card.face() };
        cards.sort_by(|a, b| key(b).cmp(&key(a)));

        let mut wilds = Vec::new();
        let mut naturals = Vec::new();
        let mut by_value: [Vec<usize>; 15] = Default::default();
        let mut by_suit: [Vec<usize>; 4] = Default::default();
        for (i, card) in cards.iter().enumerate() {
            if game.is_wild(card) {
                wilds.push(i);
                continue;
            }
            naturals.push(i);
            by_value[usize::from(card.face())].push(i);
            if card.1 != Suit::Wild {
                by_suit[card.1.index()].push(i);
            }
        }

        Self {
            cards,
            game,
            wilds,
            naturals,
            by_value,
            by_suit,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn with_value(&self, value: Value) -> &[usize] {
        &self.by_value[usize::from(value)]
    }

    pub fn with_suit(&self, suit: Suit) -> &[usize] {
        &self.by_suit[suit.index()]
    }

    /// Finds the strongest distinct values that can fill groups of the
    /// given sizes, using wild cards where the wild mode allows.
    ///
    /// Values are tried from ace down, so the first complete assignment is
    /// also the strongest one.
    pub fn find_groups(&self, sizes: &[usize]) -> Option<Vec<Value>> {
        let mut chosen = Vec::with_capacity(sizes.len());
        self.search_groups(sizes, self.wilds.len(), &mut chosen)
            .then_some(chosen)
    }

    fn search_groups(&self, sizes: &[usize], wilds_left: usize, chosen: &mut Vec<Value>) -> bool {
        let Some((&size, rest)) = sizes.split_first() else {
            return true;
        };
        for value in VALUES_DESC {
            if chosen.contains(&value) {
                continue;
            }
            let missing = size.saturating_sub(self.with_value(value).len());
            let usable = if self.game.wild_mode().substitutes_for(value) {
                wilds_left
            } else {
                0
            };
            if missing > usable {
                continue;
            }
            chosen.push(value);
            if self.search_groups(rest, wilds_left - missing, chosen) {
                return true;
            }
            chosen.pop();
        }
        false
    }

    /// Selects groups found by [`Pool::find_groups`]: naturals first, then
    /// wild cards bound to the group's value.
    pub fn select_groups(&self, values: &[Value], sizes: &[usize]) -> Selection<'_, 'a> {
        let mut selection = Selection::new(self);
        let mut wilds = self.wilds.iter().copied();
        for (&value, &size) in values.iter().zip(sizes) {
            let naturals = self.with_value(value);
            for &i in naturals.iter().take(size) {
                selection.push(i, HandCard::natural(self.cards[i]));
            }
            for _ in naturals.len()..size {
                if let Some(w) = wilds.next() {
                    selection.push(w, HandCard::bound(self.cards[w], value));
                }
            }
        }
        selection
    }
}

/// A hand being built from a pool during one classification attempt.
pub(crate) struct Selection<'p, 'a> {
    pool: &'p Pool<'a>,
    cards: Vec<HandCard>,
    picked: Vec<usize>,
    used: Vec<bool>,
    bindings: WildBindings,
}

/// A successful classification.
pub(crate) struct Made {
    pub cards: Vec<HandCard>,
    pub bindings: WildBindings,
    pub descr: String,
}

impl<'p, 'a> Selection<'p, 'a> {
    pub fn new(pool: &'p Pool<'a>) -> Self {
        Self {
            pool,
            cards: Vec::with_capacity(pool.game.cards_in_hand()),
            picked: Vec::with_capacity(pool.game.cards_in_hand()),
            used: vec![false; pool.len()],
            bindings: WildBindings::new(),
        }
    }

    pub fn push(&mut self, index: usize, card: HandCard) {
        self.used[index] = true;
        if card.wild {
            self.bindings.insert(index, card.value);
        }
        self.cards.push(card);
        self.picked.push(index);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = (usize, HandCard)>) {
        for (index, card) in cards {
            self.push(index, card);
        }
    }

    /// Pads the hand with unused cards up to the hand size, strongest
    /// first. Leftover wild cards play as aces.
    fn fill(&mut self) {
        let size = self.pool.game.cards_in_hand();
        let mut rest: Vec<(usize, HandCard)> = (0..self.pool.len())
            .filter(|&i| !self.used[i])
            .map(|i| {
                let card = self.pool.cards[i];
                if self.pool.wilds.contains(&i) {
                    (i, HandCard::bound(card, ACE))
                } else {
                    (i, HandCard::natural(card))
                }
            })
            .collect();
        rest.sort_by(|a, b| b.1.value.cmp(&a.1.value));
        for (i, card) in rest {
            if self.cards.len() >= size {
                break;
            }
            self.push(i, card);
        }
    }

    /// Adds kickers unless the rule set strips them, then caps the hand.
    pub fn finish(mut self, descr: String) -> Made {
        if !self.pool.game.no_kickers() {
            self.fill();
        }
        self.finish_exact(descr)
    }

    /// Fills the whole hand regardless of kicker rules.
    pub fn finish_full(mut self, descr: impl FnOnce(&[HandCard]) -> String) -> Made {
        self.fill();
        let descr = descr(&self.cards);
        self.finish_exact(descr)
    }

    fn finish_exact(mut self, descr: String) -> Made {
        let size = self.pool.game.cards_in_hand();
        for dropped in self.picked.iter().skip(size) {
            self.bindings.remove(dropped);
        }
        self.cards.truncate(size);
        Made {
            cards: self.cards,
            bindings: self.bindings,
            descr,
        }
    }
}
