//! Run detection shared by straights and straight flushes.

use super::{
    constants::{ACE, ACE_LOW},
    entities::HandCard,
    pool::Pool,
};

/// Cards of a run, each with its pool index, highest first.
pub(crate) type Run = Vec<(usize, HandCard)>;

/// Finds the strongest run among `naturals`, filling gaps with `wilds`.
///
/// Wheel rule sets check A-2-3-4-5 first and play it with the ace on top.
pub(crate) fn find_run(pool: &Pool, naturals: &[usize], wilds: &[usize]) -> Option<Run> {
    // One natural card per value; slot 1 mirrors the ace.
    let mut slots: [Option<usize>; 15] = [None; 15];
    for &i in naturals {
        let value = usize::from(pool.cards[i].face());
        slots[value].get_or_insert(i);
    }
    slots[usize::from(ACE_LOW)] = slots[usize::from(ACE)];

    let game = pool.game;
    if game.wheel() && game.min_run() <= 5 {
        if let Some(run) = wheel(pool, &slots, wilds) {
            return Some(run);
        }
    }
    windowed(pool, &slots, wilds)
}

/// Whether a run is A-5-4-3-2 played ace high.
pub(crate) fn is_wheel(run: &[HandCard]) -> bool {
    matches!(run, [first, second, ..] if first.value == ACE && second.value == 5)
}

fn wheel(pool: &Pool, slots: &[Option<usize>; 15], wilds: &[usize]) -> Option<Run> {
    let mut wilds = wilds.iter().copied();
    let mut run = Run::with_capacity(5);
    for value in [5, 4, 3, 2, ACE_LOW] {
        let entry = match slots[usize::from(value)] {
            Some(i) => (i, HandCard::counted_as(pool.cards[i], value)),
            None => {
                let w = wilds.next()?;
                (w, HandCard::bound(pool.cards[w], value))
            }
        };
        run.push(entry);
    }
    let (i, mut ace) = run.pop()?;
    ace.value = ACE;
    run.insert(0, (i, ace));
    Some(run)
}

fn windowed(pool: &Pool, slots: &[Option<usize>; 15], wilds: &[usize]) -> Option<Run> {
    let cap = pool.game.cards_in_hand();
    let min = pool.game.min_run();
    let lowest_top = u8::try_from(min).ok()?;

    for top in (lowest_top..=ACE).rev() {
        let mut spare = wilds.iter().copied();
        let mut run = Run::with_capacity(cap);
        for value in (ACE_LOW..=top).rev() {
            if run.len() == cap {
                break;
            }
            let natural = slots[usize::from(value)]
                .filter(|i| value != ACE_LOW || run.iter().all(|(j, _)| j != i));
            match natural {
                Some(i) => run.push((i, HandCard::counted_as(pool.cards[i], value))),
                None => match spare.next() {
                    Some(w) => run.push((w, HandCard::bound(pool.cards[w], value))),
                    None => break,
                },
            }
        }
        if run.len() >= min {
            return Some(run);
        }
    }
    None
}
