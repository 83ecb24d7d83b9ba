//! Match validation.
//!
//! Each dimension holds a value in `0..=2`. Three values are all equal or
//! all distinct exactly when their sum is a multiple of 3, so a trio is a
//! match when that holds in every dimension.

use crate::cards::{Card, CardId, CardTraits};

/// `true` when the three cards form a valid trio.
///
/// ```
/// use set_engine::cards::{Card, CardId, CardTraits};
/// use set_engine::rules::is_valid_match;
///
/// let card = |i: u8, code: &str| Card::new(CardId(i), code.parse::<CardTraits>().unwrap());
/// assert!(is_valid_match(&card(0, "1gsc"), &card(1, "2psc"), &card(2, "3rsc")));
/// assert!(!is_valid_match(&card(0, "1gsc"), &card(1, "2psc"), &card(2, "3rsd")));
/// ```
pub fn is_valid_match(a: &Card, b: &Card, c: &Card) -> bool {
    traits_match(a.traits(), b.traits(), c.traits())
}

/// Same rule as [`is_valid_match`], on bare attribute tuples.
pub fn traits_match(a: CardTraits, b: CardTraits, c: CardTraits) -> bool {
    let (a, b, c) = (a.indices(), b.indices(), c.indices());
    (0..4).all(|d| (a[d] + b[d] + c[d]) % 3 == 0)
}

/// The one attribute tuple that completes a valid trio with `a` and `b`.
///
/// For identical inputs this is the same tuple again.
pub fn completing_card(a: CardTraits, b: CardTraits) -> CardTraits {
    let (a, b) = (a.indices(), b.indices());
    let mut out = [0u8; 4];
    for d in 0..4 {
        out[d] = (3 - (a[d] + b[d]) % 3) % 3;
    }
    // every component is in 0..=2
    match CardTraits::from_indices(out) {
        Some(t) => t,
        None => unreachable!("completing index out of range"),
    }
}

/// First valid trio among `cards`, as ids, in index order.
pub fn find_match(cards: &[Card]) -> Option<[CardId; 3]> {
    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_match(&cards[i], &cards[j], &cards[k]) {
                    return Some([cards[i].id(), cards[j].id(), cards[k].id()]);
                }
            }
        }
    }
    None
}

/// Number of distinct valid trios among `cards`.
pub fn count_matches(cards: &[Card]) -> usize {
    let n = cards.len();
    let mut total = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_match(&cards[i], &cards[j], &cards[k]) {
                    total += 1;
                }
            }
        }
    }
    total
}
