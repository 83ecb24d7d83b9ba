use crate::cards::{Card, CardId, CardTraits, Color, Count, Fill, Shape};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a deck: one per combination of the four dimensions.
pub const DECK_SIZE: usize = 81;

/// The 81-card Set deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every attribute combination, ids assigned in generation order
    /// (shape outermost, count innermost).
    ///
    /// ```
    /// use set_engine::cards::CardId;
    /// use set_engine::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 81);
    /// assert_eq!(deck.as_slice()[0].id(), CardId(0));
    /// assert_eq!(deck.as_slice()[0].to_string(), "1gec");
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &shape in &Shape::ALL {
            for &color in &Color::ALL {
                for &fill in &Fill::ALL {
                    for &count in &Count::ALL {
                        let id = CardId(cards.len() as u8);
                        cards.push(Card::new(id, CardTraits::new(shape, color, fill, count)));
                    }
                }
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// The card carrying the given attributes, wherever it sits.
    pub fn find(&self, traits: CardTraits) -> Option<&Card> {
        self.cards.iter().find(|c| c.traits() == traits)
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
