use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::ConstructionError;

/// Multi-deck card source. Cards are drawn from the back of the pool; an
/// empty shoe refills itself with `deck_count` fresh decks and reshuffles
/// before the next card is drawn, so draws never fail.
///
/// # Examples
///
/// ```
/// use puntobanco_engine::shoe::Shoe;
///
/// let mut shoe = Shoe::new_with_seed(1, 42).unwrap();
/// assert_eq!(shoe.remaining(), 52);
///
/// // Drawing past the end refills transparently
/// let cards = shoe.draw(60);
/// assert_eq!(cards.len(), 60);
/// assert_eq!(shoe.refills(), 1);
/// assert_eq!(shoe.remaining(), 44);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards; the last element is the next card drawn
    cards: Vec<Card>,
    /// Number of decks added on construction and on every automatic refill
    deck_count: u32,
    rng: ChaCha20Rng,
    /// How many times the shoe has been refilled since construction
    refills: u32,
}

impl Shoe {
    pub fn new(deck_count: u32) -> Result<Self, ConstructionError> {
        Self::new_with_seed(deck_count, rand::random())
    }

    pub fn new_with_seed(deck_count: u32, seed: u64) -> Result<Self, ConstructionError> {
        let mut shoe = Self::empty(deck_count, seed)?;
        shoe.add_decks(deck_count);
        Ok(shoe)
    }

    /// Builds a shoe whose next cards are exactly `draw_order`, first element
    /// drawn first. Once those run out the shoe refills with `deck_count`
    /// shuffled decks as usual.
    pub fn stacked(deck_count: u32, draw_order: Vec<Card>) -> Result<Self, ConstructionError> {
        let mut shoe = Self::empty(deck_count, rand::random())?;
        shoe.cards = draw_order;
        shoe.cards.reverse();
        Ok(shoe)
    }

    fn empty(deck_count: u32, seed: u64) -> Result<Self, ConstructionError> {
        if deck_count == 0 {
            return Err(ConstructionError::InvalidDeckCount(deck_count));
        }
        Ok(Self {
            cards: Vec::with_capacity(deck_count as usize * 52),
            deck_count,
            rng: ChaCha20Rng::seed_from_u64(seed),
            refills: 0,
        })
    }

    fn add_decks(&mut self, decks: u32) {
        for _ in 0..decks {
            self.cards.extend(full_deck());
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Adds fresh decks to whatever is left and shuffles the whole pool.
    /// `None` adds the shoe's own `deck_count`; an explicit count applies to
    /// this refill only and leaves `deck_count` unchanged.
    pub fn refill(&mut self, deck_count: Option<u32>) -> Result<(), ConstructionError> {
        let decks = deck_count.unwrap_or(self.deck_count);
        if decks == 0 {
            return Err(ConstructionError::InvalidDeckCount(decks));
        }
        self.refill_with(decks);
        Ok(())
    }

    fn refill_with(&mut self, decks: u32) {
        tracing::info!(
            deck_count = decks,
            remaining = self.cards.len(),
            "refilling shoe"
        );
        self.add_decks(decks);
        self.refills += 1;
    }

    /// Draws a single card, refilling first if the shoe is empty.
    pub fn draw_card(&mut self) -> Card {
        loop {
            if let Some(c) = self.cards.pop() {
                return c;
            }
            // deck_count >= 1, so one refill always makes the pool non-empty
            self.refill_with(self.deck_count);
        }
    }

    /// Draws `n` cards one at a time. A refill can therefore happen between
    /// two cards of the same call, never ahead of time.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.draw_card()).collect()
    }

    pub fn deck_count(&self) -> u32 {
        self.deck_count
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn refills(&self) -> u32 {
        self.refills
    }
}
