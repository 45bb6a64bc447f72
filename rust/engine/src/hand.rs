use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::ConstructionError;
use crate::rules;

/// Which of the two baccarat hands a [`Hand`] plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandId {
    /// Player hand
    Punto,
    /// Banker hand
    Banco,
}

impl fmt::Display for HandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandId::Punto => f.write_str("Punto"),
            HandId::Banco => f.write_str("Banco"),
        }
    }
}

/// Most cards a hand can hold: the initial two plus one third card.
pub const MAX_HAND_CARDS: usize = 3;

/// A baccarat hand of two or three cards. Punto and Banco share this
/// structure and differ only in the third-card rule chosen by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    id: HandId,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(id: HandId, cards: Vec<Card>) -> Result<Self, ConstructionError> {
        if cards.len() != 2 {
            return Err(ConstructionError::InvalidHandSize(cards.len()));
        }
        let mut hand = Self {
            id,
            cards: Vec::with_capacity(MAX_HAND_CARDS),
        };
        hand.cards.extend(cards);
        Ok(hand)
    }

    /// Hand dealt from the shoe; always exactly two cards.
    pub fn from_pair(id: HandId, first: Card, second: Card) -> Self {
        let mut cards = Vec::with_capacity(MAX_HAND_CARDS);
        cards.push(first);
        cards.push(second);
        Self { id, cards }
    }

    /// Appends cards in order. Rejects the whole batch if the hand would end
    /// up holding more than three cards.
    pub fn add_cards<I>(&mut self, cards: I) -> Result<(), ConstructionError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards: Vec<Card> = cards.into_iter().collect();
        let total = self.cards.len() + cards.len();
        if total > MAX_HAND_CARDS {
            return Err(ConstructionError::InvalidHandSize(total));
        }
        self.cards.extend(cards);
        Ok(())
    }

    // only called after draw_third() said yes, which implies two cards
    pub(crate) fn push_third(&mut self, card: Card) {
        debug_assert_eq!(self.cards.len(), 2, "third card on a {}-card hand", self.cards.len());
        self.cards.push(card);
    }

    pub fn id(&self) -> HandId {
        self.id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        rules::hand_value(&self.cards)
    }

    pub fn is_natural(&self) -> bool {
        rules::is_natural(self.value(), self.cards.len())
    }

    pub fn third_card(&self) -> Option<&Card> {
        self.cards.get(2)
    }

    /// Third-card decision for this hand. `punto_third` is only consulted by
    /// Banco; Punto's rule depends on its own total alone.
    pub fn draw_third(&self, punto_third: Option<&Card>) -> bool {
        match self.id {
            HandId::Punto => rules::punto_draws(self.value(), self.cards.len()),
            HandId::Banco => rules::banco_draws(self.value(), self.cards.len(), punto_third),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
