use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::{ConstructionError, StateError};
use crate::hand::{Hand, HandId};
use crate::rules::{self, Outcome};
use crate::shoe::Shoe;

/// Deck count used when the caller has no preference.
pub const DEFAULT_DECKS: u32 = 8;

/// Where the engine is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    /// Nothing dealt yet
    Idle,
    /// Both hands hold two cards and the round is open
    Dealt,
    /// Round closed by a natural or by third-card resolution
    Resolved,
}

/// One third card drawn during [`RoundEngine::resolve_thirds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdDraw {
    pub hand: HandId,
    pub card: Card,
}

/// Final state of a round played with [`RoundEngine::play_round`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub punto: Vec<Card>,
    pub banco: Vec<Card>,
    pub punto_value: u8,
    pub banco_value: u8,
    /// The round ended on a natural 8 or 9
    pub natural: bool,
    /// Third cards in the order they were drawn
    pub thirds: Vec<ThirdDraw>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
struct DealtHands {
    punto: Hand,
    banco: Hand,
}

impl DealtHands {
    fn has_natural(&self) -> bool {
        self.punto.is_natural() || self.banco.is_natural()
    }
}

/// Punto Banco round engine. Owns the shoe and, once a round has been dealt,
/// both hands.
///
/// # Examples
///
/// ```
/// use puntobanco_engine::engine::RoundEngine;
///
/// let mut engine = RoundEngine::with_seed(8, 12345).unwrap();
/// engine.deal_hands().unwrap();
///
/// if !engine.check_natural().unwrap() {
///     let thirds = engine.resolve_thirds().unwrap();
///     assert!(thirds.len() <= 2);
/// }
///
/// let outcome = engine.result().unwrap();
/// println!("{} wins", outcome);
/// ```
#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Card source, replaced only through `replace_shoe`
    shoe: Shoe,
    /// Both hands of the current or last round, or neither before the first deal
    hands: Option<DealtHands>,
    phase: RoundPhase,
}

impl RoundEngine {
    pub fn new(deck_count: u32) -> Result<Self, ConstructionError> {
        Ok(Self::with_shoe(Shoe::new(deck_count)?))
    }

    pub fn with_seed(deck_count: u32, seed: u64) -> Result<Self, ConstructionError> {
        Ok(Self::with_shoe(Shoe::new_with_seed(deck_count, seed)?))
    }

    pub fn with_shoe(shoe: Shoe) -> Self {
        Self {
            shoe,
            hands: None,
            phase: RoundPhase::Idle,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_round_active(&self) -> bool {
        self.phase == RoundPhase::Dealt
    }

    /// Deals two cards to Punto, then two to Banco, and opens the round.
    pub fn deal_hands(&mut self) -> Result<(), StateError> {
        if self.is_round_active() {
            return Err(StateError::RoundInProgress);
        }
        let (p1, p2) = (self.shoe.draw_card(), self.shoe.draw_card());
        let (b1, b2) = (self.shoe.draw_card(), self.shoe.draw_card());
        let hands = DealtHands {
            punto: Hand::from_pair(HandId::Punto, p1, p2),
            banco: Hand::from_pair(HandId::Banco, b1, b2),
        };
        tracing::debug!(
            punto = %hands.punto,
            banco = %hands.banco,
            "hands dealt"
        );
        self.hands = Some(hands);
        self.phase = RoundPhase::Dealt;
        Ok(())
    }

    /// Returns whether either hand is a natural. A natural closes the round.
    pub fn check_natural(&mut self) -> Result<bool, StateError> {
        if !self.is_round_active() {
            return Err(StateError::NoActiveRound);
        }
        let hands = self.hands.as_ref().ok_or(StateError::NoActiveRound)?;
        let natural = hands.has_natural();
        if natural {
            tracing::debug!(
                punto = hands.punto.value(),
                banco = hands.banco.value(),
                "natural, round closed"
            );
            self.phase = RoundPhase::Resolved;
        }
        Ok(natural)
    }

    /// Applies the third-card rules (Punto first, then Banco) and closes the
    /// round. A natural on the table is reported as `NaturalPresent` even
    /// when `check_natural` already closed the round.
    pub fn resolve_thirds(&mut self) -> Result<Vec<ThirdDraw>, StateError> {
        let active = self.is_round_active();
        let Some(hands) = self.hands.as_mut() else {
            return Err(StateError::NoActiveRound);
        };
        if hands.has_natural() {
            self.phase = RoundPhase::Resolved;
            return Err(StateError::NaturalPresent);
        }
        if !active {
            return Err(StateError::NoActiveRound);
        }

        let mut draws = Vec::with_capacity(2);
        if hands.punto.draw_third(None) {
            let card = self.shoe.draw_card();
            hands.punto.push_third(card);
            draws.push(ThirdDraw {
                hand: HandId::Punto,
                card,
            });
            if hands.banco.draw_third(Some(&card)) {
                let card = self.shoe.draw_card();
                hands.banco.push_third(card);
                draws.push(ThirdDraw {
                    hand: HandId::Banco,
                    card,
                });
            }
        } else if hands.banco.draw_third(None) {
            let card = self.shoe.draw_card();
            hands.banco.push_third(card);
            draws.push(ThirdDraw {
                hand: HandId::Banco,
                card,
            });
        }
        for d in &draws {
            tracing::debug!(hand = %d.hand, card = %d.card, "third card drawn");
        }
        self.phase = RoundPhase::Resolved;
        Ok(draws)
    }

    /// Winner of the closed round.
    pub fn result(&self) -> Result<Outcome, StateError> {
        if self.is_round_active() {
            return Err(StateError::RoundInProgress);
        }
        let hands = self.hands.as_ref().ok_or(StateError::NoHandsDealt)?;
        let outcome = rules::compare(hands.punto.value(), hands.banco.value());
        tracing::debug!(%outcome, "round result");
        Ok(outcome)
    }

    /// Plays a whole round: deal, natural check, third cards unless a natural
    /// ended the round, result.
    pub fn play_round(&mut self) -> Result<RoundSummary, StateError> {
        self.deal_hands()?;
        let natural = self.check_natural()?;
        let thirds = if natural {
            Vec::new()
        } else {
            self.resolve_thirds()?
        };
        let outcome = self.result()?;
        let hands = self.hands.as_ref().ok_or(StateError::NoHandsDealt)?;
        Ok(RoundSummary {
            punto: hands.punto.cards().to_vec(),
            banco: hands.banco.cards().to_vec(),
            punto_value: hands.punto.value(),
            banco_value: hands.banco.value(),
            natural,
            thirds,
            outcome,
        })
    }

    pub fn hand(&self, id: HandId) -> Result<&Hand, StateError> {
        let hands = self.hands.as_ref().ok_or(StateError::NoHandsDealt)?;
        Ok(match id {
            HandId::Punto => &hands.punto,
            HandId::Banco => &hands.banco,
        })
    }

    pub fn punto_value(&self) -> Result<u8, StateError> {
        self.hand(HandId::Punto).map(Hand::value)
    }

    pub fn banco_value(&self) -> Result<u8, StateError> {
        self.hand(HandId::Banco).map(Hand::value)
    }

    pub fn punto_cards(&self) -> Result<&[Card], StateError> {
        self.hand(HandId::Punto).map(Hand::cards)
    }

    pub fn banco_cards(&self) -> Result<&[Card], StateError> {
        self.hand(HandId::Banco).map(Hand::cards)
    }

    pub fn deck_count(&self) -> u32 {
        self.shoe.deck_count()
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Swaps in a fresh shoe of `deck_count` decks. Legal in any phase.
    pub fn replace_shoe(&mut self, deck_count: u32) -> Result<(), ConstructionError> {
        self.shoe = Shoe::new(deck_count)?;
        Ok(())
    }

    pub fn replace_shoe_with(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }
}
