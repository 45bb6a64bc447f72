//! Betting layer on top of [`RoundEngine`].
//!
//! A [`Table`] keeps a registry of players, takes at most one wager per
//! player while bets are open, plays the round and settles each wager
//! against the result. Bets close when a round is played and reopen once
//! every wager on the table has been settled.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::{RoundEngine, RoundSummary};
use crate::errors::{BetError, ConstructionError};
use crate::rules::Outcome;

/// Position of a player in the table registry, assigned in joining order
/// starting at 0.
pub type PlayerId = usize;

/// Winnings on a successful wager, stake not included.
///
/// Punto pays even money, Banco pays 95% rounded down and Tie pays 8 to 1.
///
/// ```
/// use puntobanco_engine::rules::Outcome;
/// use puntobanco_engine::table::payout;
///
/// assert_eq!(payout(Outcome::Punto, 25), 25);
/// assert_eq!(payout(Outcome::Banco, 25), 23);
/// assert_eq!(payout(Outcome::Tie, 25), 200);
/// ```
pub fn payout(on: Outcome, amount: u64) -> u64 {
    match on {
        Outcome::Punto => amount,
        Outcome::Banco => (u128::from(amount) * 95 / 100) as u64,
        Outcome::Tie => amount.saturating_mul(8),
    }
}

/// A single wager: which result it backs and how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wager {
    pub on: Outcome,
    pub amount: u64,
}

/// How a wager ended after [`Table::bet_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub player: PlayerId,
    pub wager: Wager,
    pub won: bool,
    /// Balance after the settlement
    pub balance: u64,
}

/// A seat at the table. The stake stays in the balance until the wager is
/// settled: a win adds the payout, a loss removes the stake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    balance: u64,
    wager: Option<Wager>,
}

impl Player {
    fn new(id: PlayerId, balance: u64) -> Result<Self, BetError> {
        if balance == 0 {
            return Err(BetError::InvalidBalance);
        }
        Ok(Self {
            id,
            balance,
            wager: None,
        })
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn wager(&self) -> Option<Wager> {
        self.wager
    }

    pub fn has_valid_bet(&self) -> bool {
        self.wager.is_some()
    }

    // A new wager replaces any earlier one placed while bets were open.
    fn place(&mut self, on: Outcome, amount: u64) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::InvalidBetAmount(amount));
        }
        if amount > self.balance {
            return Err(BetError::InsufficientBalance {
                amount,
                balance: self.balance,
            });
        }
        self.wager = Some(Wager { on, amount });
        Ok(())
    }

    fn settle(&mut self, result: Outcome) -> Result<Settlement, BetError> {
        let wager = self.wager.take().ok_or(BetError::NoBet(self.id))?;
        let won = wager.on == result;
        if won {
            self.balance = self.balance.saturating_add(payout(wager.on, wager.amount));
        } else {
            // amount <= balance was checked when the wager was placed
            self.balance -= wager.amount;
        }
        Ok(Settlement {
            player: self.id,
            wager,
            won,
            balance: self.balance,
        })
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}, Balance {}, ", self.id, self.balance)?;
        match self.wager {
            Some(w) => write!(f, "Bet {} on {}", w.amount, w.on),
            None => f.write_str("No bet"),
        }
    }
}

/// Players and their wagers around one [`RoundEngine`].
///
/// # Examples
///
/// ```
/// use puntobanco_engine::engine::RoundEngine;
/// use puntobanco_engine::rules::Outcome;
/// use puntobanco_engine::table::Table;
///
/// let mut table = Table::with_engine(RoundEngine::with_seed(8, 7).unwrap());
/// let alice = table.add_player(100).unwrap();
/// table.bet(alice, Outcome::Banco, 20).unwrap();
///
/// let summary = table.play_round().unwrap();
/// let settled = table.bet_result(alice).unwrap();
/// assert_eq!(settled.won, summary.outcome == Outcome::Banco);
/// assert!(table.bets_open());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    engine: RoundEngine,
    players: Vec<Player>,
    bets_open: bool,
}

impl Table {
    pub fn new(deck_count: u32) -> Result<Self, ConstructionError> {
        Ok(Self::with_engine(RoundEngine::new(deck_count)?))
    }

    pub fn with_engine(engine: RoundEngine) -> Self {
        Self {
            engine,
            players: Vec::new(),
            bets_open: true,
        }
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    pub fn bets_open(&self) -> bool {
        self.bets_open
    }

    /// Seats a new player and returns their id.
    pub fn add_player(&mut self, balance: u64) -> Result<PlayerId, BetError> {
        let id = self.players.len();
        self.players.push(Player::new(id, balance)?);
        tracing::debug!(player = id, balance, "player joined");
        Ok(id)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, BetError> {
        self.players.get(id).ok_or(BetError::UnknownPlayer(id))
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, BetError> {
        self.players.get_mut(id).ok_or(BetError::UnknownPlayer(id))
    }

    /// Players that still have money on the table.
    pub fn available_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.balance > 0)
            .map(|p| p.id)
            .collect()
    }

    /// Available players holding an unsettled wager.
    pub fn valid_bets(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.balance > 0 && p.has_valid_bet())
            .map(|p| p.id)
            .collect()
    }

    pub fn bet(&mut self, id: PlayerId, on: Outcome, amount: u64) -> Result<(), BetError> {
        if !self.bets_open {
            return Err(BetError::BetsClosed);
        }
        self.player_mut(id)?.place(on, amount)?;
        tracing::debug!(player = id, %on, amount, "bet placed");
        Ok(())
    }

    /// Closes betting and plays one full round. Betting reopens straight
    /// away when nobody had a wager on the table.
    pub fn play_round(&mut self) -> Result<RoundSummary, BetError> {
        if !self.bets_open {
            return Err(BetError::UnsettledBets);
        }
        let summary = self.engine.play_round()?;
        self.bets_open = self.valid_bets().is_empty();
        Ok(summary)
    }

    /// Settles one player's wager against the last round. A Punto or Banco
    /// wager loses on a tie.
    pub fn bet_result(&mut self, id: PlayerId) -> Result<Settlement, BetError> {
        if self.bets_open {
            return Err(BetError::BetsOpen);
        }
        let outcome = self.engine.result()?;
        let settlement = self.player_mut(id)?.settle(outcome)?;
        tracing::debug!(
            player = id,
            won = settlement.won,
            balance = settlement.balance,
            "bet settled"
        );
        if self.valid_bets().is_empty() {
            self.bets_open = true;
        }
        Ok(settlement)
    }

    /// Settles every outstanding wager in player order.
    pub fn settle_all(&mut self) -> Result<Vec<Settlement>, BetError> {
        self.valid_bets()
            .into_iter()
            .map(|id| self.bet_result(id))
            .collect()
    }
}
