use thiserror::Error;

/// Malformed input handed to a constructor. Never recoverable by retrying;
/// the call site has to be fixed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Invalid card rank: {0}")]
    InvalidRank(String),
    #[error("Invalid card suit: {0}")]
    InvalidSuit(String),
    #[error("Invalid deck count: {0} (must be at least 1)")]
    InvalidDeckCount(u32),
    #[error("Invalid hand size: {0} cards")]
    InvalidHandSize(usize),
}

/// An engine operation was called in the wrong round phase.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("Round in progress")]
    RoundInProgress,
    #[error("No round in progress")]
    NoActiveRound,
    #[error("Cannot draw third cards when there is a natural")]
    NaturalPresent,
    #[error("No hands were dealt")]
    NoHandsDealt,
}

/// A table or betting call was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BetError {
    #[error("Balance must be positive")]
    InvalidBalance,
    #[error("Unknown player: {0}")]
    UnknownPlayer(usize),
    #[error("Invalid bet amount: {0}, minimum: 1")]
    InvalidBetAmount(u64),
    #[error("Bet amount {amount} exceeds available balance {balance}")]
    InsufficientBalance { amount: u64, balance: u64 },
    #[error("Bets are closed until every bet on the table is settled")]
    BetsClosed,
    #[error("Bets are still open, no round has been played for them")]
    BetsOpen,
    #[error("There are unsettled bets on the table")]
    UnsettledBets,
    #[error("Player {0} does not have a valid bet")]
    NoBet(usize),
    #[error(transparent)]
    State(#[from] StateError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Bet(#[from] BetError),
}
