//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use puntobanco_engine::rules::Outcome;

#[derive(Parser, Debug)]
#[command(
    name = "puntobanco",
    version,
    about = "Baccarat Punto Banco round engine"
)]
pub struct PuntoBancoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal and resolve a single round
    Deal {
        /// Shoe seed for a reproducible round
        #[arg(long)]
        seed: Option<u64>,
        /// Number of decks in the shoe
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        decks: Option<u32>,
        /// Append the round record to this JSONL file
        #[arg(long)]
        output: Option<String>,
        /// Place a bet on this result before the deal
        #[arg(long, value_enum)]
        bet: Option<BetOn>,
        /// Bet amount (default 10)
        #[arg(long, requires = "bet")]
        stake: Option<u64>,
        /// Starting balance of the betting player (default 1000)
        #[arg(long, requires = "bet")]
        balance: Option<u64>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
    /// Print the third-card drawing tables and payouts
    Rules,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BetOn {
    Punto,
    Banco,
    Tie,
}

impl BetOn {
    pub fn outcome(self) -> Outcome {
        match self {
            BetOn::Punto => Outcome::Punto,
            BetOn::Banco => Outcome::Banco,
            BetOn::Tie => Outcome::Tie,
        }
    }
}
