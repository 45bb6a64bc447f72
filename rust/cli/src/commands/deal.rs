//! Deal command handler: plays a single round and prints it.
//!
//! The shoe is seeded either from `--seed`, the configuration, or a random
//! value; the seed is printed so any round can be reproduced. With
//! `--bet` a single player is seated at a [`Table`] and the wager is settled
//! after the result. With `--output` the round is also appended to a JSONL
//! file as a [`RoundRecord`].

use crate::config;
use crate::error::CliError;
use puntobanco_engine::engine::{RoundEngine, RoundSummary};
use puntobanco_engine::logger::{RoundLogger, RoundRecord};
use puntobanco_engine::rules::{hand_value, Outcome};
use puntobanco_engine::table::{Settlement, Table};
use std::io::Write;

pub const DEFAULT_STAKE: u64 = 10;
pub const DEFAULT_BALANCE: u64 = 1000;

/// Bet placed on the dealt round by a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealBet {
    pub on: Outcome,
    pub stake: u64,
    pub balance: u64,
}

impl DealBet {
    pub fn new(on: Outcome, stake: Option<u64>, balance: Option<u64>) -> Self {
        Self {
            on,
            stake: stake.unwrap_or(DEFAULT_STAKE),
            balance: balance.unwrap_or(DEFAULT_BALANCE),
        }
    }
}

/// Handle the deal command.
///
/// # Arguments
///
/// * `decks` - Deck count override for the shoe
/// * `seed` - Optional RNG seed override for deterministic dealing
/// * `output` - Optional JSONL file the round record is appended to
/// * `bet` - Optional wager settled against the round
/// * `out` - Output stream for command results
///
/// # Errors
///
/// Returns `CliError::Config` for invalid configuration,
/// `CliError::InvalidInput` for an empty output path, `CliError::Engine` for
/// a rejected bet and `CliError::Io` when writing fails. Nothing is printed
/// when the arguments are rejected.
pub fn handle_deal_command(
    decks: Option<u32>,
    seed: Option<u64>,
    output: Option<String>,
    bet: Option<DealBet>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(path) = &output
        && path.trim().is_empty()
    {
        return Err(CliError::InvalidInput("output path is empty".into()));
    }
    let resolved = config::load_with_sources()?.with_overrides(decks, seed)?;
    let decks = resolved.config.decks;
    let seed = resolved.config.seed.unwrap_or_else(rand::random);

    let mut table = Table::with_engine(RoundEngine::with_seed(decks, seed)?);
    let player = match bet {
        Some(b) => {
            let id = table.add_player(b.balance)?;
            table.bet(id, b.on, b.stake)?;
            Some(id)
        }
        None => None,
    };
    let summary = table.play_round()?;
    write_summary(out, decks, seed, &summary)?;
    if let Some(id) = player {
        write_settlement(out, &table.bet_result(id)?)?;
    }

    if let Some(path) = output {
        let mut logger = RoundLogger::create(&path)?;
        let record = RoundRecord::from_summary(logger.next_id(), Some(seed), decks, &summary);
        logger.write(&record)?;
        tracing::debug!(path = %path, round_id = %record.round_id, "round record written");
    }
    Ok(())
}

fn write_summary(
    out: &mut dyn Write,
    decks: u32,
    seed: u64,
    summary: &RoundSummary,
) -> Result<(), CliError> {
    let join = |cards: &[puntobanco_engine::cards::Card]| {
        cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    writeln!(out, "Shoe: {} decks, seed {}", decks, seed)?;
    let (punto, banco) = (&summary.punto[..2], &summary.banco[..2]);
    writeln!(out, "Punto: {} ({})", join(punto), hand_value(punto))?;
    writeln!(out, "Banco: {} ({})", join(banco), hand_value(banco))?;
    if summary.natural {
        writeln!(out, "Natural")?;
    }
    for draw in &summary.thirds {
        writeln!(out, "{} draws {}", draw.hand, draw.card)?;
    }
    writeln!(
        out,
        "Final: Punto {}, Banco {}",
        summary.punto_value, summary.banco_value
    )?;
    writeln!(out, "Result: {}", summary.outcome)?;
    Ok(())
}

fn write_settlement(out: &mut dyn Write, settled: &Settlement) -> Result<(), CliError> {
    writeln!(
        out,
        "Bet: {} on {}, {}, balance {}",
        settled.wager.amount,
        settled.wager.on,
        if settled.won { "won" } else { "lost" },
        settled.balance
    )?;
    Ok(())
}
