//! Rules command handler: prints the third-card drawing tables and payouts.
//!
//! The table is computed from the engine's own rule functions rather than
//! hard-coded, so it always matches what the engine does.

use crate::error::CliError;
use puntobanco_engine::cards::{Card, Rank, Suit};
use puntobanco_engine::rules::{banco_draws, punto_draws, Outcome};
use puntobanco_engine::table::payout;
use std::io::Write;

/// Handle the rules command.
pub fn handle_rules_command(out: &mut dyn Write) -> Result<(), CliError> {
    let punto: Vec<String> = (0..=9u8)
        .filter(|&v| punto_draws(v, 2))
        .map(|v| v.to_string())
        .collect();
    writeln!(out, "Punto draws on: {}", punto.join(" "))?;
    writeln!(out)?;

    // a card for each Punto third-card point value; 0 is any ten or court card
    let mut thirds = Vec::with_capacity(10);
    for v in 0..=9u8 {
        let rank = if v == 0 { Rank::Ten } else { Rank::try_from(v)? };
        thirds.push(Card::new(rank, Suit::Hearts));
    }

    writeln!(out, "Banco (D = draw, S = stand)")?;
    write!(out, "total | none |")?;
    for v in 0..=9 {
        write!(out, " {}", v)?;
    }
    writeln!(out)?;
    for total in 0..=7u8 {
        let mark = |draw: bool| if draw { 'D' } else { 'S' };
        write!(out, "{:>5} | {:>4} |", total, mark(banco_draws(total, 2, None)))?;
        for card in &thirds {
            write!(out, " {}", mark(banco_draws(total, 2, Some(card))))?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Winnings per 100 staked: Punto {}, Banco {}, Tie {}",
        payout(Outcome::Punto, 100),
        payout(Outcome::Banco, 100),
        payout(Outcome::Tie, 100)
    )?;
    Ok(())
}
