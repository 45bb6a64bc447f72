//! Command handler modules for the Punto Banco CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod cfg;
pub mod deal;
pub mod rules;

pub use cfg::handle_cfg_command;
pub use deal::{handle_deal_command, DealBet};
pub use rules::handle_rules_command;
