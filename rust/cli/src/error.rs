//! Error types for the CLI application.
//!
//! Engine errors arrive as typed values ([`EngineError`], [`StateError`],
//! [`ConstructionError`], [`BetError`]) and are folded into [`CliError::Engine`] so every
//! command can propagate with `?`.

use std::fmt;

use puntobanco_engine::errors::{BetError, ConstructionError, EngineError, StateError};

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(EngineError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}

impl From<StateError> for CliError {
    fn from(error: StateError) -> Self {
        CliError::Engine(error.into())
    }
}

impl From<ConstructionError> for CliError {
    fn from(error: ConstructionError) -> Self {
        CliError::Engine(error.into())
    }
}

impl From<BetError> for CliError {
    fn from(error: BetError) -> Self {
        CliError::Engine(error.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
