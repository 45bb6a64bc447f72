//! # puntobanco-engine: Baccarat Round Engine
//!
//! Plays single rounds of Baccarat, Punto Banco variant: a multi-deck shoe
//! that refills itself, two hands valued modulo 10, the natural short-circuit,
//! the fixed third-card tables and result determination. Shoes can be seeded
//! for reproducible rounds.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and point values
//! - [`shoe`] - Seedable multi-deck shoe with automatic refill
//! - [`hand`] - Punto and Banco hands
//! - [`rules`] - Hand value, third-card tables and result comparison
//! - [`engine`] - Round state machine
//! - [`table`] - Players, wagers and payouts around a round engine
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Construction, round-state and betting errors
//!
//! ## Quick Start
//!
//! ```rust
//! use puntobanco_engine::engine::RoundEngine;
//!
//! let mut engine = RoundEngine::with_seed(8, 42).unwrap();
//! let summary = engine.play_round().unwrap();
//! println!(
//!     "Punto {} - Banco {}: {}",
//!     summary.punto_value, summary.banco_value, summary.outcome
//! );
//! ```
//!
//! ## Step by Step
//!
//! The round can also be driven one phase at a time. Calling an operation in
//! the wrong phase returns a [`errors::StateError`]:
//!
//! ```rust
//! use puntobanco_engine::engine::RoundEngine;
//! use puntobanco_engine::errors::StateError;
//!
//! let mut engine = RoundEngine::with_seed(1, 7).unwrap();
//! assert_eq!(engine.result(), Err(StateError::NoHandsDealt));
//!
//! engine.deal_hands().unwrap();
//! assert_eq!(engine.deal_hands(), Err(StateError::RoundInProgress));
//! assert_eq!(engine.result(), Err(StateError::RoundInProgress));
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod rules;
pub mod shoe;
pub mod table;
