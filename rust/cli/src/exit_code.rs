//! Exit code constants for the CLI application.
//!
//! Every command returns one of these from [`crate::run`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad arguments, invalid configuration, I/O
/// failures and engine errors alike.
pub const ERROR: i32 = 2;
