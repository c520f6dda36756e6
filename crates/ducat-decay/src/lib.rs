//! # ducat-decay — fixed-point settlement math.
//!
//! All calculations use integer arithmetic only for determinism:
//! - **Exponential decay**: `point * base^exponent` in 1e18 fixed point via
//!   binary exponentiation with 512-bit intermediates, flooring at every
//!   multiply-then-divide step.
//! - **Auction rates**: a taking-amount bump interpolated linearly down to
//!   zero over the order window, expressed in basis points.
//! - **Voting power**: continuous per-second decay of a staked balance
//!   since its lock origin.

pub mod auction;
pub mod engine;

pub use auction::{apply_rate, auction_rate};
pub use engine::{DecayEngine, pow_fixed};
