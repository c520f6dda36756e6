//! Trait interfaces between ducat crates.
//!
//! [`RateCalculator`] is the contract between the order-handling layers and
//! the math engine (ducat-decay implements it). Keeping the seam here lets
//! hosts swap in an instrumented or mock engine without depending on the
//! engine crate.

use alloy_primitives::U256;

use crate::error::{AuctionError, DecayError, DucatError};

/// Pure fixed-point auction and decay math.
///
/// Every method is a deterministic integer function of its arguments with
/// floor division at each multiply-then-divide step. No method retains
/// state, blocks, or performs I/O, so implementations are safe to share
/// across threads without synchronization.
pub trait RateCalculator: Send + Sync {
    /// `point * (base/1e18)^exponent` in 1e18 fixed point.
    fn power(&self, base: U256, exponent: U256, point: U256) -> Result<U256, DecayError>;

    /// Stake remaining after `elapsed_seconds` of continuous per-second
    /// decay at `base` (1e18-scaled fraction).
    ///
    /// Equals `amount` exactly at `elapsed_seconds = 0` and is
    /// non-increasing in elapsed time for `base < 1e18`.
    fn voting_power_of(
        &self,
        amount: U256,
        base: U256,
        elapsed_seconds: u64,
    ) -> Result<U256, DecayError>;

    /// Taking-amount multiplier in basis points at time `now`.
    ///
    /// Decays linearly from `RATE_BASE + initial_rate_bump` at
    /// `now = start_time` down to `RATE_BASE` at the end of the window.
    /// Fails for `now < start_time`.
    fn auction_rate(
        &self,
        initial_rate_bump: u16,
        start_time: u64,
        duration: u32,
        now: u64,
    ) -> Result<u64, AuctionError>;

    /// Apply a basis-point multiplier to an amount, flooring.
    fn apply_rate(&self, taking_amount: U256, rate_bps: u64) -> Result<U256, DecayError>;

    /// Effective taking amount for an order at time `now`.
    ///
    /// Default implementation composes [`auction_rate`](Self::auction_rate)
    /// and [`apply_rate`](Self::apply_rate).
    fn auction_taking_amount(
        &self,
        taking_amount: U256,
        initial_rate_bump: u16,
        start_time: u64,
        duration: u32,
        now: u64,
    ) -> Result<U256, DucatError> {
        let rate = self.auction_rate(initial_rate_bump, start_time, duration, now)?;
        Ok(self.apply_rate(taking_amount, rate)?)
    }
}
