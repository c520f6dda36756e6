//! Auction-rate interpolation over the order window.
//!
//! The taking-amount multiplier starts at `RATE_BASE + initial_rate_bump`
//! basis points when the auction opens and falls linearly to `RATE_BASE`
//! at the end of the window. Before the window opens the rate is undefined
//! and querying it is an error.

use alloy_primitives::{U256, U512};
use ducat_core::constants::RATE_BASE;
use ducat_core::error::{AuctionError, DecayError};
use tracing::trace;

use crate::engine::narrow;

/// Taking-amount multiplier in basis points at time `now`.
///
/// Integer division floors, so the rate steps down one basis point at a
/// time across the window rather than moving continuously.
pub fn auction_rate(
    initial_rate_bump: u16,
    start_time: u64,
    duration: u32,
    now: u64,
) -> Result<u64, AuctionError> {
    if now < start_time {
        trace!(start_time, now, "auction has not started");
        return Err(AuctionError::IncorrectOrderStartTime {
            start: start_time,
            now,
        });
    }

    // Saturation only matters for start times billions of years out, where
    // the deadline comparison still resolves the right way.
    let deadline = start_time.saturating_add(u64::from(duration));
    if now >= deadline {
        return Ok(RATE_BASE);
    }

    // now in [start_time, deadline) implies duration > 0.
    let remaining = deadline - now;
    Ok(RATE_BASE + u64::from(initial_rate_bump) * remaining / u64::from(duration))
}

/// Apply a basis-point multiplier to a taking amount, flooring.
pub fn apply_rate(taking_amount: U256, rate_bps: u64) -> Result<U256, DecayError> {
    narrow(U512::from(taking_amount) * U512::from(rate_bps) / U512::from(RATE_BASE))
}
