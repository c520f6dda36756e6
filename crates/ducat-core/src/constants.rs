//! Protocol constants. All fixed-point values use the 18-decimal token
//! convention: `FIXED_POINT_ONE` is 1.0, division floors.

use alloy_primitives::{U256, uint};

/// 1.0 in 1e18 fixed point.
pub const FIXED_POINT_ONE: U256 = uint!(1_000_000_000_000_000_000_U256);

/// Base of the auction rate multiplier, in basis points.
///
/// A multiplier equal to `RATE_BASE` means "no adjustment"; the rate bump
/// is expressed relative to this base.
pub const RATE_BASE: u64 = 10_000;

/// Four 365-day years in seconds: the reference decay horizon.
pub const FOUR_YEARS_SECS: u64 = 4 * 365 * 86_400;

/// Default per-second voting-power decay base, 1e18-scaled.
///
/// Equals `0.1^(1 / FOUR_YEARS_SECS)`: a stake loses 90% of its voting
/// power over four years of continuous per-second decay.
pub const EXP_BASE: U256 = uint!(999_999_981_746_377_019_U256);
