//! Decay engine implementing the [`RateCalculator`] trait.
//!
//! Provides the production fixed-point exponentiation with 512-bit
//! intermediates for overflow safety. Division floors at every step; the
//! bit-for-bit result depends on the multiply-in-before-squaring order,
//! which must not be reordered.

use alloy_primitives::{U256, U512, uint};
use ducat_core::error::{AuctionError, DecayError};
use ducat_core::traits::RateCalculator;

use crate::auction;

const ONE_WIDE: U512 = uint!(1_000_000_000_000_000_000_U512);

/// The production rate calculator.
///
/// Implements [`RateCalculator`] with:
/// - Binary exponentiation for O(log n) fixed-point multiplications
/// - Linear auction-rate interpolation over the order window
/// - Basis-point multiplier application with a 512-bit intermediate
#[derive(Debug, Clone, Default)]
pub struct DecayEngine;

impl DecayEngine {
    /// Create a new DecayEngine.
    pub fn new() -> Self {
        Self
    }
}

/// Truncate a 512-bit intermediate back to 256 bits.
///
/// Unreachable for the documented value domain (base at most 1e18), but
/// surfaced as an error rather than a panic for hostile inputs.
pub(crate) fn narrow(wide: U512) -> Result<U256, DecayError> {
    if (wide >> 256) != U512::ZERO {
        return Err(DecayError::ArithmeticOverflow);
    }
    Ok(U256::from_le_slice(&wide.to_le_bytes::<64>()[..32]))
}

/// `lhs * rhs / 1e18`, flooring, with a 512-bit intermediate.
fn mul_fixed(lhs: U256, rhs: U256) -> Result<U256, DecayError> {
    narrow(U512::from(lhs) * U512::from(rhs) / ONE_WIDE)
}

/// Fixed-point exponentiation: `point * (base/1e18)^exponent`.
///
/// Iterates over the exponent bits least-significant first, multiplying
/// `point` in for each set bit before squaring `base`. The squaring is
/// skipped once the remaining exponent is zero; that never changes the
/// result.
pub fn pow_fixed(base: U256, exponent: U256, point: U256) -> Result<U256, DecayError> {
    let mut b = base;
    let mut p = point;
    let mut e = exponent;

    while e > U256::ZERO {
        if e.bit(0) {
            p = mul_fixed(p, b)?;
        }
        e >>= 1;
        if e > U256::ZERO {
            b = mul_fixed(b, b)?;
        }
    }

    Ok(p)
}

impl RateCalculator for DecayEngine {
    fn power(&self, base: U256, exponent: U256, point: U256) -> Result<U256, DecayError> {
        pow_fixed(base, exponent, point)
    }

    fn voting_power_of(
        &self,
        amount: U256,
        base: U256,
        elapsed_seconds: u64,
    ) -> Result<U256, DecayError> {
        pow_fixed(base, U256::from(elapsed_seconds), amount)
    }

    fn auction_rate(
        &self,
        initial_rate_bump: u16,
        start_time: u64,
        duration: u32,
        now: u64,
    ) -> Result<u64, AuctionError> {
        auction::auction_rate(initial_rate_bump, start_time, duration, now)
    }

    fn apply_rate(&self, taking_amount: U256, rate_bps: u64) -> Result<U256, DecayError> {
        auction::apply_rate(taking_amount, rate_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ducat_core::constants::{EXP_BASE, FIXED_POINT_ONE, FOUR_YEARS_SECS};
    use proptest::prelude::*;

    // --- pow_fixed ---

    #[test]
    fn zero_exponent_is_identity() {
        let point = U256::from(123_456_789u64);
        assert_eq!(pow_fixed(EXP_BASE, U256::ZERO, point).unwrap(), point);
        assert_eq!(pow_fixed(U256::ZERO, U256::ZERO, point).unwrap(), point);
        assert_eq!(pow_fixed(U256::MAX, U256::ZERO, point).unwrap(), point);
    }

    #[test]
    fn one_exponent_multiplies_once() {
        // 0.5 * 2.0 = 1.0
        let half = FIXED_POINT_ONE / U256::from(2u8);
        let two = FIXED_POINT_ONE * U256::from(2u8);
        assert_eq!(pow_fixed(two, U256::from(1u8), half).unwrap(), FIXED_POINT_ONE);
    }

    #[test]
    fn squares_correctly() {
        // 0.8^2 = 0.64
        let base = uint!(800_000_000_000_000_000_U256);
        let got = pow_fixed(base, U256::from(2u8), FIXED_POINT_ONE).unwrap();
        assert_eq!(got, uint!(640_000_000_000_000_000_U256));
    }

    #[test]
    fn cubes_correctly() {
        // 0.9^3 = 0.729
        let base = uint!(900_000_000_000_000_000_U256);
        let got = pow_fixed(base, U256::from(3u8), FIXED_POINT_ONE).unwrap();
        assert_eq!(got, uint!(729_000_000_000_000_000_U256));
    }

    #[test]
    fn large_exponent_approaches_e_inverse() {
        // 0.9999^10000 ≈ e^-1 ≈ 0.3679
        let base = uint!(999_900_000_000_000_000_U256);
        let got = pow_fixed(base, U256::from(10_000u64), FIXED_POINT_ONE).unwrap();
        assert!(
            got > uint!(360_000_000_000_000_000_U256)
                && got < uint!(380_000_000_000_000_000_U256),
            "0.9999^10000 = {got}, expected ~0.3679e18"
        );
    }

    #[test]
    fn unit_base_is_stable() {
        let got = pow_fixed(FIXED_POINT_ONE, U256::from(1_000_000u64), FIXED_POINT_ONE).unwrap();
        assert_eq!(got, FIXED_POINT_ONE);
    }

    #[test]
    fn zero_base_annihilates() {
        let got = pow_fixed(U256::ZERO, U256::from(100u8), FIXED_POINT_ONE).unwrap();
        assert_eq!(got, U256::ZERO);
    }

    #[test]
    fn overflow_is_reported() {
        // Squaring a near-maximal base does not fit back into 256 bits.
        let err = pow_fixed(U256::MAX, U256::from(2u8), U256::MAX).unwrap_err();
        assert_eq!(err, DecayError::ArithmeticOverflow);
    }

    // --- voting_power_of ---

    #[test]
    fn voting_power_at_lock_origin_is_deposit() {
        let e = DecayEngine::new();
        let deposit = uint!(42_000_000_000_000_000_000_U256);
        assert_eq!(e.voting_power_of(deposit, EXP_BASE, 0).unwrap(), deposit);
    }

    #[test]
    fn voting_power_loses_ninety_percent_over_four_years() {
        let e = DecayEngine::new();
        let got = e
            .voting_power_of(FIXED_POINT_ONE, EXP_BASE, FOUR_YEARS_SECS)
            .unwrap();
        // 0.1 ± 0.1%
        assert!(
            got > uint!(99_900_000_000_000_000_U256)
                && got < uint!(100_100_000_000_000_000_U256),
            "four-year decay = {got}, expected ~0.1e18"
        );
    }

    #[test]
    fn voting_power_keeps_falling() {
        let e = DecayEngine::new();
        let half_way = e
            .voting_power_of(FIXED_POINT_ONE, EXP_BASE, FOUR_YEARS_SECS / 2)
            .unwrap();
        let full = e
            .voting_power_of(FIXED_POINT_ONE, EXP_BASE, FOUR_YEARS_SECS)
            .unwrap();
        assert!(full < half_way);
        assert!(half_way < FIXED_POINT_ONE);
    }

    // --- dyn compatibility ---

    #[test]
    fn engine_is_object_safe() {
        let e = DecayEngine::new();
        let dyn_e: &dyn RateCalculator = &e;
        let point = U256::from(7u8);
        assert_eq!(
            dyn_e.power(FIXED_POINT_ONE, U256::ZERO, point).unwrap(),
            point
        );
    }

    #[test]
    fn trait_composition_matches_parts() {
        let e = DecayEngine::new();
        let taking = uint!(100_000_000_000_000_000_U256);
        let rate = e.auction_rate(1000, 1_673_548_149, 1800, 1_673_548_149).unwrap();
        let direct = e.apply_rate(taking, rate).unwrap();
        let composed = e
            .auction_taking_amount(taking, 1000, 1_673_548_149, 1800, 1_673_548_149)
            .unwrap();
        assert_eq!(direct, composed);
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn power_never_exceeds_point_below_unit_base(
            base_off in 0u64..1_000_000_000_000_000_000,
            exponent in 0u64..1_000_000,
            point in any::<u64>(),
        ) {
            let base = FIXED_POINT_ONE - U256::from(base_off);
            let point = U256::from(point);
            let got = pow_fixed(base, U256::from(exponent), point).unwrap();
            prop_assert!(got <= point, "{got} > {point}");
        }

        #[test]
        fn decay_is_monotone_in_time(
            base_off in 1_000_000_000u64..1_000_000_000_000,
            amount in 1_000_000_000_000_000u64..,
            e1 in 0u64..100_000,
            e2 in 0u64..100_000,
        ) {
            // Slow-decay bases in [1 - 1e-6, 1 - 1e-9]: the true decrement
            // per second dwarfs the floor error of the multiplication chain.
            let base = FIXED_POINT_ONE - U256::from(base_off);
            let amount = U256::from(amount);
            let (lo, hi) = if e1 <= e2 { (e1, e2) } else { (e2, e1) };
            let p_lo = pow_fixed(base, U256::from(lo), amount).unwrap();
            let p_hi = pow_fixed(base, U256::from(hi), amount).unwrap();
            prop_assert!(p_hi <= p_lo, "power grew with time: {p_hi} > {p_lo}");
        }

        #[test]
        fn identity_holds_for_any_base(
            base in any::<[u8; 32]>(),
            point in any::<[u8; 32]>(),
        ) {
            let base = U256::from_be_bytes(base);
            let point = U256::from_be_bytes(point);
            prop_assert_eq!(pow_fixed(base, U256::ZERO, point).unwrap(), point);
        }
    }
}
