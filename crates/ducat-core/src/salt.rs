//! Order-salt bitfield codec.
//!
//! An order salt packs the whole auction schedule into one 256-bit word:
//!
//! | bits    | field               | width |
//! |---------|---------------------|-------|
//! | 224–255 | `start_time`        | 32    |
//! | 192–223 | `duration`          | 32    |
//! | 176–191 | `initial_rate_bump` | 16    |
//! | 144–175 | `fee`               | 32    |
//! | 0–143   | `salt`              | 144   |
//!
//! The codec masks rather than validates: encoding discards any bits above
//! a field's width (only the 144-bit `salt` can carry excess bits, the
//! other fields are width-constrained by their types), and decoding never
//! reads bits belonging to a neighbour. Every operation is total.

use std::fmt;

use alloy_primitives::{U256, uint};
use serde::{Deserialize, Serialize};

const START_TIME_SHIFT: usize = 224;
const DURATION_SHIFT: usize = 192;
const RATE_BUMP_SHIFT: usize = 176;
const FEE_SHIFT: usize = 144;

const U16_MASK: U256 = uint!(0xffff_U256);
const U32_MASK: U256 = uint!(0xffffffff_U256);

/// Low 144 bits: the widest salt the word can hold.
pub const SALT_MASK: U256 = uint!(0xffffffffffffffffffffffffffffffffffff_U256);

/// A packed order salt.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct OrderSalt(pub U256);

/// The unpacked fields of an [`OrderSalt`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SaltFields {
    /// Auction start, Unix seconds.
    pub start_time: u32,
    /// Auction window length, seconds.
    pub duration: u32,
    /// Initial taking-amount bump in basis points (not clamped to 10000).
    pub initial_rate_bump: u16,
    /// Resolver fee.
    pub fee: u32,
    /// Arbitrary nonce. Only the low 144 bits survive encoding.
    pub salt: U256,
}

impl OrderSalt {
    /// Pack the five fields into a single word.
    ///
    /// Fields are shifted into position and OR'd together; the salt is
    /// masked to 144 bits first, so high bits are silently discarded.
    pub fn encode(fields: &SaltFields) -> Self {
        let word = (U256::from(fields.start_time) << START_TIME_SHIFT)
            | (U256::from(fields.duration) << DURATION_SHIFT)
            | (U256::from(fields.initial_rate_bump) << RATE_BUMP_SHIFT)
            | (U256::from(fields.fee) << FEE_SHIFT)
            | (fields.salt & SALT_MASK);
        Self(word)
    }

    /// Recover all five fields.
    pub fn decode(&self) -> SaltFields {
        SaltFields {
            start_time: self.start_time(),
            duration: self.duration(),
            initial_rate_bump: self.initial_rate_bump(),
            fee: self.fee(),
            salt: self.salt(),
        }
    }

    /// Auction start, bits 224–255.
    pub fn start_time(&self) -> u32 {
        (self.0 >> START_TIME_SHIFT).to::<u32>()
    }

    /// Auction duration, bits 192–223.
    pub fn duration(&self) -> u32 {
        ((self.0 >> DURATION_SHIFT) & U32_MASK).to::<u32>()
    }

    /// Initial rate bump, bits 176–191.
    pub fn initial_rate_bump(&self) -> u16 {
        ((self.0 >> RATE_BUMP_SHIFT) & U16_MASK).to::<u16>()
    }

    /// Resolver fee, bits 144–175.
    pub fn fee(&self) -> u32 {
        ((self.0 >> FEE_SHIFT) & U32_MASK).to::<u32>()
    }

    /// Nonce, bits 0–143.
    pub fn salt(&self) -> U256 {
        self.0 & SALT_MASK
    }
}

impl From<U256> for OrderSalt {
    fn from(word: U256) -> Self {
        Self(word)
    }
}

impl From<OrderSalt> for U256 {
    fn from(salt: OrderSalt) -> Self {
        salt.0
    }
}

impl fmt::Display for OrderSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#066x}", self.0)
    }
}
