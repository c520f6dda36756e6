//! # ducat-core
//! Foundation types for Dutch-auction order settlement: the order-salt
//! bitfield codec, shared fixed-point constants, error taxonomy, and the
//! trait seam implemented by the decay engine.

pub mod constants;
pub mod error;
pub mod salt;
pub mod traits;

pub use salt::{OrderSalt, SaltFields};
