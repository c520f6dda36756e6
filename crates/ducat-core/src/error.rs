//! Error types for the settlement math.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    #[error("order start time {start} is after current time {now}")]
    IncorrectOrderStartTime { start: u64, now: u64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecayError {
    #[error("arithmetic overflow")] ArithmeticOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DucatError {
    #[error(transparent)] Auction(#[from] AuctionError),
    #[error(transparent)] Decay(#[from] DecayError),
}
