use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeteringError {
    #[error("Unknown plan id: {0}")]
    UnknownPlan(String),

    #[error("Invalid usage window: {0} days (expected 7, 30, or 90)")]
    InvalidWindow(u32),
}
