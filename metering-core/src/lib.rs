//! metering-core: usage metering, billing enforcement, and access policy
//! core for the document extraction platform.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::MeteringError;
