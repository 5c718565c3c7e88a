//! Computation and state services for metering-core.

pub mod account;
pub mod accounting;
pub mod aggregate;
pub mod catalog;
pub mod generator;
pub mod policy;

pub use account::UsageAccountState;
pub use accounting::Overage;
pub use generator::{GeneratorConfig, SeededRng};
pub use policy::FeatureAccess;
