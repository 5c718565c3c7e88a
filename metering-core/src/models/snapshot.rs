//! Derived usage snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Usage classification driving warning UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageStatus {
    Normal,
    Warning,
    Critical,
    Exceeded,
}

impl UsageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageStatus::Normal => "normal",
            UsageStatus::Warning => "warning",
            UsageStatus::Critical => "critical",
            UsageStatus::Exceeded => "exceeded",
        }
    }
}

/// Plan-relative usage state for a (account, plan) pair. Recomputed on
/// every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageSnapshot {
    pub remaining_tokens: u64,
    pub overage_tokens: u64,
    pub overage_cost: Decimal,
    /// Clamped to 0-150 so gauge widgets never overflow. Blocking does
    /// not read this field.
    pub usage_percentage: f64,
    pub status: UsageStatus,
    pub is_blocked: bool,
}
