//! Subscription plan model.

use crate::error::MeteringError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Subscription tier identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanId {
    Free,
    Light,
    Standard,
    Pro,
}

impl PlanId {
    /// All tiers in price-ascending order.
    pub const ALL: [PlanId; 4] = [PlanId::Free, PlanId::Light, PlanId::Standard, PlanId::Pro];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Free => "free",
            PlanId::Light => "light",
            PlanId::Standard => "standard",
            PlanId::Pro => "pro",
        }
    }
}

impl FromStr for PlanId {
    type Err = MeteringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(PlanId::Free),
            "light" => Ok(PlanId::Light),
            "standard" => Ok(PlanId::Standard),
            "pro" => Ok(PlanId::Pro),
            other => Err(MeteringError::UnknownPlan(other.to_string())),
        }
    }
}

/// What happens when usage passes the included allotment.
///
/// A plan either blocks further processing at 100% or bills overage per
/// 50,000-token block. Both at once is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum OveragePolicy {
    HardLimit,
    Billed { unit_price: Decimal },
}

impl OveragePolicy {
    pub fn is_hard_limit(&self) -> bool {
        matches!(self, OveragePolicy::HardLimit)
    }

    /// Price per 50,000-token block, if overage is billable on this plan.
    pub fn unit_price(&self) -> Option<Decimal> {
        match self {
            OveragePolicy::HardLimit => None,
            OveragePolicy::Billed { unit_price } => Some(*unit_price),
        }
    }
}

/// Feature flags attached to a plan. Every catalog record specifies the
/// full set; there are no implicit defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCapabilities {
    pub api: bool,
    pub json: bool,
    pub webhooks: bool,
    pub team: bool,
}

/// Subscription plan catalog entry. Immutable for the lifetime of the
/// process; looked up, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    /// Base price in minor currency units, display only.
    pub monthly_price_minor_units: i64,
    /// Monthly token allotment.
    pub included_tokens: u64,
    pub overage_policy: OveragePolicy,
    pub capabilities: PlanCapabilities,
}
