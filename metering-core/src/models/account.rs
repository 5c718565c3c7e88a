//! Usage account model and organizational roles.

use crate::models::PlanId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organizational role of the acting user, independent of the
/// subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }

    /// Unrecognized labels resolve to the least-privileged role.
    pub fn from_string(s: &str) -> Self {
        match s {
            "owner" => Role::Owner,
            "admin" => Role::Admin,
            _ => Role::Member,
        }
    }
}

/// The mutable subject of metering: plan selection plus the current
/// period's reported totals.
#[derive(Debug, Clone, Serialize)]
pub struct UsageAccount {
    pub account_id: Uuid,
    pub plan_id: PlanId,
    /// Total tokens consumed this period. Overwritten by the reporting
    /// feed, never accumulated here.
    pub used_tokens: u64,
    pub template_count: u32,
    pub run_count: u32,
    pub created_utc: DateTime<Utc>,
}

impl UsageAccount {
    /// Create a new account on the free plan with no recorded activity.
    pub fn new() -> Self {
        Self {
            account_id: Uuid::new_v4(),
            plan_id: PlanId::Free,
            used_tokens: 0,
            template_count: 0,
            run_count: 0,
            created_utc: Utc::now(),
        }
    }
}

impl Default for UsageAccount {
    fn default() -> Self {
        Self::new()
    }
}
