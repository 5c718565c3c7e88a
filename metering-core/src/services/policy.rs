//! Access policy gates.
//!
//! Two independent gate families: plan-capability gates (what the
//! subscription allows) and role-capability gates (what the acting user
//! may do). A feature is available when both applicable gates pass; the
//! two failure reasons are kept apart because each has a distinct
//! user-facing remedy (upgrade vs. ask an owner or admin).

use crate::models::{Plan, Role};
use serde::Serialize;

pub fn plan_has_api(plan: &Plan) -> bool {
    plan.capabilities.api
}

pub fn plan_has_json(plan: &Plan) -> bool {
    plan.capabilities.json
}

pub fn plan_has_webhooks(plan: &Plan) -> bool {
    plan.capabilities.webhooks
}

pub fn plan_has_team(plan: &Plan) -> bool {
    plan.capabilities.team
}

pub fn can_access_billing(role: Role) -> bool {
    role == Role::Owner
}

pub fn can_access_developers(role: Role) -> bool {
    matches!(role, Role::Owner | Role::Admin)
}

pub fn can_access_team(role: Role) -> bool {
    matches!(role, Role::Owner | Role::Admin)
}

pub fn can_manage_templates(role: Role) -> bool {
    matches!(role, Role::Owner | Role::Admin)
}

pub fn can_transfer_ownership(role: Role) -> bool {
    role == Role::Owner
}

/// Outcome of composing a role gate with a plan gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureAccess {
    Granted,
    /// The actor's role does not permit the action.
    RoleDenied,
    /// The plan does not include the feature.
    UpgradeRequired,
}

impl FeatureAccess {
    pub fn is_granted(&self) -> bool {
        *self == FeatureAccess::Granted
    }
}

/// Compose a role gate with a plan gate. Role denial wins when both
/// fail: a member cannot act on an upgrade prompt.
pub fn check_feature(role_allowed: bool, plan_allowed: bool) -> FeatureAccess {
    if !role_allowed {
        FeatureAccess::RoleDenied
    } else if !plan_allowed {
        FeatureAccess::UpgradeRequired
    } else {
        FeatureAccess::Granted
    }
}
