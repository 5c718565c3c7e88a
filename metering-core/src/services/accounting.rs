//! Usage accounting engine.
//!
//! Pure functions turning (used tokens, plan) into plan-relative usage
//! figures. Token and count inputs are unsigned throughout, so negative
//! or non-finite values are unrepresentable at this boundary.

use crate::models::{Plan, UsageSnapshot, UsageStatus};
use rust_decimal::Decimal;

/// Overage is billed per block of this many tokens; partial blocks are
/// billed in full.
pub const OVERAGE_BLOCK_TOKENS: u64 = 50_000;

/// Display cap for usage percentage so gauges never overflow.
pub const PERCENTAGE_CAP: f64 = 150.0;

/// Tokens beyond the allotment and their billed cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overage {
    pub tokens: u64,
    pub cost: Decimal,
}

impl Overage {
    pub fn zero() -> Self {
        Self {
            tokens: 0,
            cost: Decimal::ZERO,
        }
    }
}

/// Calculate overage tokens and cost for a usage total.
///
/// Zero within the allotment and on hard-limit plans (those block
/// instead of billing).
pub fn calculate_overage(used_tokens: u64, plan: &Plan) -> Overage {
    let unit_price = match plan.overage_policy.unit_price() {
        Some(price) => price,
        None => return Overage::zero(),
    };
    if used_tokens <= plan.included_tokens {
        return Overage::zero();
    }

    let tokens = used_tokens - plan.included_tokens;
    // Round up to whole 50,000-token blocks
    let blocks = (tokens + OVERAGE_BLOCK_TOKENS - 1) / OVERAGE_BLOCK_TOKENS;

    Overage {
        tokens,
        cost: Decimal::from(blocks) * unit_price,
    }
}

/// Usage as a percentage of the allotment, unclamped. Blocking decisions
/// read this; display reads the clamped variant.
pub fn usage_percentage_unclamped(used_tokens: u64, included_tokens: u64) -> f64 {
    if included_tokens == 0 {
        return if used_tokens == 0 { 0.0 } else { f64::INFINITY };
    }
    used_tokens as f64 / included_tokens as f64 * 100.0
}

/// Usage percentage capped at 150 for gauge widgets.
pub fn usage_percentage(used_tokens: u64, included_tokens: u64) -> f64 {
    usage_percentage_unclamped(used_tokens, included_tokens).min(PERCENTAGE_CAP)
}

/// Classify a usage percentage. Thresholds are closed at the lower end.
pub fn usage_status(percentage: f64) -> UsageStatus {
    if percentage >= 100.0 {
        UsageStatus::Exceeded
    } else if percentage >= 95.0 {
        UsageStatus::Critical
    } else if percentage >= 80.0 {
        UsageStatus::Warning
    } else {
        UsageStatus::Normal
    }
}

/// Tokens left in the allotment, never negative.
pub fn remaining_tokens(used_tokens: u64, included_tokens: u64) -> u64 {
    included_tokens.saturating_sub(used_tokens)
}

/// Whether further processing is blocked. True only on hard-limit plans
/// at or past the full allotment; overage-billed plans are never blocked.
pub fn is_blocked(plan: &Plan, used_tokens: u64) -> bool {
    plan.overage_policy.is_hard_limit() && used_tokens >= plan.included_tokens
}

/// Compose the full derived snapshot for a usage total against a plan.
pub fn snapshot(used_tokens: u64, plan: &Plan) -> UsageSnapshot {
    let overage = calculate_overage(used_tokens, plan);
    let percentage = usage_percentage(used_tokens, plan.included_tokens);

    UsageSnapshot {
        remaining_tokens: remaining_tokens(used_tokens, plan.included_tokens),
        overage_tokens: overage.tokens,
        overage_cost: overage.cost,
        usage_percentage: percentage,
        status: usage_status(percentage),
        is_blocked: is_blocked(plan, used_tokens),
    }
}
