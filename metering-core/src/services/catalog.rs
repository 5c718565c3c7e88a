//! Static plan catalog.

use crate::error::MeteringError;
use crate::models::{OveragePolicy, Plan, PlanCapabilities, PlanId};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

/// Catalog entries in price-ascending order.
static CATALOG: Lazy<[Plan; 4]> = Lazy::new(|| {
    [
        Plan {
            id: PlanId::Free,
            name: "Free",
            monthly_price_minor_units: 0,
            included_tokens: 50_000,
            overage_policy: OveragePolicy::HardLimit,
            capabilities: PlanCapabilities {
                api: false,
                json: false,
                webhooks: false,
                team: false,
            },
        },
        Plan {
            id: PlanId::Light,
            name: "Light",
            monthly_price_minor_units: 2_900,
            included_tokens: 200_000,
            overage_policy: OveragePolicy::Billed {
                unit_price: Decimal::new(500, 2),
            },
            capabilities: PlanCapabilities {
                api: true,
                json: true,
                webhooks: false,
                team: false,
            },
        },
        Plan {
            id: PlanId::Standard,
            name: "Standard",
            monthly_price_minor_units: 9_900,
            included_tokens: 500_000,
            overage_policy: OveragePolicy::Billed {
                unit_price: Decimal::new(400, 2),
            },
            capabilities: PlanCapabilities {
                api: true,
                json: true,
                webhooks: true,
                team: true,
            },
        },
        Plan {
            id: PlanId::Pro,
            name: "Pro",
            monthly_price_minor_units: 29_900,
            included_tokens: 2_000_000,
            overage_policy: OveragePolicy::Billed {
                unit_price: Decimal::new(300, 2),
            },
            capabilities: PlanCapabilities {
                api: true,
                json: true,
                webhooks: true,
                team: true,
            },
        },
    ]
});

/// Get a plan by tier. Total over the closed enum.
pub fn get(id: PlanId) -> &'static Plan {
    CATALOG.iter().find(|p| p.id == id).unwrap_or(&CATALOG[0])
}

/// Look up a plan by its string id.
pub fn lookup(id: &str) -> Result<&'static Plan, MeteringError> {
    id.parse::<PlanId>().map(get)
}

/// Look up a plan by its string id, falling back to the free plan.
/// Read paths use this so an invalid id never reaches the UI as an error.
pub fn lookup_or_default(id: &str) -> &'static Plan {
    match lookup(id) {
        Ok(plan) => plan,
        Err(_) => {
            tracing::warn!(plan_id = %id, "Unknown plan id, falling back to the free plan");
            get(PlanId::Free)
        }
    }
}

/// All plans in fixed price-ascending display order.
pub fn list() -> &'static [Plan] {
    CATALOG.as_slice()
}
