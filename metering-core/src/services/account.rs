//! Usage account state.
//!
//! An explicit per-session value, never a process-wide singleton. The
//! snapshot is recomputed from the current (plan, used tokens) pair on
//! every read so it can never go stale against a plan change.

use crate::models::{Plan, PlanId, UsageAccount, UsageSnapshot};
use crate::services::{accounting, catalog};
use crate::utils::format;
use chrono::{Datelike, NaiveDate, Utc};

/// First day of the calendar month following `date`.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Holder of the current usage account.
#[derive(Debug, Clone)]
pub struct UsageAccountState {
    account: UsageAccount,
}

impl UsageAccountState {
    /// New account on the free plan with no recorded activity.
    pub fn new() -> Self {
        Self {
            account: UsageAccount::new(),
        }
    }

    pub fn with_plan(plan_id: PlanId) -> Self {
        let mut state = Self::new();
        state.account.plan_id = plan_id;
        state
    }

    pub fn account(&self) -> &UsageAccount {
        &self.account
    }

    pub fn plan(&self) -> &'static Plan {
        catalog::get(self.account.plan_id)
    }

    /// Select a plan by string id. Unknown ids are ignored so an invalid
    /// selection cannot corrupt the account.
    pub fn set_plan(&mut self, plan_id: &str) {
        match plan_id.parse::<PlanId>() {
            Ok(id) => self.account.plan_id = id,
            Err(_) => {
                tracing::warn!(plan_id = %plan_id, "Ignoring unknown plan selection");
            }
        }
    }

    /// Overwrite the period's used-token total. The reporting feed owns
    /// accumulation; this core only receives authoritative totals.
    pub fn report_usage(&mut self, tokens: u64) {
        self.account.used_tokens = tokens;
    }

    pub fn set_counts(&mut self, templates: u32, runs: u32) {
        self.account.template_count = templates;
        self.account.run_count = runs;
    }

    /// Derive the usage snapshot from the current plan and usage values.
    pub fn snapshot(&self) -> UsageSnapshot {
        accounting::snapshot(self.account.used_tokens, self.plan())
    }

    pub fn is_new_user(&self) -> bool {
        self.account.template_count == 0 && self.account.run_count == 0
    }

    pub fn has_templates(&self) -> bool {
        self.account.template_count > 0
    }

    pub fn has_runs(&self) -> bool {
        self.account.run_count > 0
    }

    /// First day of the next calendar month, when the period resets.
    pub fn period_reset_date(&self) -> NaiveDate {
        first_of_next_month(Utc::now().date_naive())
    }

    /// Reset date rendered for display, e.g. "September 1, 2026".
    pub fn period_reset_label(&self) -> String {
        format::format_reset_date(self.period_reset_date())
    }
}

impl Default for UsageAccountState {
    fn default() -> Self {
        Self::new()
    }
}
