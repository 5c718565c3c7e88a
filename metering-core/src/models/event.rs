//! Synthetic usage events and aggregate records.

use crate::error::MeteringError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Analytics window length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    Week,
    Month,
    Quarter,
}

impl Window {
    pub fn days(&self) -> u32 {
        match self {
            Window::Week => 7,
            Window::Month => 30,
            Window::Quarter => 90,
        }
    }

    /// Only 7, 30, and 90 day windows exist; anything else is a caller bug.
    pub fn from_days(days: u32) -> Result<Self, MeteringError> {
        match days {
            7 => Ok(Window::Week),
            30 => Ok(Window::Month),
            90 => Ok(Window::Quarter),
            other => Err(MeteringError::InvalidWindow(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Window::Week => "7d",
            Window::Month => "30d",
            Window::Quarter => "90d",
        }
    }
}

/// One simulated consumption record. Non-authoritative; stands in for a
/// real usage ledger on analytics screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub date: NaiveDate,
    pub template_name: String,
    pub document_count: u32,
    pub page_count: u32,
    pub tokens: u64,
    pub user_name: Option<String>,
}

/// Per-day total for a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: u64,
}

/// Window-wide totals and the distinct users observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageTotals {
    pub tokens: u64,
    pub documents: u64,
    pub pages: u64,
    pub users: Vec<String>,
}

/// Token total for one ranking key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyTotal {
    pub key: String,
    pub tokens: u64,
}
