//! Aggregation over synthetic usage events.
//!
//! All functions are pure and order-independent over the input list;
//! grouping goes through ordered maps so output order is a property of
//! the data, not of the generation walk.

use crate::models::{DailyTotal, KeyTotal, UsageEvent, UsageTotals};
use std::collections::{BTreeMap, BTreeSet};

fn daily_totals<F>(events: &[UsageEvent], value: F) -> Vec<DailyTotal>
where
    F: Fn(&UsageEvent) -> u64,
{
    let mut by_date: BTreeMap<chrono::NaiveDate, u64> = BTreeMap::new();
    for event in events {
        *by_date.entry(event.date).or_default() += value(event);
    }
    by_date
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Tokens per day, chronologically sorted.
pub fn aggregate_daily_tokens(events: &[UsageEvent]) -> Vec<DailyTotal> {
    daily_totals(events, |e| e.tokens)
}

/// Documents per day, chronologically sorted.
pub fn aggregate_daily_documents(events: &[UsageEvent]) -> Vec<DailyTotal> {
    daily_totals(events, |e| e.document_count as u64)
}

/// Window-wide totals plus the distinct users observed, sorted by name.
pub fn sum_usage(events: &[UsageEvent]) -> UsageTotals {
    let mut users = BTreeSet::new();
    let mut totals = UsageTotals {
        tokens: 0,
        documents: 0,
        pages: 0,
        users: Vec::new(),
    };
    for event in events {
        totals.tokens += event.tokens;
        totals.documents += event.document_count as u64;
        totals.pages += event.page_count as u64;
        if let Some(name) = &event.user_name {
            users.insert(name.clone());
        }
    }
    totals.users = users.into_iter().collect();
    totals
}

/// Top `limit` keys by descending token sum. Equal sums are broken
/// alphabetically by key, ascending.
pub fn top_by<F>(events: &[UsageEvent], key_fn: F, limit: usize) -> Vec<KeyTotal>
where
    F: Fn(&UsageEvent) -> Option<String>,
{
    let mut by_key: BTreeMap<String, u64> = BTreeMap::new();
    for event in events {
        if let Some(key) = key_fn(event) {
            *by_key.entry(key).or_default() += event.tokens;
        }
    }

    let mut ranked: Vec<KeyTotal> = by_key
        .into_iter()
        .map(|(key, tokens)| KeyTotal { key, tokens })
        .collect();
    ranked.sort_by(|a, b| b.tokens.cmp(&a.tokens).then_with(|| a.key.cmp(&b.key)));
    ranked.truncate(limit);
    ranked
}

/// Top templates by token consumption.
pub fn top_templates(events: &[UsageEvent], limit: usize) -> Vec<KeyTotal> {
    top_by(events, |e| Some(e.template_name.clone()), limit)
}

/// Top team members by token consumption. Events without a user are
/// excluded.
pub fn top_users(events: &[UsageEvent], limit: usize) -> Vec<KeyTotal> {
    top_by(events, |e| e.user_name.clone(), limit)
}
