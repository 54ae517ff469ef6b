//! Spending over time

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::Money;
use crate::session::Session;

/// Total spent on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Sum of amounts per exact date, ascending by date
pub fn daily_totals(session: &Session) -> Vec<DailyTotal> {
    let ledger = session.ledger();
    if ledger.is_empty() {
        return Vec::new();
    }

    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in ledger.records() {
        *by_date.entry(record.date()).or_default() += record.amount();
    }

    by_date
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}
