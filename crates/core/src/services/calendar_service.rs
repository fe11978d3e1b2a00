use chrono::NaiveDate;

use crate::models::investment::InvestmentTransaction;
use crate::models::summary::DaySummary;
use crate::models::transaction::{Transaction, TransactionKind};

/// Computes day-level totals for calendar cells.
///
/// Pure business logic: no I/O, no clock reads.
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Totals for a single date, matched by exact date equality.
    ///
    /// `investment_amount` sums buys and sells together, without sign.
    /// `has_records` is true as soon as any record of either kind falls
    /// on the date.
    pub fn day_summary(
        &self,
        transactions: &[Transaction],
        investments: &[InvestmentTransaction],
        date: NaiveDate,
    ) -> DaySummary {
        let mut summary = DaySummary::default();

        for t in transactions.iter().filter(|t| t.date == date) {
            summary.has_records = true;
            match t.kind {
                TransactionKind::Income => summary.income += t.amount,
                TransactionKind::Expense => summary.expense += t.amount,
            }
        }

        for t in investments.iter().filter(|t| t.date == date) {
            summary.has_records = true;
            summary.investment_amount += t.amount;
        }

        summary
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
