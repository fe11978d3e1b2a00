use chrono::NaiveDate;

use crate::models::summary::MonthlySummary;
use crate::models::transaction::{Transaction, TransactionKind};

use super::same_month;

/// Computes the balance overview: all-time total plus the totals of the
/// month that `today` falls in.
///
/// Pure business logic: no I/O, no clock reads. Easy to test.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Fold the full record list into a [`MonthlySummary`].
    ///
    /// `total_balance` ignores the period filter; the `monthly_*`
    /// figures only count records in `today`'s year-month. Empty input
    /// yields the all-zero summary.
    pub fn monthly_summary(
        &self,
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> MonthlySummary {
        let mut summary = MonthlySummary::default();

        for t in transactions {
            let in_month = same_month(t.date, today);
            match t.kind {
                TransactionKind::Income => {
                    summary.total_balance += t.amount;
                    if in_month {
                        summary.monthly_income += t.amount;
                    }
                }
                TransactionKind::Expense => {
                    summary.total_balance -= t.amount;
                    if in_month {
                        summary.monthly_expense += t.amount;
                    }
                }
            }
        }

        summary.monthly_net = summary.monthly_income - summary.monthly_expense;
        summary
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
