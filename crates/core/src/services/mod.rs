pub mod calendar_service;
pub mod category_service;
pub mod investment_service;
pub mod portfolio_service;
pub mod summary_service;

use chrono::{Datelike, NaiveDate};

/// True when both dates fall in the same calendar year-month.
/// Equivalent to comparing the `YYYY-MM` prefix of the ISO date strings.
pub(crate) fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
