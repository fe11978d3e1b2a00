use serde::{Deserialize, Serialize};

use super::category::Category;

/// Balance overview: all-time net plus the current month's totals.
///
/// The core computes these, the frontend just renders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// All-time balance: income minus expense over every record
    pub total_balance: f64,

    /// Income total for the reference month
    pub monthly_income: f64,

    /// Expense total for the reference month
    pub monthly_expense: f64,

    /// monthly_income - monthly_expense
    pub monthly_net: f64,
}

/// Per-category totals for the reference month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    /// The category bucket (name, color, icon for display)
    pub category: Category,

    /// Sum of matching record amounts in the reference month
    pub total: f64,

    /// Number of matching records in the reference month
    pub count: usize,

    /// Share of this category's total within its kind, 0..=100.
    /// 0 for every bucket when the kind total is 0.
    pub percentage: f64,
}

/// Month's category stats split by kind, each sorted largest total first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub income: Vec<CategoryStat>,
    pub expense: Vec<CategoryStat>,
}

/// All-time investment totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    /// Sum of trade amounts over all buys
    pub total_bought: f64,

    /// Sum of trade amounts over all sells
    pub total_sold: f64,

    /// total_bought - total_sold
    pub net_investment: f64,

    /// Products whose bought quantity strictly exceeds their sold
    /// quantity. A fully closed position does not count.
    pub holding_product_count: usize,
}

/// Totals for a single calendar day, for calendar-cell rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Income total on that date
    pub income: f64,

    /// Expense total on that date
    pub expense: f64,

    /// Combined trade value on that date, buys and sells summed together
    pub investment_amount: f64,

    /// True iff at least one record of either kind matches the date
    pub has_records: bool,
}
