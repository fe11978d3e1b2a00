use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of an everyday money record.
///
/// Doubles as the category kind: every [`crate::models::category::Category`]
/// is either an income or an expense bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, bonus, dividends, ...)
    Income,
    /// Money going out (food, transport, rent, ...)
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense record.
///
/// `category` holds the category *name*, not an id. There is no
/// referential integrity: if the category disappears, the record keeps
/// the orphaned name and simply stops matching any bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned once at creation (millisecond timestamp)
    pub id: String,

    /// Income or Expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount in CNY. Two decimal places of meaningful precision.
    pub amount: f64,

    /// Category name, matched by exact string against the category list
    pub category: String,

    /// Optional free-text note
    #[serde(default)]
    pub description: String,

    /// Calendar date (no time component, daily granularity)
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }
}
