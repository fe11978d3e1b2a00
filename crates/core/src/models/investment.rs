use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Side of an investment trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    /// Buying into a product
    Buy,
    /// Selling out of a product
    Sell,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "Buy"),
            TradeSide::Sell => write!(f, "Sell"),
        }
    }
}

/// A single buy/sell trade on an investment product.
///
/// `product` is a free-text name and the only product identity there is;
/// portfolios group trades by exact string match on it. `amount` is
/// recorded as quantity × unit price at entry time but is stored
/// independently and never re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTransaction {
    /// Unique identifier, assigned once at creation (millisecond timestamp)
    pub id: String,

    /// Buy or Sell
    #[serde(rename = "type")]
    pub side: TradeSide,

    /// Trade value in CNY (quantity × unit price at entry time)
    pub amount: f64,

    /// Product name, the grouping key for portfolios
    pub product: String,

    /// Number of units traded
    pub quantity: f64,

    /// Price per unit in CNY
    pub unit_price: f64,

    /// Optional free-text note
    #[serde(default)]
    pub description: String,

    /// Calendar date (no time component, daily granularity)
    pub date: NaiveDate,
}

impl InvestmentTransaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        side: TradeSide,
        amount: f64,
        product: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            side,
            amount,
            product: product.into(),
            quantity,
            unit_price,
            description: description.into(),
            date,
        }
    }
}
