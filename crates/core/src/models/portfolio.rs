use serde::{Deserialize, Serialize};

/// Accumulated position in one investment product.
///
/// Derived entirely from the trade history: quantities and amounts are
/// partitioned by side, averages are overall (not per-lot), and
/// `profit_loss` values the sold units against the average buy price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPortfolio {
    /// Product name (the grouping key)
    pub product: String,

    /// Sum of trade amounts over buys
    pub total_bought: f64,

    /// Sum of trade amounts over sells
    pub total_sold: f64,

    /// Sum of quantities over buys
    pub bought_quantity: f64,

    /// Sum of quantities over sells
    pub sold_quantity: f64,

    /// bought_quantity - sold_quantity. Not clamped: inconsistent data
    /// (selling more than was bought) shows up as a negative holding.
    pub current_holding: f64,

    /// total_bought - total_sold
    pub net_investment: f64,

    /// total_bought / bought_quantity, 0 when nothing was bought
    pub average_buy_price: f64,

    /// total_sold / sold_quantity, 0 when nothing was sold
    pub average_sell_price: f64,

    /// Realized result on the sold units:
    /// (average_sell_price - average_buy_price) × sold_quantity,
    /// 0 when nothing was sold.
    pub profit_loss: f64,
}
