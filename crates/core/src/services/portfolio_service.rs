use std::collections::HashMap;

use crate::models::investment::{InvestmentTransaction, TradeSide};
use crate::models::portfolio::ProductPortfolio;

/// Groups trades by product and derives per-product positions.
///
/// Pure business logic: no I/O, no clock reads. Easy to test.
pub struct PortfolioService;

/// Running totals for one product while walking the trade list.
struct ProductTotals {
    product: String,
    total_bought: f64,
    total_sold: f64,
    bought_quantity: f64,
    sold_quantity: f64,
}

impl ProductTotals {
    fn new(product: &str) -> Self {
        Self {
            product: product.to_string(),
            total_bought: 0.0,
            total_sold: 0.0,
            bought_quantity: 0.0,
            sold_quantity: 0.0,
        }
    }
}

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Build one [`ProductPortfolio`] per distinct product name.
    ///
    /// Grouping is by exact string match on `product`. Averages are
    /// overall averages over the whole trade history, not per-lot cost
    /// basis: `profit_loss` values every sold unit at the average buy
    /// price, whatever order the trades happened in. A product with
    /// sells but no buys therefore shows the full sale proceeds as
    /// profit (average buy price 0).
    ///
    /// Output is sorted by absolute net investment, largest first;
    /// ties keep first-appearance order (stable sort).
    pub fn build_portfolios(
        &self,
        transactions: &[InvestmentTransaction],
    ) -> Vec<ProductPortfolio> {
        // First-appearance order is kept so the final sort breaks ties
        // deterministically.
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<ProductTotals> = Vec::new();

        for t in transactions {
            let slot = *index.entry(t.product.as_str()).or_insert_with(|| {
                groups.push(ProductTotals::new(&t.product));
                groups.len() - 1
            });
            let totals = &mut groups[slot];
            match t.side {
                TradeSide::Buy => {
                    totals.total_bought += t.amount;
                    totals.bought_quantity += t.quantity;
                }
                TradeSide::Sell => {
                    totals.total_sold += t.amount;
                    totals.sold_quantity += t.quantity;
                }
            }
        }

        let mut portfolios: Vec<ProductPortfolio> =
            groups.into_iter().map(Self::derive).collect();

        portfolios.sort_by(|a, b| {
            b.net_investment
                .abs()
                .partial_cmp(&a.net_investment.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        portfolios
    }

    /// Derive the position figures from one product's running totals.
    fn derive(totals: ProductTotals) -> ProductPortfolio {
        let current_holding = totals.bought_quantity - totals.sold_quantity;
        let net_investment = totals.total_bought - totals.total_sold;
        let average_buy_price = if totals.bought_quantity > 0.0 {
            totals.total_bought / totals.bought_quantity
        } else {
            0.0
        };
        let average_sell_price = if totals.sold_quantity > 0.0 {
            totals.total_sold / totals.sold_quantity
        } else {
            0.0
        };
        let profit_loss = if totals.sold_quantity > 0.0 {
            (average_sell_price - average_buy_price) * totals.sold_quantity
        } else {
            0.0
        };

        ProductPortfolio {
            product: totals.product,
            total_bought: totals.total_bought,
            total_sold: totals.total_sold,
            bought_quantity: totals.bought_quantity,
            sold_quantity: totals.sold_quantity,
            current_holding,
            net_investment,
            average_buy_price,
            average_sell_price,
            profit_loss,
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
