use std::collections::HashMap;

use crate::models::investment::{InvestmentTransaction, TradeSide};
use crate::models::summary::InvestmentSummary;

/// Computes the all-time investment totals and the count of products
/// still held.
///
/// Pure business logic: no I/O, no clock reads.
pub struct InvestmentService;

impl InvestmentService {
    pub fn new() -> Self {
        Self
    }

    /// Fold the full trade list into an [`InvestmentSummary`].
    ///
    /// A product counts as held only while its bought quantity strictly
    /// exceeds its sold quantity; a fully closed position does not.
    pub fn summarize(&self, transactions: &[InvestmentTransaction]) -> InvestmentSummary {
        let mut summary = InvestmentSummary::default();

        // product -> (bought quantity, sold quantity)
        let mut quantities: HashMap<&str, (f64, f64)> = HashMap::new();

        for t in transactions {
            let entry = quantities.entry(t.product.as_str()).or_insert((0.0, 0.0));
            match t.side {
                TradeSide::Buy => {
                    summary.total_bought += t.amount;
                    entry.0 += t.quantity;
                }
                TradeSide::Sell => {
                    summary.total_sold += t.amount;
                    entry.1 += t.quantity;
                }
            }
        }

        summary.net_investment = summary.total_bought - summary.total_sold;
        summary.holding_product_count = quantities
            .values()
            .filter(|(bought, sold)| bought > sold)
            .count();

        summary
    }
}

impl Default for InvestmentService {
    fn default() -> Self {
        Self::new()
    }
}
