use chrono::NaiveDate;

use crate::models::category::Category;
use crate::models::summary::{CategoryBreakdown, CategoryStat};
use crate::models::transaction::{Transaction, TransactionKind};

use super::same_month;

/// Groups the current month's records by category and computes totals,
/// counts, and share-of-kind percentages.
///
/// Pure business logic: no I/O, no clock reads.
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    /// Build the per-category breakdown for `today`'s year-month.
    ///
    /// Records are matched to a category by exact name equality only.
    /// A record whose category name matches no entry in `categories`
    /// contributes to no bucket. Buckets whose month total is not
    /// positive are dropped from the output.
    ///
    /// Percentages are computed separately per kind, against the sum of
    /// the surviving buckets of that kind, so each side closes to 100.
    /// When a kind's total is 0 its percentages are all 0.
    ///
    /// Both output lists are sorted largest total first; ties keep the
    /// category list order (stable sort).
    pub fn monthly_breakdown(
        &self,
        transactions: &[Transaction],
        categories: &[Category],
        today: NaiveDate,
    ) -> CategoryBreakdown {
        let monthly: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| same_month(t.date, today))
            .collect();

        let mut income: Vec<CategoryStat> = Vec::new();
        let mut expense: Vec<CategoryStat> = Vec::new();

        for category in categories {
            let mut total = 0.0;
            let mut count = 0;
            for t in monthly.iter().filter(|t| t.category == category.name) {
                total += t.amount;
                count += 1;
            }
            if total <= 0.0 {
                continue;
            }

            let stat = CategoryStat {
                category: category.clone(),
                total,
                count,
                percentage: 0.0, // filled below, once the kind totals are known
            };
            match category.kind {
                TransactionKind::Income => income.push(stat),
                TransactionKind::Expense => expense.push(stat),
            }
        }

        Self::fill_percentages(&mut income);
        Self::fill_percentages(&mut expense);

        Self::sort_by_total(&mut income);
        Self::sort_by_total(&mut expense);

        CategoryBreakdown { income, expense }
    }

    fn fill_percentages(stats: &mut [CategoryStat]) {
        let kind_total: f64 = stats.iter().map(|s| s.total).sum();
        for stat in stats {
            stat.percentage = if kind_total > 0.0 {
                (stat.total / kind_total) * 100.0
            } else {
                0.0
            };
        }
    }

    fn sort_by_total(stats: &mut [CategoryStat]) {
        // Stable sort: equal totals keep their category-list order
        stats.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
