pub mod errors;
pub mod format;
pub mod models;
pub mod services;
pub mod storage;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use errors::CoreError;
use models::{
    category::{default_categories, Category},
    investment::{InvestmentTransaction, TradeSide},
    portfolio::ProductPortfolio,
    summary::{CategoryBreakdown, DaySummary, InvestmentSummary, MonthlySummary},
    transaction::{Transaction, TransactionKind},
};
use services::{
    calendar_service::CalendarService, category_service::CategoryService,
    investment_service::InvestmentService, portfolio_service::PortfolioService,
    summary_service::SummaryService,
};
use storage::store::{self, keys, KeyValueStore};

/// Main entry point for the Cashbook core library.
/// Owns the record collections and the services that derive views from them.
///
/// All derived views are recomputed from the in-memory collections on
/// every call; nothing is cached between calls.
#[must_use]
pub struct CashBook {
    transactions: Vec<Transaction>,
    investments: Vec<InvestmentTransaction>,
    categories: Vec<Category>,
    /// Date of the most recent income/expense entry, for the reminder.
    last_record_date: Option<NaiveDate>,
    summary_service: SummaryService,
    category_service: CategoryService,
    investment_service: InvestmentService,
    portfolio_service: PortfolioService,
    calendar_service: CalendarService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for CashBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CashBook")
            .field("transactions", &self.transactions.len())
            .field("investments", &self.investments.len())
            .field("categories", &self.categories.len())
            .field("last_record_date", &self.last_record_date)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl CashBook {
    /// Create a brand new empty book seeded with the default categories.
    pub fn create_new() -> Self {
        Self::build(Vec::new(), Vec::new(), default_categories(), None)
    }

    /// Load a book from a key-value store. Missing keys fall back to
    /// their defaults (empty collections, seeded categories), so a
    /// fresh store yields the same book as [`CashBook::create_new`].
    pub fn load_from_store<S: KeyValueStore>(store: &S) -> Result<Self, CoreError> {
        let transactions = store::read_or(store, keys::TRANSACTIONS, Vec::new())?;
        let investments = store::read_or(store, keys::INVESTMENT_TRANSACTIONS, Vec::new())?;
        let categories = store::read_or(store, keys::CATEGORIES, default_categories())?;
        let raw_date: String = store::read_or(store, keys::LAST_RECORD_DATE, String::new())?;
        let last_record_date = raw_date.parse().ok();

        let book = Self::build(transactions, investments, categories, last_record_date);
        debug!(
            transactions = book.transactions.len(),
            investments = book.investments.len(),
            "book loaded from store"
        );
        Ok(book)
    }

    /// Write the book to a key-value store.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_store<S: KeyValueStore>(&mut self, store: &mut S) -> Result<(), CoreError> {
        store::write_value(store, keys::TRANSACTIONS, &self.transactions)?;
        store::write_value(store, keys::INVESTMENT_TRANSACTIONS, &self.investments)?;
        store::write_value(store, keys::CATEGORIES, &self.categories)?;
        let raw_date = self
            .last_record_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        store::write_value(store, keys::LAST_RECORD_DATE, &raw_date)?;

        self.dirty = false;
        debug!(
            transactions = self.transactions.len(),
            investments = self.investments.len(),
            "book saved to store"
        );
        Ok(())
    }

    // ── Record Management ───────────────────────────────────────────

    /// Add an income/expense record and return its assigned id.
    ///
    /// The id is the current millisecond timestamp, and today's date is
    /// stamped as the last record date for the reminder.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<String, CoreError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::ValidationError(
                "Transaction amount must be a non-negative number".into(),
            ));
        }

        let now = Utc::now();
        let id = now.timestamp_millis().to_string();
        self.transactions.push(Transaction::new(
            id.clone(),
            kind,
            amount,
            category,
            description,
            date,
        ));
        self.last_record_date = Some(now.date_naive());
        self.dirty = true;
        Ok(id)
    }

    /// Add a buy/sell trade and return its assigned id.
    ///
    /// The trade amount is quantity × unit price, fixed at entry time.
    pub fn add_investment(
        &mut self,
        side: TradeSide,
        product: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<String, CoreError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CoreError::ValidationError(
                "Trade quantity must be positive".into(),
            ));
        }
        if !unit_price.is_finite() || unit_price <= 0.0 {
            return Err(CoreError::ValidationError(
                "Trade unit price must be positive".into(),
            ));
        }

        let id = Utc::now().timestamp_millis().to_string();
        self.investments.push(InvestmentTransaction::new(
            id.clone(),
            side,
            quantity * unit_price,
            product,
            quantity,
            unit_price,
            description,
            date,
        ));
        self.dirty = true;
        Ok(id)
    }

    /// Remove an income/expense record by id.
    pub fn delete_transaction(&mut self, id: &str) -> Result<(), CoreError> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        self.transactions.remove(idx);
        self.dirty = true;
        Ok(())
    }

    /// Remove a trade by id.
    pub fn delete_investment(&mut self, id: &str) -> Result<(), CoreError> {
        let idx = self
            .investments
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        self.investments.remove(idx);
        self.dirty = true;
        Ok(())
    }

    // ── Read Access ─────────────────────────────────────────────────

    /// All income/expense records, in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All trades, in insertion order.
    #[must_use]
    pub fn investments(&self) -> &[InvestmentTransaction] {
        &self.investments
    }

    /// The category list.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The last `n` income/expense records, oldest of them first.
    #[must_use]
    pub fn recent_transactions(&self, n: usize) -> &[Transaction] {
        &self.transactions[self.transactions.len().saturating_sub(n)..]
    }

    /// The last `n` trades, oldest of them first.
    #[must_use]
    pub fn recent_investments(&self, n: usize) -> &[InvestmentTransaction] {
        &self.investments[self.investments.len().saturating_sub(n)..]
    }

    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn investment_count(&self) -> usize {
        self.investments.len()
    }

    /// Date of the most recent income/expense entry, if any.
    #[must_use]
    pub fn last_record_date(&self) -> Option<NaiveDate> {
        self.last_record_date
    }

    /// Returns `true` if the book has been modified since the last
    /// save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Reminder ────────────────────────────────────────────────────

    /// True when the daily bookkeeping reminder should fire: nothing is
    /// recorded for `today` and the last entry was made on another day.
    #[must_use]
    pub fn reminder_due(&self, today: NaiveDate) -> bool {
        let recorded_today = self.transactions.iter().any(|t| t.date == today);
        !recorded_today && self.last_record_date != Some(today)
    }

    // ── Derived Views ───────────────────────────────────────────────

    /// Balance overview for the month `today` falls in.
    #[must_use]
    pub fn monthly_summary(&self, today: NaiveDate) -> MonthlySummary {
        self.summary_service
            .monthly_summary(&self.transactions, today)
    }

    /// Balance overview for the current wall-clock month.
    #[must_use]
    pub fn current_summary(&self) -> MonthlySummary {
        self.monthly_summary(Utc::now().date_naive())
    }

    /// Per-category stats for the month `today` falls in.
    #[must_use]
    pub fn category_breakdown(&self, today: NaiveDate) -> CategoryBreakdown {
        self.category_service
            .monthly_breakdown(&self.transactions, &self.categories, today)
    }

    /// Per-category stats for the current wall-clock month.
    #[must_use]
    pub fn current_category_breakdown(&self) -> CategoryBreakdown {
        self.category_breakdown(Utc::now().date_naive())
    }

    /// All-time investment totals and held-product count.
    #[must_use]
    pub fn investment_summary(&self) -> InvestmentSummary {
        self.investment_service.summarize(&self.investments)
    }

    /// Per-product positions, largest absolute net investment first.
    #[must_use]
    pub fn portfolios(&self) -> Vec<ProductPortfolio> {
        self.portfolio_service.build_portfolios(&self.investments)
    }

    /// Day totals for a calendar cell.
    #[must_use]
    pub fn day_summary(&self, date: NaiveDate) -> DaySummary {
        self.calendar_service
            .day_summary(&self.transactions, &self.investments, date)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        transactions: Vec<Transaction>,
        investments: Vec<InvestmentTransaction>,
        categories: Vec<Category>,
        last_record_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            transactions,
            investments,
            categories,
            last_record_date,
            summary_service: SummaryService::new(),
            category_service: CategoryService::new(),
            investment_service: InvestmentService::new(),
            portfolio_service: PortfolioService::new(),
            calendar_service: CalendarService::new(),
            dirty: false,
        }
    }
}
