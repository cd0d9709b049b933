use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// One ledger transaction as seen by the aggregator. `amount` is always
/// non-negative; direction lives in `kind`.
#[derive(Debug, Clone)]
pub struct LedgerTransaction {
    pub txn_id: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub txn_date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub balance: f64,
    pub income: f64,
    pub expense: f64,
}

/// Aggregated totals for a single calendar date. Ephemeral: buckets are
/// discarded and rebuilt whenever the transaction set changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitEntry {
    pub label: &'static str,
    pub value: f64,
}
