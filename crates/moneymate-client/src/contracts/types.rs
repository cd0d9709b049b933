use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DataRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataRangeHint {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub txn_id: String,
    pub description: String,
    pub amount: f64,
    pub kind: String,
    pub txn_date: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionAddData {
    pub message: String,
    pub row: TransactionRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionListData {
    pub total: i64,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRemoveData {
    pub txn_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsData {
    pub balance: f64,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavingsData {
    /// Raw percentage, may be negative or exceed 100.
    pub ratio: f64,
    /// Ratio clamped to [0, 100] for proportional display widgets.
    pub display_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub transaction_count: i64,
    pub totals: TotalsData,
    pub savings: SavingsData,
    pub daily_series: Vec<DailyPoint>,
    pub split: Vec<SplitSlice>,
    pub data_range_hint: DataRangeHint,
}
