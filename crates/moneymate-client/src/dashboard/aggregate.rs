use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::dashboard::types::{
    DailyBucket, LedgerTransaction, SplitEntry, Totals, TransactionKind,
};

pub const INCOME_SPLIT_LABEL: &str = "Income";
pub const EXPENSES_SPLIT_LABEL: &str = "Expenses";

/// Sums the snapshot into balance/income/expense totals.
///
/// Input order is irrelevant and an empty snapshot yields all zeros. The
/// balance is always `income - expense`.
pub fn compute_totals(transactions: &[LedgerTransaction]) -> Totals {
    let mut income = 0.0_f64;
    let mut expense = 0.0_f64;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expense += transaction.amount,
        }
    }

    Totals {
        balance: income - expense,
        income,
        expense,
    }
}

/// Percentage of income retained after expenses.
///
/// Returns 0 when income is zero instead of signalling "undefined"; the
/// value is otherwise unclamped and may be negative or exceed 100.
pub fn savings_ratio(income: f64, expense: f64) -> f64 {
    if income > 0.0 {
        (income - expense) / income * 100.0
    } else {
        0.0
    }
}

/// Clamps a savings ratio into [0, 100] for proportional display widgets.
/// Non-display consumers must use the raw ratio.
pub fn display_ratio(ratio: f64) -> f64 {
    ratio.clamp(0.0, 100.0)
}

/// Folds the snapshot into one bucket per calendar date, emitted in
/// chronological order.
///
/// Grouping is exact date-key equality, so the result is deterministic for
/// a fixed input multiset regardless of input order. Bucket count equals
/// the number of distinct dates in the snapshot.
pub fn build_daily_series(transactions: &[LedgerTransaction]) -> Vec<DailyBucket> {
    let mut buckets: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();

    for transaction in transactions {
        let entry = buckets.entry(transaction.txn_date).or_insert((0.0, 0.0));
        match transaction.kind {
            TransactionKind::Income => entry.0 += transaction.amount,
            TransactionKind::Expense => entry.1 += transaction.amount,
        }
    }

    buckets
        .into_iter()
        .map(|(date, (income, expense))| DailyBucket {
            date,
            income,
            expense,
            balance: income - expense,
        })
        .collect()
}

/// Two fixed slices for proportional (pie-style) display: income first,
/// expenses second, always in that order.
pub fn category_split(income: f64, expense: f64) -> [SplitEntry; 2] {
    [
        SplitEntry {
            label: INCOME_SPLIT_LABEL,
            value: income,
        },
        SplitEntry {
            label: EXPENSES_SPLIT_LABEL,
            value: expense,
        },
    ]
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(2);
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        build_daily_series, category_split, compute_totals, display_ratio, savings_ratio,
    };
    use crate::dashboard::date::format_iso_date;
    use crate::dashboard::types::{LedgerTransaction, TransactionKind};

    fn txn(kind: TransactionKind, amount: f64, date: &str) -> LedgerTransaction {
        let txn_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .unwrap_or(NaiveDate::MIN);
        LedgerTransaction {
            txn_id: format!("txn_{kind:?}_{amount}_{date}"),
            description: "fixture".to_string(),
            amount,
            kind,
            txn_date,
        }
    }

    fn scenario() -> Vec<LedgerTransaction> {
        vec![
            txn(TransactionKind::Income, 100.0, "2024-01-01"),
            txn(TransactionKind::Expense, 40.0, "2024-01-01"),
            txn(TransactionKind::Income, 50.0, "2024-01-02"),
        ]
    }

    #[test]
    fn empty_snapshot_yields_zero_totals() {
        let totals = compute_totals(&[]);
        assert_eq!(totals.balance, 0.0);
        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.expense, 0.0);
    }

    #[test]
    fn balance_equals_income_minus_expense() {
        let totals = compute_totals(&scenario());
        assert_eq!(totals.income, 150.0);
        assert_eq!(totals.expense, 40.0);
        assert_eq!(totals.balance, totals.income - totals.expense);
        assert_eq!(totals.balance, 110.0);
    }

    #[test]
    fn totals_are_order_independent() {
        let forward = scenario();
        let mut reversed = scenario();
        reversed.reverse();

        let lhs = compute_totals(&forward);
        let rhs = compute_totals(&reversed);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn totals_are_idempotent_over_the_same_snapshot() {
        let snapshot = scenario();
        assert_eq!(compute_totals(&snapshot), compute_totals(&snapshot));
        assert_eq!(build_daily_series(&snapshot), build_daily_series(&snapshot));
    }

    #[test]
    fn savings_ratio_handles_zero_income_as_zero() {
        assert_eq!(savings_ratio(0.0, 500.0), 0.0);
        assert_eq!(savings_ratio(0.0, 0.0), 0.0);
    }

    #[test]
    fn savings_ratio_is_unclamped() {
        assert_eq!(savings_ratio(100.0, 20.0), 80.0);
        assert_eq!(savings_ratio(100.0, 120.0), -20.0);
    }

    #[test]
    fn display_ratio_clamps_to_percentage_bounds() {
        assert_eq!(display_ratio(-20.0), 0.0);
        assert_eq!(display_ratio(80.0), 80.0);
        assert_eq!(display_ratio(130.0), 100.0);
    }

    #[test]
    fn daily_series_groups_by_date_and_sorts_ascending() {
        let series = build_daily_series(&scenario());
        assert_eq!(series.len(), 2);

        assert_eq!(format_iso_date(&series[0].date), "2024-01-01");
        assert_eq!(series[0].income, 100.0);
        assert_eq!(series[0].expense, 40.0);
        assert_eq!(series[0].balance, 60.0);

        assert_eq!(format_iso_date(&series[1].date), "2024-01-02");
        assert_eq!(series[1].income, 50.0);
        assert_eq!(series[1].expense, 0.0);
        assert_eq!(series[1].balance, 50.0);
    }

    #[test]
    fn daily_series_bucket_count_matches_distinct_dates() {
        let snapshot = vec![
            txn(TransactionKind::Income, 10.0, "2024-03-05"),
            txn(TransactionKind::Expense, 5.0, "2024-03-05"),
            txn(TransactionKind::Income, 7.0, "2024-03-05"),
            txn(TransactionKind::Expense, 1.0, "2024-02-01"),
        ];
        assert_eq!(build_daily_series(&snapshot).len(), 2);
    }

    #[test]
    fn daily_series_is_order_independent() {
        let forward = scenario();
        let mut shuffled = scenario();
        shuffled.swap(0, 2);
        shuffled.swap(1, 2);

        assert_eq!(build_daily_series(&forward), build_daily_series(&shuffled));
    }

    #[test]
    fn removing_a_transaction_equals_computing_on_the_reduced_set() {
        let full = scenario();
        let reduced: Vec<_> = full
            .iter()
            .filter(|transaction| format_iso_date(&transaction.txn_date) != "2024-01-02")
            .cloned()
            .collect();

        let totals = compute_totals(&reduced);
        assert_eq!(totals.income, 100.0);
        assert_eq!(totals.expense, 40.0);
        assert_eq!(totals.balance, 60.0);
        assert_eq!(build_daily_series(&reduced).len(), 1);
    }

    #[test]
    fn category_split_is_two_fixed_entries() {
        let split = category_split(150.0, 40.0);
        assert_eq!(split[0].label, "Income");
        assert_eq!(split[0].value, 150.0);
        assert_eq!(split[1].label, "Expenses");
        assert_eq!(split[1].value, 40.0);
    }
}
