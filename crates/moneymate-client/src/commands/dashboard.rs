use std::path::{Path, PathBuf};

use crate::ClientResult;
use crate::commands::common::{data_range_hint, load_setup};
use crate::contracts::SuccessEnvelope;
use crate::contracts::types::{
    DailyPoint, DashboardData, SavingsData, SplitSlice, TotalsData,
};
use crate::dashboard::aggregate::{
    build_daily_series, category_split, compute_totals, display_ratio, round_to, savings_ratio,
};
use crate::dashboard::date::{build_filter, format_iso_date};
use crate::dashboard::query::load_snapshot;

#[derive(Debug, Default)]
pub struct DashboardRunOptions<'a> {
    pub from: Option<String>,
    pub to: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(from: Option<&str>, to: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(DashboardRunOptions {
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: DashboardRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(options.home_override)?;
    let filter = build_filter(options.from.as_deref(), options.to.as_deref(), "dashboard")?;
    let db_path = PathBuf::from(&setup.db_path);
    let snapshot = load_snapshot(&db_path, &filter)?;

    let totals = compute_totals(&snapshot);
    let ratio = savings_ratio(totals.income, totals.expense);
    let series = build_daily_series(&snapshot);
    let split = category_split(totals.income, totals.expense);

    let data = DashboardData {
        from: filter.from.as_ref().map(format_iso_date),
        to: filter.to.as_ref().map(format_iso_date),
        transaction_count: snapshot.len() as i64,
        totals: TotalsData {
            balance: round_to(totals.balance, 2),
            income: round_to(totals.income, 2),
            expense: round_to(totals.expense, 2),
        },
        savings: SavingsData {
            ratio: round_to(ratio, 2),
            display_ratio: round_to(display_ratio(ratio), 2),
        },
        daily_series: series
            .iter()
            .map(|bucket| DailyPoint {
                date: format_iso_date(&bucket.date),
                income: round_to(bucket.income, 2),
                expense: round_to(bucket.expense, 2),
                balance: round_to(bucket.balance, 2),
            })
            .collect(),
        split: split
            .iter()
            .map(|entry| SplitSlice {
                label: entry.label.to_string(),
                value: round_to(entry.value, 2),
            })
            .collect(),
        data_range_hint: data_range_hint(&setup.data_range),
    };

    SuccessEnvelope::wrap("dashboard", data)
}
