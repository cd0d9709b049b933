use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

const SAVINGS_BAR_CELLS: usize = 20;

pub fn render_dashboard(data: &Value) -> io::Result<String> {
    let count = data
        .get("transaction_count")
        .and_then(Value::as_i64)
        .ok_or_else(|| io::Error::other("dashboard output requires a transaction count"))?;

    if count == 0 {
        return Ok([
            "Nothing to show yet.",
            "",
            "The dashboard fills in as soon as you record transactions:",
            "  moneymate txn add \"Salary\" 2500 --kind income",
            "  moneymate txn add \"Groceries\" 42.15 --kind expense",
        ]
        .join("\n"));
    }

    let mut lines = vec![heading(count, data), String::new(), "Totals:".to_string()];

    let totals = data.get("totals").cloned().unwrap_or(Value::Null);
    lines.extend(format::key_value_rows(
        &[
            ("Balance:", money(&totals, "balance")),
            ("Income:", money(&totals, "income")),
            ("Expenses:", money(&totals, "expense")),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push(savings_line(data));

    let series = data
        .get("daily_series")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !series.is_empty() {
        lines.push(String::new());
        lines.push("Daily activity:".to_string());
        lines.extend(daily_table(&series));
    }

    let split = data
        .get("split")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !split.is_empty() {
        lines.push(String::new());
        lines.push("Split:".to_string());
        let entries = split
            .iter()
            .map(|slice| {
                let label = slice
                    .get("label")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown");
                (format!("{label}:"), money(slice, "value"))
            })
            .collect::<Vec<(String, String)>>();
        let borrowed = entries
            .iter()
            .map(|(label, value)| (label.as_str(), value.clone()))
            .collect::<Vec<(&str, String)>>();
        lines.extend(format::key_value_rows(&borrowed, 2));
    }

    if let Some(range_hint) = data.get("data_range_hint") {
        let earliest = range_hint.get("earliest").and_then(Value::as_str);
        let latest = range_hint.get("latest").and_then(Value::as_str);
        if earliest.is_some() || latest.is_some() {
            lines.push(String::new());
            lines.push(format!(
                "Ledger covers {} to {}.",
                earliest.unwrap_or("unknown"),
                latest.unwrap_or("unknown")
            ));
        }
    }

    Ok(lines.join("\n"))
}

fn heading(count: i64, data: &Value) -> String {
    let noun = if count == 1 {
        "transaction"
    } else {
        "transactions"
    };
    let from = data.get("from").and_then(Value::as_str);
    let to = data.get("to").and_then(Value::as_str);

    match (from, to) {
        (Some(from), Some(to)) => format!("Dashboard for {from} to {to} ({count} {noun}):"),
        (Some(from), None) => format!("Dashboard from {from} ({count} {noun}):"),
        (None, Some(to)) => format!("Dashboard through {to} ({count} {noun}):"),
        (None, None) => format!("Dashboard ({count} {noun}):"),
    }
}

/// One line with the raw ratio and a bar scaled by the clamped display
/// ratio, so overspending reads as an empty bar with a negative label.
fn savings_line(data: &Value) -> String {
    let savings = data.get("savings").cloned().unwrap_or(Value::Null);
    let ratio = savings.get("ratio").and_then(Value::as_f64).unwrap_or(0.0);
    let display = savings
        .get("display_ratio")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    let filled = ((display / 100.0) * SAVINGS_BAR_CELLS as f64).round() as usize;
    let filled = filled.min(SAVINGS_BAR_CELLS);
    let bar = format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(SAVINGS_BAR_CELLS - filled)
    );

    format!("Savings ratio: {ratio:.1}%  {bar}")
}

fn daily_table(series: &[Value]) -> Vec<String> {
    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Income",
            align: Align::Right,
        },
        Column {
            name: "Expenses",
            align: Align::Right,
        },
        Column {
            name: "Balance",
            align: Align::Right,
        },
    ];

    let rows = series
        .iter()
        .map(|point| {
            vec![
                point
                    .get("date")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                money(point, "income"),
                money(point, "expense"),
                money(point, "balance"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    format::render_table(&columns, &rows)
}

fn money(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_f64)
        .map(format::format_money)
        .unwrap_or_else(|| "unknown".to_string())
}
