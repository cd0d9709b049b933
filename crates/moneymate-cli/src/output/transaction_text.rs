use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_add(data: &Value) -> io::Result<String> {
    let row = data
        .get("row")
        .ok_or_else(|| io::Error::other("txn add output requires a row"))?;

    let message = data
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Transaction recorded.");

    let entries = [
        ("Id:", field(row, "txn_id")),
        ("Description:", field(row, "description")),
        ("Amount:", money_field(row, "amount")),
        ("Kind:", field(row, "kind")),
        ("Date:", field(row, "txn_date")),
    ];

    let mut lines = vec![message.to_string(), String::new()];
    lines.extend(format::key_value_rows(&entries, 2));
    lines.push(String::new());
    lines.push("What to do next:".to_string());
    lines.push("  1. Run `moneymate txn list` to review the ledger.".to_string());
    lines.push("  2. Run `moneymate dashboard` to see updated totals.".to_string());

    Ok(lines.join("\n"))
}

pub fn render_list(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("txn list output requires rows"))?;

    if rows.is_empty() {
        return Ok([
            "No transactions recorded yet.",
            "",
            "Record your first one:",
            "  moneymate txn add \"Salary\" 2500 --kind income",
            "  moneymate txn add \"Groceries\" 42.15 --kind expense",
        ]
        .join("\n"));
    }

    let total = data.get("total").and_then(Value::as_i64).unwrap_or(0);
    let noun = if total == 1 {
        "transaction"
    } else {
        "transactions"
    };

    let mut lines = vec![format!("{total} {noun}, newest first:"), String::new()];

    let columns = [
        Column {
            name: "Id",
            align: Align::Left,
        },
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Kind",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Description",
            align: Align::Left,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                field(row, "txn_id"),
                field(row, "txn_date"),
                field(row, "kind"),
                money_field(row, "amount"),
                field(row, "description"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}

pub fn render_remove(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("txn remove output requires a message"))?;

    Ok([
        message,
        "",
        "Run `moneymate dashboard` to see recomputed totals.",
    ]
    .join("\n"))
}

fn field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn money_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_f64)
        .map(format::format_money)
        .unwrap_or_else(|| "unknown".to_string())
}
