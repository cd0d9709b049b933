use std::path::Path;

use rusqlite::params;

use crate::ClientResult;
use crate::dashboard::date::{format_iso_date, parse_stored_date};
use crate::dashboard::types::{DashboardFilter, LedgerTransaction, TransactionKind};
use crate::state::{map_sqlite_error, open_connection};

/// Loads the transaction snapshot the aggregator consumes.
///
/// Rows with a date or kind that no longer parses are skipped rather than
/// failing the pass; the write boundary validates both, so skips only ever
/// cover out-of-band edits to the database file.
pub fn load_snapshot(
    db_path: &Path,
    filter: &DashboardFilter,
) -> ClientResult<Vec<LedgerTransaction>> {
    let connection = open_connection(db_path)?;
    let mut statement = connection
        .prepare(
            "SELECT txn_id, description, amount, kind, txn_date
             FROM internal_transactions
             WHERE (?1 IS NULL OR txn_date >= ?1)
               AND (?2 IS NULL OR txn_date <= ?2)
             ORDER BY txn_date ASC, txn_id ASC",
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let from_bound = filter.from.as_ref().map(format_iso_date);
    let to_bound = filter.to.as_ref().map(format_iso_date);

    let rows_iter = statement
        .query_map(params![from_bound, to_bound], |row| {
            let txn_id: String = row.get(0)?;
            let description: String = row.get(1)?;
            let amount: f64 = row.get(2)?;
            let kind: String = row.get(3)?;
            let txn_date: String = row.get(4)?;
            Ok((txn_id, description, amount, kind, txn_date))
        })
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let mut snapshot: Vec<LedgerTransaction> = Vec::new();
    for row in rows_iter {
        let (txn_id, description, amount, kind, txn_date) =
            row.map_err(|error| map_sqlite_error(db_path, &error))?;
        let Some(parsed_kind) = TransactionKind::parse(&kind) else {
            continue;
        };
        let Some(parsed_date) = parse_stored_date(&txn_date) else {
            continue;
        };

        snapshot.push(LedgerTransaction {
            txn_id,
            description,
            amount,
            kind: parsed_kind,
            txn_date: parsed_date,
        });
    }

    Ok(snapshot)
}
