use std::path::Path;

use rusqlite::Connection;

use crate::ClientResult;
use crate::contracts::types::TransactionRow;
use crate::state::map_sqlite_error;

/// Lists every transaction, newest ledger date first, then newest-created
/// first within a date.
pub(crate) fn list_transactions(
    connection: &Connection,
    db_path: &Path,
) -> ClientResult<Vec<TransactionRow>> {
    let mut statement = connection
        .prepare(
            "SELECT txn_id, description, amount, kind, txn_date, created_at
             FROM internal_transactions
             ORDER BY txn_date DESC, created_at DESC, txn_id DESC",
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let rows_iter = statement
        .query_map([], |row| {
            Ok(TransactionRow {
                txn_id: row.get(0)?,
                description: row.get(1)?,
                amount: row.get(2)?,
                kind: row.get(3)?,
                txn_date: row.get(4)?,
                created_at: row.get(5)?,
            })
        })
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let mut rows = Vec::new();
    for row in rows_iter {
        rows.push(row.map_err(|error| map_sqlite_error(db_path, &error))?);
    }

    Ok(rows)
}
