use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use rusqlite::{Connection, params};
use ulid::Ulid;

use crate::ClientResult;
use crate::contracts::types::TransactionRow;
use crate::dashboard::date::format_iso_date;
use crate::dashboard::types::TransactionKind;
use crate::state::map_sqlite_error;

#[derive(Debug, Clone)]
pub(crate) struct NewTransaction {
    pub(crate) description: String,
    pub(crate) amount: f64,
    pub(crate) kind: TransactionKind,
    pub(crate) txn_date: NaiveDate,
}

pub(crate) fn insert_transaction(
    connection: &Connection,
    db_path: &Path,
    input: &NewTransaction,
) -> ClientResult<TransactionRow> {
    let txn_id = format!("txn_{}", Ulid::new());
    let txn_date = format_iso_date(&input.txn_date);
    let created_at = now_timestamp();

    connection
        .execute(
            "INSERT INTO internal_transactions (
                txn_id,
                description,
                amount,
                kind,
                txn_date,
                created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &txn_id,
                &input.description,
                input.amount,
                input.kind.as_str(),
                &txn_date,
                &created_at
            ],
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    Ok(TransactionRow {
        txn_id,
        description: input.description.clone(),
        amount: input.amount,
        kind: input.kind.as_str().to_string(),
        txn_date,
        created_at,
    })
}

/// Deletes one transaction. Returns whether a row actually existed.
pub(crate) fn delete_transaction(
    connection: &Connection,
    db_path: &Path,
    txn_id: &str,
) -> ClientResult<bool> {
    let affected = connection
        .execute(
            "DELETE FROM internal_transactions WHERE txn_id = ?1",
            params![txn_id],
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    Ok(affected > 0)
}

pub(crate) fn now_timestamp() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH);
    match now {
        Ok(duration) => format!("{}", duration.as_secs()),
        Err(_) => "0".to_string(),
    }
}
