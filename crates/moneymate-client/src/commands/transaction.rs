use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, Utc};

use crate::ClientResult;
use crate::commands::common::load_setup;
use crate::contracts::SuccessEnvelope;
use crate::contracts::types::{
    TransactionAddData, TransactionListData, TransactionRemoveData,
};
use crate::dashboard::date::parse_iso_date_strict;
use crate::dashboard::types::TransactionKind;
use crate::error::ClientError;
use crate::ledger::persist::{NewTransaction, delete_transaction, insert_transaction};
use crate::ledger::query::list_transactions;
use crate::state::open_connection;

const ADD_COMMAND: &str = "txn add";

#[derive(Debug, Default)]
pub struct AddOptions<'a> {
    pub description: String,
    pub amount: f64,
    pub kind: String,
    pub date: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn add(
    description: &str,
    amount: f64,
    kind: &str,
    date: Option<&str>,
) -> ClientResult<SuccessEnvelope> {
    add_with_options(AddOptions {
        description: description.to_string(),
        amount,
        kind: kind.to_string(),
        date: date.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn add_with_options(options: AddOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let input = validate_add_input(&options)?;
    let setup = load_setup(options.home_override)?;
    let db_path = PathBuf::from(&setup.db_path);
    let connection = open_connection(&db_path)?;

    let row = insert_transaction(&connection, &db_path, &input)?;
    let data = TransactionAddData {
        message: format!(
            "Recorded {} of {:.2} on {}.",
            row.kind, row.amount, row.txn_date
        ),
        row,
    };

    SuccessEnvelope::wrap(ADD_COMMAND, data)
}

pub fn list() -> ClientResult<SuccessEnvelope> {
    list_with_home_override(None)
}

#[doc(hidden)]
pub fn list_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let db_path = PathBuf::from(&setup.db_path);
    let connection = open_connection(&db_path)?;

    let rows = list_transactions(&connection, &db_path)?;
    let data = TransactionListData {
        total: rows.len() as i64,
        rows,
    };

    SuccessEnvelope::wrap("txn list", data)
}

pub fn remove(txn_id: &str) -> ClientResult<SuccessEnvelope> {
    remove_with_home_override(txn_id, None)
}

#[doc(hidden)]
pub fn remove_with_home_override(
    txn_id: &str,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let setup = load_setup(home_override)?;
    let db_path = PathBuf::from(&setup.db_path);
    let connection = open_connection(&db_path)?;

    let existed = delete_transaction(&connection, &db_path, txn_id)?;
    if !existed {
        return Err(ClientError::transaction_not_found(txn_id));
    }

    let data = TransactionRemoveData {
        txn_id: txn_id.to_string(),
        message: format!("Removed transaction `{txn_id}`."),
    };

    SuccessEnvelope::wrap("txn remove", data)
}

fn validate_add_input(options: &AddOptions<'_>) -> ClientResult<NewTransaction> {
    let description = options.description.trim();
    if description.is_empty() {
        return Err(ClientError::invalid_argument_for_command(
            "`description` must not be empty.",
            Some(ADD_COMMAND),
        ));
    }

    if !options.amount.is_finite() {
        return Err(ClientError::invalid_argument_for_command(
            "`amount` must be a finite number.",
            Some(ADD_COMMAND),
        ));
    }
    // Sign is carried by `kind`, never by the value: a refund is an income
    // row, not a negative expense.
    if options.amount < 0.0 {
        return Err(ClientError::invalid_argument_for_command(
            "`amount` must not be negative; use `--kind income` or `--kind expense` to set direction.",
            Some(ADD_COMMAND),
        ));
    }

    let Some(kind) = TransactionKind::parse(&options.kind) else {
        return Err(ClientError::invalid_argument_for_command(
            "`kind` must be `income` or `expense`.",
            Some(ADD_COMMAND),
        ));
    };

    let txn_date = match options.date.as_deref() {
        Some(value) => parse_iso_date_strict(value, "date", ADD_COMMAND)?,
        None => today_utc(),
    };

    Ok(NewTransaction {
        description: description.to_string(),
        amount: options.amount,
        kind,
        txn_date,
    })
}

fn today_utc() -> NaiveDate {
    DateTime::<Utc>::from(SystemTime::now()).date_naive()
}
