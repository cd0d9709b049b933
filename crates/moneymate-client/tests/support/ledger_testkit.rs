#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use moneymate_client::commands::dashboard::{self, DashboardRunOptions};
use moneymate_client::commands::transaction::{self, AddOptions};
use serde_json::Value;
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("ledger-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

/// Records one transaction and returns its assigned txn id.
pub fn add_txn(
    home: &Path,
    description: &str,
    amount: f64,
    kind: &str,
    date: Option<&str>,
) -> String {
    let result = transaction::add_with_options(AddOptions {
        description: description.to_string(),
        amount,
        kind: kind.to_string(),
        date: date.map(std::string::ToString::to_string),
        home_override: Some(home),
    });
    assert!(result.is_ok());
    if let Ok(success) = result {
        let payload = serde_json::to_value(success);
        assert!(payload.is_ok());
        if let Ok(value) = payload {
            return value["data"]["row"]["txn_id"]
                .as_str()
                .unwrap_or_default()
                .to_string();
        }
    }
    String::new()
}

pub fn list_rows(home: &Path) -> Vec<Value> {
    let result = transaction::list_with_home_override(Some(home));
    assert!(result.is_ok());
    if let Ok(success) = result {
        let payload = serde_json::to_value(success);
        assert!(payload.is_ok());
        if let Ok(value) = payload {
            return value["data"]["rows"].as_array().cloned().unwrap_or_default();
        }
    }
    Vec::new()
}

pub fn dashboard_payload(home: &Path, from: Option<&str>, to: Option<&str>) -> Value {
    let result = dashboard::run_with_options(DashboardRunOptions {
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        home_override: Some(home),
    });
    assert!(result.is_ok());
    if let Ok(success) = result {
        let payload = serde_json::to_value(success);
        assert!(payload.is_ok());
        if let Ok(value) = payload {
            return value;
        }
    }
    Value::Null
}

pub fn dashboard_data(home: &Path, from: Option<&str>, to: Option<&str>) -> Value {
    dashboard_payload(home, from, to)["data"].clone()
}
