use rusqlite::Connection;
use rusqlite_migration::{M, Migrations};

const BOOTSTRAP_SQL: &str = include_str!("migrations/0001_bootstrap.sql");

pub const EXPECTED_USER_VERSION: i64 = 1;

pub const REQUIRED_INDEX_NAMES: [&str; 2] = [
    "idx_internal_transactions_txn_date",
    "idx_internal_transactions_created_at_desc",
];

pub const REQUIRED_META_KEYS: [(&str, &str); 2] = [
    ("schema_version", "v1"),
    ("ledger_contract_version", "v1"),
];

pub fn run_pending(conn: &mut Connection) -> rusqlite_migration::Result<()> {
    let migrations = Migrations::new(vec![M::up(BOOTSTRAP_SQL)]);
    migrations.to_latest(conn)
}

#[cfg(test)]
mod tests {
    use super::{BOOTSTRAP_SQL, REQUIRED_INDEX_NAMES, REQUIRED_META_KEYS};

    #[test]
    fn bootstrap_sql_creates_every_required_object() {
        for index_name in REQUIRED_INDEX_NAMES {
            assert!(BOOTSTRAP_SQL.contains(index_name));
        }
        for (meta_key, _) in REQUIRED_META_KEYS {
            assert!(BOOTSTRAP_SQL.contains(meta_key));
        }
        assert!(BOOTSTRAP_SQL.contains("internal_transactions"));
    }
}
