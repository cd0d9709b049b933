use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_kind(value: &str) -> Result<String, String> {
    match value {
        "income" | "expense" => Ok(value.to_string()),
        _ => Err("kind must be one of: income, expense".to_string()),
    }
}

pub fn parse_amount(value: &str) -> Result<f64, String> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| "amount must be a number".to_string())?;
    if !parsed.is_finite() {
        return Err("amount must be a finite number".to_string());
    }
    if parsed < 0.0 {
        return Err("amount must not be negative; direction is set by --kind".to_string());
    }
    Ok(parsed)
}

/// Extended help shown after `moneymate txn add --help`.
pub const TXN_ADD_AFTER_HELP: &str = "\
How recording works:
  Every transaction is either income or expense; the amount itself is
  always a non-negative number. A refund is recorded as income, not as
  a negative expense.

Field rules:
  <description> (required):
    Free text describing the transaction.
    Example: `Groceries`

  <amount> (required):
    A non-negative number with at most 2 decimal places.
    Example: `42.15`

  --kind (required):
    `income` for money in, `expense` for money out.

  --date (optional):
    Ledger date, exactly `YYYY-MM-DD`. Defaults to today (UTC).
    Example: `2024-01-15`

What to do next:
  1. Run `moneymate txn list` to confirm the recorded row.
  2. Run `moneymate dashboard` to see updated totals and the daily series.
";

#[derive(Debug, Parser)]
#[command(
    name = "moneymate",
    version,
    about = "personal finance tracker",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record and manage ledger transactions
    #[command(arg_required_else_help = true)]
    Txn {
        #[command(subcommand)]
        command: TxnCommand,
    },
    /// Show aggregated balance, savings ratio, daily series and split
    Dashboard {
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TxnCommand {
    /// Record one income or expense transaction
    #[command(after_long_help = TXN_ADD_AFTER_HELP)]
    Add {
        /// Free-text description of the transaction
        description: String,
        /// Non-negative amount; direction is set by --kind
        #[arg(value_parser = parse_amount)]
        amount: f64,
        /// Transaction direction: income or expense
        #[arg(long, value_parser = parse_kind)]
        kind: String,
        /// Ledger date (YYYY-MM-DD); defaults to today
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<IsoDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List recorded transactions, newest ledger date first
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove a transaction by id
    Remove {
        /// The transaction id to remove (e.g. txn_abc123)
        txn_id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, TxnCommand, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 12] = [
            vec!["moneymate", "txn", "add", "Salary", "2500", "--kind", "income"],
            vec![
                "moneymate",
                "txn",
                "add",
                "Groceries",
                "42.15",
                "--kind",
                "expense",
                "--date",
                "2024-01-15",
            ],
            vec![
                "moneymate",
                "txn",
                "add",
                "Salary",
                "2500",
                "--kind",
                "income",
                "--json",
            ],
            vec!["moneymate", "txn", "list"],
            vec!["moneymate", "txn", "list", "--json"],
            vec!["moneymate", "txn", "remove", "txn_1"],
            vec!["moneymate", "txn", "remove", "txn_1", "--json"],
            vec!["moneymate", "dashboard"],
            vec!["moneymate", "dashboard", "--json"],
            vec!["moneymate", "dashboard", "--from", "2024-01-01"],
            vec![
                "moneymate",
                "dashboard",
                "--from",
                "2024-01-01",
                "--to",
                "2024-02-01",
            ],
            vec!["moneymate", "dashboard", "--to", "2024-02-01", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn add_rejects_negative_amounts_at_parse_time() {
        let parsed = parse_from([
            "moneymate", "txn", "add", "Refund", "--", "-10", "--kind", "income",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_rejects_unknown_kinds() {
        let parsed = parse_from([
            "moneymate", "txn", "add", "Mystery", "10", "--kind", "transfer",
        ]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn dashboard_rejects_malformed_dates() {
        let parsed = parse_from(["moneymate", "dashboard", "--from", "2024-1-1"]);
        assert!(parsed.is_err());

        let impossible = parse_from(["moneymate", "dashboard", "--from", "2024-02-31"]);
        assert!(impossible.is_err());
    }

    #[test]
    fn txn_without_subcommand_shows_help() {
        let parsed = parse_from(["moneymate", "txn"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn parsed_add_carries_the_default_date_as_none() {
        let parsed = parse_from([
            "moneymate", "txn", "add", "Coffee", "3.50", "--kind", "expense",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            if let Commands::Txn {
                command: TxnCommand::Add { date, amount, .. },
            } = cli.command
            {
                assert!(date.is_none());
                assert_eq!(amount, 3.5);
            } else {
                unreachable!("expected txn add");
            }
        }
    }
}
