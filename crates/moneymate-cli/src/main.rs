mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use moneymate_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "MoneyMate - personal finance tracker

Usage:
  moneymate <command>

Start here:
  moneymate txn add --help
  moneymate txn list
  moneymate dashboard
";

const TOP_LEVEL_HELP: &str = "MoneyMate — personal finance tracker

USAGE: moneymate <command>

Record transactions:
  moneymate txn add <description> <amount> --kind income      Record money in
  moneymate txn add <description> <amount> --kind expense     Record money out
  moneymate txn add \"Groceries\" 42.15 --kind expense --date 2024-01-15

Review the ledger:
  moneymate txn list                                          List transactions, newest first
  moneymate txn remove <txn-id>                               Remove a transaction

See where you stand:
  moneymate dashboard                                         Balance, savings ratio, daily series
  moneymate dashboard --from 2024-01-01 --to 2024-01-31       Limit to a date window

Every command accepts --json for machine-readable output.

Having issues or errors?
  Run `moneymate txn add --help` for recording guidance,
  or `moneymate <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) && is_top_level_help_request(&raw_args)
                {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                parse_error_with_command_hint(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["txn", "add", ..] => Some("txn add"),
        ["txn", "list", ..] => Some("txn list"),
        ["txn", "remove", ..] => Some("txn remove"),
        ["txn", ..] => Some("txn"),
        ["dashboard", ..] => Some("dashboard"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn parse_error_with_command_hint(clean_message: &str, command_hint: Option<&str>) -> ClientError {
    // A leading minus on the amount reads as an unknown flag to the parser,
    // so surface the sign convention instead of the raw clap message.
    if command_hint == Some("txn add")
        && clean_message.contains("unexpected argument")
        && mentions_negative_number(clean_message)
    {
        return ClientError::invalid_argument_with_recovery(
            "Amounts are never negative; the direction is set by --kind.",
            vec![
                "Record money out as an expense: `moneymate txn add \"Rent\" 900 --kind expense`."
                    .to_string(),
                "Record a refund as income, not as a negative expense.".to_string(),
                "Run `moneymate txn add --help` for field rules.".to_string(),
            ],
        );
    }

    ClientError::invalid_argument_for_command(clean_message, command_hint)
}

/// True only for a quoted negative number (`'-10'`), not for arbitrary
/// unknown flags such as `'--foo'`.
fn mentions_negative_number(message: &str) -> bool {
    message.match_indices("'-").any(|(index, matched)| {
        message[index + matched.len()..]
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_digit())
    })
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_")
        || matches!(
            error.code.as_str(),
            "ledger_init_permission_denied"
                | "ledger_locked"
                | "ledger_corrupt"
                | "migration_failed"
                | "ledger_init_failed"
        )
}
