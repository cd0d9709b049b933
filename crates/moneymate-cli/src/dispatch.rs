use moneymate_client::commands;
use moneymate_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, TxnCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Txn { command } => match command {
            TxnCommand::Add {
                description,
                amount,
                kind,
                date,
                json: _,
            } => {
                let date_value = date.as_ref().map(|value| value.as_str());
                commands::transaction::add(description, *amount, kind, date_value)
            }
            TxnCommand::List { .. } => commands::transaction::list(),
            TxnCommand::Remove { txn_id, .. } => commands::transaction::remove(txn_id),
        },
        Commands::Dashboard { from, to, .. } => {
            let from_value = from.as_ref().map(|value| value.as_str());
            let to_value = to.as_ref().map(|value| value.as_str());
            commands::dashboard::run(from_value, to_value)
        }
    }
}
