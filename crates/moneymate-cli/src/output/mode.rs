use crate::cli::{Commands, TxnCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Txn { command } => match command {
            TxnCommand::Add { json, .. }
            | TxnCommand::List { json }
            | TxnCommand::Remove { json, .. } => *json,
        },
        Commands::Dashboard { json, .. } => *json,
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn mode_uses_json_for_txn_add_with_json_flag() {
        let parsed = parse_from([
            "moneymate", "txn", "add", "Salary", "2500", "--kind", "income", "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }
    }

    #[test]
    fn mode_uses_json_for_txn_list_with_json_flag() {
        let parsed = parse_from(["moneymate", "txn", "list", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }
    }

    #[test]
    fn mode_uses_json_for_txn_remove_with_json_flag() {
        let parsed = parse_from(["moneymate", "txn", "remove", "txn_1", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }
    }

    #[test]
    fn mode_uses_json_for_dashboard_with_json_flag() {
        let parsed = parse_from(["moneymate", "dashboard", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }
    }

    #[test]
    fn mode_uses_text_for_commands_without_json_flag() {
        let list = parse_from(["moneymate", "txn", "list"]);
        assert!(list.is_ok());
        if let Ok(cli) = list {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }

        let dashboard = parse_from(["moneymate", "dashboard", "--from", "2024-01-01"]);
        assert!(dashboard.is_ok());
        if let Ok(cli) = dashboard {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }
}
