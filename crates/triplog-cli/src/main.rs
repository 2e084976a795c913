mod cli;
mod dispatch;
mod output;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use output::write_stdout_text;
use triplog_client::ClientError;

const ROOT_HELP: &str = "Triplog - driving trip ledger

Usage:
  triplog <command>

Start here:
  triplog trip add --date 2024-01-01 --amount 200
  triplog trip list
  triplog summary
";

const TOP_LEVEL_HELP: &str = "Triplog — driving trip ledger

USAGE: triplog <command>

Log trips:
  triplog trip add --date <YYYY-MM-DD> [--company <name>] [--vehicle <number>]
                   [--customer <name>] [--mobile <number>] [--location <place>]
                   [--type pickup|drop] [--amount <value>]

Review earnings:
  triplog trip list                                       List all trips, newest first
  triplog summary                                         Per-day trip counts and earnings
  triplog summary --from 2024-01-01 --to 2024-01-31       Limit the summary to a date range

Export and reset:
  triplog export                                          Write Driving_Trips.csv
  triplog export --out <path>                             Write the CSV somewhere else
  triplog trip clear --yes                                Remove every saved trip

Run `triplog <command> --help` for command usage.
Pass `--json` on data commands for machine-readable output.
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
                let body = if is_top_level_help_request(&raw_args) {
                    TOP_LEVEL_HELP.to_string()
                } else {
                    err.to_string()
                };
                if write_stdout_text(&body).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let command_hint = command_path_from_args(&raw_args);
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
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

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the failure layout's recovery steps are the single source of
/// guidance.
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
        ["trip", "add", ..] => Some("trip add"),
        ["trip", "list", ..] => Some("trip list"),
        ["trip", "clear", ..] => Some("trip clear"),
        ["trip", ..] => Some("trip"),
        ["summary", ..] => Some("summary"),
        ["export", ..] => Some("export"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_")
        || matches!(
            error.code.as_str(),
            "ledger_home_permission_denied" | "ledger_home_init_failed"
        )
}

#[cfg(test)]
mod tests {
    use triplog_client::ClientError;

    use super::{command_path_from_args, is_internal_error, strip_clap_boilerplate};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn command_hints_follow_the_subcommand_path() {
        assert_eq!(
            command_path_from_args(&args(&["triplog", "trip", "add", "--date"])),
            Some("trip add".to_string())
        );
        assert_eq!(
            command_path_from_args(&args(&["triplog", "summary", "--from", "bad"])),
            Some("summary".to_string())
        );
        assert_eq!(command_path_from_args(&args(&["triplog", "--json"])), None);
    }

    #[test]
    fn clap_boilerplate_is_stripped_from_parse_errors() {
        let message = "error: unexpected argument '--bogus'\n\nUsage: triplog trip add\n";
        assert_eq!(
            strip_clap_boilerplate(message),
            "error: unexpected argument '--bogus'"
        );
    }

    #[test]
    fn only_setup_failures_exit_with_code_two() {
        assert!(is_internal_error(&ClientError::ledger_home_init_failed(
            std::path::Path::new("/x"),
            "boom"
        )));
        assert!(!is_internal_error(&ClientError::missing_date()));
        assert!(!is_internal_error(&ClientError::empty_export()));
    }
}
