use std::path::Path;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `triplog {cmd} --help` for usage."),
            None => "Run `triplog --help` for usage.".to_string(),
        };
        Self::new("invalid_argument", message, vec![help_hint])
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn missing_date() -> Self {
        Self::new(
            "missing_date",
            "A trip needs a date before it can be logged.",
            vec!["Re-run `triplog trip add` with `--date YYYY-MM-DD`.".to_string()],
        )
    }

    pub fn empty_export() -> Self {
        Self::new(
            "empty_export",
            "There are no trips to export.",
            vec![
                "Log a trip first: `triplog trip add --date YYYY-MM-DD`.".to_string(),
                "Then re-run `triplog export`.".to_string(),
            ],
        )
    }

    pub fn confirmation_required() -> Self {
        Self::new(
            "confirmation_required",
            "`triplog trip clear` removes every saved trip and cannot be undone.",
            vec!["Re-run with `--yes` to confirm.".to_string()],
        )
    }

    pub fn export_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_write_failed",
            &format!("Could not write the CSV export to `{location}`: {detail}"),
            vec![format!(
                "Pick a writable destination with `--out` or grant write access to `{location}`."
            )],
        )
    }

    pub fn ledger_home_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_home_permission_denied",
            &format!("Cannot prepare the trip ledger directory at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `TRIPLOG_HOME` to a writable directory."
            )],
        )
    }

    pub fn ledger_home_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_home_init_failed",
            &format!("Trip ledger initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
