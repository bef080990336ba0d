use crate::output_utils;
use std::process::ExitCode;

/// What a finished command prints, and how the process should exit.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failure, rendered with its full chain of context.
    pub fn error(err: &anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {err:#}", output_utils::RED_X))
    }

    /// Pretty-printed JSON on stdout.
    pub fn json(value: &serde_json::Value) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(json) => Self::stdout(format_args!("{json}")),
            Err(err) => Self::error(&err.into()),
        }
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
