//! Output formatting for the CLI.

use clap::ValueEnum;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a command result: `text` for people, `value` as JSON.
pub fn print<T: Serialize>(text: &str, value: &T, format: &OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(_) => println!("{}", text),
        },
    }
}

/// Print an error message to stderr.
///
/// Messages are complete diagnostics, so text mode prints them as is.
pub fn print_error(message: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text => eprintln!("{}", message),
        OutputFormat::Json => eprintln!("{}", error_json(message)),
    }
}

fn error_json(message: &str) -> serde_json::Value {
    serde_json::json!({ "status": "error", "message": message })
}
