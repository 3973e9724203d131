//! Output format helpers for CLI commands.

use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output format choices for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text output.
    Text,
    /// Machine-friendly JSON output.
    Json,
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for command responses.
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
    /// Shorthand for `--output json`.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Output mode derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub format: OutputFormat,
}

impl OutputMode {
    /// Build output mode from CLI flags.
    #[must_use]
    pub const fn from_args(args: &OutputArgs) -> Self {
        let format = match (args.output, args.json) {
            (Some(value), _) => value,
            (None, true) => OutputFormat::Json,
            (None, false) => OutputFormat::Text,
        };

        Self { format }
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Serialize a payload as pretty JSON with a trailing newline.
pub fn to_json_line<T: Serialize>(payload: &T) -> Result<String, serde_json::Error> {
    let mut output = serde_json::to_string_pretty(payload)?;
    output.push('\n');
    Ok(output)
}
