//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;

use clap::{Parser, Subcommand};
use commands::{
    BatchCommandInput, run_batch, run_config_show, run_info, run_light, run_mean, run_person,
    run_rename,
};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode};
use outcome_config::{AppConfig, load_app_config_std_env};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "outcome",
    version,
    about = "Explore optional values, recoverable errors, and validated people",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    /// Optional config file path (JSON/TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show build and version details.
    Info,
    /// Describe a traffic light by name (`red`, `green`, `yellow`).
    Light {
        /// Light name; matched exactly and case-sensitively.
        text: String,
    },
    /// Arithmetic mean of a list of integers.
    Mean {
        /// Values to average; none prints `no values`.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Validate a name/age pair into a person.
    Person {
        /// Person name (must be non-empty).
        #[arg(long)]
        name: String,
        /// Age text (integer between 1 and 120).
        #[arg(long, allow_hyphen_values = true)]
        age: String,
        /// Upper-case the name after validation.
        #[arg(long)]
        upper: bool,
    },
    /// Rename a valid person, keeping their age.
    Rename {
        /// Current name.
        #[arg(long)]
        name: String,
        /// Current age.
        #[arg(long, allow_negative_numbers = true)]
        age: i32,
        /// Replacement name.
        #[arg(long)]
        new_name: String,
    },
    /// Validate the configured batch of name/age pairs.
    Batch {
        /// Print failure causes instead of valid people.
        #[arg(long, conflicts_with = "strict")]
        errors: bool,
        /// Require every pair to be valid; stop at the first failure.
        #[arg(long)]
        strict: bool,
    },
    /// Config-related commands.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the effective config after file and env overrides.
    Show,
}

pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

impl CliOutput {
    pub(crate) const fn ok(stdout: String) -> Self {
        Self::with_exit_code(stdout, ExitCode::Ok)
    }

    pub(crate) const fn with_exit_code(stdout: String, exit_code: ExitCode) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code,
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_args(&cli.output);

    let config = match load_app_config_std_env(cli.config.as_deref()) {
        Ok(config) => config.into_inner(),
        Err(error) => return exit_with_error(&CliError::from(error)),
    };
    logging::init_tracing(&config.log);

    match run(&cli.command, mode, &config) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(command: &Commands, mode: OutputMode, config: &AppConfig) -> Result<CliOutput, CliError> {
    match command {
        Commands::Info => run_info(mode),
        Commands::Light { text } => run_light(mode, text),
        Commands::Mean { values } => run_mean(mode, values),
        Commands::Person { name, age, upper } => run_person(mode, name, age, *upper),
        Commands::Rename {
            name,
            age,
            new_name,
        } => run_rename(mode, name, *age, new_name),
        Commands::Batch { errors, strict } => {
            let projection = match (*errors, *strict) {
                (true, _) => BatchCommandInput::Errors,
                (false, true) => BatchCommandInput::Strict,
                (false, false) => BatchCommandInput::People,
            };
            run_batch(mode, &config.batch.people, projection)
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => run_config_show(mode, config),
        },
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    if !output.stdout.is_empty() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.stdout.as_bytes())?;
        stdout.flush()?;
    }
    if !output.stderr.is_empty() {
        let mut stderr = io::stderr().lock();
        stderr.write_all(output.stderr.as_bytes())?;
    }
    Ok(())
}
