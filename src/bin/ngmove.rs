//! Binary entry point for the ngmove CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Move an inline template out to hero.component.html
//! ngmove extract-template src/app/hero.component.ts
//!
//! # Move inline styles out to a sibling stylesheet (extension from angular.json)
//! ngmove extract-styles src/app/hero.component.ts
//!
//! # Inline a referenced template back, deleting the sibling without prompting
//! ngmove inline-template src/app/hero.component.ts --delete
//!
//! # Works from the sibling side too: derives the companion .ts file
//! ngmove inline-template src/app/hero.component.html
//! ngmove inline-styles src/app/hero.component.scss
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use ngmover::error::MoverError;
use ngmover::host::{ConfirmPolicy, FsHost};
use ngmover::ops;
use ngmover::output::{emit_response, ErrorReport, OpReport};
use ngmover::paths;

// ============================================================================
// CLI Structure
// ============================================================================

/// Move Angular component templates and styles between inline literals and
/// sibling files.
#[derive(Parser, Debug)]
#[command(name = "ngmove", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Parser, Debug)]
struct GlobalArgs {
    /// Log level for tracing output.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Output format for operation reports.
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Output format for operation reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable status messages on stderr (default).
    #[default]
    Text,
    /// JSON response envelope on stdout.
    Json,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Move an inline template out to a sibling .html file.
    ExtractTemplate {
        /// Component source file (.ts).
        file: PathBuf,
    },
    /// Move inline styles out to a sibling stylesheet.
    ExtractStyles {
        /// Component source file (.ts).
        file: PathBuf,
    },
    /// Inline a referenced template file back into the component.
    ///
    /// Accepts the component source or its .html sibling; the companion
    /// file is derived from the name.
    InlineTemplate {
        /// Component source file (.ts) or template sibling (.html).
        file: PathBuf,
        /// Delete the inlined sibling without prompting.
        #[arg(long)]
        delete: bool,
        /// Keep the inlined sibling without prompting.
        #[arg(long, conflicts_with = "delete")]
        keep: bool,
    },
    /// Inline referenced stylesheet files back into the component.
    ///
    /// Accepts the component source or one of its stylesheet siblings.
    InlineStyles {
        /// Component source file (.ts) or stylesheet sibling.
        file: PathBuf,
        /// Delete the inlined siblings without prompting.
        #[arg(long)]
        delete: bool,
        /// Keep the inlined siblings without prompting.
        #[arg(long, conflicts_with = "delete")]
        keep: bool,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.global.log_level);

    match execute(&cli) {
        Ok(report) => {
            if cli.global.format == OutputFormat::Json {
                let _ = emit_response(&report, &mut io::stdout());
                let _ = io::stdout().flush();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            match cli.global.format {
                OutputFormat::Json => {
                    let response = ErrorReport::from_error(&err);
                    let _ = emit_response(&response, &mut io::stdout());
                    let _ = io::stdout().flush();
                }
                OutputFormat::Text => eprintln!("error: {}", err),
            }
            ExitCode::from(err.error_code().code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Execute the CLI command.
fn execute(cli: &Cli) -> Result<OpReport, MoverError> {
    match &cli.command {
        Command::ExtractTemplate { file } => {
            let host = FsHost::new(ConfirmPolicy::Interactive);
            ops::extract_template(&host, file)
        }
        Command::ExtractStyles { file } => {
            let host = FsHost::new(ConfirmPolicy::Interactive);
            ops::extract_styles(&host, file)
        }
        Command::InlineTemplate { file, delete, keep } => {
            let host = FsHost::new(confirm_policy(*delete, *keep));
            if paths::is_template_file(file) {
                ops::inline_template_from_html(&host, file)
            } else {
                ops::inline_template(&host, file)
            }
        }
        Command::InlineStyles { file, delete, keep } => {
            let host = FsHost::new(confirm_policy(*delete, *keep));
            if paths::is_stylesheet_file(file) {
                ops::inline_styles_from_stylesheet(&host, file)
            } else {
                ops::inline_styles(&host, file)
            }
        }
    }
}

/// Map the --delete/--keep flags to a confirmation policy.
fn confirm_policy(delete: bool, keep: bool) -> ConfirmPolicy {
    if delete {
        ConfirmPolicy::AlwaysYes
    } else if keep {
        ConfirmPolicy::AlwaysNo
    } else {
        ConfirmPolicy::Interactive
    }
}
