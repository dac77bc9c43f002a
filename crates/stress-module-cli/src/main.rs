// crates/stress-module-cli/src/main.rs
// ============================================================================
// Module: Stress Module CLI Entry Point
// Description: Host harness for listing and querying stress items.
// Purpose: Exercise the stress module the way a monitoring host's test mode does.
// Dependencies: clap, serde, serde_json, stress-module-*, thiserror, tracing
// ============================================================================

//! ## Overview
//! `stress-module` loads configuration, initializes the module once, runs one
//! command, and shuts the module down. `list` prints the capability listing,
//! `query` answers a single item key string, and `print` queries every item
//! with its example parameters. Logs go to stderr; results go to stdout.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use stress_module_config::ConfigError;
use stress_module_config::StressModuleConfig;
use stress_module_core::ItemError;
use stress_module_core::ItemMetadata;
use stress_module_core::ItemProvider;
use stress_module_core::ItemRequest;
use stress_module_core::ItemValue;
use stress_module_core::RequestParseError;
use stress_module_items::ModuleError;
use stress_module_items::ModuleSettings;
use stress_module_items::StressModule;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "stress-module", version, disable_help_subcommand = true)]
struct Cli {
    /// Config file path (defaults to `STRESS_MODULE_CONFIG`, then `stress-module.toml`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported items with their example parameters.
    List,
    /// Query one item key string, for example `stress.random[1,10]`.
    Query {
        /// Item key string.
        item: String,
    },
    /// Query every item with its example parameters.
    Print,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One line per item.
    Text,
    /// Pretty-printed JSON.
    Json,
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Outcome of one item query.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum QueryOutcome {
    /// The item produced a value.
    Ok {
        /// Produced value.
        result: ItemValue,
    },
    /// The item failed.
    NotSupported {
        /// Failure detail.
        error: ItemError,
        /// Host-facing failure message.
        message: String,
    },
}

/// One queried item and its outcome.
#[derive(Debug, Serialize)]
struct QueryReport {
    /// Item key string as queried.
    item: String,
    /// Query outcome.
    #[serde(flatten)]
    outcome: QueryOutcome,
}

impl QueryReport {
    /// Builds a report from a query result.
    fn new(item: String, result: Result<ItemValue, ItemError>) -> Self {
        let outcome = match result {
            Ok(result) => QueryOutcome::Ok {
                result,
            },
            Err(error) => QueryOutcome::NotSupported {
                message: error.to_string(),
                error,
            },
        };
        Self {
            item,
            outcome,
        }
    }

    /// Returns true when the item failed.
    const fn failed(&self) -> bool {
        matches!(self.outcome, QueryOutcome::NotSupported { .. })
    }

    /// Renders the report as `<item> [<kind>|<value>]`.
    fn to_text(&self) -> String {
        match &self.outcome {
            QueryOutcome::Ok {
                result,
            } => format!("{} [{}|{}]", self.item, result.kind(), result),
            QueryOutcome::NotSupported {
                message, ..
            } => format!("{} [not_supported|{}]", self.item, message),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI failures.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration could not be loaded.
    #[error("failed to load config: {0}")]
    Config(#[from] ConfigError),
    /// The module could not be initialized.
    #[error("failed to initialize module: {0}")]
    Module(#[from] ModuleError),
    /// The item key string is malformed.
    #[error("invalid item key string: {0}")]
    Request(#[from] RequestParseError),
    /// The log subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    /// Output could not be rendered or written.
    #[error("failed to write output: {0}")]
    Output(String),
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Loads config, runs one command, and shuts the module down.
fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = StressModuleConfig::load(cli.config.as_deref())?;
    init_tracing(&config.logging.filter)?;
    let module = StressModule::init(ModuleSettings {
        sentinel_path: config.module.sentinel_path(),
        seed: config.random.seed,
    })?;
    module.set_item_timeout(config.module.item_timeout_secs);

    tracing::debug!(
        item_timeout = config.module.item_timeout_secs,
        seeded = config.random.seed.is_some(),
        "configuration applied"
    );

    let mut stdout = std::io::stdout().lock();
    let outcome = match &cli.command {
        Commands::List => command_list(&module, cli.format, &mut stdout),
        Commands::Query {
            item,
        } => command_query(&module, item, cli.format, &mut stdout),
        Commands::Print => command_print(&module, cli.format, &mut stdout),
    };
    module.shutdown();
    if outcome? { Ok(ExitCode::SUCCESS) } else { Ok(ExitCode::FAILURE) }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides `directive`.
fn init_tracing(directive: &str) -> CliResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(directive).map_err(|err| CliError::Logging(err.to_string()))?
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes `list`.
fn command_list(
    provider: &dyn ItemProvider,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<bool> {
    let items = provider.item_list();
    match format {
        OutputFormat::Json => write_json(out, &items)?,
        OutputFormat::Text => {
            for item in &items {
                write_line(out, &render_item(item))?;
            }
        }
    }
    Ok(true)
}

/// Executes `query`; returns false when the item fails.
fn command_query(
    provider: &dyn ItemProvider,
    item: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<bool> {
    let request = ItemRequest::parse(item)?;
    let report = query_request(provider, item.to_string(), &request);
    write_reports(out, format, std::slice::from_ref(&report))?;
    Ok(!report.failed())
}

/// Executes `print`.
fn command_print(
    provider: &dyn ItemProvider,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<bool> {
    let mut reports = Vec::new();
    for item in provider.item_list() {
        let test_key = item.test_key();
        let request = ItemRequest::parse(&test_key)?;
        reports.push(query_request(provider, test_key, &request));
    }
    write_reports(out, format, &reports)?;
    Ok(true)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Dispatches a parsed request through the provider.
fn query_request(provider: &dyn ItemProvider, item: String, request: &ItemRequest) -> QueryReport {
    QueryReport::new(item, provider.query(request.key().as_str(), request.params()))
}

/// Renders one listing line: key, parameter flag, and example.
fn render_item(item: &ItemMetadata) -> String {
    let params = if item.requires_params { "params" } else { "no_params" };
    format!("{} [{}|{}]", item.key, params, item.test_key())
}

/// Writes reports in the selected format.
fn write_reports(out: &mut impl Write, format: OutputFormat, reports: &[QueryReport]) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Text => {
            for report in reports {
                write_line(out, &report.to_text())?;
            }
            Ok(())
        }
    }
}

/// Writes a value as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> CliResult<()> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|err| CliError::Output(err.to_string()))?;
    write_line(out, &rendered)
}

/// Writes one line.
fn write_line(out: &mut impl Write, line: &str) -> CliResult<()> {
    writeln!(out, "{line}").map_err(|err| CliError::Output(err.to_string()))
}

/// Writes an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(&mut stderr, "{message}");
    ExitCode::FAILURE
}
