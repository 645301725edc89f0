use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use claudius_docs::cli::{panic_message, report_validation};
use claudius_docs::config::{DEFAULT_MARKETPLACE_PATH, ValidatorConfig, debug_enabled};
use claudius_docs::observability::{DEFAULT_LOG_LEVEL, TracingConfig, init_tracing};
use claudius_docs::plugins::PluginValidator;

#[derive(Parser)]
#[command(
    name = "validate-plugins",
    about = "Validate plugin descriptors against the marketplace manifest"
)]
struct Cli {
    /// List skipped data/ references.
    #[arg(short, long)]
    verbose: bool,

    /// Path to the marketplace manifest.
    #[arg(long, env = "CLAUDIUS_MARKETPLACE", default_value = DEFAULT_MARKETPLACE_PATH)]
    marketplace: PathBuf,

    /// Directory plugin sources are resolved against.
    #[arg(long, env = "CLAUDIUS_ROOT")]
    root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&TracingConfig::new(&cli.log_level).json(cli.json_logs)) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let config = ValidatorConfig::new()
        .with_marketplace_path(cli.marketplace)
        .with_root_dir(cli.root.unwrap_or_default())
        .verbose(cli.verbose);
    let validator = PluginValidator::new(config);

    let result = catch_unwind(AssertUnwindSafe(|| validator.validate()))
        .map_err(|payload| anyhow::anyhow!(panic_message(payload.as_ref())));

    let code = report_validation(
        result,
        cli.verbose,
        debug_enabled(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .unwrap_or(claudius_docs::cli::EXIT_FAILURE);

    ExitCode::from(code)
}
