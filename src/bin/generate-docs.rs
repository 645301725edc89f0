use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use claudius_docs::cli::report_docs;
use claudius_docs::config::{
    DEFAULT_AGENTS_PATTERN, DEFAULT_COMMANDS_PATTERN, DEFAULT_DOCS_OUT_DIR,
    DEFAULT_MARKETPLACE_PATH, DEFAULT_SKILLS_PATTERN, DocsConfig, debug_enabled,
};
use claudius_docs::docs::generate_docs;
use claudius_docs::observability::{DEFAULT_LOG_LEVEL, TracingConfig, init_tracing};

#[derive(Parser)]
#[command(
    name = "generate-docs",
    about = "Generate agent, command, skill and plugin catalog pages"
)]
struct Cli {
    /// Directory the pages are written to.
    #[arg(long, env = "CLAUDIUS_DOCS_OUT", default_value = DEFAULT_DOCS_OUT_DIR)]
    out_dir: PathBuf,

    /// Path to the marketplace manifest.
    #[arg(long, env = "CLAUDIUS_MARKETPLACE", default_value = DEFAULT_MARKETPLACE_PATH)]
    marketplace: PathBuf,

    #[arg(long, default_value = DEFAULT_AGENTS_PATTERN)]
    agents: String,

    #[arg(long, default_value = DEFAULT_COMMANDS_PATTERN)]
    commands: String,

    #[arg(long, default_value = DEFAULT_SKILLS_PATTERN)]
    skills: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&TracingConfig::new(&cli.log_level).json(cli.json_logs)) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let config = DocsConfig::new()
        .with_out_dir(cli.out_dir)
        .with_marketplace_path(cli.marketplace)
        .with_agents_pattern(cli.agents)
        .with_commands_pattern(cli.commands)
        .with_skills_pattern(cli.skills);

    match generate_docs(config).await {
        Ok(counts) => match report_docs(&counts, &mut std::io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        Err(e) => {
            eprintln!("Documentation generation failed: {e}");
            if debug_enabled() {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}
