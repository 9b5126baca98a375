//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(&config_path)?;
    debug!(path = %config_path.display(), "loaded configuration");

    // Flags and environment win over the config file
    let ctx = commands::Context {
        api_key: cli.api_key.or_else(|| config.api_key.clone()),
        base_url: cli.base_url,
        language: cli.language.or_else(|| config.language.clone()),
        currency: config.currency.clone(),
        output_format: cli
            .output
            .or(config.output_format)
            .unwrap_or(OutputFormat::Pretty),
        config_path,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Search(args) => commands::search::execute(ctx, args).await,
        Commands::Nearby(args) => commands::nearby::execute(ctx, args).await,
        Commands::Details(args) => commands::details::execute(ctx, args).await,
        Commands::Reviews(args) => commands::reviews::execute(ctx, args).await,
        Commands::Photos(args) => commands::photos::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `-v`
fn init_tracing(verbose: u8) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "warn,tripadvisor_client=info,tripadvisor_cli=info",
            2 => "info,tripadvisor_client=debug,tripadvisor_cli=debug",
            _ => "debug,tripadvisor_client=trace,tripadvisor_cli=trace",
        }
        .to_string()
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .compact()
        .try_init();
}
