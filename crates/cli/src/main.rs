//! kanbancal CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kanbancal_cli::cli::Cli;
use kanbancal_cli::{app, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kanbancal=info,kanbancal_cli=info,kanbancal_core=info".into());
    let (json_layer, text_layer) = if cli.log_json {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let today = chrono::Local::now().date_naive();
    let output = app::run(cli.command, &config, cli.format, today)?;
    println!("{output}");

    Ok(())
}
