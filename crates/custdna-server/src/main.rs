//! Customer DNA
//!
//! Classifies customer interactions and serves behavioral DNA profiles.

use anyhow::Result;
use clap::Parser;
use custdna_core::RawInteraction;
use custdna_server::cli::{Cli, Commands};
use custdna_server::config::{LogFormat, ServerConfig};
use custdna_server::{commands, run_server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            listen,
            port,
            data,
            verbose,
        } => {
            let mut server_config = ServerConfig::load(&config)?;
            server_config.apply_overrides(listen, port, data);

            telemetry::init_tracing(verbose, server_config.logging.format);
            info!("Starting Customer DNA");
            info!("Config file: {}", config);
            info!("Customer store: {}", server_config.data_path.display());

            let metrics_handle = telemetry::init_metrics()?;
            run_server(server_config, metrics_handle).await?;
        }

        Commands::Classify {
            channel,
            duration,
            content,
            date,
            seed,
            config,
        } => {
            let server_config = ServerConfig::load(&config)?;
            telemetry::init_tracing(false, LogFormat::Text);

            let raw = RawInteraction {
                channel: Some(channel),
                duration,
                content,
                date,
            };
            println!("{}", commands::classify(&server_config, raw, seed)?);
        }

        Commands::Profile {
            data,
            customer,
            view,
            config,
        } => {
            let server_config = ServerConfig::load(&config)?;
            telemetry::init_tracing(false, LogFormat::Text);

            println!(
                "{}",
                commands::profile(&server_config, &data, customer, view)?
            );
        }
    }

    Ok(())
}
