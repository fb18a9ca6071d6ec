use clap::Parser;
use match_scout::utils::{logger, validation::Validate};
use match_scout::{render, CliConfig, ScoutEngine, VexDbClient};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting match-scout");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(2);
    }

    let client = match VexDbClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build API client: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    let engine = ScoutEngine::new(client, config);

    match engine.run().await {
        Ok(report) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            render(&report, &mut out)?;
            out.flush()?;
        }
        Err(e) => {
            tracing::error!("Scouting run failed: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
