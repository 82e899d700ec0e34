use autostock::config::{AppConfig, setup_logging};
use autostock::pipeline::{Halt, RunOutcome};
use autostock::service::TogetherClient;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = autostock::cli::CliOptions::parse();

    if setup_logging(cli.debug).is_err() {
        return;
    }

    let config = AppConfig::from(&cli);

    let client = match TogetherClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build service client: {}", err);
            return;
        }
    };

    match autostock::pipeline::run(&config, &client, &client).await {
        Ok(RunOutcome::Finalized { image_path, record }) => {
            info!("Run complete: {} ({})", image_path.display(), record.filename);
        }
        Ok(RunOutcome::Halted(Halt::NoPrompt)) => {
            info!("Run ended without an asset: no prompt was generated");
        }
        Ok(RunOutcome::Halted(Halt::NoImage)) => {
            info!("Run ended without an asset: no image was generated");
        }
        Err(err) => {
            error!("Pipeline error: {}", err);
        }
    }
}
