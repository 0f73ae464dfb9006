use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use contract_loader::{Bootstrap, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (also loads .env)
    let config = Config::load().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    info!("Configuration loaded successfully");

    let bootstrap = Bootstrap::init(config).context("Failed to initialize blockchain client")?;

    if bootstrap.config.rpc.verify_connection {
        let block = bootstrap.client.check_connection().await?;
        info!("Connected to {}, latest block {}", bootstrap.client.rpc_url(), block);

        if let Some(expected) = bootstrap.config.rpc.chain_id {
            let actual = bootstrap.client.chain_id().await?;
            if actual != expected {
                warn!("Chain id mismatch: configured {}, node reports {}", expected, actual);
            }
        }
    }

    if bootstrap.config.contracts.is_empty() {
        info!("No contracts configured");
    }

    for spec in &bootstrap.config.contracts {
        match bootstrap.bind_contract(spec) {
            Ok(contract) => {
                info!(
                    "Contract {} at {:?}: functions {:?}, events {:?}",
                    contract.name(),
                    contract.address(),
                    contract.list_functions(),
                    contract.list_events()
                );
            }
            Err(e) => {
                error!("Failed to bind contract {}: {}", spec.name, e);
                return Err(e.into());
            }
        }
    }

    info!("Bootstrap complete");
    Ok(())
}
