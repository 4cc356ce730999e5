//! Engine initialization from server configuration

use crate::config::ServerConfig;
use anyhow::Result;
use callshield_sdk::{ShieldEngine, ShieldEngineBuilder};
use tracing::{info, warn};

/// Build the engine, loading the seed file if one is configured
pub async fn init_engine(config: &ServerConfig) -> Result<ShieldEngine> {
    let engine_config = config.engine_config();

    match &engine_config.seed_file {
        Some(path) if !path.exists() => {
            return Err(anyhow::anyhow!("Seed file {:?} does not exist", path));
        }
        Some(path) => info!("Seeding engine from {:?}", path),
        None => warn!("No seed file configured, starting with an empty rule set"),
    }

    let engine = ShieldEngineBuilder::new()
        .with_config(engine_config)
        .build()
        .await?;

    let stats = engine.stats();
    info!(
        "Engine ready: {} rules, {} blacklisted numbers",
        stats.active_rules, stats.blacklist_count
    );

    Ok(engine)
}
