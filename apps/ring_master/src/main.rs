use std::sync::Arc;

use dotenvy::{dotenv, from_filename};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::RingMasterConfig,
    core::domain::{models::AppError, services::RingService},
    infrastructure::{adapters::controllers::ScriptController, di::RingMasterModule},
};

pub mod config;
pub mod core;
pub mod infrastructure;


fn load_env_for_workspace() {
    let _ = from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
    let _ = from_filename(".env");
}

fn log_distribution(ring_service: &dyn RingService) {
    for load in ring_service.distribution() {
        info!(
            node = %load.node_id,
            position = load.position,
            keys = load.keys,
            "ring node"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();

    load_env_for_workspace();

    let cfg = RingMasterConfig::from_env()?;

    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let module = Arc::new(RingMasterModule::build_from_config(&cfg)?);

    info!(
        nodes = cfg.nodes.len(),
        items = cfg.data.len(),
        space_size = cfg.ring.space_size,
        spacing = ?cfg.ring.spacing,
        "Ring built"
    );
    log_distribution(module.ring_service.as_ref());

    let controller = ScriptController::new(module.clone());

    if cfg.sample_keys > 0 {
        let keys = (0..cfg.sample_keys).map(|i| format!("key-{i}")).collect();
        let stored = controller.assign_concurrently(keys).await?;
        info!("Assigned {stored} sample keys");
    }

    for command in cfg.script {
        match controller.handle(command.clone()).await {
            Ok(summary) => info!("{summary}"),
            Err(e) => warn!("{command:?} failed: {e}"),
        }
    }

    log_distribution(module.ring_service.as_ref());

    Ok(())
}
