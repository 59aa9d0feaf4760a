use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use ledger_client::MemoryLedger;
use session_store::MemorySessionStore;
use user_directory::MemoryUserDirectory;
use ussd_core::EngineConfig;
use ussd_engine::UssdEngine;

use crate::controllers::{system_controller, ussd_controller};

pub struct AppState {
    pub engine: Arc<UssdEngine>,
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(ussd_controller::config)
        .configure(system_controller::config);
}

/// Run the callback server with in-memory collaborators, the wiring used
/// for development and single-instance deployments.
pub async fn run(port: u16) -> Result<(), String> {
    tracing::info!(port, "starting USSD callback service");

    let engine = Arc::new(UssdEngine::new(
        Arc::new(MemorySessionStore::new()),
        Arc::new(MemoryUserDirectory::new()),
        Arc::new(MemoryLedger::new()),
        EngineConfig::from_env(),
    ));
    let app_state = web::Data::new(AppState { engine });

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .configure(app_config)
    })
    .bind(("0.0.0.0", port))
    .map_err(|e| format!("failed to bind port {port}: {e}"))?
    .run()
    .await
    .map_err(|e| format!("server error: {e}"))
}
