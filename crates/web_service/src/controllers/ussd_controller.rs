//! The gateway callback endpoint

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use ussd_core::InboundTurn;

use crate::server::AppState;

/// Form body the gateway posts on every keystroke. Field names follow the
/// gateway's camelCase convention; `text` is absent on the very first turn.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UssdCallbackForm {
    pub session_id: String,
    pub service_code: String,
    pub phone_number: String,
    pub network_code: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl From<UssdCallbackForm> for InboundTurn {
    fn from(form: UssdCallbackForm) -> Self {
        InboundTurn {
            session_id: form.session_id,
            phone_number: form.phone_number,
            service_code: form.service_code,
            network_code: form.network_code.unwrap_or_default(),
            text: form.text,
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/ussd", web::post().to(ussd_callback));
}

async fn ussd_callback(
    state: web::Data<AppState>,
    form: web::Form<UssdCallbackForm>,
) -> HttpResponse {
    let turn = InboundTurn::from(form.into_inner());
    tracing::info!(
        session_id = %turn.session_id,
        phone = %turn.phone_number,
        "ussd callback received"
    );

    let reply = state.engine.process_turn(&turn).await;
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(reply.render())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web, App};
    use ledger_client::MemoryLedger;
    use session_store::MemorySessionStore;
    use user_directory::MemoryUserDirectory;
    use ussd_core::EngineConfig;
    use ussd_engine::UssdEngine;

    use super::*;

    fn test_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            engine: Arc::new(UssdEngine::new(
                Arc::new(MemorySessionStore::new()),
                Arc::new(MemoryUserDirectory::new()),
                Arc::new(MemoryLedger::new()),
                EngineConfig::default(),
            )),
        })
    }

    #[actix_web::test]
    async fn first_callback_renders_welcome_menu() {
        let app = test::init_service(
            App::new().app_data(test_state()).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/ussd")
            .set_form([
                ("sessionId", "ATUid_1"),
                ("serviceCode", "*384*23273#"),
                ("phoneNumber", "+2348078807660"),
                ("networkCode", "99999"),
                ("text", ""),
            ])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.starts_with("CON Welcome to YouSSD."));
        assert!(body.contains("1. Sign up"));
    }

    #[actix_web::test]
    async fn invalid_option_renders_terminal_body() {
        let app = test::init_service(
            App::new().app_data(test_state()).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/ussd")
            .set_form([
                ("sessionId", "ATUid_2"),
                ("serviceCode", "*384*23273#"),
                ("phoneNumber", "+2348078807660"),
                ("text", "9"),
            ])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert_eq!(body, "END Invalid input. Please try again.");
    }
}
