use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use kenya_gov_gateway::config::AppConfig;
use kenya_gov_gateway::gateways::ecitizen::EcitizenGateway;
use kenya_gov_gateway::gateways::etims::EtimsGateway;
use kenya_gov_gateway::gateways::gavaconnect::GavaConnectGateway;
use kenya_gov_gateway::service::application_service::ApplicationService;
use kenya_gov_gateway::service::payment_service::PaymentService;
use kenya_gov_gateway::service::profile_service::ProfileService;
use kenya_gov_gateway::service::tax_service::TaxService;
use kenya_gov_gateway::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let ecitizen = Arc::new(EcitizenGateway::new(&cfg.ecitizen));
    let etims = Arc::new(EtimsGateway::new(&cfg.etims));
    let gavaconnect = Arc::new(GavaConnectGateway::new(&cfg.gavaconnect));

    let state = AppState {
        payment_service: PaymentService::new(ecitizen.clone()),
        tax_service: TaxService::new(etims),
        application_service: ApplicationService::new(ecitizen),
        profile_service: ProfileService::new(gavaconnect),
        api_key: cfg.api_key.clone(),
    };

    let gated = Router::new()
        .route(
            "/payments/initiate",
            post(kenya_gov_gateway::http::handlers::payments::initiate_payment),
        )
        .route(
            "/payments/etims",
            post(kenya_gov_gateway::http::handlers::payments::pay_etims_invoice),
        )
        .route(
            "/payments/status/:reference_number",
            get(kenya_gov_gateway::http::handlers::payments::payment_status),
        )
        .route(
            "/services",
            get(kenya_gov_gateway::http::handlers::services::list_services),
        )
        .route(
            "/services/integrated",
            get(kenya_gov_gateway::http::handlers::services::list_integrated_services),
        )
        .route(
            "/applications/submit",
            post(kenya_gov_gateway::http::handlers::applications::submit_application),
        )
        .route(
            "/applications/:application_id/status",
            get(kenya_gov_gateway::http::handlers::applications::application_status),
        )
        .route(
            "/tax/invoices",
            post(kenya_gov_gateway::http::handlers::tax::submit_invoice),
        )
        .route(
            "/tax/invoices/:invoice_id/status",
            get(kenya_gov_gateway::http::handlers::tax::invoice_status),
        )
        .route(
            "/tax/rates",
            get(kenya_gov_gateway::http::handlers::tax::tax_rates),
        )
        .route(
            "/tax/taxpayers/:tin",
            get(kenya_gov_gateway::http::handlers::tax::taxpayer_info),
        )
        .route(
            "/profiles/:user_id",
            get(kenya_gov_gateway::http::handlers::profiles::user_profile),
        )
        .layer(from_fn_with_state(
            cfg.api_key.clone(),
            kenya_gov_gateway::http::middleware::api_key::require_api_key,
        ));

    let app = Router::new()
        .route("/ops/health", get(kenya_gov_gateway::http::handlers::ops::health))
        .route("/ops/liveness", get(kenya_gov_gateway::http::handlers::ops::liveness))
        .merge(gated)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
