use axum::{
    routing::{get, post},
    Router,
};
use jd_intake_backend::{
    config::{get_config, init_config},
    middleware::{cors::permissive_cors, rate_limit},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();

    let records_api = Router::new()
        .route(
            "/records",
            get(routes::jd::list_records).post(routes::jd::create_record),
        )
        .route("/records/stats", get(routes::jd::record_stats))
        .route("/records/aging-refresh", post(routes::jd::refresh_aging))
        .route("/records/scan", post(routes::jd::scan_record_text))
        .route(
            "/records/:id",
            get(routes::jd::get_record)
                .put(routes::jd::update_record)
                .delete(routes::jd::delete_record),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.api_rps),
            rate_limit::rps_middleware,
        ));

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .merge(records_api)
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
