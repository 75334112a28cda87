use dotenvy::dotenv;

use lectern::logging::init_logging;
use lectern::router::init_router;
use lectern::state::init_app_state;
use lectern_config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let _log_guard = init_logging();

    let state = init_app_state().await;
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server_config.bind_addr())
        .await
        .unwrap();

    tracing::info!("Server running on http://{}", server_config.bind_addr());
    tracing::info!(
        "API docs available at http://{}/scalar",
        server_config.bind_addr()
    );
    axum::serve(listener, app).await.unwrap();
}
