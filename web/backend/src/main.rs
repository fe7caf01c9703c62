use songwalk_web::create_router;
use songwalk_web::state::AppState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("songwalk_web=info,tower_http=info")),
        )
        .init();

    let app_state = AppState::from_env();
    if !app_state.table_path.exists() {
        error!(path = ?app_state.table_path, "similarity table not found, requests will fail until it exists");
    }

    info!(
        table = ?app_state.table_path,
        walk_steps = app_state.config.walk_steps,
        hubs = app_state.config.hubs.len(),
        "starting songwalk API"
    );

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let app = create_router(app_state);

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    info!("Server running on http://{}", bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
