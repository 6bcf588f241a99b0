use log::info;
use tower_http::cors::CorsLayer;

use invoice_web_server::{AppState, Config, router};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();
    env_logger::init();

    // Load and validate configuration
    let config = Config::from_env().map_err(|e| format!("Configuration error: {}", e))?;

    // Configure CORS to allow the browser UI's origin
    let frontend_origin_header = config
        .frontend_origin
        .parse::<axum::http::HeaderValue>()
        .map_err(|e| format!("Invalid FRONTEND_ORIGIN '{}': {}", config.frontend_origin, e))?;

    let cors = CorsLayer::new()
        .allow_origin(frontend_origin_header)
        .allow_methods([axum::http::Method::GET])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let bind_address = config.bind_address();
    let state = AppState::new(config);
    let app = router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", bind_address, e))?;

    info!("Server running on http://{}", bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
