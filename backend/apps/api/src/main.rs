//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are handled by
//! `gateway::GatewayError` and the kernel error envelope.

use std::env;
use std::net::SocketAddr;

use gateway::{GatewayConfig, SupabaseConfig, SupabaseProvider, gateway_router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Identity provider connection; the handle is built once here and
    // injected into the handlers through router state.
    let project_url =
        env::var("SUPABASE_URL").expect("SUPABASE_URL must be set in environment");
    let api_key =
        env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set in environment");

    let provider = SupabaseProvider::new(SupabaseConfig {
        project_url,
        api_key,
    });

    let config = match env::var("SERVICE_NAME") {
        Ok(name) => GatewayConfig::with_service_name(name),
        Err(_) => GatewayConfig::default(),
    };

    tracing::info!(service = %config.service_name, "Identity provider client ready");

    // CORS: the gateway accepts cross-origin requests from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = gateway_router(provider, config)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
