//! Gateway Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::GatewayConfig;
use crate::domain::provider::{IdentityProvider, ProfileMirror};
use crate::infra::supabase::SupabaseProvider;
use crate::presentation::handlers::{self, GatewayState};

/// Create the gateway router with the Supabase provider
pub fn gateway_router(provider: SupabaseProvider, config: GatewayConfig) -> Router {
    gateway_router_generic(provider, config)
}

/// Create a gateway router for any provider implementation
pub fn gateway_router_generic<C>(provider: C, config: GatewayConfig) -> Router
where
    C: IdentityProvider + ProfileMirror + Clone + Send + Sync + 'static,
{
    let state = GatewayState {
        provider: Arc::new(provider),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::health::<C>))
        .route("/auth/register", post(handlers::register::<C>))
        .route("/auth/login", post(handlers::login::<C>))
        .with_state(state)
}
