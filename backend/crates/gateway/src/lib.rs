//! Auth Gateway Module
//!
//! HTTP façade in front of a hosted identity provider. Clean Architecture
//! structure:
//! - `domain/` - credentials, identity types, provider traits
//! - `application/` - use cases and configuration
//! - `infra/` - Supabase client implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Behavior
//! - Health probe with a static liveness payload
//! - Register: validate credentials, forward to the provider's sign-up
//! - Login: validate credentials, forward to the provider's sign-in,
//!   best-effort mirror of the identity into a profile record
//!
//! The gateway owns no state; every request is independent and the
//! provider's contract is the source of truth.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use infra::supabase::{SupabaseConfig, SupabaseProvider};
pub use presentation::router::gateway_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
