//! Application Layer
//!
//! Use cases and application configuration.

pub mod config;
pub mod login;
pub mod register;

// Re-exports
pub use config::GatewayConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
