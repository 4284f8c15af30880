//! Application Configuration
//!
//! Configuration for the gateway application layer.

/// Gateway application configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Service name reported by the health probe
    pub service_name: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service_name: "auth-gateway".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Create config with an explicit service name
    pub fn with_service_name(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}
