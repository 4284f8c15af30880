//! Register Use Case
//!
//! Validates credentials and forwards them to the provider's sign-up.

use std::sync::Arc;

use crate::domain::credentials::Credentials;
use crate::domain::provider::IdentityProvider;
use crate::error::GatewayResult;

/// Register input
pub struct RegisterInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> RegisterUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Forward a sign-up request to the identity provider
    ///
    /// The created identity is not returned; callers only learn that the
    /// provider accepted the request.
    pub async fn execute(&self, input: RegisterInput) -> GatewayResult<()> {
        let credentials =
            Credentials::from_request(input.email, input.password, input.full_name)?;

        self.provider.sign_up(&credentials).await?;

        tracing::info!(email = %credentials.email(), "User registered with identity provider");

        Ok(())
    }
}
