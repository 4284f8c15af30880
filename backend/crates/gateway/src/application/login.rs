//! Login Use Case
//!
//! Validates credentials, forwards them to the provider's sign-in, and
//! kicks off the best-effort profile mirror upsert.

use std::sync::Arc;

use crate::domain::credentials::Credentials;
use crate::domain::identity::{AuthenticatedUser, Profile};
use crate::domain::provider::{IdentityProvider, ProfileMirror};
use crate::error::GatewayResult;

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: AuthenticatedUser,
    /// Opaque access token; absent when the provider omits it
    pub access_token: Option<String>,
}

/// Login use case
pub struct LoginUseCase<P, M>
where
    P: IdentityProvider,
    M: ProfileMirror,
{
    provider: Arc<P>,
    mirror: Arc<M>,
}

impl<P, M> LoginUseCase<P, M>
where
    P: IdentityProvider,
    M: ProfileMirror + Send + Sync + 'static,
{
    pub fn new(provider: Arc<P>, mirror: Arc<M>) -> Self {
        Self { provider, mirror }
    }

    pub async fn execute(&self, input: LoginInput) -> GatewayResult<LoginOutput> {
        let credentials = Credentials::from_request(input.email, input.password, None)?;

        let identity = self
            .provider
            .sign_in(credentials.email(), credentials.password())
            .await?;

        // Detached, fire-and-forget: the login response does not depend on
        // this task, and its failure is logged and discarded. This leaves an
        // eventual-consistency gap between the provider's user record and
        // the profile mirror.
        let mirror = Arc::clone(&self.mirror);
        let profile = Profile::from(&identity.user);
        tokio::spawn(async move {
            if let Err(e) = mirror.upsert_profile(&profile).await {
                tracing::warn!(
                    error = %e,
                    user_id = %profile.id,
                    "Profile mirror upsert failed, login unaffected"
                );
            }
        });

        tracing::info!(user_id = %identity.user.id, "User signed in");

        Ok(LoginOutput {
            user: identity.user,
            access_token: identity.access_token,
        })
    }
}
