//! Provider Traits
//!
//! Interfaces to the external identity platform. Implementation is in the
//! infrastructure layer; use cases and tests depend only on these traits.

use crate::domain::credentials::Credentials;
use crate::domain::identity::{Profile, SignedInIdentity};
use crate::error::GatewayResult;

/// Identity provider trait (sign-up / sign-in)
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Create a new account with the provider
    ///
    /// The created identity is not reported back; the provider confirms
    /// the account out of band (email verification).
    async fn sign_up(&self, credentials: &Credentials) -> GatewayResult<()>;

    /// Authenticate with email and password
    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<SignedInIdentity>;
}

/// Profile mirror trait
///
/// Best-effort duplication of select identity attributes into an external
/// store. Callers that treat this as fire-and-forget must discard the
/// error themselves; the trait reports it.
#[trait_variant::make(ProfileMirror: Send)]
pub trait LocalProfileMirror {
    /// Insert or update the profile record keyed by the identity's id
    async fn upsert_profile(&self, profile: &Profile) -> GatewayResult<()>;
}
