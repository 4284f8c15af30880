//! Identity Types
//!
//! Shapes produced by the identity provider and passed through to the
//! caller. The gateway defines no invariants of its own here - ids and
//! tokens are opaque strings owned by the provider.

/// Identity attributes returned by the provider on sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Provider-issued user id
    pub id: String,
    /// Email the account is registered under
    pub email: String,
    /// Display name from the provider's user metadata
    pub full_name: Option<String>,
}

/// Result of a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInIdentity {
    pub user: AuthenticatedUser,
    /// Opaque access token; the provider may omit it
    pub access_token: Option<String>,
}

/// Profile mirror record upserted on login
///
/// The record's schema and invariants are owned by the external store;
/// the gateway only issues the upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<&AuthenticatedUser> for Profile {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}
