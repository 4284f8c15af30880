//! Domain Layer
//!
//! Contains the request-scoped value objects and the provider traits.

pub mod credentials;
pub mod identity;
pub mod provider;

// Re-exports
pub use credentials::Credentials;
pub use identity::{AuthenticatedUser, Profile, SignedInIdentity};
pub use provider::{IdentityProvider, ProfileMirror};
