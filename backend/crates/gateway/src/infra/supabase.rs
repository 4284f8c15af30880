//! Supabase Provider
//!
//! Implements the provider traits against Supabase's REST surface: the
//! GoTrue auth API for sign-up/sign-in and PostgREST for the profile
//! mirror. One instance is built at startup and shared by all handlers.
//!
//! No retries and no timeouts beyond reqwest defaults; a single outbound
//! call is attempted per operation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::credentials::Credentials;
use crate::domain::identity::{AuthenticatedUser, Profile, SignedInIdentity};
use crate::domain::provider::{IdentityProvider, ProfileMirror};
use crate::error::{GatewayError, GatewayResult};

/// Connection settings for the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub project_url: String,
    /// Anon API key; sent as `apikey` on every request
    pub api_key: String,
}

/// Shared Supabase client
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct SupabaseProvider {
    http: reqwest::Client,
    config: Arc<SupabaseConfig>,
}

impl SupabaseProvider {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.project_url.trim_end_matches('/'), path)
    }

    /// Turn a non-success upstream response into a provider rejection
    ///
    /// GoTrue and PostgREST disagree on the error field name, so the
    /// candidates are tried in order before falling back to the status.
    async fn provider_error(response: reqwest::Response) -> GatewayError {
        let status = response.status();
        let message = match response.json::<ErrorPayload>().await {
            Ok(payload) => payload.message(),
            Err(_) => None,
        };

        GatewayError::Provider(
            message.unwrap_or_else(|| format!("identity provider returned status {status}")),
        )
    }
}

impl IdentityProvider for SupabaseProvider {
    async fn sign_up(&self, credentials: &Credentials) -> GatewayResult<()> {
        let response = self
            .http
            .post(self.endpoint("/auth/v1/signup"))
            .header("apikey", &self.config.api_key)
            .json(&SignUpPayload {
                email: credentials.email(),
                password: credentials.password(),
                data: SignUpMetadata {
                    full_name: credentials.full_name(),
                },
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<SignedInIdentity> {
        let response = self
            .http
            .post(self.endpoint("/auth/v1/token?grant_type=password"))
            .header("apikey", &self.config.api_key)
            .json(&PasswordGrantPayload { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let token: TokenResponse = response.json().await?;
        let user = token.user.ok_or_else(|| {
            GatewayError::Internal("sign-in response did not include a user".to_string())
        })?;

        Ok(SignedInIdentity {
            user: AuthenticatedUser {
                id: user.id,
                email: user.email,
                full_name: user.user_metadata.full_name,
            },
            access_token: token.access_token,
        })
    }
}

impl ProfileMirror for SupabaseProvider {
    async fn upsert_profile(&self, profile: &Profile) -> GatewayResult<()> {
        let response = self
            .http
            .post(self.endpoint("/rest/v1/profiles"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "resolution=merge-duplicates")
            .json(&ProfileRow {
                id: &profile.id,
                email: &profile.email,
                full_name: profile.full_name.as_deref(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        Ok(())
    }
}

// ============================================================================
// Wire payloads
// ============================================================================

#[derive(Serialize)]
struct SignUpPayload<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: Option<&'a str>,
}

#[derive(Serialize)]
struct PasswordGrantPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    user: Option<UserPayload>,
}

#[derive(Deserialize)]
struct UserPayload {
    id: String,
    email: String,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Deserialize, Default)]
struct UserMetadata {
    full_name: Option<String>,
}

#[derive(Serialize)]
struct ProfileRow<'a> {
    id: &'a str,
    email: &'a str,
    full_name: Option<&'a str>,
}

/// Error body variants across GoTrue and PostgREST versions
#[derive(Deserialize)]
struct ErrorPayload {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorPayload {
    fn message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn provider(server: &MockServer) -> SupabaseProvider {
        SupabaseProvider::new(SupabaseConfig {
            project_url: server.base_url(),
            api_key: "anon-key".to_string(),
        })
    }

    fn credentials(full_name: Option<&str>) -> Credentials {
        Credentials::from_request(
            Some("a@b.com".to_string()),
            Some("secret".to_string()),
            full_name.map(String::from),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_sign_up_posts_credentials_and_metadata() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/v1/signup")
                    .header("apikey", "anon-key")
                    .json_body(json!({
                        "email": "a@b.com",
                        "password": "secret",
                        "data": {"full_name": "Ada"}
                    }));
                then.status(200)
                    .json_body(json!({"id": "u1", "email": "a@b.com"}));
            })
            .await;

        let result = provider(&server).sign_up(&credentials(Some("Ada"))).await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_sign_up_relays_provider_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/v1/signup");
                then.status(422)
                    .json_body(json!({"msg": "User already registered"}));
            })
            .await;

        let err = provider(&server)
            .sign_up(&credentials(None))
            .await
            .unwrap_err();

        match err {
            GatewayError::Provider(msg) => assert_eq!(msg, "User already registered"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/v1/token")
                    .query_param("grant_type", "password")
                    .header("apikey", "anon-key")
                    .json_body(json!({"email": "a@b.com", "password": "x"}));
                then.status(200).json_body(json!({
                    "access_token": "tok",
                    "user": {
                        "id": "u1",
                        "email": "a@b.com",
                        "user_metadata": {"full_name": "Ada"}
                    }
                }));
            })
            .await;

        let identity = provider(&server).sign_in("a@b.com", "x").await.unwrap();

        assert_eq!(identity.user.id, "u1");
        assert_eq!(identity.user.email, "a@b.com");
        assert_eq!(identity.user.full_name.as_deref(), Some("Ada"));
        assert_eq!(identity.access_token.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_sign_in_token_may_be_absent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/v1/token");
                then.status(200)
                    .json_body(json!({"user": {"id": "u1", "email": "a@b.com"}}));
            })
            .await;

        let identity = provider(&server).sign_in("a@b.com", "x").await.unwrap();

        assert_eq!(identity.user.id, "u1");
        assert!(identity.access_token.is_none());
    }

    #[tokio::test]
    async fn test_sign_in_rejection_uses_error_description() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/v1/token");
                then.status(400).json_body(json!({
                    "error": "invalid_grant",
                    "error_description": "Invalid login credentials"
                }));
            })
            .await;

        let err = provider(&server).sign_in("a@b.com", "bad").await.unwrap_err();

        match err {
            GatewayError::Provider(msg) => assert_eq!(msg, "Invalid login credentials"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sign_in_missing_user_is_internal() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/v1/token");
                then.status(200).json_body(json!({"access_token": "tok"}));
            })
            .await;

        let err = provider(&server).sign_in("a@b.com", "x").await.unwrap_err();
        assert!(matches!(err, GatewayError::Internal(_)));
    }

    #[tokio::test]
    async fn test_upsert_profile_merges_duplicates() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/rest/v1/profiles")
                    .header("apikey", "anon-key")
                    .header("authorization", "Bearer anon-key")
                    .header("prefer", "resolution=merge-duplicates")
                    .json_body(json!({
                        "id": "u1",
                        "email": "a@b.com",
                        "full_name": null
                    }));
                then.status(201).json_body(json!([]));
            })
            .await;

        let profile = Profile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            full_name: None,
        };
        let result = provider(&server).upsert_profile(&profile).await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upsert_profile_failure_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/profiles");
                then.status(404)
                    .json_body(json!({"message": "relation \"profiles\" does not exist"}));
            })
            .await;

        let profile = Profile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            full_name: None,
        };
        let err = provider(&server).upsert_profile(&profile).await.unwrap_err();
        assert!(matches!(err, GatewayError::Provider(_)));
    }
}
