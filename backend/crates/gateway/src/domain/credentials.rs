//! Credentials Value Object
//!
//! Typed result of the request-body schema check. Only presence is
//! validated here - email deliverability and password policy are the
//! identity provider's job.

use thiserror::Error;

/// Both required fields must be present and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("email and password required")]
pub struct MissingCredentials;

/// Validated sign-up / sign-in credentials
///
/// Exists only for the duration of a single request and is never stored.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: String,
    full_name: Option<String>,
}

impl Credentials {
    /// Build credentials from the optional fields of a request body
    ///
    /// ## Returns
    /// * `Ok(Credentials)` - email and password are present and non-empty
    /// * `Err(MissingCredentials)` - either required field is absent or empty
    pub fn from_request(
        email: Option<String>,
        password: Option<String>,
        full_name: Option<String>,
    ) -> Result<Self, MissingCredentials> {
        let email = email.filter(|e| !e.is_empty()).ok_or(MissingCredentials)?;
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(MissingCredentials)?;

        Ok(Self {
            email,
            password,
            full_name: full_name.filter(|n| !n.is_empty()),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let creds = Credentials::from_request(
            Some("a@b.com".into()),
            Some("secret".into()),
            Some("Ada".into()),
        )
        .unwrap();
        assert_eq!(creds.email(), "a@b.com");
        assert_eq!(creds.password(), "secret");
        assert_eq!(creds.full_name(), Some("Ada"));
    }

    #[test]
    fn test_full_name_optional() {
        let creds =
            Credentials::from_request(Some("a@b.com".into()), Some("secret".into()), None)
                .unwrap();
        assert_eq!(creds.full_name(), None);
    }

    #[test]
    fn test_missing_email() {
        let result = Credentials::from_request(None, Some("secret".into()), None);
        assert_eq!(result.unwrap_err(), MissingCredentials);
    }

    #[test]
    fn test_missing_password() {
        let result = Credentials::from_request(Some("a@b.com".into()), None, None);
        assert_eq!(result.unwrap_err(), MissingCredentials);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let result = Credentials::from_request(Some("".into()), Some("secret".into()), None);
        assert!(result.is_err());

        let result = Credentials::from_request(Some("a@b.com".into()), Some("".into()), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            MissingCredentials.to_string(),
            "email and password required"
        );
    }
}
