//! Remote service contracts
//!
//! This module defines the four collaborators an export depends on. Each is a
//! trait so the export can run against the real HTTP service or against
//! in-memory fakes.
//!
//! - [`TokenProvider`] - exchanges client credentials for a bearer token
//! - [`OrganizationLister`] - lists every organization visible to the token
//! - [`DocumentLister`] - lists the documents owned by one organization
//! - [`DocumentFetcher`] - retrieves and decodes one document

use crate::config::{blank_credential_fields, secret_string, AuthConfig, SecretString};
use crate::domain::{
    AuthError, DocumentDescriptor, DocumentId, DocumentPayload, FetchError, Organization,
    OrganizationId,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::time::Duration;

/// Client credentials for the token exchange
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    /// Token endpoint URL
    pub endpoint: String,

    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: SecretString,

    /// Audience the token is requested for
    pub audience: String,
}

impl ClientCredentials {
    /// Names of the credential fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        blank_credential_fields(
            &self.endpoint,
            &self.client_id,
            &self.client_secret,
            &self.audience,
        )
    }
}

impl From<&AuthConfig> for ClientCredentials {
    fn from(config: &AuthConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            audience: config.audience.clone(),
        }
    }
}

/// Short-lived credential attached to every authenticated call
///
/// The token is acquired once per run and never refreshed.
#[derive(Debug, Clone)]
pub struct BearerToken {
    value: SecretString,
    expires_in: Option<Duration>,
}

impl BearerToken {
    /// Creates a token without a known validity window
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: secret_string(value.into()),
            expires_in: None,
        }
    }

    /// Sets the validity window reported by the authorization server
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    /// Validity window, if the server reported one
    pub fn expires_in(&self) -> Option<Duration> {
        self.expires_in
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.value.expose_secret().as_str())
    }
}

/// Exchanges client credentials for a bearer token
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Acquire a token in a single call
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when a credential is missing, when the server
    /// answers with a non-2xx status, or when the body has no `access_token`.
    async fn acquire(&self, credentials: &ClientCredentials) -> Result<BearerToken, AuthError>;
}

/// Lists the organizations visible to the authenticated principal
#[async_trait]
pub trait OrganizationLister: Send + Sync {
    /// Return the full set of organizations in one call
    async fn list_organizations(
        &self,
        token: &BearerToken,
    ) -> Result<Vec<Organization>, FetchError>;
}

/// Lists the documents owned by one organization
#[async_trait]
pub trait DocumentLister: Send + Sync {
    /// Return the organization's document descriptors
    ///
    /// An empty vector is a valid answer and is distinct from an error.
    async fn list_documents(
        &self,
        organization_id: OrganizationId,
        token: &BearerToken,
    ) -> Result<Vec<DocumentDescriptor>, FetchError>;
}

/// Retrieves the content of a single document
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch and decode one document
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport or status failures, and also when a
    /// well-formed response lacks the content or filename field.
    async fn fetch_document(
        &self,
        organization_id: OrganizationId,
        document_id: DocumentId,
        token: &BearerToken,
    ) -> Result<DocumentPayload, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_header() {
        let token = BearerToken::new("abc.def.ghi");
        assert_eq!(token.header_value(), "Bearer abc.def.ghi");
        assert!(token.expires_in().is_none());
    }

    #[test]
    fn test_bearer_token_debug_redacted() {
        let token = BearerToken::new("abc.def.ghi").with_expires_in(Duration::from_secs(3600));
        let debug = format!("{token:?}");
        assert!(!debug.contains("abc.def.ghi"));
        assert_eq!(token.expires_in(), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn test_credentials_from_config() {
        let config = AuthConfig {
            endpoint: "https://auth.example.com/oauth/token".to_string(),
            client_id: "client-123".to_string(),
            client_secret: secret_string(String::new()),
            audience: "https://api.example.com".to_string(),
        };

        let credentials = ClientCredentials::from(&config);
        assert_eq!(credentials.client_id, "client-123");
        assert_eq!(credentials.missing_fields(), vec!["client_secret"]);
    }
}
