//! Client-credentials token provider
//!
//! Performs a single OAuth2 `client_credentials` exchange against the
//! configured token endpoint. There is no refresh and no retry: a failure here
//! ends the run.

use super::models::{TokenRequest, TokenResponse};
use super::traits::{BearerToken, ClientCredentials, TokenProvider};
use crate::domain::{AuthError, CasefileError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// HTTP implementation of [`TokenProvider`]
///
/// # Example
///
/// ```no_run
/// use casefile::adapters::legalstudio::{ClientCredentialsProvider, ClientCredentials, TokenProvider};
/// use casefile::config::secret_string;
///
/// # async fn example() -> casefile::domain::Result<()> {
/// let provider = ClientCredentialsProvider::new(30, true)?;
/// let credentials = ClientCredentials {
///     endpoint: "https://auth.example.com/oauth/token".to_string(),
///     client_id: "client-123".to_string(),
///     client_secret: secret_string("s3cret".to_string()),
///     audience: "https://api.example.com".to_string(),
/// };
/// let token = provider.acquire(&credentials).await?;
/// # Ok(())
/// # }
/// ```
pub struct ClientCredentialsProvider {
    client: Client,
}

impl ClientCredentialsProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(timeout_seconds: u64, tls_verify: bool) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !tls_verify {
            tracing::warn!(
                "TLS certificate verification is DISABLED for the authorization server. \
                This configuration is insecure and should only be used against test servers."
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| {
            CasefileError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl TokenProvider for ClientCredentialsProvider {
    async fn acquire(
        &self,
        credentials: &ClientCredentials,
    ) -> std::result::Result<BearerToken, AuthError> {
        let missing = credentials.missing_fields();
        if !missing.is_empty() {
            return Err(AuthError::MissingCredentials(missing.join(", ")));
        }

        tracing::debug!(
            endpoint = %credentials.endpoint,
            client_id = %credentials.client_id,
            audience = %credentials.audience,
            "Requesting access token"
        );

        let form = TokenRequest {
            client_id: &credentials.client_id,
            client_secret: credentials.client_secret.expose_secret().as_str(),
            grant_type: "client_credentials",
            audience: &credentials.audience,
        };

        let response = self
            .client
            .post(&credentials.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::ConnectionFailed(e.to_string()))?;
        let token: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        let access_token = token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AuthError::MalformedResponse("response has no access_token".to_string())
            })?;

        let mut bearer = BearerToken::new(access_token);
        if let Some(secs) = token.expires_in {
            bearer = bearer.with_expires_in(Duration::from_secs(secs));
        }

        tracing::info!(expires_in_secs = ?token.expires_in, "Access token acquired");
        Ok(bearer)
    }
}
