//! Records service HTTP client
//!
//! Implements [`OrganizationLister`], [`DocumentLister`] and
//! [`DocumentFetcher`] over the records REST API. Each method is a single
//! request; transport and status failures come back as [`FetchError`].

use super::models::{CompanyItem, DocumentContent, DocumentItem};
use super::traits::{BearerToken, DocumentFetcher, DocumentLister, OrganizationLister};
use crate::config::ApiConfig;
use crate::domain::{
    CasefileError, DocumentDescriptor, DocumentId, DocumentPayload, FetchError, Organization,
    OrganizationId, Result,
};
use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the records API
pub struct LegalStudioClient {
    /// Base URL without a trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,
}

impl LegalStudioClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use casefile::adapters::legalstudio::LegalStudioClient;
    /// use casefile::config::ApiConfig;
    ///
    /// # fn example() -> casefile::domain::Result<()> {
    /// let client = LegalStudioClient::new(&ApiConfig::default())?;
    /// assert_eq!(client.base_url(), "https://app.legalstudio.be/api/v1");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            tracing::warn!(
                base_url = %config.base_url,
                "TLS certificate verification is DISABLED for the records service. \
                This configuration is insecure and should only be used against test servers."
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| {
            CasefileError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL of the records API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue an authenticated GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &BearerToken,
    ) -> std::result::Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::trace!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, token.header_value())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(status.as_u16(), body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl OrganizationLister for LegalStudioClient {
    async fn list_organizations(
        &self,
        token: &BearerToken,
    ) -> std::result::Result<Vec<Organization>, FetchError> {
        let companies: Option<Vec<CompanyItem>> = self.get_json("/companies", token).await?;

        Ok(companies
            .unwrap_or_default()
            .into_iter()
            .map(Organization::from)
            .collect())
    }
}

#[async_trait]
impl DocumentLister for LegalStudioClient {
    async fn list_documents(
        &self,
        organization_id: OrganizationId,
        token: &BearerToken,
    ) -> std::result::Result<Vec<DocumentDescriptor>, FetchError> {
        // The service answers `null` for an organization without documents
        let documents: Option<Vec<DocumentItem>> = self
            .get_json(&format!("/companies/{organization_id}/documents"), token)
            .await?;

        Ok(documents
            .unwrap_or_default()
            .into_iter()
            .map(DocumentDescriptor::from)
            .collect())
    }
}

#[async_trait]
impl DocumentFetcher for LegalStudioClient {
    async fn fetch_document(
        &self,
        organization_id: OrganizationId,
        document_id: DocumentId,
        token: &BearerToken,
    ) -> std::result::Result<DocumentPayload, FetchError> {
        let body: DocumentContent = self
            .get_json(
                &format!("/companies/{organization_id}/documents/{document_id}"),
                token,
            )
            .await?;

        body.into_payload()
    }
}
