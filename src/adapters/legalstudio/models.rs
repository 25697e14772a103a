//! Wire models for the records service and its authorization server
//!
//! The records API uses PascalCase JSON keys; these types stay private to the
//! adapter and are converted into domain models at the boundary.

use crate::domain::{DocumentDescriptor, DocumentPayload, FetchError, Organization};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

/// Form body for the client-credentials grant
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'a str,
    pub audience: &'a str,
}

/// Token endpoint response
///
/// `access_token` is optional here so that its absence can be reported as a
/// malformed response rather than a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub expires_in: Option<u64>,

    #[serde(default)]
    pub token_type: Option<String>,
}

/// One row of `GET /companies`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyItem {
    pub company_id: i64,
    pub company_name: String,
}

impl From<CompanyItem> for Organization {
    fn from(item: CompanyItem) -> Self {
        Organization::new(item.company_id, item.company_name)
    }
}

/// One row of `GET /companies/{id}/documents`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentItem {
    pub id: i64,

    #[serde(default)]
    pub filename: Option<String>,
}

impl From<DocumentItem> for DocumentDescriptor {
    fn from(item: DocumentItem) -> Self {
        DocumentDescriptor::new(item.id, item.filename.unwrap_or_default())
    }
}

/// Body of `GET /companies/{id}/documents/{doc}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentContent {
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub filename: Option<String>,
}

impl DocumentContent {
    /// Decodes the base64 content into a payload
    ///
    /// # Errors
    ///
    /// [`FetchError::MissingField`] if `Content` or `Filename` is absent,
    /// [`FetchError::Decode`] if the content is not valid base64.
    pub fn into_payload(self) -> Result<DocumentPayload, FetchError> {
        let content = self
            .content
            .ok_or_else(|| FetchError::MissingField("Content".to_string()))?;
        let filename = self
            .filename
            .ok_or_else(|| FetchError::MissingField("Filename".to_string()))?;

        // Some encoders wrap base64 at 76 columns
        let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(DocumentPayload::new(bytes, filename))
    }
}
