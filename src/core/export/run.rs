//! Export run - top-level orchestrator for one export pass
//!
//! This module sequences the remote collaborators and the
//! [`ArchiveBuilder`](super::archive::ArchiveBuilder): acquire a token, list
//! organizations, open the archive, walk every organization and its documents,
//! then close the archive and report.

use crate::adapters::legalstudio::{
    BearerToken, ClientCredentials, ClientCredentialsProvider, DocumentFetcher, DocumentLister,
    LegalStudioClient, OrganizationLister, TokenProvider,
};
use crate::config::CasefileConfig;
use crate::core::export::archive::ArchiveBuilder;
use crate::core::export::outcome::ExportOutcome;
use crate::domain::{CasefileError, Organization, Result};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Timestamp format used in archive names
const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// One export pass over every organization visible to the configured client
pub struct ExportRun {
    config: CasefileConfig,
    token_provider: Arc<dyn TokenProvider>,
    organization_lister: Arc<dyn OrganizationLister>,
    document_lister: Arc<dyn DocumentLister>,
    document_fetcher: Arc<dyn DocumentFetcher>,
}

impl ExportRun {
    /// Create a run from explicit collaborators
    pub fn new(
        config: CasefileConfig,
        token_provider: Arc<dyn TokenProvider>,
        organization_lister: Arc<dyn OrganizationLister>,
        document_lister: Arc<dyn DocumentLister>,
        document_fetcher: Arc<dyn DocumentFetcher>,
    ) -> Self {
        Self {
            config,
            token_provider,
            organization_lister,
            document_lister,
            document_fetcher,
        }
    }

    /// Create a run backed by the records service HTTP client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an HTTP client cannot be built.
    pub fn from_config(config: CasefileConfig) -> Result<Self> {
        let token_provider = Arc::new(ClientCredentialsProvider::new(
            config.api.timeout_seconds,
            config.api.tls_verify,
        )?);
        let client = Arc::new(LegalStudioClient::new(&config.api)?);

        Ok(Self::new(
            config,
            token_provider,
            client.clone(),
            client.clone(),
            client,
        ))
    }

    /// Archive path for a run started at `started_at`
    pub fn archive_path(&self, started_at: DateTime<Local>) -> PathBuf {
        PathBuf::from(&self.config.export.output_dir).join(format!(
            "{}_documents_{}.zip",
            self.config.application.client,
            started_at.format(ARCHIVE_TIMESTAMP_FORMAT)
        ))
    }

    /// Execute the export
    ///
    /// This is the main entry point for the export process. It:
    /// 1. Acquires a bearer token
    /// 2. Lists organizations
    /// 3. Opens the archive
    /// 4. For each organization, lists its documents and records them
    /// 5. Closes the archive and logs the summary
    ///
    /// # Errors
    ///
    /// Token, organization listing and archive failures abort the run. Failures
    /// scoped to one organization or one document are recorded in the returned
    /// outcome instead.
    pub async fn run(&self) -> Result<ExportOutcome> {
        let started_at = Local::now();
        let start_time = Instant::now();

        tracing::info!(
            client = %self.config.application.client,
            "Starting document export"
        );

        let credentials = ClientCredentials::from(&self.config.auth);
        let token = self
            .token_provider
            .acquire(&credentials)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to acquire access token");
                CasefileError::from(e)
            })?;

        let organizations = self
            .organization_lister
            .list_organizations(&token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to list organizations");
                CasefileError::from(e)
            })?;

        if organizations.is_empty() {
            tracing::warn!("No organizations returned; the archive will be empty");
        } else {
            tracing::info!(count = organizations.len(), "Found organizations");
        }

        let mut outcome = ExportOutcome::new(&self.config.application.client, started_at);
        outcome.organizations_total = organizations.len();

        let mut builder = ArchiveBuilder::open(
            &self.archive_path(started_at),
            self.config.export.compression,
            outcome,
        )?;

        if let Err(e) = self
            .process_organizations(&mut builder, &organizations, &token)
            .await
        {
            tracing::error!(error = %e, "Export aborted");
            builder.abandon();
            return Err(e);
        }

        let outcome = builder.finalize()?.with_duration(start_time.elapsed());
        outcome.log_summary();

        Ok(outcome)
    }

    /// Walk organizations in listing order
    async fn process_organizations(
        &self,
        builder: &mut ArchiveBuilder,
        organizations: &[Organization],
        token: &BearerToken,
    ) -> Result<()> {
        for organization in organizations {
            let documents = match self
                .document_lister
                .list_documents(organization.id, token)
                .await
            {
                Ok(documents) => documents,
                Err(e) => {
                    tracing::warn!(
                        organization_id = %organization.id,
                        organization = %organization.name,
                        error = %e,
                        "Failed to list documents, skipping organization"
                    );
                    builder.record_skipped(organization, e.to_string());
                    continue;
                }
            };

            if documents.is_empty() {
                builder.record_empty(organization);
                continue;
            }

            let result = builder
                .record_organization(
                    organization,
                    &documents,
                    token,
                    self.document_fetcher.as_ref(),
                )
                .await?;

            tracing::info!(
                organization_id = %organization.id,
                organization = %organization.name,
                attempted = result.attempted(),
                saved = result.saved,
                failed = result.failed,
                "Processed organization"
            );
        }

        Ok(())
    }
}
