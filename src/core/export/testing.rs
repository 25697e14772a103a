//! In-memory collaborators for export tests

use crate::adapters::legalstudio::{
    BearerToken, ClientCredentials, DocumentFetcher, DocumentLister, OrganizationLister,
    TokenProvider,
};
use crate::domain::{
    AuthError, DocumentDescriptor, DocumentId, DocumentPayload, FetchError, Organization,
    OrganizationId,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Token provider that either always succeeds or always rejects
#[derive(Default)]
pub struct FakeTokenProvider {
    reject: bool,
    calls: AtomicUsize,
}

impl FakeTokenProvider {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for FakeTokenProvider {
    async fn acquire(&self, _credentials: &ClientCredentials) -> Result<BearerToken, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject {
            Err(AuthError::Rejected {
                status: 401,
                message: "invalid_client".to_string(),
            })
        } else {
            Ok(BearerToken::new("fake-token"))
        }
    }
}

/// Organization and document listings keyed by organization id
#[derive(Default)]
pub struct FakeDirectory {
    organizations: Option<Vec<Organization>>,
    documents: HashMap<i64, Option<Vec<DocumentDescriptor>>>,
    organization_calls: AtomicUsize,
    document_calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self {
            organizations: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Organization listing fails
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_organization(
        mut self,
        id: i64,
        name: &str,
        documents: Vec<DocumentDescriptor>,
    ) -> Self {
        self.organizations
            .get_or_insert_with(Vec::new)
            .push(Organization::new(id, name));
        self.documents.insert(id, Some(documents));
        self
    }

    /// Organization whose document listing fails
    pub fn with_broken_organization(mut self, id: i64, name: &str) -> Self {
        self.organizations
            .get_or_insert_with(Vec::new)
            .push(Organization::new(id, name));
        self.documents.insert(id, None);
        self
    }

    pub fn organization_calls(&self) -> usize {
        self.organization_calls.load(Ordering::SeqCst)
    }

    pub fn document_calls(&self) -> usize {
        self.document_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrganizationLister for FakeDirectory {
    async fn list_organizations(
        &self,
        _token: &BearerToken,
    ) -> Result<Vec<Organization>, FetchError> {
        self.organization_calls.fetch_add(1, Ordering::SeqCst);
        self.organizations.clone().ok_or(FetchError::ServerError {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}

#[async_trait]
impl DocumentLister for FakeDirectory {
    async fn list_documents(
        &self,
        organization_id: OrganizationId,
        _token: &BearerToken,
    ) -> Result<Vec<DocumentDescriptor>, FetchError> {
        self.document_calls.fetch_add(1, Ordering::SeqCst);
        match self.documents.get(&organization_id.get()) {
            Some(Some(documents)) => Ok(documents.clone()),
            Some(None) => Err(FetchError::ServerError {
                status: 500,
                message: "listing failed".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

/// Document contents keyed by (organization id, document id)
#[derive(Default)]
pub struct FakeFetcher {
    documents: HashMap<(i64, i64), Option<(String, Vec<u8>)>>,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(
        mut self,
        organization_id: i64,
        document_id: i64,
        filename: &str,
        content: &[u8],
    ) -> Self {
        self.documents.insert(
            (organization_id, document_id),
            Some((filename.to_string(), content.to_vec())),
        );
        self
    }

    pub fn with_failure(mut self, organization_id: i64, document_id: i64) -> Self {
        self.documents.insert((organization_id, document_id), None);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentFetcher for FakeFetcher {
    async fn fetch_document(
        &self,
        organization_id: OrganizationId,
        document_id: DocumentId,
        _token: &BearerToken,
    ) -> Result<DocumentPayload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.documents.get(&(organization_id.get(), document_id.get())) {
            Some(Some((filename, content))) => {
                Ok(DocumentPayload::new(content.clone(), filename.clone()))
            }
            Some(None) => Err(FetchError::ServerError {
                status: 500,
                message: "fetch failed".to_string(),
            }),
            None => Err(FetchError::ClientError {
                status: 404,
                message: "not found".to_string(),
            }),
        }
    }
}

/// File sink that rejects the first write going past `budget` bytes
///
/// Later writes pass through, so the container can still be closed.
pub struct CappedFile {
    inner: File,
    budget: u64,
    tripped: bool,
}

impl CappedFile {
    pub fn create(path: &Path, budget: u64) -> Self {
        Self {
            inner: File::create(path).unwrap(),
            budget,
            tripped: false,
        }
    }
}

impl Write for CappedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.tripped && buf.len() as u64 > self.budget {
            self.tripped = true;
            return Err(io::Error::new(io::ErrorKind::Other, "File too large"));
        }
        self.budget = self.budget.saturating_sub(buf.len() as u64);
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for CappedFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Sorted entry names of a ZIP file
pub fn archive_entries(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}
